//! Density samples on the extraction lattice.
//!
//! The density function is evaluated exactly once per grid point. Both the
//! cell classification and the gradient normals read from this buffer.

use glam::Vec3;

use crate::constants::GridLayout;
use crate::density::Density;
use crate::normals::normalize_or_keep;
use crate::types::MinMaxAABB;

/// Density values for every point of a `resolution³` lattice.
#[derive(Clone, Debug)]
pub struct SampleGrid {
  layout: GridLayout,
  origin: Vec3,
  cell_size: Vec3,
  values: Vec<f32>,
}

impl SampleGrid {
  /// Evaluate `density` at every grid point of `bounds`.
  ///
  /// `resolution` must be at least 2.
  #[cfg_attr(feature = "tracing", tracing::instrument(skip_all, name = "marching_cubes::sample_grid"))]
  pub fn sample<D: Density + ?Sized>(density: &D, resolution: usize, bounds: MinMaxAABB) -> Self {
    let layout = GridLayout::new(resolution);
    let cell_size = bounds.size() / (resolution.saturating_sub(1).max(1)) as f32;
    let mut values = Vec::with_capacity(layout.sample_count());

    // Index order matches `GridLayout::coord_to_index` (Z innermost)
    for x in 0..resolution {
      for y in 0..resolution {
        for z in 0..resolution {
          let p = bounds.min + Vec3::new(x as f32, y as f32, z as f32) * cell_size;
          values.push(density.density(p.x, p.y, p.z));
        }
      }
    }

    Self {
      layout,
      origin: bounds.min,
      cell_size,
      values,
    }
  }

  #[inline]
  pub fn layout(&self) -> GridLayout {
    self.layout
  }

  #[inline]
  pub fn cell_size(&self) -> Vec3 {
    self.cell_size
  }

  #[inline]
  pub fn values(&self) -> &[f32] {
    &self.values
  }

  /// Density at a flat grid index.
  #[inline]
  pub fn value(&self, index: usize) -> f32 {
    self.values[index]
  }

  /// World position of grid point `(x, y, z)`.
  #[inline]
  pub fn position(&self, x: usize, y: usize, z: usize) -> Vec3 {
    self.origin + Vec3::new(x as f32, y as f32, z as f32) * self.cell_size
  }

  /// World position of a flat grid index.
  #[inline]
  pub fn position_of(&self, index: usize) -> Vec3 {
    let (x, y, z) = self.layout.index_to_coord(index);
    self.position(x, y, z)
  }

  /// The 8 corner densities of the cell at `(x, y, z)`, in corner order.
  #[inline]
  pub fn cell_samples(&self, x: usize, y: usize, z: usize) -> [f32; 8] {
    std::array::from_fn(|corner| self.values[self.layout.corner_index(x, y, z, corner)])
  }

  /// Gradient of the sampled density at a grid point, normalized.
  ///
  /// Central differences in the interior, one-sided differences on the
  /// faces of the grid. A vanishing gradient is returned as is.
  pub fn gradient_normal(&self, x: usize, y: usize, z: usize) -> Vec3 {
    let last = self.layout.resolution() - 1;
    let coord = [x, y, z];
    let mut gradient = [0.0f32; 3];

    for axis in 0..3 {
      let lo = coord[axis].saturating_sub(1);
      let hi = (coord[axis] + 1).min(last);
      let span = (hi - lo) as f32 * self.cell_size[axis];
      if span <= 0.0 {
        continue;
      }

      let mut lo_coord = coord;
      let mut hi_coord = coord;
      lo_coord[axis] = lo;
      hi_coord[axis] = hi;

      let v_lo = self.values[self.layout.coord_to_index(lo_coord[0], lo_coord[1], lo_coord[2])];
      let v_hi = self.values[self.layout.coord_to_index(hi_coord[0], hi_coord[1], hi_coord[2])];
      gradient[axis] = (v_hi - v_lo) / span;
    }

    normalize_or_keep(Vec3::from_array(gradient))
  }

  /// Gradient normals for every grid point, indexed like `values()`.
  #[cfg_attr(feature = "tracing", tracing::instrument(skip_all, name = "marching_cubes::gradient_normals"))]
  pub fn gradient_normals(&self) -> Vec<Vec3> {
    (0..self.values.len())
      .map(|index| {
        let (x, y, z) = self.layout.index_to_coord(index);
        self.gradient_normal(x, y, z)
      })
      .collect()
  }
}

#[cfg(test)]
#[path = "sample_grid_test.rs"]
mod sample_grid_test;
