//! Core data types shared by extraction and the half-edge mesh.

use glam::Vec3;

use crate::constants::{DEFAULT_EPSILON, DEFAULT_RESOLUTION, MIN_RESOLUTION};
use crate::error::{MeshError, Result};

/// Normal computation mode for extraction.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum NormalMode {
  /// Emit positions and triangles only.
  #[default]
  None,

  /// Central-difference gradient of the sampled grid, interpolated along
  /// each crossed edge and renormalized.
  Gradient,

  /// Angle-weighted average of the welded triangle normals.
  Geometry,
}

/// Axis-aligned bounding box.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MinMaxAABB {
  pub min: Vec3,
  pub max: Vec3,
}

impl MinMaxAABB {
  /// Create AABB with inverted extents (ready for encapsulation).
  pub fn empty() -> Self {
    Self {
      min: Vec3::splat(f32::INFINITY),
      max: Vec3::splat(f32::NEG_INFINITY),
    }
  }

  /// Create AABB from min/max corners.
  pub fn new(min: impl Into<Vec3>, max: impl Into<Vec3>) -> Self {
    Self {
      min: min.into(),
      max: max.into(),
    }
  }

  /// Cube `[-half_extent, half_extent]³` centered at the origin.
  pub fn centered_cube(half_extent: f32) -> Self {
    Self::new(Vec3::splat(-half_extent), Vec3::splat(half_extent))
  }

  /// Expand AABB to include a point.
  #[inline]
  pub fn encapsulate(&mut self, point: Vec3) {
    self.min = self.min.min(point);
    self.max = self.max.max(point);
  }

  /// Check if AABB is valid (min <= max on all axes).
  pub fn is_valid(&self) -> bool {
    self.min.cmple(self.max).all()
  }

  /// Check if AABB has a strictly positive extent on every axis.
  pub fn has_volume(&self) -> bool {
    self.min.cmplt(self.max).all() && self.min.is_finite() && self.max.is_finite()
  }

  pub fn size(&self) -> Vec3 {
    self.max - self.min
  }
}

impl Default for MinMaxAABB {
  fn default() -> Self {
    Self::empty()
  }
}

/// Configuration for marching cubes extraction.
#[derive(Clone, Debug)]
pub struct ExtractConfig {
  /// Grid points per axis; the grid has `resolution - 1` cells per axis.
  pub resolution: usize,

  /// Sampled region.
  pub bounds: MinMaxAABB,

  /// Corner bit is set when `density > iso_level`.
  pub iso_level: f32,

  /// Normal computation mode.
  pub normal_mode: NormalMode,

  /// Density differences below this fall back to `t = 0`.
  pub epsilon: f32,
}

impl Default for ExtractConfig {
  fn default() -> Self {
    Self {
      resolution: DEFAULT_RESOLUTION,
      bounds: MinMaxAABB::centered_cube(1.0),
      iso_level: 0.0,
      normal_mode: NormalMode::default(),
      epsilon: DEFAULT_EPSILON,
    }
  }
}

impl ExtractConfig {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn with_resolution(mut self, resolution: usize) -> Self {
    self.resolution = resolution;
    self
  }

  pub fn with_bounds(mut self, min: impl Into<Vec3>, max: impl Into<Vec3>) -> Self {
    self.bounds = MinMaxAABB::new(min, max);
    self
  }

  pub fn with_iso_level(mut self, iso_level: f32) -> Self {
    self.iso_level = iso_level;
    self
  }

  pub fn with_normal_mode(mut self, mode: NormalMode) -> Self {
    self.normal_mode = mode;
    self
  }

  pub fn with_epsilon(mut self, epsilon: f32) -> Self {
    self.epsilon = epsilon;
    self
  }

  /// Size of one grid cell along each axis.
  pub fn cell_size(&self) -> Vec3 {
    self.bounds.size() / (self.resolution.saturating_sub(1).max(1)) as f32
  }

  /// Check the extraction preconditions.
  ///
  /// Extraction itself never calls this; degenerate input is a caller
  /// precondition violation there.
  pub fn validate(&self) -> Result<()> {
    if self.resolution < MIN_RESOLUTION {
      return Err(MeshError::InvalidConfig {
        reason: format!(
          "resolution {} is below the minimum of {}",
          self.resolution, MIN_RESOLUTION
        ),
      });
    }
    if !self.bounds.has_volume() {
      return Err(MeshError::InvalidConfig {
        reason: format!(
          "bounds {:?}..{:?} are degenerate or inverted",
          self.bounds.min, self.bounds.max
        ),
      });
    }
    if self.epsilon.is_nan() || self.epsilon < 0.0 {
      return Err(MeshError::InvalidConfig {
        reason: format!("epsilon {} must be non-negative", self.epsilon),
      });
    }
    Ok(())
  }
}

/// Plain indexed triangle mesh, the handoff type between extraction, the
/// half-edge mesh and any rendering consumer.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct IndexedMesh {
  /// Vertex positions.
  pub vertices: Vec<Vec3>,

  /// Unit normals parallel to `vertices`, when computed.
  pub normals: Option<Vec<Vec3>>,

  /// Counter-clockwise (outward) triangles as vertex index triples.
  pub triangles: Vec<[u32; 3]>,
}

impl IndexedMesh {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn from_parts(vertices: Vec<Vec3>, triangles: Vec<[u32; 3]>) -> Self {
    Self {
      vertices,
      normals: None,
      triangles,
    }
  }

  /// Returns true if no geometry was generated.
  pub fn is_empty(&self) -> bool {
    self.triangles.is_empty()
  }

  pub fn vertex_count(&self) -> usize {
    self.vertices.len()
  }

  pub fn triangle_count(&self) -> usize {
    self.triangles.len()
  }

  /// Flattened index buffer (3 indices per triangle).
  pub fn indices(&self) -> Vec<u32> {
    self.triangles.iter().flatten().copied().collect()
  }

  /// Bounding box encompassing all vertices.
  pub fn bounds(&self) -> MinMaxAABB {
    let mut bounds = MinMaxAABB::empty();
    for &p in &self.vertices {
      bounds.encapsulate(p);
    }
    bounds
  }

  /// Check index range, degenerate triangles and normal count.
  pub fn validate(&self) -> Result<()> {
    let vertex_count = self.vertices.len();

    if let Some(normals) = &self.normals {
      if normals.len() != vertex_count {
        return Err(MeshError::NormalCountMismatch {
          normals: normals.len(),
          vertices: vertex_count,
        });
      }
    }

    for (triangle, tri) in self.triangles.iter().enumerate() {
      for &index in tri {
        if index as usize >= vertex_count {
          return Err(MeshError::IndexOutOfRange {
            triangle,
            index,
            vertex_count,
          });
        }
      }
      if tri[0] == tri[1] || tri[1] == tri[2] || tri[0] == tri[2] {
        return Err(MeshError::DegenerateTriangle { triangle });
      }
    }

    Ok(())
  }

  /// Replace normals with angle-weighted face normals.
  pub fn recalculate_normals(&mut self) {
    self.normals = Some(crate::normals::from_geometry(&self.vertices, &self.triangles));
  }
}

/// Counters collected during a single extraction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ExtractStats {
  /// Cells visited.
  pub cells: usize,

  /// Cells with a non-zero edge mask.
  pub active_cells: usize,

  /// Crossed cell-edges summed over all cells (the unwelded vertex count).
  pub edge_crossings: usize,

  /// Vertices emitted after welding.
  pub welded_vertices: usize,

  /// Triangles emitted.
  pub triangles: usize,

  /// Wall time of the extraction.
  pub timing_us: u64,
}

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;
