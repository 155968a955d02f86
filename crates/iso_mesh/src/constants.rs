//! Sample grid layout constants for marching cubes extraction.
//!
//! The extractor samples the density function on a regular lattice of
//! `resolution³` grid points spanning an axis-aligned box. Grid points are
//! stored in a flat buffer; cells are the `(resolution - 1)³` unit cubes
//! between neighbouring grid points.
//!
//! # Grid Layout
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         SAMPLE GRID LAYOUT                              │
//! ├─────────────────────────────────────────────────────────────────────────┤
//! │                                                                         │
//! │  Grid index:    0     1     2    ...   r-2   r-1                        │
//! │                 │     │                 │     │                         │
//! │                 └─────┴── r-1 cells ────┴─────┘                         │
//! │                                                                         │
//! │  world(i) = bounds.min + i * cell_size                                  │
//! │  cell_size = (bounds.max - bounds.min) / (r - 1)                        │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Memory Layout
//!
//! ```text
//! Grid memory layout (row-major, Z innermost):
//!
//! index = z + y * r + x * r²
//!
//! Optimal access: Sequential Z, then Y, then X
//! ```
//!
//! # Cell Corner Numbering
//!
//! Corners use the classic marching cubes numbering (bottom face
//! counter-clockwise, then top face counter-clockwise):
//!
//! ```text
//!       7──────6
//!      /│     /│          0 = (0,0,0)    4 = (0,0,1)
//!     4─┼────5 │          1 = (1,0,0)    5 = (1,0,1)
//!     │ 3────┼─2          2 = (1,1,0)    6 = (1,1,1)
//!     │/     │/           3 = (0,1,0)    7 = (0,1,1)
//!     0──────1
//! ```

/// Default number of grid points per axis.
pub const DEFAULT_RESOLUTION: usize = 32;

/// Smallest usable resolution (one cell per axis).
pub const MIN_RESOLUTION: usize = 2;

/// Density differences below this are treated as zero when computing the
/// interpolation factor along a crossed edge.
pub const DEFAULT_EPSILON: f32 = 1e-5;

/// Maximum number of triangles a single cell can emit.
pub const MAX_TRIANGLES_PER_CELL: usize = 5;

/// Grid offsets of the 8 cell corners relative to the cell origin.
pub const CORNER_OFFSETS: [[usize; 3]; 8] = [
  [0, 0, 0], // 0
  [1, 0, 0], // 1
  [1, 1, 0], // 2
  [0, 1, 0], // 3
  [0, 0, 1], // 4
  [1, 0, 1], // 5
  [1, 1, 1], // 6
  [0, 1, 1], // 7
];

/// Flat indexing for a cubic sample grid of arbitrary resolution.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GridLayout {
  resolution: usize,
  stride_y: usize,
  stride_x: usize,
}

impl GridLayout {
  /// Create a layout with `resolution` grid points per axis.
  pub const fn new(resolution: usize) -> Self {
    Self {
      resolution,
      stride_y: resolution,
      stride_x: resolution * resolution,
    }
  }

  /// Grid points per axis.
  #[inline(always)]
  pub const fn resolution(&self) -> usize {
    self.resolution
  }

  /// Cells per axis (`resolution - 1`, saturating at zero).
  #[inline(always)]
  pub const fn cells_per_axis(&self) -> usize {
    self.resolution.saturating_sub(1)
  }

  /// Total number of grid points (`resolution³`).
  #[inline(always)]
  pub const fn sample_count(&self) -> usize {
    self.stride_x * self.resolution
  }

  /// Total number of cells (`(resolution - 1)³`).
  #[inline(always)]
  pub const fn cell_count(&self) -> usize {
    let c = self.cells_per_axis();
    c * c * c
  }

  /// Convert 3D grid coordinates to a flat index.
  #[inline(always)]
  pub const fn coord_to_index(&self, x: usize, y: usize, z: usize) -> usize {
    z + y * self.stride_y + x * self.stride_x
  }

  /// Convert a flat index back to 3D grid coordinates.
  #[inline(always)]
  pub const fn index_to_coord(&self, idx: usize) -> (usize, usize, usize) {
    let x = idx / self.stride_x;
    let y = (idx % self.stride_x) / self.stride_y;
    let z = idx % self.stride_y;
    (x, y, z)
  }

  /// Flat index of `corner` of the cell whose origin is `(x, y, z)`.
  #[inline(always)]
  pub const fn corner_index(&self, x: usize, y: usize, z: usize, corner: usize) -> usize {
    let [dx, dy, dz] = CORNER_OFFSETS[corner];
    self.coord_to_index(x + dx, y + dy, z + dz)
  }
}

#[cfg(test)]
#[path = "constants_test.rs"]
mod constants_test;
