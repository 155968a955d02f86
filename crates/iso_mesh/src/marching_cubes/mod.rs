//! Marching cubes isosurface extraction.
//!
//! Converts a sampled scalar density into a welded, consistently wound
//! indexed triangle mesh.
//!
//! # Processing Pipeline
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                        INPUT                                    │
//! │  density: impl Density   - scalar field, positive = outside     │
//! │  resolution: usize       - grid points per axis (>= 2)          │
//! │  bounds: MinMaxAABB      - sampled region                       │
//! └─────────────────────────────────────────────────────────────────┘
//!                               │
//!                               ▼
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                    PASS 1: Sampling                             │
//! │  Evaluate density once per grid point into a flat buffer        │
//! │  Optionally precompute gradient normals per grid point          │
//! └─────────────────────────────────────────────────────────────────┘
//!                               │
//!                               ▼
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                    PASS 2: Cells                                │
//! │  For each cell:                                                 │
//! │    Build 8-bit corner mask (bit set when density > iso)         │
//! │    Early-out when EDGE_TABLE[mask] == 0                         │
//! │    Weld one vertex per crossed lattice edge                     │
//! │    Emit TRI_TABLE[mask] triangles over welded indices           │
//! └─────────────────────────────────────────────────────────────────┘
//!                               │
//!                               ▼
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                    PASS 3: Normals                              │
//! │  None:     positions and triangles only                         │
//! │  Gradient: interpolated in pass 2                               │
//! │  Geometry: angle-weighted face normals of the welded mesh       │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Welding
//!
//! A lattice edge is shared by up to four cells. Each crossing is keyed by
//! the sorted pair of flat grid indices of the edge endpoints, so every
//! crossing yields exactly one output vertex. The crossing is always
//! interpolated from the lower to the higher grid index, which makes the
//! vertex position independent of the cell that emits it first.

mod corner_mask;
mod interpolate;
mod sample_grid;
mod weld;

pub use interpolate::crossing_factor;
pub use sample_grid::SampleGrid;
pub use weld::{EdgeKey, VertexWelder};

use glam::Vec3;
use web_time::Instant;

use crate::density::Density;
use crate::edge_table::{triangle_edges, EDGE_CORNERS, EDGE_TABLE};
use crate::normals;
use crate::types::{ExtractConfig, ExtractStats, IndexedMesh, NormalMode};

/// Extract the zero level set of `density` over `[min, max]` without normals.
///
/// `resolution` is the number of grid points per axis and must be at least
/// 2. Degenerate or inverted bounds give an unspecified (but memory-safe)
/// result; use [`ExtractConfig::validate`] to check them up front.
///
/// A grid sample exactly equal to the iso level counts as inside, and every
/// crossed edge touching it is pinned to that grid point. Those edges weld
/// separately, so the output then holds coincident vertices and zero-area
/// triangles around the point.
pub fn extract<D: Density + ?Sized>(
  density: &D,
  resolution: usize,
  min: impl Into<Vec3>,
  max: impl Into<Vec3>,
) -> IndexedMesh {
  let config = ExtractConfig::new()
    .with_resolution(resolution)
    .with_bounds(min, max);
  extract_with_config(density, &config)
}

/// Extract the `config.iso_level` level set of `density`.
pub fn extract_with_config<D: Density + ?Sized>(density: &D, config: &ExtractConfig) -> IndexedMesh {
  extract_with_stats(density, config).0
}

/// Extract and report per-pass counters.
#[cfg_attr(feature = "tracing", tracing::instrument(skip_all, name = "marching_cubes::extract"))]
pub fn extract_with_stats<D: Density + ?Sized>(
  density: &D,
  config: &ExtractConfig,
) -> (IndexedMesh, ExtractStats) {
  let start = Instant::now();
  let mut stats = ExtractStats::default();

  if config.resolution < 2 {
    return (IndexedMesh::new(), stats);
  }

  // =========================================================================
  // Pass 1: Sampling
  // =========================================================================
  let grid = SampleGrid::sample(density, config.resolution, config.bounds);
  let grid_normals = match config.normal_mode {
    NormalMode::Gradient => Some(grid.gradient_normals()),
    NormalMode::None | NormalMode::Geometry => None,
  };

  // =========================================================================
  // Pass 2: Cells
  // =========================================================================
  let mut mesh = IndexedMesh::new();
  let mut vertex_normals = Vec::new();
  let mut welder = VertexWelder::new();
  {
    #[cfg(feature = "tracing")]
    let _span = tracing::info_span!("march_cells").entered();

    let cells = grid.layout().cells_per_axis();

    for x in 0..cells {
      for y in 0..cells {
        for z in 0..cells {
          stats.cells += 1;
          process_cell(
            &grid,
            grid_normals.as_deref(),
            [x, y, z],
            config,
            &mut welder,
            &mut mesh,
            &mut vertex_normals,
            &mut stats,
          );
        }
      }
    }
  }

  stats.welded_vertices = welder.len();
  if welder.is_empty() {
    stats.timing_us = start.elapsed().as_micros() as u64;
    return (mesh, stats);
  }

  // =========================================================================
  // Pass 3: Normals
  // =========================================================================
  mesh.normals = match config.normal_mode {
    NormalMode::None => None,
    NormalMode::Gradient => Some(vertex_normals),
    NormalMode::Geometry => Some(normals::from_geometry(&mesh.vertices, &mesh.triangles)),
  };

  stats.triangles = mesh.triangles.len();
  stats.timing_us = start.elapsed().as_micros() as u64;

  #[cfg(feature = "tracing")]
  tracing::debug!(
    resolution = config.resolution,
    active_cells = stats.active_cells,
    edge_crossings = stats.edge_crossings,
    vertices = stats.welded_vertices,
    reused_crossings = welder.reused(),
    triangles = stats.triangles,
    timing_us = stats.timing_us,
    "extracted isosurface"
  );

  (mesh, stats)
}

/// Classify one cell and emit its triangles.
#[allow(clippy::too_many_arguments)]
#[inline]
fn process_cell(
  grid: &SampleGrid,
  grid_normals: Option<&[Vec3]>,
  pos: [usize; 3],
  config: &ExtractConfig,
  welder: &mut VertexWelder,
  mesh: &mut IndexedMesh,
  vertex_normals: &mut Vec<Vec3>,
  stats: &mut ExtractStats,
) {
  let [x, y, z] = pos;
  let layout = grid.layout();

  let samples = grid.cell_samples(x, y, z);
  let corner_mask = corner_mask::build(&samples, config.iso_level) as usize;

  let edge_mask = EDGE_TABLE[corner_mask];
  if edge_mask == 0 {
    return;
  }
  stats.active_cells += 1;

  // Welded vertex index per cell edge; only crossed edges are read
  let mut edge_vertices = [0u32; 12];

  for (edge, corners) in EDGE_CORNERS.iter().enumerate() {
    if edge_mask & (1 << edge) == 0 {
      continue;
    }
    stats.edge_crossings += 1;

    let a = layout.corner_index(x, y, z, corners[0] as usize);
    let b = layout.corner_index(x, y, z, corners[1] as usize);
    let key = EdgeKey::new(a, b);

    edge_vertices[edge] = welder.get_or_insert_with(key, || {
      let (lo, hi) = key.endpoints();
      let t = interpolate::crossing_factor(
        grid.value(lo),
        grid.value(hi),
        config.iso_level,
        config.epsilon,
      );

      let index = mesh.vertices.len() as u32;
      mesh
        .vertices
        .push(interpolate::lerp_position(grid.position_of(lo), grid.position_of(hi), t));
      if let Some(n) = grid_normals {
        vertex_normals.push(interpolate::lerp_normal(n[lo], n[hi], t));
      }
      index
    });
  }

  for [e0, e1, e2] in triangle_edges(corner_mask) {
    mesh
      .triangles
      .push([edge_vertices[e0], edge_vertices[e1], edge_vertices[e2]]);
  }
}
