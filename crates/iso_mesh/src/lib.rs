//! iso_mesh - isosurface extraction and half-edge topology editing
//!
//! This crate turns a scalar density field into a welded triangle mesh and
//! lets that mesh be edited through local operators that keep it a closed
//! 2-manifold.
//!
//! # Features
//!
//! - **Marching Cubes**: classic 256-case extraction over a regular grid,
//!   with one shared vertex per crossed lattice edge
//! - **Normals**: gradient normals from the sampled grid or angle-weighted
//!   normals from the welded triangles
//! - **Half-Edge Mesh**: generational-arena DCEL with checked flip, split and
//!   collapse operators
//!
//! # Example
//!
//! ```
//! use iso_mesh::{marching_cubes, HalfEdgeMesh, SphereDensity};
//!
//! let indexed = marching_cubes::extract(&SphereDensity::unit(), 16, [-2.0; 3], [2.0; 3]);
//! let mut mesh = HalfEdgeMesh::build(&indexed).unwrap();
//!
//! let edge = mesh.edge_ids().next().unwrap();
//! let midpoint = mesh.split(edge).unwrap();
//! assert_eq!(mesh.vertex_degree(midpoint).unwrap(), 4);
//!
//! let edited = mesh.to_indexed_mesh().unwrap();
//! assert_eq!(edited.triangle_count(), indexed.triangle_count() + 2);
//! ```

pub mod constants;
pub mod density;
pub mod edge_table;
pub mod error;
pub mod fixtures;
pub mod half_edge;
pub mod marching_cubes;
pub mod normals;
pub mod types;

// Re-export commonly used items
pub use constants::{GridLayout, CORNER_OFFSETS, DEFAULT_RESOLUTION};
pub use density::{ConstantDensity, Density, PlaneDensity, SphereDensity, TorusDensity};
pub use edge_table::{EDGE_CORNERS, EDGE_TABLE, TRI_TABLE};
pub use error::{EntityKind, MeshError, Result};
pub use half_edge::{EdgeId, FaceId, HalfEdgeId, HalfEdgeMesh, VertexId};
pub use types::{ExtractConfig, ExtractStats, IndexedMesh, MinMaxAABB, NormalMode};
