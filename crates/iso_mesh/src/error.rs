//! Error types for mesh construction and topology edits.

use thiserror::Error;

/// Entity kind named in stale-handle errors.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EntityKind {
  Vertex,
  HalfEdge,
  Edge,
  Face,
}

impl std::fmt::Display for EntityKind {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    let name = match self {
      EntityKind::Vertex => "vertex",
      EntityKind::HalfEdge => "half-edge",
      EntityKind::Edge => "edge",
      EntityKind::Face => "face",
    };
    f.write_str(name)
  }
}

/// Errors raised by indexed-mesh validation, half-edge construction and the
/// half-edge operators.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MeshError {
  #[error("invalid extraction config: {reason}")]
  InvalidConfig { reason: String },

  #[error("triangle {triangle} references vertex {index}, but the mesh has {vertex_count} vertices")]
  IndexOutOfRange {
    triangle: usize,
    index: u32,
    vertex_count: usize,
  },

  #[error("triangle {triangle} repeats a vertex index")]
  DegenerateTriangle { triangle: usize },

  #[error("mesh has {normals} normals for {vertices} vertices")]
  NormalCountMismatch { normals: usize, vertices: usize },

  #[error("directed edge {from} -> {to} appears more than once (non-manifold or inconsistent winding)")]
  DuplicateHalfEdge { from: u32, to: u32 },

  #[error("directed edge {from} -> {to} has no opposite half-edge (open boundary)")]
  BoundaryEdge { from: u32, to: u32 },

  #[error("vertex {vertex} is non-manifold: its triangles do not form a single fan")]
  NonManifoldVertex { vertex: u32 },

  #[error("stale or unknown {kind} handle")]
  StaleHandle { kind: EntityKind },

  #[error("face has {edges} edges, expected a triangle")]
  NotTriangle { edges: usize },

  #[error("illegal flip: {reason}")]
  IllegalFlip { reason: &'static str },

  #[error("illegal split: {reason}")]
  IllegalSplit { reason: &'static str },

  #[error("illegal collapse: {reason}")]
  IllegalCollapse { reason: &'static str },

  #[error("corrupt topology: {detail}")]
  CorruptTopology { detail: String },
}

pub type Result<T> = std::result::Result<T, MeshError>;
