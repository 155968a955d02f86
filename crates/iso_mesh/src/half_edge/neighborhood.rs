//! The two triangles around an interior edge, gathered before any edit.

use super::{EdgeId, FaceId, HalfEdgeId, HalfEdgeMesh, VertexId};
use crate::error::{MeshError, Result};

/// Named records around `edge`, read in one pass.
///
/// ```text
///                 c
///              ╱  ▲  ╲
///        h2   ╱   │   ╲  h1       o_h1 = twin(h1),  o_h2 = twin(h2)
///            ╱   f0    ╲          o_t1 = twin(t1),  o_t2 = twin(t2)
///           a ── h0 ──▶ b
///           a ◀── t0 ── b
///            ╲   f1    ╱
///        t1   ╲   │   ╱  t2
///              ╲  ▼  ╱
///                 d
/// ```
#[derive(Clone, Copy, Debug)]
pub(super) struct EdgeNeighborhood {
  pub h0: HalfEdgeId,
  pub h1: HalfEdgeId,
  pub h2: HalfEdgeId,
  pub t0: HalfEdgeId,
  pub t1: HalfEdgeId,
  pub t2: HalfEdgeId,

  pub o_h1: HalfEdgeId,
  pub o_h2: HalfEdgeId,
  pub o_t1: HalfEdgeId,
  pub o_t2: HalfEdgeId,

  pub a: VertexId,
  pub b: VertexId,
  pub c: VertexId,
  pub d: VertexId,

  pub f0: FaceId,
  pub f1: FaceId,
}

impl HalfEdgeMesh {
  /// Gather the neighbourhood of `edge`, checking that both adjacent faces
  /// are triangles and that the links agree with each other.
  pub(super) fn edge_neighborhood(&self, edge: EdgeId) -> Result<EdgeNeighborhood> {
    let h0 = self.edge(edge)?.half_edge;
    let rec_h0 = *self.half_edge(h0)?;
    let t0 = rec_h0.twin;
    let rec_t0 = *self.half_edge(t0)?;

    if rec_t0.twin != h0 || rec_t0.edge != edge || rec_h0.edge != edge {
      return Err(corrupt(format!("half-edges of {:?} are not mutual twins", edge)));
    }
    if rec_h0.face == rec_t0.face {
      return Err(corrupt(format!("{:?} borders the same face on both sides", edge)));
    }

    let [h1, h2] = self.triangle_rest(h0, rec_h0.face)?;
    let [t1, t2] = self.triangle_rest(t0, rec_t0.face)?;

    let a = rec_h0.vertex;
    let b = rec_t0.vertex;
    if self.half_edge(h1)?.vertex != b || self.half_edge(t1)?.vertex != a {
      return Err(corrupt(format!("endpoints of {:?} disagree across faces", edge)));
    }

    let n = EdgeNeighborhood {
      h0,
      h1,
      h2,
      t0,
      t1,
      t2,
      o_h1: self.half_edge(h1)?.twin,
      o_h2: self.half_edge(h2)?.twin,
      o_t1: self.half_edge(t1)?.twin,
      o_t2: self.half_edge(t2)?.twin,
      a,
      b,
      c: self.half_edge(h2)?.vertex,
      d: self.half_edge(t2)?.vertex,
      f0: rec_h0.face,
      f1: rec_t0.face,
    };

    // Everything an operator may write to must be alive
    for h in [n.o_h1, n.o_h2, n.o_t1, n.o_t2] {
      self.half_edge(h)?;
    }
    for v in [n.a, n.b, n.c, n.d] {
      self.vertex(v)?;
    }
    self.face(n.f0)?;
    self.face(n.f1)?;

    Ok(n)
  }

  /// The two half-edges following `start` on `face`, failing unless the
  /// face is a triangle.
  fn triangle_rest(&self, start: HalfEdgeId, face: FaceId) -> Result<[HalfEdgeId; 2]> {
    let first = self.half_edge(start)?.next;
    let second = self.half_edge(first)?.next;
    if self.half_edge(second)?.next != start {
      return Err(MeshError::NotTriangle {
        edges: self.face_num_edges(face)?,
      });
    }
    Ok([first, second])
  }
}

fn corrupt(detail: String) -> MeshError {
  MeshError::CorruptTopology { detail }
}
