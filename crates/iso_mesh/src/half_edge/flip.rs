//! Edge flip.

use super::{EdgeId, HalfEdgeMesh};
use crate::error::{MeshError, Result};

impl HalfEdgeMesh {
  /// Replace the diagonal `a-b` of the quad `a b c d` by `c-d`.
  ///
  /// ```text
  ///        c                 c
  ///       ╱ ╲               ╱│╲
  ///      ╱   ╲             ╱ │ ╲
  ///     a ─── b    ==>    a  │  b
  ///      ╲   ╱             ╲ │ ╱
  ///       ╲ ╱               ╲│╱
  ///        d                 d
  /// ```
  ///
  /// No entity is created or removed and every handle stays valid; the edge
  /// keeps its handle and now joins `c` and `d`. Rejected when `c` and `d`
  /// coincide or are already adjacent. A rejected call changes nothing.
  pub fn flip(&mut self, edge: EdgeId) -> Result<()> {
    let n = self.edge_neighborhood(edge)?;

    if n.c == n.d {
      return Err(MeshError::IllegalFlip {
        reason: "both faces share their opposite vertex",
      });
    }
    if self.find_half_edge(n.c, n.d)?.is_some() {
      return Err(MeshError::IllegalFlip {
        reason: "opposite vertices are already connected",
      });
    }

    // f0 = c -> d -> b,  f1 = d -> c -> a
    let he = &mut self.half_edges;
    he[n.h0].vertex = n.c;
    he[n.h0].next = n.t2;
    he[n.t2].next = n.h1;
    he[n.t2].face = n.f0;
    he[n.h1].next = n.h0;

    he[n.t0].vertex = n.d;
    he[n.t0].next = n.h2;
    he[n.h2].next = n.t1;
    he[n.h2].face = n.f1;
    he[n.t1].next = n.t0;

    self.faces[n.f0].half_edge = n.h0;
    self.faces[n.f1].half_edge = n.t0;
    self.vertices[n.a].half_edge = n.t1;
    self.vertices[n.b].half_edge = n.h1;
    self.vertices[n.c].half_edge = n.h2;
    self.vertices[n.d].half_edge = n.t2;

    Ok(())
  }
}

#[cfg(test)]
#[path = "flip_test.rs"]
mod flip_test;
