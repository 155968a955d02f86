//! Edge collapse.

use super::{EdgeId, HalfEdgeMesh, VertexId};
use crate::error::{MeshError, Result};

impl HalfEdgeMesh {
  /// Merge `b` into `a`, removing the two triangles adjacent to `a-b`.
  ///
  /// `a` is the first vertex of [`edge_endpoints`](Self::edge_endpoints).
  ///
  /// ```text
  ///        c                 c
  ///       ╱ ╲                │
  ///      ╱   ╲               │
  ///     a ─── b    ==>       a
  ///      ╲   ╱               │
  ///       ╲ ╱                │
  ///        d                 d
  /// ```
  ///
  /// Removes 1 vertex, 3 edges, 2 faces and 6 half-edges. Every half-edge
  /// that left `b` now leaves `a`, which moves to the midpoint of the
  /// collapsed edge. Handles of the removed entities become stale. Returns
  /// `a`.
  ///
  /// Rejected, leaving the mesh untouched, when the result would not be a
  /// 2-manifold:
  ///
  /// - `a` and `b` share a neighbour other than `c` and `d` (link condition)
  /// - `c` or `d` has degree 3 and would be left with two coincident faces
  pub fn collapse(&mut self, edge: EdgeId) -> Result<VertexId> {
    let n = self.edge_neighborhood(edge)?;

    if n.c == n.d {
      return Err(MeshError::IllegalCollapse {
        reason: "both faces share their opposite vertex",
      });
    }

    let around_a = self.vertex_neighbors(n.a)?;
    let around_b = self.vertex_neighbors(n.b)?;
    let shared = around_a.iter().filter(|v| around_b.contains(v)).count();
    if shared != 2 {
      return Err(MeshError::IllegalCollapse {
        reason: "endpoints share a neighbour other than the two opposite vertices",
      });
    }
    if self.vertex_degree(n.c)? <= 3 || self.vertex_degree(n.d)? <= 3 {
      return Err(MeshError::IllegalCollapse {
        reason: "an opposite vertex would drop below degree 3",
      });
    }

    let leaving_b = self.vertex_outgoing(n.b)?;
    let removed_edges = [edge, self.half_edge(n.h1)?.edge, self.half_edge(n.t2)?.edge];
    let kept_top = self.half_edge(n.h2)?.edge;
    let kept_bottom = self.half_edge(n.t1)?.edge;
    self.edge(kept_top)?;
    self.edge(kept_bottom)?;

    let midpoint = (self.vertices[n.a].position + self.vertices[n.b].position) * 0.5;

    let he = &mut self.half_edges;
    for h in leaving_b {
      he[h].vertex = n.a;
    }

    // c -> b merges with a -> c, d -> a with b -> d
    he[n.o_h1].twin = n.o_h2;
    he[n.o_h2].twin = n.o_h1;
    he[n.o_h1].edge = kept_top;

    he[n.o_t2].twin = n.o_t1;
    he[n.o_t1].twin = n.o_t2;
    he[n.o_t2].edge = kept_bottom;

    self.edges[kept_top].half_edge = n.o_h2;
    self.edges[kept_bottom].half_edge = n.o_t1;

    self.vertices[n.a].position = midpoint;
    self.vertices[n.a].half_edge = n.o_h2;
    self.vertices[n.c].half_edge = n.o_h1;
    self.vertices[n.d].half_edge = n.o_t1;

    for h in [n.h0, n.h1, n.h2, n.t0, n.t1, n.t2] {
      self.half_edges.remove(h);
    }
    for e in removed_edges {
      self.edges.remove(e);
    }
    self.faces.remove(n.f0);
    self.faces.remove(n.f1);
    self.vertices.remove(n.b);

    Ok(n.a)
  }
}

#[cfg(test)]
#[path = "collapse_test.rs"]
mod collapse_test;
