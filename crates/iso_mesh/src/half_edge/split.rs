//! Edge split.

use slotmap::Key;

use super::{Edge, EdgeId, Face, HalfEdge, HalfEdgeId, HalfEdgeMesh, Vertex, VertexId};
use crate::error::{MeshError, Result};

impl HalfEdgeMesh {
  /// Insert a vertex `m` at the midpoint of `a-b`, turning the two adjacent
  /// triangles into four.
  ///
  /// ```text
  ///        c                 c
  ///       ╱ ╲               ╱│╲
  ///      ╱ f0╲             ╱f2│f0╲
  ///     a ─── b    ==>    a ─ m ─ b
  ///      ╲ f1╱             ╲f1│f3╱
  ///       ╲ ╱               ╲│╱
  ///        d                 d
  /// ```
  ///
  /// Adds 1 vertex, 3 edges, 2 faces and 6 half-edges. `edge` keeps its
  /// handle and becomes `m-b`; `f0` and `f1` shrink onto `b` and `a`.
  /// Returns `m`.
  pub fn split(&mut self, edge: EdgeId) -> Result<VertexId> {
    let n = self.edge_neighborhood(edge)?;

    if n.c == n.d {
      return Err(MeshError::IllegalSplit {
        reason: "both faces share their opposite vertex",
      });
    }

    let midpoint = (self.vertices[n.a].position + self.vertices[n.b].position) * 0.5;
    let m = self.vertices.insert(Vertex {
      position: midpoint,
      half_edge: n.h0,
    });

    let f2 = self.faces.insert(Face { half_edge: HalfEdgeId::null() });
    let f3 = self.faces.insert(Face { half_edge: HalfEdgeId::null() });
    let e_am = self.edges.insert(Edge { half_edge: n.t0 });
    let e_mc = self.edges.insert(Edge { half_edge: HalfEdgeId::null() });
    let e_md = self.edges.insert(Edge { half_edge: HalfEdgeId::null() });

    let mut add = |vertex, face, edge| {
      self.half_edges.insert(HalfEdge {
        twin: HalfEdgeId::null(),
        next: HalfEdgeId::null(),
        vertex,
        face,
        edge,
      })
    };
    let am = add(n.a, f2, e_am);
    let mc = add(m, f2, e_mc);
    let cm = add(n.c, n.f0, e_mc);
    let bm = add(n.b, f3, edge);
    let md = add(m, f3, e_md);
    let dm = add(n.d, n.f1, e_md);

    let he = &mut self.half_edges;

    // f0 = m -> b -> c
    he[n.h0].vertex = m;
    he[n.h1].next = cm;
    he[cm].next = n.h0;

    // f1 = m -> a -> d
    he[n.t0].vertex = m;
    he[n.t0].edge = e_am;
    he[n.t1].next = dm;
    he[dm].next = n.t0;

    // f2 = a -> m -> c
    he[am].next = mc;
    he[mc].next = n.h2;
    he[n.h2].next = am;
    he[n.h2].face = f2;

    // f3 = b -> m -> d
    he[bm].next = md;
    he[md].next = n.t2;
    he[n.t2].next = bm;
    he[n.t2].face = f3;

    for (x, y) in [(n.h0, bm), (n.t0, am), (mc, cm), (md, dm)] {
      he[x].twin = y;
      he[y].twin = x;
    }

    self.edges[e_mc].half_edge = mc;
    self.edges[e_md].half_edge = md;
    self.edges[edge].half_edge = n.h0;

    self.faces[n.f0].half_edge = n.h0;
    self.faces[n.f1].half_edge = n.t0;
    self.faces[f2].half_edge = am;
    self.faces[f3].half_edge = bm;

    self.vertices[n.a].half_edge = n.t1;
    self.vertices[n.b].half_edge = n.h1;

    Ok(m)
  }
}

#[cfg(test)]
#[path = "split_test.rs"]
mod split_test;
