//! Full structural validation.

use std::collections::HashMap;

use slotmap::SecondaryMap;

use super::{HalfEdgeMesh, VertexId};
use crate::error::{MeshError, Result};

impl HalfEdgeMesh {
  /// Verify every connectivity invariant, reporting the first violation.
  ///
  /// Linear in the size of the mesh. Intended for tests and debug builds;
  /// the operators keep the invariants on their own.
  pub fn check_invariants(&self) -> Result<()> {
    let mut outgoing = SecondaryMap::<VertexId, usize>::with_capacity(self.vertices.len());
    let mut undirected = HashMap::with_capacity(self.edges.len());

    for (h, rec) in &self.half_edges {
      let twin = self.half_edges.get(rec.twin).ok_or_else(|| dangling(format!("{:?} twin", h)))?;
      if twin.twin != h {
        return Err(violation(format!("twin of twin of {:?} is {:?}", h, twin.twin)));
      }
      if rec.twin == h {
        return Err(violation(format!("{:?} is its own twin", h)));
      }
      if twin.edge != rec.edge {
        return Err(violation(format!("{:?} and its twin belong to different edges", h)));
      }
      if twin.vertex == rec.vertex {
        return Err(violation(format!("{:?} starts and ends at {:?}", h, rec.vertex)));
      }
      if !self.vertices.contains_key(rec.vertex) {
        return Err(dangling(format!("{:?} vertex", h)));
      }
      if !self.edges.contains_key(rec.edge) {
        return Err(dangling(format!("{:?} edge", h)));
      }
      if !self.faces.contains_key(rec.face) {
        return Err(dangling(format!("{:?} face", h)));
      }

      let next = self.half_edges.get(rec.next).ok_or_else(|| dangling(format!("{:?} next", h)))?;
      if next.face != rec.face {
        return Err(violation(format!("{:?} and its successor lie on different faces", h)));
      }
      if next.vertex != twin.vertex {
        return Err(violation(format!("successor of {:?} does not start at its head", h)));
      }

      if let Some(count) = outgoing.entry(rec.vertex).map(|e| e.or_insert(0)) {
        *count += 1;
      }
    }

    for (e, rec) in &self.edges {
      let h = self.half_edges.get(rec.half_edge).ok_or_else(|| dangling(format!("{:?} half-edge", e)))?;
      if h.edge != e {
        return Err(violation(format!("representative of {:?} belongs to {:?}", e, h.edge)));
      }

      let (a, b) = self.edge_endpoints(e)?;
      let key = if a < b { (a, b) } else { (b, a) };
      if let Some(other) = undirected.insert(key, e) {
        return Err(violation(format!("{:?} and {:?} join the same vertices", e, other)));
      }
    }

    for (f, rec) in &self.faces {
      let h = self.half_edges.get(rec.half_edge).ok_or_else(|| dangling(format!("{:?} half-edge", f)))?;
      if h.face != f {
        return Err(violation(format!("representative of {:?} lies on {:?}", f, h.face)));
      }
      let edges = self.face_num_edges(f)?;
      if edges != 3 {
        return Err(MeshError::NotTriangle { edges });
      }
    }

    for (v, rec) in &self.vertices {
      let h = self.half_edges.get(rec.half_edge).ok_or_else(|| dangling(format!("{:?} half-edge", v)))?;
      if h.vertex != v {
        return Err(violation(format!("representative of {:?} leaves {:?}", v, h.vertex)));
      }

      let umbrella = self.vertex_outgoing(v)?;
      if let Some(&stray) = umbrella.iter().find(|&&h| self.half_edges[h].vertex != v) {
        return Err(violation(format!("umbrella of {:?} reaches {:?}", v, stray)));
      }
      let expected = outgoing.get(v).copied().unwrap_or(0);
      if umbrella.len() != expected {
        return Err(violation(format!(
          "umbrella of {:?} has {} half-edges, {} leave it",
          v,
          umbrella.len(),
          expected
        )));
      }
    }

    Ok(())
  }
}

fn violation(detail: String) -> MeshError {
  MeshError::CorruptTopology { detail }
}

fn dangling(what: String) -> MeshError {
  MeshError::CorruptTopology {
    detail: format!("{} points to a removed entity", what),
  }
}

#[cfg(test)]
#[path = "invariants_test.rs"]
mod invariants_test;
