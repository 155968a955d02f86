//! Construction from an indexed triangle list.

use std::collections::HashMap;

use slotmap::Key;

use super::{Edge, EdgeId, Face, HalfEdge, HalfEdgeId, HalfEdgeMesh, Vertex, VertexId};
use crate::error::{MeshError, Result};
use crate::types::IndexedMesh;

impl HalfEdgeMesh {
  /// Build the half-edge structure of a closed, consistently wound,
  /// manifold triangle mesh.
  ///
  /// Vertices are created the first time a triangle references them, so
  /// unreferenced input vertices are dropped. Fails on:
  ///
  /// - out-of-range indices and triangles repeating a vertex
  /// - a directed edge used twice (non-manifold edge or flipped winding)
  /// - a directed edge without its opposite (open boundary)
  /// - a vertex whose triangles form more than one fan
  #[cfg_attr(feature = "tracing", tracing::instrument(skip_all, name = "half_edge::build"))]
  pub fn build(mesh: &IndexedMesh) -> Result<Self> {
    let vertex_count = mesh.vertices.len();
    for (triangle, tri) in mesh.triangles.iter().enumerate() {
      if let Some(&index) = tri.iter().find(|&&i| i as usize >= vertex_count) {
        return Err(MeshError::IndexOutOfRange {
          triangle,
          index,
          vertex_count,
        });
      }
      if tri[0] == tri[1] || tri[1] == tri[2] || tri[0] == tri[2] {
        return Err(MeshError::DegenerateTriangle { triangle });
      }
    }

    let face_count = mesh.triangles.len();
    let mut out = Self::default();
    out.half_edges.reserve(face_count * 3);
    out.edges.reserve(face_count * 3 / 2);
    out.faces.reserve(face_count);

    let mut vertex_ids: Vec<Option<VertexId>> = vec![None; vertex_count];
    let mut directed: HashMap<(u32, u32), HalfEdgeId> = HashMap::with_capacity(face_count * 3);
    let mut undirected: HashMap<(u32, u32), EdgeId> = HashMap::with_capacity(face_count * 3 / 2);
    let mut outgoing = vec![0usize; vertex_count];

    // =========================================================================
    // Pass 1: faces, half-edges, edges and `next` links
    // =========================================================================
    for tri in &mesh.triangles {
      let face = out.faces.insert(Face {
        half_edge: HalfEdgeId::null(),
      });

      let mut ring = [HalfEdgeId::null(); 3];
      for i in 0..3 {
        let (from, to) = (tri[i], tri[(i + 1) % 3]);
        if directed.contains_key(&(from, to)) {
          return Err(MeshError::DuplicateHalfEdge { from, to });
        }

        let vertex = *vertex_ids[from as usize].get_or_insert_with(|| {
          out.vertices.insert(Vertex {
            position: mesh.vertices[from as usize],
            half_edge: HalfEdgeId::null(),
          })
        });
        let edge = *undirected
          .entry((from.min(to), from.max(to)))
          .or_insert_with(|| {
            out.edges.insert(Edge {
              half_edge: HalfEdgeId::null(),
            })
          });

        let h = out.half_edges.insert(HalfEdge {
          twin: HalfEdgeId::null(),
          next: HalfEdgeId::null(),
          vertex,
          face,
          edge,
        });
        directed.insert((from, to), h);
        outgoing[from as usize] += 1;
        ring[i] = h;

        if out.vertices[vertex].half_edge.is_null() {
          out.vertices[vertex].half_edge = h;
        }
        if out.edges[edge].half_edge.is_null() {
          out.edges[edge].half_edge = h;
        }
      }

      for i in 0..3 {
        out.half_edges[ring[i]].next = ring[(i + 1) % 3];
      }
      out.faces[face].half_edge = ring[0];
    }

    // =========================================================================
    // Pass 2: twins
    // =========================================================================
    for tri in &mesh.triangles {
      for i in 0..3 {
        let (from, to) = (tri[i], tri[(i + 1) % 3]);
        match (directed.get(&(from, to)), directed.get(&(to, from))) {
          (Some(&h), Some(&t)) => out.half_edges[h].twin = t,
          _ => return Err(MeshError::BoundaryEdge { from, to }),
        }
      }
    }

    // =========================================================================
    // Pass 3: one umbrella per vertex
    // =========================================================================
    for (index, id) in vertex_ids.iter().enumerate() {
      let Some(id) = *id else {
        continue;
      };
      if out.vertex_degree(id)? != outgoing[index] {
        return Err(MeshError::NonManifoldVertex {
          vertex: index as u32,
        });
      }
    }

    #[cfg(feature = "tracing")]
    tracing::debug!(
      vertices = out.num_vertices(),
      edges = out.num_edges(),
      faces = out.num_faces(),
      "built half-edge mesh"
    );

    Ok(out)
  }
}

#[cfg(test)]
#[path = "build_test.rs"]
mod build_test;
