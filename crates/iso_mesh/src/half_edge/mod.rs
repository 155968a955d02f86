//! Half-edge (doubly connected edge list) triangle mesh.
//!
//! # Layout
//!
//! Every entity kind lives in its own generational arena ([`SlotMap`]). A
//! handle of a removed entity never aliases a later one: lookups through it
//! fail with [`MeshError::StaleHandle`].
//!
//! ```text
//!                 c
//!                ╱ ╲
//!          h2   ╱   ╲  h1          h0 : a -> b   (face f0 = a b c)
//!              ╱ f0  ╲             t0 : b -> a   (face f1 = b a d)
//!             a ─────▶ b           twin(h0) == t0
//!             a ◀───── b
//!              ╲ f1  ╱             A half-edge stores its tail vertex;
//!          t1   ╲   ╱  t2          its head is `twin.vertex`.
//!                ╲ ╱
//!                 d
//! ```
//!
//! # Invariants
//!
//! After [`HalfEdgeMesh::build`] and after every successful flip, split or
//! collapse:
//!
//! - `twin(twin(h)) == h` and both halves reference the same edge
//! - walking `next` from any half-edge returns to it after 3 steps, all on
//!   the same face
//! - walking `twin -> next` from any half-edge leaving `v` returns to it
//!   after `degree(v)` steps, every step leaving `v`
//!
//! [`HalfEdgeMesh::check_invariants`] verifies all of them.

mod build;
mod collapse;
mod flip;
mod invariants;
mod neighborhood;
mod split;

use glam::Vec3;
use slotmap::{new_key_type, SecondaryMap, SlotMap};
use smallvec::SmallVec;

use crate::error::{EntityKind, MeshError, Result};
use crate::types::IndexedMesh;

/// Walks over `next` or the vertex umbrella abort after this many steps.
///
/// A well-formed mesh never gets close; hitting it means a broken cycle.
pub const MAX_LOOP_ITERATIONS: usize = 8196;

new_key_type! {
  /// Handle to a [`Vertex`].
  pub struct VertexId;
  /// Handle to a [`HalfEdge`].
  pub struct HalfEdgeId;
  /// Handle to an [`Edge`].
  pub struct EdgeId;
  /// Handle to a [`Face`].
  pub struct FaceId;
}

/// Directed half of an edge, bordering exactly one face.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HalfEdge {
  twin: HalfEdgeId,
  next: HalfEdgeId,
  vertex: VertexId,
  face: FaceId,
  edge: EdgeId,
}

impl HalfEdge {
  /// Opposite half-edge of the same edge.
  pub fn twin(&self) -> HalfEdgeId {
    self.twin
  }

  /// Following half-edge around the face.
  pub fn next(&self) -> HalfEdgeId {
    self.next
  }

  /// Tail vertex.
  pub fn vertex(&self) -> VertexId {
    self.vertex
  }

  pub fn face(&self) -> FaceId {
    self.face
  }

  pub fn edge(&self) -> EdgeId {
    self.edge
  }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Vertex {
  position: Vec3,
  half_edge: HalfEdgeId,
}

impl Vertex {
  pub fn position(&self) -> Vec3 {
    self.position
  }

  /// A half-edge leaving this vertex.
  pub fn half_edge(&self) -> HalfEdgeId {
    self.half_edge
  }
}

/// Undirected edge; owns the pair of half-edges through its representative.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Edge {
  half_edge: HalfEdgeId,
}

impl Edge {
  pub fn half_edge(&self) -> HalfEdgeId {
    self.half_edge
  }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Face {
  half_edge: HalfEdgeId,
}

impl Face {
  pub fn half_edge(&self) -> HalfEdgeId {
    self.half_edge
  }
}

/// Closed, consistently wound 2-manifold triangle mesh.
#[derive(Clone, Debug, Default)]
pub struct HalfEdgeMesh {
  vertices: SlotMap<VertexId, Vertex>,
  half_edges: SlotMap<HalfEdgeId, HalfEdge>,
  edges: SlotMap<EdgeId, Edge>,
  faces: SlotMap<FaceId, Face>,
}

impl TryFrom<&IndexedMesh> for HalfEdgeMesh {
  type Error = MeshError;

  fn try_from(mesh: &IndexedMesh) -> Result<Self> {
    Self::build(mesh)
  }
}

// =============================================================================
// Entity access
// =============================================================================

impl HalfEdgeMesh {
  pub fn vertex(&self, id: VertexId) -> Result<&Vertex> {
    self.vertices.get(id).ok_or(MeshError::StaleHandle {
      kind: EntityKind::Vertex,
    })
  }

  pub fn half_edge(&self, id: HalfEdgeId) -> Result<&HalfEdge> {
    self.half_edges.get(id).ok_or(MeshError::StaleHandle {
      kind: EntityKind::HalfEdge,
    })
  }

  pub fn edge(&self, id: EdgeId) -> Result<&Edge> {
    self.edges.get(id).ok_or(MeshError::StaleHandle {
      kind: EntityKind::Edge,
    })
  }

  pub fn face(&self, id: FaceId) -> Result<&Face> {
    self.faces.get(id).ok_or(MeshError::StaleHandle {
      kind: EntityKind::Face,
    })
  }

  pub fn contains_vertex(&self, id: VertexId) -> bool {
    self.vertices.contains_key(id)
  }

  pub fn contains_edge(&self, id: EdgeId) -> bool {
    self.edges.contains_key(id)
  }

  pub fn contains_face(&self, id: FaceId) -> bool {
    self.faces.contains_key(id)
  }

  pub fn vertices(&self) -> impl Iterator<Item = (VertexId, &Vertex)> + '_ {
    self.vertices.iter()
  }

  pub fn half_edges(&self) -> impl Iterator<Item = (HalfEdgeId, &HalfEdge)> + '_ {
    self.half_edges.iter()
  }

  pub fn edges(&self) -> impl Iterator<Item = (EdgeId, &Edge)> + '_ {
    self.edges.iter()
  }

  pub fn faces(&self) -> impl Iterator<Item = (FaceId, &Face)> + '_ {
    self.faces.iter()
  }

  pub fn vertex_ids(&self) -> impl Iterator<Item = VertexId> + '_ {
    self.vertices.keys()
  }

  pub fn edge_ids(&self) -> impl Iterator<Item = EdgeId> + '_ {
    self.edges.keys()
  }

  pub fn face_ids(&self) -> impl Iterator<Item = FaceId> + '_ {
    self.faces.keys()
  }

  pub fn num_vertices(&self) -> usize {
    self.vertices.len()
  }

  pub fn num_half_edges(&self) -> usize {
    self.half_edges.len()
  }

  pub fn num_edges(&self) -> usize {
    self.edges.len()
  }

  pub fn num_faces(&self) -> usize {
    self.faces.len()
  }

  pub fn is_empty(&self) -> bool {
    self.faces.is_empty()
  }

  /// Move a vertex without touching connectivity.
  pub fn set_vertex_position(&mut self, id: VertexId, position: Vec3) -> Result<()> {
    self
      .vertices
      .get_mut(id)
      .ok_or(MeshError::StaleHandle {
        kind: EntityKind::Vertex,
      })?
      .position = position;
    Ok(())
  }
}

// =============================================================================
// Traversal queries
// =============================================================================

impl HalfEdgeMesh {
  /// Head vertex of a half-edge (the tail of its twin).
  pub fn half_edge_head(&self, id: HalfEdgeId) -> Result<VertexId> {
    let twin = self.half_edge(id)?.twin;
    Ok(self.half_edge(twin)?.vertex)
  }

  /// Both endpoints of an edge, tail of the representative half-edge first.
  pub fn edge_endpoints(&self, id: EdgeId) -> Result<(VertexId, VertexId)> {
    let h = self.edge(id)?.half_edge;
    Ok((self.half_edge(h)?.vertex, self.half_edge_head(h)?))
  }

  /// Half-edges around a face, starting at its representative.
  pub fn face_half_edges(&self, id: FaceId) -> Result<SmallVec<[HalfEdgeId; 8]>> {
    let start = self.face(id)?.half_edge;
    self.walk_cycle(start, |mesh, h| Ok(mesh.half_edge(h)?.next))
  }

  /// Vertices around a face in winding order.
  pub fn face_vertices(&self, id: FaceId) -> Result<SmallVec<[VertexId; 4]>> {
    self
      .face_half_edges(id)?
      .into_iter()
      .map(|h| Ok(self.half_edge(h)?.vertex))
      .collect()
  }

  /// Number of edges bounding a face (3 for every face of a valid mesh).
  pub fn face_num_edges(&self, id: FaceId) -> Result<usize> {
    Ok(self.face_half_edges(id)?.len())
  }

  /// Half-edges leaving a vertex, walked as `twin -> next`.
  pub fn vertex_outgoing(&self, id: VertexId) -> Result<SmallVec<[HalfEdgeId; 8]>> {
    let start = self.vertex(id)?.half_edge;
    self.walk_cycle(start, |mesh, h| {
      let twin = mesh.half_edge(h)?.twin;
      Ok(mesh.half_edge(twin)?.next)
    })
  }

  /// Number of edges incident to a vertex.
  pub fn vertex_degree(&self, id: VertexId) -> Result<usize> {
    Ok(self.vertex_outgoing(id)?.len())
  }

  /// One-ring of a vertex in umbrella order.
  pub fn vertex_neighbors(&self, id: VertexId) -> Result<SmallVec<[VertexId; 8]>> {
    self
      .vertex_outgoing(id)?
      .into_iter()
      .map(|h| self.half_edge_head(h))
      .collect()
  }

  /// Half-edge from `from` to `to`, if the two vertices are adjacent.
  pub fn find_half_edge(&self, from: VertexId, to: VertexId) -> Result<Option<HalfEdgeId>> {
    for h in self.vertex_outgoing(from)? {
      if self.half_edge_head(h)? == to {
        return Ok(Some(h));
      }
    }
    Ok(None)
  }

  /// Edge joining two vertices, if any.
  pub fn find_edge(&self, a: VertexId, b: VertexId) -> Result<Option<EdgeId>> {
    match self.find_half_edge(a, b)? {
      Some(h) => Ok(Some(self.half_edge(h)?.edge)),
      None => Ok(None),
    }
  }

  /// Follow `step` from `start` until it comes back, failing on runaway
  /// cycles.
  fn walk_cycle(
    &self,
    start: HalfEdgeId,
    step: impl Fn(&Self, HalfEdgeId) -> Result<HalfEdgeId>,
  ) -> Result<SmallVec<[HalfEdgeId; 8]>> {
    let mut cycle = SmallVec::new();
    let mut h = start;
    loop {
      if cycle.len() >= MAX_LOOP_ITERATIONS {
        return Err(MeshError::CorruptTopology {
          detail: format!(
            "cycle from {:?} did not close within {} steps",
            start, MAX_LOOP_ITERATIONS
          ),
        });
      }
      cycle.push(h);
      h = step(self, h)?;
      if h == start {
        return Ok(cycle);
      }
    }
  }
}

// =============================================================================
// Export
// =============================================================================

impl HalfEdgeMesh {
  /// Emit an indexed triangle list.
  ///
  /// Vertices are numbered in arena order; every face contributes one
  /// triangle in its winding order. Normals are left empty.
  #[cfg_attr(feature = "tracing", tracing::instrument(skip_all, name = "half_edge::to_indexed_mesh"))]
  pub fn to_indexed_mesh(&self) -> Result<IndexedMesh> {
    let mut index_of = SecondaryMap::<VertexId, u32>::with_capacity(self.vertices.len());
    let mut vertices = Vec::with_capacity(self.vertices.len());

    for (id, vertex) in &self.vertices {
      index_of.insert(id, vertices.len() as u32);
      vertices.push(vertex.position);
    }

    let mut triangles = Vec::with_capacity(self.faces.len());
    for id in self.faces.keys() {
      let corners = self.face_vertices(id)?;
      let [a, b, c] = corners[..] else {
        return Err(MeshError::NotTriangle {
          edges: corners.len(),
        });
      };

      let index = |v: VertexId| {
        index_of.get(v).copied().ok_or(MeshError::StaleHandle {
          kind: EntityKind::Vertex,
        })
      };
      triangles.push([index(a)?, index(b)?, index(c)?]);
    }

    Ok(IndexedMesh::from_parts(vertices, triangles))
  }
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod mod_test;

#[cfg(test)]
mod test_utils;
