//! Helpers shared by the half-edge unit tests.

use glam::Vec3;

use super::{EdgeId, HalfEdgeMesh, VertexId};
use crate::fixtures;
use crate::types::IndexedMesh;

pub type PositionKey = [u32; 3];

pub fn position_key(p: Vec3) -> PositionKey {
  p.to_array().map(f32::to_bits)
}

/// Triangles keyed by corner positions, each rotated to start at its
/// smallest corner (winding preserved), sorted.
pub fn triangle_set(mesh: &IndexedMesh) -> Vec<[PositionKey; 3]> {
  let mut set: Vec<[PositionKey; 3]> = mesh
    .triangles
    .iter()
    .map(|tri| {
      let keys = tri.map(|i| position_key(mesh.vertices[i as usize]));
      let first = (0..3).min_by_key(|&i| keys[i]).unwrap_or(0);
      [keys[first], keys[(first + 1) % 3], keys[(first + 2) % 3]]
    })
    .collect();
  set.sort();
  set
}

pub fn built(mesh: &IndexedMesh) -> HalfEdgeMesh {
  HalfEdgeMesh::build(mesh).expect("fixture builds")
}

pub fn octahedron() -> HalfEdgeMesh {
  built(&fixtures::octahedron())
}

pub fn vertex_at(mesh: &HalfEdgeMesh, p: Vec3) -> VertexId {
  mesh
    .vertices()
    .find(|(_, v)| v.position() == p)
    .map(|(id, _)| id)
    .unwrap_or_else(|| panic!("no vertex at {:?}", p))
}

pub fn edge_between(mesh: &HalfEdgeMesh, p: Vec3, q: Vec3) -> EdgeId {
  let a = vertex_at(mesh, p);
  let b = vertex_at(mesh, q);
  mesh
    .find_edge(a, b)
    .expect("walk succeeds")
    .unwrap_or_else(|| panic!("no edge between {:?} and {:?}", p, q))
}

/// (vertices, edges, faces, half-edges)
pub fn counts(mesh: &HalfEdgeMesh) -> (usize, usize, usize, usize) {
  (
    mesh.num_vertices(),
    mesh.num_edges(),
    mesh.num_faces(),
    mesh.num_half_edges(),
  )
}
