use glam::Vec3;

use super::test_utils::*;
use super::*;
use crate::fixtures;

#[test]
fn test_roundtrip_preserves_triangles() {
  for indexed in [
    fixtures::tetrahedron(),
    fixtures::octahedron(),
    fixtures::icosahedron(),
    fixtures::extracted_sphere(12),
  ] {
    let mesh = built(&indexed);
    let out = mesh.to_indexed_mesh().unwrap();

    assert_eq!(out.vertex_count(), indexed.vertex_count());
    assert!(out.normals.is_none());
    assert!(out.validate().is_ok());
    assert_eq!(triangle_set(&out), triangle_set(&indexed));
  }
}

#[test]
fn test_roundtrip_is_stable() {
  let mesh = built(&fixtures::icosahedron());
  let once = mesh.to_indexed_mesh().unwrap();
  let twice = built(&once).to_indexed_mesh().unwrap();
  assert_eq!(triangle_set(&once), triangle_set(&twice));
}

#[test]
fn test_face_queries() {
  let mesh = octahedron();
  for f in mesh.face_ids() {
    assert_eq!(mesh.face_num_edges(f).unwrap(), 3);

    let corners = mesh.face_vertices(f).unwrap();
    let ring = mesh.face_half_edges(f).unwrap();
    assert_eq!(ring.len(), 3);
    for (h, v) in ring.iter().zip(&corners) {
      assert_eq!(mesh.half_edge(*h).unwrap().vertex(), *v);
      assert_eq!(mesh.half_edge(*h).unwrap().face(), f);
    }
  }
}

#[test]
fn test_vertex_degree_and_neighbors() {
  let mesh = octahedron();
  let top = vertex_at(&mesh, Vec3::Z);

  assert_eq!(mesh.vertex_degree(top).unwrap(), 4);

  let mut around: Vec<Vec3> = mesh
    .vertex_neighbors(top)
    .unwrap()
    .iter()
    .map(|&v| mesh.vertex(v).unwrap().position())
    .collect();
  around.sort_by(|a, b| position_key(*a).cmp(&position_key(*b)));

  let mut expected = vec![Vec3::X, Vec3::NEG_X, Vec3::Y, Vec3::NEG_Y];
  expected.sort_by(|a, b| position_key(*a).cmp(&position_key(*b)));
  assert_eq!(around, expected);
}

#[test]
fn test_umbrella_leaves_vertex() {
  let mesh = built(&fixtures::icosahedron());
  for v in mesh.vertex_ids() {
    for h in mesh.vertex_outgoing(v).unwrap() {
      assert_eq!(mesh.half_edge(h).unwrap().vertex(), v);
    }
  }
}

#[test]
fn test_edge_endpoints_and_head() {
  let mesh = octahedron();
  let e = edge_between(&mesh, Vec3::X, Vec3::Y);
  let (a, b) = mesh.edge_endpoints(e).unwrap();

  let mut ends = [
    mesh.vertex(a).unwrap().position(),
    mesh.vertex(b).unwrap().position(),
  ];
  ends.sort_by(|p, q| position_key(*p).cmp(&position_key(*q)));
  let mut expected = [Vec3::X, Vec3::Y];
  expected.sort_by(|p, q| position_key(*p).cmp(&position_key(*q)));
  assert_eq!(ends, expected);

  let h = mesh.edge(e).unwrap().half_edge();
  assert_eq!(mesh.half_edge_head(h).unwrap(), b);
  let twin = mesh.half_edge(h).unwrap().twin();
  assert_eq!(mesh.half_edge_head(twin).unwrap(), a);
}

#[test]
fn test_find_edge() {
  let mesh = octahedron();
  let x = vertex_at(&mesh, Vec3::X);
  let neg_x = vertex_at(&mesh, Vec3::NEG_X);
  let y = vertex_at(&mesh, Vec3::Y);

  assert!(mesh.find_edge(x, neg_x).unwrap().is_none());
  let e = mesh.find_edge(x, y).unwrap().expect("adjacent");
  assert_eq!(mesh.find_edge(y, x).unwrap(), Some(e));

  let h = mesh.find_half_edge(y, x).unwrap().expect("adjacent");
  assert_eq!(mesh.half_edge(h).unwrap().vertex(), y);
  assert_eq!(mesh.half_edge_head(h).unwrap(), x);
}

#[test]
fn test_counts_and_iterators_agree() {
  let mesh = built(&fixtures::icosahedron());
  assert_eq!(mesh.vertices().count(), mesh.num_vertices());
  assert_eq!(mesh.half_edges().count(), mesh.num_half_edges());
  assert_eq!(mesh.edges().count(), mesh.num_edges());
  assert_eq!(mesh.faces().count(), mesh.num_faces());
  assert_eq!(mesh.num_half_edges(), mesh.num_edges() * 2);
  assert!(!mesh.is_empty());
}

#[test]
fn test_set_vertex_position() {
  let mut mesh = octahedron();
  let top = vertex_at(&mesh, Vec3::Z);
  mesh.set_vertex_position(top, Vec3::Z * 2.0).unwrap();
  assert_eq!(mesh.vertex(top).unwrap().position(), Vec3::Z * 2.0);
  mesh.check_invariants().unwrap();
}

#[test]
fn test_default_handles_are_stale() {
  let mesh = octahedron();
  assert_eq!(
    mesh.vertex(VertexId::default()).unwrap_err(),
    MeshError::StaleHandle {
      kind: EntityKind::Vertex
    }
  );
  assert_eq!(
    mesh.face_num_edges(FaceId::default()).unwrap_err(),
    MeshError::StaleHandle {
      kind: EntityKind::Face
    }
  );
  assert!(mesh.edge_endpoints(EdgeId::default()).is_err());
}
