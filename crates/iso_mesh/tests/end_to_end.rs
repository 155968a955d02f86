//! Density -> extraction -> half-edge edits -> indexed mesh.

use glam::Vec3;
use iso_mesh::{
  marching_cubes, ExtractConfig, HalfEdgeMesh, IndexedMesh, MeshError, NormalMode, SphereDensity,
};

fn unit_sphere(resolution: usize, normal_mode: NormalMode) -> IndexedMesh {
  let config = ExtractConfig::new()
    .with_resolution(resolution)
    .with_bounds(Vec3::splat(-2.0), Vec3::splat(2.0))
    .with_normal_mode(normal_mode);
  config.validate().expect("valid config");
  marching_cubes::extract_with_config(&SphereDensity::unit(), &config)
}

#[test]
fn test_sphere_resolution_20_is_clean() {
  let mesh = unit_sphere(20, NormalMode::Gradient);

  assert!(!mesh.is_empty());
  mesh.validate().expect("indices in range, normals parallel");

  // No two vertices share a position
  for (i, a) in mesh.vertices.iter().enumerate() {
    for b in &mesh.vertices[i + 1..] {
      assert!(a.distance(*b) > 1e-5, "Duplicate vertex at {:?}", a);
    }
  }

  for n in mesh.normals.as_ref().expect("normals requested") {
    assert!((n.length() - 1.0).abs() < 1e-3);
  }
}

#[test]
fn test_welding_beats_naive_emission() {
  let config = ExtractConfig::new()
    .with_resolution(10)
    .with_bounds(Vec3::splat(-2.0), Vec3::splat(2.0));
  let (mesh, stats) = marching_cubes::extract_with_stats(&SphereDensity::unit(), &config);

  assert_eq!(mesh.vertex_count(), stats.welded_vertices);
  assert!(stats.welded_vertices < stats.edge_crossings);
  assert!(stats.welded_vertices * 2 < stats.edge_crossings);
}

#[test]
fn test_extracted_sphere_round_trips_through_half_edges() {
  let indexed = unit_sphere(16, NormalMode::None);
  let mesh = HalfEdgeMesh::build(&indexed).expect("extraction is closed and manifold");
  mesh.check_invariants().unwrap();

  let out = mesh.to_indexed_mesh().unwrap();
  assert_eq!(out.vertex_count(), indexed.vertex_count());
  assert_eq!(out.triangle_count(), indexed.triangle_count());

  let mut expected: Vec<[Vec3; 3]> = canonical(&indexed);
  let mut actual: Vec<[Vec3; 3]> = canonical(&out);
  expected.sort_by(cmp_triangle);
  actual.sort_by(cmp_triangle);
  assert_eq!(actual, expected);
}

#[test]
fn test_edited_mesh_recomputes_normals() {
  let indexed = unit_sphere(12, NormalMode::None);
  let mut mesh = HalfEdgeMesh::build(&indexed).unwrap();

  let edges: Vec<_> = mesh.edge_ids().take(20).collect();
  for e in edges {
    mesh.split(e).unwrap();
  }
  mesh.check_invariants().unwrap();

  let mut out = mesh.to_indexed_mesh().unwrap();
  assert_eq!(out.vertex_count(), indexed.vertex_count() + 20);
  assert_eq!(out.triangle_count(), indexed.triangle_count() + 40);

  out.recalculate_normals();
  out.validate().unwrap();
  for (p, n) in out.vertices.iter().zip(out.normals.as_ref().unwrap()) {
    assert!((n.length() - 1.0).abs() < 1e-3);
    assert!(n.dot(*p) > 0.0, "Inward normal {:?} at {:?}", n, p);
  }
}

#[test]
fn test_open_extraction_is_rejected() {
  // The sphere pokes out of the sampled box, leaving holes on the faces
  let indexed = marching_cubes::extract(
    &SphereDensity::new(1.5),
    12,
    Vec3::splat(-1.0),
    Vec3::splat(1.0),
  );
  assert!(!indexed.is_empty());

  assert!(matches!(
    HalfEdgeMesh::build(&indexed),
    Err(MeshError::BoundaryEdge { .. })
  ));
}

fn canonical(mesh: &IndexedMesh) -> Vec<[Vec3; 3]> {
  mesh
    .triangles
    .iter()
    .map(|tri| {
      let p = tri.map(|i| mesh.vertices[i as usize]);
      let first = (0..3)
        .min_by(|&i, &j| cmp_point(&p[i], &p[j]))
        .unwrap_or(0);
      [p[first], p[(first + 1) % 3], p[(first + 2) % 3]]
    })
    .collect()
}

fn cmp_point(a: &Vec3, b: &Vec3) -> std::cmp::Ordering {
  a.x
    .total_cmp(&b.x)
    .then(a.y.total_cmp(&b.y))
    .then(a.z.total_cmp(&b.z))
}

fn cmp_triangle(a: &[Vec3; 3], b: &[Vec3; 3]) -> std::cmp::Ordering {
  cmp_point(&a[0], &b[0])
    .then(cmp_point(&a[1], &b[1]))
    .then(cmp_point(&a[2], &b[2]))
}
