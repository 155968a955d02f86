use glam::Vec3;

use super::*;

// Bounds tests
#[test]
fn test_aabb_encapsulate() {
  let mut aabb = MinMaxAABB::empty();
  aabb.encapsulate(Vec3::new(1.0, 2.0, 3.0));
  aabb.encapsulate(Vec3::new(-1.0, -2.0, -3.0));

  assert_eq!(aabb.min, Vec3::new(-1.0, -2.0, -3.0));
  assert_eq!(aabb.max, Vec3::new(1.0, 2.0, 3.0));
  assert!(aabb.is_valid());
  assert!(aabb.has_volume());
}

#[test]
fn test_aabb_empty_is_invalid() {
  let aabb = MinMaxAABB::empty();
  assert!(!aabb.is_valid());
  assert!(!aabb.has_volume());
}

#[test]
fn test_aabb_flat_has_no_volume() {
  let aabb = MinMaxAABB::new([0.0, 0.0, 0.0], [1.0, 0.0, 1.0]);
  assert!(aabb.is_valid());
  assert!(!aabb.has_volume());
}

// Config tests
#[test]
fn test_extract_config_builder() {
  let config = ExtractConfig::new()
    .with_resolution(20)
    .with_bounds([-2.0; 3], [2.0; 3])
    .with_iso_level(0.5)
    .with_normal_mode(NormalMode::Gradient)
    .with_epsilon(1e-4);

  assert_eq!(config.resolution, 20);
  assert_eq!(config.bounds.min, Vec3::splat(-2.0));
  assert_eq!(config.bounds.max, Vec3::splat(2.0));
  assert_eq!(config.iso_level, 0.5);
  assert_eq!(config.normal_mode, NormalMode::Gradient);
  assert_eq!(config.epsilon, 1e-4);
}

#[test]
fn test_extract_config_defaults() {
  let config = ExtractConfig::default();
  assert_eq!(config.resolution, crate::constants::DEFAULT_RESOLUTION);
  assert_eq!(config.iso_level, 0.0);
  assert_eq!(config.normal_mode, NormalMode::None);
  assert!(config.validate().is_ok());
}

#[test]
fn test_cell_size() {
  let config = ExtractConfig::new()
    .with_resolution(5)
    .with_bounds([0.0, 0.0, 0.0], [4.0, 8.0, 2.0]);
  assert_eq!(config.cell_size(), Vec3::new(1.0, 2.0, 0.5));
}

#[test]
fn test_validate_rejects_low_resolution() {
  let config = ExtractConfig::new().with_resolution(1);
  assert!(matches!(
    config.validate(),
    Err(MeshError::InvalidConfig { .. })
  ));
}

#[test]
fn test_validate_rejects_inverted_bounds() {
  let config = ExtractConfig::new().with_bounds([1.0; 3], [-1.0; 3]);
  assert!(matches!(
    config.validate(),
    Err(MeshError::InvalidConfig { .. })
  ));
}

#[test]
fn test_validate_rejects_negative_epsilon() {
  let config = ExtractConfig::new().with_epsilon(-1.0);
  assert!(config.validate().is_err());
}

// Indexed mesh tests
fn single_triangle() -> IndexedMesh {
  IndexedMesh::from_parts(
    vec![Vec3::ZERO, Vec3::X, Vec3::Y],
    vec![[0, 1, 2]],
  )
}

#[test]
fn test_indexed_mesh_counts() {
  let mesh = single_triangle();
  assert_eq!(mesh.vertex_count(), 3);
  assert_eq!(mesh.triangle_count(), 1);
  assert_eq!(mesh.indices(), vec![0, 1, 2]);
  assert!(!mesh.is_empty());
  assert!(IndexedMesh::new().is_empty());
}

#[test]
fn test_indexed_mesh_bounds() {
  let bounds = single_triangle().bounds();
  assert_eq!(bounds.min, Vec3::ZERO);
  assert_eq!(bounds.max, Vec3::new(1.0, 1.0, 0.0));
}

#[test]
fn test_validate_accepts_valid_mesh() {
  assert!(single_triangle().validate().is_ok());
}

#[test]
fn test_validate_rejects_out_of_range_index() {
  let mut mesh = single_triangle();
  mesh.triangles.push([0, 1, 7]);
  assert_eq!(
    mesh.validate(),
    Err(MeshError::IndexOutOfRange {
      triangle: 1,
      index: 7,
      vertex_count: 3
    })
  );
}

#[test]
fn test_validate_rejects_degenerate_triangle() {
  let mut mesh = single_triangle();
  mesh.triangles[0] = [0, 1, 1];
  assert_eq!(
    mesh.validate(),
    Err(MeshError::DegenerateTriangle { triangle: 0 })
  );
}

#[test]
fn test_validate_rejects_normal_mismatch() {
  let mut mesh = single_triangle();
  mesh.normals = Some(vec![Vec3::Z]);
  assert_eq!(
    mesh.validate(),
    Err(MeshError::NormalCountMismatch {
      normals: 1,
      vertices: 3
    })
  );
}

#[test]
fn test_recalculate_normals() {
  let mut mesh = single_triangle();
  mesh.recalculate_normals();

  let normals = mesh.normals.as_ref().expect("normals computed");
  assert_eq!(normals.len(), 3);
  for n in normals {
    assert!((*n - Vec3::Z).length() < 1e-5, "Expected +Z, got {:?}", n);
  }
}
