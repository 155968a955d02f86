//! Closed, consistently wound triangle meshes for testing and debugging.
//!
//! These are the simplest closed 2-manifolds with every face counter-clockwise
//! when viewed from outside, so they can be fed straight into
//! [`HalfEdgeMesh::build`](crate::half_edge::HalfEdgeMesh::build).

use glam::Vec3;

use crate::density::SphereDensity;
use crate::marching_cubes;
use crate::types::IndexedMesh;

/// Regular tetrahedron inscribed in the cube `[-1, 1]³`.
///
/// Every vertex has degree 3, so no edge can be flipped or collapsed.
pub fn tetrahedron() -> IndexedMesh {
  IndexedMesh::from_parts(
    vec![
      Vec3::new(1.0, 1.0, 1.0),
      Vec3::new(1.0, -1.0, -1.0),
      Vec3::new(-1.0, 1.0, -1.0),
      Vec3::new(-1.0, -1.0, 1.0),
    ],
    vec![[0, 1, 2], [0, 3, 1], [0, 2, 3], [1, 3, 2]],
  )
}

/// Octahedron with vertices on the unit axes.
///
/// Vertex order: `+X, -X, +Y, -Y, +Z, -Z`.
pub fn octahedron() -> IndexedMesh {
  IndexedMesh::from_parts(
    vec![
      Vec3::X,
      Vec3::NEG_X,
      Vec3::Y,
      Vec3::NEG_Y,
      Vec3::Z,
      Vec3::NEG_Z,
    ],
    vec![
      [0, 2, 4],
      [1, 4, 2],
      [0, 4, 3],
      [1, 3, 4],
      [0, 5, 2],
      [1, 2, 5],
      [0, 3, 5],
      [1, 5, 3],
    ],
  )
}

/// Icosahedron projected onto the unit sphere. Every vertex has degree 5.
pub fn icosahedron() -> IndexedMesh {
  let t = (1.0 + 5.0f32.sqrt()) / 2.0;
  let vertices = [
    [-1.0, t, 0.0],
    [1.0, t, 0.0],
    [-1.0, -t, 0.0],
    [1.0, -t, 0.0],
    [0.0, -1.0, t],
    [0.0, 1.0, t],
    [0.0, -1.0, -t],
    [0.0, 1.0, -t],
    [t, 0.0, -1.0],
    [t, 0.0, 1.0],
    [-t, 0.0, -1.0],
    [-t, 0.0, 1.0],
  ]
  .into_iter()
  .map(|p| Vec3::from_array(p).normalize())
  .collect();

  IndexedMesh::from_parts(
    vertices,
    vec![
      [0, 5, 1],
      [0, 1, 7],
      [0, 11, 5],
      [0, 7, 10],
      [0, 10, 11],
      [1, 5, 9],
      [1, 8, 7],
      [1, 9, 8],
      [2, 3, 4],
      [2, 6, 3],
      [2, 4, 11],
      [2, 10, 6],
      [2, 11, 10],
      [3, 9, 4],
      [3, 6, 8],
      [3, 8, 9],
      [4, 9, 5],
      [4, 5, 11],
      [6, 7, 8],
      [6, 10, 7],
    ],
  )
}

/// Unit sphere extracted with marching cubes over `[-2, 2]³`.
pub fn extracted_sphere(resolution: usize) -> IndexedMesh {
  marching_cubes::extract(
    &SphereDensity::unit(),
    resolution,
    Vec3::splat(-2.0),
    Vec3::splat(2.0),
  )
}
