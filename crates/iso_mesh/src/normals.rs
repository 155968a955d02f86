//! Vertex normal helpers.
//!
//! Geometry-based normals for any indexed triangle list, and the
//! normalization rule shared with the gradient normals of the extractor.

use glam::Vec3;

/// Squared lengths below this are treated as ill-defined directions.
pub const DEGENERATE_LENGTH_SQ: f32 = 1e-12;

/// Normalize `v`, leaving it unchanged when its length is near zero.
#[inline]
pub fn normalize_or_keep(v: Vec3) -> Vec3 {
  let len_sq = v.length_squared();
  if len_sq < DEGENERATE_LENGTH_SQ {
    v
  } else {
    v * len_sq.sqrt().recip()
  }
}

/// Compute normals from triangle geometry using angle-weighted averaging.
///
/// Uses Thürmer & Wüthrich's "Mean Weighted by Angle" (MWA) algorithm:
/// each face's contribution to a vertex normal is weighted by the interior
/// angle of the triangle at that vertex.
///
/// Vertices touched only by degenerate triangles get a zero normal.
pub fn from_geometry(vertices: &[Vec3], triangles: &[[u32; 3]]) -> Vec<Vec3> {
  let mut normals = vec![Vec3::ZERO; vertices.len()];

  for tri in triangles {
    let [i0, i1, i2] = tri.map(|i| i as usize);

    let p0 = vertices[i0];
    let p1 = vertices[i1];
    let p2 = vertices[i2];

    let e01 = p1 - p0;
    let e02 = p2 - p0;
    let e12 = p2 - p1;

    let face_normal = e01.cross(e02);
    let face_len_sq = face_normal.length_squared();

    // Skip degenerate triangles
    if face_len_sq < DEGENERATE_LENGTH_SQ {
      continue;
    }

    let face_normal_unit = face_normal * face_len_sq.sqrt().recip();

    normals[i0] += face_normal_unit * vertex_angle(e01, e02);
    normals[i1] += face_normal_unit * vertex_angle(-e01, e12);
    normals[i2] += face_normal_unit * vertex_angle(-e02, -e12);
  }

  for n in &mut normals {
    *n = normalize_or_keep(*n);
  }

  normals
}

/// Compute the angle between two edge vectors at a vertex.
#[inline]
fn vertex_angle(e1: Vec3, e2: Vec3) -> f32 {
  let len1_sq = e1.length_squared();
  let len2_sq = e2.length_squared();

  if len1_sq < DEGENERATE_LENGTH_SQ || len2_sq < DEGENERATE_LENGTH_SQ {
    return 0.0;
  }

  let cos_angle = e1.dot(e2) / (len1_sq.sqrt() * len2_sq.sqrt());

  // Clamp to [-1, 1] to handle floating point errors
  cos_angle.clamp(-1.0, 1.0).acos()
}

#[cfg(test)]
#[path = "normals_test.rs"]
mod normals_test;
