//! Edge crossing interpolation.

use glam::Vec3;

use crate::normals::normalize_or_keep;

/// Interpolation factor of the iso crossing along an edge from `v0` to `v1`.
///
/// Returns `(v0 - iso_level) / (v0 - v1)`. When `|v0 - v1|` is not above
/// `epsilon` the crossing is pinned to the first corner (`t = 0`).
#[inline]
pub fn crossing_factor(v0: f32, v1: f32, iso_level: f32, epsilon: f32) -> f32 {
  let d = v0 - v1;
  if d.abs() > epsilon {
    (v0 - iso_level) / d
  } else {
    0.0
  }
}

/// Linear interpolation of a position along an edge.
#[inline]
pub fn lerp_position(p0: Vec3, p1: Vec3, t: f32) -> Vec3 {
  p0 + (p1 - p0) * t
}

/// Linear interpolation of two corner normals, renormalized.
///
/// A near-zero result is returned unnormalized.
#[inline]
pub fn lerp_normal(n0: Vec3, n1: Vec3, t: f32) -> Vec3 {
  normalize_or_keep(n0 + (n1 - n0) * t)
}

#[cfg(test)]
#[path = "interpolate_test.rs"]
mod interpolate_test;
