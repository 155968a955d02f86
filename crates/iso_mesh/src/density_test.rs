use glam::Vec3;

use super::*;

fn sample<D: Density>(d: &D, p: [f32; 3]) -> f32 {
  d.density(p[0], p[1], p[2])
}

#[test]
fn test_closure_is_density() {
  let f = |x: f32, y: f32, z: f32| x + 2.0 * y + 3.0 * z;
  assert_eq!(sample(&f, [1.0, 1.0, 1.0]), 6.0);
  assert_eq!(f.density_at(Vec3::new(1.0, 0.0, 0.0)), 1.0);
}

#[test]
fn test_unit_sphere_matches_implicit_form() {
  let sphere = SphereDensity::unit();
  for p in [[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.5, -0.5, 2.0]] {
    let expected = p[0] * p[0] + p[1] * p[1] + p[2] * p[2] - 1.0;
    assert!((sample(&sphere, p) - expected).abs() < 1e-6);
  }
}

#[test]
fn test_sphere_with_center() {
  let sphere = SphereDensity::new(2.0).with_center([1.0, 0.0, 0.0]);
  assert_eq!(sample(&sphere, [3.0, 0.0, 0.0]), 0.0);
  assert!(sample(&sphere, [1.0, 0.0, 0.0]) < 0.0);
  assert!(sample(&sphere, [-2.0, 0.0, 0.0]) > 0.0);
}

#[test]
fn test_plane_sign() {
  let plane = PlaneDensity::new().with_angle_degrees(0.0).with_height(1.0);
  assert!(sample(&plane, [0.0, 2.0, 0.0]) > 0.0);
  assert!(sample(&plane, [0.0, 0.0, 0.0]) < 0.0);
  assert_eq!(sample(&plane, [5.0, 1.0, -3.0]), 0.0);
}

#[test]
fn test_torus_zero_on_tube_surface() {
  let torus = TorusDensity::new(1.5, 0.5);
  assert!(sample(&torus, [2.0, 0.0, 0.0]).abs() < 1e-6);
  assert!(sample(&torus, [1.5, 0.0, 0.0]) < 0.0);
  assert!(sample(&torus, [0.0, 0.0, 0.0]) > 0.0);
}

#[test]
fn test_constant() {
  let c = ConstantDensity(1.0);
  assert_eq!(sample(&c, [3.0, -2.0, 9.0]), 1.0);
}
