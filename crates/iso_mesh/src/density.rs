//! Density sampler interface and simple samplers for testing and debugging.
//!
//! The surface is the zero level set of the density. The extractor sets a
//! corner bit when the density is above the iso level, so with the samplers
//! here positive means outside.

use glam::Vec3;

/// Scalar field sampled by the extractor.
///
/// Must be a pure function of position.
pub trait Density {
  fn density(&self, x: f32, y: f32, z: f32) -> f32;

  #[inline]
  fn density_at(&self, p: Vec3) -> f32 {
    self.density(p.x, p.y, p.z)
  }
}

impl<F> Density for F
where
  F: Fn(f32, f32, f32) -> f32,
{
  #[inline]
  fn density(&self, x: f32, y: f32, z: f32) -> f32 {
    self(x, y, z)
  }
}

/// Implicit sphere: `|p - center|² - radius²`.
#[derive(Clone, Debug)]
pub struct SphereDensity {
  pub center: Vec3,
  pub radius: f32,
}

impl Default for SphereDensity {
  fn default() -> Self {
    Self::unit()
  }
}

impl SphereDensity {
  pub fn new(radius: f32) -> Self {
    Self {
      center: Vec3::ZERO,
      radius,
    }
  }

  /// `x² + y² + z² - 1`.
  pub fn unit() -> Self {
    Self::new(1.0)
  }

  pub fn with_center(mut self, center: impl Into<Vec3>) -> Self {
    self.center = center.into();
    self
  }
}

impl Density for SphereDensity {
  #[inline]
  fn density(&self, x: f32, y: f32, z: f32) -> f32 {
    (Vec3::new(x, y, z) - self.center).length_squared() - self.radius * self.radius
  }
}

/// Tilted plane through `height` on the Y axis, rotated around Z.
///
/// SDF: `(y - height) * cos(angle) - x * sin(angle)`
#[derive(Clone, Debug)]
pub struct PlaneDensity {
  pub height: f32,
  pub angle: f32,
}

impl Default for PlaneDensity {
  fn default() -> Self {
    Self {
      height: 0.0,
      angle: std::f32::consts::FRAC_PI_4,
    }
  }
}

impl PlaneDensity {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn with_height(mut self, height: f32) -> Self {
    self.height = height;
    self
  }

  pub fn with_angle_degrees(mut self, degrees: f32) -> Self {
    self.angle = degrees.to_radians();
    self
  }
}

impl Density for PlaneDensity {
  #[inline]
  fn density(&self, x: f32, y: f32, _z: f32) -> f32 {
    (y - self.height) * self.angle.cos() - x * self.angle.sin()
  }
}

/// Torus around the Z axis: `(R - sqrt(x² + y²))² + z² - r²`.
#[derive(Clone, Debug)]
pub struct TorusDensity {
  pub major_radius: f32,
  pub minor_radius: f32,
}

impl TorusDensity {
  pub fn new(major_radius: f32, minor_radius: f32) -> Self {
    Self {
      major_radius,
      minor_radius,
    }
  }
}

impl Density for TorusDensity {
  #[inline]
  fn density(&self, x: f32, y: f32, z: f32) -> f32 {
    let ring = self.major_radius - (x * x + y * y).sqrt();
    ring * ring + z * z - self.minor_radius * self.minor_radius
  }
}

/// Same value everywhere; produces no surface unless it equals the iso
/// level exactly.
#[derive(Clone, Copy, Debug)]
pub struct ConstantDensity(pub f32);

impl Density for ConstantDensity {
  #[inline]
  fn density(&self, _x: f32, _y: f32, _z: f32) -> f32 {
    self.0
  }
}

#[cfg(test)]
#[path = "density_test.rs"]
mod density_test;
