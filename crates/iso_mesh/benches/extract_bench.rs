//! Marching cubes extraction benchmarks.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use glam::Vec3;
use iso_mesh::{marching_cubes, ExtractConfig, NormalMode, SphereDensity, TorusDensity};

/// Union of overlapping spheres, the shape of a sculpted blob.
fn blob(x: f32, y: f32, z: f32) -> f32 {
  let spheres = [
    (Vec3::new(-0.6, 0.0, 0.0), 0.8),
    (Vec3::new(0.6, 0.0, 0.0), 0.8),
    (Vec3::new(0.0, 0.6, 0.0), 0.6),
    (Vec3::new(0.0, -0.6, 0.0), 0.6),
    (Vec3::new(0.0, 0.0, 0.0), 1.0),
  ];
  let p = Vec3::new(x, y, z);
  spheres
    .iter()
    .map(|(center, radius)| (p - *center).length() - radius)
    .fold(f32::INFINITY, f32::min)
}

fn bench_sphere_resolution(c: &mut Criterion) {
  let mut group = c.benchmark_group("extract_sphere");
  let sphere = SphereDensity::unit();

  for resolution in [16, 32, 64] {
    let config = ExtractConfig::new()
      .with_resolution(resolution)
      .with_bounds(Vec3::splat(-2.0), Vec3::splat(2.0));

    group.bench_with_input(
      BenchmarkId::new("no_normals", resolution),
      &config,
      |b, config| b.iter(|| marching_cubes::extract_with_config(black_box(&sphere), config)),
    );
  }

  group.finish();
}

fn bench_normal_modes(c: &mut Criterion) {
  let mut group = c.benchmark_group("extract_normals");
  let torus = TorusDensity::new(1.2, 0.5);

  for (name, mode) in [
    ("none", NormalMode::None),
    ("gradient", NormalMode::Gradient),
    ("geometry", NormalMode::Geometry),
  ] {
    let config = ExtractConfig::new()
      .with_resolution(48)
      .with_bounds(Vec3::splat(-2.0), Vec3::splat(2.0))
      .with_normal_mode(mode);

    group.bench_function(name, |b| {
      b.iter(|| marching_cubes::extract_with_config(black_box(&torus), &config))
    });
  }

  group.finish();
}

fn bench_closure_density(c: &mut Criterion) {
  c.bench_function("extract_blob (48³)", |b| {
    b.iter(|| marching_cubes::extract(black_box(&blob), 48, Vec3::splat(-2.0), Vec3::splat(2.0)))
  });
}

criterion_group!(
  benches,
  bench_sphere_resolution,
  bench_normal_modes,
  bench_closure_density
);
criterion_main!(benches);
