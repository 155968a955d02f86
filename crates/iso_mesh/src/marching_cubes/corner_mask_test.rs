use super::*;

#[test]
fn test_all_positive() {
  let samples = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0];
  assert_eq!(build(&samples, 0.0), 0b11111111);
}

#[test]
fn test_all_negative() {
  let samples = [-1.0, -2.0, -3.0, -4.0, -5.0, -6.0, -7.0, -8.0];
  assert_eq!(build(&samples, 0.0), 0b00000000);
}

#[test]
fn test_mixed() {
  // Corners 1, 3, 5, 7 positive
  let samples = [-1.0, 1.0, -1.0, 1.0, -1.0, 1.0, -1.0, 1.0];
  assert_eq!(build(&samples, 0.0), 0b10101010);
}

#[test]
fn test_first_corner_only() {
  let samples = [1.0, -1.0, -1.0, -1.0, -1.0, -1.0, -1.0, -1.0];
  assert_eq!(build(&samples, 0.0), 0b00000001);
}

#[test]
fn test_zero_is_below() {
  // Zero should NOT be considered above the surface
  let samples = [0.0; 8];
  assert_eq!(build(&samples, 0.0), 0b00000000);
}

#[test]
fn test_iso_level_shifts_threshold() {
  let samples = [0.5, 1.5, 0.5, 1.5, 0.5, 1.5, 0.5, 1.5];
  assert_eq!(build(&samples, 0.0), 0b11111111);
  assert_eq!(build(&samples, 1.0), 0b10101010);
  assert_eq!(build(&samples, 2.0), 0b00000000);
}

#[test]
fn test_every_pattern_roundtrips() {
  for pattern in 0u8..=255 {
    let samples: [f32; 8] =
      std::array::from_fn(|i| if (pattern >> i) & 1 == 1 { 1.0 } else { -1.0 });
    assert_eq!(build(&samples, 0.0), pattern, "Mismatch for pattern {:#010b}", pattern);
  }
}
