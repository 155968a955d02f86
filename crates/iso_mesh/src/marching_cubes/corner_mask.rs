//! Corner mask computation.
//!
//! The corner mask is an 8-bit value where each bit indicates whether a corner
//! of the cell lies above the iso level.

/// Build corner mask from 8 density samples.
///
/// Bit `i` corresponds to corner `i` in the marching cubes numbering and is
/// set when `samples[i] > iso_level`. A sample exactly on the iso level counts
/// as below.
#[inline]
pub fn build(samples: &[f32; 8], iso_level: f32) -> u8 {
  let mut corner_mask = 0u8;
  for (i, &sample) in samples.iter().enumerate() {
    if sample > iso_level {
      corner_mask |= 1 << i;
    }
  }
  corner_mask
}

#[cfg(test)]
#[path = "corner_mask_test.rs"]
mod corner_mask_test;
