//! Vertex welding for shared edge crossings.
//!
//! Each grid edge is shared by up to four cells. Keying emitted vertices by
//! the unordered pair of grid-point indices the edge connects guarantees one
//! output vertex per crossing, whichever cell reaches it first.

use std::collections::HashMap;

/// Unordered pair of flat grid-point indices identifying a lattice edge.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EdgeKey(usize, usize);

impl EdgeKey {
  #[inline]
  pub fn new(a: usize, b: usize) -> Self {
    if a <= b {
      Self(a, b)
    } else {
      Self(b, a)
    }
  }

  #[inline]
  pub fn endpoints(&self) -> (usize, usize) {
    (self.0, self.1)
  }
}

/// Map from lattice edge to emitted vertex index.
#[derive(Debug, Default)]
pub struct VertexWelder {
  vertices: HashMap<EdgeKey, u32>,
  reused: usize,
}

impl VertexWelder {
  pub fn new() -> Self {
    Self::default()
  }

  /// Return the vertex for `key`, calling `emit` to create it on first use.
  #[inline]
  pub fn get_or_insert_with(&mut self, key: EdgeKey, emit: impl FnOnce() -> u32) -> u32 {
    if let Some(&index) = self.vertices.get(&key) {
      self.reused += 1;
      return index;
    }
    let index = emit();
    self.vertices.insert(key, index);
    index
  }

  /// Distinct crossings seen.
  pub fn len(&self) -> usize {
    self.vertices.len()
  }

  pub fn is_empty(&self) -> bool {
    self.vertices.is_empty()
  }

  /// Lookups answered by an existing vertex.
  pub fn reused(&self) -> usize {
    self.reused
  }
}

#[cfg(test)]
#[path = "weld_test.rs"]
mod weld_test;
