//! Core value types for the knapsack GA.
//!
//! A [`Genome`] is a packed bit vector whose bit `i` selects catalog item `i`.
//! A [`Fitness`] is derived from a genome on demand by
//! [`Catalog::evaluate`](crate::Catalog::evaluate) and is never cached on the
//! genome itself.

use bitvec::prelude::*;
use std::fmt;

/// Bit-vector encoding of an item subset.
///
/// Backed by machine words, so equality and hashing are cheap. This is what
/// the initializer relies on for its uniqueness check.
#[derive(Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Genome {
    bits: BitVec<usize, Lsb0>,
}

impl Genome {
    /// All-zero genome of the given length (empty knapsack).
    pub fn zeroed(len: usize) -> Self {
        Self {
            bits: bitvec![usize, Lsb0; 0; len],
        }
    }

    /// Builds a genome from a sequence of bits, in item order.
    pub fn from_bits<I: IntoIterator<Item = bool>>(bits: I) -> Self {
        Self {
            bits: bits.into_iter().collect(),
        }
    }

    /// Number of bits (equals the catalog length).
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    /// Returns `true` for a zero-length genome.
    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// Returns bit `index`.
    ///
    /// # Panics
    /// Panics if `index >= self.len()`.
    pub fn get(&self, index: usize) -> bool {
        self.bits[index]
    }

    /// Sets bit `index` in place.
    ///
    /// # Panics
    /// Panics if `index >= self.len()`.
    pub fn set(&mut self, index: usize, value: bool) {
        self.bits.set(index, value);
    }

    /// Returns a copy with bit `index` inverted.
    ///
    /// # Panics
    /// Panics if `index >= self.len()`.
    pub fn flipped(&self, index: usize) -> Self {
        let mut out = self.clone();
        let old = out.bits[index];
        out.bits.set(index, !old);
        out
    }

    /// Number of selected items.
    pub fn count_ones(&self) -> usize {
        self.bits.count_ones()
    }

    /// Positions of the selected items, ascending.
    pub fn iter_ones(&self) -> impl Iterator<Item = usize> + '_ {
        self.bits.iter_ones()
    }

    /// Number of positions where `self` and `other` differ.
    ///
    /// # Panics
    /// Panics if the lengths differ.
    pub fn hamming_distance(&self, other: &Genome) -> usize {
        assert_eq!(self.len(), other.len(), "genomes must have equal length");
        self.bits
            .iter()
            .by_vals()
            .zip(other.bits.iter().by_vals())
            .filter(|(a, b)| a != b)
            .count()
    }

    pub(crate) fn as_bitslice(&self) -> &BitSlice<usize, Lsb0> {
        &self.bits
    }

    pub(crate) fn as_mut_bitslice(&mut self) -> &mut BitSlice<usize, Lsb0> {
        &mut self.bits
    }
}

impl fmt::Debug for Genome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Genome({self})")
    }
}

/// Renders as a `0`/`1` string in item order.
impl fmt::Display for Genome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for bit in self.bits.iter().by_vals() {
            f.write_str(if bit { "1" } else { "0" })?;
        }
        Ok(())
    }
}

/// Total weight and value of a genome, or the infeasible marker.
///
/// `Infeasible` behaves as weight = +inf, value = -inf: it ranks below every
/// feasible genome, including the empty knapsack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Fitness {
    Feasible { weight: u64, value: u64 },
    Infeasible,
}

impl Fitness {
    pub fn is_feasible(self) -> bool {
        matches!(self, Fitness::Feasible { .. })
    }

    /// Total value, `None` when infeasible.
    pub fn value(self) -> Option<u64> {
        match self {
            Fitness::Feasible { value, .. } => Some(value),
            Fitness::Infeasible => None,
        }
    }

    /// Total weight, `None` when infeasible.
    pub fn weight(self) -> Option<u64> {
        match self {
            Fitness::Feasible { weight, .. } => Some(weight),
            Fitness::Infeasible => None,
        }
    }

    /// Key used for ranking. `None` orders below any `Some`, which puts
    /// infeasible genomes last in a descending sort.
    pub fn rank_key(self) -> Option<u64> {
        self.value()
    }
}
