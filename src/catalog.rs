//! Knapsack item catalog, fitness evaluation and the text loader.
//!
//! The catalog is the only problem data the GA needs. Its item order defines
//! genome bit positions, so it must stay fixed for the duration of a run.
//!
//! # Text format
//!
//! ```text
//! capacity: 6404180
//! 382745,825594
//! 799601,1677009
//! ```
//!
//! The first line declares the capacity; each following non-blank line is a
//! `weight,value` pair.

use crate::error::{ConfigError, Error, ParseError};
use crate::ga::{Fitness, Genome};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// A single knapsack item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Item {
    pub weight: u64,
    pub value: u64,
}

impl Item {
    pub fn new(weight: u64, value: u64) -> Self {
        Self { weight, value }
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(weight= {}, value= {})", self.weight, self.value)
    }
}

/// Ordered items plus the capacity bound.
///
/// Construction guarantees that the sum of all weights and the sum of all
/// values fit in `u64`, so [`evaluate`](Self::evaluate) never overflows.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Catalog {
    items: Vec<Item>,
    capacity: u64,
}

impl Catalog {
    /// Creates a catalog.
    ///
    /// Fails with [`ConfigError::CatalogOverflow`] when the summed weights
    /// or values exceed `u64::MAX`.
    pub fn new(items: Vec<Item>, capacity: u64) -> Result<Self, ConfigError> {
        let mut weight = 0u64;
        let mut value = 0u64;
        for item in &items {
            weight = weight
                .checked_add(item.weight)
                .ok_or(ConfigError::CatalogOverflow("weight"))?;
            value = value
                .checked_add(item.value)
                .ok_or(ConfigError::CatalogOverflow("value"))?;
        }
        Ok(Self { items, capacity })
    }

    /// Reads a catalog from a file in the text format.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let text = std::fs::read_to_string(path)?;
        text.parse()
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn capacity(&self) -> u64 {
        self.capacity
    }

    /// Number of items, which is also the genome length.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sums weight and value over the selected items.
    ///
    /// Returns [`Fitness::Infeasible`] iff the total weight exceeds the
    /// capacity. Accepts any bit pattern.
    ///
    /// # Panics
    /// Panics if the genome is longer than the catalog.
    pub fn evaluate(&self, genome: &Genome) -> Fitness {
        let (weight, value) = genome
            .iter_ones()
            .map(|i| &self.items[i])
            .fold((0u64, 0u64), |(w, v), item| (w + item.weight, v + item.value));

        if weight <= self.capacity {
            Fitness::Feasible { weight, value }
        } else {
            Fitness::Infeasible
        }
    }

    /// The selected items, in catalog order.
    pub fn decode(&self, genome: &Genome) -> Vec<Item> {
        genome.iter_ones().map(|i| self.items[i]).collect()
    }

    /// Builds a genome selecting the given item positions.
    ///
    /// # Panics
    /// Panics if an index is out of range.
    pub fn encode<I: IntoIterator<Item = usize>>(&self, indices: I) -> Genome {
        let mut genome = Genome::zeroed(self.len());
        for i in indices {
            genome.set(i, true);
        }
        genome
    }
}

impl FromStr for Catalog {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut lines = s
            .lines()
            .enumerate()
            .map(|(i, l)| (i + 1, l.trim()))
            .filter(|(_, l)| !l.is_empty());

        let (line, header) = lines.next().ok_or(ParseError::MissingHeader)?;
        let capacity = parse_header(line, header)?;

        let items = lines
            .map(|(line, text)| parse_item(line, text))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Catalog::new(items, capacity)?)
    }
}

fn parse_header(line: usize, text: &str) -> Result<u64, ParseError> {
    let bad = || ParseError::BadHeader {
        line,
        text: text.to_string(),
    };
    let (key, number) = text.split_once(':').ok_or_else(bad)?;
    if !key.trim().eq_ignore_ascii_case("capacity") {
        return Err(bad());
    }
    parse_u64(line, number)
}

fn parse_item(line: usize, text: &str) -> Result<Item, ParseError> {
    let (weight, value) = text.split_once(',').ok_or_else(|| ParseError::BadItem {
        line,
        text: text.to_string(),
    })?;
    Ok(Item {
        weight: parse_u64(line, weight)?,
        value: parse_u64(line, value)?,
    })
}

fn parse_u64(line: usize, text: &str) -> Result<u64, ParseError> {
    let text = text.trim();
    text.parse().map_err(|_| ParseError::BadInteger {
        line,
        text: text.to_string(),
    })
}
