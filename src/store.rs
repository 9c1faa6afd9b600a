//! In-memory ordered collection of candies.
//!
//! Lookups scan in insertion order. Mutations on ids that are not present are
//! silent no-ops; signalling "not found" is left to the HTTP layer.

use crate::candy::{seed, Candy};

/// Outcome of [`CandyStore::replace`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Replaced {
    /// The record as supplied by the caller.
    pub candy: Candy,
    /// Number of slots overwritten; zero means nothing matched.
    pub matched: usize,
}

#[derive(Debug, Clone, Default)]
pub struct CandyStore {
    candies: Vec<Candy>,
}

impl CandyStore {
    /// Store holding the four seed records.
    pub fn new() -> Self {
        Self::with_candies(seed())
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn with_candies(candies: Vec<Candy>) -> Self {
        Self { candies }
    }

    pub fn list(&self) -> &[Candy] {
        &self.candies
    }

    pub fn len(&self) -> usize {
        self.candies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candies.is_empty()
    }

    /// First candy with the given id.
    pub fn get(&self, id: i64) -> Option<&Candy> {
        self.candies.iter().find(|c| c.id == id)
    }

    /// Append verbatim. Duplicate ids are accepted.
    pub fn create(&mut self, candy: Candy) -> Candy {
        self.candies.push(candy.clone());
        candy
    }

    /// Remove the first candy with the given id. `None` leaves the store untouched.
    pub fn delete(&mut self, id: i64) -> Option<Candy> {
        let pos = self.candies.iter().position(|c| c.id == id)?;
        Some(self.candies.remove(pos))
    }

    /// Overwrite every slot whose id matches with `candy`, id included.
    pub fn replace(&mut self, id: i64, candy: Candy) -> Replaced {
        let mut matched = 0;
        for slot in self.candies.iter_mut().filter(|c| c.id == id) {
            *slot = candy.clone();
            matched += 1;
        }
        Replaced { candy, matched }
    }
}
