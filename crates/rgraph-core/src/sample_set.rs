//! Dynamic set with O(1) insert, remove, and uniform random selection.

use std::collections::HashMap;
use std::hash::Hash;

use rand::Rng;

use crate::errors::{ErrorInfo, RgError};
use crate::rng::ChainRng;

/// A set of elements supporting constant-time mutation and uniform sampling.
///
/// Elements live in a dense vector, with a position index alongside it:
/// removal swaps the victim into the last slot before shrinking, and a
/// uniform pick is a single random index draw. No ordering is guaranteed;
/// iteration order may change after any mutation.
#[derive(Debug, Clone)]
pub struct SampleSet<T> {
    items: Vec<T>,
    positions: HashMap<T, usize>,
}

impl<T> Default for SampleSet<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            positions: HashMap::new(),
        }
    }
}

impl<T: Copy + Eq + Hash> SampleSet<T> {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a set from the provided elements.
    ///
    /// Fails with `duplicate-element` if the same element appears twice.
    pub fn from_items(items: impl IntoIterator<Item = T>) -> Result<Self, RgError> {
        let mut set = Self::new();
        for item in items {
            set.insert(item)?;
        }
        Ok(set)
    }

    /// Returns the number of held elements.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns whether the set is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns whether the element is currently held. Never fails.
    pub fn contains(&self, item: &T) -> bool {
        self.positions.contains_key(item)
    }

    /// Inserts an element, failing with `duplicate-element` if present.
    pub fn insert(&mut self, item: T) -> Result<(), RgError> {
        if self.positions.contains_key(&item) {
            return Err(set_error("duplicate-element", "element already present"));
        }
        self.positions.insert(item, self.items.len());
        self.items.push(item);
        Ok(())
    }

    /// Removes an element, failing with `missing-element` if absent.
    pub fn remove(&mut self, item: &T) -> Result<(), RgError> {
        let position = self
            .positions
            .remove(item)
            .ok_or_else(|| set_error("missing-element", "element not present"))?;
        let last = self.items.pop().filter(|last| *last != *item);
        if let Some(last) = last {
            self.items[position] = last;
            self.positions.insert(last, position);
        }
        Ok(())
    }

    /// Replaces `old` with `new` in the same slot.
    ///
    /// Equivalent to a fused remove-and-insert; this is the fast path used
    /// by switch moves, where two replacements implement one switch.
    pub fn replace(&mut self, old: &T, new: T) -> Result<(), RgError> {
        if self.positions.contains_key(&new) {
            return Err(set_error("duplicate-element", "element already present"));
        }
        let position = self
            .positions
            .remove(old)
            .ok_or_else(|| set_error("missing-element", "element not present"))?;
        self.positions.insert(new, position);
        self.items[position] = new;
        Ok(())
    }

    /// Picks one element uniformly at random.
    ///
    /// Fails with `empty-set` when no elements are held; otherwise every
    /// held element is returned with probability exactly `1 / len`,
    /// independent of the mutation history.
    pub fn pick(&self, rng: &mut ChainRng) -> Result<T, RgError> {
        if self.items.is_empty() {
            return Err(set_error("empty-set", "cannot pick from an empty set"));
        }
        let index = rng.gen_range(0..self.items.len());
        Ok(self.items[index])
    }

    /// Picks two distinct elements uniformly without replacement.
    ///
    /// Fails with `empty-set` when fewer than two elements are held.
    pub fn pick_distinct_pair(&self, rng: &mut ChainRng) -> Result<(T, T), RgError> {
        if self.items.len() < 2 {
            return Err(set_error(
                "empty-set",
                "need at least two elements to pick a distinct pair",
            ));
        }
        let first = rng.gen_range(0..self.items.len());
        let mut second = rng.gen_range(0..self.items.len() - 1);
        if second >= first {
            second += 1;
        }
        Ok((self.items[first], self.items[second]))
    }

    /// Iterates over the held elements in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.items.iter()
    }
}

fn set_error(code: &str, message: &str) -> RgError {
    RgError::SampleSet(ErrorInfo::new(code, message))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remove_swaps_last_into_place() {
        let mut set = SampleSet::from_items(0..5).unwrap();
        set.remove(&1).unwrap();
        assert_eq!(set.len(), 4);
        assert!(!set.contains(&1));
        for item in [0, 2, 3, 4] {
            assert!(set.contains(&item));
        }
    }

    #[test]
    fn remove_last_element_does_not_resurrect_it() {
        let mut set = SampleSet::from_items([7]).unwrap();
        set.remove(&7).unwrap();
        assert!(set.is_empty());
        assert!(!set.contains(&7));
    }
}
