//! Multiset of enemy ships still afloat, keyed by ship length.

use alloc::collections::BTreeMap;
use core::fmt;

use crate::core::error::TargetingError;

/// Remaining enemy fleet. An entry is present only while its count is
/// positive.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Fleet {
    afloat: BTreeMap<usize, usize>,
}

impl Fleet {
    /// Empty fleet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a fleet from `(length, count)` pairs. Zero counts and zero
    /// lengths are dropped; repeated lengths accumulate.
    pub fn from_counts<I>(counts: I) -> Self
    where
        I: IntoIterator<Item = (usize, usize)>,
    {
        let mut afloat = BTreeMap::new();
        for (length, count) in counts {
            if length == 0 || count == 0 {
                continue;
            }
            *afloat.entry(length).or_insert(0) += count;
        }
        Self { afloat }
    }

    /// Number of ships of `length` still afloat.
    pub fn count(&self, length: usize) -> usize {
        self.afloat.get(&length).copied().unwrap_or(0)
    }

    /// Retire one ship of `length`, dropping the entry when it reaches zero.
    pub fn decrement(&mut self, length: usize) -> Result<(), TargetingError> {
        let count = self
            .afloat
            .get_mut(&length)
            .ok_or(TargetingError::FleetInconsistency { length })?;
        *count -= 1;
        if *count == 0 {
            self.afloat.remove(&length);
        }
        Ok(())
    }

    /// `(length, count)` pairs in ascending length order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.afloat.iter().map(|(&length, &count)| (length, count))
    }

    pub fn is_empty(&self) -> bool {
        self.afloat.is_empty()
    }

    /// Total number of ships afloat.
    pub fn ship_count(&self) -> usize {
        self.afloat.values().sum()
    }
}

impl fmt::Display for Fleet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (length, count) in self.iter() {
            if !first {
                write!(f, " ")?;
            }
            write!(f, "{}:{}", length, count)?;
            first = false;
        }
        Ok(())
    }
}

impl FromIterator<(usize, usize)> for Fleet {
    fn from_iter<I: IntoIterator<Item = (usize, usize)>>(iter: I) -> Self {
        Fleet::from_counts(iter)
    }
}
