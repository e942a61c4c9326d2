//! Filtering and random selection over a catalog view.

use std::sync::Mutex;

use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::catalog::{CatalogRecord, Difficulty};

/// Source of uniform indices in `[0, len)`.
///
/// Callers guarantee `len > 0`.
pub trait IndexSource: Send + Sync {
    fn pick(&self, len: usize) -> usize;
}

/// Thread-local RNG; the production source.
#[derive(Clone, Copy, Debug, Default)]
pub struct ThreadRandom;

impl IndexSource for ThreadRandom {
    fn pick(&self, len: usize) -> usize {
        rand::thread_rng().gen_range(0..len)
    }
}

/// Deterministic RNG for reproducible runs and tests.
#[derive(Debug)]
pub struct SeededRandom {
    rng: Mutex<StdRng>,
}

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl IndexSource for SeededRandom {
    fn pick(&self, len: usize) -> usize {
        match self.rng.lock() {
            Ok(mut rng) => rng.gen_range(0..len),
            Err(poisoned) => poisoned.into_inner().gen_range(0..len),
        }
    }
}

/// Always returns the same index (clamped to the candidate set).
#[derive(Clone, Copy, Debug)]
pub struct FixedIndex(pub usize);

impl IndexSource for FixedIndex {
    fn pick(&self, len: usize) -> usize {
        self.0.min(len.saturating_sub(1))
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SelectError {
    /// Nothing to select from at all (catalog not loaded or source empty).
    #[error("catalog is empty")]
    EmptyCatalog,
    /// Filters left no candidates.
    #[error("no problem matches the given search")]
    NoMatch,
}

/// Keep only records of the given difficulty.
pub fn filter_difficulty<'a>(
    records: impl IntoIterator<Item = &'a CatalogRecord>,
    difficulty: Difficulty,
) -> Vec<&'a CatalogRecord> {
    records
        .into_iter()
        .filter(|r| r.difficulty == difficulty)
        .collect()
}

/// Keep only records whose title contains `needle`, ignoring case.
pub fn filter_search<'a>(
    records: impl IntoIterator<Item = &'a CatalogRecord>,
    needle: &str,
) -> Vec<&'a CatalogRecord> {
    let needle = needle.to_lowercase();
    records
        .into_iter()
        .filter(|r| r.title.to_lowercase().contains(&needle))
        .collect()
}

/// Apply the optional filters and pick one record uniformly from what is left.
pub fn select<'a>(
    records: &'a [CatalogRecord],
    difficulty: Option<Difficulty>,
    search_text: &str,
    source: &dyn IndexSource,
) -> Result<&'a CatalogRecord, SelectError> {
    if records.is_empty() {
        return Err(SelectError::EmptyCatalog);
    }

    let mut candidates: Vec<&CatalogRecord> = match difficulty {
        Some(d) => filter_difficulty(records, d),
        None => records.iter().collect(),
    };

    let search_text = search_text.trim();
    if !search_text.is_empty() {
        candidates = filter_search(candidates, search_text);
    }

    if candidates.is_empty() {
        return Err(SelectError::NoMatch);
    }

    let idx = source.pick(candidates.len());
    candidates
        .get(idx)
        .copied()
        .ok_or(SelectError::NoMatch)
}
