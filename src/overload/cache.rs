//! Process-wide resolution memo.
//!
//! Resolving an overloaded call means routing every candidate's every
//! argument through the conversion graph. The [`ResolutionCache`] memoises
//! the verdict per *fingerprint*: the owning set's identity plus the actual
//! argument's type and insight vectors. A later call with the same
//! fingerprint skips the tournament entirely and goes straight to the
//! recorded alternative.
//!
//! The cache synchronises internally with a mutex, which preserves the one
//! property the dispatch contract demands: a hit returns only an index that
//! a winning resolution on the same set previously installed.

use std::sync::{Mutex, PoisonError};

use rustc_hash::FxHashMap;

use overpass_core::{Insight, TypeToken};

use super::SetId;

/// Default entry bound before eviction kicks in.
pub const DEFAULT_CAPACITY: usize = 1024;

/// Owned cache key: set identity + type vector + insight vector.
///
/// The arity is the vectors' shared length. Stored keys own private copies
/// of both arrays; they never alias a caller's transient buffers.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct Fingerprint {
    set: SetId,
    types: Box<[TypeToken]>,
    insights: Box<[Insight]>,
}

/// A memoised verdict for one fingerprint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// Index of the winning candidate within the set.
    Chosen(usize),
    /// A full tournament already proved there is no match.
    Impossible,
}

/// Outcome of probing the cache.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Probe {
    /// No entry for this fingerprint.
    Miss,
    /// A winning candidate index was recorded earlier.
    Hit(usize),
    /// A no-match verdict was recorded earlier.
    Impossible,
}

/// Bounded memo from call fingerprints to resolution verdicts.
#[derive(Debug)]
pub struct ResolutionCache {
    entries: Mutex<FxHashMap<Fingerprint, Resolution>>,
    capacity: usize,
}

impl ResolutionCache {
    /// Create a cache with the default capacity.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Create a cache bounded to `capacity` entries.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Mutex::new(FxHashMap::default()),
            capacity: capacity.max(1),
        }
    }

    /// Look up the verdict for a fingerprint.
    pub fn probe(&self, set: SetId, types: &[TypeToken], insights: &[Insight]) -> Probe {
        let key = Fingerprint {
            set,
            types: types.into(),
            insights: insights.into(),
        };
        let entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        match entries.get(&key) {
            None => Probe::Miss,
            Some(Resolution::Chosen(index)) => Probe::Hit(*index),
            Some(Resolution::Impossible) => Probe::Impossible,
        }
    }

    /// Record a verdict for a fingerprint.
    ///
    /// At capacity an arbitrary existing entry is evicted first; the evicted
    /// key's owned arrays are dropped with it.
    pub fn store(
        &self,
        set: SetId,
        types: &[TypeToken],
        insights: &[Insight],
        resolution: Resolution,
    ) {
        let key = Fingerprint {
            set,
            types: types.into(),
            insights: insights.into(),
        };
        let mut entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        if entries.len() >= self.capacity && !entries.contains_key(&key) {
            if let Some(victim) = entries.keys().next().cloned() {
                entries.remove(&victim);
            }
        }
        entries.insert(key, resolution);
    }

    /// Empty the cache.
    pub fn flush(&self) {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }

    /// Number of entries currently held.
    pub fn len(&self) -> usize {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Whether the cache holds no entries.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The entry bound.
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl Default for ResolutionCache {
    fn default() -> Self {
        Self::new()
    }
}
