//! Memo cache for prime queries.

use crate::gpf;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

/// Memoizes [`gpf`](crate::gpf) and [`factorize`](crate::factorize) results.
///
/// Both stores are keyed by the exact input, grow without bound and are only
/// emptied by [`clear`](Self::clear). Every writer for a key computes the same
/// value, so racing inserts are harmless and no entry ever needs updating.
///
/// The cache is an accelerator only: a [`disabled`](Self::disabled) cache
/// recomputes every query and returns identical answers.
///
/// ```
/// use unshape_primes::PrimeCache;
///
/// let cache = PrimeCache::new();
/// assert_eq!(cache.gpf(91), 13);
/// assert_eq!(cache.gpf(91), 13);
/// assert_eq!(cache.stats().hits, 1);
/// assert_eq!(cache.factorize(72), "2³·3²");
/// ```
pub struct PrimeCache {
    enabled: bool,
    gpf: RwLock<HashMap<i64, i64>>,
    factorizations: RwLock<HashMap<i64, String>>,
    hits: AtomicU64,
    misses: AtomicU64,
}

/// Snapshot of cache counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CacheStats {
    /// Lookups answered from a store.
    pub hits: u64,
    /// Lookups that had to compute.
    pub misses: u64,
    /// Entries in the greatest-prime-factor store.
    pub gpf_entries: usize,
    /// Entries in the factorization store.
    pub factorization_entries: usize,
}

impl PrimeCache {
    /// Creates an empty, enabled cache.
    pub fn new() -> Self {
        Self::with_enabled(true)
    }

    /// Creates a cache that never stores anything.
    pub fn disabled() -> Self {
        Self::with_enabled(false)
    }

    fn with_enabled(enabled: bool) -> Self {
        Self {
            enabled,
            gpf: RwLock::new(HashMap::new()),
            factorizations: RwLock::new(HashMap::new()),
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
        }
    }

    /// Returns `true` if results are being stored.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Greatest prime factor of `n`, memoized.
    ///
    /// `n <= 1` returns the sentinel `1` without touching the store.
    pub fn gpf(&self, n: i64) -> i64 {
        if n <= 1 {
            return 1;
        }
        if !self.enabled {
            return gpf(n);
        }
        if let Some(&g) = self.gpf.read().get(&n) {
            self.hits.fetch_add(1, Ordering::Relaxed);
            return g;
        }
        self.misses.fetch_add(1, Ordering::Relaxed);
        let g = gpf(n);
        self.gpf.write().insert(n, g);
        g
    }

    /// Primality of `n`, answered through [`gpf`](Self::gpf).
    pub fn is_prime(&self, n: i64) -> bool {
        n > 1 && self.gpf(n) == n
    }

    /// Formatted factorization of `n`, memoized.
    ///
    /// Values `n <= 1` are formatted directly and never stored.
    pub fn factorize(&self, n: i64) -> String {
        if n <= 1 || !self.enabled {
            return crate::factorize(n);
        }
        if let Some(s) = self.factorizations.read().get(&n) {
            self.hits.fetch_add(1, Ordering::Relaxed);
            return s.clone();
        }
        self.misses.fetch_add(1, Ordering::Relaxed);
        let s = crate::factorize(n);
        self.factorizations.write().insert(n, s.clone());
        s
    }

    /// Returns the current counters and store sizes.
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            gpf_entries: self.gpf.read().len(),
            factorization_entries: self.factorizations.read().len(),
        }
    }

    /// Drops every stored entry and resets the counters.
    pub fn clear(&self) {
        self.gpf.write().clear();
        self.factorizations.write().clear();
        self.hits.store(0, Ordering::Relaxed);
        self.misses.store(0, Ordering::Relaxed);
    }
}

impl Default for PrimeCache {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for PrimeCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let stats = self.stats();
        f.debug_struct("PrimeCache")
            .field("enabled", &self.enabled)
            .field("gpf_entries", &stats.gpf_entries)
            .field("factorization_entries", &stats.factorization_entries)
            .field("hits", &stats.hits)
            .field("misses", &stats.misses)
            .finish()
    }
}
