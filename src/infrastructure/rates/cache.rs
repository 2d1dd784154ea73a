//! # Exchange-Rate Cache
//!
//! A process-wide, injectable cache for the USD exchange rate with a
//! time-to-live.
//!
//! The cache is a single read-mostly value behind a `parking_lot`
//! read-write lock. There is no lock held across await points and no
//! fetch coordination: two concurrent refreshes race benignly (last
//! write wins, both writes carry the same or very similar rates). A
//! failed refresh leaves the cache unpopulated so the next call retries
//! the live source.

use parking_lot::RwLock;
use rust_decimal::Decimal;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Default time-to-live for a cached rate: one hour.
pub const DEFAULT_TTL: Duration = Duration::from_secs(60 * 60);

#[derive(Debug, Clone, Copy)]
struct CachedRate {
    rate: Decimal,
    fetched_at: Instant,
}

/// Shared, TTL-bounded exchange-rate cache.
///
/// Cheap to clone; all clones share the same slot.
///
/// # Examples
///
/// ```
/// use quote_engine::infrastructure::rates::cache::RateCache;
/// use rust_decimal::Decimal;
///
/// let cache = RateCache::with_default_ttl();
/// assert_eq!(cache.get(), None);
/// cache.set(Decimal::from(1550));
/// assert_eq!(cache.get(), Some(Decimal::from(1550)));
/// ```
#[derive(Debug, Clone)]
pub struct RateCache {
    slot: Arc<RwLock<Option<CachedRate>>>,
    ttl: Duration,
}

impl RateCache {
    /// Creates an empty cache with the given time-to-live.
    #[must_use]
    pub fn new(ttl: Duration) -> Self {
        Self {
            slot: Arc::new(RwLock::new(None)),
            ttl,
        }
    }

    /// Creates an empty cache with the one-hour default TTL.
    #[must_use]
    pub fn with_default_ttl() -> Self {
        Self::new(DEFAULT_TTL)
    }

    /// Returns the cached rate if one is present and fresh.
    #[must_use]
    pub fn get(&self) -> Option<Decimal> {
        let slot = self.slot.read();
        match *slot {
            Some(cached) if cached.fetched_at.elapsed() < self.ttl => Some(cached.rate),
            _ => None,
        }
    }

    /// Stores a rate with the current timestamp.
    pub fn set(&self, rate: Decimal) {
        let mut slot = self.slot.write();
        *slot = Some(CachedRate {
            rate,
            fetched_at: Instant::now(),
        });
    }

    /// Returns true if no fresh rate is cached.
    #[must_use]
    pub fn is_expired(&self) -> bool {
        self.get().is_none()
    }

    /// Drops any cached rate.
    pub fn clear(&self) {
        let mut slot = self.slot.write();
        *slot = None;
    }
}

impl Default for RateCache {
    fn default() -> Self {
        Self::with_default_ttl()
    }
}
