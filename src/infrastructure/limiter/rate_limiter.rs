use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use dashmap::{mapref::entry::Entry, DashMap};
use rand::Rng;
use serde::Serialize;

/// Outcome of counting one request against a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RateLimitDecision {
    pub allowed: bool,
    pub remaining: u32,
    pub reset_time: DateTime<Utc>,
}

/// Read-only view of a key's window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RateLimitStatus {
    pub count: u32,
    pub remaining: u32,
    pub reset_time: DateTime<Utc>,
}

/// Per-client request counter. Implementations never fail: a broken
/// backend must still produce a decision.
#[async_trait]
pub trait RateLimitStore: Send + Sync {
    /// Counts one request for `key`.
    async fn check(&self, key: &str) -> RateLimitDecision;

    /// Current window for `key` without counting a request.
    async fn status(&self, key: &str) -> RateLimitStatus;

    async fn reset(&self, key: &str);

    /// Drops every expired window, returning how many were removed.
    async fn purge_expired(&self) -> usize;

    async fn tracked_keys(&self) -> usize;
}

#[derive(Debug, Clone, Copy)]
struct RateLimitEntry {
    count: u32,
    reset_time: DateTime<Utc>,
}

/// Fixed-window limiter held in process memory.
///
/// The window is anchored at a key's first request and replaced wholesale
/// once it has passed. Expired windows are swept lazily: each check has a
/// `cleanup_probability` chance of scanning the whole map.
#[derive(Clone)]
pub struct InMemoryRateLimiter {
    entries: Arc<DashMap<String, RateLimitEntry>>,
    max_requests: u32,
    window: Duration,
    cleanup_probability: f64,
}

impl InMemoryRateLimiter {
    pub const DEFAULT_MAX_REQUESTS: u32 = 5;
    pub const DEFAULT_WINDOW_SECS: u64 = 60 * 60;
    pub const DEFAULT_CLEANUP_PROBABILITY: f64 = 0.1;

    pub fn new(max_requests: u32, window: std::time::Duration, cleanup_probability: f64) -> Self {
        Self {
            entries: Arc::new(DashMap::new()),
            max_requests,
            window: Duration::from_std(window).unwrap_or(Duration::MAX),
            cleanup_probability: cleanup_probability.clamp(0.0, 1.0),
        }
    }

    pub fn max_requests(&self) -> u32 {
        self.max_requests
    }

    /// [`RateLimitStore::check`] evaluated at an explicit instant.
    pub fn check_at(&self, key: &str, now: DateTime<Utc>) -> RateLimitDecision {
        if self.cleanup_probability > 0.0 && rand::thread_rng().gen_bool(self.cleanup_probability) {
            let removed = self.purge_expired_at(now);
            if removed > 0 {
                tracing::debug!(removed, "Purged expired rate limit windows");
            }
        }

        match self.entries.entry(key.to_string()) {
            Entry::Occupied(mut occupied) if now <= occupied.get().reset_time => {
                let entry = occupied.get_mut();
                entry.count = entry.count.saturating_add(1);

                RateLimitDecision {
                    allowed: entry.count <= self.max_requests,
                    remaining: self.max_requests.saturating_sub(entry.count),
                    reset_time: entry.reset_time,
                }
            }
            Entry::Occupied(mut occupied) => {
                let fresh = self.fresh_entry(now);
                occupied.insert(fresh);
                self.first_request(fresh)
            }
            Entry::Vacant(vacant) => {
                let fresh = self.fresh_entry(now);
                vacant.insert(fresh);
                self.first_request(fresh)
            }
        }
    }

    pub fn status_at(&self, key: &str, now: DateTime<Utc>) -> RateLimitStatus {
        match self.entries.get(key) {
            Some(entry) if now <= entry.reset_time => RateLimitStatus {
                count: entry.count,
                remaining: self.max_requests.saturating_sub(entry.count),
                reset_time: entry.reset_time,
            },
            _ => RateLimitStatus {
                count: 0,
                remaining: self.max_requests,
                reset_time: self.window_end(now),
            },
        }
    }

    pub fn purge_expired_at(&self, now: DateTime<Utc>) -> usize {
        let before = self.entries.len();
        self.entries.retain(|_, entry| now <= entry.reset_time);
        before.saturating_sub(self.entries.len())
    }

    fn fresh_entry(&self, now: DateTime<Utc>) -> RateLimitEntry {
        RateLimitEntry {
            count: 1,
            reset_time: self.window_end(now),
        }
    }

    /// End of a window opened at `now`, saturating at the latest
    /// representable instant.
    fn window_end(&self, now: DateTime<Utc>) -> DateTime<Utc> {
        now.checked_add_signed(self.window).unwrap_or(DateTime::<Utc>::MAX_UTC)
    }

    fn first_request(&self, entry: RateLimitEntry) -> RateLimitDecision {
        RateLimitDecision {
            allowed: entry.count <= self.max_requests,
            remaining: self.max_requests.saturating_sub(entry.count),
            reset_time: entry.reset_time,
        }
    }
}

impl Default for InMemoryRateLimiter {
    fn default() -> Self {
        Self::new(
            Self::DEFAULT_MAX_REQUESTS,
            std::time::Duration::from_secs(Self::DEFAULT_WINDOW_SECS),
            Self::DEFAULT_CLEANUP_PROBABILITY,
        )
    }
}

#[async_trait]
impl RateLimitStore for InMemoryRateLimiter {
    async fn check(&self, key: &str) -> RateLimitDecision {
        self.check_at(key, Utc::now())
    }

    async fn status(&self, key: &str) -> RateLimitStatus {
        self.status_at(key, Utc::now())
    }

    async fn reset(&self, key: &str) {
        self.entries.remove(key);
    }

    async fn purge_expired(&self) -> usize {
        self.purge_expired_at(Utc::now())
    }

    async fn tracked_keys(&self) -> usize {
        self.entries.len()
    }
}
