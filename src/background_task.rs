use std::{sync::Arc, time::Duration};

use tokio::time::{interval, MissedTickBehavior};

use crate::limiter::rate_limiter::RateLimitStore;

/// Periodically drops expired rate-limit windows so idle clients do not
/// pile up between probabilistic sweeps.
pub async fn start_rate_limit_sweeper(limiter: Arc<dyn RateLimitStore>, period: Duration) {
    let mut interval = interval(period);
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
    // The first tick completes immediately.
    interval.tick().await;

    loop {
        interval.tick().await;

        let removed = limiter.purge_expired().await;
        if removed > 0 {
            tracing::info!(removed, "Swept expired rate limit windows");
        }
    }
}
