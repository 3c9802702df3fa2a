//! Periodic eviction of expired rate-limit windows.
//!
//! Without it the limiter would keep one entry for every client address
//! it has ever seen.

use std::sync::Arc;
use std::time::Duration;

use tokio_util::sync::CancellationToken;

use crate::middleware::rate_limit::RateLimiter;

/// How often the sweep runs.
pub const SWEEP_INTERVAL: Duration = Duration::from_secs(60);

/// Run the sweep loop until `cancel` is triggered.
pub async fn run(limiter: Arc<RateLimiter>, interval: Duration, cancel: CancellationToken) {
    tracing::info!(interval_secs = interval.as_secs(), "Rate limit sweep started");

    let mut ticker = tokio::time::interval(interval);

    loop {
        tokio::select! {
            _ = cancel.cancelled() => {
                tracing::info!("Rate limit sweep stopping");
                break;
            }
            _ = ticker.tick() => {
                let removed = limiter.purge_expired();
                if removed > 0 {
                    tracing::debug!(removed, remaining = limiter.tracked_keys(), "Rate limit sweep: purged windows");
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::middleware::rate_limit::{RateLimitConfig, RouteKey};

    #[tokio::test]
    async fn sweep_purges_and_stops_on_cancel() {
        let limiter = Arc::new(RateLimiter::new(RateLimitConfig::default()));
        limiter.check(RouteKey::ListMemos, "10.0.0.9");
        assert_eq!(limiter.tracked_keys(), 1);

        let cancel = CancellationToken::new();
        let handle = tokio::spawn(run(
            Arc::clone(&limiter),
            Duration::from_millis(10),
            cancel.clone(),
        ));

        // The window is one second long; give the sweep a few ticks past it.
        tokio::time::sleep(Duration::from_millis(1200)).await;

        cancel.cancel();
        handle.await.unwrap();
        assert_eq!(limiter.tracked_keys(), 0);
    }
}
