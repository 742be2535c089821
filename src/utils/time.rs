use rand::Rng;
use std::time::Duration;
use crate::config::ScrapeConfig;

pub async fn sleep_with_jitter(base_ms: u64, jitter_ms: u64) {
    let jitter = if jitter_ms == 0 {
        0
    } else {
        rand::rng().random_range(0..=jitter_ms)
    };
    let total = base_ms + jitter;
    if total == 0 {
        return;
    }
    tokio::time::sleep(Duration::from_millis(total)).await;
}

/// The fixed pause observed between two requests to the provider.
pub async fn rate_limit_pause(config: &ScrapeConfig) {
    sleep_with_jitter(config.request_delay_ms, config.delay_jitter_ms).await;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;

    #[tokio::test]
    async fn zero_delay_returns_immediately() {
        let config = ScrapeConfig {
            request_delay_ms: 0,
            ..ScrapeConfig::default()
        };
        let started = Instant::now();
        rate_limit_pause(&config).await;
        assert!(started.elapsed() < Duration::from_millis(50));
    }

    #[tokio::test]
    async fn waits_at_least_the_base_delay() {
        let started = Instant::now();
        sleep_with_jitter(20, 5).await;
        let elapsed = started.elapsed();
        assert!(elapsed >= Duration::from_millis(20), "{elapsed:?}");
    }
}
