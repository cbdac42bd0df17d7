use std::time::Duration;

/// Suspends the current task for `duration` on whichever executor drives the page.
pub async fn sleep(duration: Duration) {
    if duration.is_zero() {
        return;
    }
    #[cfg(target_arch = "wasm32")]
    gloo_timers::future::sleep(duration).await;
    #[cfg(not(target_arch = "wasm32"))]
    tokio::time::sleep(duration).await;
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use tokio::time::Instant;

    #[tokio::test(start_paused = true)]
    async fn sleep_waits_for_requested_duration() {
        let started = Instant::now();
        sleep(Duration::from_millis(1500)).await;
        assert!(started.elapsed() >= Duration::from_millis(1500));
    }

    #[tokio::test(start_paused = true)]
    async fn zero_duration_returns_immediately() {
        let started = Instant::now();
        sleep(Duration::ZERO).await;
        assert_eq!(started.elapsed(), Duration::ZERO);
    }
}
