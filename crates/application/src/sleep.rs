//! Fixed-duration delay for callers that throttle between requests.

use std::time::Duration;

/// Suspends the calling task for `millis` milliseconds.
///
/// The delay cannot be cancelled short of dropping the future.
pub async fn sleep(millis: u64) {
    tokio::time::sleep(Duration::from_millis(millis)).await;
}
