use crate::models::error::AppError;
use gloo_timers::future::TimeoutFuture;
use std::future::{Future, poll_fn};
use std::pin::pin;
use std::task::Poll;

/// Races `operation` against a timer.
///
/// # Arguments
///
/// * `operation` - The request future; dropped if the timer fires first
/// * `timeout_ms` - Milliseconds before giving up
///
/// # Behavior
///
/// - The operation is polled first, so a result that is ready on the same
///   tick as the timer still wins
/// - On expiry returns `AppError::Timeout(timeout_ms)`
pub async fn with_timeout<F, T>(operation: F, timeout_ms: u32) -> Result<T, AppError>
where
    F: Future<Output = Result<T, AppError>>,
{
    let mut operation = pin!(operation);
    let mut timer = pin!(TimeoutFuture::new(timeout_ms));

    poll_fn(|cx| {
        if let Poll::Ready(result) = operation.as_mut().poll(cx) {
            return Poll::Ready(result);
        }
        if timer.as_mut().poll(cx).is_ready() {
            gloo::console::warn!(format!("Request timed out after {timeout_ms}ms"));
            return Poll::Ready(Err(AppError::Timeout(timeout_ms)));
        }
        Poll::Pending
    })
    .await
}
