//! Exponential-backoff retry for the HTTP-backed source adapters.
//!
//! Retries only transient transport failures. Non-2xx responses and
//! parse failures are the caller's to classify — a 4xx from a provider
//! will not get better on a second attempt.

use std::time::Duration;

/// Retry attempts after the initial request.
const MAX_RETRIES: u32 = 3;

/// Base delay, doubled each attempt: 200ms, 400ms, 800ms.
const BASE_DELAY_MS: u64 = 200;

/// Send an HTTP request with backoff on transport errors.
///
/// `f` is invoked up to `MAX_RETRIES + 1` times; only a transport-level
/// [`reqwest::Error`] triggers another attempt.
pub(crate) async fn retry_send<F, Fut>(
    source_name: &str,
    f: F,
) -> Result<reqwest::Response, reqwest::Error>
where
    F: Fn() -> Fut,
    Fut: std::future::Future<Output = Result<reqwest::Response, reqwest::Error>>,
{
    for attempt in 0..MAX_RETRIES {
        match f().await {
            Ok(resp) => return Ok(resp),
            Err(e) => {
                let delay = Duration::from_millis(BASE_DELAY_MS << attempt);
                tracing::warn!(
                    source = source_name,
                    attempt = attempt + 1,
                    max_retries = MAX_RETRIES,
                    "source request failed, retrying in {delay:?}: {e}"
                );
                tokio::time::sleep(delay).await;
            }
        }
    }
    f().await
}
