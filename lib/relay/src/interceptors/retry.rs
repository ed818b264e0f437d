//! Bounded retry with a fixed inter-attempt delay.

use std::time::Duration;

use relay_core::{BoxFuture, Error, Interceptor, InterceptorChain, Request, Response, Result};

/// Interceptor that re-attempts failed requests.
///
/// Up to `max_retries` additional attempts (`max_retries + 1` total), with a
/// fixed `retry_delay` sleep before each re-attempt - a real suspension
/// point, not a busy wait. Failures are classified by the pure
/// [`Error::is_retryable`]: timeouts, connectivity failures, and 5xx
/// responses are re-attempted; everything else is rethrown immediately
/// without consuming the remaining budget.
///
/// The same request value is forwarded on every attempt; nothing mutates
/// between tries. The policy is method-blind: retrying a non-idempotent
/// request (POST) is the caller's risk to accept.
#[derive(Debug, Clone)]
pub struct RetryInterceptor {
    max_retries: u32,
    retry_delay: Duration,
}

impl RetryInterceptor {
    /// Create a retry interceptor.
    #[must_use]
    pub const fn new(max_retries: u32, retry_delay: Duration) -> Self {
        Self {
            max_retries,
            retry_delay,
        }
    }
}

impl Interceptor for RetryInterceptor {
    fn intercept<'a>(
        &'a self,
        request: Request,
        chain: InterceptorChain<'a>,
    ) -> BoxFuture<'a, Result<Response>> {
        Box::pin(async move {
            let mut last_error = None;

            for attempt in 0..=self.max_retries {
                if attempt > 0 {
                    tokio::time::sleep(self.retry_delay).await;
                }

                match chain.proceed(request.clone()).await {
                    Ok(response) => return Ok(response),
                    Err(error) => {
                        if !error.is_retryable() {
                            return Err(error);
                        }
                        last_error = Some(error);
                    }
                }
            }

            // The loop always stores an error before exhausting; the fallback
            // is unreachable in practice.
            Err(last_error.unwrap_or_else(|| {
                Error::unknown(format!(
                    "request failed after {} retries",
                    self.max_retries
                ))
            }))
        })
    }
}
