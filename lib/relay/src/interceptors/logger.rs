//! Request/response logging interceptor.
//!
//! Purely observational: emits a structured record of the outgoing request
//! and of the outcome via `tracing`, with credential values masked. Never
//! alters the request or the result it forwards; when disabled it degenerates
//! to a bare `proceed`.

use std::collections::HashMap;
use std::time::Instant;

use relay_core::{BoxFuture, Interceptor, InterceptorChain, Request, Response, Result};
use tracing::{Instrument, Level, debug, info, span, warn};

const BODY_PREVIEW_LIMIT: usize = 500;

/// Interceptor that logs requests and responses.
#[derive(Debug, Clone, Copy)]
pub struct LoggerInterceptor {
    enabled: bool,
}

impl LoggerInterceptor {
    /// Create a logger; `enabled: false` makes it a no-op pass-through.
    #[must_use]
    pub const fn new(enabled: bool) -> Self {
        Self { enabled }
    }
}

impl Interceptor for LoggerInterceptor {
    fn intercept<'a>(
        &'a self,
        request: Request,
        chain: InterceptorChain<'a>,
    ) -> BoxFuture<'a, Result<Response>> {
        if !self.enabled {
            return chain.proceed(request);
        }

        let method = request.method();
        let url = masked_url(request.url());
        let request_span = span!(Level::INFO, "http_request", %method, %url);

        Box::pin(
            async move {
                debug!(
                    headers = ?masked_headers(request.headers()),
                    body = ?request.body().map(|b| preview(b)),
                    "sending request"
                );

                let start = Instant::now();
                let result = chain.proceed(request).await;
                let elapsed_ms = u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX);

                match &result {
                    Ok(response) => {
                        info!(
                            status = response.status(),
                            size = response.body().len(),
                            preview = %preview(response.body()),
                            elapsed_ms,
                            "request completed"
                        );
                    }
                    Err(error) => {
                        warn!(error = %error, elapsed_ms, "request failed");
                    }
                }

                result
            }
            .instrument(request_span),
        )
    }
}

/// URL with credential query values replaced by a masked form.
fn masked_url(url: &url::Url) -> String {
    if !url.query_pairs().any(|(name, _)| is_credential(&name)) {
        return url.to_string();
    }

    let pairs: Vec<(String, String)> = url
        .query_pairs()
        .map(|(name, value)| {
            let value = if is_credential(&name) {
                mask(&value)
            } else {
                value.into_owned()
            };
            (name.into_owned(), value)
        })
        .collect();

    let mut masked = url.clone();
    masked.query_pairs_mut().clear().extend_pairs(pairs);
    masked.to_string()
}

/// Headers with credential values replaced by a masked form.
fn masked_headers(headers: &HashMap<String, String>) -> HashMap<String, String> {
    headers
        .iter()
        .map(|(name, value)| {
            let value = if is_credential(name) {
                mask(value)
            } else {
                value.clone()
            };
            (name.clone(), value)
        })
        .collect()
}

fn is_credential(name: &str) -> bool {
    let name = name.to_ascii_lowercase();
    name == "key" || name.contains("api") || name.contains("token") || name.contains("authorization")
}

/// Keep the first and last four characters of long secrets, hide short ones
/// entirely.
fn mask(value: &str) -> String {
    let chars: Vec<char> = value.chars().collect();
    if chars.len() > 8 {
        let prefix: String = chars.iter().take(4).collect();
        let suffix: String = chars.iter().skip(chars.len() - 4).collect();
        format!("{prefix}****{suffix}")
    } else {
        "****".to_string()
    }
}

fn preview(body: &[u8]) -> String {
    let text = String::from_utf8_lossy(body);
    if text.len() > BODY_PREVIEW_LIMIT {
        let mut end = BODY_PREVIEW_LIMIT;
        while !text.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}...", &text[..end])
    } else {
        text.into_owned()
    }
}
