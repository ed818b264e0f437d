//! Concrete interceptors for the relay pipeline.
//!
//! The canonical order, fixed by [`crate::RestClient`], is
//! Auth -> Retry -> ErrorNormalizer -> Logger -> transport:
//!
//! - auth mutation happens before anything else observes the request;
//! - retry wraps everything below it, so every attempt re-enters
//!   normalization and logging;
//! - logging sits innermost and records what was actually sent, not a
//!   pre-auth version of it.
//!
//! All interceptors hold only immutable configuration; per-request state
//! lives in the locals of each `intercept` call, so concurrent traversals
//! are independent.

mod auth;
mod logger;
mod normalize;
mod retry;

pub use auth::AuthInterceptor;
pub use logger::LoggerInterceptor;
pub use normalize::{ErrorNormalizerInterceptor, normalize};
pub use retry::RetryInterceptor;
