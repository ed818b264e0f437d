//! Error-normalizer interceptor.
//!
//! Rewrites downstream failures into their canonical taxonomy shape so every
//! layer above sees uniform errors. Never retries and never suppresses: a
//! success passes through untouched, a failure is translated exactly once.

use relay_core::{
    BoxFuture, Error, Interceptor, InterceptorChain, Request, Response, Result,
};

/// Interceptor that canonicalizes downstream errors.
#[derive(Debug, Clone, Copy, Default)]
pub struct ErrorNormalizerInterceptor;

impl ErrorNormalizerInterceptor {
    /// Create a new error normalizer.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Interceptor for ErrorNormalizerInterceptor {
    fn intercept<'a>(
        &'a self,
        request: Request,
        chain: InterceptorChain<'a>,
    ) -> BoxFuture<'a, Result<Response>> {
        Box::pin(async move { chain.proceed(request).await.map_err(normalize) })
    }
}

/// Rewrite an error into its canonical shape.
///
/// Status-code specialization happens here and only here: 401/403/404 become
/// their dedicated variants before any generic wrapping further up. Raw
/// socket-level failures collapse to [`Error::NoConnection`]. Every other
/// variant passes through unchanged.
#[must_use]
pub fn normalize(error: Error) -> Error {
    match error {
        Error::Http { status: 401, .. } => Error::Unauthorized,
        Error::Http { status: 403, .. } => Error::Forbidden,
        Error::Http { status: 404, .. } => Error::NotFound,
        Error::Connection(_) => Error::NoConnection,
        other => other,
    }
}
