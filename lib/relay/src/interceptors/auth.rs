//! API-key authentication interceptor.
//!
//! Injects the credential as a named query parameter. Injection is
//! idempotent: a request that already carries the parameter (e.g., one
//! re-entering the pipeline) is forwarded unmodified, so a credential is
//! never appended twice.

use relay_core::{BoxFuture, Interceptor, InterceptorChain, Request, Response, Result};

/// Interceptor that appends `{param}={api_key}` to the request URL.
#[derive(Debug, Clone)]
pub struct AuthInterceptor {
    api_key: String,
    param_name: String,
}

impl AuthInterceptor {
    /// Default name of the credential query parameter.
    pub const DEFAULT_PARAM: &'static str = "key";

    /// Auth interceptor using the default parameter name.
    #[must_use]
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_param(api_key, Self::DEFAULT_PARAM)
    }

    /// Auth interceptor with a custom parameter name.
    #[must_use]
    pub fn with_param(api_key: impl Into<String>, param_name: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            param_name: param_name.into(),
        }
    }

    /// Append the credential parameter unless it is already present.
    ///
    /// All existing query parameters are preserved.
    fn sign(&self, request: Request) -> Request {
        let (method, mut url, headers, body) = request.into_parts();

        let already_signed = url
            .query_pairs()
            .any(|(name, _)| name == self.param_name.as_str());

        if !already_signed {
            url.query_pairs_mut()
                .append_pair(&self.param_name, &self.api_key);
        }

        Request::from_parts(method, url, headers, body)
    }
}

impl Interceptor for AuthInterceptor {
    fn intercept<'a>(
        &'a self,
        request: Request,
        chain: InterceptorChain<'a>,
    ) -> BoxFuture<'a, Result<Response>> {
        chain.proceed(self.sign(request))
    }
}
