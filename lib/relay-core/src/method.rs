//! HTTP method types.

use derive_more::Display;

/// HTTP request method.
///
/// The catalog APIs this client targets only use GET and POST.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Method {
    /// GET method - retrieve a resource.
    #[display("GET")]
    Get,
    /// POST method - create a resource.
    #[display("POST")]
    Post,
}

impl Method {
    /// Returns `true` if the method is idempotent.
    ///
    /// The retry interceptor applies the same policy to every request; callers
    /// issuing non-idempotent requests accept the re-attempt risk.
    #[must_use]
    pub const fn is_idempotent(&self) -> bool {
        matches!(self, Self::Get)
    }
}

impl From<Method> for http::Method {
    fn from(method: Method) -> Self {
        match method {
            Method::Get => Self::GET,
            Method::Post => Self::POST,
        }
    }
}
