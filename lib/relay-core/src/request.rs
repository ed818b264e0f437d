//! Request descriptor and built HTTP request.
//!
//! [`ApiRequest`] is the declarative description a repository hands to the
//! REST client: method, path, query, body parameters, headers. The client
//! resolves it against its configuration into a [`Request`], the value that
//! flows through the interceptor chain.
//!
//! # Example
//!
//! ```
//! use relay_core::ApiRequest;
//!
//! let request = ApiRequest::get("/genres")
//!     .query("page", "1")
//!     .query("page_size", "20")
//!     .build();
//! assert_eq!(request.path(), "/genres");
//! ```

use std::collections::HashMap;

use bytes::Bytes;

use crate::Method;

/// Declarative request descriptor.
///
/// Immutable once built; the REST client turns it into a [`Request`].
#[derive(Debug, Clone)]
pub struct ApiRequest {
    method: Method,
    path: String,
    base_url: Option<String>,
    query: Vec<(String, String)>,
    body: Option<serde_json::Value>,
    headers: HashMap<String, String>,
}

impl ApiRequest {
    /// Creates a builder for a GET request.
    #[must_use]
    pub fn get(path: impl Into<String>) -> ApiRequestBuilder {
        ApiRequestBuilder::new(Method::Get, path)
    }

    /// Creates a builder for a POST request.
    #[must_use]
    pub fn post(path: impl Into<String>) -> ApiRequestBuilder {
        ApiRequestBuilder::new(Method::Post, path)
    }

    /// HTTP method.
    #[must_use]
    pub const fn method(&self) -> Method {
        self.method
    }

    /// Request path, joined onto the effective base URL.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Per-request base URL override, taking precedence over the client
    /// default.
    #[must_use]
    pub fn base_url(&self) -> Option<&str> {
        self.base_url.as_deref()
    }

    /// Query parameters, in insertion order.
    #[must_use]
    pub fn query(&self) -> &[(String, String)] {
        &self.query
    }

    /// Body parameters to be JSON-encoded, if any.
    #[must_use]
    pub const fn body(&self) -> Option<&serde_json::Value> {
        self.body.as_ref()
    }

    /// Request-specific headers, merged over the client defaults.
    #[must_use]
    pub const fn headers(&self) -> &HashMap<String, String> {
        &self.headers
    }
}

/// Builder for [`ApiRequest`].
#[derive(Debug, Clone)]
pub struct ApiRequestBuilder {
    method: Method,
    path: String,
    base_url: Option<String>,
    query: Vec<(String, String)>,
    body: Option<serde_json::Value>,
    headers: HashMap<String, String>,
}

impl ApiRequestBuilder {
    /// Creates a new builder.
    #[must_use]
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            base_url: None,
            query: Vec::new(),
            body: None,
            headers: HashMap::new(),
        }
    }

    /// Overrides the client's base URL for this request.
    #[must_use]
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Appends a query parameter.
    #[must_use]
    pub fn query(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((name.into(), value.into()));
        self
    }

    /// Appends multiple query parameters.
    #[must_use]
    pub fn query_pairs(mut self, pairs: impl IntoIterator<Item = (String, String)>) -> Self {
        self.query.extend(pairs);
        self
    }

    /// Sets the body parameters, JSON-encoded at send time.
    #[must_use]
    pub fn body(mut self, body: serde_json::Value) -> Self {
        self.body = Some(body);
        self
    }

    /// Sets a request-specific header, overriding a client default of the
    /// same name.
    #[must_use]
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    /// Builds the [`ApiRequest`].
    #[must_use]
    pub fn build(self) -> ApiRequest {
        ApiRequest {
            method: self.method,
            path: self.path,
            base_url: self.base_url,
            query: self.query,
            body: self.body,
            headers: self.headers,
        }
    }
}

/// A fully-built HTTP request with method, URL, headers, and optional body.
///
/// Interceptors never mutate a shared request: they call [`Request::into_parts`]
/// and [`Request::from_parts`] (or clone) to produce a modified copy.
#[derive(Debug, Clone)]
pub struct Request {
    method: Method,
    url: url::Url,
    headers: HashMap<String, String>,
    body: Option<Bytes>,
}

impl Request {
    /// Creates a new [`RequestBuilder`].
    #[must_use]
    pub fn builder(method: Method, url: url::Url) -> RequestBuilder {
        RequestBuilder::new(method, url)
    }

    /// Reassembles a request from its parts.
    #[must_use]
    pub fn from_parts(
        method: Method,
        url: url::Url,
        headers: HashMap<String, String>,
        body: Option<Bytes>,
    ) -> Self {
        Self {
            method,
            url,
            headers,
            body,
        }
    }

    /// HTTP method.
    #[must_use]
    pub const fn method(&self) -> Method {
        self.method
    }

    /// Request URL.
    #[must_use]
    pub const fn url(&self) -> &url::Url {
        &self.url
    }

    /// Request headers.
    #[must_use]
    pub const fn headers(&self) -> &HashMap<String, String> {
        &self.headers
    }

    /// Single header value by name.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).map(String::as_str)
    }

    /// Request body.
    #[must_use]
    pub const fn body(&self) -> Option<&Bytes> {
        self.body.as_ref()
    }

    /// Consume into (method, url, headers, body).
    #[must_use]
    pub fn into_parts(self) -> (Method, url::Url, HashMap<String, String>, Option<Bytes>) {
        (self.method, self.url, self.headers, self.body)
    }
}

/// Builder for constructing [`Request`] instances.
#[derive(Debug, Clone)]
pub struct RequestBuilder {
    method: Method,
    url: url::Url,
    headers: HashMap<String, String>,
    body: Option<Bytes>,
}

impl RequestBuilder {
    /// Creates a new builder.
    #[must_use]
    pub fn new(method: Method, url: url::Url) -> Self {
        Self {
            method,
            url,
            headers: HashMap::new(),
            body: None,
        }
    }

    /// Sets a header.
    #[must_use]
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    /// Sets multiple headers.
    #[must_use]
    pub fn headers(mut self, headers: impl IntoIterator<Item = (String, String)>) -> Self {
        self.headers.extend(headers);
        self
    }

    /// Appends a query parameter to the URL.
    #[must_use]
    pub fn query(mut self, name: &str, value: &str) -> Self {
        self.url.query_pairs_mut().append_pair(name, value);
        self
    }

    /// Appends multiple query parameters to the URL.
    #[must_use]
    pub fn query_pairs<'p>(mut self, pairs: impl IntoIterator<Item = &'p (String, String)>) -> Self {
        {
            let mut query = self.url.query_pairs_mut();
            for (name, value) in pairs {
                query.append_pair(name, value);
            }
        }
        self
    }

    /// Sets the request body.
    #[must_use]
    pub fn body(mut self, body: Bytes) -> Self {
        self.body = Some(body);
        self
    }

    /// Builds the [`Request`].
    #[must_use]
    pub fn build(self) -> Request {
        Request {
            method: self.method,
            url: self.url,
            headers: self.headers,
            body: self.body,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn descriptor_defaults() {
        let request = ApiRequest::get("/genres").build();

        assert_eq!(request.method(), Method::Get);
        assert_eq!(request.path(), "/genres");
        assert!(request.base_url().is_none());
        assert!(request.query().is_empty());
        assert!(request.body().is_none());
        assert!(request.headers().is_empty());
    }

    #[test]
    fn descriptor_with_query_and_headers() {
        let request = ApiRequest::get("/games")
            .query("page", "1")
            .query("page_size", "20")
            .header("Accept", "application/json")
            .build();

        assert_eq!(
            request.query(),
            &[
                ("page".to_string(), "1".to_string()),
                ("page_size".to_string(), "20".to_string()),
            ]
        );
        assert_eq!(
            request.headers().get("Accept").map(String::as_str),
            Some("application/json")
        );
    }

    #[test]
    fn descriptor_post_with_body() {
        let request = ApiRequest::post("/games")
            .body(serde_json::json!({"name": "Portal"}))
            .build();

        assert_eq!(request.method(), Method::Post);
        assert_eq!(request.body(), Some(&serde_json::json!({"name": "Portal"})));
    }

    #[test]
    fn descriptor_base_url_override() {
        let request = ApiRequest::get("/genres")
            .base_url("https://staging.example.com/api")
            .build();

        assert_eq!(request.base_url(), Some("https://staging.example.com/api"));
    }

    #[test]
    fn request_builder_basic() {
        let url = url::Url::parse("https://api.example.com/genres").expect("valid URL");
        let request = Request::builder(Method::Get, url)
            .header("Accept", "application/json")
            .build();

        assert_eq!(request.method(), Method::Get);
        assert_eq!(request.url().as_str(), "https://api.example.com/genres");
        assert_eq!(request.header("Accept"), Some("application/json"));
        assert!(request.body().is_none());
    }

    #[test]
    fn request_builder_with_query() {
        let url = url::Url::parse("https://api.example.com/genres").expect("valid URL");
        let request = Request::builder(Method::Get, url)
            .query("page", "1")
            .query("page_size", "10")
            .build();

        assert_eq!(
            request.url().as_str(),
            "https://api.example.com/genres?page=1&page_size=10"
        );
    }

    #[test]
    fn request_parts_round_trip() {
        let url = url::Url::parse("https://api.example.com/games").expect("valid URL");
        let request = Request::builder(Method::Post, url)
            .header("Content-Type", "application/json")
            .body(Bytes::from(r#"{"name":"Portal"}"#))
            .build();

        let (method, url, headers, body) = request.into_parts();
        let rebuilt = Request::from_parts(method, url, headers, body);

        assert_eq!(rebuilt.method(), Method::Post);
        assert_eq!(rebuilt.header("Content-Type"), Some("application/json"));
        assert_eq!(rebuilt.body(), Some(&Bytes::from(r#"{"name":"Portal"}"#)));
    }
}
