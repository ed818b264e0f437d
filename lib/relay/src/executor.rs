//! Transport executor backed by hyper-util.

use std::collections::HashMap;
use std::time::Duration;

use bytes::Bytes;
use http_body_util::{BodyExt, Full};
use hyper_rustls::{HttpsConnector, HttpsConnectorBuilder};
use hyper_util::{
    client::legacy::{Client, connect::HttpConnector},
    rt::TokioExecutor,
};

use crate::{BoxFuture, Error, Request, Response, Result, TransportExecutor};

/// HTTPS connector with rustls and the Mozilla root certificates.
///
/// Supports both HTTP/1.1 and HTTP/2; plain HTTP stays available for local
/// test servers.
fn https_connector() -> HttpsConnector<HttpConnector> {
    let root_store: rustls::RootCertStore =
        webpki_roots::TLS_SERVER_ROOTS.iter().cloned().collect();

    let tls_config = rustls::ClientConfig::builder()
        .with_root_certificates(root_store)
        .with_no_client_auth();

    HttpsConnectorBuilder::new()
        .with_tls_config(tls_config)
        .https_or_http()
        .enable_http1()
        .enable_http2()
        .build()
}

/// Transport executor issuing exactly one HTTP exchange per call.
///
/// No retries and no interception happen here - those are layered above. The
/// only error translation is structural: timeouts, socket failures, and
/// non-2xx statuses become their [`Error`] variants, with a non-2xx body
/// preserved for upstream error-message extraction.
#[derive(Clone)]
pub struct HyperExecutor {
    inner: Client<HttpsConnector<HttpConnector>, Full<Bytes>>,
    timeout: Duration,
}

impl std::fmt::Debug for HyperExecutor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HyperExecutor")
            .field("timeout", &self.timeout)
            .finish_non_exhaustive()
    }
}

impl HyperExecutor {
    /// Create an executor with the given request timeout.
    #[must_use]
    pub fn new(timeout: Duration) -> Self {
        let inner = Client::builder(TokioExecutor::new()).build(https_connector());
        Self { inner, timeout }
    }

    /// Build a hyper request from a relay request.
    fn build_hyper_request(request: Request) -> Result<http::Request<Full<Bytes>>> {
        let (method, url, headers, body) = request.into_parts();

        let mut builder = http::Request::builder()
            .method(http::Method::from(method))
            .uri(url.as_str());

        for (name, value) in &headers {
            builder = builder.header(name.as_str(), value.as_str());
        }

        let body = body.map_or_else(Full::default, Full::new);
        builder
            .body(body)
            .map_err(|e| Error::invalid_request(e.to_string()))
    }

    /// Extract response headers as a `HashMap`.
    fn extract_headers(headers: &http::HeaderMap) -> HashMap<String, String> {
        headers
            .iter()
            .filter_map(|(name, value)| {
                value
                    .to_str()
                    .ok()
                    .map(|v| (name.to_string(), v.to_string()))
            })
            .collect()
    }

    fn map_hyper_error(err: hyper_util::client::legacy::Error) -> Error {
        let msg = err.to_string();

        if err.is_connect() {
            return Error::connection(msg);
        }

        // hyper reports malformed replies (bad status line, framing) as parse
        // errors; anything else at this layer is a connectivity problem.
        if msg.contains("parse") || msg.contains("invalid") {
            return Error::InvalidResponse;
        }

        Error::connection(msg)
    }

    async fn send(&self, request: Request) -> Result<Response> {
        let hyper_request = Self::build_hyper_request(request)?;

        let response = tokio::time::timeout(self.timeout, self.inner.request(hyper_request))
            .await
            .map_err(|_| Error::Timeout)?
            .map_err(Self::map_hyper_error)?;

        let status = response.status().as_u16();
        let headers = Self::extract_headers(response.headers());

        let body = response
            .into_body()
            .collect()
            .await
            .map_err(|e| Error::connection(e.to_string()))?
            .to_bytes();

        if !(200..300).contains(&status) {
            return Err(Error::http_with_body(status, body));
        }

        Ok(Response::new(status, headers, body))
    }
}

impl TransportExecutor for HyperExecutor {
    fn execute<'a>(&'a self, request: Request) -> BoxFuture<'a, Result<Response>> {
        Box::pin(self.send(request))
    }
}
