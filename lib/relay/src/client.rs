//! REST client: request building, chain dispatch, response decoding.

use std::sync::Arc;

use relay_core::{
    ApiRequest, Error, Interceptor, InterceptorChain, Request, Result, TransportExecutor, from_json,
    to_json,
};

use crate::config::NetworkConfig;
use crate::executor::HyperExecutor;
use crate::interceptors::{
    AuthInterceptor, ErrorNormalizerInterceptor, LoggerInterceptor, RetryInterceptor,
};

/// Typed REST client over the interceptor pipeline.
///
/// Each [`RestClient::send`] builds a full request from a declarative
/// [`ApiRequest`], drives it through a fresh [`InterceptorChain`], and decodes
/// the JSON response body into the caller's type. The client holds only
/// immutable configuration; concurrent sends are fully independent.
#[derive(Clone)]
pub struct RestClient {
    config: NetworkConfig,
    interceptors: Arc<[Arc<dyn Interceptor>]>,
    executor: Arc<dyn TransportExecutor>,
}

impl std::fmt::Debug for RestClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RestClient")
            .field("config", &self.config)
            .field("interceptors", &self.interceptors.len())
            .finish_non_exhaustive()
    }
}

impl RestClient {
    /// Client with the canonical interceptor stack over a hyper transport.
    ///
    /// Stack: Auth (when an API key is configured) -> Retry ->
    /// ErrorNormalizer -> Logger -> transport.
    #[must_use]
    pub fn new(config: NetworkConfig) -> Self {
        let executor = Arc::new(HyperExecutor::new(config.timeout));
        Self::with_executor(config, executor)
    }

    /// Canonical stack over a caller-supplied executor.
    #[must_use]
    pub fn with_executor(config: NetworkConfig, executor: Arc<dyn TransportExecutor>) -> Self {
        let mut interceptors: Vec<Arc<dyn Interceptor>> = Vec::new();

        if let Some(api_key) = &config.api_key {
            interceptors.push(Arc::new(AuthInterceptor::with_param(
                api_key.clone(),
                config.api_key_param.clone(),
            )));
        }
        interceptors.push(Arc::new(RetryInterceptor::new(
            config.max_retries,
            config.retry_delay,
        )));
        interceptors.push(Arc::new(ErrorNormalizerInterceptor::new()));
        interceptors.push(Arc::new(LoggerInterceptor::new(config.logging_enabled)));

        Self {
            config,
            interceptors: interceptors.into(),
            executor,
        }
    }

    /// Fully custom pipeline, mostly useful in tests.
    #[must_use]
    pub fn with_interceptors(
        config: NetworkConfig,
        interceptors: Vec<Arc<dyn Interceptor>>,
        executor: Arc<dyn TransportExecutor>,
    ) -> Self {
        Self {
            config,
            interceptors: interceptors.into(),
            executor,
        }
    }

    /// Client configuration.
    #[must_use]
    pub const fn config(&self) -> &NetworkConfig {
        &self.config
    }

    /// Send a request and decode the JSON response body.
    ///
    /// # Errors
    ///
    /// Returns a transport [`Error`]; repository-layer callers convert it to
    /// an application error at their boundary.
    pub async fn send<T: serde::de::DeserializeOwned>(&self, request: ApiRequest) -> Result<T> {
        let request = self.build_request(request)?;

        let chain = InterceptorChain::new(&self.interceptors, self.executor.as_ref());
        let response = chain.proceed(request).await?;

        from_json(response.body())
    }

    /// Resolve a descriptor into a fully-built request.
    fn build_request(&self, descriptor: ApiRequest) -> Result<Request> {
        let base_url = descriptor
            .base_url()
            .unwrap_or(self.config.base_url.as_str());
        let full_url = format!("{base_url}{}", descriptor.path());

        let url = url::Url::parse(&full_url).map_err(|_| Error::invalid_url(full_url.clone()))?;

        let mut builder = Request::builder(descriptor.method(), url)
            .headers(self.config.default_headers.clone())
            .headers(descriptor.headers().clone())
            .query_pairs(descriptor.query());

        if let Some(body) = descriptor.body() {
            builder = builder.body(to_json(body)?);
        }

        Ok(builder.build())
    }
}
