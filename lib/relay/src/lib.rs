//! Interceptor-based HTTP client for paginated REST APIs.
//!
//! relay builds a full request from a declarative descriptor, threads it
//! through an ordered interceptor chain (authentication, retry, error
//! normalization, logging) into a hyper-based transport executor, and decodes
//! the typed JSON response. Repository-style accessors over two catalog APIs
//! sit on top and expose paged results.
//!
//! # Example
//!
//! ```ignore
//! use relay::prelude::*;
//! use relay::api::GamesRepository;
//!
//! let config = NetworkConfig::builder("https://api.rawg.io/api")
//!     .api_key("my-secret-key")
//!     .logging(true)
//!     .build();
//!
//! let repository = GamesRepository::new(RestClient::new(config));
//! let genres = repository.fetch_genres(0, 20).await?;
//! if genres.has_more_pages() {
//!     let next = repository.fetch_genres(1, 20).await?;
//! }
//! ```

pub mod api;
mod client;
mod config;
mod executor;
pub mod interceptors;
pub mod prelude;

pub use client::RestClient;
pub use config::{NetworkConfig, NetworkConfigBuilder};
pub use executor::HyperExecutor;

// Re-export core types
pub use relay_core::{
    ApiRequest, ApiRequestBuilder, AppError, BoxFuture, Error, Interceptor, InterceptorChain,
    Method, PagedResult, Request, RequestBuilder, Response, Result, TransportExecutor, from_json,
    to_json,
};
