//! Core types and traits for the relay interceptor-based HTTP client.
//!
//! This crate provides the foundational types used by relay:
//! - [`Method`] - HTTP method enum
//! - [`ApiRequest`] - declarative request descriptor
//! - [`Request`] and [`RequestBuilder`] - built HTTP request
//! - [`Response`] - raw HTTP outcome
//! - [`Error`] and [`Result`] - transport error taxonomy
//! - [`AppError`] - application error taxonomy with a total mapping from
//!   [`Error`]
//! - [`Interceptor`], [`InterceptorChain`], [`TransportExecutor`] - pipeline
//!   primitives
//! - [`PagedResult`] - paged-result container

mod app_error;
mod body;
mod chain;
mod error;
mod method;
mod paged;
pub mod prelude;
mod request;
mod response;

pub use app_error::AppError;
pub use body::{from_json, to_json};
pub use chain::{BoxFuture, Interceptor, InterceptorChain, TransportExecutor};
pub use error::{Error, Result};
pub use method::Method;
pub use paged::PagedResult;
pub use request::{ApiRequest, ApiRequestBuilder, Request, RequestBuilder};
pub use response::Response;
