//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types and functions
//! for easy glob importing:
//!
//! ```ignore
//! use relay_core::prelude::*;
//! ```

pub use crate::{
    ApiRequest, AppError, Error, Interceptor, InterceptorChain, Method, PagedResult, Request,
    RequestBuilder, Response, Result, TransportExecutor, from_json, to_json,
};
