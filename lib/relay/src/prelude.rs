//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types and functions
//! for easy glob importing:
//!
//! ```ignore
//! use relay::prelude::*;
//! ```

pub use crate::{
    ApiRequest, AppError, Error, HyperExecutor, Interceptor, InterceptorChain, Method,
    NetworkConfig, PagedResult, Request, Response, RestClient, Result, TransportExecutor,
};
pub use serde::{Deserialize, Serialize};
