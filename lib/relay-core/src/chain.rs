//! Interceptor pipeline primitives.
//!
//! An [`InterceptorChain`] is an immutable (interceptor list, cursor,
//! executor) value. `proceed` at cursor *i* invokes interceptor *i* with a
//! copy of the chain advanced to *i+1*; past the last interceptor it delegates
//! to the [`TransportExecutor`]. Chain values are `Copy`, so a retrying
//! interceptor can re-enter the same position any number of times, and
//! concurrent traversals built from the same interceptor list share no
//! mutable state.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use crate::{Request, Response, Result};

/// Boxed future returned by the object-safe pipeline traits.
pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Terminal transport: issues exactly one HTTP exchange.
pub trait TransportExecutor: Send + Sync {
    /// Execute a single HTTP exchange for a fully-built request.
    ///
    /// Implementations perform no retries and no interception; a non-2xx
    /// status surfaces as [`crate::Error::Http`] with the body preserved, and
    /// a malformed transport reply as [`crate::Error::InvalidResponse`].
    fn execute<'a>(&'a self, request: Request) -> BoxFuture<'a, Result<Response>>;
}

/// A unit of request/response processing in the pipeline.
pub trait Interceptor: Send + Sync {
    /// Inspect or rewrite `request`, then (usually) forward it with
    /// `chain.proceed`. An interceptor may short-circuit by returning a
    /// result without forwarding.
    fn intercept<'a>(
        &'a self,
        request: Request,
        chain: InterceptorChain<'a>,
    ) -> BoxFuture<'a, Result<Response>>;
}

/// The ordered remainder of the pipeline from a given cursor position.
#[derive(Clone, Copy)]
pub struct InterceptorChain<'a> {
    interceptors: &'a [Arc<dyn Interceptor>],
    index: usize,
    executor: &'a dyn TransportExecutor,
}

impl std::fmt::Debug for InterceptorChain<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InterceptorChain")
            .field("len", &self.interceptors.len())
            .field("index", &self.index)
            .finish_non_exhaustive()
    }
}

impl<'a> InterceptorChain<'a> {
    /// Chain positioned at the first interceptor.
    #[must_use]
    pub fn new(interceptors: &'a [Arc<dyn Interceptor>], executor: &'a dyn TransportExecutor) -> Self {
        Self {
            interceptors,
            index: 0,
            executor,
        }
    }

    /// Current cursor position.
    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }

    /// Thread `request` through the rest of the pipeline.
    ///
    /// Interceptor *i* receives a fresh chain at *i+1*: indices are never
    /// skipped or repeated within one traversal.
    pub fn proceed(self, request: Request) -> BoxFuture<'a, Result<Response>> {
        Box::pin(async move {
            match self.interceptors.get(self.index) {
                Some(interceptor) => {
                    let next = Self {
                        index: self.index + 1,
                        ..self
                    };
                    interceptor.intercept(request, next).await
                }
                None => self.executor.execute(request).await,
            }
        })
    }
}
