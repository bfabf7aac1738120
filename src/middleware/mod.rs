//! Middleware traits, the `next` continuation and chain composition.

mod chain;
mod handler;
mod next;

pub use self::chain::Chain;
pub use self::handler::{
    endpoint_fn, fallback_fn, from_fn, sync_fn, EndpointFn, FallbackFn, FromFn, SyncFn,
};
pub use self::next::Next;

use crate::router::{Result, RouterError};

use std::sync::Arc;

pub use futures::future::BoxFuture;

/// A handler in a chain.
///
/// It receives the context and the continuation for the rest of the chain.
/// Not calling [`Next::run`] halts the chain after this handler. Work placed
/// after `next.run(ctx).await` runs once everything downstream has finished.
pub trait Middleware<C>: Send + Sync {
    fn call<'a>(&'a self, ctx: &'a mut C, next: Next<'a, C>) -> BoxFuture<'a, Result<()>>;
}

/// The continuation run when the last handler of a chain calls `next`.
pub trait Endpoint<C>: Send + Sync {
    fn call<'a>(&'a self, ctx: &'a mut C) -> BoxFuture<'a, Result<()>>;
}

/// Invoked by the router when no route matches, or when the request path
/// cannot be resolved.
pub trait Fallback<C>: Send + Sync {
    fn not_found<'a>(&'a self, ctx: &'a mut C) -> BoxFuture<'a, Result<()>>;

    /// Handles a request path that failed to resolve. The default does not
    /// accept the error and hands it back to the caller.
    fn malformed<'a>(&'a self, ctx: &'a mut C, err: RouterError) -> BoxFuture<'a, Result<()>> {
        let _ = ctx;
        Box::pin(async move { Err(err) })
    }
}

pub type BoxMiddleware<C> = Arc<dyn Middleware<C>>;

pub fn boxed<C, M>(m: M) -> BoxMiddleware<C>
where
    M: Middleware<C> + 'static,
{
    Arc::new(m)
}

impl<C, M> Middleware<C> for Arc<M>
where
    M: Middleware<C> + ?Sized,
{
    fn call<'a>(&'a self, ctx: &'a mut C, next: Next<'a, C>) -> BoxFuture<'a, Result<()>> {
        Middleware::call(&**self, ctx, next)
    }
}
