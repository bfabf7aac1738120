use super::{BoxFuture, Endpoint, Fallback, Middleware, Next};
use crate::router::Result;

use std::fmt;
use std::marker::PhantomData;

/// Middleware built from a closure taking the context and `next`.
///
/// ```
/// use chain_router::middleware::from_fn;
/// use chain_router::Context;
///
/// let timing = from_fn(|ctx: &mut Context, mut next| {
///     Box::pin(async move {
///         let res = next.run(ctx).await;
///         tracing::debug!(url = ctx.url(), "request finished");
///         res
///     })
/// });
/// # let _ = timing;
/// ```
pub fn from_fn<C, F>(f: F) -> FromFn<C, F>
where
    F: for<'a> Fn(&'a mut C, Next<'a, C>) -> BoxFuture<'a, Result<()>> + Send + Sync,
{
    FromFn {
        f,
        _marker: PhantomData,
    }
}

/// Middleware built from a synchronous closure over the context only.
///
/// The chain continues to the next handler when the closure returns `Ok`.
pub fn sync_fn<C, F>(f: F) -> SyncFn<C, F>
where
    F: Fn(&mut C) -> Result<()> + Send + Sync,
{
    SyncFn {
        f,
        _marker: PhantomData,
    }
}

pub fn endpoint_fn<C, F>(f: F) -> EndpointFn<C, F>
where
    F: for<'a> Fn(&'a mut C) -> BoxFuture<'a, Result<()>> + Send + Sync,
{
    EndpointFn {
        f,
        _marker: PhantomData,
    }
}

/// A fallback that handles unmatched requests and lets path errors
/// propagate.
pub fn fallback_fn<C, F>(f: F) -> FallbackFn<C, F>
where
    F: for<'a> Fn(&'a mut C) -> BoxFuture<'a, Result<()>> + Send + Sync,
{
    FallbackFn {
        f,
        _marker: PhantomData,
    }
}

pub struct FromFn<C, F> {
    f: F,
    _marker: PhantomData<fn(C)>,
}

pub struct SyncFn<C, F> {
    f: F,
    _marker: PhantomData<fn(C)>,
}

pub struct EndpointFn<C, F> {
    f: F,
    _marker: PhantomData<fn(C)>,
}

pub struct FallbackFn<C, F> {
    f: F,
    _marker: PhantomData<fn(C)>,
}

impl<C, F> Middleware<C> for FromFn<C, F>
where
    F: for<'a> Fn(&'a mut C, Next<'a, C>) -> BoxFuture<'a, Result<()>> + Send + Sync,
{
    fn call<'a>(&'a self, ctx: &'a mut C, next: Next<'a, C>) -> BoxFuture<'a, Result<()>> {
        (self.f)(ctx, next)
    }
}

impl<C, F> Middleware<C> for SyncFn<C, F>
where
    C: Send,
    F: Fn(&mut C) -> Result<()> + Send + Sync,
{
    fn call<'a>(&'a self, ctx: &'a mut C, mut next: Next<'a, C>) -> BoxFuture<'a, Result<()>> {
        Box::pin(async move {
            (self.f)(ctx)?;
            next.run(ctx).await
        })
    }
}

impl<C, F> Endpoint<C> for EndpointFn<C, F>
where
    F: for<'a> Fn(&'a mut C) -> BoxFuture<'a, Result<()>> + Send + Sync,
{
    fn call<'a>(&'a self, ctx: &'a mut C) -> BoxFuture<'a, Result<()>> {
        (self.f)(ctx)
    }
}

impl<C, F> Fallback<C> for FallbackFn<C, F>
where
    F: for<'a> Fn(&'a mut C) -> BoxFuture<'a, Result<()>> + Send + Sync,
{
    fn not_found<'a>(&'a self, ctx: &'a mut C) -> BoxFuture<'a, Result<()>> {
        (self.f)(ctx)
    }
}

macro_rules! opaque_debug {
    ($($ty:ident),+) => {
        $(impl<C, F> fmt::Debug for $ty<C, F> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(stringify!($ty))
            }
        })+
    };
}

opaque_debug!(FromFn, SyncFn, EndpointFn, FallbackFn);
