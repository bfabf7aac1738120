mod captures;
mod error;
mod path;
mod tree;

pub use self::captures::Params;
pub use self::error::{BoxError, PathError, Result, RouterError};

use self::tree::RouteTree;
use crate::context::{RouteContext, RouteInfo};
use crate::middleware::{BoxMiddleware, Chain, Fallback, Middleware};

use std::fmt;
use std::sync::Arc;

use url::Url;

/// Routes request paths to middleware chains.
///
/// Build it with [`Router::add`], [`Router::add_all`] and
/// [`Router::add_global`], then share it read-only across requests.
pub struct Router<C> {
    base: Url,
    tree: RouteTree<C>,
    globals: Vec<BoxMiddleware<C>>,
}

/// A route found by [`Router::find`].
pub struct Found<'r, C> {
    pattern: Arc<str>,
    chain: &'r Chain<C>,
    params: Params,
}

impl<C> Router<C> {
    /// Creates a router resolving request paths against `base`.
    ///
    /// # Panics
    /// Panics if `base` is not an absolute url. See [`Router::try_new`].
    pub fn new(base: &str) -> Self {
        match Self::try_new(base) {
            Ok(router) => router,
            Err(e) => panic!("{}: base = {:?}", e, base),
        }
    }

    pub fn try_new(base: &str) -> Result<Self> {
        let base = Url::parse(base).map_err(RouterError::InvalidBase)?;
        Ok(Self::with_base(base))
    }

    pub fn with_base(base: Url) -> Self {
        Self {
            base,
            tree: RouteTree::new(),
            globals: Vec::new(),
        }
    }

    pub fn base(&self) -> &Url {
        &self.base
    }

    /// Number of distinct templates with a chain attached.
    pub fn route_count(&self) -> usize {
        self.tree.route_count()
    }

    /// Registers `m` at `pattern`.
    pub fn add(&mut self, pattern: &str, m: impl Middleware<C> + 'static) -> &mut Self {
        self.add_all(pattern, Some(Arc::new(m) as BoxMiddleware<C>))
    }

    /// Registers any number of handlers at `pattern`, in order.
    ///
    /// The first registration of a template starts its chain with the global
    /// middleware added so far; later registrations of the same template
    /// append to that chain. Global middleware added afterwards does not
    /// reach routes that already exist.
    pub fn add_all(
        &mut self,
        pattern: &str,
        handlers: impl IntoIterator<Item = BoxMiddleware<C>>,
    ) -> &mut Self {
        let handlers: Vec<BoxMiddleware<C>> = handlers.into_iter().collect();
        tracing::debug!(
            pattern,
            handlers = handlers.len(),
            globals = self.globals.len(),
            "route registered"
        );
        self.tree.insert(pattern, &self.globals, handlers);
        self
    }

    /// Registers path-less middleware, prepended to every route added later.
    pub fn add_global(&mut self, m: impl Middleware<C> + 'static) -> &mut Self {
        self.globals.push(Arc::new(m));
        tracing::debug!(globals = self.globals.len(), "global middleware registered");
        self
    }

    /// Resolves `path` and looks it up without running anything.
    ///
    /// Returns `Ok(None)` when no route matches.
    pub fn find(&self, path: &str) -> Result<Option<Found<'_, C>>> {
        let url = path::resolve(&self.base, path)?;
        self.find_url(&url)
    }

    fn find_url(&self, url: &Url) -> Result<Option<Found<'_, C>>> {
        let segments = path::split_path(url)?;
        let found = self.tree.lookup(&segments).map(|hit| Found {
            pattern: Arc::clone(hit.pattern),
            chain: hit.chain,
            params: hit
                .captures
                .iter()
                .map(|&(name, value)| (Arc::clone(name), value))
                .collect(),
        });
        Ok(found)
    }
}

impl<C: RouteContext> Router<C> {
    /// Matches `ctx` and runs the bound chain, resolving to the context.
    ///
    /// A miss completes without running anything.
    pub async fn dispatch(&self, mut ctx: C) -> Result<C> {
        self.dispatch_mut(&mut ctx, None).await?;
        Ok(ctx)
    }

    /// Like [`Router::dispatch`], handing misses and unresolvable paths to
    /// `fallback`.
    pub async fn dispatch_with(&self, mut ctx: C, fallback: &dyn Fallback<C>) -> Result<C> {
        self.dispatch_mut(&mut ctx, Some(fallback)).await?;
        Ok(ctx)
    }

    /// Matches a borrowed context. Captures left by an earlier dispatch of
    /// the same context are replaced on a match.
    pub async fn dispatch_mut(
        &self,
        ctx: &mut C,
        fallback: Option<&dyn Fallback<C>>,
    ) -> Result<()> {
        let resolved = path::resolve(&self.base, ctx.request_url())
            .and_then(|url| Ok((self.find_url(&url)?, url)));

        let (found, url) = match resolved {
            Ok(resolved) => resolved,
            Err(err) => {
                tracing::debug!(url = ctx.request_url(), error = %err, "malformed request path");
                return match fallback {
                    Some(fallback) => fallback.malformed(ctx, err).await,
                    None => Err(err),
                };
            }
        };

        match found {
            Some(found) => {
                tracing::trace!(path = url.path(), pattern = &*found.pattern, "route matched");
                let params = ctx.params_mut();
                params.clear();
                for (name, value) in found.params {
                    params.insert(name, value);
                }
                ctx.set_route(RouteInfo::new(url, Some(found.pattern)));
                found.chain.run(ctx).await
            }
            None => {
                tracing::trace!(path = url.path(), "no route matched");
                ctx.set_route(RouteInfo::new(url, None));
                match fallback {
                    Some(fallback) => fallback.not_found(ctx).await,
                    None => Ok(()),
                }
            }
        }
    }
}

impl<C> Found<'_, C> {
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn params(&self) -> &Params {
        &self.params
    }

    pub fn chain(&self) -> &Chain<C> {
        self.chain
    }

    pub fn into_params(self) -> Params {
        self.params
    }
}

impl<C> fmt::Debug for Router<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Router")
            .field("base", &self.base.as_str())
            .field("routes", &self.tree.route_count())
            .field("globals", &self.globals.len())
            .finish()
    }
}

impl<C> fmt::Debug for Found<'_, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Found")
            .field("pattern", &self.pattern)
            .field("params", &self.params)
            .field("chain", self.chain)
            .finish()
    }
}
