use super::{BoxMiddleware, Endpoint, Middleware, Next};
use crate::router::Result;

use std::fmt;
use std::sync::Arc;

/// An ordered list of middleware composed into a single callable.
pub struct Chain<C> {
    handlers: Vec<BoxMiddleware<C>>,
}

impl<C> Chain<C> {
    pub fn new() -> Self {
        Self {
            handlers: Vec::new(),
        }
    }

    pub fn push(&mut self, m: impl Middleware<C> + 'static) -> &mut Self {
        self.handlers.push(Arc::new(m));
        self
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Runs the chain with a no-op terminal continuation.
    pub async fn run(&self, ctx: &mut C) -> Result<()> {
        self.execute(ctx, None).await
    }

    /// Runs the chain, calling `terminal` when the last handler calls `next`.
    pub async fn run_with(&self, ctx: &mut C, terminal: &dyn Endpoint<C>) -> Result<()> {
        self.execute(ctx, Some(terminal)).await
    }

    async fn execute(&self, ctx: &mut C, terminal: Option<&dyn Endpoint<C>>) -> Result<()> {
        let mut next = Next::new(&self.handlers, terminal);
        next.run(ctx).await
    }
}

impl<C> Default for Chain<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> Clone for Chain<C> {
    fn clone(&self) -> Self {
        Self {
            handlers: self.handlers.clone(),
        }
    }
}

impl<C> Extend<BoxMiddleware<C>> for Chain<C> {
    fn extend<I: IntoIterator<Item = BoxMiddleware<C>>>(&mut self, iter: I) {
        self.handlers.extend(iter)
    }
}

impl<C> FromIterator<BoxMiddleware<C>> for Chain<C> {
    fn from_iter<I: IntoIterator<Item = BoxMiddleware<C>>>(iter: I) -> Self {
        Self {
            handlers: iter.into_iter().collect(),
        }
    }
}

impl<C> fmt::Debug for Chain<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Chain")
            .field("handlers", &self.handlers.len())
            .finish()
    }
}
