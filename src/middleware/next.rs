use super::{BoxFuture, BoxMiddleware, Endpoint, Middleware};
use crate::router::{Result, RouterError};

use std::fmt;

/// The continuation handed to each middleware.
///
/// Each invocation gets its own `Next`, bound to the handler after it. It can
/// be run at most once; a second call fails with
/// [`RouterError::ReentrantNext`] and leaves the downstream chain untouched.
pub struct Next<'a, C> {
    rest: &'a [BoxMiddleware<C>],
    terminal: Option<&'a dyn Endpoint<C>>,
    entered: bool,
}

impl<'a, C> Next<'a, C> {
    pub(crate) fn new(
        rest: &'a [BoxMiddleware<C>],
        terminal: Option<&'a dyn Endpoint<C>>,
    ) -> Self {
        Self {
            rest,
            terminal,
            entered: false,
        }
    }

    /// Runs the remainder of the chain.
    pub fn run<'b>(&'b mut self, ctx: &'b mut C) -> BoxFuture<'b, Result<()>> {
        if self.entered {
            return Box::pin(async { Err(RouterError::ReentrantNext) });
        }
        self.entered = true;

        match self.rest.split_first() {
            Some((head, tail)) => {
                let next = Next::new(tail, self.terminal);
                Middleware::call(&**head, ctx, next)
            }
            None => match self.terminal {
                Some(endpoint) => endpoint.call(ctx),
                None => Box::pin(async { Ok(()) }),
            },
        }
    }

    /// Number of middleware still ahead of this continuation.
    pub fn remaining(&self) -> usize {
        self.rest.len()
    }

    pub fn is_called(&self) -> bool {
        self.entered
    }
}

impl<C> fmt::Debug for Next<'_, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Next")
            .field("remaining", &self.rest.len())
            .field("terminal", &self.terminal.is_some())
            .field("entered", &self.entered)
            .finish()
    }
}
