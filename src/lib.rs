//! A path-segment URL router with composable async middleware chains.
//!
//! Templates are split on `/` into literal segments and `:name` parameters
//! and indexed in a prefix tree. A request path is walked down that tree
//! one segment at a time, literal edges winning over the parameter edge at
//! every depth, and the chain bound to the matched template runs against a
//! per-request context.
//!
//! ```
//! use chain_router::middleware::{from_fn, sync_fn};
//! use chain_router::{Context, Router};
//!
//! # futures::executor::block_on(async {
//! let mut router: Router<Context<Vec<String>>> = Router::new("http://example.com");
//! router.add_global(sync_fn(|ctx: &mut Context<Vec<String>>| {
//!     ctx.state.push("global".into());
//!     Ok(())
//! }));
//! router.add(
//!     "/users/:id",
//!     from_fn(|ctx: &mut Context<Vec<String>>, _next| {
//!         Box::pin(async move {
//!             let id = ctx.params().get("id").unwrap_or_default().to_owned();
//!             ctx.state.push(id);
//!             Ok(())
//!         })
//!     }),
//! );
//!
//! let ctx = router.dispatch(Context::with_state("/users/42", Vec::new())).await?;
//! assert_eq!(ctx.state, ["global", "42"]);
//! # Ok::<(), chain_router::RouterError>(())
//! # }).unwrap();
//! ```

#![forbid(unsafe_code)]

mod context;
mod router;
mod strmap;

pub mod middleware;

#[cfg(feature = "http-context")]
pub mod http_context;

pub use self::context::{Context, RouteContext, RouteInfo};
pub use self::middleware::{Chain, Middleware, Next};
pub use self::router::{BoxError, Found, Params, PathError, Result, Router, RouterError};

/// Builds a [`Router`] from a base url and a table of routes.
///
/// `_` registers global middleware; every other key is a path template.
/// Entries are registered top to bottom.
///
/// ```
/// use chain_router::middleware::sync_fn;
/// use chain_router::{Context, Router};
///
/// let router: Router<Context> = chain_router::router! {
///     "http://example.com";
///     _ => [sync_fn(|_: &mut Context| Ok(()))],
///     "/" => [],
///     "/users/:id" => [sync_fn(|_: &mut Context| Ok(()))],
/// };
/// assert_eq!(router.route_count(), 2);
/// ```
#[macro_export]
macro_rules! router {
    {@entry $router:ident, _, [$($handler:expr),*]} => {
        $($router.add_global($handler);)*
    };
    {@entry $router:ident, $pattern:expr, [$($handler:expr),*]} => {
        $router.add_all(
            $pattern,
            ::std::vec![$($crate::middleware::boxed($handler)),*],
        );
    };

    {$base:expr; $($pattern:tt => [$($handler:expr),* $(,)?]),+ $(,)?} => {{
        let mut __router = $crate::Router::new($base);
        $($crate::router!(@entry __router, $pattern, [$($handler),*]);)+
        __router
    }};
}
