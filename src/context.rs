use crate::router::Params;

use std::sync::Arc;

use url::Url;

/// What the router needs from a per-request context.
///
/// The router reads the request path from [`RouteContext::request_url`] and
/// writes captures and route metadata back. Everything else on the context is
/// left to the middleware.
pub trait RouteContext: Send {
    /// The request path, absolute or relative to the router's base.
    fn request_url(&self) -> &str;

    /// The captured parameters, created empty if absent.
    fn params_mut(&mut self) -> &mut Params;

    /// Stores the route metadata for the current dispatch.
    fn set_route(&mut self, route: RouteInfo);
}

/// Route metadata written by the router before any handler runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteInfo {
    url: Url,
    pattern: Option<Arc<str>>,
}

impl RouteInfo {
    pub(crate) fn new(url: Url, pattern: Option<Arc<str>>) -> Self {
        Self { url, pattern }
    }

    /// The request url resolved against the router's base.
    pub fn url(&self) -> &Url {
        &self.url
    }

    /// The matched template, `None` when no route matched.
    pub fn pattern(&self) -> Option<&str> {
        self.pattern.as_deref()
    }

    pub fn is_match(&self) -> bool {
        self.pattern.is_some()
    }
}

/// A ready-made context carrying a caller-defined `state`.
#[derive(Debug, Clone, Default)]
pub struct Context<S = ()> {
    url: String,
    params: Params,
    route: Option<RouteInfo>,
    pub state: S,
}

impl Context {
    pub fn new(url: impl Into<String>) -> Self {
        Self::with_state(url, ())
    }
}

impl<S> Context<S> {
    pub fn with_state(url: impl Into<String>, state: S) -> Self {
        Self {
            url: url.into(),
            params: Params::new(),
            route: None,
            state,
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn params(&self) -> &Params {
        &self.params
    }

    pub fn route(&self) -> Option<&RouteInfo> {
        self.route.as_ref()
    }

    pub fn into_state(self) -> S {
        self.state
    }
}

impl<S: Send> RouteContext for Context<S> {
    fn request_url(&self) -> &str {
        &self.url
    }

    fn params_mut(&mut self) -> &mut Params {
        &mut self.params
    }

    fn set_route(&mut self, route: RouteInfo) {
        self.route = Some(route);
    }
}
