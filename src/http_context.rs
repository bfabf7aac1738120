//! [`RouteContext`] for `http::Request`.
//!
//! Captured parameters and route metadata are stored in the request
//! extensions, where extractors further down the stack can pick them up.

use crate::context::{RouteContext, RouteInfo};
use crate::router::Params;

use http::Request;

impl<B: Send> RouteContext for Request<B> {
    fn request_url(&self) -> &str {
        self.uri()
            .path_and_query()
            .map(|pq| pq.as_str())
            .unwrap_or("/")
    }

    fn params_mut(&mut self) -> &mut Params {
        self.extensions_mut().get_or_insert_default::<Params>()
    }

    fn set_route(&mut self, route: RouteInfo) {
        self.extensions_mut().insert(route);
    }
}

/// Read access to what the router stored on an `http::Request`.
pub trait RequestRouteExt {
    fn route_params(&self) -> Option<&Params>;
    fn route_info(&self) -> Option<&RouteInfo>;
}

impl<B> RequestRouteExt for Request<B> {
    fn route_params(&self) -> Option<&Params> {
        self.extensions().get::<Params>()
    }

    fn route_info(&self) -> Option<&RouteInfo> {
        self.extensions().get::<RouteInfo>()
    }
}
