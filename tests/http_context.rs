#![cfg(feature = "http-context")]

use chain_router::http_context::RequestRouteExt;
use chain_router::middleware::{fallback_fn, sync_fn};
use chain_router::Router;

use http::{HeaderValue, Request};

fn request(uri: &str) -> Request<()> {
    Request::builder().uri(uri).body(()).unwrap()
}

fn router() -> Router<Request<()>> {
    let mut router = Router::new("http://example.com");
    router.add(
        "/users/:id",
        sync_fn(|req: &mut Request<()>| {
            let id = req
                .route_params()
                .and_then(|p| p.get("id"))
                .unwrap_or_default()
                .to_owned();
            let value = HeaderValue::from_str(&id).map_err(chain_router::RouterError::handler)?;
            req.headers_mut().insert("x-user-id", value);
            Ok(())
        }),
    );
    router
}

#[tokio::test]
async fn params_and_route_live_in_extensions() {
    let req = router().dispatch(request("/users/42?tab=posts")).await.unwrap();

    assert_eq!(req.headers()["x-user-id"], "42");
    assert_eq!(req.route_params().unwrap().get("id"), Some("42"));

    let route = req.route_info().unwrap();
    assert_eq!(route.pattern(), Some("/users/:id"));
    assert_eq!(route.url().query(), Some("tab=posts"));
}

#[tokio::test]
async fn absolute_request_uri_uses_its_path() {
    let req = router()
        .dispatch(request("http://other.host/users/7"))
        .await
        .unwrap();
    assert_eq!(req.route_params().unwrap().get("id"), Some("7"));
    assert_eq!(
        req.route_info().unwrap().url().as_str(),
        "http://example.com/users/7"
    );
}

#[tokio::test]
async fn unmatched_request_reaches_fallback() {
    let fallback = fallback_fn(|req: &mut Request<()>| {
        Box::pin(async move {
            req.headers_mut()
                .insert("x-fallback", HeaderValue::from_static("1"));
            Ok(())
        })
    });

    let req = router()
        .dispatch_with(request("/nothing/here"), &fallback)
        .await
        .unwrap();
    assert_eq!(req.headers()["x-fallback"], "1");
    assert!(req.route_params().is_none());
    assert!(!req.route_info().unwrap().is_match());
}

#[tokio::test]
async fn redispatch_replaces_earlier_captures() {
    let mut router = router();
    router.add("/about", sync_fn(|_: &mut Request<()>| Ok(())));

    let mut req = router.dispatch(request("/users/42")).await.unwrap();
    assert_eq!(req.route_params().unwrap().get("id"), Some("42"));

    *req.uri_mut() = "/about".parse().unwrap();
    router.dispatch_mut(&mut req, None).await.unwrap();
    assert!(req.route_params().unwrap().is_empty());
    assert_eq!(req.route_info().unwrap().pattern(), Some("/about"));
}
