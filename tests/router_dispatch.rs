//! In-process router tests (no network).

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use http_body_util::BodyExt;
use tower::ServiceExt;

use app_server::config::AppConfig;
use app_server::lifecycle::ShutdownController;
use app_server::routing::{Method, RouteDescriptor};
use app_server::{modules, FileSessionStore, HttpServer};

async fn build_server(routes: Vec<RouteDescriptor>) -> (tempfile::TempDir, HttpServer) {
    let dir = tempfile::tempdir().unwrap();
    let mut config = AppConfig::default();
    config.session_path = dir.path().to_path_buf();
    let sessions = FileSessionStore::open(dir.path()).await.unwrap();
    let controller = ShutdownController::new();
    let server = HttpServer::new(config, sessions, controller.handle(), routes);
    (dir, server)
}

#[tokio::test]
async fn status_body_is_exact() {
    let (_dir, server) = build_server(modules::collect()).await;

    let response = server
        .router()
        .oneshot(Request::builder().uri("/status").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response
            .headers()
            .get(header::CONTENT_TYPE)
            .unwrap()
            .to_str()
            .unwrap(),
        "application/json"
    );
    let body = response.into_body().collect().await.unwrap().to_bytes();
    assert_eq!(&body[..], br#"{"status":"UP"}"#);
}

#[tokio::test]
async fn status_is_unaffected_by_other_registrations() {
    async fn noisy() -> StatusCode {
        StatusCode::IM_A_TEAPOT
    }

    let mut routes = modules::collect();
    routes.push(RouteDescriptor::new(Method::Get, "/noisy", noisy));
    routes.push(RouteDescriptor::new(Method::Post, "/noisy", noisy));
    routes.push(RouteDescriptor::new(Method::Delete, "/gone", noisy));
    let (_dir, server) = build_server(routes).await;

    let response = server
        .router()
        .oneshot(Request::builder().uri("/status").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = response.into_body().collect().await.unwrap().to_bytes();
    assert_eq!(&body[..], br#"{"status":"UP"}"#);
}

#[tokio::test]
async fn verbs_dispatch_to_their_handlers() {
    async fn created() -> StatusCode {
        StatusCode::CREATED
    }
    async fn accepted() -> StatusCode {
        StatusCode::ACCEPTED
    }

    let routes = vec![
        RouteDescriptor::new(Method::Post, "/thing", created),
        RouteDescriptor::new(Method::Put, "/thing", accepted),
    ];
    let (_dir, server) = build_server(routes).await;

    let post = server
        .router()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/thing")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(post.status(), StatusCode::CREATED);

    let put = server
        .router()
        .oneshot(
            Request::builder()
                .method("PUT")
                .uri("/thing")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(put.status(), StatusCode::ACCEPTED);
}
