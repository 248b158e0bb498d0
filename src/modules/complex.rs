//! Placeholder feature module.
//!
//! The real handler lives in an external collaborator that is wired in by the
//! deployment; this module only reserves the route.

use axum::http::StatusCode;
use axum::Json;
use serde_json::{json, Value};

use crate::routing::{Method, RouteDescriptor};

async fn complex_module_handler() -> (StatusCode, Json<Value>) {
    (
        StatusCode::NOT_IMPLEMENTED,
        Json(json!({ "error": "complex-module handler not installed" })),
    )
}

pub fn routes() -> Vec<RouteDescriptor> {
    vec![RouteDescriptor::new(
        Method::Get,
        "/complex-module",
        complex_module_handler,
    )]
}
