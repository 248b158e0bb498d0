//! Health-check endpoint.

use axum::Json;
use serde_json::{json, Value};

use crate::routing::{Method, RouteDescriptor};

/// `GET /status` answers 200 with `{"status":"UP"}` as long as the event
/// loop is alive. No downstream dependency is probed.
async fn status_handler() -> Json<Value> {
    Json(json!({ "status": "UP" }))
}

pub fn routes() -> Vec<RouteDescriptor> {
    vec![RouteDescriptor::new(Method::Get, "/status", status_handler)]
}
