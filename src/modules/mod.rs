//! Feature modules contributing routes.
//!
//! Each submodule owns its handlers and exposes a `routes()` function;
//! [`collect`] concatenates them in a fixed module order. Intra-module order
//! is each module's own business.

pub mod complex;
pub mod status;

use crate::routing::RouteDescriptor;

/// Aggregate the route contributions of every feature module.
///
/// Module order is fixed and deterministic; no deduplication or validation
/// happens here.
pub fn collect() -> Vec<RouteDescriptor> {
    let mut routes = Vec::new();
    routes.extend(status::routes());
    routes.extend(complex::routes());
    routes
}
