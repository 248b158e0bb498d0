//! Route descriptors and router registration.

use axum::handler::Handler;
use axum::routing::{delete, get, post, put, MethodRouter};
use axum::Router;

use crate::http::server::AppState;

/// HTTP verbs the route table supports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

/// One HTTP endpoint: verb, path pattern, and handler.
///
/// Descriptors are built once at startup by feature modules and are immutable
/// afterwards.
pub struct RouteDescriptor {
    pub method: Method,
    pub path: &'static str,
    handler: MethodRouter<AppState>,
}

impl RouteDescriptor {
    /// Wrap a handler for the given verb and path.
    pub fn new<H, T>(method: Method, path: &'static str, handler: H) -> Self
    where
        H: Handler<T, AppState>,
        T: 'static,
    {
        let handler = match method {
            Method::Get => get(handler),
            Method::Post => post(handler),
            Method::Put => put(handler),
            Method::Delete => delete(handler),
        };
        Self { method, path, handler }
    }
}

impl std::fmt::Debug for RouteDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RouteDescriptor")
            .field("method", &self.method)
            .field("path", &self.path)
            .finish_non_exhaustive()
    }
}

/// Install descriptors on the router in list order.
///
/// Conflicting registrations are not detected here; the framework applies its
/// own rules for overlapping routes.
pub fn register_routes(mut router: Router<AppState>, routes: Vec<RouteDescriptor>) -> Router<AppState> {
    for route in routes {
        tracing::debug!(method = ?route.method, path = route.path, "Registering route");
        router = router.route(route.path, route.handler);
    }
    router
}
