//! HTTP server setup and lifecycle.
//!
//! # Responsibilities
//! - Build the axum Router from the aggregated route table
//! - Wire up middleware (sessions, request tracing)
//! - Serve on a bound listener with graceful shutdown
//!
//! # Design Decisions
//! - All shared state lives in one explicit `AppState`; no process-wide
//!   singletons
//! - Routes install in exactly the order the route table yields them
//! - The drain is owned by the lifecycle controller; the server only awaits it

use std::sync::Arc;

use axum::{middleware, Router};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use crate::config::AppConfig;
use crate::lifecycle::{ShutdownController, ShutdownHandle};
use crate::routing::{register_routes, RouteDescriptor};
use crate::session::middleware::session_middleware;
use crate::session::FileSessionStore;

/// Application state injected into handlers and middleware.
#[derive(Debug, Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub sessions: FileSessionStore,
    pub shutdown: ShutdownHandle,
}

/// The HTTP server: a configured router waiting for a listener.
pub struct HttpServer {
    router: Router,
}

impl HttpServer {
    /// Assemble the server from its collaborators and a route table.
    pub fn new(
        config: AppConfig,
        sessions: FileSessionStore,
        shutdown: ShutdownHandle,
        routes: Vec<RouteDescriptor>,
    ) -> Self {
        let state = AppState {
            config: Arc::new(config),
            sessions,
            shutdown,
        };
        Self {
            router: Self::build_router(state, routes),
        }
    }

    /// Build the axum router: routes in registration order, then the
    /// middleware stack.
    fn build_router(state: AppState, routes: Vec<RouteDescriptor>) -> Router {
        register_routes(Router::new(), routes)
            .layer(middleware::from_fn_with_state(state.clone(), session_middleware))
            .layer(TraceLayer::new_for_http())
            .with_state(state)
    }

    /// The assembled router, for in-process tests.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Serve on the listener until the first termination event, then drain.
    ///
    /// Returns once the listener is closed and in-flight requests finished;
    /// the caller decides the process exit status.
    pub async fn run(
        self,
        listener: TcpListener,
        controller: ShutdownController,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "Server listening on http://{addr}/status");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let event = controller.triggered().await;
                tracing::error!(
                    event = ?event,
                    "Termination trigger received, draining listener"
                );
            })
            .await?;

        tracing::info!("Listener closed, in-flight requests finished");
        Ok(())
    }
}
