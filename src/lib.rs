//! Session-backed HTTP service skeleton.
//!
//! An axum web server with a file-backed session store, structured JSON
//! logging to append-only files, environment-driven configuration, and a
//! lifecycle controller that treats every termination trigger as fatal.

// Core subsystems
pub mod config;
pub mod http;
pub mod modules;
pub mod routing;
pub mod session;

// Cross-cutting concerns
pub mod lifecycle;
pub mod observability;

pub use config::AppConfig;
pub use http::HttpServer;
pub use lifecycle::{ShutdownController, ShutdownHandle, TerminationEvent};
pub use session::FileSessionStore;
