//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (axum setup, middleware stack)
//!     → session middleware (load or create session)
//!     → registered feature-module handler
//!     → response (Set-Cookie appended for fresh sessions)
//! ```

pub mod server;

pub use server::{AppState, HttpServer};
