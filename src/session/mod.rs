//! Session subsystem.
//!
//! # Data Flow
//! ```text
//! Request
//!     → middleware.rs (read Cookie header)
//!     → cookie.rs (verify signature, recover session id)
//!     → store.rs (load record from SESSION_PATH, expire by TTL)
//!     → SessionContext in request extensions
//!     → handler runs
//!     → Set-Cookie appended when a new session was created
//! ```
//!
//! # Design Decisions
//! - One JSON file per session; all I/O async through tokio
//! - Cookie carries the id plus a signature over the secret; a bad
//!   signature is the same as no cookie
//! - Store failures are not retried: the request answers 500 and the
//!   failure escalates through the termination channel

pub mod cookie;
pub mod middleware;
pub mod store;

pub use middleware::{session_middleware, SessionContext};
pub use store::{FileSessionStore, SessionError, SessionRecord};
