//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! All subsystems emit tracing events:
//!     → error.log    (JSON, ERROR only)
//!     → combined.log (JSON, INFO and above)
//!     → console      (human-readable, development only)
//! ```
//!
//! # Design Decisions
//! - Structured JSON for machine parsing, plain fmt for humans
//! - Non-blocking writers; the guards must live as long as the process
//! - Console filtering still honors `RUST_LOG`

pub mod logging;

pub use logging::{init, LogGuards};
