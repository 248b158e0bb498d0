//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (main.rs):
//!     Load config → Init logging → Open session store → Bind listener → Serve
//!
//! Shutdown (shutdown.rs):
//!     STARTING → LISTENING → DRAINING → STOPPED
//!     First termination event → stop accepting → drain in-flight → exit(1)
//!
//! Triggers (signals.rs):
//!     SIGTERM / ctrl-c  → ShutdownRequested
//!     panic anywhere    → UnhandledError
//!     dead worker task  → FailedTask
//! ```
//!
//! # Design Decisions
//! - Every termination path is uniformly fatal: exit status 1, no restart,
//!   no recovery; supervision is the platform's job
//! - All triggers funnel through one channel into one drain sequence
//! - A compare-and-set one-shot guarantees the drain runs at most once even
//!   when several triggers fire concurrently

pub mod shutdown;
pub mod signals;

pub use shutdown::{spawn_monitored, ShutdownController, ShutdownHandle, TerminationEvent};
