//! Route table subsystem.
//!
//! # Data Flow
//! ```text
//! feature modules (modules/*)
//!     → each supplies Vec<RouteDescriptor>
//!     → modules::collect() concatenates in fixed module order
//!     → table.rs registers each descriptor with the axum Router in list order
//! ```
//!
//! # Design Decisions
//! - HTTP verbs are a closed enum, mapped to axum's verb-specific
//!   registration calls by an exhaustive match
//! - No dedup, no validation, no specificity sorting: registration order is
//!   the only ordering guarantee; duplicate (path, method) pairs are left to
//!   the framework's own dispatch rules

pub mod table;

pub use table::{register_routes, Method, RouteDescriptor};
