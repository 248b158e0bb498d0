//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! process environment (PORT, SECRET, SESSION_PATH, APP_ENV)
//!     → loader.rs (read & parse)
//!     → AppConfig (validated, immutable)
//!     → shared via AppState with all subsystems
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; there is no reload path
//! - All fields have defaults so an empty environment still boots
//! - The loader takes a variable-lookup function so tests never touch
//!   the real process environment

pub mod loader;
pub mod schema;

pub use loader::{load_from_env, ConfigError};
pub use schema::{AppConfig, Environment};
