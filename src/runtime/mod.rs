//! Runtime orchestration: starting and stopping actors, and logging setup.
//!
//! - [`CampusSystem`] - spawns the campus actor and owns its task handle
//! - [`setup_tracing`] - installs the global tracing subscriber

pub mod campus_system;
pub mod tracing;

pub use self::campus_system::{CampusSystem, DEFAULT_CHANNEL_CAPACITY};
pub use self::tracing::setup_tracing;
