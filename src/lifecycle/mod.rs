//! Campus lifecycle state machine.
//!
//! - [`CampusStatus`] - the states, their capabilities and the transition table
//! - [`LifecycleController`] - keeps persisted fields and the materialized state in agreement

pub mod controller;
pub mod status;

pub use controller::{LifecycleController, StatusFields};
pub use status::{CampusStatus, LifecycleError, Transition};
