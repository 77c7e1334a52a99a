//! Domain data types.

pub mod campus;

pub use campus::{Campus, CampusCreate, CampusId, CampusPatch, StatusReport};
