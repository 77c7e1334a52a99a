use serde::Serialize;

use crate::lifecycle::CampusStatus;
use crate::model::{Campus, CampusId};

pub const OPENED: &str = "Campus opened successfully";
pub const CLOSED: &str = "Campus closed successfully";
pub const MAINTENANCE: &str = "Campus put in maintenance mode";
pub const DEACTIVATED: &str = "Campus deactivated successfully";
pub const NOT_FOUND: &str = "Campus not found";

/// Body returned by the transition endpoints.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransitionSummary {
    pub message: &'static str,
    pub id: CampusId,
    pub name: String,
    pub code: CampusStatus,
    pub description: &'static str,
    pub accepts_activity: bool,
    pub schedulable: bool,
}

impl TransitionSummary {
    pub fn new(message: &'static str, mut campus: Campus) -> Self {
        let status = campus.status();
        Self {
            message,
            id: campus.id,
            name: campus.name,
            code: status,
            description: status.description(),
            accepts_activity: status.accepts_activity(),
            schedulable: status.schedulable(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct DeleteAck {
    pub message: &'static str,
    pub id: CampusId,
}

#[derive(Debug, Serialize)]
pub struct DeleteFailure {
    pub error: &'static str,
    pub id: CampusId,
}

#[derive(Debug, Serialize)]
pub struct Health {
    pub status: &'static str,
}
