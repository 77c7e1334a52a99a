use crate::lifecycle::{CampusStatus, LifecycleController, LifecycleError, StatusFields, Transition};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque campus identifier, assigned by the store on creation (`campus_1`, `campus_2`, ...).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CampusId(String);

impl CampusId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<u32> for CampusId {
    fn from(n: u32) -> Self {
        Self(format!("campus_{}", n))
    }
}

impl From<String> for CampusId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for CampusId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl fmt::Display for CampusId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A campus record.
///
/// Identity and contact attributes are plain public fields. The lifecycle pair
/// (`statusCode`, `usable`) is private and only changes through the methods below,
/// which delegate to a [`LifecycleController`]. The controller is not serialized; a
/// deserialized record rebuilds its state from `statusCode` on first use.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Campus {
    pub id: CampusId,
    pub name: String,
    pub address: String,
    pub city: String,
    pub phone: String,
    #[serde(flatten)]
    status: StatusFields,
    #[serde(skip)]
    lifecycle: LifecycleController,
}

impl Campus {
    pub fn new(id: CampusId, params: CampusCreate) -> Self {
        Self {
            id,
            status: StatusFields::initial(params.status_code.as_deref()),
            name: params.name,
            address: params.address,
            city: params.city,
            phone: params.phone,
            lifecycle: LifecycleController::default(),
        }
    }

    /// The persisted status code, exactly as stored.
    pub fn status_code(&self) -> Option<&str> {
        self.status.status_code.as_deref()
    }

    pub fn usable(&self) -> bool {
        self.status.usable
    }

    pub fn status(&mut self) -> CampusStatus {
        self.lifecycle.materialize(&self.status)
    }

    pub fn transition(&mut self, transition: Transition) -> Result<CampusStatus, LifecycleError> {
        self.lifecycle.transition(&mut self.status, transition)
    }

    pub fn open(&mut self) -> Result<CampusStatus, LifecycleError> {
        self.lifecycle.open(&mut self.status)
    }

    pub fn close(&mut self) -> Result<CampusStatus, LifecycleError> {
        self.lifecycle.close(&mut self.status)
    }

    pub fn enter_maintenance(&mut self) -> Result<CampusStatus, LifecycleError> {
        self.lifecycle.enter_maintenance(&mut self.status)
    }

    pub fn status_description(&mut self) -> &'static str {
        self.lifecycle.description(&self.status)
    }

    pub fn accepts_activity(&mut self) -> bool {
        self.lifecycle.accepts_activity(&self.status)
    }

    pub fn schedulable(&mut self) -> bool {
        self.lifecycle.schedulable(&self.status)
    }

    pub fn is_operational(&mut self) -> bool {
        self.status().is_operational()
    }

    /// Case-insensitive comparison against the persisted code.
    pub fn is_in_state(&self, code: &str) -> bool {
        self.status_code()
            .is_some_and(|stored| stored.eq_ignore_ascii_case(code.trim()))
    }

    pub fn set_status_code(&mut self, code: impl Into<String>) {
        self.lifecycle.override_code(&mut self.status, code);
    }

    pub fn set_usable(&mut self, usable: bool) {
        self.lifecycle.set_usable(&mut self.status, usable);
    }

    /// One-line summary, e.g. `North - 1 Quad Road, Riverton (OPEN)`.
    pub fn basic_info(&mut self) -> String {
        let status = self.status();
        format!("{} - {}, {} ({})", self.name, self.address, self.city, status)
    }

    pub fn status_report(&mut self) -> StatusReport {
        let status = self.status();
        StatusReport {
            id: self.id.clone(),
            name: self.name.clone(),
            code: self.status_code().unwrap_or(status.name()).to_string(),
            state: status,
            description: status.description().to_string(),
            accepts_activity: status.accepts_activity(),
            schedulable: status.schedulable(),
            usable: self.status.usable,
        }
    }
}

/// Payload for creating a campus.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CampusCreate {
    pub name: String,
    pub address: String,
    pub city: String,
    #[serde(default)]
    pub phone: String,
    /// Initial status code. Absent or blank means `OPEN`.
    #[serde(default)]
    pub status_code: Option<String>,
}

/// Bulk overwrite of a campus.
///
/// Text fields are only written when present. `usable` is always written; it defaults
/// to `true` when the payload omits it. A `statusCode` that differs from the stored one
/// replaces it without any transition check.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CampusPatch {
    pub name: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub phone: Option<String>,
    pub status_code: Option<String>,
    #[serde(default = "default_usable")]
    pub usable: bool,
}

fn default_usable() -> bool {
    true
}

impl Default for CampusPatch {
    fn default() -> Self {
        Self {
            name: None,
            address: None,
            city: None,
            phone: None,
            status_code: None,
            usable: true,
        }
    }
}

/// Snapshot of a campus' lifecycle, as served by the status endpoint.
///
/// `code` is the stored code as written; `state` is the state it resolves to, which
/// drives the description and capabilities.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusReport {
    pub id: CampusId,
    pub name: String,
    pub code: String,
    pub state: CampusStatus,
    pub description: String,
    pub accepts_activity: bool,
    pub schedulable: bool,
    pub usable: bool,
}
