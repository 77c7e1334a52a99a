//! # Lifecycle Controller
//!
//! A campus persists its lifecycle as two plain fields, a status code string and a
//! `usable` flag ([`StatusFields`]). The [`LifecycleController`] sits next to them and
//! holds the materialized [`CampusStatus`], a cache that is never persisted.
//!
//! Rules the controller enforces:
//!
//! - The cache is rebuilt from the status code before any query or transition. Missing,
//!   empty and unrecognised codes all rebuild as `OPEN`.
//! - Transitions go through [`CampusStatus::apply`] and write both persisted fields back.
//!   A rejected transition writes nothing.
//! - Overriding the code directly drops the cache and re-derives `usable`.
//! - Setting `usable` directly to a value the current state disagrees with snaps the
//!   code to `OPEN` or `CLOSED` and drops the cache.

use crate::lifecycle::status::{CampusStatus, LifecycleError, Transition};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

/// Persisted lifecycle fields of a campus.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusFields {
    pub status_code: Option<String>,
    pub usable: bool,
}

impl StatusFields {
    /// Fields for a freshly created campus. A blank code starts the campus `OPEN`.
    pub fn initial(code: Option<&str>) -> Self {
        let code = match code.map(str::trim) {
            Some(code) if !code.is_empty() => code.to_string(),
            _ => CampusStatus::Open.name().to_string(),
        };
        Self {
            usable: CampusStatus::resolve(Some(&code)).accepts_activity(),
            status_code: Some(code),
        }
    }
}

impl Default for StatusFields {
    fn default() -> Self {
        Self::initial(None)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LifecycleController {
    current: Option<CampusStatus>,
}

impl LifecycleController {
    pub fn is_materialized(&self) -> bool {
        self.current.is_some()
    }

    /// Drop the cached state. The next access rebuilds it from the persisted code.
    pub fn invalidate(&mut self) {
        self.current = None;
    }

    /// The current state, rebuilding the cache from `fields` if needed.
    pub fn materialize(&mut self, fields: &StatusFields) -> CampusStatus {
        if let Some(status) = self.current {
            return status;
        }
        let status = CampusStatus::resolve(fields.status_code.as_deref());
        debug!(code = ?fields.status_code, %status, "Materialized lifecycle state");
        self.current = Some(status);
        status
    }

    pub fn open(&mut self, fields: &mut StatusFields) -> Result<CampusStatus, LifecycleError> {
        self.transition(fields, Transition::Open)
    }

    pub fn close(&mut self, fields: &mut StatusFields) -> Result<CampusStatus, LifecycleError> {
        self.transition(fields, Transition::Close)
    }

    pub fn enter_maintenance(
        &mut self,
        fields: &mut StatusFields,
    ) -> Result<CampusStatus, LifecycleError> {
        self.transition(fields, Transition::EnterMaintenance)
    }

    pub fn transition(
        &mut self,
        fields: &mut StatusFields,
        transition: Transition,
    ) -> Result<CampusStatus, LifecycleError> {
        let from = self.materialize(fields);
        let to = from.apply(transition)?;

        self.current = Some(to);
        fields.status_code = Some(to.name().to_string());
        fields.usable = to.accepts_activity();

        if from == to {
            debug!(%transition, status = %to, "Transition is a no-op");
        } else {
            info!(%transition, %from, %to, "Lifecycle transition");
        }
        Ok(to)
    }

    pub fn description(&mut self, fields: &StatusFields) -> &'static str {
        self.materialize(fields).description()
    }

    pub fn accepts_activity(&mut self, fields: &StatusFields) -> bool {
        self.materialize(fields).accepts_activity()
    }

    pub fn schedulable(&mut self, fields: &StatusFields) -> bool {
        self.materialize(fields).schedulable()
    }

    /// Replace the status code without running a transition.
    ///
    /// No legality check applies. `usable` is re-derived from the new code so the two
    /// persisted fields stay in agreement.
    pub fn override_code(&mut self, fields: &mut StatusFields, code: impl Into<String>) {
        let code = code.into();
        fields.usable = CampusStatus::resolve(Some(&code)).accepts_activity();
        fields.status_code = Some(code);
        self.invalidate();
    }

    /// Set the `usable` flag directly.
    ///
    /// When the flag disagrees with the current state the status code is replaced by
    /// `OPEN` (usable) or `CLOSED` (not usable). The discarded code is logged.
    pub fn set_usable(&mut self, fields: &mut StatusFields, usable: bool) {
        let current = self.materialize(fields);
        fields.usable = usable;
        if current.accepts_activity() == usable {
            return;
        }

        let snapped = CampusStatus::for_usable(usable);
        warn!(
            discarded = ?fields.status_code,
            %snapped,
            usable,
            "usable flag disagrees with lifecycle state; replacing status code"
        );
        fields.status_code = Some(snapped.name().to_string());
        self.invalidate();
    }
}
