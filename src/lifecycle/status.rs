//! # Campus Status Definitions
//!
//! The three operational states a campus can be in, what each one allows, and which
//! transitions are legal out of it.
//!
//! | Current     | open        | close    | enter_maintenance |
//! |-------------|-------------|----------|-------------------|
//! | OPEN        | OPEN        | CLOSED   | MAINTENANCE       |
//! | CLOSED      | OPEN        | CLOSED   | rejected          |
//! | MAINTENANCE | OPEN        | CLOSED   | MAINTENANCE       |
//!
//! Requesting the state a campus is already in is a no-op, never an error. The only
//! rejected request is entering maintenance from `CLOSED`.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Operational state of a campus. The `SCREAMING_CASE` name is the persisted code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CampusStatus {
    Open,
    Closed,
    Maintenance,
}

/// A requested lifecycle change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Transition {
    Open,
    Close,
    EnterMaintenance,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LifecycleError {
    #[error("cannot {transition} while {}; {hint}", .from.name().to_ascii_lowercase())]
    IllegalTransition {
        from: CampusStatus,
        transition: Transition,
        hint: &'static str,
    },
}

impl CampusStatus {
    pub const ALL: [CampusStatus; 3] = [Self::Open, Self::Closed, Self::Maintenance];

    /// Stable name, used as the persisted status code.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Open => "OPEN",
            Self::Closed => "CLOSED",
            Self::Maintenance => "MAINTENANCE",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::Open => "Campus is fully operational and ready for activities",
            Self::Closed => "Campus is not operational and unavailable for activities",
            Self::Maintenance => "Campus is under maintenance with limited access",
        }
    }

    /// Whether the campus can host activity right now. Mirrors the persisted `usable` flag.
    pub fn accepts_activity(&self) -> bool {
        matches!(self, Self::Open)
    }

    /// Whether new events may be scheduled.
    pub fn schedulable(&self) -> bool {
        matches!(self, Self::Open)
    }

    pub fn is_operational(&self) -> bool {
        self.accepts_activity() || self.schedulable()
    }

    /// Strict, case-insensitive lookup of a persisted code.
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|status| status.name().eq_ignore_ascii_case(code.trim()))
    }

    /// Lenient lookup used when rebuilding state from storage.
    ///
    /// A missing or empty code means `OPEN`. An unrecognised code also means `OPEN`.
    pub fn resolve(code: Option<&str>) -> Self {
        code.and_then(Self::from_code).unwrap_or(Self::Open)
    }

    /// The code a campus snaps to when only its `usable` flag is known.
    pub fn for_usable(usable: bool) -> Self {
        if usable {
            Self::Open
        } else {
            Self::Closed
        }
    }

    /// Destination of `transition` out of this state.
    pub fn apply(self, transition: Transition) -> Result<Self, LifecycleError> {
        match (self, transition) {
            (_, Transition::Open) => Ok(Self::Open),
            (_, Transition::Close) => Ok(Self::Closed),
            (Self::Closed, Transition::EnterMaintenance) => Err(LifecycleError::IllegalTransition {
                from: self,
                transition,
                hint: "open first",
            }),
            (_, Transition::EnterMaintenance) => Ok(Self::Maintenance),
        }
    }
}

impl fmt::Display for CampusStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Display for Transition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Open => "open",
            Self::Close => "close",
            Self::EnterMaintenance => "enter maintenance",
        };
        f.write_str(s)
    }
}
