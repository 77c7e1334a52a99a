//! Error types for the Campus actor.

use crate::framework::FrameworkError;
use crate::lifecycle::LifecycleError;
use crate::model::CampusId;
use thiserror::Error;

/// Errors that can occur during campus operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CampusError {
    /// No campus is stored under the id.
    #[error("Campus not found with id: {0}")]
    NotFound(CampusId),

    /// The lifecycle refused the requested transition. Nothing was written.
    #[error(transparent)]
    IllegalTransition(#[from] LifecycleError),

    /// A create or update payload failed validation. Nothing was written.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The campus actor is gone or dropped the reply.
    #[error("Campus registry unavailable: {0}")]
    Unavailable(String),
}

impl From<FrameworkError> for CampusError {
    fn from(e: FrameworkError) -> Self {
        match e {
            FrameworkError::NotFound(id) => CampusError::NotFound(CampusId::from(id)),
            FrameworkError::EntityError(inner) => match inner.downcast::<CampusError>() {
                Ok(campus_error) => *campus_error,
                Err(other) => CampusError::Unavailable(other.to_string()),
            },
            other @ (FrameworkError::ActorClosed | FrameworkError::ActorDropped) => {
                CampusError::Unavailable(other.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lifecycle::{CampusStatus, Transition};

    #[test]
    fn entity_errors_are_recovered_by_downcast() {
        let lifecycle = CampusStatus::Closed
            .apply(Transition::EnterMaintenance)
            .unwrap_err();
        let boxed = FrameworkError::EntityError(Box::new(CampusError::from(lifecycle.clone())));

        assert_eq!(CampusError::from(boxed), CampusError::IllegalTransition(lifecycle));
    }

    #[test]
    fn framework_not_found_keeps_id() {
        let err = CampusError::from(FrameworkError::NotFound("campus_9".to_string()));
        assert_eq!(err, CampusError::NotFound(CampusId::from(9)));
        assert_eq!(err.to_string(), "Campus not found with id: campus_9");
    }

    #[test]
    fn closed_actor_is_unavailable() {
        let err = CampusError::from(FrameworkError::ActorClosed);
        assert!(matches!(err, CampusError::Unavailable(_)));
    }

    #[test]
    fn foreign_entity_error_is_unavailable() {
        let err = CampusError::from(FrameworkError::EntityError(Box::new(std::io::Error::other(
            "disk on fire",
        ))));
        assert_eq!(err, CampusError::Unavailable("disk on fire".to_string()));
    }
}
