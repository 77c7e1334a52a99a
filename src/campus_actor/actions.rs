//! Custom actions for the Campus actor.
//!
//! Each action is one lifecycle transition. The actor answers with the campus as
//! stored after the transition.

use crate::lifecycle::Transition;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CampusAction {
    Open,
    Close,
    EnterMaintenance,
}

impl From<CampusAction> for Transition {
    fn from(action: CampusAction) -> Self {
        match action {
            CampusAction::Open => Transition::Open,
            CampusAction::Close => Transition::Close,
            CampusAction::EnterMaintenance => Transition::EnterMaintenance,
        }
    }
}
