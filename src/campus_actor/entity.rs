//! [`ActorEntity`] implementation that lets the generic actor store campuses.
//!
//! Payloads are validated in full before the first field is written, so a rejected
//! create stores nothing and a rejected update leaves the record as it was.

use super::actions::CampusAction;
use super::error::CampusError;
use crate::framework::ActorEntity;
use crate::model::{Campus, CampusCreate, CampusId, CampusPatch};
use async_trait::async_trait;
use tracing::debug;

fn require_text(field: &str, value: &str) -> Result<(), CampusError> {
    if value.trim().is_empty() {
        return Err(CampusError::InvalidArgument(format!("{field} must not be blank")));
    }
    Ok(())
}

fn validate_create(params: &CampusCreate) -> Result<(), CampusError> {
    require_text("name", &params.name)?;
    require_text("address", &params.address)?;
    require_text("city", &params.city)
}

fn validate_patch(patch: &CampusPatch) -> Result<(), CampusError> {
    let present = [
        ("name", &patch.name),
        ("address", &patch.address),
        ("city", &patch.city),
        ("statusCode", &patch.status_code),
    ];
    for (field, value) in present {
        if let Some(value) = value {
            require_text(field, value)?;
        }
    }
    Ok(())
}

#[async_trait]
impl ActorEntity for Campus {
    type Id = CampusId;
    type Create = CampusCreate;
    type Update = CampusPatch;
    type Action = CampusAction;
    type ActionResult = Campus;
    type Context = ();
    type Error = CampusError;

    fn from_create_params(id: CampusId, params: CampusCreate) -> Result<Self, CampusError> {
        validate_create(&params)?;
        Ok(Campus::new(id, params))
    }

    /// Overwrites present text fields, then the lifecycle fields.
    ///
    /// A status code that differs from the stored one goes through the override path
    /// and wins over the flag. Otherwise the `usable` flag is written, snapping the code
    /// to `OPEN` or `CLOSED` when the two disagree.
    async fn on_update(&mut self, patch: CampusPatch, _ctx: &()) -> Result<(), CampusError> {
        validate_patch(&patch)?;
        let existing = self.status_code().map(str::to_owned);

        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(address) = patch.address {
            self.address = address;
        }
        if let Some(city) = patch.city {
            self.city = city;
        }
        if let Some(phone) = patch.phone {
            self.phone = phone;
        }

        match patch.status_code {
            Some(code) if existing.as_deref() != Some(code.as_str()) => {
                debug!(id = %self.id, from = ?existing, to = %code, "Overriding status code");
                self.set_status_code(code);
            }
            _ => self.set_usable(patch.usable),
        }
        Ok(())
    }

    async fn handle_action(&mut self, action: CampusAction, _ctx: &()) -> Result<Campus, CampusError> {
        self.transition(action.into())?;
        Ok(self.clone())
    }
}
