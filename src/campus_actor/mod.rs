//! Campus-specific resource logic: validation, bulk update and lifecycle actions.

mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::clients::CampusClient;
use crate::framework::ResourceActor;
use crate::model::Campus;

/// Creates a new Campus actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<Campus>, CampusClient) {
    let (actor, generic_client) = ResourceActor::new(buffer_size);
    (actor, CampusClient::new(generic_client))
}
