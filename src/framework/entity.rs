//! # ActorEntity Trait
//!
//! The contract every stored resource implements so the generic
//! [`ResourceActor`](crate::framework::ResourceActor) can own it. Associated types pin
//! down the id, the create/update payloads, the custom actions and the error type, so a
//! campus actor can only ever be sent campus payloads.
//!
//! Hooks mutate the entity in place. The actor runs every hook against a draft copy and
//! only commits the draft when the hook returns `Ok`, so an entity never needs to undo
//! partial writes itself.

use async_trait::async_trait;
use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Trait that any resource entity must implement to be managed by `ResourceActor`.
///
/// # Async & Context
/// Hooks are `async` so they may consult other actors. The `Context` type is injected
/// into every hook at `run()` time, which lets dependencies be wired after the actor
/// itself was constructed.
#[async_trait]
pub trait ActorEntity: Clone + Send + Sync + 'static {
    /// The unique identifier for this entity.
    /// Must be convertible from u32 for automatic ID generation.
    type Id: Eq + Hash + Clone + Send + Sync + Display + Debug + From<u32>;

    /// The data required to create a new instance.
    type Create: Send + Sync + Debug;

    /// The data required to update an existing instance.
    type Update: Send + Sync + Debug;

    /// Enum representing resource-specific operations.
    type Action: Send + Sync + Debug;

    /// The result type returned by custom actions.
    type ActionResult: Send + Sync + Debug;

    /// The runtime context (dependencies) injected into the actor.
    /// Use `()` if no dependencies are needed.
    type Context: Send + Sync;

    /// One error enum for the whole actor. It crosses the actor boundary boxed inside
    /// [`FrameworkError::EntityError`](crate::framework::FrameworkError::EntityError)
    /// and can be recovered by downcasting.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Construct the full entity from the generated ID and the payload.
    /// Called before `on_create`; returning an error stores nothing.
    fn from_create_params(id: Self::Id, params: Self::Create) -> Result<Self, Self::Error>;

    /// Called after construction, before the entity is inserted into the store.
    async fn on_create(&mut self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Called when an update request is received.
    async fn on_update(
        &mut self,
        update: Self::Update,
        _ctx: &Self::Context,
    ) -> Result<(), Self::Error>;

    /// Handle a custom resource-specific action.
    async fn handle_action(
        &mut self,
        action: Self::Action,
        _ctx: &Self::Context,
    ) -> Result<Self::ActionResult, Self::Error>;
}
