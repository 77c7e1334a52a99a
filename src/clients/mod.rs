//! Type-safe wrappers around [`ResourceClient`](crate::framework::ResourceClient).

pub mod actor_client;
pub mod campus_client;

pub use actor_client::ActorClient;
pub use campus_client::CampusClient;
