use crate::campus_actor;
use crate::clients::CampusClient;
use tokio::task::JoinHandle;
use tracing::{error, info};

/// Mailbox size used by [`CampusSystem::default`].
pub const DEFAULT_CHANNEL_CAPACITY: usize = 32;

/// Owns the running campus actor and hands out its client.
///
/// # Example
///
/// ```ignore
/// let system = CampusSystem::new(32);
/// let campus = system.campus_client.create(params).await?;
/// system.shutdown().await?;
/// ```
pub struct CampusSystem {
    /// Client for interacting with the Campus actor.
    pub campus_client: CampusClient,

    /// Task handles for all running actors.
    handles: Vec<JoinHandle<()>>,
}

impl CampusSystem {
    /// Spawns the campus actor with a mailbox of `channel_capacity` requests.
    pub fn new(channel_capacity: usize) -> Self {
        let (campus_actor, campus_client) = campus_actor::new(channel_capacity);
        let campus_handle = tokio::spawn(campus_actor.run(()));

        info!(channel_capacity, "Campus system started");
        Self {
            campus_client,
            handles: vec![campus_handle],
        }
    }

    /// Gracefully shuts down the system.
    ///
    /// Dropping the clients closes the actor mailboxes; each actor drains what is queued
    /// and exits. Clones of the client held elsewhere keep their actor alive, so drop
    /// those first.
    pub async fn shutdown(self) -> Result<(), tokio::task::JoinError> {
        info!("Shutting down system...");
        drop(self.campus_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!(error = %e, "Actor task failed");
                return Err(e);
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}

impl Default for CampusSystem {
    fn default() -> Self {
        Self::new(DEFAULT_CHANNEL_CAPACITY)
    }
}
