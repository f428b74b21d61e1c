use crate::actor::GraphActor;
use crate::clients::GraphClient;
use crate::config::SystemConfig;
use crate::store::GraphStore;
use tracing::{error, info};

/// Runtime orchestrator for the social graph.
///
/// `SocialSystem` is responsible for:
/// - **Startup**: building the [`GraphStore`] and spawning its [`GraphActor`]
/// - **Access**: handing out the [`GraphClient`] (clone it freely)
/// - **Shutdown**: closing the channel and waiting for the actor to finish
///
/// # Example
///
/// ```ignore
/// let system = SocialSystem::new(&SystemConfig::default());
///
/// let alice = system.client.create_user(UserCreate::new("alice", 28, ["reading"])).await?;
/// let ranking = system.client.users_by_popularity().await?;
///
/// let final_store = system.shutdown().await?;
/// ```
pub struct SocialSystem {
    /// Client for interacting with the graph actor
    pub client: GraphClient,

    /// Task handle of the running actor (used for graceful shutdown)
    handle: tokio::task::JoinHandle<GraphStore>,
}

impl SocialSystem {
    /// Spawns a graph actor over an empty store.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn new(config: &SystemConfig) -> Self {
        Self::with_store(config, GraphStore::new())
    }

    /// Spawns a graph actor over an existing store.
    pub fn with_store(config: &SystemConfig, store: GraphStore) -> Self {
        let (actor, client) = GraphActor::new(config.channel_capacity, store);
        let handle = tokio::spawn(actor.run());
        info!(channel_capacity = config.channel_capacity, "Social system started");
        Self { client, handle }
    }

    /// Gracefully shuts down the system and returns the final store.
    ///
    /// Dropping this system's client closes the channel once every other clone of it is
    /// gone too; the actor drains what is queued and exits.
    ///
    /// # Errors
    ///
    /// Returns an error message if the actor task panicked or was cancelled.
    pub async fn shutdown(self) -> Result<GraphStore, String> {
        info!("Shutting down system...");
        drop(self.client);

        match self.handle.await {
            Ok(store) => {
                info!(size = store.len(), "System shutdown complete.");
                Ok(store)
            }
            Err(e) => {
                error!("Actor task failed: {:?}", e);
                Err(format!("Actor task failed: {:?}", e))
            }
        }
    }
}
