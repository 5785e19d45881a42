use tracing::{error, info};

use crate::config::Config;
use crate::error::RemoteError;
use crate::framework::{RecordStore, StoreActor, StoreClient};
use crate::model::Product;
use crate::store::{HttpStore, MemoryStore};

/// Capacity of the store request channel.
pub const STORE_BUFFER: usize = 32;

/// Starts and stops the record store actor.
///
/// `InventorySystem` is responsible for:
/// - **Lifecycle Management**: Spawning the store actor and waiting for it on shutdown
/// - **Backend Selection**: HTTP against the configured service, or in memory
///
/// # Example
///
/// ```ignore
/// let config = Config::from_env()?;
/// config.validate()?;
/// let system = InventorySystem::http(&config)?;
///
/// let products = system.client.list_all().await?;
///
/// // Gracefully shut down when done
/// system.shutdown().await?;
/// ```
pub struct InventorySystem {
    /// Client for the store actor. Clone it freely.
    pub client: StoreClient,

    handle: tokio::task::JoinHandle<()>,
}

impl InventorySystem {
    /// Spawns a store actor over `backend`. Must be called inside a Tokio runtime.
    pub fn start<B: RecordStore>(backend: B) -> Self {
        let (actor, client) = StoreActor::new(STORE_BUFFER, backend);
        let handle = tokio::spawn(actor.run());
        Self { client, handle }
    }

    /// Talks to the REST service named in `config`.
    pub fn http(config: &Config) -> Result<Self, RemoteError> {
        info!(url = %config.api_base_url, timeout = ?config.request_timeout, "Using HTTP store");
        Ok(Self::start(HttpStore::from_config(config)?))
    }

    /// Keeps `products` in process.
    pub fn in_memory(products: Vec<Product>) -> Self {
        info!(count = products.len(), "Using in-memory store");
        Self::start(MemoryStore::with_products(products))
    }

    /// Gracefully shuts the actor down.
    ///
    /// Dropping the client closes the channel. The actor drains what is already
    /// queued, then exits its loop. Any other clones still alive keep it running,
    /// so drop them first.
    ///
    /// # Returns
    ///
    /// - `Ok(())` if the actor shut down cleanly
    /// - `Err(String)` if the actor task failed or panicked
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down system...");
        drop(self.client);

        if let Err(e) = self.handle.await {
            error!("Store task failed: {:?}", e);
            return Err(format!("Store task failed: {:?}", e));
        }

        info!("System shutdown complete.");
        Ok(())
    }
}
