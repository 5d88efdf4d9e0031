use crate::clients::MachineClient;
use crate::config::MachineConfig;
use crate::model::Inventory;
use tracing::{error, info};

/// The runtime orchestrator for the coffee machine.
///
/// `CoffeeSystem` is responsible for:
/// - **Lifecycle Management**: Starting and stopping the machine actor
/// - **Access**: Handing out the [`MachineClient`] the dispatcher talks through
///
/// # Example
///
/// ```ignore
/// let system = CoffeeSystem::new(&MachineConfig::default());
///
/// let state = system.machine_client.buy(CoffeeType::Espresso).await?;
///
/// // Gracefully shut down when done
/// let last = system.shutdown().await?;
/// ```
pub struct CoffeeSystem {
    /// Client for interacting with the machine actor
    pub machine_client: MachineClient,

    /// Task handle of the running actor (used for graceful shutdown)
    handle: tokio::task::JoinHandle<Inventory>,
}

impl CoffeeSystem {
    /// Creates the machine actor from `config` and spawns it in its own Tokio task.
    pub fn new(config: &MachineConfig) -> Self {
        let (machine_actor, machine_client) = crate::machine_actor::new(config);

        // The machine has no dependencies (Context = ())
        let handle = tokio::spawn(machine_actor.run(()));

        Self {
            machine_client,
            handle,
        }
    }

    /// Gracefully shuts down the machine.
    ///
    /// Dropping the client closes the channel; the actor drains its mailbox, exits
    /// its loop and hands back the final inventory.
    ///
    /// # Returns
    ///
    /// - `Ok(Inventory)` with the final state if the actor shut down cleanly
    /// - `Err(String)` if the actor task failed or panicked
    pub async fn shutdown(self) -> Result<Inventory, String> {
        info!("Shutting down machine...");

        // Every clone of the client must be gone before the actor can stop.
        drop(self.machine_client);

        match self.handle.await {
            Ok(last) => {
                info!(money = last.money, cups = last.cups, "Machine shutdown complete.");
                Ok(last)
            }
            Err(e) => {
                error!("Actor task failed: {:?}", e);
                Err(format!("Actor task failed: {:?}", e))
            }
        }
    }
}
