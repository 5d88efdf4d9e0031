use crate::clients::actor_client::ActorClient;
use crate::framework::{FrameworkError, ResourceClient};
use crate::machine_actor::{MachineAction, MachineActionResult, MachineError};
use crate::model::{CoffeeType, Inventory, Supplies};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the machine actor.
#[derive(Clone)]
pub struct MachineClient {
    inner: ResourceClient<Inventory>,
}

impl MachineClient {
    pub fn new(inner: ResourceClient<Inventory>) -> Self {
        Self { inner }
    }

    /// Brews one drink and returns the resulting state.
    #[instrument(skip(self))]
    pub async fn buy(&self, coffee: CoffeeType) -> Result<Inventory, MachineError> {
        debug!("Sending request");
        match self.send(MachineAction::Buy(coffee)).await? {
            MachineActionResult::Buy(state) => Ok(state),
            other => Err(unexpected(other)),
        }
    }

    /// Restocks the machine and returns the resulting state.
    #[instrument(skip(self))]
    pub async fn fill(&self, supplies: Supplies) -> Result<Inventory, MachineError> {
        debug!("Sending request");
        match self.send(MachineAction::Fill(supplies)).await? {
            MachineActionResult::Fill(state) => Ok(state),
            other => Err(unexpected(other)),
        }
    }

    /// Empties the till and returns what was in it.
    #[instrument(skip(self))]
    pub async fn take(&self) -> Result<u32, MachineError> {
        debug!("Sending request");
        match self.send(MachineAction::Take).await? {
            MachineActionResult::Take(money) => Ok(money),
            other => Err(unexpected(other)),
        }
    }

    /// Reads the current state without touching it.
    pub async fn snapshot(&self) -> Result<Inventory, MachineError> {
        self.get().await
    }

    async fn send(&self, action: MachineAction) -> Result<MachineActionResult, MachineError> {
        self.inner.perform_action(action).await.map_err(Self::map_error)
    }
}

fn unexpected(result: MachineActionResult) -> MachineError {
    MachineError::UnexpectedReply(format!("{:?}", result))
}

#[async_trait]
impl ActorClient<Inventory> for MachineClient {
    type Error = MachineError;

    fn inner(&self) -> &ResourceClient<Inventory> {
        &self.inner
    }

    /// Recovers the typed [`MachineError`] from an entity failure; everything else
    /// is a communication problem.
    fn map_error(e: FrameworkError) -> Self::Error {
        match e {
            FrameworkError::EntityError(inner) => match inner.downcast::<MachineError>() {
                Ok(machine_error) => *machine_error,
                Err(other) => MachineError::ActorCommunicationError(other.to_string()),
            },
            other => MachineError::ActorCommunicationError(other.to_string()),
        }
    }
}
