//! # Core Actor Framework
//!
//! This module defines the generic building blocks for the machine actor.
//!
//! ## Key Types
//!
//! - [`ActorEntity`]: The trait that the actor's state must implement.
//! - [`ResourceActor`]: The generic actor that owns the entity.
//! - [`ResourceClient`]: The generic client for communicating with the actor.
//! - [`FrameworkError`]: Common errors (e.g., ActorClosed, EntityError).

use async_trait::async_trait;
use std::fmt::Debug;
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info, warn};

// =============================================================================
// 1. THE ABSTRACTION (Trait with Actions)
// =============================================================================

/// Trait that an entity must implement to be owned by a [`ResourceActor`].
///
/// # Architecture Note
/// The actor loop is written once against this contract. The entity only
/// describes its actions and how to apply them; channels, logging and error
/// plumbing live in the framework.
///
/// # Async & Context
/// This trait is `#[async_trait]` so that action handlers may await other
/// actors. The `Context` type is injected into every hook at `run()` time
/// ("Late Binding"). Use `()` when no dependencies are needed.
#[async_trait]
pub trait ActorEntity: Clone + Send + Sync + 'static {
    /// Enum representing the entity's operations (e.g., `Buy`, `Fill`).
    type Action: Send + Sync + Debug;

    /// The result type returned by actions.
    type ActionResult: Send + Sync + Debug;

    /// The runtime context (dependencies) injected into the actor.
    type Context: Send + Sync;

    /// The error type returned by failed actions.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Handle an entity-specific action.
    ///
    /// A failed action must leave the entity untouched.
    async fn handle_action(
        &mut self,
        action: Self::Action,
        ctx: &Self::Context,
    ) -> Result<Self::ActionResult, Self::Error>;
}

// =============================================================================
// 2. THE GENERIC MESSAGES & ERRORS
// =============================================================================

/// Errors that can occur within the actor framework itself.
#[derive(Debug, thiserror::Error)]
pub enum FrameworkError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped response channel")]
    ActorDropped,
    #[error("Entity error: {0}")]
    EntityError(Box<dyn std::error::Error + Send + Sync>),
}

/// Type alias for the one-shot response channel used by actors.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Internal message type sent to the actor.
///
/// - **Get**: Read a snapshot of the entity without touching it.
/// - **Action**: Execute a custom [`ActorEntity::Action`] against the entity.
#[derive(Debug)]
pub enum ResourceRequest<T: ActorEntity> {
    Get {
        respond_to: Response<T>,
    },
    Action {
        action: T::Action,
        respond_to: Response<T::ActionResult>,
    },
}

// =============================================================================
// 3. THE GENERIC ACTOR SERVER
// =============================================================================

/// The generic actor that owns a single entity.
///
/// # Architecture Note
/// This struct is the "Server" half of the actor. It owns the state (`entity`)
/// and the receiver end of the channel.
///
/// **Concurrency Model**:
/// Messages are processed *sequentially* in one task, so the entity needs no
/// `Mutex` or `RwLock`. Exclusive ownership inside the task is the lock.
pub struct ResourceActor<T: ActorEntity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    entity: T,
}

impl<T: ActorEntity> ResourceActor<T> {
    pub fn new(buffer_size: usize, entity: T) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self { receiver, entity };
        let client = ResourceClient::new(sender);
        (actor, client)
    }

    /// Runs the actor's event loop, processing messages until every client is dropped.
    ///
    /// Returns the final entity state so callers can inspect it after shutdown.
    pub async fn run(mut self, context: T::Context) -> T {
        // Extract just the type name (e.g., "Inventory" instead of "coffee_machine::model::inventory::Inventory")
        let entity_type = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(entity_type, "Actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::Get { respond_to } => {
                    debug!(entity_type, "Get");
                    let _ = respond_to.send(Ok(self.entity.clone()));
                }
                ResourceRequest::Action { action, respond_to } => {
                    debug!(entity_type, ?action, "Action");
                    let result = self
                        .entity
                        .handle_action(action, &context)
                        .await
                        .map_err(|e| FrameworkError::EntityError(Box::new(e)));
                    match &result {
                        Ok(_) => info!(entity_type, "Action ok"),
                        Err(e) => warn!(entity_type, error = %e, "Action failed"),
                    }
                    let _ = respond_to.send(result);
                }
            }
        }

        info!(entity_type, "Shutdown");
        self.entity
    }
}

// =============================================================================
// 4. THE GENERIC CLIENT
// =============================================================================

/// A type-safe client for interacting with a `ResourceActor`.
#[derive(Clone)]
pub struct ResourceClient<T: ActorEntity> {
    sender: mpsc::Sender<ResourceRequest<T>>,
}

impl<T: ActorEntity> ResourceClient<T> {
    pub fn new(sender: mpsc::Sender<ResourceRequest<T>>) -> Self {
        Self { sender }
    }

    pub async fn get(&self) -> Result<T, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(ResourceRequest::Get { respond_to })
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    pub async fn perform_action(&self, action: T::Action) -> Result<T::ActionResult, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(ResourceRequest::Action { action, respond_to })
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }
}

// =============================================================================
// 5. EXAMPLE USAGE (Test)
// =============================================================================
