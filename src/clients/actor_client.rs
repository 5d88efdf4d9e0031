use crate::framework::{ActorEntity, FrameworkError, ResourceClient};
use async_trait::async_trait;

/// Trait for resource-specific clients to inherit the standard read operation.
///
/// Implementors only describe how to reach the generic client and how to turn
/// a [`FrameworkError`] into their own error type.
#[async_trait]
pub trait ActorClient<T: ActorEntity>: Send + Sync {
    /// The resource-specific error type.
    type Error: Send + Sync;

    /// Access the inner generic ResourceClient.
    fn inner(&self) -> &ResourceClient<T>;

    /// Map framework errors to the specific resource error type.
    fn map_error(e: FrameworkError) -> Self::Error;

    /// Fetch a snapshot of the entity.
    #[tracing::instrument(skip(self))]
    async fn get(&self) -> Result<T, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().get().await.map_err(Self::map_error)
    }
}
