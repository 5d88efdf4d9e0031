//! # Mock Framework & Testing Guide
//!
//! The `MockClient<T>` type hands out the same [`ResourceClient<T>`] as a real actor,
//! but answers every request from a queue of scripted expectations instead of a live
//! entity. Use it to test code that sits *around* the client (such as the command
//! dispatcher) without spawning the machine actor.
//!
//! ## When to use Mocks vs Real Actors
//!
//! | Feature | MockClient | Real Actor |
//! |---------|------------|------------|
//! | **State** | No real state (expectations) | Real state management |
//! | **Use Case** | Testing logic *around* the client | Testing the entity itself |
//! | **Error Injection** | Easy (`return_err`) | Needs a specific stock level |
//!
//! ## Example
//!
//! ```ignore
//! let mut mock = MockClient::<Inventory>::new();
//! mock.expect_action().return_ok(MachineActionResult::Take(554));
//!
//! let client = MachineClient::new(mock.client());
//! assert_eq!(client.take().await.unwrap(), 554);
//! mock.verify();
//! ```

use crate::framework::{ActorEntity, FrameworkError, ResourceClient, ResourceRequest};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::mpsc;

// =============================================================================
// EXPECTATION BUILDER API
// =============================================================================

/// An expected request and the response the mock will send back.
enum Expectation<T: ActorEntity> {
    Get {
        response: Result<T, FrameworkError>,
    },
    Action {
        response: Result<T::ActionResult, FrameworkError>,
    },
}

/// A mock client with expectation tracking for fluent testing.
///
/// Every received request is recorded, so tests can also assert on *which*
/// actions were sent (see [`MockClient::received_actions`]).
pub struct MockClient<T: ActorEntity> {
    client: ResourceClient<T>,
    expectations: Arc<Mutex<VecDeque<Expectation<T>>>>,
    received: Arc<Mutex<Vec<String>>>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<T: ActorEntity> MockClient<T> {
    /// Creates a new mock client with no expectations.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<ResourceRequest<T>>(100);
        let expectations = Arc::new(Mutex::new(VecDeque::new()));
        let received = Arc::new(Mutex::new(Vec::new()));
        let expectations_clone = expectations.clone();
        let received_clone = received.clone();

        // Spawn background task to handle requests
        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let expectation = expectations_clone
                    .lock()
                    .expect("expectation queue poisoned")
                    .pop_front();

                match (request, expectation) {
                    (ResourceRequest::Get { respond_to }, Some(Expectation::Get { response })) => {
                        received_clone.lock().expect("request log poisoned").push("Get".to_string());
                        let _ = respond_to.send(response);
                    }
                    (
                        ResourceRequest::Action { action, respond_to },
                        Some(Expectation::Action { response }),
                    ) => {
                        received_clone
                            .lock()
                            .expect("request log poisoned")
                            .push(format!("{:?}", action));
                        let _ = respond_to.send(response);
                    }
                    (request, _) => {
                        panic!("Unexpected request or expectation mismatch: {}", describe(&request));
                    }
                }
            }
        });

        Self {
            client: ResourceClient::new(sender),
            expectations,
            received,
            _handle: handle,
        }
    }

    /// Returns the client for use in tests.
    pub fn client(&self) -> ResourceClient<T> {
        self.client.clone()
    }

    /// Expects a `get` operation.
    pub fn expect_get(&mut self) -> GetExpectationBuilder<T> {
        GetExpectationBuilder {
            expectations: self.expectations.clone(),
        }
    }

    /// Expects an `action` operation.
    pub fn expect_action(&mut self) -> ActionExpectationBuilder<T> {
        ActionExpectationBuilder {
            expectations: self.expectations.clone(),
        }
    }

    /// Debug renderings of every action received so far, in order.
    pub fn received_actions(&self) -> Vec<String> {
        self.received
            .lock()
            .expect("request log poisoned")
            .iter()
            .filter(|r| r.as_str() != "Get")
            .cloned()
            .collect()
    }

    /// Verifies that all expectations were met.
    pub fn verify(&self) {
        let exps = self.expectations.lock().expect("expectation queue poisoned");
        if !exps.is_empty() {
            panic!("Not all expectations were met. {} remaining", exps.len());
        }
    }
}

impl<T: ActorEntity> Default for MockClient<T> {
    fn default() -> Self {
        Self::new()
    }
}

fn describe<T: ActorEntity>(request: &ResourceRequest<T>) -> String {
    match request {
        ResourceRequest::Get { .. } => "Get".to_string(),
        ResourceRequest::Action { action, .. } => format!("Action({:?})", action),
    }
}

/// Builder for `get` expectations.
pub struct GetExpectationBuilder<T: ActorEntity> {
    expectations: Arc<Mutex<VecDeque<Expectation<T>>>>,
}

impl<T: ActorEntity> GetExpectationBuilder<T> {
    /// Sets the expectation to return a successful result.
    pub fn return_ok(self, value: T) {
        let mut exps = self.expectations.lock().expect("expectation queue poisoned");
        exps.push_back(Expectation::Get { response: Ok(value) });
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: FrameworkError) {
        let mut exps = self.expectations.lock().expect("expectation queue poisoned");
        exps.push_back(Expectation::Get { response: Err(error) });
    }
}

/// Builder for `action` expectations.
pub struct ActionExpectationBuilder<T: ActorEntity> {
    expectations: Arc<Mutex<VecDeque<Expectation<T>>>>,
}

impl<T: ActorEntity> ActionExpectationBuilder<T> {
    /// Sets the expectation to return a successful result.
    pub fn return_ok(self, result: T::ActionResult) {
        let mut exps = self.expectations.lock().expect("expectation queue poisoned");
        exps.push_back(Expectation::Action { response: Ok(result) });
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: FrameworkError) {
        let mut exps = self.expectations.lock().expect("expectation queue poisoned");
        exps.push_back(Expectation::Action { response: Err(error) });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::machine_actor::{MachineAction, MachineActionResult, MachineError};
    use crate::model::Inventory;

    #[tokio::test]
    async fn test_mock_client_with_expectations() {
        let mut mock = MockClient::<Inventory>::new();

        mock.expect_get().return_ok(Inventory::default());
        mock.expect_action().return_ok(MachineActionResult::Take(550));

        let client = mock.client();

        let snapshot = client.get().await.unwrap();
        assert_eq!(snapshot.money, 550);

        let result = client.perform_action(MachineAction::Take).await.unwrap();
        assert!(matches!(result, MachineActionResult::Take(550)));

        assert_eq!(mock.received_actions(), vec!["Take".to_string()]);
        mock.verify();
    }

    #[tokio::test]
    async fn test_mock_client_error_injection() {
        let mut mock = MockClient::<Inventory>::new();
        mock.expect_action()
            .return_err(FrameworkError::EntityError(Box::new(MachineError::Overflow)));

        let err = mock.client().perform_action(MachineAction::Take).await.unwrap_err();
        assert!(matches!(err, FrameworkError::EntityError(_)));
        mock.verify();
    }
}
