//! # Mock Framework
//!
//! Utilities for testing code that talks to actors without spawning the real actors.
//!
//! | | MockClient | Real Actor |
//! |---------|------------|------------|
//! | **State** | None, only scripted responses | Real records |
//! | **Determinism** | Fully deterministic | Subject to scheduler |
//! | **Error Injection** | Easy (`return_err`) | Hard (requires specific state) |
//!
//! Use [`MockClient`] for the fluent expectation API, or [`create_mock_client`] with the
//! `expect_*` helpers when a test needs to inspect the payload of each request.
//!
//! ```rust,ignore
//! let mut inventory = MockClient::<Product>::new();
//! inventory.expect_commit().return_err(UnitError::Framework(FrameworkError::ActorClosed));
//! let client = InventoryClient::new(inventory.client());
//! // ... drive the code under test ...
//! inventory.verify();
//! ```

use crate::framework::client::ResourceClient;
use crate::framework::entity::ActorEntity;
use crate::framework::error::{FrameworkError, UnitError};
use crate::framework::message::{ResourceRequest, Response, UnitOutcome};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::{mpsc, oneshot};

// =============================================================================
// EXPECTATION BUILDER API
// =============================================================================

/// A scripted response for the next request the mock receives.
enum Expectation<T: ActorEntity> {
    Get {
        response: Result<Option<T>, FrameworkError>,
    },
    Create {
        response: Result<(T::Id, T), FrameworkError>,
    },
    Action {
        response: Result<T::ActionResult, FrameworkError>,
    },
    Commit {
        response: UnitOutcome<T>,
    },
}

type Expectations<T> = Arc<Mutex<VecDeque<Expectation<T>>>>;

/// A mock client with expectation tracking for fluent testing.
///
/// Requests are answered strictly in the order the expectations were registered; a
/// request that does not match the next expectation panics the mock task, which surfaces
/// in the test as `ActorDropped`.
pub struct MockClient<T: ActorEntity> {
    client: ResourceClient<T>,
    expectations: Expectations<T>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<T: ActorEntity> Default for MockClient<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ActorEntity> MockClient<T> {
    /// Creates a new mock client with no expectations.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<ResourceRequest<T>>(100);
        let expectations: Expectations<T> = Arc::new(Mutex::new(VecDeque::new()));
        let expectations_clone = expectations.clone();

        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let expectation = expectations_clone.lock().unwrap().pop_front();

                match (request, expectation) {
                    (ResourceRequest::Get { respond_to, .. }, Some(Expectation::Get { response })) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        ResourceRequest::Create { respond_to, .. },
                        Some(Expectation::Create { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        ResourceRequest::Action { respond_to, .. },
                        Some(Expectation::Action { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        ResourceRequest::Commit { respond_to, .. },
                        Some(Expectation::Commit { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    _ => {
                        panic!("Unexpected request or expectation mismatch");
                    }
                }
            }
        });

        Self {
            client: ResourceClient::new(sender),
            expectations,
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

    /// Expects a `create` operation.
    pub fn expect_create(&mut self) -> CreateExpectationBuilder<T> {
        CreateExpectationBuilder {
            expectations: self.expectations.clone(),
        }
    }

    /// Expects an `action` operation.
    pub fn expect_action(&mut self) -> ActionExpectationBuilder<T> {
        ActionExpectationBuilder {
            expectations: self.expectations.clone(),
        }
    }

    /// Expects a unit of work to be committed.
    pub fn expect_commit(&mut self) -> CommitExpectationBuilder<T> {
        CommitExpectationBuilder {
            expectations: self.expectations.clone(),
        }
    }

    /// Verifies that all expectations were met.
    pub fn verify(&self) {
        let remaining = self.expectations.lock().unwrap().len();
        if remaining != 0 {
            panic!("Not all expectations were met. {} remaining", remaining);
        }
    }
}

/// Builder for `get` expectations.
pub struct GetExpectationBuilder<T: ActorEntity> {
    expectations: Expectations<T>,
}

impl<T: ActorEntity> GetExpectationBuilder<T> {
    pub fn return_ok(self, value: Option<T>) {
        self.expectations
            .lock()
            .unwrap()
            .push_back(Expectation::Get { response: Ok(value) });
    }

    pub fn return_err(self, error: FrameworkError) {
        self.expectations
            .lock()
            .unwrap()
            .push_back(Expectation::Get { response: Err(error) });
    }
}

/// Builder for `create` expectations.
pub struct CreateExpectationBuilder<T: ActorEntity> {
    expectations: Expectations<T>,
}

impl<T: ActorEntity> CreateExpectationBuilder<T> {
    /// `record` is what the actor reports as inserted under `id`.
    pub fn return_ok(self, id: T::Id, record: T) {
        self.expectations
            .lock()
            .unwrap()
            .push_back(Expectation::Create {
                response: Ok((id, record)),
            });
    }

    pub fn return_err(self, error: FrameworkError) {
        self.expectations
            .lock()
            .unwrap()
            .push_back(Expectation::Create { response: Err(error) });
    }
}

/// Builder for `action` expectations.
pub struct ActionExpectationBuilder<T: ActorEntity> {
    expectations: Expectations<T>,
}

impl<T: ActorEntity> ActionExpectationBuilder<T> {
    pub fn return_ok(self, result: T::ActionResult) {
        self.expectations
            .lock()
            .unwrap()
            .push_back(Expectation::Action { response: Ok(result) });
    }

    pub fn return_err(self, error: FrameworkError) {
        self.expectations
            .lock()
            .unwrap()
            .push_back(Expectation::Action { response: Err(error) });
    }
}

/// Builder for `commit` expectations.
pub struct CommitExpectationBuilder<T: ActorEntity> {
    expectations: Expectations<T>,
}

impl<T: ActorEntity> CommitExpectationBuilder<T> {
    /// The unit commits; `results` are returned in staging order.
    pub fn return_ok(self, results: Vec<T::ActionResult>) {
        self.expectations
            .lock()
            .unwrap()
            .push_back(Expectation::Commit { response: Ok(results) });
    }

    pub fn return_err(self, error: UnitError<T::Id, T::Error>) {
        self.expectations
            .lock()
            .unwrap()
            .push_back(Expectation::Commit { response: Err(error) });
    }
}

// =============================================================================
// RECEIVER HELPERS
// =============================================================================

/// Creates a client whose requests land on a receiver the test controls.
///
/// The test pulls each request with one of the `expect_*` helpers below, inspects the
/// payload, and answers through the returned responder.
pub fn create_mock_client<T: ActorEntity>(
    buffer_size: usize,
) -> (ResourceClient<T>, mpsc::Receiver<ResourceRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (ResourceClient::new(sender), receiver)
}

/// Helper to verify that the next message is a Get request
pub async fn expect_get<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Id, Response<Option<T>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Get { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is an Action request
pub async fn expect_action<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Id, T::Action, Response<T::ActionResult>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Action {
            id,
            action,
            respond_to,
        }) => Some((id, action, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a Commit request
pub async fn expect_commit<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(Vec<(T::Id, T::Action)>, oneshot::Sender<UnitOutcome<T>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Commit { steps, respond_to }) => Some((steps, respond_to)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{User, UserCreate, UserId};

    #[tokio::test]
    async fn test_mock_client_receiver() {
        let (client, mut receiver) = create_mock_client::<User>(10);

        let get_task = tokio::spawn(async move { client.get(UserId(7)).await });

        let (id, responder) = expect_get(&mut receiver).await.expect("Expected Get request");
        assert_eq!(id, UserId(7));
        responder
            .send(Ok(Some(User::new(UserId(7), "Test", "test@example.com"))))
            .unwrap();

        let fetched = get_task.await.unwrap().unwrap().unwrap();
        assert_eq!(fetched.email, "test@example.com");
    }

    #[tokio::test]
    async fn test_mock_client_with_expectations() {
        let mut mock = MockClient::<User>::new();

        mock.expect_create()
            .return_ok(UserId(1), User::new(UserId(1), "Test", "test@example.com"));
        mock.expect_get()
            .return_ok(Some(User::new(UserId(1), "Test", "test@example.com")));

        let client = mock.client();

        let user = UserCreate {
            name: "Test".to_string(),
            email: "test@example.com".to_string(),
        };
        let id = client.create(user).await.unwrap();
        assert_eq!(id, UserId(1));

        let fetched = client.get(UserId(1)).await.unwrap();
        assert_eq!(fetched.unwrap().email, "test@example.com");

        mock.verify();
    }

    #[tokio::test]
    async fn test_mock_client_injects_transport_failure() {
        let mut mock = MockClient::<User>::new();
        mock.expect_get().return_err(FrameworkError::ActorClosed);

        let result = mock.client().get(UserId(1)).await;
        assert!(matches!(result, Err(FrameworkError::ActorClosed)));
        mock.verify();
    }
}
