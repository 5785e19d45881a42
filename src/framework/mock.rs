//! # Mock Store
//!
//! Utilities for testing screens in isolation.
//!
//! [`MockStore`] hands out a real [`StoreClient`] whose requests are answered from
//! a queue of scripted expectations instead of a backend. Each request is logged,
//! so tests can also assert that a call was *not* made.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use tokio::sync::mpsc;

use crate::error::RemoteError;
use crate::framework::{StoreClient, StoreRequest};
use crate::model::{Product, ProductFields, ProductId};

// =============================================================================
// EXPECTATION BUILDER API
// =============================================================================

/// A request as the mock received it.
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    List,
    Get(ProductId),
    Create(ProductFields),
    Update(ProductId, ProductFields),
    Delete(ProductId),
}

enum Expectation {
    List {
        response: Result<Vec<Product>, RemoteError>,
    },
    Get {
        id: ProductId,
        response: Result<Product, RemoteError>,
    },
    Create {
        response: Result<Product, RemoteError>,
    },
    Update {
        id: ProductId,
        response: Result<Product, RemoteError>,
    },
    Delete {
        id: ProductId,
        response: Result<(), RemoteError>,
    },
}

#[derive(Default)]
struct Script {
    expectations: VecDeque<Expectation>,
    calls: Vec<Call>,
    mismatches: Vec<String>,
}

type Shared = Arc<Mutex<Script>>;

/// A scripted record store with expectation tracking.
///
/// # Example
/// ```ignore
/// let mock = MockStore::new();
/// mock.expect_list().return_ok(vec![product]);
/// mock.expect_delete("p1").return_err(RemoteError::Transport("offline".into()));
///
/// let client = mock.client();
/// // Drive a screen with the client...
/// mock.verify(); // Ensures all expectations were met
/// ```
///
/// Expectations are consumed in order. A request that does not match the next
/// expectation is answered with [`RemoteError::Transport`] and reported by
/// [`MockStore::verify`].
pub struct MockStore {
    client: StoreClient,
    script: Shared,
    _handle: tokio::task::JoinHandle<()>,
}

impl MockStore {
    /// Creates a new mock store with no expectations. Must be called inside a
    /// Tokio runtime.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<StoreRequest>(100);
        let script: Shared = Arc::default();
        let script_clone = script.clone();

        // Spawn background task to handle requests
        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let mut script = script_clone.lock().unwrap();
                let expectation = script.expectations.pop_front();
                script.answer(request, expectation);
            }
        });

        Self {
            client: StoreClient::new(sender),
            script,
            _handle: handle,
        }
    }

    /// Returns the client for use in tests.
    pub fn client(&self) -> StoreClient {
        self.client.clone()
    }

    pub fn expect_list(&self) -> ExpectationBuilder<Vec<Product>> {
        self.builder(|response| Expectation::List { response })
    }

    pub fn expect_get(&self, id: impl Into<ProductId>) -> ExpectationBuilder<Product> {
        let id = id.into();
        self.builder(move |response| Expectation::Get { id, response })
    }

    pub fn expect_create(&self) -> ExpectationBuilder<Product> {
        self.builder(|response| Expectation::Create { response })
    }

    pub fn expect_update(&self, id: impl Into<ProductId>) -> ExpectationBuilder<Product> {
        let id = id.into();
        self.builder(move |response| Expectation::Update { id, response })
    }

    pub fn expect_delete(&self, id: impl Into<ProductId>) -> ExpectationBuilder<()> {
        let id = id.into();
        self.builder(move |response| Expectation::Delete { id, response })
    }

    /// Every request received so far, in arrival order.
    pub fn calls(&self) -> Vec<Call> {
        self.script.lock().unwrap().calls.clone()
    }

    /// Verifies that all expectations were met and no request was unexpected.
    pub fn verify(&self) {
        let script = self.script.lock().unwrap();
        if !script.mismatches.is_empty() {
            panic!("Unexpected requests: {:?}", script.mismatches);
        }
        if !script.expectations.is_empty() {
            panic!(
                "Not all expectations were met. {} remaining",
                script.expectations.len()
            );
        }
    }

    fn builder<T>(
        &self,
        make: impl FnOnce(Result<T, RemoteError>) -> Expectation + 'static,
    ) -> ExpectationBuilder<T> {
        ExpectationBuilder {
            make: Box::new(make),
            script: self.script.clone(),
        }
    }
}

impl Default for MockStore {
    fn default() -> Self {
        Self::new()
    }
}

impl Script {
    fn answer(&mut self, request: StoreRequest, expectation: Option<Expectation>) {
        match (request, expectation) {
            (StoreRequest::List { respond_to }, Some(Expectation::List { response })) => {
                self.calls.push(Call::List);
                let _ = respond_to.send(response);
            }
            (StoreRequest::Get { id, respond_to }, Some(Expectation::Get { id: want, response })) => {
                self.check_id(&id, &want);
                self.calls.push(Call::Get(id));
                let _ = respond_to.send(response);
            }
            (StoreRequest::Create { fields, respond_to }, Some(Expectation::Create { response })) => {
                self.calls.push(Call::Create(fields));
                let _ = respond_to.send(response);
            }
            (
                StoreRequest::Update {
                    id,
                    fields,
                    respond_to,
                },
                Some(Expectation::Update { id: want, response }),
            ) => {
                self.check_id(&id, &want);
                self.calls.push(Call::Update(id, fields));
                let _ = respond_to.send(response);
            }
            (StoreRequest::Delete { id, respond_to }, Some(Expectation::Delete { id: want, response })) => {
                self.check_id(&id, &want);
                self.calls.push(Call::Delete(id));
                let _ = respond_to.send(response);
            }
            (request, _) => self.reject(request),
        }
    }

    fn check_id(&mut self, got: &ProductId, want: &ProductId) {
        if got != want {
            self.mismatches.push(format!("expected id {want}, got {got}"));
        }
    }

    fn reject(&mut self, request: StoreRequest) {
        let unexpected = || RemoteError::Transport("unexpected request".to_string());
        let call = match request {
            StoreRequest::List { respond_to } => {
                let _ = respond_to.send(Err(unexpected()));
                Call::List
            }
            StoreRequest::Get { id, respond_to } => {
                let _ = respond_to.send(Err(unexpected()));
                Call::Get(id)
            }
            StoreRequest::Create { fields, respond_to } => {
                let _ = respond_to.send(Err(unexpected()));
                Call::Create(fields)
            }
            StoreRequest::Update {
                id,
                fields,
                respond_to,
            } => {
                let _ = respond_to.send(Err(unexpected()));
                Call::Update(id, fields)
            }
            StoreRequest::Delete { id, respond_to } => {
                let _ = respond_to.send(Err(unexpected()));
                Call::Delete(id)
            }
        };
        self.mismatches.push(format!("{call:?}"));
        self.calls.push(call);
    }
}

/// Builder for a single expectation. Finish with `return_ok` or `return_err`.
pub struct ExpectationBuilder<T> {
    make: Box<dyn FnOnce(Result<T, RemoteError>) -> Expectation>,
    script: Shared,
}

impl<T> ExpectationBuilder<T> {
    /// Sets the expectation to return a successful result.
    pub fn return_ok(self, value: T) {
        self.push(Ok(value));
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: RemoteError) {
        self.push(Err(error));
    }

    fn push(self, response: Result<T, RemoteError>) {
        let expectation = (self.make)(response);
        self.script.lock().unwrap().expectations.push_back(expectation);
    }
}
