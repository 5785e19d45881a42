//! # Record Store Actor
//!
//! This module defines the building blocks of the record store client.
//!
//! ## Key Types
//!
//! - [`RecordStore`]: The backend contract (REST service, in-memory store, ...).
//! - [`StoreActor`]: Owns one backend and executes requests one at a time.
//! - [`StoreClient`]: The cloneable handle the rest of the application talks to.
//! - [`StoreRequest`]: The messages passed between the two.

use async_trait::async_trait;
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info, instrument, warn};

use crate::error::RemoteError;
use crate::model::{Product, ProductFields, ProductId};

// =============================================================================
// 1. THE ABSTRACTION
// =============================================================================

/// Backend contract for the five product operations.
///
/// Methods take `&mut self`: a backend is owned by exactly one [`StoreActor`], so
/// implementations can keep plain mutable state without locks.
///
/// Failures are returned as-is. Nothing here retries.
#[async_trait]
pub trait RecordStore: Send + 'static {
    async fn list_all(&mut self) -> Result<Vec<Product>, RemoteError>;

    async fn get_one(&mut self, id: &ProductId) -> Result<Product, RemoteError>;

    async fn create(&mut self, fields: ProductFields) -> Result<Product, RemoteError>;

    async fn update(&mut self, id: &ProductId, fields: ProductFields) -> Result<Product, RemoteError>;

    async fn remove(&mut self, id: &ProductId) -> Result<(), RemoteError>;
}

// =============================================================================
// 2. THE MESSAGES
// =============================================================================

/// Type alias for the one-shot response channel used by the actor.
pub type Response<T> = oneshot::Sender<Result<T, RemoteError>>;

/// Message sent to the [`StoreActor`], one variant per store operation.
#[derive(Debug)]
pub enum StoreRequest {
    List {
        respond_to: Response<Vec<Product>>,
    },
    Get {
        id: ProductId,
        respond_to: Response<Product>,
    },
    Create {
        fields: ProductFields,
        respond_to: Response<Product>,
    },
    Update {
        id: ProductId,
        fields: ProductFields,
        respond_to: Response<Product>,
    },
    Delete {
        id: ProductId,
        respond_to: Response<()>,
    },
}

// =============================================================================
// 3. THE ACTOR
// =============================================================================

/// Owns a [`RecordStore`] backend and the receiving end of the request channel.
///
/// **Concurrency Model**:
/// Requests are processed sequentially in [`StoreActor::run`]. However many
/// [`StoreClient`] clones exist, at most one backend call is in flight at a time,
/// and requests are served in the order they were sent.
pub struct StoreActor<B: RecordStore> {
    receiver: mpsc::Receiver<StoreRequest>,
    backend: B,
}

impl<B: RecordStore> StoreActor<B> {
    /// Creates a new `StoreActor` and its associated `StoreClient`.
    ///
    /// # Arguments
    ///
    /// * `buffer_size` - Capacity of the request channel. When it is full, client
    ///   calls wait for space.
    /// * `backend` - The store the actor will execute requests against.
    pub fn new(buffer_size: usize, backend: B) -> (Self, StoreClient) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self { receiver, backend };
        (actor, StoreClient::new(sender))
    }

    /// Runs the actor's event loop until every client has been dropped.
    pub async fn run(mut self) {
        // Extract just the type name (e.g., "HttpStore" instead of the full path)
        let backend = std::any::type_name::<B>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(backend, "Store started");
        let mut served: u64 = 0;

        while let Some(msg) = self.receiver.recv().await {
            served += 1;
            match msg {
                StoreRequest::List { respond_to } => {
                    debug!(backend, "List");
                    let result = self.backend.list_all().await;
                    match &result {
                        Ok(products) => info!(backend, count = products.len(), "Listed"),
                        Err(e) => warn!(backend, error = %e, "List failed"),
                    }
                    let _ = respond_to.send(result);
                }
                StoreRequest::Get { id, respond_to } => {
                    let result = self.backend.get_one(&id).await;
                    debug!(backend, %id, found = result.is_ok(), "Get");
                    if let Err(e) = &result {
                        warn!(backend, %id, error = %e, "Get failed");
                    }
                    let _ = respond_to.send(result);
                }
                StoreRequest::Create { fields, respond_to } => {
                    debug!(backend, ?fields, "Create");
                    let result = self.backend.create(fields).await;
                    match &result {
                        Ok(product) => info!(backend, id = %product.id, "Created"),
                        Err(e) => warn!(backend, error = %e, "Create failed"),
                    }
                    let _ = respond_to.send(result);
                }
                StoreRequest::Update {
                    id,
                    fields,
                    respond_to,
                } => {
                    debug!(backend, %id, ?fields, "Update");
                    let result = self.backend.update(&id, fields).await;
                    match &result {
                        Ok(_) => info!(backend, %id, "Updated"),
                        Err(e) => warn!(backend, %id, error = %e, "Update failed"),
                    }
                    let _ = respond_to.send(result);
                }
                StoreRequest::Delete { id, respond_to } => {
                    debug!(backend, %id, "Delete");
                    let result = self.backend.remove(&id).await;
                    match &result {
                        Ok(()) => info!(backend, %id, "Deleted"),
                        Err(e) => warn!(backend, %id, error = %e, "Delete failed"),
                    }
                    let _ = respond_to.send(result);
                }
            }
        }

        info!(backend, served, "Shutdown");
    }
}

// =============================================================================
// 4. THE CLIENT
// =============================================================================

/// A cloneable handle for sending requests to a [`StoreActor`].
///
/// Every method is single-shot: one request, one response, no retries. A closed
/// actor surfaces as [`RemoteError::StoreClosed`] or [`RemoteError::StoreDropped`].
#[derive(Clone)]
pub struct StoreClient {
    sender: mpsc::Sender<StoreRequest>,
}

impl StoreClient {
    pub fn new(sender: mpsc::Sender<StoreRequest>) -> Self {
        Self { sender }
    }

    async fn request<T>(
        &self,
        build: impl FnOnce(Response<T>) -> StoreRequest,
    ) -> Result<T, RemoteError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(build(respond_to))
            .await
            .map_err(|_| RemoteError::StoreClosed)?;
        response.await.map_err(|_| RemoteError::StoreDropped)?
    }

    #[instrument(skip(self))]
    pub async fn list_all(&self) -> Result<Vec<Product>, RemoteError> {
        debug!("Sending request");
        self.request(|respond_to| StoreRequest::List { respond_to })
            .await
    }

    #[instrument(skip(self))]
    pub async fn get_one(&self, id: ProductId) -> Result<Product, RemoteError> {
        debug!("Sending request");
        self.request(|respond_to| StoreRequest::Get { id, respond_to })
            .await
    }

    #[instrument(skip(self, fields))]
    pub async fn create(&self, fields: ProductFields) -> Result<Product, RemoteError> {
        debug!(?fields, "Sending request");
        self.request(|respond_to| StoreRequest::Create { fields, respond_to })
            .await
    }

    #[instrument(skip(self, fields))]
    pub async fn update(
        &self,
        id: ProductId,
        fields: ProductFields,
    ) -> Result<Product, RemoteError> {
        debug!(?fields, "Sending request");
        self.request(|respond_to| StoreRequest::Update {
            id,
            fields,
            respond_to,
        })
        .await
    }

    #[instrument(skip(self))]
    pub async fn remove(&self, id: ProductId) -> Result<(), RemoteError> {
        debug!("Sending request");
        self.request(|respond_to| StoreRequest::Delete { id, respond_to })
            .await
    }
}
