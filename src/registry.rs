//! Generic registry actor.
//!
//! Each collection (products, customers, orders) is owned by exactly one
//! actor task holding its store in memory. Requests arrive over an mpsc
//! channel and are processed to completion one at a time, so access to a
//! collection is strictly serialized without any locking.

use std::collections::HashMap;
use std::fmt::Debug;

use thiserror::Error;
use tokio::sync::{mpsc, oneshot};
use tracing::info;

/// All registry collections are keyed by numeric ids.
pub type EntityId = u64;

/// Trait a domain entity implements to be managed by a [`RegistryActor`].
pub trait Entity: Clone + Send + Sync + 'static {
    type CreateParams: Send + Sync + Debug;

    /// Domain-specific operations beyond create/get/list/delete.
    type Action: Send + Sync + Debug;
    type ActionResult: Send + Sync + Debug;

    /// Collection name used in error messages and log output.
    const KIND: &'static str;

    fn id(&self) -> EntityId;

    /// Construct the full entity from a freshly assigned id and the
    /// creation payload. Creation never fails: the registry accepts its
    /// inputs as-is and performs no range or date validation.
    fn from_create_params(id: EntityId, params: Self::CreateParams) -> Self;

    /// Apply a custom action to the entity, mutating it in place.
    fn apply(&mut self, action: Self::Action) -> Self::ActionResult;
}

/// Errors produced by the registry actor layer itself.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum RegistryError {
    #[error("{kind} not found: {id}")]
    NotFound { kind: &'static str, id: EntityId },
    #[error("registry channel closed")]
    ChannelClosed,
}

pub type Reply<T> = oneshot::Sender<Result<T, RegistryError>>;

#[derive(Debug)]
pub enum RegistryRequest<T: Entity> {
    Create {
        params: T::CreateParams,
        respond_to: Reply<EntityId>,
    },
    Get {
        id: EntityId,
        respond_to: Reply<Option<T>>,
    },
    List {
        respond_to: Reply<Vec<T>>,
    },
    Delete {
        id: EntityId,
        respond_to: Reply<()>,
    },
    Action {
        id: EntityId,
        action: T::Action,
        respond_to: Reply<T::ActionResult>,
    },
}

/// Owns one collection and serializes every mutation through its mailbox.
///
/// The actor stops when the last [`RegistryHandle`] is dropped and the
/// channel closes.
pub struct RegistryActor<T: Entity> {
    receiver: mpsc::Receiver<RegistryRequest<T>>,
    store: HashMap<EntityId, T>,
    next_id: Box<dyn Fn() -> EntityId + Send + Sync>,
}

impl<T: Entity> RegistryActor<T> {
    pub fn new(
        buffer_size: usize,
        next_id: impl Fn() -> EntityId + Send + Sync + 'static,
    ) -> (Self, RegistryHandle<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            store: HashMap::new(),
            next_id: Box::new(next_id),
        };
        let handle = RegistryHandle { sender };
        (actor, handle)
    }

    pub async fn run(mut self) {
        info!(kind = T::KIND, "Registry starting");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                RegistryRequest::Create { params, respond_to } => {
                    let id = (self.next_id)();
                    let item = T::from_create_params(id, params);
                    self.store.insert(id, item);
                    let _ = respond_to.send(Ok(id));
                }
                RegistryRequest::Get { id, respond_to } => {
                    let item = self.store.get(&id).cloned();
                    let _ = respond_to.send(Ok(item));
                }
                RegistryRequest::List { respond_to } => {
                    let mut items: Vec<T> = self.store.values().cloned().collect();
                    items.sort_by_key(|item| item.id());
                    let _ = respond_to.send(Ok(items));
                }
                RegistryRequest::Delete { id, respond_to } => {
                    // Deleting an absent id is a silent no-op, matching
                    // filter-out-by-id semantics.
                    self.store.remove(&id);
                    let _ = respond_to.send(Ok(()));
                }
                RegistryRequest::Action {
                    id,
                    action,
                    respond_to,
                } => {
                    let result = match self.store.get_mut(&id) {
                        Some(item) => Ok(item.apply(action)),
                        None => Err(RegistryError::NotFound { kind: T::KIND, id }),
                    };
                    let _ = respond_to.send(result);
                }
            }
        }

        info!(kind = T::KIND, "Registry stopped");
    }
}

/// Cloneable handle for sending requests to a [`RegistryActor`].
#[derive(Clone)]
pub struct RegistryHandle<T: Entity> {
    sender: mpsc::Sender<RegistryRequest<T>>,
}

impl<T: Entity> RegistryHandle<T> {
    pub fn new(sender: mpsc::Sender<RegistryRequest<T>>) -> Self {
        Self { sender }
    }

    pub async fn create(&self, params: T::CreateParams) -> Result<EntityId, RegistryError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(RegistryRequest::Create { params, respond_to })
            .await
            .map_err(|_| RegistryError::ChannelClosed)?;
        response.await.map_err(|_| RegistryError::ChannelClosed)?
    }

    pub async fn get(&self, id: EntityId) -> Result<Option<T>, RegistryError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(RegistryRequest::Get { id, respond_to })
            .await
            .map_err(|_| RegistryError::ChannelClosed)?;
        response.await.map_err(|_| RegistryError::ChannelClosed)?
    }

    pub async fn list(&self) -> Result<Vec<T>, RegistryError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(RegistryRequest::List { respond_to })
            .await
            .map_err(|_| RegistryError::ChannelClosed)?;
        response.await.map_err(|_| RegistryError::ChannelClosed)?
    }

    pub async fn delete(&self, id: EntityId) -> Result<(), RegistryError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(RegistryRequest::Delete { id, respond_to })
            .await
            .map_err(|_| RegistryError::ChannelClosed)?;
        response.await.map_err(|_| RegistryError::ChannelClosed)?
    }

    pub async fn action(
        &self,
        id: EntityId,
        action: T::Action,
    ) -> Result<T::ActionResult, RegistryError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(RegistryRequest::Action {
                id,
                action,
                respond_to,
            })
            .await
            .map_err(|_| RegistryError::ChannelClosed)?;
        response.await.map_err(|_| RegistryError::ChannelClosed)?
    }
}
