use thiserror::Error;

use crate::domain::{CustomerId, OrderId, ProductId};
use crate::registry::RegistryError;

/// Errors that can occur during order operations.
///
/// Dangling references discovered while placing an order are surfaced
/// per reference kind instead of proceeding with an absent entity.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderError {
    #[error("order not found: {0}")]
    NotFound(OrderId),
    #[error("order references unknown customer: {0}")]
    CustomerNotFound(CustomerId),
    #[error("order references unknown product: {0}")]
    ProductNotFound(ProductId),
    #[error("registry error: {0}")]
    Registry(String),
}

impl OrderError {
    pub(crate) fn from_registry(err: RegistryError) -> Self {
        match err {
            RegistryError::NotFound { id, .. } => Self::NotFound(id),
            other => Self::Registry(other.to_string()),
        }
    }
}
