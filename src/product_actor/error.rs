use thiserror::Error;

use crate::domain::ProductId;
use crate::registry::RegistryError;

/// Errors that can occur during product operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ProductError {
    #[error("product not found: {0}")]
    NotFound(ProductId),
    #[error("registry error: {0}")]
    Registry(String),
}

impl ProductError {
    pub(crate) fn from_registry(err: RegistryError) -> Self {
        match err {
            RegistryError::NotFound { id, .. } => Self::NotFound(id),
            other => Self::Registry(other.to_string()),
        }
    }
}
