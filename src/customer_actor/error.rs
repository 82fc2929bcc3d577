use thiserror::Error;

use crate::domain::CustomerId;
use crate::registry::RegistryError;

/// Errors that can occur during customer operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CustomerError {
    #[error("customer not found: {0}")]
    NotFound(CustomerId),
    #[error("registry error: {0}")]
    Registry(String),
}

impl CustomerError {
    pub(crate) fn from_registry(err: RegistryError) -> Self {
        match err {
            RegistryError::NotFound { id, .. } => Self::NotFound(id),
            other => Self::Registry(other.to_string()),
        }
    }
}
