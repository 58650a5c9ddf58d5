use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;

use crate::entities::Storage;
use crate::schemas::{FieldErrors, Inquiry, InquiryInput};

mod http;
pub use http::HttpStore;

/// How a record store can fail from the point of view of the submission flow.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// The store endpoint does not exist at all.
    #[error("Inquiry store not found")]
    NotFound,

    #[error("{message}")]
    Invalid {
        message: String,
        field: Option<String>,
    },

    /// The request never got an answer.
    #[error("Inquiry store unreachable: {0}")]
    Unreachable(String),

    #[error("{0}")]
    Other(String),
}

impl From<FieldErrors> for StoreError {
    fn from(errors: FieldErrors) -> Self {
        match errors.into_iter().next() {
            Some(error) => StoreError::Invalid {
                message: error.message,
                field: Some(error.field.to_string()),
            },
            None => StoreError::Invalid {
                message: "Invalid inquiry".to_string(),
                field: None,
            },
        }
    }
}

#[async_trait]
pub trait RecordStore: Send + Sync {
    async fn create(&self, input: &InquiryInput) -> Result<Inquiry, StoreError>;
}

/// A store that is not there. Every call answers `NotFound`.
#[derive(Default)]
pub struct Absent;

#[async_trait]
impl RecordStore for Absent {
    async fn create(&self, _: &InquiryInput) -> Result<Inquiry, StoreError> {
        Err(StoreError::NotFound)
    }
}

/// Record store backed by storage living in this process.
pub struct LocalStore {
    storage: Arc<dyn Storage>,
}

impl LocalStore {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self { storage }
    }
}

#[async_trait]
impl RecordStore for LocalStore {
    async fn create(&self, input: &InquiryInput) -> Result<Inquiry, StoreError> {
        self.storage.create_inquiry(input.clone()).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::Memory;
    use crate::schemas::{Field, FieldError};

    #[test]
    fn test_first_field_error_becomes_rejection() {
        let error = StoreError::from(vec![
            FieldError {
                field: Field::Phone,
                message: "Please enter a valid phone number".to_string(),
            },
            FieldError {
                field: Field::Message,
                message: "Message must be at least 10 characters".to_string(),
            },
        ]);

        assert_eq!(
            error,
            StoreError::Invalid {
                message: "Please enter a valid phone number".to_string(),
                field: Some("phone".to_string()),
            }
        );
        assert_eq!(error.to_string(), "Please enter a valid phone number");
    }

    #[tokio::test]
    async fn test_absent_store_is_not_found() {
        let result = Absent.create(&InquiryInput::default()).await;
        assert_eq!(result, Err(StoreError::NotFound));
    }

    #[tokio::test]
    async fn test_local_store_delegates_to_storage() {
        let store = LocalStore::new(Arc::new(Memory::new()));
        let input = InquiryInput {
            name: "Jo".to_string(),
            phone: "12345".to_string(),
            service: "seo".to_string(),
            message: "Need better rankings".to_string(),
        };

        let inquiry = store.create(&input).await.unwrap();
        assert_eq!(inquiry.id, 1);
        assert_eq!(inquiry.name, input.name);
        assert_eq!(inquiry.service, input.service);
    }
}
