use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;
use log::error;

use super::Storage;
use crate::schemas::{Inquiry, InquiryInput};
use crate::store::StoreError;

/// In-process storage used when no database is configured. Ids start at 1.
#[derive(Default)]
pub struct Memory {
    records: Mutex<Vec<Inquiry>>,
}

impl Memory {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Storage for Memory {
    async fn create_inquiry(&self, input: InquiryInput) -> Result<Inquiry, StoreError> {
        input.validate()?;

        let mut records = self.records.lock().map_err(|_| {
            error!("Failed to lock memory storage");
            StoreError::Other("Storage is unavailable".to_string())
        })?;

        let inquiry = Inquiry {
            id: records.last().map_or(1, |last| last.id + 1),
            name: input.name,
            phone: input.phone,
            service: input.service,
            message: input.message,
            created_at: Utc::now(),
        };

        records.push(inquiry.clone());
        Ok(inquiry)
    }

    async fn get_inquiries(&self) -> Result<Vec<Inquiry>, StoreError> {
        match self.records.lock() {
            Ok(records) => Ok(records.clone()),
            Err(_) => Err(StoreError::Other("Storage is unavailable".to_string())),
        }
    }

    async fn ping(&self) -> bool {
        self.records.lock().is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(name: &str) -> InquiryInput {
        InquiryInput {
            name: name.to_string(),
            phone: "+91 9999999999".to_string(),
            service: "pentest".to_string(),
            message: "Please test our login flow".to_string(),
        }
    }

    #[tokio::test]
    async fn test_ids_increase_monotonically() {
        let storage = Memory::new();

        for (expected, name) in ["Ann", "Bob", "Cid"].iter().enumerate() {
            let inquiry = storage.create_inquiry(input(name)).await.unwrap();
            assert_eq!(inquiry.id, expected as i64 + 1);
        }

        let all = storage.get_inquiries().await.unwrap();
        assert_eq!(
            all.iter().map(|inquiry| inquiry.name.as_str()).collect::<Vec<_>>(),
            vec!["Ann", "Bob", "Cid"]
        );
        assert!(all.windows(2).all(|pair| pair[0].created_at <= pair[1].created_at));
    }

    #[tokio::test]
    async fn test_invalid_input_is_not_stored() {
        let storage = Memory::new();
        let result = storage.create_inquiry(input("A")).await;

        assert_eq!(
            result,
            Err(StoreError::Invalid {
                message: "Name must be at least 2 characters".to_string(),
                field: Some("name".to_string()),
            })
        );
        assert!(storage.get_inquiries().await.unwrap().is_empty());
        assert!(storage.ping().await);
    }
}
