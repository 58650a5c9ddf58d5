mod inquiries;
mod memory;

pub use inquiries::Inquiries;
pub use memory::Memory;

use async_trait::async_trait;
use sea_orm::DbErr;

use crate::schemas::{Inquiry, InquiryInput};
use crate::store::StoreError;

/// Where inquiries live once the store accepted them. Create and list only,
/// records are never updated or deleted.
#[async_trait]
pub trait Storage: Send + Sync {
    async fn create_inquiry(&self, input: InquiryInput) -> Result<Inquiry, StoreError>;

    async fn get_inquiries(&self) -> Result<Vec<Inquiry>, StoreError>;

    async fn ping(&self) -> bool;
}

impl From<DbErr> for StoreError {
    fn from(error: DbErr) -> Self {
        StoreError::Other(format!("Database error: {}", error))
    }
}
