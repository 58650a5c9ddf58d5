mod records;
use records::Entity as Records;

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{DatabaseConnection, EntityTrait, QueryOrder, Set};

use super::Storage;
use crate::schemas::{Inquiry, InquiryInput};
use crate::store::StoreError;

pub struct Inquiries {
    db: Arc<DatabaseConnection>,
}

impl Inquiries {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

impl From<records::Model> for Inquiry {
    fn from(model: records::Model) -> Self {
        Self {
            id: i64::from(model.id),
            name: model.name,
            phone: model.phone,
            service: model.service,
            message: model.message,
            created_at: model.created_at,
        }
    }
}

#[async_trait]
impl Storage for Inquiries {
    async fn create_inquiry(&self, input: InquiryInput) -> Result<Inquiry, StoreError> {
        input.validate()?;

        let record = records::ActiveModel {
            name: Set(input.name),
            phone: Set(input.phone),
            service: Set(input.service),
            message: Set(input.message),
            created_at: Set(Utc::now()),
            ..Default::default()
        };

        Ok(Records::insert(record)
            .exec_with_returning(&*self.db)
            .await?
            .into())
    }

    async fn get_inquiries(&self) -> Result<Vec<Inquiry>, StoreError> {
        Ok(Records::find()
            .order_by_asc(records::Column::Id)
            .all(&*self.db)
            .await?
            .into_iter()
            .map(Inquiry::from)
            .collect::<Vec<_>>())
    }

    async fn ping(&self) -> bool {
        self.db.ping().await.is_ok()
    }
}
