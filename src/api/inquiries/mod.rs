mod v1;
pub use v1::*;

use actix_web::HttpResponse;
use log::error;

use crate::schemas::Rejection;
use crate::store::StoreError;

/// Map a storage failure onto the store's wire contract.
fn reject(failure: StoreError) -> HttpResponse {
    match failure {
        StoreError::Invalid { message, field } => {
            HttpResponse::BadRequest().json(Rejection { message, field })
        }
        StoreError::NotFound => HttpResponse::NotFound().json(Rejection {
            message: "Inquiry store not found".to_string(),
            field: None,
        }),
        failure => {
            error!("Failed to store inquiry: {}", failure);

            HttpResponse::InternalServerError().json(Rejection {
                message: "Failed to submit inquiry".to_string(),
                field: None,
            })
        }
    }
}
