use std::sync::Arc;

use actix_web::web::{Bytes, Data};
use actix_web::{HttpResponse, Result};
use log::info;

use super::reject;
use crate::api::AppState;
use crate::schemas::{InquiryInput, Rejection};

pub async fn create_inquiry(appstate: Data<Arc<AppState>>, body: Bytes) -> Result<HttpResponse> {
    let input = match serde_json::from_slice::<InquiryInput>(&body) {
        Ok(input) => input,
        Err(error) => {
            return Ok(HttpResponse::BadRequest().json(Rejection {
                message: format!("Invalid request body: {}", error),
                field: None,
            }))
        }
    };

    match appstate.storage().create_inquiry(input).await {
        Ok(inquiry) => {
            info!("Stored inquiry {} for {}", inquiry.id, inquiry.service);
            Ok(HttpResponse::Created().json(inquiry))
        }
        Err(failure) => Ok(reject(failure)),
    }
}

pub async fn list_inquiries(appstate: Data<Arc<AppState>>) -> Result<HttpResponse> {
    match appstate.storage().get_inquiries().await {
        Ok(inquiries) => Ok(HttpResponse::Ok().json(inquiries)),
        Err(failure) => Ok(reject(failure)),
    }
}
