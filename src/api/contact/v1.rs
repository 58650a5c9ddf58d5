use std::sync::Arc;

use actix_web::web::{Bytes, Data, Query};
use actix_web::{HttpResponse, Result};

use super::{FormQuery, FormResponse, SubmitResponse, SubmitStatus};
use crate::api::AppState;
use crate::flow::{ContactForm, Outcome, Recorder, Submission};
use crate::schemas::{service, Rejection};

pub async fn get_form(query: Query<FormQuery>) -> Result<HttpResponse> {
    Ok(HttpResponse::Ok().json(FormResponse {
        form: ContactForm::from_service_param(query.service.as_deref()),
        services: service::options(),
    }))
}

pub async fn submit(appstate: Data<Arc<AppState>>, body: Bytes) -> Result<HttpResponse> {
    let mut form = match serde_json::from_slice::<ContactForm>(&body) {
        Ok(form) => form,
        Err(error) => {
            return Ok(HttpResponse::BadRequest().json(Rejection {
                message: format!("Invalid request body: {}", error),
                field: None,
            }))
        }
    };

    let recorder = Recorder::new();
    let outcome = Submission::new(
        appstate.store(),
        &recorder,
        &recorder,
        appstate.settings(),
    )
    .submit(&mut form)
    .await;

    let (mut builder, status, url, errors) = match outcome {
        Outcome::Redirected { url, .. } => (
            HttpResponse::Ok(),
            SubmitStatus::Redirected,
            Some(url.to_string()),
            Vec::new(),
        ),
        Outcome::Invalid(errors) => (
            HttpResponse::UnprocessableEntity(),
            SubmitStatus::Invalid,
            None,
            errors,
        ),
        Outcome::Failed(_) => (
            HttpResponse::BadGateway(),
            SubmitStatus::Failed,
            None,
            Vec::new(),
        ),
    };

    Ok(builder.json(SubmitResponse {
        status,
        url,
        errors,
        notifications: recorder.toasts(),
        form,
    }))
}
