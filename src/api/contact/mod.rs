mod v1;
pub use v1::*;

use serde::{Deserialize, Serialize};

use crate::flow::{ContactForm, Toast};
use crate::schemas::{FieldError, ServiceOption};

#[derive(Deserialize, Debug)]
pub struct FormQuery {
    pub service: Option<String>,
}

#[derive(Serialize, Debug)]
pub struct FormResponse {
    pub form: ContactForm,
    pub services: Vec<ServiceOption>,
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "lowercase")]
pub enum SubmitStatus {
    Redirected,
    Invalid,
    Failed,
}

/// What the flow produced, plus the form as it should now be displayed.
#[derive(Serialize, Debug)]
pub struct SubmitResponse {
    pub status: SubmitStatus,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<FieldError>,

    pub notifications: Vec<Toast>,
    pub form: ContactForm,
}
