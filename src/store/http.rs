use async_trait::async_trait;
use log::debug;
use reqwest::{Client as HttpClient, StatusCode};
use url::Url;

use super::{RecordStore, StoreError};
use crate::schemas::{Inquiry, InquiryInput, Rejection};

/// Remote record store speaking the `/api/inquiries` contract.
pub struct HttpStore {
    client: HttpClient,
    endpoint: Url,
}

impl HttpStore {
    pub fn new(base: &str) -> Result<Self, url::ParseError> {
        let mut base = Url::parse(base)?;

        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }

        Ok(Self {
            client: HttpClient::default(),
            endpoint: base.join("api/inquiries")?,
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl RecordStore for HttpStore {
    async fn create(&self, input: &InquiryInput) -> Result<Inquiry, StoreError> {
        let response = self
            .client
            .post(self.endpoint.clone())
            .header("Content-Type", "application/json")
            .json(input)
            .send()
            .await
            .map_err(|error| StoreError::Unreachable(error.to_string()))?;

        debug!("Store {} answered {}", self.endpoint, response.status());

        match response.status() {
            status if status.is_success() => {
                response.json::<Inquiry>().await.map_err(|error| {
                    StoreError::Other(format!("Malformed store response: {}", error))
                })
            }
            StatusCode::NOT_FOUND => Err(StoreError::NotFound),
            StatusCode::BAD_REQUEST => {
                let rejection = response.json::<Rejection>().await.map_err(|error| {
                    StoreError::Other(format!("Malformed store rejection: {}", error))
                })?;

                Err(StoreError::Invalid {
                    message: rejection.message,
                    field: rejection.field,
                })
            }
            _ => Err(StoreError::Other("Failed to submit inquiry".to_string())),
        }
    }
}
