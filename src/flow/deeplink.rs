use url::Url;

use crate::schemas::service;

pub const DEFAULT_BASE_URL: &str = "https://wa.me";
pub const DEFAULT_PHONE: &str = "916204312017";
pub const DEFAULT_BUSINESS: &str = "Fortified Developments";

/// Builds the pre-filled chat address a visitor is sent to.
#[derive(Clone, Debug)]
pub struct DeepLink {
    address: Url,
    business: String,
}

impl DeepLink {
    pub fn new(base_url: &str, phone: &str, business: &str) -> Result<Self, url::ParseError> {
        let address = Url::parse(&format!(
            "{}/{}",
            base_url.trim_end_matches('/'),
            phone.trim_start_matches('+')
        ))?;

        Ok(Self {
            address,
            business: business.to_string(),
        })
    }

    pub fn address(&self) -> &Url {
        &self.address
    }

    pub fn text(&self, name: &str, phone: &str, service: &str, message: &str) -> String {
        format!(
            "Hello {}!\n\n*Name:* {}\n*Phone:* {}\n*Interested in:* {}\n\n*Details:*\n{}",
            self.business,
            name,
            phone,
            service::label_for(service),
            message,
        )
    }

    /// Spaces are encoded as `+`, newlines as `%0A`.
    pub fn url(&self, name: &str, phone: &str, service: &str, message: &str) -> Url {
        let mut url = self.address.clone();

        url.query_pairs_mut()
            .append_pair("text", &self.text(name, phone, service, message));
        url
    }
}
