//! The contact form submission: validate, try to persist, build the chat
//! deep link, redirect, reset.

mod deeplink;
mod form;
mod notify;

pub use deeplink::{DeepLink, DEFAULT_BASE_URL, DEFAULT_BUSINESS, DEFAULT_PHONE};
pub use form::ContactForm;
pub use notify::{Notifier, Recorder, Redirector, Severity, Toast, FALLBACK_DESCRIPTION};

use std::io::{Error, ErrorKind};
use std::str::FromStr;

use log::{debug, error, warn};
use serde::Serialize;
use url::Url;

use crate::schemas::{FieldErrors, Inquiry, InquiryInput};
use crate::store::{RecordStore, StoreError};

#[derive(Serialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum Persistence {
    /// Try the store, fall back to the local values when it does not exist.
    #[default]
    AttemptThenFallback,

    /// Never call the store.
    AlwaysSkip,
}

impl FromStr for Persistence {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "attempt" | "attempt-then-fallback" => Ok(Persistence::AttemptThenFallback),
            "skip" | "always-skip" => Ok(Persistence::AlwaysSkip),
            _ => Err(Error::new(
                ErrorKind::InvalidInput,
                "Invalid INQUIRY_PERSISTENCE",
            )),
        }
    }
}

#[derive(Clone, Debug)]
pub struct Settings {
    pub persistence: Persistence,
    pub link: DeepLink,
}

impl Settings {
    pub fn new(persistence: Persistence, link: DeepLink) -> Self {
        Self { persistence, link }
    }

    pub fn from_env() -> std::io::Result<Settings> {
        let persistence = std::env::var("INQUIRY_PERSISTENCE")
            .unwrap_or_else(|_| "attempt".to_string())
            .parse::<Persistence>()?;
        let base_url =
            std::env::var("WHATSAPP_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        let phone = std::env::var("WHATSAPP_PHONE").unwrap_or_else(|_| DEFAULT_PHONE.to_string());
        let business =
            std::env::var("BUSINESS_NAME").unwrap_or_else(|_| DEFAULT_BUSINESS.to_string());

        let link = DeepLink::new(&base_url, &phone, &business)
            .map_err(|_| Error::new(ErrorKind::InvalidInput, "Invalid WHATSAPP_BASE_URL"))?;

        Ok(Settings { persistence, link })
    }
}

/// What the deep link was built from.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
#[serde(tag = "source", rename_all = "lowercase")]
pub enum Record {
    /// The store accepted it and handed back its canonical copy.
    Stored(Inquiry),

    /// Nothing was stored, the validated form values were used as is.
    Local(InquiryInput),
}

impl Record {
    fn fields(&self) -> (&str, &str, &str, &str) {
        match self {
            Record::Stored(inquiry) => (
                &inquiry.name,
                &inquiry.phone,
                &inquiry.service,
                &inquiry.message,
            ),
            Record::Local(input) => (&input.name, &input.phone, &input.service, &input.message),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Redirected { url: Url, record: Record },
    Invalid(FieldErrors),
    Failed(StoreError),
}

/// One submission of the contact form, with its collaborators injected.
pub struct Submission<'a> {
    store: &'a dyn RecordStore,
    notifier: &'a dyn Notifier,
    redirector: &'a dyn Redirector,
    settings: &'a Settings,
}

impl<'a> Submission<'a> {
    pub fn new(
        store: &'a dyn RecordStore,
        notifier: &'a dyn Notifier,
        redirector: &'a dyn Redirector,
        settings: &'a Settings,
    ) -> Self {
        Self {
            store,
            notifier,
            redirector,
            settings,
        }
    }

    /// Run the form through the flow. The form is cleared only when the
    /// visitor was redirected.
    pub async fn submit(&self, form: &mut ContactForm) -> Outcome {
        let input = match form.validate() {
            Ok(input) => input,
            Err(errors) => {
                debug!("Contact form rejected on {} field(s)", errors.len());
                return Outcome::Invalid(errors);
            }
        };

        let record = match self.settings.persistence {
            Persistence::AlwaysSkip => Record::Local(input),
            Persistence::AttemptThenFallback => match self.store.create(&input).await {
                Ok(inquiry) => Record::Stored(inquiry),
                Err(StoreError::NotFound) => {
                    warn!("Inquiry store not found, relying on WhatsApp fallback.");
                    Record::Local(input)
                }
                Err(failure) => {
                    error!("Submission failed: {}", failure);
                    self.notifier.notify(Toast::failure(&failure));
                    return Outcome::Failed(failure);
                }
            },
        };

        let (name, phone, service, message) = record.fields();
        let url = self.settings.link.url(name, phone, service, message);

        self.notifier.notify(Toast::redirecting());
        self.redirector.open(&url);
        form.reset();

        Outcome::Redirected { url, record }
    }
}
