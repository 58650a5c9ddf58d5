use std::sync::Mutex;

use log::{error, info, warn};
use serde::{Deserialize, Serialize};
use url::Url;

use crate::store::StoreError;

pub const FALLBACK_DESCRIPTION: &str =
    "Failed to send message via system. Please try WhatsApp directly.";

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Default,
    Destructive,
}

/// A short user-facing notification.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub title: String,
    pub description: String,
    pub severity: Severity,
}

impl Toast {
    pub fn redirecting() -> Self {
        Self {
            title: "Redirecting to WhatsApp".to_string(),
            description: "Opening secure chat to finalize your inquiry...".to_string(),
            severity: Severity::Default,
        }
    }

    pub fn failure(error: &StoreError) -> Self {
        let description = match error {
            StoreError::Invalid { message, .. } | StoreError::Other(message)
                if !message.is_empty() =>
            {
                message.clone()
            }
            _ => FALLBACK_DESCRIPTION.to_string(),
        };

        Self {
            title: "Submission Error".to_string(),
            description,
            severity: Severity::Destructive,
        }
    }
}

pub trait Notifier: Send + Sync {
    fn notify(&self, toast: Toast);
}

/// Opens an address in a new browsing context. Fire and forget.
pub trait Redirector: Send + Sync {
    fn open(&self, url: &Url);
}

/// Keeps what a single submission notified and opened, so the caller can
/// hand it back to whoever drives the form.
#[derive(Default)]
pub struct Recorder {
    toasts: Mutex<Vec<Toast>>,
    opened: Mutex<Vec<Url>>,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toasts(&self) -> Vec<Toast> {
        match self.toasts.lock() {
            Ok(toasts) => toasts.clone(),
            Err(_) => Vec::new(),
        }
    }

    pub fn opened(&self) -> Vec<Url> {
        match self.opened.lock() {
            Ok(opened) => opened.clone(),
            Err(_) => Vec::new(),
        }
    }
}

impl Notifier for Recorder {
    fn notify(&self, toast: Toast) {
        match toast.severity {
            Severity::Default => info!("{}: {}", toast.title, toast.description),
            Severity::Destructive => warn!("{}: {}", toast.title, toast.description),
        }

        match self.toasts.lock() {
            Ok(mut toasts) => toasts.push(toast),
            Err(_) => error!("Failed to lock toasts - dropping notification"),
        }
    }
}

impl Redirector for Recorder {
    fn open(&self, url: &Url) {
        info!("Opening {}", url);

        match self.opened.lock() {
            Ok(mut opened) => opened.push(url.clone()),
            Err(_) => error!("Failed to lock redirects - dropping {}", url),
        }
    }
}
