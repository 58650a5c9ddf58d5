use std::io::{Error, ErrorKind, Result as AppStateResult};
use std::sync::Arc;

use actix_web::web::{get, post, scope, Data, ServiceConfig};
use actix_web::{HttpResponse, Result as HttpResult};

use chrono::Utc;
use log::info;
use sea_orm::Database;
use serde::{Deserialize, Serialize};

use crate::entities::{Inquiries, Memory, Storage};
use crate::flow::Settings;
use crate::store::{HttpStore, LocalStore, RecordStore};

pub mod contact;
pub mod inquiries;

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Status {
    pub status: bool,
    pub current: i64,
}

pub struct AppState {
    // @NOTE: where inquiries are kept when this server is the store
    storage: Arc<dyn Storage>,

    // @NOTE: the store the contact flow talks to
    store: Arc<dyn RecordStore>,

    settings: Settings,
}

impl AppState {
    pub async fn new() -> AppStateResult<AppState> {
        let settings = Settings::from_env()?;

        let storage: Arc<dyn Storage> = match std::env::var("DATABASE_DSN") {
            Ok(dsn) => Arc::new(Inquiries::new(Arc::new(
                Database::connect(dsn).await.map_err(|error| {
                    Error::new(
                        ErrorKind::InvalidInput,
                        format!("Failed to connect database: {}", error),
                    )
                })?,
            ))),
            Err(_) => {
                info!("DATABASE_DSN is not set, inquiries are kept in memory");
                Arc::new(Memory::new())
            }
        };

        let state = AppState::with_storage(storage, settings);

        match std::env::var("INQUIRY_STORE_URL") {
            Ok(base) => Ok(state.with_store(Arc::new(HttpStore::new(&base).map_err(
                |_| Error::new(ErrorKind::InvalidInput, "Invalid INQUIRY_STORE_URL"),
            )?))),
            Err(_) => Ok(state),
        }
    }

    /// State whose contact flow persists into `storage` directly.
    pub fn with_storage(storage: Arc<dyn Storage>, settings: Settings) -> AppState {
        AppState {
            store: Arc::new(LocalStore::new(storage.clone())),
            storage,
            settings,
        }
    }

    pub fn with_store(mut self, store: Arc<dyn RecordStore>) -> AppState {
        self.store = store;
        self
    }

    pub fn storage(&self) -> &dyn Storage {
        self.storage.as_ref()
    }

    pub fn store(&self) -> &dyn RecordStore {
        self.store.as_ref()
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }
}

pub async fn health(appstate: Data<Arc<AppState>>) -> HttpResult<HttpResponse> {
    let current = Utc::now().timestamp();

    if appstate.storage.ping().await {
        Ok(HttpResponse::Ok().json(Status {
            status: true,
            current,
        }))
    } else {
        Ok(HttpResponse::InternalServerError().json(Status {
            status: false,
            current,
        }))
    }
}

/// Every route of the service. Shared by the server and the tests.
pub fn configure(cfg: &mut ServiceConfig) {
    cfg
        // @NOTE: health-check
        .route("/health", get().to(health))
        // @NOTE: record store
        .service(
            scope("/api/inquiries")
                .route("", post().to(inquiries::create_inquiry))
                .route("", get().to(inquiries::list_inquiries)),
        )
        // @NOTE: contact form
        .service(
            scope("/api/contact")
                .route("/v1/form", get().to(contact::get_form))
                .route("/v1/submit", post().to(contact::submit)),
        );
}
