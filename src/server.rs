use std::io::{Error, ErrorKind};
use std::sync::Arc;

use actix_web::middleware::Logger;
use actix_web::web::Data;
use actix_web::{App, HttpServer};
use actix_web_prometheus::PrometheusMetricsBuilder;

use tokio::signal::unix::{signal, SignalKind};

use chrono::Utc;
use log::info;

use fortified::api::{configure, AppState};

pub async fn run() -> std::io::Result<()> {
    // @NOTE: sentry is optional
    let _guard = std::env::var("SENTRY_DSN").ok().map(|dsn| {
        sentry::init((
            dsn,
            sentry::ClientOptions {
                release: sentry::release_name!(),
                traces_sample_rate: 1.0,
                ..Default::default()
            },
        ))
    });

    // @NOTE: server configuration
    let host = std::env::var("SERVER_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
    let port = std::env::var("SERVER_PORT")
        .unwrap_or_else(|_| "8000".to_string())
        .parse::<u16>()
        .map_err(|_| Error::new(ErrorKind::InvalidInput, "Invalid SERVER_PORT"))?;
    let concurrent = std::env::var("SERVER_CONCURRENT")
        .unwrap_or_else(|_| "1".to_string())
        .parse::<usize>()
        .map_err(|_| Error::new(ErrorKind::InvalidInput, "Invalid SERVER_CONCURRENT"))?;

    // @NOTE: store appstate
    let appstate = Arc::new(AppState::new().await?);
    let prometheus = PrometheusMetricsBuilder::new("api")
        .endpoint("/metrics")
        .build()
        .map_err(|e| {
            Error::new(
                ErrorKind::Other,
                format!("Failed to build prometheus metrics: {:?}", e),
            )
        })?;

    // @NOTE: spawn new http server
    let server = HttpServer::new(move || {
        App::new()
            // @NOTE: monitoring
            .wrap(prometheus.clone())
            .wrap(Logger::default())
            .wrap(
                sentry_actix::Sentry::builder()
                    .capture_server_errors(true)
                    .finish(),
            )
            .configure(configure)
            // @NOTE: AppState
            .app_data(Data::new(appstate.clone()))
    })
    .workers(concurrent)
    .keep_alive(std::time::Duration::from_secs(100))
    .bind((host.as_str(), port))
    .map_err(|e| {
        Error::new(
            ErrorKind::AddrInUse,
            format!("Failed to bind to {}:{}: {}", host, port, e),
        )
    })?
    .shutdown_timeout(30)
    .run();

    let handler = server.handle();

    info!(
        "Server started at {}",
        Utc::now().format("%Y-%m-%d %H:%M:%S UTC"),
    );

    // @NOTE: graceful shutdown
    let mut sigint = signal(SignalKind::interrupt())?;
    let mut sigterm = signal(SignalKind::terminate())?;

    actix_rt::spawn(async move {
        tokio::select! {
            _ = sigint.recv() => {}
            _ = sigterm.recv() => {}
        }

        info!("Server is going to shutdown...");
        handler.stop(true).await;
    });

    server.await
}
