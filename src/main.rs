mod config;
mod core;
mod engine;
mod models;
mod routes;
mod services;

use actix_cors::Cors;
use actix_web::{error, http::StatusCode, middleware, web, App, HttpResponse, HttpServer};
use std::sync::Arc;
use std::time::Duration;
use tracing::{error, info};

use crate::config::Settings;
use crate::engine::DiagnosisEngine;
use crate::models::ScoringWeights;
use crate::routes::diagnosis::AppState;
use crate::services::{AdvisorClient, CatalogService};

/// JSON error response for JSON payload errors
#[derive(Debug, serde::Serialize)]
pub struct JsonError {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}

impl std::fmt::Display for JsonError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.error, self.message)
    }
}

impl std::error::Error for JsonError {}

impl error::ResponseError for JsonError {
    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(StatusCode::from_u16(self.status_code).unwrap_or(StatusCode::BAD_REQUEST))
            .content_type("application/json")
            .body(serde_json::to_string(self).unwrap())
    }
}

/// Handle JSON payload errors
pub fn handle_json_payload_error(err: error::JsonPayloadError, req: &actix_web::HttpRequest) -> actix_web::Error {
    tracing::info!("JSON payload error on {}: {}", req.path(), err);
    JsonError {
        error: "invalid_json".to_string(),
        message: format!("Invalid JSON: {}", err),
        status_code: 400,
    }
    .into()
}

/// Handle query payload errors
pub fn handle_query_payload_error(err: error::QueryPayloadError, _req: &actix_web::HttpRequest) -> actix_web::Error {
    JsonError {
        error: "invalid_query".to_string(),
        message: format!("Invalid query: {}", err),
        status_code: 400,
    }
    .into()
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    // Initialize logging
    let log_format = std::env::var("LOG_FORMAT").unwrap_or_else(|_| "json".to_string());

    let subscriber = tracing_subscriber::fmt()
        .with_target(false)
        .with_level(true);

    if log_format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.init();
    }

    info!("Starting CameraPicker diagnosis service...");

    // Load configuration
    let settings = Settings::load().unwrap_or_else(|e| {
        error!("Failed to load configuration: {}", e);
        panic!("Configuration error: {}", e);
    });

    info!("Configuration loaded successfully");

    // Initialize the catalog service and start the load in the background
    let fetch_timeout = Duration::from_secs(settings.catalog.fetch_timeout_secs.unwrap_or(10));
    let ready_timeout = Duration::from_millis(settings.catalog.ready_timeout_ms.unwrap_or(10_000));

    let catalog = Arc::new(CatalogService::new(settings.catalog.url.clone(), fetch_timeout));

    {
        let catalog = catalog.clone();
        actix_web::rt::spawn(async move {
            catalog.load().await;
        });
    }

    info!(
        "Catalog load started (source: {})",
        settings.catalog.url.as_deref().unwrap_or("built-in fallback")
    );

    // Initialize the advice provider client when configured
    let advisor_timeout = Duration::from_secs(settings.advisor.timeout_secs.unwrap_or(15));
    let advisor = settings
        .advisor
        .base_url
        .clone()
        .map(|base_url| Arc::new(AdvisorClient::new(base_url, advisor_timeout)));

    if advisor.is_some() {
        info!("Advice provider configured");
    } else {
        info!("No advice provider configured, advice is composed locally");
    }

    // Initialize the engine with configured weights
    let weights: ScoringWeights = settings.scoring.weights.clone().into();

    let engine = Arc::new(
        DiagnosisEngine::new(catalog.clone(), advisor, weights).with_ready_timeout(ready_timeout),
    );

    info!("Diagnosis engine initialized with weights: {:?}", weights);

    // Build application state
    let app_state = AppState {
        engine,
        catalog,
    };

    // Configure HTTP server
    let host = settings.server.host.clone();
    let port = settings.server.port;
    let workers = settings.server.workers.unwrap_or(4);

    info!("Starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .app_data(web::JsonConfig::default().error_handler(handle_json_payload_error))
            .app_data(web::QueryConfig::default().error_handler(handle_query_payload_error))
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::Compress::default())
            .configure(routes::configure_routes)
    })
    .workers(workers)
    .bind((host, port))?
    .run()
    .await
}
