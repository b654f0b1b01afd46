use actix_web::{web, HttpResponse, Responder};
use std::sync::Arc;
use validator::Validate;

use crate::engine::DiagnosisEngine;
use crate::models::{
    DiagnosisRequest, DiagnosisResponse, ErrorResponse, HealthResponse, ScoreRequest,
    ScoreResponse, UserTypeResponse,
};
use crate::services::CatalogService;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<DiagnosisEngine>,
    pub catalog: Arc<CatalogService>,
}

/// Configure all diagnosis-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check))
        .route("/diagnosis/score", web::post().to(score_catalog))
        .route("/diagnosis/type", web::post().to(infer_type))
        .route("/diagnosis/full", web::post().to(full_diagnosis));
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    let catalog_ready = state.catalog.is_ready();
    let status = if catalog_ready { "healthy" } else { "loading" };

    HttpResponse::Ok().json(HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        catalog_ready,
        timestamp: chrono::Utc::now(),
    })
}

/// Score the catalog for the user's stated preferences
///
/// POST /api/v1/diagnosis/score
async fn score_catalog(
    state: web::Data<AppState>,
    req: web::Json<ScoreRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    let cameras = state.engine.score_for_preferences(&req.preferences).await;

    tracing::info!("Scored catalog: returning {} candidates", cameras.len());

    HttpResponse::Ok().json(ScoreResponse {
        total_candidates: cameras.len(),
        cameras,
    })
}

/// Infer the photographer type from preferences and swipe history
///
/// POST /api/v1/diagnosis/type
async fn infer_type(
    state: web::Data<AppState>,
    req: web::Json<DiagnosisRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    let user_type = state.engine.infer_user_type(&req.history, &req.preferences);

    tracing::debug!(
        "Inferred type '{}' from {} swipes",
        user_type.name,
        req.history.len()
    );

    HttpResponse::Ok().json(UserTypeResponse { user_type })
}

/// Build the complete diagnosis
///
/// POST /api/v1/diagnosis/full
///
/// Request body:
/// ```json
/// {
///   "preferences": { ... },
///   "history": [{"camera_id": "...", "action": "like"}]
/// }
/// ```
async fn full_diagnosis(
    state: web::Data<AppState>,
    req: web::Json<DiagnosisRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    let user_type = state.engine.infer_user_type(&req.history, &req.preferences);
    let diagnosis = state
        .engine
        .build_diagnosis(user_type, &req.history, &req.preferences)
        .await;

    tracing::info!(
        "Built diagnosis '{}' with {} accessories",
        diagnosis.user_type.name,
        diagnosis.recommendations.accessories.len()
    );

    HttpResponse::Ok().json(DiagnosisResponse {
        diagnosis_id: uuid::Uuid::new_v4().to_string(),
        diagnosis,
    })
}
