//! Health check and welcome endpoints.

use actix_web::{HttpResponse, web};
use serde::Serialize;
use serde_json::json;

use crate::state::{AppState, StorageBackend};

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub timestamp: String,
    pub uptime_seconds: u64,
    pub storage: StorageBackend,
    pub database: &'static str,
    pub missing_config: Vec<&'static str>,
}

/// Health check endpoint - returns server status.
///
/// `degraded` whenever a required setting fell back to a default or the
/// database stopped answering.
///
/// GET /health
pub async fn health_check(state: web::Data<AppState>) -> HttpResponse {
    let database = match state.database_reachable().await {
        Some(true) => "connected",
        Some(false) => "unreachable",
        None => "not_configured",
    };
    let healthy = state.missing_config.is_empty() && database != "unreachable";

    let response = HealthResponse {
        status: if healthy { "healthy" } else { "degraded" },
        version: env!("CARGO_PKG_VERSION"),
        timestamp: chrono::Utc::now().to_rfc3339(),
        uptime_seconds: state.started_at.elapsed().as_secs(),
        storage: state.storage,
        database,
        missing_config: state.missing_config.to_vec(),
    };

    HttpResponse::Ok().json(response)
}

/// GET /
pub async fn welcome() -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "message": "Welcome to the Workout Tracker API",
        "version": env!("CARGO_PKG_VERSION"),
        "status": "running",
        "endpoints": {
            "health": "GET /health",
            "auth": {
                "signup": "POST /api/auth/signup",
                "login": "POST /api/auth/login",
                "user": "GET /api/auth/user",
            },
            "workouts": {
                "list": "GET /api/workouts",
                "create": "POST /api/workouts",
                "update": "PUT /api/workouts/{id}",
                "delete": "DELETE /api/workouts/{id}",
            },
        },
    }))
}
