use crate::presentation::http::state::AppState;
use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use serde::Serialize;

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    database: &'static str,
    templates: &'static str,
    version: &'static str,
}

pub async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    let database = match sqlx::query("SELECT 1").execute(&state.db).await {
        Ok(_) => "up",
        Err(e) => {
            tracing::error!("Health check failed: Database unreachable: {}", e);
            "down"
        }
    };
    let templates = if crate::presentation::http::views::ensure_templates().is_ok() {
        "loaded"
    } else {
        "broken"
    };

    let healthy = database == "up" && templates == "loaded";
    let response = HealthResponse {
        status: if healthy { "healthy" } else { "unhealthy" },
        database,
        templates,
        version: env!("CARGO_PKG_VERSION"),
    };

    let code = if healthy {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (code, Json(response))
}
