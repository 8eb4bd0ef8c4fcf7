use axum::{extract::State, routing::get, Json, Router};
use serde_json::{json, Value};
use crate::controllers::data_controller::DataController;
use crate::dto::api_response::ApiResponse;
use crate::models::FleetSnapshot;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_data_router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health_check))
        .route("/data", get(get_data))
}

/// Endpoint de prueba simple
async fn health_check(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "service": "fleetpro",
        "status": "ok",
        "environment": state.config.environment,
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

async fn get_data(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<FleetSnapshot>>, AppError> {
    let controller = DataController::new(&state);
    Ok(Json(ApiResponse::success(controller.snapshot().await?)))
}
