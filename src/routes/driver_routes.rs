use axum::{
    extract::{rejection::QueryRejection, Query, State},
    http::StatusCode,
    routing::post,
    Json, Router,
};
use crate::controllers::driver_controller::DriverController;
use crate::dto::api_response::ApiResponse;
use crate::dto::journey_dto::CompleteJourneyRequest;
use crate::dto::leave_dto::{LeaveFilters, SubmitLeaveRequest};
use crate::models::{Journey, LeaveRequest};
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::validation::ValidatedJson;

pub fn create_driver_router() -> Router<AppState> {
    Router::new()
        .route("/journeys/complete", post(complete_journey))
        .route(
            "/leave-requests",
            post(submit_leave_request).get(list_leave_requests),
        )
}

async fn complete_journey(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<CompleteJourneyRequest>,
) -> Result<Json<ApiResponse<Journey>>, AppError> {
    let controller = DriverController::new(&state);
    Ok(Json(controller.complete_journey(request).await?))
}

async fn submit_leave_request(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<SubmitLeaveRequest>,
) -> Result<(StatusCode, Json<ApiResponse<LeaveRequest>>), AppError> {
    let controller = DriverController::new(&state);
    Ok((StatusCode::CREATED, Json(controller.submit_leave_request(request).await?)))
}

async fn list_leave_requests(
    State(state): State<AppState>,
    filters: Result<Query<LeaveFilters>, QueryRejection>,
) -> Result<Json<ApiResponse<Vec<LeaveRequest>>>, AppError> {
    let Query(filters) = filters.map_err(|e| AppError::InvalidPayload(e.body_text()))?;
    let controller = DriverController::new(&state);
    let requests = controller.leave_requests(&filters.driver_id).await?;
    Ok(Json(ApiResponse::success(requests)))
}
