use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use crate::controllers::journey_controller::JourneyController;
use crate::dto::api_response::ApiResponse;
use crate::dto::journey_dto::{
    AddWaypointRequest, ChangeDestinationRequest, JourneyActionRequest, JourneyFilters,
    RateJourneyRequest, RemoveWaypointRequest, RequestJourneyRequest,
};
use crate::models::Journey;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::validation::ValidatedJson;

pub fn create_journey_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_journeys))
        .route("/request", post(request_journey))
        .route("/cancel", post(cancel_journey))
        .route("/dropoff", post(request_dropoff))
        .route("/route-change", post(add_waypoint))
        .route("/route-change/remove", post(remove_waypoint))
        .route("/route-change/destination", post(change_destination))
        .route("/rate", post(rate_journey))
        .route("/:id", get(get_journey))
}

async fn request_journey(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<RequestJourneyRequest>,
) -> Result<(StatusCode, Json<ApiResponse<Journey>>), AppError> {
    let controller = JourneyController::new(&state);
    let response = controller.request(request).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

async fn list_journeys(
    State(state): State<AppState>,
    filters: Result<Query<JourneyFilters>, QueryRejection>,
) -> Result<Json<ApiResponse<Vec<Journey>>>, AppError> {
    let Query(filters) = filters.map_err(|e| AppError::InvalidPayload(e.body_text()))?;
    let controller = JourneyController::new(&state);
    let journeys = controller.list(filters).await?;
    Ok(Json(ApiResponse::success(journeys)))
}

async fn get_journey(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<Journey>>, AppError> {
    let controller = JourneyController::new(&state);
    let journey = controller.get_by_id(&id).await?;
    Ok(Json(ApiResponse::success(journey)))
}

async fn cancel_journey(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<JourneyActionRequest>,
) -> Result<Json<ApiResponse<Journey>>, AppError> {
    let controller = JourneyController::new(&state);
    Ok(Json(controller.cancel(request).await?))
}

async fn request_dropoff(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<JourneyActionRequest>,
) -> Result<Json<ApiResponse<Journey>>, AppError> {
    let controller = JourneyController::new(&state);
    Ok(Json(controller.dropoff(request).await?))
}

async fn add_waypoint(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<AddWaypointRequest>,
) -> Result<Json<ApiResponse<Journey>>, AppError> {
    let controller = JourneyController::new(&state);
    Ok(Json(controller.add_waypoint(request).await?))
}

async fn remove_waypoint(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<RemoveWaypointRequest>,
) -> Result<Json<ApiResponse<Journey>>, AppError> {
    let controller = JourneyController::new(&state);
    Ok(Json(controller.remove_waypoint(request).await?))
}

async fn change_destination(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<ChangeDestinationRequest>,
) -> Result<Json<ApiResponse<Journey>>, AppError> {
    let controller = JourneyController::new(&state);
    Ok(Json(controller.change_destination(request).await?))
}

async fn rate_journey(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<RateJourneyRequest>,
) -> Result<Json<ApiResponse<Journey>>, AppError> {
    let controller = JourneyController::new(&state);
    Ok(Json(controller.rate(request).await?))
}
