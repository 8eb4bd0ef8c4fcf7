use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post, put},
    Json, Router,
};
use crate::controllers::admin_controller::AdminController;
use crate::dto::admin_dto::{
    CreateCarRequest, CreateDriverRequest, CreateUserRequest, DeclineJourneyRequest,
    UpdateCarStatusRequest, UpdateDriverStatusRequest, UpdateUserStatusRequest,
};
use crate::dto::api_response::ApiResponse;
use crate::dto::journey_dto::AssignJourneyRequest;
use crate::dto::leave_dto::ReviewLeaveRequest;
use crate::models::{Car, DriverView, Journey, LeaveRequest, SystemStats, UserView};
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::validation::ValidatedJson;

// Sin middleware de auth: la sesión la gestiona el cliente
pub fn create_admin_router() -> Router<AppState> {
    Router::new()
        .route("/stats", get(get_stats))
        .route("/journeys/assign", post(assign_journey))
        .route("/journeys/decline", post(decline_journey))
        .route("/cars/status", put(update_car_status))
        .route("/drivers/status", put(update_driver_status))
        .route("/users/status", put(update_user_status))
        .route("/leave-requests/status", put(review_leave_request))
        .route("/users", post(create_user))
        .route("/drivers", post(create_driver))
        .route("/cars", post(create_car))
}

async fn get_stats(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<SystemStats>>, AppError> {
    let controller = AdminController::new(&state);
    Ok(Json(ApiResponse::success(controller.stats().await?)))
}

async fn assign_journey(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<AssignJourneyRequest>,
) -> Result<Json<ApiResponse<Journey>>, AppError> {
    let controller = AdminController::new(&state);
    Ok(Json(controller.assign_journey(request).await?))
}

async fn decline_journey(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<DeclineJourneyRequest>,
) -> Result<Json<ApiResponse<Journey>>, AppError> {
    let controller = AdminController::new(&state);
    Ok(Json(controller.decline_journey(request).await?))
}

async fn update_car_status(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<UpdateCarStatusRequest>,
) -> Result<Json<ApiResponse<Car>>, AppError> {
    let controller = AdminController::new(&state);
    Ok(Json(controller.update_car_status(request).await?))
}

async fn update_driver_status(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<UpdateDriverStatusRequest>,
) -> Result<Json<ApiResponse<DriverView>>, AppError> {
    let controller = AdminController::new(&state);
    Ok(Json(controller.update_driver_status(request).await?))
}

async fn update_user_status(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<UpdateUserStatusRequest>,
) -> Result<Json<ApiResponse<UserView>>, AppError> {
    let controller = AdminController::new(&state);
    Ok(Json(controller.update_user_status(request).await?))
}

async fn review_leave_request(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<ReviewLeaveRequest>,
) -> Result<Json<ApiResponse<LeaveRequest>>, AppError> {
    let controller = AdminController::new(&state);
    Ok(Json(controller.review_leave_request(request).await?))
}

async fn create_user(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<CreateUserRequest>,
) -> Result<(StatusCode, Json<ApiResponse<UserView>>), AppError> {
    let controller = AdminController::new(&state);
    Ok((StatusCode::CREATED, Json(controller.create_user(request).await?)))
}

async fn create_driver(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<CreateDriverRequest>,
) -> Result<(StatusCode, Json<ApiResponse<DriverView>>), AppError> {
    let controller = AdminController::new(&state);
    Ok((StatusCode::CREATED, Json(controller.create_driver(request).await?)))
}

async fn create_car(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<CreateCarRequest>,
) -> Result<(StatusCode, Json<ApiResponse<Car>>), AppError> {
    let controller = AdminController::new(&state);
    Ok((StatusCode::CREATED, Json(controller.create_car(request).await?)))
}
