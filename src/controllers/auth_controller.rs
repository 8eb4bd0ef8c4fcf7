use std::sync::Arc;
use tracing::info;

use crate::dto::api_response::ApiResponse;
use crate::dto::auth_dto::{LoginRequest, LoginResponse};
use crate::repositories::fleet_repository::FleetRepository;
use crate::services::auth_service;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub struct AuthController {
    repository: Arc<FleetRepository>,
}

impl AuthController {
    pub fn new(state: &AppState) -> Self {
        Self {
            repository: state.repository.clone(),
        }
    }

    pub async fn login(&self, request: LoginRequest) -> Result<ApiResponse<LoginResponse>, AppError> {
        let response = self
            .repository
            .read(|data| auth_service::login(data, &request.email, &request.password))
            .await?;

        info!("🔐 Login correcto: {} ({:?})", request.email, response.role);
        Ok(ApiResponse::success_with_message(response, "Login successful"))
    }
}
