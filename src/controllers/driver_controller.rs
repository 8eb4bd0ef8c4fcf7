use chrono::Utc;
use std::sync::Arc;
use tracing::info;

use crate::dto::api_response::ApiResponse;
use crate::dto::journey_dto::CompleteJourneyRequest;
use crate::dto::leave_dto::SubmitLeaveRequest;
use crate::models::{Journey, LeaveRequest};
use crate::repositories::fleet_repository::FleetRepository;
use crate::services::{journey_service, leave_service};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub struct DriverController {
    repository: Arc<FleetRepository>,
}

impl DriverController {
    pub fn new(state: &AppState) -> Self {
        Self {
            repository: state.repository.clone(),
        }
    }

    pub async fn complete_journey(
        &self,
        request: CompleteJourneyRequest,
    ) -> Result<ApiResponse<Journey>, AppError> {
        let now = Utc::now();
        let journey = self
            .repository
            .mutate(|data| {
                journey_service::complete_journey(
                    data,
                    &request.journey_id,
                    Some(request.driver_id.as_str()),
                    request.distance,
                    now,
                )
            })
            .await?;

        info!(
            "🏁 Conductor {} completó el viaje {} ({} km)",
            request.driver_id, journey.id, journey.distance
        );
        Ok(ApiResponse::success_with_message(journey, "Journey completed"))
    }

    pub async fn submit_leave_request(
        &self,
        request: SubmitLeaveRequest,
    ) -> Result<ApiResponse<LeaveRequest>, AppError> {
        let now = Utc::now();
        let leave = self
            .repository
            .mutate(|data| leave_service::submit_leave_request(data, &request, now))
            .await?;

        info!(
            "📝 Permiso solicitado por {}: {} → {} ({} días)",
            leave.driver_id,
            leave.start_date,
            leave.end_date,
            leave.days()
        );
        Ok(ApiResponse::success_with_message(leave, "Leave request submitted"))
    }

    pub async fn leave_requests(&self, driver_id: &str) -> Result<Vec<LeaveRequest>, AppError> {
        self.repository
            .read(|data| leave_service::leave_requests_for(data, driver_id))
            .await
    }
}
