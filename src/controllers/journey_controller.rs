use chrono::Utc;
use std::sync::Arc;
use tracing::info;

use crate::dto::api_response::ApiResponse;
use crate::dto::journey_dto::{
    AddWaypointRequest, ChangeDestinationRequest, JourneyActionRequest, JourneyFilters,
    RateJourneyRequest, RemoveWaypointRequest, RequestJourneyRequest,
};
use crate::models::Journey;
use crate::repositories::fleet_repository::FleetRepository;
use crate::services::booking_cooldown::BookingCooldown;
use crate::services::journey_service;
use crate::state::AppState;
use crate::utils::errors::AppError;

/// Operaciones de viaje del panel de usuario
pub struct JourneyController {
    repository: Arc<FleetRepository>,
    cooldown: Arc<BookingCooldown>,
}

impl JourneyController {
    pub fn new(state: &AppState) -> Self {
        Self {
            repository: state.repository.clone(),
            cooldown: state.booking_cooldown.clone(),
        }
    }

    pub async fn request(
        &self,
        request: RequestJourneyRequest,
    ) -> Result<ApiResponse<Journey>, AppError> {
        let now = Utc::now();
        let cooldown = self.cooldown.as_ref();

        let journey = self
            .repository
            .mutate(|data| journey_service::request_journey(data, cooldown, &request, now))
            .await?;

        // Solo cuenta para el enfriamiento si se ha persistido
        self.cooldown.record(&journey.user_id, now)?;

        info!(
            "🆕 Viaje {} solicitado por {} hacia {}",
            journey.id, journey.user_id, journey.end_location
        );
        Ok(ApiResponse::success_with_message(
            journey,
            "Journey requested successfully",
        ))
    }

    pub async fn list(&self, filters: JourneyFilters) -> Result<Vec<Journey>, AppError> {
        self.repository
            .read(|data| Ok(journey_service::list_journeys(data, &filters)))
            .await
    }

    pub async fn get_by_id(&self, id: &str) -> Result<Journey, AppError> {
        self.repository
            .read(|data| data.journey(id).cloned())
            .await
    }

    pub async fn cancel(
        &self,
        request: JourneyActionRequest,
    ) -> Result<ApiResponse<Journey>, AppError> {
        let now = Utc::now();
        let journey = self
            .repository
            .mutate(|data| {
                journey_service::cancel_journey(
                    data,
                    &request.journey_id,
                    request.reason.as_deref(),
                    now,
                )
            })
            .await?;

        info!("🚫 Viaje {} cancelado", journey.id);
        Ok(ApiResponse::success_with_message(journey, "Journey cancelled"))
    }

    pub async fn dropoff(
        &self,
        request: JourneyActionRequest,
    ) -> Result<ApiResponse<Journey>, AppError> {
        let now = Utc::now();
        let journey = self
            .repository
            .mutate(|data| {
                journey_service::complete_journey(data, &request.journey_id, None, None, now)
            })
            .await?;

        info!("🏁 Dropoff solicitado, viaje {} completado", journey.id);
        Ok(ApiResponse::success_with_message(journey, "Journey completed"))
    }

    pub async fn add_waypoint(
        &self,
        request: AddWaypointRequest,
    ) -> Result<ApiResponse<Journey>, AppError> {
        let now = Utc::now();
        let journey = self
            .repository
            .mutate(|data| {
                journey_service::add_waypoint(
                    data,
                    &request.journey_id,
                    &request.new_waypoint,
                    request.reason.as_deref(),
                    now,
                )
            })
            .await?;

        info!("📍 Parada '{}' añadida al viaje {}", request.new_waypoint, journey.id);
        Ok(ApiResponse::success_with_message(journey, "Waypoint added"))
    }

    pub async fn remove_waypoint(
        &self,
        request: RemoveWaypointRequest,
    ) -> Result<ApiResponse<Journey>, AppError> {
        let now = Utc::now();
        let journey = self
            .repository
            .mutate(|data| {
                journey_service::remove_waypoint(
                    data,
                    &request.journey_id,
                    &request.waypoint,
                    request.reason.as_deref(),
                    now,
                )
            })
            .await?;

        Ok(ApiResponse::success_with_message(journey, "Waypoint removed"))
    }

    pub async fn change_destination(
        &self,
        request: ChangeDestinationRequest,
    ) -> Result<ApiResponse<Journey>, AppError> {
        let now = Utc::now();
        let journey = self
            .repository
            .mutate(|data| {
                journey_service::change_destination(
                    data,
                    &request.journey_id,
                    &request.new_destination,
                    request.reason.as_deref(),
                    now,
                )
            })
            .await?;

        info!("🧭 Destino del viaje {} cambiado a {}", journey.id, journey.end_location);
        Ok(ApiResponse::success_with_message(journey, "Destination changed"))
    }

    pub async fn rate(&self, request: RateJourneyRequest) -> Result<ApiResponse<Journey>, AppError> {
        let journey = self
            .repository
            .mutate(|data| {
                journey_service::rate_journey(
                    data,
                    &request.journey_id,
                    request.user_id.as_deref(),
                    request.rating,
                )
            })
            .await?;

        Ok(ApiResponse::success_with_message(journey, "Thanks for rating your journey"))
    }
}
