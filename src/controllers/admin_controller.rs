use chrono::Utc;
use std::sync::Arc;
use tracing::info;

use crate::dto::admin_dto::{
    CreateCarRequest, CreateDriverRequest, CreateUserRequest, DeclineJourneyRequest,
    UpdateCarStatusRequest, UpdateDriverStatusRequest, UpdateUserStatusRequest,
};
use crate::dto::api_response::ApiResponse;
use crate::dto::journey_dto::AssignJourneyRequest;
use crate::dto::leave_dto::ReviewLeaveRequest;
use crate::models::{Car, DriverView, Journey, LeaveRequest, SystemStats, UserView};
use crate::repositories::fleet_repository::FleetRepository;
use crate::services::{fleet_admin_service, journey_service, leave_service};
use crate::state::AppState;
use crate::utils::errors::AppError;

/// Acciones del panel de administración
pub struct AdminController {
    repository: Arc<FleetRepository>,
}

impl AdminController {
    pub fn new(state: &AppState) -> Self {
        Self {
            repository: state.repository.clone(),
        }
    }

    pub async fn assign_journey(
        &self,
        request: AssignJourneyRequest,
    ) -> Result<ApiResponse<Journey>, AppError> {
        let journey = self
            .repository
            .mutate(|data| {
                journey_service::assign_journey(
                    data,
                    &request.journey_id,
                    &request.car_id,
                    &request.driver_id,
                )
            })
            .await?;

        info!(
            "🚗 Viaje {} asignado: coche {} / conductor {}",
            journey.id, journey.car_id, journey.driver_id
        );
        Ok(ApiResponse::success_with_message(journey, "Journey assigned"))
    }

    pub async fn decline_journey(
        &self,
        request: DeclineJourneyRequest,
    ) -> Result<ApiResponse<Journey>, AppError> {
        let now = Utc::now();
        let journey = self
            .repository
            .mutate(|data| {
                journey_service::decline_journey(
                    data,
                    &request.journey_id,
                    request.reason.as_deref(),
                    now,
                )
            })
            .await?;

        info!("🚫 Viaje {} rechazado por el admin", journey.id);
        Ok(ApiResponse::success_with_message(journey, "Journey declined"))
    }

    pub async fn update_car_status(
        &self,
        request: UpdateCarStatusRequest,
    ) -> Result<ApiResponse<Car>, AppError> {
        let car = self
            .repository
            .mutate(|data| fleet_admin_service::set_car_status(data, &request.car_id, request.status))
            .await?;

        info!("🔧 Coche {} → {}", car.id, car.status);
        Ok(ApiResponse::success_with_message(car, "Car status updated"))
    }

    pub async fn update_driver_status(
        &self,
        request: UpdateDriverStatusRequest,
    ) -> Result<ApiResponse<DriverView>, AppError> {
        let driver = self
            .repository
            .mutate(|data| {
                fleet_admin_service::set_driver_on_leave(data, &request.driver_id, request.on_leave)
            })
            .await?;

        info!("🧑‍✈️ Conductor {} onLeave={}", driver.id, driver.on_leave);
        Ok(ApiResponse::success_with_message(driver, "Driver status updated"))
    }

    pub async fn update_user_status(
        &self,
        request: UpdateUserStatusRequest,
    ) -> Result<ApiResponse<UserView>, AppError> {
        let user = self
            .repository
            .mutate(|data| {
                fleet_admin_service::set_user_active(data, &request.user_id, request.is_active)
            })
            .await?;

        info!("👤 Usuario {} isActive={}", user.id, user.is_active);
        Ok(ApiResponse::success_with_message(user, "User status updated"))
    }

    pub async fn review_leave_request(
        &self,
        request: ReviewLeaveRequest,
    ) -> Result<ApiResponse<LeaveRequest>, AppError> {
        let now = Utc::now();
        let leave = self
            .repository
            .mutate(|data| {
                leave_service::review_leave_request(
                    data,
                    &request.leave_request_id,
                    request.status,
                    now,
                )
            })
            .await?;

        info!("📋 Solicitud de permiso {} → {}", leave.id, leave.status);
        Ok(ApiResponse::success_with_message(leave, "Leave request reviewed"))
    }

    pub async fn create_user(
        &self,
        request: CreateUserRequest,
    ) -> Result<ApiResponse<UserView>, AppError> {
        let user = self
            .repository
            .mutate(|data| fleet_admin_service::create_user(data, &request))
            .await?;

        info!("✅ Usuario creado: {}", user.id);
        Ok(ApiResponse::success_with_message(user, "User created"))
    }

    pub async fn create_driver(
        &self,
        request: CreateDriverRequest,
    ) -> Result<ApiResponse<DriverView>, AppError> {
        let driver = self
            .repository
            .mutate(|data| fleet_admin_service::create_driver(data, &request))
            .await?;

        info!("✅ Conductor creado: {}", driver.id);
        Ok(ApiResponse::success_with_message(driver, "Driver created"))
    }

    pub async fn create_car(&self, request: CreateCarRequest) -> Result<ApiResponse<Car>, AppError> {
        let car = self
            .repository
            .mutate(|data| fleet_admin_service::create_car(data, &request))
            .await?;

        info!("✅ Coche creado: {} ({})", car.id, car.reg_no);
        Ok(ApiResponse::success_with_message(car, "Car created"))
    }

    pub async fn stats(&self) -> Result<SystemStats, AppError> {
        self.repository
            .read(|data| Ok(data.system_stats.clone()))
            .await
    }
}
