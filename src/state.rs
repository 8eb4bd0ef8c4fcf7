//! Shared application state
//! 
//! Este módulo define el estado compartido de la aplicación que se pasa
//! a través del router de Axum.

use std::sync::Arc;

use crate::config::environment::EnvironmentConfig;
use crate::repositories::fleet_repository::FleetRepository;
use crate::services::booking_cooldown::BookingCooldown;
use crate::storage::FleetStore;

#[derive(Clone)]
pub struct AppState {
    pub repository: Arc<FleetRepository>,
    pub config: EnvironmentConfig,
    pub booking_cooldown: Arc<BookingCooldown>,
}

impl AppState {
    pub fn new(store: Arc<dyn FleetStore>, config: EnvironmentConfig) -> Self {
        log::info!(
            "⏱️ Enfriamiento de reservas: {} s",
            config.booking_cooldown_secs
        );
        Self {
            repository: Arc::new(FleetRepository::new(store)),
            booking_cooldown: Arc::new(BookingCooldown::new(config.booking_cooldown_secs)),
            config,
        }
    }
}
