use std::sync::Arc;

use crate::models::FleetSnapshot;
use crate::repositories::fleet_repository::FleetRepository;
use crate::state::AppState;
use crate::utils::errors::AppError;

/// Instantánea completa para los dashboards
pub struct DataController {
    repository: Arc<FleetRepository>,
}

impl DataController {
    pub fn new(state: &AppState) -> Self {
        Self {
            repository: state.repository.clone(),
        }
    }

    pub async fn snapshot(&self) -> Result<FleetSnapshot, AppError> {
        self.repository.snapshot().await
    }
}
