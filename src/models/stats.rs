use serde::{Deserialize, Serialize};

/// Agregados del sistema, recalculados tras cada mutación
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct SystemStats {
    pub total_users: usize,
    pub total_drivers: usize,
    pub total_cars: usize,
    pub pending_requests: usize,
    pub active_journeys: usize,
    pub completed_journeys: usize,
    pub available_cars: usize,
    pub drivers_on_leave: usize,
    pub monthly_distance: f64,
}
