//! Recalculo de estadísticas
//!
//! Función pura sobre el agregado completo; no hay actualización incremental.

use crate::models::{CarStatus, FleetData, JourneyStatus, SystemStats};

pub fn compute_stats(data: &FleetData) -> SystemStats {
    let count_journeys =
        |status: JourneyStatus| data.journeys.iter().filter(|j| j.status == status).count();

    SystemStats {
        total_users: data.users.len(),
        total_drivers: data.drivers.len(),
        total_cars: data.cars.len(),
        pending_requests: count_journeys(JourneyStatus::Requested),
        active_journeys: count_journeys(JourneyStatus::InProgress),
        completed_journeys: count_journeys(JourneyStatus::Completed),
        available_cars: data
            .cars
            .iter()
            .filter(|c| c.status == CarStatus::Available)
            .count(),
        drivers_on_leave: data.drivers.iter().filter(|d| d.on_leave).count(),
        monthly_distance: data.users.iter().map(|u| u.total_distance.month).sum(),
    }
}
