//! Agregado FleetData
//!
//! Todo el estado del sistema vive en este único documento JSON. Las búsquedas
//! son lineales por `id`; el tamaño del dataset es de demo.

use serde::{Deserialize, Serialize};

use super::{
    Car, Driver, DriverView, Journey, JourneyStatus, LeaveRequest, Location, SystemStats, User,
    UserView,
};
use crate::utils::errors::{not_found_error, AppResult};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FleetData {
    pub users: Vec<User>,
    pub drivers: Vec<Driver>,
    pub cars: Vec<Car>,
    pub locations: Vec<Location>,
    pub journeys: Vec<Journey>,
    pub leave_requests: Vec<LeaveRequest>,
    pub system_stats: SystemStats,
}

impl FleetData {
    pub fn user_index(&self, id: &str) -> AppResult<usize> {
        self.users
            .iter()
            .position(|u| u.id == id)
            .ok_or_else(|| not_found_error("User", id))
    }

    pub fn driver_index(&self, id: &str) -> AppResult<usize> {
        self.drivers
            .iter()
            .position(|d| d.id == id)
            .ok_or_else(|| not_found_error("Driver", id))
    }

    pub fn car_index(&self, id: &str) -> AppResult<usize> {
        self.cars
            .iter()
            .position(|c| c.id == id)
            .ok_or_else(|| not_found_error("Car", id))
    }

    pub fn journey_index(&self, id: &str) -> AppResult<usize> {
        self.journeys
            .iter()
            .position(|j| j.id == id)
            .ok_or_else(|| not_found_error("Journey", id))
    }

    pub fn leave_request_index(&self, id: &str) -> AppResult<usize> {
        self.leave_requests
            .iter()
            .position(|l| l.id == id)
            .ok_or_else(|| not_found_error("Leave request", id))
    }

    pub fn journey(&self, id: &str) -> AppResult<&Journey> {
        let index = self.journey_index(id)?;
        Ok(&self.journeys[index])
    }

    /// Viajes de un usuario en estado `requested`
    pub fn pending_journeys_for<'a>(&'a self, user_id: &'a str) -> impl Iterator<Item = &'a Journey> {
        self.journeys
            .iter()
            .filter(move |j| j.user_id == user_id && j.status == JourneyStatus::Requested)
    }

    /// Email ya registrado como usuario o conductor (sin distinguir mayúsculas)
    pub fn email_taken(&self, email: &str) -> bool {
        self.users.iter().any(|u| u.email.eq_ignore_ascii_case(email))
            || self.drivers.iter().any(|d| d.email.eq_ignore_ascii_case(email))
    }
}

/// Instantánea sin contraseñas que se devuelve por `GET /api/data`
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FleetSnapshot {
    pub users: Vec<UserView>,
    pub drivers: Vec<DriverView>,
    pub cars: Vec<Car>,
    pub locations: Vec<Location>,
    pub journeys: Vec<Journey>,
    pub leave_requests: Vec<LeaveRequest>,
    pub system_stats: SystemStats,
}

impl From<FleetData> for FleetSnapshot {
    fn from(data: FleetData) -> Self {
        Self {
            users: data.users.iter().map(UserView::from).collect(),
            drivers: data.drivers.iter().map(DriverView::from).collect(),
            cars: data.cars,
            locations: data.locations,
            journeys: data.journeys,
            leave_requests: data.leave_requests,
            system_stats: data.system_stats,
        }
    }
}
