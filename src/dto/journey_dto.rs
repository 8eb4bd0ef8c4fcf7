use serde::Deserialize;
use validator::Validate;

use crate::models::JourneyStatus;
use crate::utils::validation::validate_not_empty;

// Request de transporte de un usuario
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RequestJourneyRequest {
    #[validate(custom = "validate_not_empty")]
    pub user_id: String,
    #[validate(custom = "validate_not_empty")]
    pub destination: String,
    #[validate(custom = "validate_not_empty")]
    pub start_location: String,
    #[validate(range(max = 1440))]
    pub estimated_duration: Option<u32>,
    #[validate(range(min = 0.0))]
    pub distance: Option<f64>,
}

// Cancelación genérica y dropoff comparten forma
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct JourneyActionRequest {
    #[validate(custom = "validate_not_empty")]
    pub journey_id: String,
    #[validate(length(max = 500))]
    pub reason: Option<String>,
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct AddWaypointRequest {
    #[validate(custom = "validate_not_empty")]
    pub journey_id: String,
    #[validate(custom = "validate_not_empty")]
    pub new_waypoint: String,
    #[validate(length(max = 500))]
    pub reason: Option<String>,
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RemoveWaypointRequest {
    #[validate(custom = "validate_not_empty")]
    pub journey_id: String,
    #[validate(custom = "validate_not_empty")]
    pub waypoint: String,
    #[validate(length(max = 500))]
    pub reason: Option<String>,
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ChangeDestinationRequest {
    #[validate(custom = "validate_not_empty")]
    pub journey_id: String,
    #[validate(custom = "validate_not_empty")]
    pub new_destination: String,
    #[validate(length(max = 500))]
    pub reason: Option<String>,
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RateJourneyRequest {
    #[validate(custom = "validate_not_empty")]
    pub journey_id: String,
    #[validate(range(min = 1, max = 5))]
    pub rating: u8,
    pub user_id: Option<String>,
}

// Finalización desde el panel del conductor
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CompleteJourneyRequest {
    #[validate(custom = "validate_not_empty")]
    pub journey_id: String,
    #[validate(custom = "validate_not_empty")]
    pub driver_id: String,
    #[validate(range(min = 0.0))]
    pub distance: Option<f64>,
}

// Asignación de coche y conductor por el admin
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct AssignJourneyRequest {
    #[validate(custom = "validate_not_empty")]
    pub journey_id: String,
    #[validate(custom = "validate_not_empty")]
    pub car_id: String,
    #[validate(custom = "validate_not_empty")]
    pub driver_id: String,
}

// Filtros de listado de viajes
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JourneyFilters {
    pub user_id: Option<String>,
    pub driver_id: Option<String>,
    pub status: Option<JourneyStatus>,
}
