use serde::Deserialize;
use validator::Validate;

use crate::models::{CarStatus, UserRole};
use crate::utils::validation::{validate_license_plate, validate_not_empty};

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCarStatusRequest {
    #[validate(custom = "validate_not_empty")]
    pub car_id: String,
    pub status: CarStatus,
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateDriverStatusRequest {
    #[validate(custom = "validate_not_empty")]
    pub driver_id: String,
    pub on_leave: bool,
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserStatusRequest {
    #[validate(custom = "validate_not_empty")]
    pub user_id: String,
    pub is_active: bool,
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct DeclineJourneyRequest {
    #[validate(custom = "validate_not_empty")]
    pub journey_id: String,
    #[validate(length(max = 500))]
    pub reason: Option<String>,
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
    #[validate(custom = "validate_not_empty", length(max = 100))]
    pub name: String,
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 6, max = 128))]
    pub password: String,
    pub role: Option<UserRole>,
    #[validate(length(min = 7, max = 20))]
    pub phone: Option<String>,
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateDriverRequest {
    #[validate(custom = "validate_not_empty", length(max = 100))]
    pub name: String,
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 6, max = 128))]
    pub password: String,
    #[validate(length(min = 7, max = 20))]
    pub phone: String,
    #[validate(length(min = 5, max = 20))]
    pub license_no: String,
    #[validate(range(min = 0.0))]
    pub salary: Option<f64>,
    #[validate(range(max = 365))]
    pub total_leave: Option<u32>,
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateCarRequest {
    #[validate(custom = "validate_not_empty", length(max = 100))]
    pub model: String,
    #[validate(custom = "validate_license_plate")]
    pub reg_no: String,
    pub current_location: Option<String>,
}
