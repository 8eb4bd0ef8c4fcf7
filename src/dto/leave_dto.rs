use serde::Deserialize;
use validator::Validate;

use crate::models::LeaveStatus;
use crate::utils::validation::validate_not_empty;

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SubmitLeaveRequest {
    #[validate(custom = "validate_not_empty")]
    pub driver_id: String,
    pub start_date: String,
    pub end_date: String,
    #[validate(custom = "validate_not_empty", length(max = 500))]
    pub reason: String,
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ReviewLeaveRequest {
    #[validate(custom = "validate_not_empty")]
    pub leave_request_id: String,
    pub status: LeaveStatus,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaveFilters {
    pub driver_id: String,
}
