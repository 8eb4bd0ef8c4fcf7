//! Registro de solicitudes de permiso
//!
//! Las solicitudes son informativas: aprobar o rechazar no toca
//! `Driver.on_leave`, que sigue siendo un interruptor independiente del admin.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::dto::leave_dto::SubmitLeaveRequest;
use crate::models::{FleetData, LeaveRequest, LeaveStatus};
use crate::utils::errors::{validation_error, AppError, AppResult};
use crate::utils::validation::validate_date;

pub fn submit_leave_request(
    data: &mut FleetData,
    request: &SubmitLeaveRequest,
    now: DateTime<Utc>,
) -> AppResult<LeaveRequest> {
    let driver_index = data.driver_index(&request.driver_id)?;

    let start_date = validate_date(&request.start_date)
        .map_err(|_| validation_error("startDate", "startDate must be YYYY-MM-DD"))?;
    let end_date = validate_date(&request.end_date)
        .map_err(|_| validation_error("endDate", "endDate must be YYYY-MM-DD"))?;
    if end_date < start_date {
        return Err(validation_error("endDate", "endDate must not be before startDate"));
    }

    let leave = LeaveRequest {
        id: Uuid::new_v4().to_string(),
        driver_id: data.drivers[driver_index].id.clone(),
        start_date,
        end_date,
        reason: request.reason.trim().to_string(),
        status: LeaveStatus::Pending,
        submitted_at: now,
        reviewed_at: None,
    };
    data.leave_requests.push(leave.clone());
    Ok(leave)
}

/// Aprobar o rechazar una solicitud pendiente
pub fn review_leave_request(
    data: &mut FleetData,
    leave_request_id: &str,
    status: LeaveStatus,
    now: DateTime<Utc>,
) -> AppResult<LeaveRequest> {
    if status == LeaveStatus::Pending {
        return Err(validation_error("status", "status must be approved or rejected"));
    }

    let index = data.leave_request_index(leave_request_id)?;
    let leave = &mut data.leave_requests[index];
    if leave.status != LeaveStatus::Pending {
        return Err(AppError::InvalidState(format!(
            "Leave request '{}' is already {}",
            leave.id, leave.status
        )));
    }

    leave.status = status;
    leave.reviewed_at = Some(now);
    Ok(leave.clone())
}

pub fn leave_requests_for(data: &FleetData, driver_id: &str) -> AppResult<Vec<LeaveRequest>> {
    data.driver_index(driver_id)?;
    let mut requests: Vec<LeaveRequest> = data
        .leave_requests
        .iter()
        .filter(|l| l.driver_id == driver_id)
        .cloned()
        .collect();
    requests.sort_by(|a, b| b.submitted_at.cmp(&a.submitted_at));
    Ok(requests)
}
