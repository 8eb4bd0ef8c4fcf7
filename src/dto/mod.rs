pub mod admin_dto;
pub mod api_response;
pub mod auth_dto;
pub mod journey_dto;
pub mod leave_dto;
