pub mod admin_controller;
pub mod auth_controller;
pub mod data_controller;
pub mod driver_controller;
pub mod journey_controller;
