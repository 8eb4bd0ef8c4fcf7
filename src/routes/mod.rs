pub mod admin_routes;
pub mod auth_routes;
pub mod data_routes;
pub mod driver_routes;
pub mod journey_routes;
