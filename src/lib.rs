//! FleetPro backend
//!
//! API REST de gestión de flota sobre un único fichero JSON compartido:
//! usuarios, conductores, coches, viajes y solicitudes de permiso.

pub mod config;
pub mod controllers;
pub mod dto;
pub mod middleware;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;
pub mod state;
pub mod storage;
pub mod utils;

use axum::Router;
use std::time::Duration;
use tower_http::{compression::CompressionLayer, trace::TraceLayer};

use middleware::{catch_panic_middleware, cors_middleware, with_request_timeout};
use state::AppState;

/// Crear el router principal de la API
pub fn create_app(state: AppState) -> Router {
    let cors = cors_middleware(&state.config.cors_origins);
    let timeout = Duration::from_secs(state.config.request_timeout_secs);

    let api = Router::new()
        .merge(routes::data_routes::create_data_router())
        .nest("/auth", routes::auth_routes::create_auth_router())
        .nest("/journeys", routes::journey_routes::create_journey_router())
        .nest("/driver", routes::driver_routes::create_driver_router())
        .nest("/admin", routes::admin_routes::create_admin_router());

    with_request_timeout(Router::new().nest("/api", api), timeout)
        .layer(catch_panic_middleware())
        .layer(CompressionLayer::new())
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
