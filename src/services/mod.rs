//! Servicios del sistema
//! 
//! Reglas de negocio puras sobre `FleetData`. Ningún servicio toca el disco;
//! las llamadas van siempre dentro de `FleetRepository::mutate` o `read`.

pub mod auth_service;
pub mod booking_cooldown;
pub mod fleet_admin_service;
pub mod journey_service;
pub mod leave_service;
pub mod stats_service;
