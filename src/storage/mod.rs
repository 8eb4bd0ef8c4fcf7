//! Módulo de persistencia
//! 
//! Maneja la lectura y escritura del fichero JSON que contiene toda la flota.

pub mod json_store;
pub mod seed;

pub use json_store::{FleetStore, JsonFileStore};
