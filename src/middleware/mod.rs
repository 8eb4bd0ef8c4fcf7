//! Middleware del sistema
//! 
//! Este módulo contiene las capas transversales del router: CORS, captura
//! de pánicos y límite de tiempo por petición.

pub mod cors;
pub mod panic;
pub mod timeout;

pub use cors::*;
pub use panic::*;
pub use timeout::*;
