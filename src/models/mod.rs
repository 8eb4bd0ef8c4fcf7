//! Modelos del sistema
//! 
//! Este módulo contiene todas las entidades de flota tal y como se persisten
//! en el fichero JSON compartido (camelCase en disco).

pub mod car;
pub mod driver;
pub mod fleet_data;
pub mod journey;
pub mod leave_request;
pub mod location;
pub mod stats;
pub mod user;

pub use car::*;
pub use driver::*;
pub use fleet_data::*;
pub use journey::*;
pub use leave_request::*;
pub use location::*;
pub use stats::*;
pub use user::*;
