//! Modelo de Car
//! 
//! El estado del coche solo pasa a `in-use` al asignarse a un viaje; el
//! retorno a `available` o `servicing` es siempre una acción explícita del admin.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum CarStatus {
    Available,
    InUse,
    Servicing,
    Cleaning,
}

impl fmt::Display for CarStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            CarStatus::Available => "available",
            CarStatus::InUse => "in-use",
            CarStatus::Servicing => "servicing",
            CarStatus::Cleaning => "cleaning",
        };
        f.write_str(value)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Car {
    pub id: String,
    pub model: String,
    pub reg_no: String,
    #[serde(default)]
    pub drivers: Vec<String>,
    #[serde(default)]
    pub users: Vec<String>,
    pub status: CarStatus,
    #[serde(default = "default_clean")]
    pub is_clean: bool,
    #[serde(default)]
    pub needs_servicing: bool,
    #[serde(default)]
    pub total_distance_travelled: f64,
    #[serde(default)]
    pub current_location: String,
}

fn default_clean() -> bool {
    true
}

impl Car {
    pub fn is_available(&self) -> bool {
        self.status == CarStatus::Available
    }
}
