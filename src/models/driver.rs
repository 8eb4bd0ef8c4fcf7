//! Modelo de Driver

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Driver {
    pub id: String,
    pub name: String,
    pub email: String,
    pub password: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub license_no: String,
    #[serde(default = "default_active")]
    pub is_active: bool,
    #[serde(default)]
    pub on_leave: bool,
    #[serde(default)]
    pub salary: f64,
    #[serde(default)]
    pub total_leave: u32,
    #[serde(default)]
    pub remaining_leave: u32,
    #[serde(default)]
    pub current_location: String,
    #[serde(default)]
    pub total_travelled_distance: f64,
}

fn default_active() -> bool {
    true
}

/// Vista de conductor sin contraseña
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DriverView {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub license_no: String,
    pub is_active: bool,
    pub on_leave: bool,
    pub salary: f64,
    pub total_leave: u32,
    pub remaining_leave: u32,
    pub current_location: String,
    pub total_travelled_distance: f64,
}

impl From<&Driver> for DriverView {
    fn from(driver: &Driver) -> Self {
        Self {
            id: driver.id.clone(),
            name: driver.name.clone(),
            email: driver.email.clone(),
            phone: driver.phone.clone(),
            license_no: driver.license_no.clone(),
            is_active: driver.is_active,
            on_leave: driver.on_leave,
            salary: driver.salary,
            total_leave: driver.total_leave,
            remaining_leave: driver.remaining_leave,
            current_location: driver.current_location.clone(),
            total_travelled_distance: driver.total_travelled_distance,
        }
    }
}
