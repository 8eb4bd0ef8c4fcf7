//! Modelo de User
//! 
//! Usuarios de la plataforma (administradores y clientes que piden viajes).

use serde::{Deserialize, Serialize};

/// Rol de un usuario registrado en `users`
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Admin,
    #[default]
    User,
}

/// Distancia acumulada por ventana temporal
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DistanceSummary {
    #[serde(default)]
    pub today: f64,
    #[serde(default)]
    pub week: f64,
    #[serde(default)]
    pub month: f64,
    #[serde(default)]
    pub total: f64,
}

impl DistanceSummary {
    pub fn add(&mut self, distance: f64) {
        self.today += distance;
        self.week += distance;
        self.month += distance;
        self.total += distance;
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub password: String,
    #[serde(default)]
    pub role: UserRole,
    #[serde(default = "default_active")]
    pub is_active: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default)]
    pub total_distance: DistanceSummary,
}

fn default_active() -> bool {
    true
}

/// Vista de usuario sin contraseña
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserView {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: UserRole,
    pub is_active: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub total_distance: DistanceSummary,
}

impl From<&User> for UserView {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.clone(),
            name: user.name.clone(),
            email: user.email.clone(),
            role: user.role,
            is_active: user.is_active,
            phone: user.phone.clone(),
            total_distance: user.total_distance.clone(),
        }
    }
}
