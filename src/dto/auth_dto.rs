use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::{DriverView, UserView};

// Login request
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 1))]
    pub password: String,
}

/// Rol con el que entra la cuenta; decide el dashboard del cliente
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum AccountRole {
    Admin,
    User,
    Driver,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum AccountView {
    User(UserView),
    Driver(DriverView),
}

// Login response
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub role: AccountRole,
    pub account: AccountView,
}
