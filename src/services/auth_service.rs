//! Login por comparación directa de credenciales
//!
//! No hay sesiones ni tokens: el cliente guarda la cuenta devuelta.

use crate::dto::auth_dto::{AccountRole, AccountView, LoginResponse};
use crate::models::{DriverView, FleetData, UserRole, UserView};
use crate::utils::errors::{forbidden_error, AppError, AppResult};

pub fn login(data: &FleetData, email: &str, password: &str) -> AppResult<LoginResponse> {
    let email = email.trim();

    if let Some(user) = data
        .users
        .iter()
        .find(|u| u.email.eq_ignore_ascii_case(email) && u.password == password)
    {
        if !user.is_active {
            return Err(forbidden_error("log in", "account is inactive"));
        }
        let role = match user.role {
            UserRole::Admin => AccountRole::Admin,
            UserRole::User => AccountRole::User,
        };
        return Ok(LoginResponse {
            role,
            account: AccountView::User(UserView::from(user)),
        });
    }

    if let Some(driver) = data
        .drivers
        .iter()
        .find(|d| d.email.eq_ignore_ascii_case(email) && d.password == password)
    {
        if !driver.is_active {
            return Err(forbidden_error("log in", "account is inactive"));
        }
        return Ok(LoginResponse {
            role: AccountRole::Driver,
            account: AccountView::Driver(DriverView::from(driver)),
        });
    }

    Err(AppError::Unauthorized("Invalid email or password".to_string()))
}
