//! Administración de la flota
//!
//! Altas de usuarios, conductores y coches con control de duplicados, y los
//! cambios de estado directos del panel de admin (sin validar transiciones).

use uuid::Uuid;

use crate::dto::admin_dto::{CreateCarRequest, CreateDriverRequest, CreateUserRequest};
use crate::models::{
    Car, CarStatus, DistanceSummary, Driver, DriverView, FleetData, User, UserRole, UserView,
};
use crate::utils::errors::{conflict_error, AppResult};

pub fn create_user(data: &mut FleetData, request: &CreateUserRequest) -> AppResult<UserView> {
    let email = request.email.trim().to_lowercase();
    if data.email_taken(&email) {
        return Err(conflict_error("Account", "email", &email));
    }

    let user = User {
        id: Uuid::new_v4().to_string(),
        name: request.name.trim().to_string(),
        email,
        password: request.password.clone(),
        role: request.role.unwrap_or(UserRole::User),
        is_active: true,
        phone: request.phone.clone(),
        total_distance: DistanceSummary::default(),
    };
    let view = UserView::from(&user);
    data.users.push(user);
    Ok(view)
}

pub fn create_driver(data: &mut FleetData, request: &CreateDriverRequest) -> AppResult<DriverView> {
    let email = request.email.trim().to_lowercase();
    if data.email_taken(&email) {
        return Err(conflict_error("Account", "email", &email));
    }
    let license_no = request.license_no.trim().to_uppercase();
    if data
        .drivers
        .iter()
        .any(|d| d.license_no.eq_ignore_ascii_case(&license_no))
    {
        return Err(conflict_error("Driver", "license number", &license_no));
    }

    let total_leave = request.total_leave.unwrap_or(24);
    let driver = Driver {
        id: Uuid::new_v4().to_string(),
        name: request.name.trim().to_string(),
        email,
        password: request.password.clone(),
        phone: request.phone.trim().to_string(),
        license_no,
        is_active: true,
        on_leave: false,
        salary: request.salary.unwrap_or(0.0),
        total_leave,
        remaining_leave: total_leave,
        current_location: String::new(),
        total_travelled_distance: 0.0,
    };
    let view = DriverView::from(&driver);
    data.drivers.push(driver);
    Ok(view)
}

pub fn create_car(data: &mut FleetData, request: &CreateCarRequest) -> AppResult<Car> {
    let reg_no = request.reg_no.trim().to_uppercase();
    if data.cars.iter().any(|c| c.reg_no.eq_ignore_ascii_case(&reg_no)) {
        return Err(conflict_error("Car", "registration number", &reg_no));
    }

    let car = Car {
        id: Uuid::new_v4().to_string(),
        model: request.model.trim().to_string(),
        reg_no,
        drivers: Vec::new(),
        users: Vec::new(),
        status: CarStatus::Available,
        is_clean: true,
        needs_servicing: false,
        total_distance_travelled: 0.0,
        current_location: request.current_location.clone().unwrap_or_default(),
    };
    data.cars.push(car.clone());
    Ok(car)
}

/// Sobrescribe el estado del coche; `servicing` y `cleaning` ajustan los flags
pub fn set_car_status(data: &mut FleetData, car_id: &str, status: CarStatus) -> AppResult<Car> {
    let index = data.car_index(car_id)?;
    let car = &mut data.cars[index];
    car.status = status;
    match status {
        CarStatus::Servicing => car.needs_servicing = true,
        CarStatus::Cleaning => car.is_clean = false,
        CarStatus::Available => {
            car.needs_servicing = false;
            car.is_clean = true;
        }
        CarStatus::InUse => {}
    }
    Ok(car.clone())
}

pub fn set_driver_on_leave(
    data: &mut FleetData,
    driver_id: &str,
    on_leave: bool,
) -> AppResult<DriverView> {
    let index = data.driver_index(driver_id)?;
    data.drivers[index].on_leave = on_leave;
    Ok(DriverView::from(&data.drivers[index]))
}

pub fn set_user_active(data: &mut FleetData, user_id: &str, is_active: bool) -> AppResult<UserView> {
    let index = data.user_index(user_id)?;
    data.users[index].is_active = is_active;
    Ok(UserView::from(&data.users[index]))
}
