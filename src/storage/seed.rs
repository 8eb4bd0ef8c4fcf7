//! Datos de demostración
//!
//! Se escriben al arrancar cuando el fichero de datos no existe y
//! `SEED_DEMO_DATA` está activo. Las contraseñas van en claro: el login es una
//! comparación directa.

use chrono::{NaiveDate, TimeZone, Utc};

use crate::models::{
    Car, CarStatus, DistanceSummary, Driver, FleetData, LeaveRequest, LeaveStatus, Location, User,
    UserRole,
};
use crate::services::stats_service::compute_stats;

pub fn demo_fleet_data() -> FleetData {
    let users = vec![
        User {
            id: "admin1".to_string(),
            name: "Fleet Admin".to_string(),
            email: "admin@fleetpro.com".to_string(),
            password: "admin123".to_string(),
            role: UserRole::Admin,
            is_active: true,
            phone: None,
            total_distance: DistanceSummary::default(),
        },
        User {
            id: "u1".to_string(),
            name: "Priya Sharma".to_string(),
            email: "priya@fleetpro.com".to_string(),
            password: "user123".to_string(),
            role: UserRole::User,
            is_active: true,
            phone: Some("+91 98450 11111".to_string()),
            total_distance: DistanceSummary {
                today: 12.0,
                week: 58.5,
                month: 240.0,
                total: 1890.0,
            },
        },
        User {
            id: "u2".to_string(),
            name: "Rahul Verma".to_string(),
            email: "rahul@fleetpro.com".to_string(),
            password: "user123".to_string(),
            role: UserRole::User,
            is_active: true,
            phone: Some("+91 98450 22222".to_string()),
            total_distance: DistanceSummary {
                today: 0.0,
                week: 21.0,
                month: 96.5,
                total: 640.0,
            },
        },
    ];

    let drivers = vec![
        Driver {
            id: "driver1".to_string(),
            name: "Arjun Singh".to_string(),
            email: "arjun@fleetpro.com".to_string(),
            password: "driver123".to_string(),
            phone: "+91 98450 33333".to_string(),
            license_no: "KA0120190001234".to_string(),
            is_active: true,
            on_leave: false,
            salary: 32000.0,
            total_leave: 24,
            remaining_leave: 18,
            current_location: "Head Office".to_string(),
            total_travelled_distance: 15420.0,
        },
        Driver {
            id: "driver2".to_string(),
            name: "Meera Nair".to_string(),
            email: "meera@fleetpro.com".to_string(),
            password: "driver123".to_string(),
            phone: "+91 98450 44444".to_string(),
            license_no: "KA0520180005678".to_string(),
            is_active: true,
            on_leave: true,
            salary: 34000.0,
            total_leave: 24,
            remaining_leave: 9,
            current_location: "Home".to_string(),
            total_travelled_distance: 22875.0,
        },
    ];

    let cars = vec![
        car("car1", "Toyota Innova Crysta", "KA-01-AB-1234", CarStatus::Available),
        car("car2", "Maruti Suzuki Ertiga", "KA-05-CD-5678", CarStatus::Servicing),
        car("car3", "Hyundai Aura", "KA-03-EF-9012", CarStatus::Available),
    ];

    let locations = vec![
        location("loc1", "Head Office", "MG Road, Bengaluru", 12.9756, 77.6050),
        location("loc2", "Airport", "Kempegowda International Airport", 13.1986, 77.7066),
        location("loc3", "Tech Park", "Whitefield, Bengaluru", 12.9698, 77.7499),
    ];

    let leave_requests = vec![LeaveRequest {
        id: "leave1".to_string(),
        driver_id: "driver2".to_string(),
        start_date: NaiveDate::from_ymd_opt(2024, 6, 10).unwrap_or_default(),
        end_date: NaiveDate::from_ymd_opt(2024, 6, 14).unwrap_or_default(),
        reason: "Family function".to_string(),
        status: LeaveStatus::Approved,
        submitted_at: Utc
            .with_ymd_and_hms(2024, 6, 1, 9, 30, 0)
            .single()
            .unwrap_or_else(Utc::now),
        reviewed_at: None,
    }];

    let mut data = FleetData {
        users,
        drivers,
        cars,
        locations,
        journeys: Vec::new(),
        leave_requests,
        system_stats: Default::default(),
    };
    data.system_stats = compute_stats(&data);
    data
}

fn car(id: &str, model: &str, reg_no: &str, status: CarStatus) -> Car {
    Car {
        id: id.to_string(),
        model: model.to_string(),
        reg_no: reg_no.to_string(),
        drivers: Vec::new(),
        users: Vec::new(),
        status,
        is_clean: true,
        needs_servicing: status == CarStatus::Servicing,
        total_distance_travelled: 0.0,
        current_location: "Head Office".to_string(),
    }
}

fn location(id: &str, name: &str, address: &str, latitude: f64, longitude: f64) -> Location {
    Location {
        id: id.to_string(),
        name: name.to_string(),
        address: address.to_string(),
        latitude,
        longitude,
    }
}
