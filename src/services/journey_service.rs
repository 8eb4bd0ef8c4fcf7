//! Ciclo de vida de los viajes
//!
//! Funciones puras sobre `FleetData`: validan la transición, aplican el cambio
//! sobre el grafo cargado y devuelven el viaje resultante. Si una precondición
//! falla no se toca nada, así `FleetRepository::mutate` no escribe el fichero.
//!
//! Completar o cancelar un viaje no libera el coche; volver a `available` es
//! siempre una acción del admin.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::dto::journey_dto::{JourneyFilters, RequestJourneyRequest};
use crate::models::{CarStatus, FleetData, Journey, JourneyStatus, RouteChange, RouteChangeKind};
use crate::services::booking_cooldown::BookingCooldown;
use crate::utils::errors::{forbidden_error, AppError, AppResult};

/// Verbo usado en los mensajes de error de cada transición
fn action_name(next: JourneyStatus) -> &'static str {
    match next {
        JourneyStatus::Requested => "request",
        JourneyStatus::InProgress => "start",
        JourneyStatus::Completed => "complete",
        JourneyStatus::Cancelled => "cancel",
    }
}

fn ensure_transition(journey: &Journey, next: JourneyStatus) -> AppResult<()> {
    if journey.status.can_transition_to(next) {
        return Ok(());
    }
    Err(AppError::InvalidState(format!(
        "cannot {} a {} journey",
        action_name(next),
        journey.status
    )))
}

fn ensure_in_progress(journey: &Journey, action: &str) -> AppResult<()> {
    if journey.status == JourneyStatus::InProgress {
        return Ok(());
    }
    Err(AppError::InvalidState(format!(
        "cannot {} on a {} journey; it must be in-progress",
        action, journey.status
    )))
}

/// Crear un viaje `requested` para el usuario
///
/// Orden de comprobaciones: usuario existe, está activo, no tiene otro viaje
/// pendiente (`Conflict`) y no está en periodo de enfriamiento.
pub fn request_journey(
    data: &mut FleetData,
    cooldown: &BookingCooldown,
    request: &RequestJourneyRequest,
    now: DateTime<Utc>,
) -> AppResult<Journey> {
    let user_index = data.user_index(&request.user_id)?;
    let user = &data.users[user_index];

    if !user.is_active {
        return Err(forbidden_error("request journey", "user account is inactive"));
    }

    if let Some(pending) = data.pending_journeys_for(&user.id).next() {
        return Err(AppError::Conflict(format!(
            "User '{}' already has a pending journey request ('{}')",
            user.id, pending.id
        )));
    }

    cooldown.check(&user.id, now)?;

    let journey = Journey {
        id: Uuid::new_v4().to_string(),
        car_id: String::new(),
        driver_id: String::new(),
        user_id: user.id.clone(),
        user_name: user.name.clone(),
        driver_name: String::new(),
        car_model: String::new(),
        start_location: request.start_location.trim().to_string(),
        end_location: request.destination.trim().to_string(),
        waypoints: Vec::new(),
        status: JourneyStatus::Requested,
        start_time: now,
        end_time: None,
        distance: request.distance.unwrap_or(0.0),
        rating: None,
        route_changes: Vec::new(),
        estimated_duration: request.estimated_duration.unwrap_or(0),
        cancellation_reason: None,
    };

    data.journeys.push(journey.clone());
    Ok(journey)
}

/// Asignar coche y conductor: `requested → in-progress`
pub fn assign_journey(
    data: &mut FleetData,
    journey_id: &str,
    car_id: &str,
    driver_id: &str,
) -> AppResult<Journey> {
    let journey_index = data.journey_index(journey_id)?;
    let car_index = data.car_index(car_id)?;
    let driver_index = data.driver_index(driver_id)?;

    let journey = &data.journeys[journey_index];
    if journey.status != JourneyStatus::Requested {
        return Err(AppError::InvalidState(format!(
            "Journey '{}' is {}; only requested journeys can be assigned",
            journey.id, journey.status
        )));
    }

    let car = &data.cars[car_index];
    if !car.is_available() {
        return Err(AppError::ResourceUnavailable(format!(
            "Car '{}' is not available (status: {})",
            car.id, car.status
        )));
    }

    let driver = &data.drivers[driver_index];
    if driver.on_leave {
        return Err(AppError::ResourceUnavailable(format!(
            "Driver '{}' is on leave",
            driver.id
        )));
    }

    let driver_name = driver.name.clone();
    let car_model = data.cars[car_index].model.clone();

    data.cars[car_index].status = CarStatus::InUse;

    let journey = &mut data.journeys[journey_index];
    journey.car_id = car_id.to_string();
    journey.driver_id = driver_id.to_string();
    journey.driver_name = driver_name;
    journey.car_model = car_model;
    journey.status = JourneyStatus::InProgress;

    Ok(journey.clone())
}

/// Rechazo del admin: solo desde `requested`
pub fn decline_journey(
    data: &mut FleetData,
    journey_id: &str,
    reason: Option<&str>,
    now: DateTime<Utc>,
) -> AppResult<Journey> {
    let index = data.journey_index(journey_id)?;
    let journey = &mut data.journeys[index];

    if journey.status != JourneyStatus::Requested {
        return Err(AppError::InvalidState(format!(
            "cannot decline a {} journey; only requested journeys can be declined",
            journey.status
        )));
    }

    mark_cancelled(journey, reason, now);
    Ok(journey.clone())
}

/// Cancelación genérica (usuario o admin): cualquier estado no terminal
pub fn cancel_journey(
    data: &mut FleetData,
    journey_id: &str,
    reason: Option<&str>,
    now: DateTime<Utc>,
) -> AppResult<Journey> {
    let index = data.journey_index(journey_id)?;
    let journey = &mut data.journeys[index];

    ensure_transition(journey, JourneyStatus::Cancelled)?;
    mark_cancelled(journey, reason, now);
    Ok(journey.clone())
}

fn mark_cancelled(journey: &mut Journey, reason: Option<&str>, now: DateTime<Utc>) {
    journey.status = JourneyStatus::Cancelled;
    journey.end_time = Some(now);
    journey.cancellation_reason = reason
        .map(str::trim)
        .filter(|r| !r.is_empty())
        .map(str::to_string);
}

/// `in-progress → completed`
///
/// Con `driver_id` solo el conductor asignado puede cerrar el viaje. Con
/// `distance` se sustituye la distancia estimada por la real. La distancia
/// final se suma al usuario, al conductor y al coche.
pub fn complete_journey(
    data: &mut FleetData,
    journey_id: &str,
    driver_id: Option<&str>,
    distance: Option<f64>,
    now: DateTime<Utc>,
) -> AppResult<Journey> {
    let index = data.journey_index(journey_id)?;
    let journey = &data.journeys[index];

    ensure_transition(journey, JourneyStatus::Completed)?;
    if let Some(driver_id) = driver_id {
        if journey.driver_id != driver_id {
            return Err(forbidden_error(
                "complete journey",
                "driver is not assigned to this journey",
            ));
        }
    }

    let journey = &mut data.journeys[index];
    journey.status = JourneyStatus::Completed;
    journey.end_time = Some(now);
    if let Some(distance) = distance {
        journey.distance = distance;
    }
    let completed = journey.clone();

    if completed.distance > 0.0 {
        if let Some(user) = data.users.iter_mut().find(|u| u.id == completed.user_id) {
            user.total_distance.add(completed.distance);
        }
        if let Some(driver) = data.drivers.iter_mut().find(|d| d.id == completed.driver_id) {
            driver.total_travelled_distance += completed.distance;
        }
        if let Some(car) = data.cars.iter_mut().find(|c| c.id == completed.car_id) {
            car.total_distance_travelled += completed.distance;
        }
    }

    Ok(completed)
}

/// Añadir una parada a un viaje en curso
pub fn add_waypoint(
    data: &mut FleetData,
    journey_id: &str,
    waypoint: &str,
    reason: Option<&str>,
    now: DateTime<Utc>,
) -> AppResult<Journey> {
    let index = data.journey_index(journey_id)?;
    let journey = &mut data.journeys[index];
    ensure_in_progress(journey, "change the route")?;

    let waypoint = waypoint.trim().to_string();
    journey.waypoints.push(waypoint.clone());
    journey.route_changes.push(RouteChange {
        kind: RouteChangeKind::WaypointAdded,
        timestamp: now,
        waypoint: Some(waypoint),
        previous_destination: None,
        new_destination: None,
        reason: reason.map(str::to_string),
    });
    Ok(journey.clone())
}

/// Quitar una parada existente de un viaje en curso
pub fn remove_waypoint(
    data: &mut FleetData,
    journey_id: &str,
    waypoint: &str,
    reason: Option<&str>,
    now: DateTime<Utc>,
) -> AppResult<Journey> {
    let index = data.journey_index(journey_id)?;
    let journey = &mut data.journeys[index];
    ensure_in_progress(journey, "change the route")?;

    let waypoint = waypoint.trim();
    let position = journey
        .waypoints
        .iter()
        .position(|w| w == waypoint)
        .ok_or_else(|| {
            AppError::NotFound(format!(
                "Waypoint '{}' is not part of journey '{}'",
                waypoint, journey.id
            ))
        })?;

    let removed = journey.waypoints.remove(position);
    journey.route_changes.push(RouteChange {
        kind: RouteChangeKind::WaypointRemoved,
        timestamp: now,
        waypoint: Some(removed),
        previous_destination: None,
        new_destination: None,
        reason: reason.map(str::to_string),
    });
    Ok(journey.clone())
}

/// Cambiar el destino de un viaje en curso
pub fn change_destination(
    data: &mut FleetData,
    journey_id: &str,
    new_destination: &str,
    reason: Option<&str>,
    now: DateTime<Utc>,
) -> AppResult<Journey> {
    let index = data.journey_index(journey_id)?;
    let journey = &mut data.journeys[index];
    ensure_in_progress(journey, "change the destination")?;

    let new_destination = new_destination.trim().to_string();
    let previous = std::mem::replace(&mut journey.end_location, new_destination.clone());
    journey.route_changes.push(RouteChange {
        kind: RouteChangeKind::DestinationChanged,
        timestamp: now,
        waypoint: None,
        previous_destination: Some(previous),
        new_destination: Some(new_destination),
        reason: reason.map(str::to_string),
    });
    Ok(journey.clone())
}

/// Valorar un viaje completado (1..=5)
pub fn rate_journey(
    data: &mut FleetData,
    journey_id: &str,
    user_id: Option<&str>,
    rating: u8,
) -> AppResult<Journey> {
    let index = data.journey_index(journey_id)?;
    let journey = &mut data.journeys[index];

    if let Some(user_id) = user_id {
        if journey.user_id != user_id {
            return Err(forbidden_error("rate journey", "journey belongs to another user"));
        }
    }
    if journey.status != JourneyStatus::Completed {
        return Err(AppError::InvalidState(format!(
            "cannot rate a {} journey; only completed journeys can be rated",
            journey.status
        )));
    }
    if !(1..=5).contains(&rating) {
        return Err(crate::utils::errors::validation_error(
            "rating",
            "rating must be between 1 and 5",
        ));
    }

    journey.rating = Some(rating);
    Ok(journey.clone())
}

/// Listado filtrado, más recientes primero
pub fn list_journeys(data: &FleetData, filters: &JourneyFilters) -> Vec<Journey> {
    let mut journeys: Vec<Journey> = data
        .journeys
        .iter()
        .filter(|j| filters.user_id.as_deref().map_or(true, |id| j.user_id == id))
        .filter(|j| filters.driver_id.as_deref().map_or(true, |id| j.driver_id == id))
        .filter(|j| filters.status.map_or(true, |status| j.status == status))
        .cloned()
        .collect();
    journeys.sort_by(|a, b| b.start_time.cmp(&a.start_time));
    journeys
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::seed::demo_fleet_data;
    use chrono::Duration;

    fn journey_request(user_id: &str, destination: &str) -> RequestJourneyRequest {
        RequestJourneyRequest {
            user_id: user_id.to_string(),
            destination: destination.to_string(),
            start_location: "Head Office".to_string(),
            estimated_duration: Some(45),
            distance: Some(35.0),
        }
    }

    fn requested(data: &mut FleetData, user_id: &str) -> Journey {
        let cooldown = BookingCooldown::new(0);
        request_journey(data, &cooldown, &journey_request(user_id, "Airport"), Utc::now()).unwrap()
    }

    #[test]
    fn test_request_creates_unassigned_requested_journey() {
        let mut data = demo_fleet_data();
        let journey = requested(&mut data, "u1");

        assert_eq!(journey.status, JourneyStatus::Requested);
        assert_eq!(journey.car_id, "");
        assert_eq!(journey.driver_id, "");
        assert_eq!(journey.user_name, "Priya Sharma");
        assert_eq!(journey.end_location, "Airport");
        assert!(journey.end_time.is_none());
        assert_eq!(data.journeys.len(), 1);
    }

    #[test]
    fn test_second_pending_request_conflicts() {
        let mut data = demo_fleet_data();
        requested(&mut data, "u1");

        let cooldown = BookingCooldown::new(0);
        let err = request_journey(&mut data, &cooldown, &journey_request("u1", "Mall"), Utc::now())
            .unwrap_err();

        assert!(matches!(err, AppError::Conflict(_)));
        assert_eq!(data.pending_journeys_for("u1").count(), 1);
    }

    #[test]
    fn test_conflict_is_reported_before_cooldown() {
        let mut data = demo_fleet_data();
        let cooldown = BookingCooldown::new(300);
        let now = Utc::now();
        request_journey(&mut data, &cooldown, &journey_request("u1", "Airport"), now).unwrap();
        cooldown.record("u1", now).unwrap();

        let err = request_journey(&mut data, &cooldown, &journey_request("u1", "Mall"), now)
            .unwrap_err();
        assert!(matches!(err, AppError::Conflict(_)));
    }

    #[test]
    fn test_cooldown_applies_after_cancellation() {
        let mut data = demo_fleet_data();
        let cooldown = BookingCooldown::new(300);
        let now = Utc::now();
        let journey =
            request_journey(&mut data, &cooldown, &journey_request("u1", "Airport"), now).unwrap();
        cooldown.record("u1", now).unwrap();
        cancel_journey(&mut data, &journey.id, None, now).unwrap();

        let err = request_journey(
            &mut data,
            &cooldown,
            &journey_request("u1", "Mall"),
            now + Duration::seconds(30),
        )
        .unwrap_err();
        assert!(matches!(err, AppError::RateLimitExceeded(_)));

        assert!(request_journey(
            &mut data,
            &cooldown,
            &journey_request("u1", "Mall"),
            now + Duration::seconds(301),
        )
        .is_ok());
    }

    #[test]
    fn test_unknown_or_inactive_user_cannot_request() {
        let mut data = demo_fleet_data();
        let cooldown = BookingCooldown::new(0);

        let err = request_journey(&mut data, &cooldown, &journey_request("ghost", "Airport"), Utc::now())
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));

        data.users[1].is_active = false;
        let err = request_journey(&mut data, &cooldown, &journey_request("u1", "Airport"), Utc::now())
            .unwrap_err();
        assert!(matches!(err, AppError::Forbidden(_)));
    }

    #[test]
    fn test_assignment_moves_journey_and_car_together() {
        let mut data = demo_fleet_data();
        let journey = requested(&mut data, "u1");

        let assigned = assign_journey(&mut data, &journey.id, "car1", "driver1").unwrap();

        assert_eq!(assigned.status, JourneyStatus::InProgress);
        assert_eq!(assigned.car_id, "car1");
        assert_eq!(assigned.driver_name, "Arjun Singh");
        assert_eq!(assigned.car_model, "Toyota Innova Crysta");
        let car = &data.cars[data.car_index("car1").unwrap()];
        assert_eq!(car.status, CarStatus::InUse);
    }

    #[test]
    fn test_assigning_unavailable_car_changes_nothing() {
        let mut data = demo_fleet_data();
        let journey = requested(&mut data, "u1");

        let err = assign_journey(&mut data, &journey.id, "car2", "driver1").unwrap_err();

        assert!(matches!(err, AppError::ResourceUnavailable(_)));
        let stored = data.journey(&journey.id).unwrap();
        assert_eq!(stored.status, JourneyStatus::Requested);
        assert_eq!(stored.car_id, "");
        assert_eq!(data.cars[1].status, CarStatus::Servicing);
    }

    #[test]
    fn test_driver_on_leave_cannot_be_assigned() {
        let mut data = demo_fleet_data();
        let journey = requested(&mut data, "u1");

        let err = assign_journey(&mut data, &journey.id, "car1", "driver2").unwrap_err();

        assert!(matches!(err, AppError::ResourceUnavailable(_)));
        assert_eq!(data.cars[0].status, CarStatus::Available);
    }

    #[test]
    fn test_assign_unknown_ids_and_wrong_state() {
        let mut data = demo_fleet_data();
        let journey = requested(&mut data, "u1");

        assert!(matches!(
            assign_journey(&mut data, "nope", "car1", "driver1"),
            Err(AppError::NotFound(_))
        ));
        assert!(matches!(
            assign_journey(&mut data, &journey.id, "car9", "driver1"),
            Err(AppError::NotFound(_))
        ));
        assert!(matches!(
            assign_journey(&mut data, &journey.id, "car1", "driver9"),
            Err(AppError::NotFound(_))
        ));

        assign_journey(&mut data, &journey.id, "car1", "driver1").unwrap();
        assert!(matches!(
            assign_journey(&mut data, &journey.id, "car3", "driver1"),
            Err(AppError::InvalidState(_))
        ));
    }

    #[test]
    fn test_dropoff_completes_without_releasing_car() {
        let mut data = demo_fleet_data();
        let journey = requested(&mut data, "u1");
        assign_journey(&mut data, &journey.id, "car1", "driver1").unwrap();

        let completed = complete_journey(&mut data, &journey.id, None, None, Utc::now()).unwrap();

        assert_eq!(completed.status, JourneyStatus::Completed);
        assert!(completed.end_time.is_some());
        assert_eq!(data.cars[0].status, CarStatus::InUse);
        assert!((data.users[1].total_distance.month - 275.0).abs() < 1e-9);
        assert!((data.drivers[0].total_travelled_distance - 15455.0).abs() < 1e-9);
        assert!((data.cars[0].total_distance_travelled - 35.0).abs() < 1e-9);
    }

    #[test]
    fn test_only_assigned_driver_completes() {
        let mut data = demo_fleet_data();
        let journey = requested(&mut data, "u1");
        assign_journey(&mut data, &journey.id, "car1", "driver1").unwrap();

        let err = complete_journey(&mut data, &journey.id, Some("driver2"), None, Utc::now())
            .unwrap_err();
        assert!(matches!(err, AppError::Forbidden(_)));

        let done =
            complete_journey(&mut data, &journey.id, Some("driver1"), Some(41.5), Utc::now()).unwrap();
        assert!((done.distance - 41.5).abs() < 1e-9);
    }

    #[test]
    fn test_completing_unassigned_journey_is_invalid_state() {
        let mut data = demo_fleet_data();
        let journey = requested(&mut data, "u1");

        let err = complete_journey(&mut data, &journey.id, Some("driver1"), None, Utc::now())
            .unwrap_err();
        assert!(matches!(err, AppError::InvalidState(_)));
        assert_eq!(data.journey(&journey.id).unwrap().status, JourneyStatus::Requested);
    }

    #[test]
    fn test_requested_journey_cannot_be_completed() {
        let mut data = demo_fleet_data();
        let journey = requested(&mut data, "u1");

        let err = complete_journey(&mut data, &journey.id, None, None, Utc::now()).unwrap_err();
        assert_eq!(err.to_string(), "Invalid state: cannot complete a requested journey");
    }

    #[test]
    fn test_terminal_states_reject_everything() {
        let mut data = demo_fleet_data();
        let journey = requested(&mut data, "u1");
        assign_journey(&mut data, &journey.id, "car1", "driver1").unwrap();
        complete_journey(&mut data, &journey.id, None, None, Utc::now()).unwrap();

        let err = cancel_journey(&mut data, &journey.id, None, Utc::now()).unwrap_err();
        assert_eq!(err.to_string(), "Invalid state: cannot cancel a completed journey");
        assert!(matches!(
            complete_journey(&mut data, &journey.id, None, None, Utc::now()),
            Err(AppError::InvalidState(_))
        ));
        assert!(matches!(
            add_waypoint(&mut data, &journey.id, "Mall", None, Utc::now()),
            Err(AppError::InvalidState(_))
        ));

        let other = requested(&mut data, "u2");
        cancel_journey(&mut data, &other.id, Some("changed plans"), Utc::now()).unwrap();
        let err = cancel_journey(&mut data, &other.id, None, Utc::now()).unwrap_err();
        assert_eq!(err.to_string(), "Invalid state: cannot cancel a cancelled journey");
        assert!(matches!(
            assign_journey(&mut data, &other.id, "car1", "driver1"),
            Err(AppError::InvalidState(_))
        ));
    }

    #[test]
    fn test_cancel_in_progress_sets_end_time_and_reason() {
        let mut data = demo_fleet_data();
        let journey = requested(&mut data, "u1");
        assign_journey(&mut data, &journey.id, "car1", "driver1").unwrap();

        let cancelled = cancel_journey(&mut data, &journey.id, Some("  flat tyre "), Utc::now()).unwrap();

        assert_eq!(cancelled.status, JourneyStatus::Cancelled);
        assert!(cancelled.end_time.is_some());
        assert_eq!(cancelled.cancellation_reason.as_deref(), Some("flat tyre"));
    }

    #[test]
    fn test_decline_only_from_requested() {
        let mut data = demo_fleet_data();
        let journey = requested(&mut data, "u1");
        assign_journey(&mut data, &journey.id, "car1", "driver1").unwrap();

        assert!(matches!(
            decline_journey(&mut data, &journey.id, None, Utc::now()),
            Err(AppError::InvalidState(_))
        ));

        let other = requested(&mut data, "u2");
        let declined = decline_journey(&mut data, &other.id, Some("no cars"), Utc::now()).unwrap();
        assert_eq!(declined.status, JourneyStatus::Cancelled);
    }

    #[test]
    fn test_route_changes_require_in_progress() {
        let mut data = demo_fleet_data();
        let journey = requested(&mut data, "u1");

        let err = add_waypoint(&mut data, &journey.id, "Mall", None, Utc::now()).unwrap_err();
        assert!(matches!(err, AppError::InvalidState(_)));

        assign_journey(&mut data, &journey.id, "car1", "driver1").unwrap();
        add_waypoint(&mut data, &journey.id, "Mall", Some("pick up parcel"), Utc::now()).unwrap();
        add_waypoint(&mut data, &journey.id, "Pharmacy", None, Utc::now()).unwrap();
        let updated = remove_waypoint(&mut data, &journey.id, "Mall", None, Utc::now()).unwrap();

        assert_eq!(updated.status, JourneyStatus::InProgress);
        assert_eq!(updated.waypoints, vec!["Pharmacy".to_string()]);
        let kinds: Vec<_> = updated.route_changes.iter().map(|c| c.kind).collect();
        assert_eq!(
            kinds,
            vec![
                RouteChangeKind::WaypointAdded,
                RouteChangeKind::WaypointAdded,
                RouteChangeKind::WaypointRemoved
            ]
        );
        assert_eq!(updated.route_changes[0].reason.as_deref(), Some("pick up parcel"));

        assert!(matches!(
            remove_waypoint(&mut data, &journey.id, "Mall", None, Utc::now()),
            Err(AppError::NotFound(_))
        ));
    }

    #[test]
    fn test_change_destination_records_previous() {
        let mut data = demo_fleet_data();
        let journey = requested(&mut data, "u1");
        assign_journey(&mut data, &journey.id, "car1", "driver1").unwrap();

        let updated = change_destination(&mut data, &journey.id, "Tech Park", None, Utc::now()).unwrap();

        assert_eq!(updated.end_location, "Tech Park");
        let change = updated.route_changes.last().unwrap();
        assert_eq!(change.kind, RouteChangeKind::DestinationChanged);
        assert_eq!(change.previous_destination.as_deref(), Some("Airport"));
        assert_eq!(change.new_destination.as_deref(), Some("Tech Park"));
    }

    #[test]
    fn test_rating() {
        let mut data = demo_fleet_data();
        let journey = requested(&mut data, "u1");

        assert!(matches!(
            rate_journey(&mut data, &journey.id, None, 5),
            Err(AppError::InvalidState(_))
        ));

        assign_journey(&mut data, &journey.id, "car1", "driver1").unwrap();
        complete_journey(&mut data, &journey.id, None, None, Utc::now()).unwrap();

        assert!(matches!(
            rate_journey(&mut data, &journey.id, Some("u2"), 5),
            Err(AppError::Forbidden(_))
        ));
        assert!(matches!(
            rate_journey(&mut data, &journey.id, None, 6),
            Err(AppError::Validation(_))
        ));
        let rated = rate_journey(&mut data, &journey.id, Some("u1"), 4).unwrap();
        assert_eq!(rated.rating, Some(4));
    }

    #[test]
    fn test_list_filters() {
        let mut data = demo_fleet_data();
        let first = requested(&mut data, "u1");
        requested(&mut data, "u2");
        assign_journey(&mut data, &first.id, "car1", "driver1").unwrap();

        let by_user = list_journeys(
            &data,
            &JourneyFilters {
                user_id: Some("u2".to_string()),
                ..Default::default()
            },
        );
        assert_eq!(by_user.len(), 1);

        let active = list_journeys(
            &data,
            &JourneyFilters {
                driver_id: Some("driver1".to_string()),
                status: Some(JourneyStatus::InProgress),
                ..Default::default()
            },
        );
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].id, first.id);

        assert_eq!(list_journeys(&data, &JourneyFilters::default()).len(), 2);
    }
}
