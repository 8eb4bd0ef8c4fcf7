//! Modelo de Journey
//!
//! Un viaje avanza solo hacia delante:
//! `requested → in-progress → {completed | cancelled}` y `requested → cancelled`.
//! Los estados `completed` y `cancelled` son terminales.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum JourneyStatus {
    Requested,
    InProgress,
    Completed,
    Cancelled,
}

impl JourneyStatus {
    pub fn is_terminal(&self) -> bool {
        matches!(self, JourneyStatus::Completed | JourneyStatus::Cancelled)
    }

    /// Transiciones permitidas por la máquina de estados
    pub fn can_transition_to(&self, next: JourneyStatus) -> bool {
        use JourneyStatus::*;
        matches!(
            (self, next),
            (Requested, InProgress)
                | (Requested, Cancelled)
                | (InProgress, Completed)
                | (InProgress, Cancelled)
        )
    }
}

impl fmt::Display for JourneyStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            JourneyStatus::Requested => "requested",
            JourneyStatus::InProgress => "in-progress",
            JourneyStatus::Completed => "completed",
            JourneyStatus::Cancelled => "cancelled",
        };
        f.write_str(value)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum RouteChangeKind {
    WaypointAdded,
    WaypointRemoved,
    DestinationChanged,
}

/// Entrada del historial de cambios de ruta
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteChange {
    #[serde(rename = "type")]
    pub kind: RouteChangeKind,
    pub timestamp: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub waypoint: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub previous_destination: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub new_destination: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Journey {
    pub id: String,
    #[serde(default)]
    pub car_id: String,
    #[serde(default)]
    pub driver_id: String,
    pub user_id: String,
    #[serde(default)]
    pub user_name: String,
    #[serde(default)]
    pub driver_name: String,
    #[serde(default)]
    pub car_model: String,
    pub start_location: String,
    pub end_location: String,
    #[serde(default)]
    pub waypoints: Vec<String>,
    pub status: JourneyStatus,
    pub start_time: DateTime<Utc>,
    #[serde(default)]
    pub end_time: Option<DateTime<Utc>>,
    #[serde(default)]
    pub distance: f64,
    #[serde(default)]
    pub rating: Option<u8>,
    #[serde(default)]
    pub route_changes: Vec<RouteChange>,
    #[serde(default)]
    pub estimated_duration: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cancellation_reason: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transitions_only_move_forward() {
        use JourneyStatus::*;
        let all = [Requested, InProgress, Completed, Cancelled];

        for from in all {
            for to in all {
                let allowed = from.can_transition_to(to);
                if from.is_terminal() {
                    assert!(!allowed, "{} -> {} must be rejected", from, to);
                }
                if to == Requested {
                    assert!(!allowed, "nothing goes back to requested");
                }
            }
        }
        assert!(Requested.can_transition_to(InProgress));
        assert!(InProgress.can_transition_to(Completed));
        assert!(!Requested.can_transition_to(Completed));
    }

    #[test]
    fn test_route_change_serializes_type_tag() {
        let change = RouteChange {
            kind: RouteChangeKind::WaypointAdded,
            timestamp: Utc::now(),
            waypoint: Some("Mall".to_string()),
            previous_destination: None,
            new_destination: None,
            reason: None,
        };
        let value = serde_json::to_value(&change).unwrap();
        assert_eq!(value["type"], "waypoint_added");
        assert_eq!(value["waypoint"], "Mall");
        assert!(value.get("reason").is_none());
    }
}
