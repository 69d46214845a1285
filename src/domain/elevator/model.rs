//! Elevator domain entities

use chrono::{DateTime, Utc};

/// Elevator operational status
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ElevatorStatus {
    /// In normal service
    Running,
    /// Taken out of service for maintenance
    Maintenance,
    /// A fault has been reported
    Fault,
    /// Parked / powered down
    Stopped,
    /// Status string not recognized
    Unknown,
}

impl Default for ElevatorStatus {
    fn default() -> Self {
        Self::Unknown
    }
}

impl std::fmt::Display for ElevatorStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Running => write!(f, "running"),
            Self::Maintenance => write!(f, "maintenance"),
            Self::Fault => write!(f, "fault"),
            Self::Stopped => write!(f, "stopped"),
            Self::Unknown => write!(f, "unknown"),
        }
    }
}

impl From<&str> for ElevatorStatus {
    fn from(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "running" => Self::Running,
            "maintenance" => Self::Maintenance,
            "fault" => Self::Fault,
            "stopped" => Self::Stopped,
            _ => Self::Unknown,
        }
    }
}

impl From<String> for ElevatorStatus {
    fn from(s: String) -> Self {
        Self::from(s.as_str())
    }
}

/// Measurement kind reported by a sensor
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SensorKind {
    Temperature,
    Vibration,
    Speed,
    Load,
    Other(String),
}

impl std::fmt::Display for SensorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Temperature => write!(f, "temperature"),
            Self::Vibration => write!(f, "vibration"),
            Self::Speed => write!(f, "speed"),
            Self::Load => write!(f, "load"),
            Self::Other(s) => write!(f, "{}", s),
        }
    }
}

impl From<&str> for SensorKind {
    fn from(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "temperature" => Self::Temperature,
            "vibration" => Self::Vibration,
            "speed" => Self::Speed,
            "load" => Self::Load,
            other => Self::Other(other.to_string()),
        }
    }
}

/// Monitored elevator unit. Source of truth is external; this core reads only.
#[derive(Debug, Clone)]
pub struct Elevator {
    pub id: i32,
    pub name: String,
    pub location: String,
    pub status: ElevatorStatus,
    pub last_maintenance: Option<DateTime<Utc>>,
}

/// Sensor reference data with its valid value range.
#[derive(Debug, Clone)]
pub struct Sensor {
    pub id: i32,
    pub elevator_id: i32,
    pub kind: SensorKind,
    pub max_value: f64,
    pub min_value: f64,
}

/// Latest observed value for one sensor.
///
/// `is_abnormal` is stored upstream alongside the reading (value outside the
/// sensor's `[min_value, max_value]`); this core reports it as-is.
#[derive(Debug, Clone)]
pub struct SensorReading {
    pub sensor_id: i32,
    pub kind: SensorKind,
    pub value: f64,
    pub is_abnormal: bool,
    pub timestamp: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_parses_known_values() {
        assert_eq!(ElevatorStatus::from("Running"), ElevatorStatus::Running);
        assert_eq!(ElevatorStatus::from("FAULT"), ElevatorStatus::Fault);
        assert_eq!(ElevatorStatus::from("maintenance"), ElevatorStatus::Maintenance);
    }

    #[test]
    fn unrecognized_status_maps_to_unknown() {
        assert_eq!(ElevatorStatus::from("levitating"), ElevatorStatus::Unknown);
    }

    #[test]
    fn sensor_kind_round_trips_through_display() {
        for kind in ["temperature", "vibration", "speed", "load"] {
            assert_eq!(SensorKind::from(kind).to_string(), kind);
        }
        assert_eq!(SensorKind::from("humidity").to_string(), "humidity");
    }
}
