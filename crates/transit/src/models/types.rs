//! Shared constants and the error type for transit entities.

use crate::identifiers::*;

// ============================================================================
// Defaults
// ============================================================================

/// Status a schedule starts with when none is given
pub const DEFAULT_SCHEDULE_STATUS: &str = "On Time";

/// Status a vehicle starts with when none is given
pub const DEFAULT_VEHICLE_STATUS: &str = "Available";

// ============================================================================
// Errors
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransitError {
    #[error("No schedule found for {0}")]
    ScheduleNotFound(VehicleIdentifier),

    #[error("Invalid time '{value}': expected HH:MM")]
    InvalidTime { value: String },
}

pub type Result<T> = std::result::Result<T, TransitError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schedule_not_found_message() {
        let err = TransitError::ScheduleNotFound(VehicleIdentifier::new("X999"));
        assert_eq!(err.to_string(), "No schedule found for X999");
    }

    #[test]
    fn test_invalid_time_message() {
        let err = TransitError::InvalidTime { value: "25:99".into() };
        assert_eq!(err.to_string(), "Invalid time '25:99': expected HH:MM");
    }
}
