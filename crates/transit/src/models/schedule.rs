//! Planned departure/arrival of a single vehicle.

use std::fmt;

use chrono::NaiveTime;

use crate::identifiers::VehicleIdentifier;
use crate::models::types::*;

/// A vehicle's planned departure and arrival with a free-text status.
///
/// Times are kept as the text they were given with; only
/// [`Schedule::scheduled_minutes`] interprets them.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Schedule {
    vehicle_id: VehicleIdentifier,
    departure_time: String,
    arrival_time: String,
    status: String,
}

impl Schedule {
    pub fn new(
        vehicle_id: impl Into<VehicleIdentifier>,
        departure_time: impl Into<String>,
        arrival_time: impl Into<String>,
    ) -> Self {
        Self {
            vehicle_id: vehicle_id.into(),
            departure_time: departure_time.into(),
            arrival_time: arrival_time.into(),
            status: DEFAULT_SCHEDULE_STATUS.to_string(),
        }
    }

    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    /// Replace the status. Any label is accepted.
    pub fn set_status(&mut self, status: impl Into<String>) {
        self.status = status.into();
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    pub fn vehicle_id(&self) -> &VehicleIdentifier {
        &self.vehicle_id
    }

    pub fn departure_time(&self) -> &str {
        &self.departure_time
    }

    pub fn arrival_time(&self) -> &str {
        &self.arrival_time
    }

    /// Planned duration in minutes, reading both times as `HH:MM`.
    ///
    /// An arrival earlier than the departure is taken to be on the next day.
    pub fn scheduled_minutes(&self) -> Result<f64> {
        let departure = parse_clock(&self.departure_time)?;
        let arrival = parse_clock(&self.arrival_time)?;

        let mut minutes = (arrival - departure).num_minutes();
        if minutes < 0 {
            minutes += 24 * 60;
        }
        Ok(minutes as f64)
    }

    /// Print the four-line rendering to stdout
    pub fn display_info(&self) {
        print!("{self}");
    }
}

impl Default for Schedule {
    fn default() -> Self {
        Self::new("", "", "")
    }
}

impl fmt::Display for Schedule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Vehicle: {}", self.vehicle_id)?;
        writeln!(f, "Departure: {}", self.departure_time)?;
        writeln!(f, "Arrival: {}", self.arrival_time)?;
        writeln!(f, "Status: {}", self.status)
    }
}

fn parse_clock(value: &str) -> Result<NaiveTime> {
    NaiveTime::parse_from_str(value.trim(), "%H:%M").map_err(|_| TransitError::InvalidTime {
        value: value.to_string(),
    })
}
