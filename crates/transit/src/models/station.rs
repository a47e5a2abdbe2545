//! Stations and the schedules they hold.

use std::fmt;

use crate::identifiers::VehicleIdentifier;
use crate::models::schedule::Schedule;
use crate::models::types::*;

/// A named stop holding schedules in insertion order.
///
/// Nothing prevents two schedules for the same vehicle; lookups and
/// removals act on the first match.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Station {
    name: String,
    location: String,
    station_type: String,
    schedules: Vec<Schedule>,
}

impl Station {
    pub fn new(
        name: impl Into<String>,
        location: impl Into<String>,
        station_type: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            location: location.into(),
            station_type: station_type.into(),
            schedules: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    /// Free-form type label (e.g., "Bus", "Train")
    pub fn station_type(&self) -> &str {
        &self.station_type
    }

    pub fn schedules(&self) -> &[Schedule] {
        &self.schedules
    }

    pub fn len(&self) -> usize {
        self.schedules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.schedules.is_empty()
    }

    pub fn add_schedule(&mut self, schedule: Schedule) {
        log::debug!("Station {}: adding schedule for {}", self.name, schedule.vehicle_id());
        self.schedules.push(schedule);
    }

    /// Remove the first schedule for `vehicle_id`, if any.
    ///
    /// A missing id is not reported.
    pub fn remove_schedule(&mut self, vehicle_id: &VehicleIdentifier) -> Option<Schedule> {
        let index = self.position_of(vehicle_id)?;
        log::debug!("Station {}: removing schedule for {}", self.name, vehicle_id);
        Some(self.schedules.remove(index))
    }

    pub fn schedule_for(&self, vehicle_id: &VehicleIdentifier) -> Option<&Schedule> {
        self.position_of(vehicle_id).map(|i| &self.schedules[i])
    }

    /// Update the status of the first schedule for `vehicle_id`
    pub fn set_schedule_status(
        &mut self,
        vehicle_id: &VehicleIdentifier,
        status: impl Into<String>,
    ) -> Result<()> {
        let index = self
            .position_of(vehicle_id)
            .ok_or_else(|| TransitError::ScheduleNotFound(vehicle_id.clone()))?;

        let status = status.into();
        log::debug!("Station {}: {} is now {}", self.name, vehicle_id, status);
        self.schedules[index].set_status(status);
        Ok(())
    }

    /// Print the station header and every schedule to stdout
    pub fn display_info(&self) {
        print!("{self}");
    }

    fn position_of(&self, vehicle_id: &VehicleIdentifier) -> Option<usize> {
        log::trace!("Station {}: scanning {} schedules", self.name, self.schedules.len());
        self.schedules
            .iter()
            .position(|s| s.vehicle_id() == vehicle_id)
    }
}

impl fmt::Display for Station {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Station: {}", self.name)?;
        writeln!(f, "Location: {}", self.location)?;
        writeln!(f, "Type: {}", self.station_type)?;
        for schedule in &self.schedules {
            write!(f, "{}", schedule)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn central() -> Station {
        let mut station = Station::new("Central Station", "Downtown", "Bus");
        station.add_schedule(Schedule::new("B001", "08:00", "10:00"));
        station.add_schedule(Schedule::new("E100", "09:00", "10:30"));
        station
    }

    #[test]
    fn test_add_keeps_insertion_order() {
        let station = central();
        let ids: Vec<&str> = station.schedules().iter().map(|s| s.vehicle_id().as_str()).collect();
        assert_eq!(ids, vec!["B001", "E100"]);
    }

    #[test]
    fn test_remove_leaves_the_other() {
        let mut station = central();
        let removed = station.remove_schedule(&VehicleIdentifier::new("B001"));

        assert_eq!(removed.map(|s| s.departure_time().to_string()), Some("08:00".into()));
        assert_eq!(station.len(), 1);
        assert_eq!(station.schedules()[0].vehicle_id().as_str(), "E100");
    }

    #[test]
    fn test_remove_missing_is_silent() {
        let mut station = central();
        let before = station.clone();

        assert!(station.remove_schedule(&VehicleIdentifier::new("Z999")).is_none());
        assert_eq!(station, before);
    }

    #[test]
    fn test_duplicates_allowed_and_first_removed() {
        let mut station = Station::new("Depot", "North", "Train");
        station.add_schedule(Schedule::new("T1", "06:00", "07:00"));
        station.add_schedule(Schedule::new("T1", "12:00", "13:00"));
        assert_eq!(station.len(), 2);

        station.remove_schedule(&VehicleIdentifier::new("T1"));
        assert_eq!(station.len(), 1);
        assert_eq!(station.schedules()[0].departure_time(), "12:00");
    }

    #[test]
    fn test_set_schedule_status() {
        let mut station = central();
        let e100 = VehicleIdentifier::new("E100");

        station.set_schedule_status(&e100, "Delayed").unwrap();
        assert_eq!(station.schedule_for(&e100).map(Schedule::status), Some("Delayed"));

        let missing = VehicleIdentifier::new("X1");
        assert_eq!(
            station.set_schedule_status(&missing, "Delayed"),
            Err(TransitError::ScheduleNotFound(missing))
        );
    }

    #[test]
    fn test_render() {
        let station = central();
        assert_eq!(
            station.to_string(),
            "Station: Central Station\nLocation: Downtown\nType: Bus\n\
             Vehicle: B001\nDeparture: 08:00\nArrival: 10:00\nStatus: On Time\n\
             Vehicle: E100\nDeparture: 09:00\nArrival: 10:30\nStatus: On Time\n"
        );

        let empty = Station::new("Empty", "Nowhere", "Train");
        assert!(empty.is_empty());
        assert_eq!(empty.to_string(), "Station: Empty\nLocation: Nowhere\nType: Train\n");
    }
}
