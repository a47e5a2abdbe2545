//! Vehicles and their travel-time behaviour.
//!
//! [`Vehicle`] is the capability callers hold; [`BasicVehicle`] applies no
//! adjustment to travel time and [`ExpressBus`] trims a fixed share off it.

use std::fmt;

use crate::identifiers::VehicleIdentifier;
use crate::models::types::DEFAULT_VEHICLE_STATUS;

/// Share of the base travel time an express bus needs
pub const EXPRESS_TIME_FACTOR: f64 = 0.8;

pub const EXPRESS_BUS_TYPE: &str = "Express Bus";
pub const DEFAULT_EXPRESS_SPEED_KMH: f64 = 80.0;
pub const DEFAULT_EXPRESS_STOPS: i32 = 3;

// ============================================================================
// Vehicle Trait
// ============================================================================

/// A transit unit with a capacity, a route and a status
pub trait Vehicle: Send + Sync + fmt::Debug {
    fn id(&self) -> &VehicleIdentifier;

    /// Free-form type label (e.g., "Bus", "Express Bus")
    fn vehicle_type(&self) -> &str;

    /// Passenger capacity, taken as given (no bounds check)
    fn capacity(&self) -> i32;

    fn route(&self) -> &str;
    fn status(&self) -> &str;
    fn set_status(&mut self, status: String);

    /// Travel time for a trip that nominally takes `base_time`
    fn calculate_travel_time(&self, base_time: f64) -> f64 {
        base_time
    }

    /// Write the multi-line description of this vehicle.
    ///
    /// Variants extend the base lines by calling [`write_base_info`] first.
    fn write_info(&self, f: &mut dyn fmt::Write) -> fmt::Result {
        write_base_info(self, f)
    }

    fn info(&self) -> String {
        Info(self).to_string()
    }

    /// Print the description to stdout
    fn display_info(&self) {
        print!("{}", self.info());
    }
}

/// The five lines every vehicle renders
pub fn write_base_info<V: Vehicle + ?Sized>(vehicle: &V, f: &mut dyn fmt::Write) -> fmt::Result {
    writeln!(f, "Vehicle ID: {}", vehicle.id())?;
    writeln!(f, "Type: {}", vehicle.vehicle_type())?;
    writeln!(f, "Capacity: {}", vehicle.capacity())?;
    writeln!(f, "Route: {}", vehicle.route())?;
    writeln!(f, "Status: {}", vehicle.status())
}

/// Adapts [`Vehicle::write_info`] to `Display`
struct Info<'a, V: ?Sized>(&'a V);

impl<V: Vehicle + ?Sized> fmt::Display for Info<'_, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.write_info(f)
    }
}

impl fmt::Display for dyn Vehicle + '_ {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_info(f)
    }
}

// ============================================================================
// Basic Vehicle
// ============================================================================

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BasicVehicle {
    pub id: VehicleIdentifier,
    pub vehicle_type: String,
    pub capacity: i32,
    pub route: String,
    pub status: String,
}

impl BasicVehicle {
    pub fn new(
        id: impl Into<VehicleIdentifier>,
        vehicle_type: impl Into<String>,
        capacity: i32,
        route: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            vehicle_type: vehicle_type.into(),
            capacity,
            route: route.into(),
            status: DEFAULT_VEHICLE_STATUS.to_string(),
        }
    }

    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }
}

impl Default for BasicVehicle {
    fn default() -> Self {
        Self::new("", "", 0, "")
    }
}

impl Vehicle for BasicVehicle {
    fn id(&self) -> &VehicleIdentifier {
        &self.id
    }

    fn vehicle_type(&self) -> &str {
        &self.vehicle_type
    }

    fn capacity(&self) -> i32 {
        self.capacity
    }

    fn route(&self) -> &str {
        &self.route
    }

    fn status(&self) -> &str {
        &self.status
    }

    fn set_status(&mut self, status: String) {
        log::debug!("Vehicle {} status: {} -> {}", self.id, self.status, status);
        self.status = status;
    }
}

impl fmt::Display for BasicVehicle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_info(f)
    }
}

// ============================================================================
// Express Bus
// ============================================================================

/// A bus that runs fewer stops and needs 80% of the base travel time
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExpressBus {
    base: BasicVehicle,
    speed_kmh: f64,
    stops: i32,
}

impl ExpressBus {
    pub fn new(id: impl Into<VehicleIdentifier>, capacity: i32, route: impl Into<String>) -> Self {
        Self {
            base: BasicVehicle::new(id, EXPRESS_BUS_TYPE, capacity, route),
            speed_kmh: DEFAULT_EXPRESS_SPEED_KMH,
            stops: DEFAULT_EXPRESS_STOPS,
        }
    }

    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.base.status = status.into();
        self
    }

    pub fn with_speed(mut self, speed_kmh: f64) -> Self {
        self.speed_kmh = speed_kmh;
        self
    }

    pub fn with_stops(mut self, stops: i32) -> Self {
        self.stops = stops;
        self
    }

    /// Average speed in km/h
    pub fn speed(&self) -> f64 {
        self.speed_kmh
    }

    pub fn stops(&self) -> i32 {
        self.stops
    }
}

impl Default for ExpressBus {
    fn default() -> Self {
        Self::new("", 0, "")
    }
}

impl Vehicle for ExpressBus {
    fn id(&self) -> &VehicleIdentifier {
        self.base.id()
    }

    fn vehicle_type(&self) -> &str {
        self.base.vehicle_type()
    }

    fn capacity(&self) -> i32 {
        self.base.capacity()
    }

    fn route(&self) -> &str {
        self.base.route()
    }

    fn status(&self) -> &str {
        self.base.status()
    }

    fn set_status(&mut self, status: String) {
        self.base.set_status(status);
    }

    fn calculate_travel_time(&self, base_time: f64) -> f64 {
        base_time * EXPRESS_TIME_FACTOR
    }

    fn write_info(&self, f: &mut dyn fmt::Write) -> fmt::Result {
        write_base_info(self, f)?;
        writeln!(
            f,
            " Express Speed: {} km/h | Stops: {}",
            self.speed_kmh, self.stops
        )
    }
}

impl fmt::Display for ExpressBus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_info(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_basic_vehicle_travel_time_is_identity() {
        let bus = BasicVehicle::new("B001", "Bus", 40, "Route A");
        for t in [0.0, 1.5, 60.0, 1234.25, -10.0] {
            assert_eq!(bus.calculate_travel_time(t), t);
        }
    }

    #[test]
    fn test_express_travel_time() {
        let express = ExpressBus::new("E100", 30, "Route B");
        assert_eq!(express.calculate_travel_time(60.0), 48.0);
        for t in [0.0, 15.0, 90.0, 7.3] {
            assert_relative_eq!(express.calculate_travel_time(t), t * 0.8);
        }
    }

    #[test]
    fn test_dispatch_through_trait_object() {
        let fleet: Vec<Box<dyn Vehicle>> = vec![
            Box::new(BasicVehicle::new("B001", "Bus", 40, "Route A")),
            Box::new(ExpressBus::new("E100", 30, "Route B")),
        ];

        let times: Vec<f64> = fleet.iter().map(|v| v.calculate_travel_time(60.0)).collect();
        assert_eq!(times, vec![60.0, 48.0]);
    }

    #[test]
    fn test_express_defaults() {
        let express = ExpressBus::new("E100", 30, "Route B");
        assert_eq!(express.vehicle_type(), "Express Bus");
        assert_eq!(express.status(), "Available");
        assert_relative_eq!(express.speed(), 80.0);
        assert_eq!(express.stops(), 3);

        let tuned = ExpressBus::new("E200", 50, "Route C")
            .with_status("Delayed")
            .with_speed(95.5)
            .with_stops(1);
        assert_eq!(tuned.status(), "Delayed");
        assert_relative_eq!(tuned.speed(), 95.5);
        assert_eq!(tuned.stops(), 1);
    }

    #[test]
    fn test_capacity_is_not_validated() {
        let odd = BasicVehicle::new("X1", "Bus", -5, "Nowhere");
        assert_eq!(odd.capacity(), -5);
        assert_eq!(BasicVehicle::default().capacity(), 0);
    }

    #[test]
    fn test_set_status() {
        let mut express = ExpressBus::new("E100", 30, "Route B");
        express.set_status("Out of Service".to_string());
        assert_eq!(express.status(), "Out of Service");
    }

    #[test]
    fn test_basic_render() {
        let bus = BasicVehicle::new("B001", "Bus", 40, "Route A");
        assert_eq!(
            bus.to_string(),
            "Vehicle ID: B001\nType: Bus\nCapacity: 40\nRoute: Route A\nStatus: Available\n"
        );
    }

    #[test]
    fn test_express_render_extends_base() {
        let express = ExpressBus::new("E100", 30, "Route B");
        let base = BasicVehicle::new("E100", "Express Bus", 30, "Route B").to_string();
        let rendered = express.to_string();

        assert!(rendered.starts_with(&base));
        assert_eq!(&rendered[base.len()..], " Express Speed: 80 km/h | Stops: 3\n");

        let boxed: Box<dyn Vehicle> = Box::new(express);
        assert_eq!(boxed.to_string(), rendered);
        assert_eq!(boxed.info(), rendered);
    }
}
