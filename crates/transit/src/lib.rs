//! # transit-station
//!
//! In-memory model of a small transit station: vehicles, schedules,
//! stations and passengers.
//!
//! ## Features
//!
//! - **Polymorphic vehicles**: travel time and rendering go through the
//!   [`Vehicle`](models::Vehicle) trait; express buses override both
//! - **Identifier references**: bookings and schedules refer to vehicles by id only
//! - **Plain-text rendering**: every entity implements `Display` with its
//!   board-style description
//!
//! ## Example
//!
//! ```
//! use transit_station::prelude::*;
//!
//! let mut station = Station::new("Central Station", "Downtown", "Bus");
//! station.add_schedule(Schedule::new("B001", "08:00", "10:00"));
//! station.add_schedule(Schedule::new("E100", "09:00", "10:30"));
//!
//! let express = ExpressBus::new("E100", 30, "Route B");
//! assert_eq!(express.calculate_travel_time(60.0), 48.0);
//!
//! station.remove_schedule(&VehicleIdentifier::new("B001"));
//! assert_eq!(station.len(), 1);
//! ```

pub mod identifiers;
pub mod models;

// Re-exports for convenience
pub mod prelude {
    pub use crate::identifiers::*;
    pub use crate::models::*;
}

pub use prelude::*;
