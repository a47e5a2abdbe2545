//! Transit entities, shared types and the vehicle trait.

pub mod passenger;
pub mod schedule;
pub mod station;
pub mod types;
pub mod vehicle;

// Re-exports for convenience
pub use passenger::{BookingNotice, Passenger};
pub use schedule::Schedule;
pub use station::Station;
pub use types::{Result, TransitError, DEFAULT_SCHEDULE_STATUS, DEFAULT_VEHICLE_STATUS};
pub use vehicle::{write_base_info, BasicVehicle, ExpressBus, Vehicle};
