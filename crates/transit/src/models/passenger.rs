//! Passengers and their bookings.

use std::fmt;
use std::io::{self, Write};

use crate::identifiers::{PassengerIdentifier, VehicleIdentifier};

/// Outcome of a booking change, rendered as the one-line message it prints
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BookingNotice {
    Booked {
        passenger: String,
        vehicle_id: VehicleIdentifier,
    },
    Canceled {
        passenger: String,
        vehicle_id: VehicleIdentifier,
    },
    /// Cancel found nothing to remove; bookings are unchanged
    NotFound { vehicle_id: VehicleIdentifier },
}

impl BookingNotice {
    pub fn vehicle_id(&self) -> &VehicleIdentifier {
        match self {
            Self::Booked { vehicle_id, .. }
            | Self::Canceled { vehicle_id, .. }
            | Self::NotFound { vehicle_id } => vehicle_id,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

impl fmt::Display for BookingNotice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Booked { passenger, vehicle_id } => {
                write!(f, "{} booked ride on {}", passenger, vehicle_id)
            }
            Self::Canceled { passenger, vehicle_id } => {
                write!(f, "{} canceled ride on {}", passenger, vehicle_id)
            }
            Self::NotFound { vehicle_id } => write!(f, "No booking found for {}", vehicle_id),
        }
    }
}

/// A rider holding an ordered list of booked vehicle ids.
///
/// Bookings are plain ids: nothing checks that the vehicle exists.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Passenger {
    name: String,
    id: PassengerIdentifier,
    booked_tickets: Vec<VehicleIdentifier>,
}

impl Passenger {
    pub fn new(name: impl Into<String>, id: impl Into<PassengerIdentifier>) -> Self {
        Self {
            name: name.into(),
            id: id.into(),
            booked_tickets: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn id(&self) -> &PassengerIdentifier {
        &self.id
    }

    /// Booked vehicle ids in booking order, duplicates included
    pub fn booked_tickets(&self) -> &[VehicleIdentifier] {
        &self.booked_tickets
    }

    /// Booked vehicle ids joined by single spaces
    pub fn booked_tickets_line(&self) -> String {
        self.booked_tickets
            .iter()
            .map(VehicleIdentifier::as_str)
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Book a ride and print the confirmation to stdout
    pub fn book_ride(&mut self, vehicle_id: impl Into<VehicleIdentifier>) -> BookingNotice {
        let notice = self.record_booking(vehicle_id.into());
        println!("{notice}");
        notice
    }

    /// Book a ride and write the confirmation to `out`
    pub fn book_ride_to(
        &mut self,
        out: &mut impl Write,
        vehicle_id: impl Into<VehicleIdentifier>,
    ) -> io::Result<BookingNotice> {
        let notice = self.record_booking(vehicle_id.into());
        writeln!(out, "{notice}")?;
        Ok(notice)
    }

    /// Drop the earliest booking for `vehicle_id` and print the outcome to stdout.
    ///
    /// Later duplicates of the same id are kept. A missing booking prints
    /// "No booking found for ..." and leaves the list as it was.
    pub fn cancel_ride(&mut self, vehicle_id: impl Into<VehicleIdentifier>) -> BookingNotice {
        let notice = self.remove_booking(vehicle_id.into());
        println!("{notice}");
        notice
    }

    /// Same as [`Passenger::cancel_ride`], writing the outcome to `out`
    pub fn cancel_ride_to(
        &mut self,
        out: &mut impl Write,
        vehicle_id: impl Into<VehicleIdentifier>,
    ) -> io::Result<BookingNotice> {
        let notice = self.remove_booking(vehicle_id.into());
        writeln!(out, "{notice}")?;
        Ok(notice)
    }

    /// Print name, id and bookings to stdout
    pub fn display_info(&self) {
        print!("{self}");
    }

    fn record_booking(&mut self, vehicle_id: VehicleIdentifier) -> BookingNotice {
        log::debug!("Passenger {} booking {}", self.id, vehicle_id);
        self.booked_tickets.push(vehicle_id.clone());
        BookingNotice::Booked {
            passenger: self.name.clone(),
            vehicle_id,
        }
    }

    fn remove_booking(&mut self, vehicle_id: VehicleIdentifier) -> BookingNotice {
        let Some(index) = self.booked_tickets.iter().position(|t| *t == vehicle_id) else {
            log::debug!("Passenger {} has no booking for {}", self.id, vehicle_id);
            return BookingNotice::NotFound { vehicle_id };
        };

        self.booked_tickets.remove(index);
        log::debug!("Passenger {} canceled {}", self.id, vehicle_id);

        BookingNotice::Canceled {
            passenger: self.name.clone(),
            vehicle_id,
        }
    }
}

impl fmt::Display for Passenger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Passenger: {} | ID: {}", self.name, self.id)?;
        write!(f, "Booked Tickets: ")?;
        for ticket in &self.booked_tickets {
            write!(f, "{} ", ticket)?;
        }
        writeln!(f)
    }
}
