//! The scripted station walkthrough.

use std::io::{self, Write};

use transit_station::prelude::*;

/// Nominal trip length in minutes for the travel-time comparison
pub const BASE_TIME: f64 = 60.0;

/// Build the demo entities and write their state to `out`
pub fn run(out: &mut impl Write) -> io::Result<()> {
    let mut station = Station::new("Central Station", "Downtown", "Bus");

    let bus = BasicVehicle::new("B001", "Bus", 40, "Route A");
    let express = ExpressBus::new("E100", 30, "Route B");

    station.add_schedule(Schedule::new("B001", "08:00", "10:00"));
    station.add_schedule(Schedule::new("E100", "09:00", "10:30"));
    log::info!("{} has {} schedules", station.name(), station.len());

    let mut passenger = Passenger::new("Quang Truong", "P403");
    passenger.book_ride_to(out, "B102")?;
    passenger.book_ride_to(out, "B206")?;

    write!(out, "{}", station)?;
    writeln!(out)?;

    let fleet: [&dyn Vehicle; 2] = [&bus, &express];
    for vehicle in fleet {
        write!(out, "{}", vehicle)?;
    }
    writeln!(out)?;

    write!(out, "{}", passenger)?;

    writeln!(
        out,
        "Normal bus travel time: {} minutes",
        bus.calculate_travel_time(BASE_TIME)
    )?;
    writeln!(
        out,
        "Express bus travel time: {} minutes",
        express.calculate_travel_time(BASE_TIME)
    )?;

    Ok(())
}
