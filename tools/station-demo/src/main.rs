use anyhow::{Context, Result};
use clap::Parser;
use std::io::{self, Write};

mod scenario;

#[derive(Parser, Debug)]
#[command(
    name = "station-demo",
    author,
    version,
    about = "Walk through a transit station, its vehicles and a passenger",
    long_about = "Builds Central Station with a regular bus and an express bus, books \
                  rides for a passenger and prints the state of every entity, followed \
                  by the travel time each vehicle needs for a 60 minute trip.\n\n\
                  Diagnostics go to stderr; stdout carries only the walkthrough."
)]
struct Args {
    /// Verbose output (show debug messages)
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(if args.verbose { "debug" } else { "info" }),
    )
    .format_timestamp(None)
    .init();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    scenario::run(&mut out).context("Failed to write walkthrough")?;
    out.flush().context("Failed to flush stdout")?;

    log::debug!("Done!");

    Ok(())
}
