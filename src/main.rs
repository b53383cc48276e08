// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Run-Directory command line
//!
//! Loads the static session and race datasets and prints one view of them
//! as JSON, the same data the web front end renders.

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use run_directory::{
    config::Config,
    error::{AppError, Result},
    models::{weekday::parse_weekday, DistanceRange, FilterState, RaceType},
    services::{
        format::{race_list_item, session_list_item},
        map::markers_geojson,
    },
    time_utils::today_local,
    Directory,
};
use serde::Serialize;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use validator::Validate;

#[derive(Parser)]
#[command(name = "run-directory")]
#[command(about = "Community running sessions and races - list, calendar and map views")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    #[command(flatten)]
    filter: FilterArgs,
}

#[derive(Subcommand)]
enum Command {
    /// Filtered session list
    Sessions,
    /// Filtered race list
    Races,
    /// Session calendar for the current month
    Calendar,
    /// Race calendar for the current month
    RaceCalendar,
    /// Map markers
    Map {
        /// Emit a GeoJSON FeatureCollection instead of marker objects
        #[arg(long)]
        geojson: bool,
    },
    /// Filter choices: clubs, start hours and the distance range
    Facets,
}

#[derive(Args)]
struct FilterArgs {
    /// Club slug
    #[arg(long, global = true)]
    club: Option<String>,

    /// Weekday name (monday ... sunday)
    #[arg(long, global = true)]
    weekday: Option<String>,

    /// Start hour (0-23)
    #[arg(long, global = true)]
    hour: Option<u8>,

    /// Minimum distance in km
    #[arg(long, global = true)]
    min_km: Option<f64>,

    /// Maximum distance in km
    #[arg(long, global = true)]
    max_km: Option<f64>,

    /// Race type (city, mountain, mix)
    #[arg(long = "type", global = true)]
    race_type: Option<String>,

    /// Include races that are already over
    #[arg(long, global = true)]
    include_past: bool,
}

#[derive(Serialize)]
struct Facets {
    clubs: Vec<run_directory::models::ClubOption>,
    hours: Vec<u8>,
    distance: Option<run_directory::models::DistanceBounds>,
}

fn main() -> ExitCode {
    init_logging();

    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("run-directory: {}", err);
            ExitCode::from(err.exit_code())
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = Config::from_env()?;
    let today = config.today.unwrap_or_else(today_local);
    tracing::info!(
        sessions = %config.sessions_path.display(),
        races = %config.races_path.display(),
        %today,
        "Starting Run-Directory"
    );

    let directory = Directory::load_from_files(&config.sessions_path, &config.races_path)?;
    let filter = build_filter(&cli.filter, &directory)?;
    filter.validate()?;

    let output = match cli.command {
        Command::Sessions => {
            let items: Vec<_> = directory
                .filtered_sessions(&filter)
                .into_iter()
                .map(|s| session_list_item(s, config.locale))
                .collect();
            to_json(&items)?
        }
        Command::Races => {
            let items: Vec<_> = directory
                .filtered_races(&filter, today)
                .into_iter()
                .map(|r| race_list_item(r, config.courses_max, config.locale))
                .collect();
            to_json(&items)?
        }
        Command::Calendar => to_json(&directory.session_calendar(&filter, today))?,
        Command::RaceCalendar => to_json(&directory.race_calendar(&filter, today))?,
        Command::Map { geojson } => {
            let markers = directory.markers(&filter);
            if geojson {
                to_json(&markers_geojson(&markers))?
            } else {
                to_json(&markers)?
            }
        }
        Command::Facets => to_json(&Facets {
            clubs: directory.club_options(),
            hours: directory.hour_options(),
            distance: directory.distance_bounds(),
        })?,
    };

    println!("{}", output);
    Ok(())
}

/// Translate command-line flags into a filter state.
///
/// A lone `--max-km` is the "up to X km" slider: its lower bound is the
/// dataset minimum. A lone `--min-km` runs up to the dataset maximum.
fn build_filter(args: &FilterArgs, directory: &Directory) -> Result<FilterState> {
    let weekday = args
        .weekday
        .as_deref()
        .map(|name| {
            parse_weekday(name)
                .ok_or_else(|| AppError::InvalidFilter(format!("unknown weekday: {}", name)))
        })
        .transpose()?;

    let race_type = args
        .race_type
        .as_deref()
        .map(|raw| raw.parse::<RaceType>().map_err(AppError::InvalidFilter))
        .transpose()?;

    let bounds = directory.distance_bounds();
    let distance = match (args.min_km, args.max_km) {
        (None, None) => None,
        (None, Some(max)) => Some(DistanceRange::up_to(max, bounds)),
        (Some(min), None) => Some(DistanceRange::new(
            min,
            bounds.map(|b| b.max_km.max(min)).unwrap_or(min),
        )),
        (Some(min), Some(max)) => Some(DistanceRange::new(min, max)),
    };

    Ok(FilterState {
        club: args.club.clone(),
        weekday,
        hour: args.hour,
        distance,
        race_type,
        include_past: args.include_past,
    })
}

fn to_json<T: Serialize>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value).context("Failed to serialize output")?)
}

/// Initialize structured JSON logging on stderr.
fn init_logging() {
    let format = tracing_subscriber::fmt::layer()
        .json()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_current_span(true)
        .flatten_event(true);

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("run_directory=debug,info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(format)
        .init();
}
