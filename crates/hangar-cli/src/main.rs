// SPDX-License-Identifier: MIT
// Copyright (c) 2026 StarTuz

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use hangar_core::{
    default_homebase, fit_bounds, AircraftCatalogue, AircraftProfile, AirportCatalogue,
    AirportRecord, BoundingBox, HangarConfig, HangarError, LatLon, OwnershipAnalysis,
    RangeCircle,
};
use log::LevelFilter;
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Config file (defaults to the per-user config directory)
    #[arg(short, long, env = "HANGAR_CONFIG")]
    config: Option<PathBuf>,

    /// Airport catalogue JSON (OurAirports export)
    #[arg(long, env = "HANGAR_AIRPORTS")]
    airports: Option<PathBuf>,

    /// Aircraft catalogue JSON; the built-in fleet is used otherwise
    #[arg(long, env = "HANGAR_AIRCRAFT")]
    aircraft: Option<PathBuf>,

    /// More log output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the aircraft catalogue
    List,
    /// Ownership analysis and range map for one aircraft
    Show {
        /// Aircraft slug, e.g. CESSNA172N
        slug: String,
        /// Homebase ICAO code
        #[arg(long)]
        homebase: Option<String>,
    },
    /// Search the airport catalogue (name, ICAO, IATA, city)
    Search { query: String },
    /// Map viewport for a range circle
    #[command(allow_negative_numbers = true)]
    Bounds {
        lat: f64,
        lon: f64,
        radius_km: f64,
    },
}

/// Config and catalogues for one invocation. Loaded once, then only read.
struct Session {
    config: HangarConfig,
    fleet: AircraftCatalogue,
    airports: AirportCatalogue,
}

impl Session {
    fn open(cli: &Cli) -> Result<Self> {
        let config = match &cli.config {
            Some(path) => HangarConfig::load_from(path)?,
            None => HangarConfig::load()?,
        };

        let fleet = match cli.aircraft.as_ref().or(config.aircraft_path.as_ref()) {
            Some(path) => AircraftCatalogue::load(path)
                .with_context(|| format!("Failed to load aircraft from {:?}", path))?,
            None => AircraftCatalogue::builtin(),
        };

        let airports = match cli.airports.as_ref().or(config.airports_path.as_ref()) {
            Some(path) => AirportCatalogue::load(path)
                .with_context(|| format!("Failed to load airports from {:?}", path))?,
            None => {
                log::warn!("No airport catalogue configured; search is disabled");
                AirportCatalogue::default()
            }
        };
        log::info!(
            "Loaded {} aircraft and {} airports",
            fleet.len(),
            airports.len()
        );

        Ok(Self {
            config,
            fleet,
            airports,
        })
    }

    fn homebase(&self, icao: Option<&str>) -> Result<AirportRecord> {
        let Some(icao) = icao else {
            return Ok(default_homebase(
                &self.airports,
                &self.config.default_homebase_icao,
            ));
        };
        if let Some(airport) = self.airports.find_by_icao(icao) {
            return Ok(airport.clone());
        }
        let kiel = AirportRecord::kiel();
        if kiel.matches_icao(icao) {
            return Ok(kiel);
        }
        anyhow::bail!("Airport '{}' not found in the airport catalogue", icao)
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => std::env::var("HANGAR_LOG")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(LevelFilter::Warn),
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    // Only fails if a logger is already installed.
    let _ = TermLogger::init(
        level,
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    );
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match &cli.command {
        Commands::List => {
            let session = Session::open(&cli)?;
            for plane in session.fleet.iter() {
                println!("{:<24} {}", plane.name, plane.slug());
            }
        }
        Commands::Show { slug, homebase } => {
            let session = Session::open(&cli)?;
            let plane = match session.fleet.find_by_slug(slug) {
                Ok(plane) => plane,
                Err(HangarError::AircraftNotFound(_)) => {
                    println!("Aircraft Not Found");
                    println!("The aircraft you're looking for doesn't exist in our database.");
                    anyhow::bail!("no aircraft matches '{}'", slug);
                }
                Err(e) => return Err(e.into()),
            };
            let homebase = session.homebase(homebase.as_deref())?;
            print_aircraft(plane, &homebase)?;
        }
        Commands::Search { query } => {
            let session = Session::open(&cli)?;
            let results = session.airports.search(query);
            if results.is_empty() {
                println!("No airports matching '{}'", query);
            }
            for airport in results {
                println!("{}", airport.name);
                println!("    {}", airport.detail_line());
            }
        }
        Commands::Bounds {
            lat,
            lon,
            radius_km,
        } => {
            let center = LatLon::new(*lat, *lon)?;
            print_viewport(&fit_bounds(center, *radius_km));
        }
    }

    Ok(())
}

fn print_aircraft(plane: &AircraftProfile, homebase: &AirportRecord) -> Result<()> {
    println!("{}", plane.name);
    println!("{}", "=".repeat(plane.name.chars().count()));

    println!("\nSpecifications");
    for (label, value) in plane.spec_sheet() {
        println!("  {:<24}{}", format!("{}:", label), value);
    }

    println!("\nPurchase Price");
    println!("  {:<24}{}", "Purchase price:", plane.purchase_price_label());

    let analysis = OwnershipAnalysis::for_profile(plane)?;
    println!("\nOwnership Analysis");
    println!("  {:<24}{}", "Yearly costs:", plane.yearly_cost_label());
    println!("  {:<24}{}", "Breakeven hours:", analysis.breakeven);
    println!("  {}", analysis.summary());

    let circle = RangeCircle::new(homebase.position()?, plane);
    println!("\nRange from {}", homebase.label());
    println!(
        "  {:<24}{:.4}, {:.4}",
        "Center:", circle.center.lat, circle.center.lon
    );
    println!("  {:<24}{}", "Radius:", plane.range_label());
    print_viewport(&circle.viewport());
    Ok(())
}

fn print_viewport(bbox: &BoundingBox) {
    println!(
        "  {:<24}{:.4}, {:.4}",
        "Viewport south-west:", bbox.south_west.lat, bbox.south_west.lon
    );
    println!(
        "  {:<24}{:.4}, {:.4}",
        "Viewport north-east:", bbox.north_east.lat, bbox.north_east.lon
    );
}
