// SPDX-License-Identifier: MIT
// Copyright (c) 2026 StarTuz

//! Computational core of Hangar: ownership economics, airport search and
//! range viewport fitting.
//!
//! Every component here is a pure function over explicitly constructed,
//! read-only catalogues. The presentation layer owns all selection state and
//! only ever reads what these functions return.

pub mod aircraft;
pub mod airports;
pub mod config;
pub mod economics;
pub mod geo;
pub mod search;

pub use aircraft::{aircraft_slug, AircraftCatalogue, AircraftProfile};
pub use airports::{default_homebase, AirportCatalogue, AirportRecord, SharedAirportCatalogue};
pub use config::HangarConfig;
pub use economics::{compute_breakeven_hours, Breakeven, OwnershipAnalysis};
pub use geo::{fit_bounds, BoundingBox, LatLon, RangeCircle};
pub use search::filter_airports;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum HangarError {
    #[error("Invalid value for {field} on '{aircraft}': {value}")]
    InvalidProfile {
        aircraft: String,
        field: &'static str,
        value: f64,
    },
    #[error("Duplicate aircraft slug: {0}")]
    DuplicateAircraft(String),
    #[error("Aircraft not found: {0}")]
    AircraftNotFound(String),
    #[error("Coordinate out of range: lat {lat}, lon {lon}")]
    InvalidCoordinate { lat: f64, lon: f64 },
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, HangarError>;
