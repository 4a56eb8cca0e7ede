// SPDX-License-Identifier: MIT
// Copyright (c) 2026 StarTuz

//! Aircraft cost profiles and the catalogue they are looked up in.
//!
//! Only numeric values are stored. Every human-readable figure shown to the
//! user ("€250/hour", "1,040 km") is rendered from the number it describes so
//! the two can never disagree.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use crate::{HangarError, Result};

/// Normalised identifier used to address an aircraft externally.
///
/// Every whitespace character is removed and the rest is upper-cased, so
/// "Cessna 172N" becomes "CESSNA172N".
pub fn aircraft_slug(name: &str) -> String {
    name.chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_uppercase)
        .collect()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AircraftProfile {
    pub name: String,
    pub charter_cost_per_hour: f64,
    pub operating_cost_per_hour: f64,
    pub yearly_fixed_cost: f64,
    /// Informational only, never part of the breakeven figure.
    pub purchase_price: f64,
    pub range_km: f64,

    // Specification sheet. Optional so an external catalogue can omit it.
    #[serde(default)]
    pub empty_weight_kg: Option<f64>,
    #[serde(default)]
    pub max_takeoff_weight_kg: Option<f64>,
    #[serde(default)]
    pub passengers: Option<u32>,
    #[serde(default)]
    pub pilots: Option<u32>,
    #[serde(default)]
    pub baggage_kg: Option<f64>,
    #[serde(default)]
    pub cruise_speed_kmh: Option<f64>,
    #[serde(default)]
    pub fuel_burn_lph: Option<f64>,
}

impl AircraftProfile {
    pub fn slug(&self) -> String {
        aircraft_slug(&self.name)
    }

    /// Rejects negative or non-finite cost and range fields.
    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("charter_cost_per_hour", self.charter_cost_per_hour),
            ("operating_cost_per_hour", self.operating_cost_per_hour),
            ("yearly_fixed_cost", self.yearly_fixed_cost),
            ("purchase_price", self.purchase_price),
            ("range_km", self.range_km),
        ];
        for (field, value) in fields {
            if !value.is_finite() || value < 0.0 {
                return Err(HangarError::InvalidProfile {
                    aircraft: self.name.clone(),
                    field,
                    value,
                });
            }
        }
        Ok(())
    }

    pub fn charter_cost_label(&self) -> String {
        format!("{}/hour", format_euros(self.charter_cost_per_hour))
    }

    pub fn operating_cost_label(&self) -> String {
        format!("{}/hour", format_euros(self.operating_cost_per_hour))
    }

    pub fn yearly_cost_label(&self) -> String {
        format_euros(self.yearly_fixed_cost)
    }

    pub fn purchase_price_label(&self) -> String {
        format_euros(self.purchase_price)
    }

    pub fn range_label(&self) -> String {
        format!("{} km", format_number(self.range_km))
    }

    /// Specification sheet rows as (label, value) pairs, skipping any
    /// figure the catalogue does not provide.
    pub fn spec_sheet(&self) -> Vec<(&'static str, String)> {
        let mut rows = vec![("Cost to charter", self.charter_cost_label())];
        if let Some(kg) = self.empty_weight_kg {
            rows.push(("Empty weight", format!("{} kg", format_number(kg))));
        }
        if let Some(kg) = self.max_takeoff_weight_kg {
            rows.push(("Max takeoff weight", format!("{} kg", format_number(kg))));
        }
        if let Some(seats) = self.seating_label() {
            rows.push(("Passengers + pilot", seats));
        }
        if let Some(kg) = self.baggage_kg {
            rows.push(("Total storage", format!("{} kg baggage", format_number(kg))));
        }
        if let Some(kmh) = self.cruise_speed_kmh {
            rows.push(("Cruise speed", format!("{} km/h", format_number(kmh))));
        }
        rows.push(("Range", self.range_label()));
        if let Some(lph) = self.fuel_burn_lph {
            rows.push(("Fuel consumption", format!("{} L/hour", format_number(lph))));
        }
        rows.push(("Hourly operating cost", self.operating_cost_label()));
        rows
    }

    fn seating_label(&self) -> Option<String> {
        let passengers = self.passengers?;
        let pilots = self.pilots.unwrap_or(1);
        let noun = if pilots == 1 { "pilot" } else { "pilots" };
        Some(format!("{} + {} {}", passengers, pilots, noun))
    }
}

/// Read-only, ordered collection of aircraft. Built once at startup and
/// passed to whoever needs it.
#[derive(Debug, Clone, PartialEq)]
pub struct AircraftCatalogue {
    aircraft: Vec<AircraftProfile>,
}

impl AircraftCatalogue {
    /// Validates every profile and rejects catalogues where two names map to
    /// the same slug, since one of them could never be looked up.
    pub fn new(aircraft: Vec<AircraftProfile>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(aircraft.len());
        for profile in &aircraft {
            profile.validate()?;
            let slug = profile.slug();
            if !seen.insert(slug.clone()) {
                return Err(HangarError::DuplicateAircraft(slug));
            }
        }
        Ok(Self { aircraft })
    }

    /// The compiled-in fleet.
    pub fn builtin() -> Self {
        Self {
            aircraft: vec![AircraftProfile {
                name: "Cessna 172N".to_string(),
                charter_cost_per_hour: 250.0,
                operating_cost_per_hour: 100.0,
                yearly_fixed_cost: 30_000.0,
                purchase_price: 100_000.0,
                range_km: 1040.0,
                empty_weight_kg: Some(757.0),
                max_takeoff_weight_kg: Some(1157.0),
                passengers: Some(3),
                pilots: Some(1),
                baggage_kg: Some(54.0),
                cruise_speed_kmh: Some(185.0),
                fuel_burn_lph: Some(34.0),
            }],
        }
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        let aircraft: Vec<AircraftProfile> = serde_json::from_str(json)?;
        Self::new(aircraft)
    }

    pub fn from_json_reader<R: Read>(reader: R) -> Result<Self> {
        let aircraft: Vec<AircraftProfile> = serde_json::from_reader(reader)?;
        Self::new(aircraft)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path.as_ref())?;
        let catalogue = Self::from_json_reader(BufReader::new(file))?;
        log::debug!(
            "Loaded {} aircraft from {}",
            catalogue.len(),
            path.as_ref().display()
        );
        Ok(catalogue)
    }

    /// Resolves an aircraft by slug. The query goes through the same
    /// normalisation as the names, so "cessna172n" and "Cessna 172N" both hit.
    pub fn find_by_slug(&self, slug: &str) -> Result<&AircraftProfile> {
        let wanted = aircraft_slug(slug);
        self.aircraft
            .iter()
            .find(|a| a.slug() == wanted)
            .ok_or_else(|| HangarError::AircraftNotFound(slug.to_string()))
    }

    pub fn get(&self, index: usize) -> Option<&AircraftProfile> {
        self.aircraft.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &AircraftProfile> {
        self.aircraft.iter()
    }

    pub fn len(&self) -> usize {
        self.aircraft.len()
    }

    pub fn is_empty(&self) -> bool {
        self.aircraft.is_empty()
    }
}

impl Default for AircraftCatalogue {
    fn default() -> Self {
        Self::builtin()
    }
}

fn format_euros(amount: f64) -> String {
    format!("€{}", format_number(amount))
}

/// Thousands-grouped number, with cents only when the value has them.
fn format_number(value: f64) -> String {
    let sign = if value < 0.0 { "-" } else { "" };
    let cents = (value.abs() * 100.0).round() as u64;
    let whole = group_thousands(cents / 100);
    match cents % 100 {
        0 => format!("{}{}", sign, whole),
        frac => format!("{}{}.{:02}", sign, whole, frac),
    }
}

fn group_thousands(mut n: u64) -> String {
    let mut groups = Vec::new();
    loop {
        if n < 1000 {
            groups.push(n.to_string());
            break;
        }
        groups.push(format!("{:03}", n % 1000));
        n /= 1000;
    }
    groups.reverse();
    groups.join(",")
}
