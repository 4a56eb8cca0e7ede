// SPDX-License-Identifier: MIT
// Copyright (c) 2026 StarTuz

//! Airport records and the read-only catalogue they live in.
//!
//! Records follow the OurAirports JSON export. Only a handful of fields are
//! used; the rest are accepted and ignored. A record that fails to parse or
//! carries impossible coordinates is skipped with a warning instead of
//! failing the whole load.

use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use std::sync::{Arc, PoisonError, RwLock};

use crate::geo::LatLon;
use crate::search::filter_airports;
use crate::Result;

pub const KIEL_ICAO: &str = "EDHK";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AirportRecord {
    #[serde(deserialize_with = "de::string_or_number")]
    pub id: String,
    #[serde(default)]
    pub ident: String,
    #[serde(rename = "type", default, deserialize_with = "de::non_empty")]
    pub airport_type: Option<String>,
    #[serde(default)]
    pub name: String,
    #[serde(deserialize_with = "de::number")]
    pub latitude_deg: f64,
    #[serde(deserialize_with = "de::number")]
    pub longitude_deg: f64,
    #[serde(default, deserialize_with = "de::optional_number")]
    pub elevation_ft: Option<f64>,
    #[serde(default, deserialize_with = "de::non_empty")]
    pub iso_country: Option<String>,
    #[serde(default, deserialize_with = "de::non_empty")]
    pub iso_region: Option<String>,
    #[serde(default, deserialize_with = "de::non_empty")]
    pub municipality: Option<String>,
    #[serde(default, deserialize_with = "de::non_empty")]
    pub icao_code: Option<String>,
    #[serde(default, deserialize_with = "de::non_empty")]
    pub iata_code: Option<String>,
}

impl AirportRecord {
    /// Fallback homebase when no catalogue is available.
    pub fn kiel() -> Self {
        Self {
            id: "1".to_string(),
            ident: KIEL_ICAO.to_string(),
            airport_type: Some("medium_airport".to_string()),
            name: "Kiel Airport".to_string(),
            latitude_deg: LatLon::KIEL.lat,
            longitude_deg: LatLon::KIEL.lon,
            elevation_ft: Some(102.0),
            iso_country: Some("DE".to_string()),
            iso_region: Some("DE-SH".to_string()),
            municipality: Some("Kiel".to_string()),
            icao_code: Some(KIEL_ICAO.to_string()),
            iata_code: None,
        }
    }

    pub fn position(&self) -> Result<LatLon> {
        LatLon::new(self.latitude_deg, self.longitude_deg)
    }

    /// ICAO code, or the ident for fields that have none assigned.
    pub fn code(&self) -> &str {
        self.icao_code.as_deref().unwrap_or(&self.ident)
    }

    pub fn matches_icao(&self, code: &str) -> bool {
        self.icao_code
            .as_deref()
            .is_some_and(|icao| icao.eq_ignore_ascii_case(code))
            || self.ident.eq_ignore_ascii_case(code)
    }

    /// "Kiel Airport (EDHK)"
    pub fn label(&self) -> String {
        format!("{} ({})", self.name, self.code())
    }

    /// "EDHK • Kiel, DE"
    pub fn detail_line(&self) -> String {
        let place = match (self.municipality.as_deref(), self.iso_country.as_deref()) {
            (Some(city), Some(country)) => format!("{}, {}", city, country),
            (Some(city), None) => city.to_string(),
            (None, Some(country)) => country.to_string(),
            (None, None) => return self.code().to_string(),
        };
        format!("{} • {}", self.code(), place)
    }
}

/// Immutable snapshot of the airport list. Cloning shares the records.
#[derive(Debug, Clone)]
pub struct AirportCatalogue {
    records: Arc<[AirportRecord]>,
}

impl Default for AirportCatalogue {
    fn default() -> Self {
        Self {
            records: Arc::from(Vec::new()),
        }
    }
}

impl AirportCatalogue {
    pub fn new(records: Vec<AirportRecord>) -> Self {
        let total = records.len();
        let records: Vec<AirportRecord> = records
            .into_iter()
            .filter(|r| match r.position() {
                Ok(_) => true,
                Err(e) => {
                    log::warn!("[Airports] Skipping {} ({}): {}", r.code(), r.name, e);
                    false
                }
            })
            .collect();
        log::debug!("[Airports] Catalogue built: {}/{} records", records.len(), total);
        Self {
            records: records.into(),
        }
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        let raw: Vec<serde_json::Value> = serde_json::from_str(json)?;
        Ok(Self::from_values(raw))
    }

    pub fn from_json_reader<R: Read>(reader: R) -> Result<Self> {
        let raw: Vec<serde_json::Value> = serde_json::from_reader(reader)?;
        Ok(Self::from_values(raw))
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        log::debug!("[Airports] Loading catalogue from {:?}", path);
        let file = File::open(path)?;
        Self::from_json_reader(BufReader::new(file))
    }

    fn from_values(raw: Vec<serde_json::Value>) -> Self {
        let records = raw
            .into_iter()
            .enumerate()
            .filter_map(|(i, value)| match serde_json::from_value(value) {
                Ok(record) => Some(record),
                Err(e) => {
                    log::warn!("[Airports] Skipping malformed record #{}: {}", i, e);
                    None
                }
            })
            .collect();
        Self::new(records)
    }

    pub fn records(&self) -> &[AirportRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn find_by_icao(&self, code: &str) -> Option<&AirportRecord> {
        self.records.iter().find(|r| r.matches_icao(code))
    }

    pub fn search(&self, query: &str) -> Vec<&AirportRecord> {
        filter_airports(&self.records, query)
    }
}

/// Holder for a catalogue that may be refreshed in the background.
///
/// Readers take a snapshot and keep using it; a refresh swaps in a whole new
/// catalogue and never touches records someone else is holding.
#[derive(Debug, Default)]
pub struct SharedAirportCatalogue {
    current: RwLock<AirportCatalogue>,
}

impl SharedAirportCatalogue {
    pub fn new(catalogue: AirportCatalogue) -> Self {
        Self {
            current: RwLock::new(catalogue),
        }
    }

    pub fn snapshot(&self) -> AirportCatalogue {
        self.current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Swaps in `catalogue` and returns the one it replaced.
    pub fn replace(&self, catalogue: AirportCatalogue) -> AirportCatalogue {
        let mut guard = self.current.write().unwrap_or_else(PoisonError::into_inner);
        std::mem::replace(&mut *guard, catalogue)
    }
}

/// Picks the starting homebase: the preferred ICAO if present (Kiel also
/// matches by name), else the first German airport, else the built-in Kiel
/// record.
pub fn default_homebase(catalogue: &AirportCatalogue, preferred_icao: &str) -> AirportRecord {
    let is_kiel = preferred_icao.eq_ignore_ascii_case(KIEL_ICAO);
    catalogue
        .records()
        .iter()
        .find(|a| a.matches_icao(preferred_icao) || (is_kiel && a.name.contains("Kiel")))
        .or_else(|| {
            catalogue
                .records()
                .iter()
                .find(|a| a.iso_country.as_deref() == Some("DE"))
        })
        .cloned()
        .unwrap_or_else(|| {
            log::debug!("[Airports] No homebase in catalogue, using built-in Kiel");
            AirportRecord::kiel()
        })
}

mod de {
    use serde::de::Error;
    use serde::{Deserialize, Deserializer};
    use serde_json::Value;

    pub fn string_or_number<'de, D: Deserializer<'de>>(d: D) -> Result<String, D::Error> {
        match Value::deserialize(d)? {
            Value::String(s) => Ok(s),
            Value::Number(n) => Ok(n.to_string()),
            other => Err(D::Error::custom(format!("expected id, got {}", other))),
        }
    }

    /// Absent, null and "" all become `None`.
    pub fn non_empty<'de, D: Deserializer<'de>>(d: D) -> Result<Option<String>, D::Error> {
        let value: Option<String> = Option::deserialize(d)?;
        Ok(value.filter(|s| !s.is_empty()))
    }

    pub fn number<'de, D: Deserializer<'de>>(d: D) -> Result<f64, D::Error> {
        optional_number(d)?.ok_or_else(|| D::Error::custom("missing number"))
    }

    /// Accepts JSON numbers and numeric strings; null and "" are `None`.
    pub fn optional_number<'de, D: Deserializer<'de>>(d: D) -> Result<Option<f64>, D::Error> {
        match Value::deserialize(d)? {
            Value::Null => Ok(None),
            Value::Number(n) => Ok(n.as_f64()),
            Value::String(s) if s.trim().is_empty() => Ok(None),
            Value::String(s) => s
                .trim()
                .parse()
                .map(Some)
                .map_err(|_| D::Error::custom(format!("invalid number '{}'", s))),
            other => Err(D::Error::custom(format!("expected number, got {}", other))),
        }
    }
}
