// SPDX-License-Identifier: MIT
// Copyright (c) 2026 StarTuz

//! Range circle and viewport fitting.
//!
//! The map draws the range as a flat circle, so the viewport is fitted with
//! the same flat-earth approximation instead of a true geodesic. Both must
//! change together if the renderer ever switches to great-circle ranges.

use serde::{Deserialize, Serialize};

use crate::aircraft::AircraftProfile;
use crate::{HangarError, Result};

/// Meters per degree of latitude at the equator, used everywhere.
pub const METERS_PER_DEGREE: f64 = 111_319.9;
/// Margin around the range circle.
pub const PADDING_FACTOR: f64 = 1.2;
/// Floor for cos(latitude) near the poles.
pub const MIN_COS_LAT: f64 = 1e-6;
/// A longitude delta wider than this already spans the globe.
pub const MAX_LON_DELTA: f64 = 180.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLon {
    pub lat: f64,
    pub lon: f64,
}

impl LatLon {
    /// Kiel Airport, the default homebase.
    pub const KIEL: LatLon = LatLon {
        lat: 54.3792,
        lon: 10.1450,
    };

    pub fn new(lat: f64, lon: f64) -> Result<Self> {
        let valid = lat.is_finite()
            && lon.is_finite()
            && (-90.0..=90.0).contains(&lat)
            && (-180.0..=180.0).contains(&lon);
        if !valid {
            return Err(HangarError::InvalidCoordinate { lat, lon });
        }
        Ok(Self { lat, lon })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub south_west: LatLon,
    pub north_east: LatLon,
}

impl BoundingBox {
    pub fn center(&self) -> LatLon {
        LatLon {
            lat: (self.south_west.lat + self.north_east.lat) / 2.0,
            lon: (self.south_west.lon + self.north_east.lon) / 2.0,
        }
    }

    /// Half the latitude span.
    pub fn lat_delta(&self) -> f64 {
        (self.north_east.lat - self.south_west.lat) / 2.0
    }

    /// Half the longitude span.
    pub fn lon_delta(&self) -> f64 {
        (self.north_east.lon - self.south_west.lon) / 2.0
    }

    pub fn contains(&self, point: LatLon) -> bool {
        point.lat >= self.south_west.lat
            && point.lat <= self.north_east.lat
            && point.lon >= self.south_west.lon
            && point.lon <= self.north_east.lon
    }
}

/// Rectangle around `center` that shows a `radius_km` circle plus 20% margin.
///
/// The corners are not wrapped or clamped to valid coordinate ranges; map
/// renderers accept overshooting bounds and the box stays symmetric. A
/// negative or non-finite radius collapses to a zero-size box.
pub fn fit_bounds(center: LatLon, radius_km: f64) -> BoundingBox {
    let radius_km = if radius_km.is_finite() {
        radius_km.max(0.0)
    } else {
        0.0
    };
    let padded_radius_m = radius_km * 1000.0 * PADDING_FACTOR;

    let lat_delta = padded_radius_m / METERS_PER_DEGREE;
    let cos_lat = center.lat.to_radians().cos().abs().max(MIN_COS_LAT);
    let lon_delta = (padded_radius_m / (METERS_PER_DEGREE * cos_lat)).min(MAX_LON_DELTA);

    log::debug!(
        "Fitted {} km around ({}, {}): dlat {:.4}, dlon {:.4}",
        radius_km,
        center.lat,
        center.lon,
        lat_delta,
        lon_delta
    );

    BoundingBox {
        south_west: LatLon {
            lat: center.lat - lat_delta,
            lon: center.lon - lon_delta,
        },
        north_east: LatLon {
            lat: center.lat + lat_delta,
            lon: center.lon + lon_delta,
        },
    }
}

/// The circle a renderer draws for an aircraft's range around a homebase.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RangeCircle {
    pub center: LatLon,
    pub radius_m: f64,
}

impl RangeCircle {
    pub fn new(center: LatLon, aircraft: &AircraftProfile) -> Self {
        Self {
            center,
            radius_m: aircraft.range_km * 1000.0,
        }
    }

    pub fn radius_km(&self) -> f64 {
        self.radius_m / 1000.0
    }

    pub fn viewport(&self) -> BoundingBox {
        fit_bounds(self.center, self.radius_km())
    }
}
