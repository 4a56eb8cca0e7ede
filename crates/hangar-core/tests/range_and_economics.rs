// SPDX-License-Identifier: MIT
// Copyright (c) 2026 StarTuz
//
// End-to-end: pick an aircraft by slug, pick a homebase, derive the
// ownership verdict and the map viewport the way the presentation layer does.

use hangar_core::{
    compute_breakeven_hours, fit_bounds, filter_airports, AircraftCatalogue, AirportRecord,
    Breakeven, LatLon, OwnershipAnalysis, RangeCircle,
};

#[test]
fn test_cessna_page_from_kiel() {
    let fleet = AircraftCatalogue::builtin();
    let cessna = fleet.find_by_slug("CESSNA172N").unwrap();

    let analysis = OwnershipAnalysis::for_profile(cessna).unwrap();
    assert_eq!(analysis.breakeven, Breakeven::Hours(200));
    assert_eq!(analysis.breakeven.to_string(), "200 hours/year");

    let homebase = AirportRecord::kiel();
    let circle = RangeCircle::new(homebase.position().unwrap(), cessna);
    assert_eq!(circle.radius_m, 1_040_000.0);

    let viewport = circle.viewport();
    assert_eq!(viewport, fit_bounds(LatLon::KIEL, 1040.0));
    // Hamburg is well inside the Cessna's range from Kiel.
    assert!(viewport.contains(LatLon { lat: 53.63, lon: 9.99 }));
}

#[test]
fn test_repeated_calls_are_bit_identical() {
    let cessna = AircraftCatalogue::builtin().get(0).cloned().unwrap();
    assert_eq!(
        compute_breakeven_hours(&cessna).unwrap(),
        compute_breakeven_hours(&cessna).unwrap()
    );

    let a = fit_bounds(LatLon { lat: 54.3792, lon: 10.1450 }, 1040.0);
    let b = fit_bounds(LatLon { lat: 54.3792, lon: 10.1450 }, 1040.0);
    for (x, y) in [
        (a.south_west.lat, b.south_west.lat),
        (a.south_west.lon, b.south_west.lon),
        (a.north_east.lat, b.north_east.lat),
        (a.north_east.lon, b.north_east.lon),
    ] {
        assert_eq!(x.to_bits(), y.to_bits());
    }

    let catalogue = vec![AirportRecord::kiel()];
    let first: Vec<_> = filter_airports(&catalogue, "kie").iter().map(|a| a.id.clone()).collect();
    let second: Vec<_> = filter_airports(&catalogue, "kie").iter().map(|a| a.id.clone()).collect();
    assert_eq!(first, second);
}

#[test]
fn test_near_pole_homebase_stays_finite() {
    let cessna = AircraftCatalogue::builtin().get(0).cloned().unwrap();
    let circle = RangeCircle::new(LatLon { lat: 89.9, lon: 0.0 }, &cessna);
    let viewport = circle.viewport();
    assert!(viewport.lon_delta().is_finite());
    assert!(!viewport.south_west.lon.is_nan());
    assert!(!viewport.north_east.lon.is_nan());
}
