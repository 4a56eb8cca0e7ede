// SPDX-License-Identifier: MIT
// Copyright (c) 2026 StarTuz

//! Homebase search over the airport catalogue.

use crate::airports::AirportRecord;

/// Shorter queries match nearly everything and are ignored.
pub const MIN_QUERY_CHARS: usize = 3;
pub const MAX_RESULTS: usize = 10;

/// Case-insensitive substring match against name, ICAO, IATA and
/// municipality. Results keep catalogue order and stop at [`MAX_RESULTS`].
///
/// The query is not trimmed; whitespace counts towards its length. Absent
/// fields simply don't match.
pub fn filter_airports<'a>(catalogue: &'a [AirportRecord], query: &str) -> Vec<&'a AirportRecord> {
    if query.chars().count() < MIN_QUERY_CHARS {
        return Vec::new();
    }

    let needle = query.to_lowercase();
    let hit = |field: Option<&str>| field.is_some_and(|f| f.to_lowercase().contains(&needle));

    let results: Vec<&AirportRecord> = catalogue
        .iter()
        .filter(|a| {
            hit(Some(&a.name))
                || hit(a.icao_code.as_deref())
                || hit(a.iata_code.as_deref())
                || hit(a.municipality.as_deref())
        })
        .take(MAX_RESULTS)
        .collect();

    log::debug!("[Search] '{}' -> {} result(s)", query, results.len());
    results
}

#[cfg(test)]
mod tests {
    use super::*;

    fn airport(
        name: &str,
        icao: Option<&str>,
        iata: Option<&str>,
        city: Option<&str>,
    ) -> AirportRecord {
        AirportRecord {
            id: name.to_string(),
            ident: icao.unwrap_or_default().to_string(),
            airport_type: None,
            name: name.to_string(),
            latitude_deg: 54.0,
            longitude_deg: 10.0,
            elevation_ft: None,
            iso_country: Some("DE".to_string()),
            iso_region: None,
            municipality: city.map(str::to_string),
            icao_code: icao.map(str::to_string),
            iata_code: iata.map(str::to_string),
        }
    }

    #[test]
    fn test_municipality_match_case_insensitive() {
        let catalogue = vec![airport("Kiel Airport", Some("EDHK"), None, Some("Kiel"))];
        let results = filter_airports(&catalogue, "kiel");
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].icao_code.as_deref(), Some("EDHK"));
    }

    #[test]
    fn test_short_query_returns_nothing() {
        let catalogue = vec![
            airport("Abbeville", Some("LFOI"), None, Some("Abbeville")),
            airport("Aberdeen", Some("EGPD"), Some("ABZ"), Some("Aberdeen")),
        ];
        assert!(filter_airports(&catalogue, "ab").is_empty());
        assert!(filter_airports(&catalogue, "").is_empty());
        let results = filter_airports(&catalogue, "abe");
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].name, "Aberdeen");
        assert_eq!(filter_airports(&catalogue, "abb")[0].name, "Abbeville");
    }

    #[test]
    fn test_whitespace_counts_towards_length() {
        let catalogue = vec![airport("Los Angeles Intl", Some("KLAX"), Some("LAX"), None)];
        // "s a" is three characters and a substring of the name.
        assert_eq!(filter_airports(&catalogue, "s a").len(), 1);
        // Two characters plus nothing: below threshold.
        assert!(filter_airports(&catalogue, " l").is_empty());
    }

    #[test]
    fn test_code_fields_match() {
        let catalogue = vec![
            airport("Hamburg Airport", Some("EDDH"), Some("HAM"), Some("Hamburg")),
            airport("Fuhlsbuettel Heliport", None, None, None),
        ];
        assert_eq!(filter_airports(&catalogue, "eddh").len(), 1);
        assert_eq!(filter_airports(&catalogue, "HAM")[0].name, "Hamburg Airport");
    }

    #[test]
    fn test_absent_fields_do_not_fail() {
        let catalogue = vec![
            airport("Field One", None, None, None),
            airport("Field Two", None, None, Some("Zzyzx")),
        ];
        let results = filter_airports(&catalogue, "zzyzx");
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].name, "Field Two");
    }

    #[test]
    fn test_caps_at_ten_in_catalogue_order() {
        let catalogue: Vec<AirportRecord> = (0..25)
            .map(|i| airport(&format!("Strip {:02}", i), None, None, Some("Nowhere")))
            .collect();
        let results = filter_airports(&catalogue, "strip");
        assert_eq!(results.len(), MAX_RESULTS);
        for (i, a) in results.iter().enumerate() {
            assert_eq!(a.name, format!("Strip {:02}", i));
        }
    }

    #[test]
    fn test_whitespace_only_field_is_searchable() {
        let catalogue = vec![airport("Field", None, None, Some("   "))];
        assert_eq!(filter_airports(&catalogue, "   ").len(), 1);
    }

    #[test]
    fn test_empty_catalogue() {
        assert!(filter_airports(&[], "kiel").is_empty());
    }
}
