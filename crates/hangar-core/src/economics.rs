// SPDX-License-Identifier: MIT
// Copyright (c) 2026 StarTuz

//! Own-versus-charter economics.
//!
//! Owning costs `yearly_fixed_cost + operating_cost_per_hour * hours` a year,
//! chartering costs `charter_cost_per_hour * hours`. The breakeven is the
//! utilisation where the two meet:
//!
//! ```text
//! hours = yearly_fixed_cost / (charter_cost_per_hour - operating_cost_per_hour)
//! ```
//!
//! The purchase price is a one-off and does not enter the yearly comparison.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::aircraft::AircraftProfile;
use crate::{HangarError, Result};

/// Annual utilisation above which owning beats chartering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Breakeven {
    /// Whole hours per year, rounded half away from zero.
    Hours(u64),
    /// Operating cost alone meets or exceeds the charter rate.
    Never,
}

impl Breakeven {
    pub fn hours(self) -> Option<u64> {
        match self {
            Breakeven::Hours(h) => Some(h),
            Breakeven::Never => None,
        }
    }
}

impl fmt::Display for Breakeven {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Breakeven::Hours(h) => write!(f, "{} hours/year", h),
            Breakeven::Never => write!(f, "N/A"),
        }
    }
}

pub fn compute_breakeven_hours(profile: &AircraftProfile) -> Result<Breakeven> {
    let costs = [
        ("charter_cost_per_hour", profile.charter_cost_per_hour),
        ("operating_cost_per_hour", profile.operating_cost_per_hour),
        ("yearly_fixed_cost", profile.yearly_fixed_cost),
    ];
    for (field, value) in costs {
        if !value.is_finite() || value < 0.0 {
            return Err(HangarError::InvalidProfile {
                aircraft: profile.name.clone(),
                field,
                value,
            });
        }
    }

    let per_hour_savings = profile.charter_cost_per_hour - profile.operating_cost_per_hour;
    if per_hour_savings <= 0.0 {
        return Ok(Breakeven::Never);
    }

    // Both operands are non-negative here, so round() is round-half-up.
    let hours = (profile.yearly_fixed_cost / per_hour_savings).round();
    // 2^64 itself is out of range; `as` would saturate silently.
    if !hours.is_finite() || hours >= u64::MAX as f64 {
        return Err(HangarError::InvalidProfile {
            aircraft: profile.name.clone(),
            field: "yearly_fixed_cost",
            value: profile.yearly_fixed_cost,
        });
    }
    Ok(Breakeven::Hours(hours as u64))
}

/// Yearly cost comparison for one aircraft.
#[derive(Debug, Clone, PartialEq)]
pub struct OwnershipAnalysis {
    pub charter_cost_per_hour: f64,
    pub operating_cost_per_hour: f64,
    pub yearly_fixed_cost: f64,
    pub breakeven: Breakeven,
}

impl OwnershipAnalysis {
    pub fn for_profile(profile: &AircraftProfile) -> Result<Self> {
        let breakeven = compute_breakeven_hours(profile)?;
        Ok(Self {
            charter_cost_per_hour: profile.charter_cost_per_hour,
            operating_cost_per_hour: profile.operating_cost_per_hour,
            yearly_fixed_cost: profile.yearly_fixed_cost,
            breakeven,
        })
    }

    /// Total yearly cost of owning at the given utilisation.
    pub fn owning_cost(&self, hours: f64) -> f64 {
        self.yearly_fixed_cost + self.operating_cost_per_hour * hours
    }

    /// Total yearly cost of chartering the same hours.
    pub fn charter_cost(&self, hours: f64) -> f64 {
        self.charter_cost_per_hour * hours
    }

    pub fn ownership_favorable(&self, hours: f64) -> bool {
        self.owning_cost(hours) < self.charter_cost(hours)
    }

    pub fn summary(&self) -> String {
        match self.breakeven {
            Breakeven::Hours(h) => format!(
                "Flying {}+ hours per year makes ownership more cost-effective than chartering.",
                h
            ),
            Breakeven::Never => "Ownership never breaks even against chartering.".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn costs(charter: f64, operating: f64, yearly: f64) -> AircraftProfile {
        AircraftProfile {
            name: "Test".to_string(),
            charter_cost_per_hour: charter,
            operating_cost_per_hour: operating,
            yearly_fixed_cost: yearly,
            purchase_price: 0.0,
            range_km: 0.0,
            empty_weight_kg: None,
            max_takeoff_weight_kg: None,
            passengers: None,
            pilots: None,
            baggage_kg: None,
            cruise_speed_kmh: None,
            fuel_burn_lph: None,
        }
    }

    #[test]
    fn test_cessna_breakeven() {
        let result = compute_breakeven_hours(&costs(250.0, 100.0, 30_000.0)).unwrap();
        assert_eq!(result, Breakeven::Hours(200));
    }

    #[test]
    fn test_equal_rates_never_break_even() {
        for yearly in [0.0, 1.0, 30_000.0, 1e9] {
            let result = compute_breakeven_hours(&costs(80.0, 80.0, yearly)).unwrap();
            assert_eq!(result, Breakeven::Never);
        }
    }

    #[test]
    fn test_operating_above_charter_never_breaks_even() {
        let result = compute_breakeven_hours(&costs(100.0, 150.0, 5_000.0)).unwrap();
        assert_eq!(result, Breakeven::Never);
        assert_eq!(result.hours(), None);
    }

    #[test]
    fn test_zero_fixed_cost_is_zero_hours() {
        let result = compute_breakeven_hours(&costs(120.0, 60.0, 0.0)).unwrap();
        assert_eq!(result, Breakeven::Hours(0));
        assert_ne!(result, Breakeven::Never);
    }

    #[test]
    fn test_rounds_half_up() {
        // 250 / 100 = 2.5
        assert_eq!(
            compute_breakeven_hours(&costs(150.0, 50.0, 250.0)).unwrap(),
            Breakeven::Hours(3)
        );
        // 1000 / 300 = 3.33
        assert_eq!(
            compute_breakeven_hours(&costs(400.0, 100.0, 1000.0)).unwrap(),
            Breakeven::Hours(3)
        );
    }

    #[test]
    fn test_negative_inputs_rejected() {
        let err = compute_breakeven_hours(&costs(250.0, 100.0, -1.0)).unwrap_err();
        assert!(matches!(
            err,
            HangarError::InvalidProfile { field: "yearly_fixed_cost", .. }
        ));
        assert!(compute_breakeven_hours(&costs(-250.0, 100.0, 10.0)).is_err());
        assert!(compute_breakeven_hours(&costs(250.0, -100.0, 10.0)).is_err());
        assert!(compute_breakeven_hours(&costs(f64::INFINITY, 100.0, 10.0)).is_err());
    }

    #[test]
    fn test_unrepresentable_breakeven_rejected() {
        for profile in [costs(2.0, 1.0, 1e25), costs(1e-300, 0.0, 1e10)] {
            let err = compute_breakeven_hours(&profile).unwrap_err();
            assert!(matches!(
                err,
                HangarError::InvalidProfile { field: "yearly_fixed_cost", .. }
            ));
        }
        // Large but representable stays numeric.
        assert_eq!(
            compute_breakeven_hours(&costs(2.0, 1.0, 1e15)).unwrap(),
            Breakeven::Hours(1_000_000_000_000_000)
        );
    }

    #[test]
    fn test_purchase_price_ignored() {
        let mut cheap = costs(250.0, 100.0, 30_000.0);
        let mut dear = cheap.clone();
        cheap.purchase_price = 1.0;
        dear.purchase_price = 10_000_000.0;
        assert_eq!(
            compute_breakeven_hours(&cheap).unwrap(),
            compute_breakeven_hours(&dear).unwrap()
        );
    }

    #[test]
    fn test_analysis_crossover() {
        let analysis = OwnershipAnalysis::for_profile(&costs(250.0, 100.0, 30_000.0)).unwrap();
        assert_eq!(analysis.owning_cost(200.0), analysis.charter_cost(200.0));
        assert!(!analysis.ownership_favorable(150.0));
        assert!(analysis.ownership_favorable(250.0));
        assert_eq!(
            analysis.summary(),
            "Flying 200+ hours per year makes ownership more cost-effective than chartering."
        );
    }

    #[test]
    fn test_analysis_never() {
        let analysis = OwnershipAnalysis::for_profile(&costs(80.0, 80.0, 1_000.0)).unwrap();
        assert!(!analysis.ownership_favorable(10_000.0));
        assert_eq!(analysis.breakeven.to_string(), "N/A");
    }
}
