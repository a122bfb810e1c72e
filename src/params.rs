//! Global economic and usage parameters shared by every technology.
use crate::units::{Dimensionless, Kilometres};
use anyhow::{Result, ensure};
use serde::{Deserialize, Serialize};

/// Macro-economic and usage assumptions for one computation run.
///
/// Created once per run and never mutated during computation. The engine
/// itself accepts a zero-year horizon (yielding an empty annual table);
/// [`GlobalParams::validate`] applies the stricter constraints expected of
/// user-supplied input.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct GlobalParams {
    /// Ownership horizon in whole years
    pub years: u32,
    /// Annual distance driven (km)
    pub km_per_year: Kilometres,
    /// Discount rate (decimal; may be zero or negative)
    pub discount_rate: Dimensionless,
    /// Energy-price inflation rate (decimal)
    pub energy_inflation: Dimensionless,
    /// Operating-expense inflation rate (decimal)
    pub opex_inflation: Dimensionless,
    /// Whether the base tire cost is doubled
    pub include_tires_x2: bool,
    /// Whether annual maintenance is raised by 7/6 beyond year 6
    pub apply_maint_7_over_6: bool,
}

impl Default for GlobalParams {
    fn default() -> Self {
        Self {
            years: 8,
            km_per_year: Kilometres(15_000.0),
            discount_rate: Dimensionless(0.04),
            energy_inflation: Dimensionless(0.02),
            opex_inflation: Dimensionless(0.015),
            include_tires_x2: true,
            apply_maint_7_over_6: true,
        }
    }
}

impl GlobalParams {
    /// Check that user-supplied parameters are in sensible ranges
    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.years >= 1,
            "Ownership horizon must be at least one year (got {})",
            self.years
        );
        ensure!(
            self.km_per_year.is_finite() && self.km_per_year >= Kilometres(0.0),
            "Annual distance must be a non-negative number (got {})",
            self.km_per_year.value()
        );
        for (name, rate) in [
            ("Discount rate", self.discount_rate),
            ("Energy inflation", self.energy_inflation),
            ("OPEX inflation", self.opex_inflation),
        ] {
            ensure!(
                rate.is_finite() && rate > Dimensionless(-1.0),
                "{name} must be a finite decimal greater than -1 (got {})",
                rate.value()
            );
        }
        Ok(())
    }

    /// Total distance driven over the full ownership horizon
    pub fn total_distance(&self) -> Kilometres {
        self.km_per_year * Dimensionless(self.years as f64)
    }
}
