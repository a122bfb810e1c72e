//! Per-year energy price series with compounding inflation.
use crate::params::GlobalParams;
use crate::units::{Dimensionless, MoneyPerKilowattHour, MoneyPerLitre};
use crate::vehicle::VehicleSpec;
use float_cmp::approx_eq;
use log::warn;

/// Compounding multipliers `[1, (1+rate), (1+rate)^2, ...]`, one per ownership
/// year, starting at exponent 0 for the first year.
pub fn inflation_multipliers(rate: Dimensionless, years: u32) -> Vec<Dimensionless> {
    (0..years)
        .map(|t| (Dimensionless(1.0) + rate).powi(t as i32))
        .collect()
}

/// Weighted-average electricity price across home/work/public charging.
///
/// The weights are taken as-is: if they do not sum to 1 the result is simply
/// the raw weighted sum. Normalisation is the caller's responsibility; a
/// deviation is logged as a warning but never corrected.
pub fn weighted_electricity_price(spec: &VehicleSpec) -> MoneyPerKilowattHour {
    let total = spec.w_home + spec.w_work + spec.w_public;
    if !approx_eq!(f64, total.value(), 1.0, epsilon = 1e-6) {
        warn!(
            "Charging weights for {} sum to {} rather than 1; using the raw weighted sum",
            spec.tech,
            total.value()
        );
    }

    spec.elec_price_home * spec.w_home
        + spec.elec_price_work * spec.w_work
        + spec.elec_price_public * spec.w_public
}

/// Nominal energy prices for each ownership year.
#[derive(Clone, Debug, PartialEq)]
pub struct EnergyPrices {
    /// Fuel price per ownership year (CHF/L)
    pub fuel: Vec<MoneyPerLitre>,
    /// Electricity price per ownership year (CHF/kWh)
    pub electricity: Vec<MoneyPerKilowattHour>,
}

impl EnergyPrices {
    /// Build the fuel and electricity price series for the full horizon
    pub fn build(spec: &VehicleSpec, params: &GlobalParams) -> Self {
        let multipliers = inflation_multipliers(params.energy_inflation, params.years);
        let elec_base = weighted_electricity_price(spec);

        Self {
            fuel: multipliers.iter().map(|&m| spec.fuel_price * m).collect(),
            electricity: multipliers.iter().map(|&m| elec_base * m).collect(),
        }
    }

    /// Prices for the given 1-based ownership year.
    ///
    /// # Panics
    ///
    /// Panics if `year` is outside `1..=horizon`.
    pub fn for_year(&self, year: u32) -> (MoneyPerLitre, MoneyPerKilowattHour) {
        let index = (year - 1) as usize;
        (self.fuel[index], self.electricity[index])
    }
}
