//! Per-year maintenance and tire-replacement cost series.
//!
//! Both series are pure functions of the vehicle specification and the global
//! parameters: a lump-sum baseline is spread over the horizon and inflated
//! with the compounding OPEX rate. A zero-year horizon yields empty series.
use crate::params::GlobalParams;
use crate::units::{Dimensionless, Money};
use crate::vehicle::VehicleSpec;

/// Compounding OPEX inflation multiplier for 1-based ownership year `year`
/// (year 1 has a multiplier of 1).
fn opex_multiplier(rate: Dimensionless, year: u32) -> Dimensionless {
    (Dimensionless(1.0) + rate).powi((year - 1) as i32)
}

/// Nominal maintenance cost for each ownership year.
///
/// The base annual cost is one sixth of the six-year reference cost. Beyond
/// year 6 it is raised by 7/6 when the accelerated-maintenance rule is
/// enabled, then OPEX inflation is compounded on top.
pub fn maintenance_series(spec: &VehicleSpec, params: &GlobalParams) -> Vec<Money> {
    let base_annual = spec.maint_6y / Dimensionless(6.0);

    (1..=params.years)
        .map(|year| {
            let mut annual = base_annual;
            if params.apply_maint_7_over_6 && year > 6 {
                annual = annual * Dimensionless(7.0 / 6.0);
            }
            annual * opex_multiplier(params.opex_inflation, year)
        })
        .collect()
}

/// Nominal tire-replacement cost for each ownership year.
///
/// The base cost (doubled when the tire rule is enabled) is spread uniformly
/// over the horizon, with OPEX inflation compounded on top.
pub fn tire_series(spec: &VehicleSpec, params: &GlobalParams) -> Vec<Money> {
    if params.years == 0 {
        return Vec::new();
    }

    let factor = if params.include_tires_x2 { 2.0 } else { 1.0 };
    let base_annual = spec.tires_base * Dimensionless(factor) / Dimensionless(params.years as f64);

    (1..=params.years)
        .map(|year| base_annual * opex_multiplier(params.opex_inflation, year))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixture::ice_spec;
    use float_cmp::assert_approx_eq;
    use rstest::rstest;

    fn flat_params(years: u32) -> GlobalParams {
        GlobalParams {
            years,
            opex_inflation: Dimensionless(0.0),
            include_tires_x2: false,
            apply_maint_7_over_6: false,
            ..GlobalParams::default()
        }
    }

    #[rstest]
    fn test_maintenance_flat(ice_spec: VehicleSpec) {
        let spec = VehicleSpec {
            maint_6y: Money(6_000.0),
            ..ice_spec
        };
        let series = maintenance_series(&spec, &flat_params(8));
        assert_eq!(series.len(), 8);
        for annual in series {
            assert_approx_eq!(f64, annual.value(), 1_000.0);
        }
    }

    #[rstest]
    fn test_maintenance_accelerated_beyond_year_6(ice_spec: VehicleSpec) {
        let spec = VehicleSpec {
            maint_6y: Money(6_000.0),
            ..ice_spec
        };
        let params = GlobalParams {
            apply_maint_7_over_6: true,
            ..flat_params(8)
        };
        let series = maintenance_series(&spec, &params);

        // The 7/6 rule only applies to years 7 and 8
        for annual in &series[..6] {
            assert_approx_eq!(f64, annual.value(), 1_000.0);
        }
        for annual in &series[6..] {
            assert_approx_eq!(f64, annual.value(), 1_000.0 * 7.0 / 6.0);
        }
    }

    #[rstest]
    fn test_maintenance_inflation_compounds(ice_spec: VehicleSpec) {
        let spec = VehicleSpec {
            maint_6y: Money(6_000.0),
            ..ice_spec
        };
        let params = GlobalParams {
            opex_inflation: Dimensionless(0.015),
            ..flat_params(3)
        };
        let series = maintenance_series(&spec, &params);
        assert_approx_eq!(f64, series[0].value(), 1_000.0);
        assert_approx_eq!(f64, series[1].value(), 1_000.0 * 1.015);
        assert_approx_eq!(f64, series[2].value(), 1_000.0 * 1.015 * 1.015);
    }

    #[rstest]
    #[case(false, 100.0)]
    #[case(true, 200.0)]
    fn test_tires_doubling_rule(
        ice_spec: VehicleSpec,
        #[case] include_tires_x2: bool,
        #[case] expected_annual: f64,
    ) {
        let spec = VehicleSpec {
            tires_base: Money(800.0),
            ..ice_spec
        };
        let params = GlobalParams {
            include_tires_x2,
            ..flat_params(8)
        };
        for annual in tire_series(&spec, &params) {
            assert_approx_eq!(f64, annual.value(), expected_annual);
        }
    }

    #[rstest]
    fn test_zero_horizon_yields_empty_series(ice_spec: VehicleSpec) {
        let params = flat_params(0);
        assert!(maintenance_series(&ice_spec, &params).is_empty());
        assert!(tire_series(&ice_spec, &params).is_empty());
    }
}
