//! The TCO engine: cash-flow assembly, discounting and aggregation.
//!
//! For each technology the engine builds the full cash-flow sequence (year-0
//! purchase outlay, per-year operating flows, final-year residual inflow),
//! discounts it back to year 0 and aggregates into an NPV and a cost per
//! kilometre. The three technologies are computed independently over the same
//! global parameters.
use crate::amortization::{maintenance_series, tire_series};
use crate::cashflow::operating_costs_for_year;
use crate::params::GlobalParams;
use crate::pricing::EnergyPrices;
use crate::units::{Dimensionless, Kilometres, Money, MoneyPerKilometre};
use crate::vehicle::{Technology, VehicleSpec};
use indexmap::IndexMap;
use serde::Serialize;

/// One ownership year of the annual table (1-indexed).
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct AnnualRow {
    /// Ownership year index, starting at 1
    pub year: u32,
    /// Distance driven during the year
    pub distance: Kilometres,
    /// Nominal energy cost
    pub energy: Money,
    /// Nominal maintenance cost
    pub maintenance: Money,
    /// Nominal tire-replacement cost
    pub tires: Money,
    /// Other costs (placeholder, currently always zero)
    pub other: Money,
    /// Total operating expense for the year
    pub operating_expense: Money,
    /// Signed cash flow; includes the residual-value inflow in the final year
    pub cash_flow: Money,
    /// Cash flow discounted back to year 0
    pub discounted_cash_flow: Money,
    /// Running total of discounted flows, including the year-0 outlay
    pub cumulative_discounted: Money,
}

/// The full-horizon sequence of annual rows plus run-level metadata.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct AnnualTable {
    /// Powertrain technology
    pub tech: Technology,
    /// Vehicle class label
    pub vehicle_class: String,
    /// Purchase price paid in year 0
    pub purchase_price: Money,
    /// One row per ownership year
    pub rows: Vec<AnnualRow>,
}

/// The outcome of a TCO computation for one technology.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Results {
    /// Powertrain technology
    pub tech: Technology,
    /// Vehicle class label
    pub vehicle_class: String,
    /// Sum of all discounted cash flows; cost-heavy scenarios are negative
    pub npv_total: Money,
    /// Cost per kilometre over the full horizon; infinite at zero distance
    pub cost_per_km: MoneyPerKilometre,
    /// Nominal residual value realised at horizon end
    pub residual_value_nominal: Money,
    /// Year-by-year cost and cash-flow table
    pub annual_table: AnnualTable,
}

/// Discount factor `(1+r)^year` converting a nominal year-`year` amount into
/// its year-0 equivalent (year 0 has a factor of 1).
pub fn discount_factor(rate: Dimensionless, year: u32) -> Dimensionless {
    (Dimensionless(1.0) + rate).powi(year as i32)
}

/// Net present value of a cash-flow sequence indexed from year 0.
///
/// A zero discount rate degenerates to the plain undiscounted sum, handled as
/// an explicit branch.
fn npv(cash_flows: &[Money], rate: Dimensionless) -> Money {
    if rate == Dimensionless(0.0) {
        return cash_flows.iter().copied().sum();
    }

    cash_flows
        .iter()
        .enumerate()
        .map(|(year, &flow)| flow / discount_factor(rate, year as u32))
        .sum()
}

/// Compute the TCO of a single vehicle over the full ownership horizon.
pub fn compute_tco_vehicle(params: &GlobalParams, spec: &VehicleSpec) -> Results {
    let prices = EnergyPrices::build(spec, params);
    let maintenance = maintenance_series(spec, params);
    let tires = tire_series(spec, params);

    // The year-0 purchase outlay is never discounted
    let mut cash_flows = vec![-spec.purchase_price];
    let mut rows = Vec::with_capacity(params.years as usize);

    for year in 1..=params.years {
        let costs = operating_costs_for_year(spec, params, &prices, &maintenance, &tires, year);
        rows.push(AnnualRow {
            year,
            distance: params.km_per_year,
            energy: costs.energy,
            maintenance: costs.maintenance,
            tires: costs.tires,
            other: costs.other,
            operating_expense: costs.total(),
            cash_flow: costs.cash_flow(),
            // Filled in after the residual value is applied
            discounted_cash_flow: Money(0.0),
            cumulative_discounted: Money(0.0),
        });
        cash_flows.push(costs.cash_flow());
    }

    // The residual value is realised with the final operating year. With a
    // zero-year horizon there is no sale event and nothing is recovered.
    let residual_value_nominal = if params.years > 0 {
        spec.purchase_price * spec.residual_rate
    } else {
        Money(0.0)
    };
    if let Some(last) = rows.last_mut() {
        last.cash_flow += residual_value_nominal;
        *cash_flows.last_mut().unwrap() += residual_value_nominal; // NB: never empty
    }

    let mut cumulative = cash_flows[0];
    for row in &mut rows {
        row.discounted_cash_flow = row.cash_flow / discount_factor(params.discount_rate, row.year);
        cumulative += row.discounted_cash_flow;
        row.cumulative_discounted = cumulative;
    }

    let npv_total = npv(&cash_flows, params.discount_rate);
    let total_distance = params.total_distance();
    let cost_per_km = if total_distance > Kilometres(0.0) {
        npv_total.abs() / total_distance
    } else {
        MoneyPerKilometre(f64::INFINITY)
    };

    Results {
        tech: spec.tech,
        vehicle_class: spec.vehicle_class.clone(),
        npv_total,
        cost_per_km,
        residual_value_nominal,
        annual_table: AnnualTable {
            tech: spec.tech,
            vehicle_class: spec.vehicle_class.clone(),
            purchase_price: spec.purchase_price,
            rows,
        },
    }
}

/// Compute the TCO for every supplied technology over the same parameters.
///
/// This is a convenience wrapper with no semantics beyond iterating
/// [`compute_tco_vehicle`].
pub fn compute_all_techs(
    params: &GlobalParams,
    specs: &IndexMap<Technology, VehicleSpec>,
) -> IndexMap<Technology, Results> {
    specs
        .iter()
        .map(|(&tech, spec)| (tech, compute_tco_vehicle(params, spec)))
        .collect()
}
