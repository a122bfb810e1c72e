//! CAPEX/OPEX decomposition of a TCO result and the consistency check.
//!
//! The decomposition re-discounts every cost category independently from the
//! nominal amounts in the annual table. It deliberately does not reuse the
//! engine's running cumulative total, so a bug in one cannot mask a bug in the
//! other. The consistency check is advisory: it reports pass/fail with the
//! compared magnitudes rather than blocking the run.
use crate::params::GlobalParams;
use crate::tco::{Results, discount_factor};
use crate::units::Money;
use crate::vehicle::Technology;
use indexmap::IndexMap;
use strum::{Display, EnumIter, IntoEnumIterator};

/// The tolerance below which the reconciliation is considered exact (CHF).
pub const DEFAULT_TOLERANCE: Money = Money(0.01);

/// A cost category of the decomposed TCO.
#[derive(Clone, Copy, Debug, Display, EnumIter, Eq, Hash, PartialEq)]
pub enum CostCategory {
    /// Purchase price net of the discounted residual value
    #[strum(serialize = "Acquisition (net of residual value)")]
    Acquisition,
    /// Fuel and electricity
    Energy,
    /// Maintenance
    Maintenance,
    /// Tire replacement
    Tires,
    /// Other costs (placeholder, currently always zero)
    Other,
}

/// Discounted cost totals per category, recomputed from the nominal annual
/// amounts.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Decomposition {
    /// Purchase price minus the discounted residual value
    pub net_acquisition: Money,
    /// Discounted energy costs
    pub energy: Money,
    /// Discounted maintenance costs
    pub maintenance: Money,
    /// Discounted tire costs
    pub tires: Money,
    /// Discounted other costs
    pub other: Money,
}

impl Decomposition {
    /// The amount attributed to a single category
    pub fn amount(&self, category: CostCategory) -> Money {
        match category {
            CostCategory::Acquisition => self.net_acquisition,
            CostCategory::Energy => self.energy,
            CostCategory::Maintenance => self.maintenance,
            CostCategory::Tires => self.tires,
            CostCategory::Other => self.other,
        }
    }

    /// Sum of all discounted operating categories, excluding acquisition
    pub fn operating_total(&self) -> Money {
        self.energy + self.maintenance + self.tires + self.other
    }

    /// Sum of all categories; reconciles with `|NPV|` when the engine and the
    /// decomposition agree
    pub fn total(&self) -> Money {
        self.net_acquisition + self.operating_total()
    }
}

/// Decompose a TCO result into discounted per-category totals.
pub fn decompose(results: &Results, params: &GlobalParams) -> Decomposition {
    let rate = params.discount_rate;

    let mut energy = Money(0.0);
    let mut maintenance = Money(0.0);
    let mut tires = Money(0.0);
    let mut other = Money(0.0);
    for row in &results.annual_table.rows {
        let factor = discount_factor(rate, row.year);
        energy += row.energy / factor;
        maintenance += row.maintenance / factor;
        tires += row.tires / factor;
        other += row.other / factor;
    }

    let horizon = results.annual_table.rows.last().map_or(0, |row| row.year);
    let residual_discounted = results.residual_value_nominal / discount_factor(rate, horizon);
    let net_acquisition = results.annual_table.purchase_price - residual_discounted;

    Decomposition {
        net_acquisition,
        energy,
        maintenance,
        tires,
        other,
    }
}

/// The outcome of the reconciliation check, with the compared magnitudes for
/// diagnostic display.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ConsistencyReport {
    /// Whether `|NPV|` matches the decomposition total within tolerance
    pub passed: bool,
    /// The magnitude of the engine's NPV
    pub npv_magnitude: Money,
    /// Purchase price minus the discounted residual value
    pub net_acquisition: Money,
    /// Sum of the discounted operating categories
    pub operating_discounted: Money,
}

/// Check that `|NPV|` matches `net_acquisition + discounted operating costs`
/// within the given absolute tolerance.
pub fn check_consistency(
    results: &Results,
    params: &GlobalParams,
    tolerance: Money,
) -> ConsistencyReport {
    let decomposition = decompose(results, params);
    let npv_magnitude = results.npv_total.abs();
    let difference = (npv_magnitude - decomposition.total()).abs();

    ConsistencyReport {
        passed: difference <= tolerance,
        npv_magnitude,
        net_acquisition: decomposition.net_acquisition,
        operating_discounted: decomposition.operating_total(),
    }
}

/// One (technology, category) entry of the long-form decomposition table.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DecompositionRow {
    /// Powertrain technology
    pub tech: Technology,
    /// Cost category
    pub category: CostCategory,
    /// Discounted amount attributed to the category
    pub amount: Money,
}

/// Project a results mapping into long-form (technology, category, amount)
/// rows. The per-technology sum of amounts equals `|NPV|` within tolerance.
pub fn decomposition_rows(
    results: &IndexMap<Technology, Results>,
    params: &GlobalParams,
) -> Vec<DecompositionRow> {
    results
        .iter()
        .flat_map(|(&tech, res)| {
            let decomposition = decompose(res, params);
            CostCategory::iter().map(move |category| DecompositionRow {
                tech,
                category,
                amount: decomposition.amount(category),
            })
        })
        .collect()
}

/// The cumulative discounted cost at one ownership year, reported as a
/// positive magnitude.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CumulativeCost {
    /// Ownership year index, starting at 1
    pub year: u32,
    /// Cumulative discounted cost up to and including this year
    pub cumulative: Money,
}

/// The cumulative discounted cost per year for one technology.
pub fn cumulative_costs(results: &Results) -> Vec<CumulativeCost> {
    results
        .annual_table
        .rows
        .iter()
        .map(|row| CumulativeCost {
            year: row.year,
            cumulative: row.cumulative_discounted.abs(),
        })
        .collect()
}
