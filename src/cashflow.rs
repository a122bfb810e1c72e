//! Operating costs for a single ownership year and the per-technology energy
//! cost formulas.
use crate::params::GlobalParams;
use crate::pricing::EnergyPrices;
use crate::units::{
    Dimensionless, Kilometres, KilowattHoursPerHundredKm, LitresPerHundredKm, Money,
    MoneyPerKilowattHour, MoneyPerLitre,
};
use crate::vehicle::{Technology, VehicleSpec};

/// Energy cost for driving `distance` on fuel
pub fn fuel_energy_cost(
    consumption: LitresPerHundredKm,
    distance: Kilometres,
    price: MoneyPerLitre,
) -> Money {
    consumption.fuel_for(distance) * price
}

/// Energy cost for driving `distance` on electricity
pub fn electric_energy_cost(
    consumption: KilowattHoursPerHundredKm,
    distance: Kilometres,
    price: MoneyPerKilowattHour,
) -> Money {
    consumption.energy_for(distance) * price
}

/// Energy cost for a plug-in hybrid: the electric formula applied to the
/// electric-mode share of the distance plus the combustion formula applied to
/// the remainder. The share is clamped to `[0, 1]`.
pub fn hybrid_energy_cost(
    consumption_fuel: LitresPerHundredKm,
    consumption_elec: KilowattHoursPerHundredKm,
    share_elec: Dimensionless,
    distance: Kilometres,
    fuel_price: MoneyPerLitre,
    elec_price: MoneyPerKilowattHour,
) -> Money {
    let share_elec = share_elec.clamp(0.0, 1.0);
    electric_energy_cost(consumption_elec, distance * share_elec, elec_price)
        + fuel_energy_cost(
            consumption_fuel,
            distance * (Dimensionless(1.0) - share_elec),
            fuel_price,
        )
}

/// The nominal operating costs incurred in a single ownership year.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OperatingCosts {
    /// Energy cost (fuel and/or electricity)
    pub energy: Money,
    /// Maintenance cost
    pub maintenance: Money,
    /// Tire-replacement cost
    pub tires: Money,
    /// Other costs (placeholder, currently always zero)
    pub other: Money,
}

impl OperatingCosts {
    /// Total operating expense for the year
    pub fn total(&self) -> Money {
        self.energy + self.maintenance + self.tires + self.other
    }

    /// The signed cash flow for the year; costs are outflows
    pub fn cash_flow(&self) -> Money {
        -self.total()
    }
}

/// Compute the operating costs for the given 1-based ownership year, combining
/// the technology-specific energy cost with that year's maintenance and tire
/// amounts.
pub fn operating_costs_for_year(
    spec: &VehicleSpec,
    params: &GlobalParams,
    prices: &EnergyPrices,
    maintenance: &[Money],
    tires: &[Money],
    year: u32,
) -> OperatingCosts {
    let distance = params.km_per_year;
    let (fuel_price, elec_price) = prices.for_year(year);

    let energy = match spec.tech {
        Technology::Ice => fuel_energy_cost(spec.consumption_fuel, distance, fuel_price),
        Technology::Bev => electric_energy_cost(spec.consumption_elec, distance, elec_price),
        Technology::Phev => hybrid_energy_cost(
            spec.consumption_fuel,
            spec.consumption_elec,
            spec.phev_share_elec,
            distance,
            fuel_price,
            elec_price,
        ),
    };

    let index = (year - 1) as usize;
    OperatingCosts {
        energy,
        maintenance: maintenance[index],
        tires: tires[index],
        other: Money(0.0),
    }
}
