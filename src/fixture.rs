//! Fixtures for tests
use crate::params::GlobalParams;
use crate::units::{
    Dimensionless, Kilometres, KilowattHoursPerHundredKm, LitresPerHundredKm, Money,
    MoneyPerKilowattHour, MoneyPerLitre,
};
use crate::vehicle::{Technology, VehicleSpec};
use rstest::fixture;

/// Assert that an error with the given message occurs
macro_rules! assert_error {
    ($result:expr, $msg:expr) => {
        assert_eq!(
            $result.unwrap_err().chain().next().unwrap().to_string(),
            $msg
        );
    };
}
pub(crate) use assert_error;

/// Parameters with no discounting or inflation over a two-year horizon
#[fixture]
pub fn simple_params() -> GlobalParams {
    GlobalParams {
        years: 2,
        km_per_year: Kilometres(10_000.0),
        discount_rate: Dimensionless(0.0),
        energy_inflation: Dimensionless(0.0),
        opex_inflation: Dimensionless(0.0),
        include_tires_x2: false,
        apply_maint_7_over_6: false,
    }
}

/// A combustion midsize car
#[fixture]
pub fn ice_spec() -> VehicleSpec {
    VehicleSpec {
        tech: Technology::Ice,
        vehicle_class: "midsize".to_string(),
        purchase_price: Money(40_000.0),
        residual_rate: Dimensionless(0.35),
        consumption_fuel: LitresPerHundredKm(6.5),
        consumption_elec: KilowattHoursPerHundredKm(0.0),
        fuel_price: MoneyPerLitre(2.0),
        elec_price_home: MoneyPerKilowattHour(0.20),
        elec_price_work: MoneyPerKilowattHour(0.20),
        elec_price_public: MoneyPerKilowattHour(0.50),
        w_home: Dimensionless(0.9),
        w_work: Dimensionless(0.0),
        w_public: Dimensionless(0.1),
        maint_6y: Money(6_600.0),
        tires_base: Money(800.0),
        phev_share_elec: Dimensionless(0.0),
    }
}

/// A battery-electric midsize car with all costs except energy zeroed, charged
/// entirely at home at 0.20 CHF/kWh
#[fixture]
pub fn bev_spec() -> VehicleSpec {
    VehicleSpec {
        tech: Technology::Bev,
        vehicle_class: "midsize".to_string(),
        purchase_price: Money(40_000.0),
        residual_rate: Dimensionless(0.30),
        consumption_fuel: LitresPerHundredKm(0.0),
        consumption_elec: KilowattHoursPerHundredKm(15.0),
        fuel_price: MoneyPerLitre(2.0),
        elec_price_home: MoneyPerKilowattHour(0.20),
        elec_price_work: MoneyPerKilowattHour(0.20),
        elec_price_public: MoneyPerKilowattHour(0.50),
        w_home: Dimensionless(1.0),
        w_work: Dimensionless(0.0),
        w_public: Dimensionless(0.0),
        maint_6y: Money(0.0),
        tires_base: Money(0.0),
        phev_share_elec: Dimensionless(1.0),
    }
}

/// A plug-in hybrid midsize car driving 60% of its distance electrically
#[fixture]
pub fn phev_spec() -> VehicleSpec {
    VehicleSpec {
        tech: Technology::Phev,
        vehicle_class: "midsize".to_string(),
        purchase_price: Money(52_000.0),
        residual_rate: Dimensionless(0.36),
        consumption_fuel: LitresPerHundredKm(5.5),
        consumption_elec: KilowattHoursPerHundredKm(18.0),
        fuel_price: MoneyPerLitre(2.0),
        elec_price_home: MoneyPerKilowattHour(0.20),
        elec_price_work: MoneyPerKilowattHour(0.20),
        elec_price_public: MoneyPerKilowattHour(0.50),
        w_home: Dimensionless(0.9),
        w_work: Dimensionless(0.0),
        w_public: Dimensionless(0.1),
        maint_6y: Money(6_200.0),
        tires_base: Money(800.0),
        phev_share_elec: Dimensionless(0.6),
    }
}
