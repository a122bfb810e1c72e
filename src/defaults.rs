//! Loading and querying the per-class vehicle defaults table.
//!
//! The table is a nested mapping keyed by vehicle class and technology,
//! loaded once from JSON and immutable afterwards. Lookup failures carry the
//! offending key and the available alternatives; nothing is ever silently
//! defaulted.
use crate::units::{
    Dimensionless, KilowattHoursPerHundredKm, LitresPerHundredKm, Money, MoneyPerKilowattHour,
    MoneyPerLitre,
};
use crate::vehicle::{Technology, VehicleSpec};
use anyhow::{Context, Result, ensure};
use indexmap::IndexMap;
use itertools::Itertools;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// The defaults table shipped with the program
const BUILTIN_DEFAULTS: &str = include_str!("../data/defaults_by_class.json");

/// Baseline fuel price used when building a spec from defaults (CHF/L)
pub const BASE_FUEL_PRICE: MoneyPerLitre = MoneyPerLitre(2.00);
/// Baseline home electricity price (CHF/kWh)
pub const BASE_ELEC_PRICE_HOME: MoneyPerKilowattHour = MoneyPerKilowattHour(0.20);
/// Baseline workplace electricity price (CHF/kWh)
pub const BASE_ELEC_PRICE_WORK: MoneyPerKilowattHour = MoneyPerKilowattHour(0.20);
/// Baseline public-charging electricity price (CHF/kWh)
pub const BASE_ELEC_PRICE_PUBLIC: MoneyPerKilowattHour = MoneyPerKilowattHour(0.50);
/// Baseline charging-location weights (home/work/public)
pub const BASE_CHARGING_WEIGHTS: (Dimensionless, Dimensionless, Dimensionless) =
    (Dimensionless(0.90), Dimensionless(0.00), Dimensionless(0.10));
/// Baseline share of distance driven electrically for plug-in hybrids
pub const BASE_PHEV_SHARE_ELEC: Dimensionless = Dimensionless(0.5);

/// Default values for one (vehicle class, technology) pair.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct VehicleDefaults {
    /// Purchase price (CHF)
    pub purchase_price: Money,
    /// Residual value fraction at horizon end; accepted under either key name
    #[serde(alias = "residual_rate_8y_hint")]
    pub residual_rate_8y: Dimensionless,
    /// Maintenance cost over the six-year reference period (CHF)
    pub maint_6y_chf: Money,
    /// Base tire-replacement cost (CHF)
    pub tires_base_chf: Money,
    /// Fuel consumption (L/100km); absent for pure-electric vehicles
    #[serde(default)]
    pub consumption_fuel_l_per_100: Option<LitresPerHundredKm>,
    /// Electrical consumption (kWh/100km); absent for pure-combustion vehicles
    #[serde(default)]
    pub consumption_elec_kwh_per_100: Option<KilowattHoursPerHundredKm>,
}

/// Immutable defaults for every vehicle class, keyed by class then technology.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct DefaultsTable(IndexMap<String, IndexMap<Technology, VehicleDefaults>>);

impl DefaultsTable {
    /// The defaults table shipped with the program
    pub fn builtin() -> Self {
        // The embedded table is validated by the test suite
        serde_json::from_str(BUILTIN_DEFAULTS).expect("Builtin defaults table is malformed")
    }

    /// Load a defaults table from a JSON file
    pub fn from_path(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Could not read defaults file {}", path.display()))?;
        serde_json::from_str(&contents)
            .with_context(|| format!("Could not parse defaults file {}", path.display()))
    }

    /// Iterate over the available vehicle classes
    pub fn classes(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Defaults for a (technology, vehicle class) pair.
    ///
    /// The class lookup is case-insensitive. Unknown classes and technologies
    /// without an entry fail with a descriptive error.
    pub fn get(&self, tech: Technology, vehicle_class: &str) -> Result<&VehicleDefaults> {
        let (class_key, by_tech) = self
            .0
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(vehicle_class))
            .with_context(|| {
                format!(
                    "Unknown vehicle class '{vehicle_class}' (available: {})",
                    self.0.keys().join(", ")
                )
            })?;

        by_tech.get(&tech).with_context(|| {
            format!(
                "No defaults for technology {tech} in class '{class_key}' (available: {})",
                by_tech.keys().join(", ")
            )
        })
    }

    /// Check that every entry carries the consumption fields its technology
    /// requires: fuel consumption for ICE and PHEV, electrical consumption for
    /// BEV and PHEV.
    pub fn validate(&self) -> Result<()> {
        for (class, by_tech) in &self.0 {
            for (tech, defaults) in by_tech {
                if *tech != Technology::Bev {
                    ensure!(
                        defaults.consumption_fuel_l_per_100.is_some(),
                        "Missing consumption_fuel_l_per_100 for {tech} in class '{class}'"
                    );
                }
                if *tech != Technology::Ice {
                    ensure!(
                        defaults.consumption_elec_kwh_per_100.is_some(),
                        "Missing consumption_elec_kwh_per_100 for {tech} in class '{class}'"
                    );
                }
            }
        }
        Ok(())
    }
}

/// Build a [`VehicleSpec`] from the defaults table, filling in the baseline
/// energy prices and charging profile.
pub fn make_spec(tech: Technology, vehicle_class: &str, table: &DefaultsTable) -> Result<VehicleSpec> {
    let defaults = table.get(tech, vehicle_class)?;
    let (w_home, w_work, w_public) = BASE_CHARGING_WEIGHTS;

    Ok(VehicleSpec {
        tech,
        vehicle_class: vehicle_class.to_string(),
        purchase_price: defaults.purchase_price,
        residual_rate: defaults.residual_rate_8y,
        consumption_fuel: defaults.consumption_fuel_l_per_100.unwrap_or_default(),
        consumption_elec: defaults.consumption_elec_kwh_per_100.unwrap_or_default(),
        fuel_price: BASE_FUEL_PRICE,
        elec_price_home: BASE_ELEC_PRICE_HOME,
        elec_price_work: BASE_ELEC_PRICE_WORK,
        elec_price_public: BASE_ELEC_PRICE_PUBLIC,
        w_home,
        w_work,
        w_public,
        maint_6y: defaults.maint_6y_chf,
        tires_base: defaults.tires_base_chf,
        phev_share_elec: if tech == Technology::Phev {
            BASE_PHEV_SHARE_ELEC
        } else {
            Dimensionless(0.0)
        },
    })
}
