//! Vehicle powertrain technologies and per-vehicle specifications.
use crate::units::{
    Dimensionless, KilowattHoursPerHundredKm, LitresPerHundredKm, Money, MoneyPerKilowattHour,
    MoneyPerLitre,
};
use anyhow::bail;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use strum::EnumIter;

/// The powertrain technology of a vehicle.
///
/// This is a closed set: any externally supplied tag outside the three known
/// variants is a configuration error, never a silent default.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, EnumIter)]
pub enum Technology {
    /// Internal combustion engine
    Ice,
    /// Battery-electric vehicle
    Bev,
    /// Plug-in hybrid
    Phev,
}

impl Technology {
    /// The canonical tag for this technology, as used in input files
    pub const fn label(self) -> &'static str {
        match self {
            Self::Ice => "ICE",
            Self::Bev => "BEV",
            Self::Phev => "PHEV",
        }
    }
}

impl fmt::Display for Technology {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Technology {
    type Err = anyhow::Error;

    /// Parse a technology tag from external string input (case-insensitive)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "ICE" => Ok(Self::Ice),
            "BEV" => Ok(Self::Bev),
            "PHEV" => Ok(Self::Phev),
            _ => bail!("Unknown technology '{s}' (expected one of: ICE, BEV, PHEV)"),
        }
    }
}

impl Serialize for Technology {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.label())
    }
}

impl<'de> Deserialize<'de> for Technology {
    /// Deserialize a technology tag from its string label, preserving the
    /// descriptive error for unknown tags
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// The specification of one vehicle variant.
///
/// Created by the caller once per technology and read-only during computation.
/// The charging weights conceptually sum to 1 but this is not enforced here;
/// see [`crate::pricing::weighted_electricity_price`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct VehicleSpec {
    /// Powertrain technology
    pub tech: Technology,
    /// Vehicle class label (e.g. "midsize")
    pub vehicle_class: String,
    /// Purchase price (CHF)
    pub purchase_price: Money,
    /// Residual value at horizon end, as a fraction of the purchase price
    pub residual_rate: Dimensionless,
    /// Fuel consumption (L/100km); 0 for pure-electric vehicles
    pub consumption_fuel: LitresPerHundredKm,
    /// Electrical consumption (kWh/100km); 0 for pure-combustion vehicles
    pub consumption_elec: KilowattHoursPerHundredKm,
    /// Base fuel price (CHF/L)
    pub fuel_price: MoneyPerLitre,
    /// Base electricity price when charging at home (CHF/kWh)
    pub elec_price_home: MoneyPerKilowattHour,
    /// Base electricity price when charging at work (CHF/kWh)
    pub elec_price_work: MoneyPerKilowattHour,
    /// Base electricity price when charging publicly (CHF/kWh)
    pub elec_price_public: MoneyPerKilowattHour,
    /// Share of charging done at home
    pub w_home: Dimensionless,
    /// Share of charging done at work
    pub w_work: Dimensionless,
    /// Share of charging done at public stations
    pub w_public: Dimensionless,
    /// Maintenance cost accrued over the six-year reference period (CHF)
    pub maint_6y: Money,
    /// Base tire-replacement cost (CHF)
    pub tires_base: Money,
    /// Share of distance driven in electric mode; only meaningful for PHEV
    pub phev_share_elec: Dimensionless,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixture::assert_error;
    use rstest::rstest;

    #[rstest]
    #[case("ICE", Technology::Ice)]
    #[case("ice", Technology::Ice)]
    #[case("BEV", Technology::Bev)]
    #[case(" bev ", Technology::Bev)]
    #[case("Phev", Technology::Phev)]
    fn test_technology_from_str_valid(#[case] input: &str, #[case] expected: Technology) {
        assert_eq!(input.parse::<Technology>().unwrap(), expected);
    }

    #[rstest]
    #[case("", "Unknown technology '' (expected one of: ICE, BEV, PHEV)")]
    #[case("FCEV", "Unknown technology 'FCEV' (expected one of: ICE, BEV, PHEV)")]
    #[case("hybrid", "Unknown technology 'hybrid' (expected one of: ICE, BEV, PHEV)")]
    fn test_technology_from_str_invalid(#[case] input: &str, #[case] error_msg: &str) {
        assert_error!(input.parse::<Technology>(), error_msg);
    }

    #[test]
    fn test_technology_serde_roundtrip() {
        assert_eq!(serde_json::to_string(&Technology::Ice).unwrap(), "\"ICE\"");
        assert_eq!(
            serde_json::from_str::<Technology>("\"PHEV\"").unwrap(),
            Technology::Phev
        );
    }

    #[test]
    fn test_technology_deserialize_unknown_tag() {
        // The descriptive parse error must survive the serde boundary
        let err = serde_json::from_str::<Technology>("\"FCEV\"").unwrap_err();
        assert!(
            err.to_string()
                .contains("Unknown technology 'FCEV' (expected one of: ICE, BEV, PHEV)")
        );
    }

    #[test]
    fn test_technology_display() {
        assert_eq!(Technology::Ice.to_string(), "ICE");
        assert_eq!(Technology::Bev.to_string(), "BEV");
        assert_eq!(Technology::Phev.to_string(), "PHEV");
    }
}
