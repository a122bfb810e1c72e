//! Strongly typed numeric quantities used throughout the calculator.
//!
//! Every quantity is a thin wrapper around `f64`. Mixing incompatible units
//! (e.g. adding a price per litre to a price per kilowatt-hour) is a compile
//! error; conversions between units only exist where they are physically
//! meaningful.
use serde::{Deserialize, Serialize};
use std::iter::Sum;
use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub};

/// A unitless ratio or rate (discount rate, inflation rate, share, weight).
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Dimensionless(pub f64);

impl Dimensionless {
    /// The underlying value
    pub fn value(self) -> f64 {
        self.0
    }

    /// Raise to an integer power
    pub fn powi(self, n: i32) -> Self {
        Self(self.0.powi(n))
    }

    /// Restrict the value to the range `[min, max]`
    pub fn clamp(self, min: f64, max: f64) -> Self {
        Self(self.0.clamp(min, max))
    }

    /// Whether the value is neither infinite nor NaN
    pub fn is_finite(self) -> bool {
        self.0.is_finite()
    }
}

impl Add for Dimensionless {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl Sub for Dimensionless {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self(self.0 - rhs.0)
    }
}

impl Mul for Dimensionless {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self {
        Self(self.0 * rhs.0)
    }
}

impl Div for Dimensionless {
    type Output = Self;
    fn div(self, rhs: Self) -> Self {
        Self(self.0 / rhs.0)
    }
}

impl Neg for Dimensionless {
    type Output = Self;
    fn neg(self) -> Self {
        Self(-self.0)
    }
}

impl Sum for Dimensionless {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        Self(iter.map(|v| v.0).sum())
    }
}

/// Define a unit type wrapping an `f64` along with the arithmetic that is
/// valid for any quantity: addition/subtraction with itself, negation,
/// summation, scaling by a [`Dimensionless`] factor and division by another
/// value of the same unit (yielding a ratio).
macro_rules! define_unit {
    ($(#[$attr:meta])* $name:ident) => {
        $(#[$attr])*
        #[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub f64);

        impl $name {
            /// The underlying value
            pub fn value(self) -> f64 {
                self.0
            }

            /// The magnitude of the value
            pub fn abs(self) -> Self {
                Self(self.0.abs())
            }

            /// Whether the value is neither infinite nor NaN
            pub fn is_finite(self) -> bool {
                self.0.is_finite()
            }
        }

        impl Add for $name {
            type Output = Self;
            fn add(self, rhs: Self) -> Self {
                Self(self.0 + rhs.0)
            }
        }

        impl AddAssign for $name {
            fn add_assign(&mut self, rhs: Self) {
                self.0 += rhs.0;
            }
        }

        impl Sub for $name {
            type Output = Self;
            fn sub(self, rhs: Self) -> Self {
                Self(self.0 - rhs.0)
            }
        }

        impl Neg for $name {
            type Output = Self;
            fn neg(self) -> Self {
                Self(-self.0)
            }
        }

        impl Sum for $name {
            fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
                Self(iter.map(|v| v.0).sum())
            }
        }

        impl Mul<Dimensionless> for $name {
            type Output = Self;
            fn mul(self, rhs: Dimensionless) -> Self {
                Self(self.0 * rhs.0)
            }
        }

        impl Mul<$name> for Dimensionless {
            type Output = $name;
            fn mul(self, rhs: $name) -> $name {
                $name(self.0 * rhs.0)
            }
        }

        impl Div<Dimensionless> for $name {
            type Output = Self;
            fn div(self, rhs: Dimensionless) -> Self {
                Self(self.0 / rhs.0)
            }
        }

        impl Div for $name {
            type Output = Dimensionless;
            fn div(self, rhs: Self) -> Dimensionless {
                Dimensionless(self.0 / rhs.0)
            }
        }
    };
}

/// Define the product relation `$lhs * $rhs = $out` between three unit types,
/// along with the commuted multiplication and the two inverse divisions.
macro_rules! define_unit_product {
    ($lhs:ident * $rhs:ident = $out:ident) => {
        impl Mul<$rhs> for $lhs {
            type Output = $out;
            fn mul(self, rhs: $rhs) -> $out {
                $out(self.0 * rhs.0)
            }
        }

        impl Mul<$lhs> for $rhs {
            type Output = $out;
            fn mul(self, rhs: $lhs) -> $out {
                $out(self.0 * rhs.0)
            }
        }

        impl Div<$lhs> for $out {
            type Output = $rhs;
            fn div(self, rhs: $lhs) -> $rhs {
                $rhs(self.0 / rhs.0)
            }
        }

        impl Div<$rhs> for $out {
            type Output = $lhs;
            fn div(self, rhs: $rhs) -> $lhs {
                $lhs(self.0 / rhs.0)
            }
        }
    };
}

define_unit! {
    /// An amount of money (CHF)
    Money
}
define_unit! {
    /// A distance (km)
    Kilometres
}
define_unit! {
    /// A volume of fuel (L)
    Litres
}
define_unit! {
    /// An amount of electrical energy (kWh)
    KilowattHours
}
define_unit! {
    /// A cost per unit distance (CHF/km)
    MoneyPerKilometre
}
define_unit! {
    /// A fuel price (CHF/L)
    MoneyPerLitre
}
define_unit! {
    /// An electricity price (CHF/kWh)
    MoneyPerKilowattHour
}
define_unit! {
    /// Fuel consumption (L/100km)
    LitresPerHundredKm
}
define_unit! {
    /// Electrical consumption (kWh/100km)
    KilowattHoursPerHundredKm
}

define_unit_product! {Litres * MoneyPerLitre = Money}
define_unit_product! {KilowattHours * MoneyPerKilowattHour = Money}
define_unit_product! {Kilometres * MoneyPerKilometre = Money}

impl LitresPerHundredKm {
    /// Fuel volume required to cover `distance`
    pub fn fuel_for(self, distance: Kilometres) -> Litres {
        Litres(self.0 * distance.0 / 100.0)
    }
}

impl KilowattHoursPerHundredKm {
    /// Electrical energy required to cover `distance`
    pub fn energy_for(self, distance: Kilometres) -> KilowattHours {
        KilowattHours(self.0 * distance.0 / 100.0)
    }
}
