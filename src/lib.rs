//! Total cost of ownership (TCO) calculator for passenger cars.
//!
//! The calculator compares three powertrain technologies (combustion,
//! battery-electric, plug-in-hybrid) over a multi-year ownership horizon
//! under shared macro-economic and usage assumptions. The core is a pure
//! cash-flow generation and discounting engine: it turns a vehicle
//! specification and a set of global parameters into a year-by-year table of
//! operating costs and discounted cash flows, an NPV summary and a
//! cost-per-kilometre metric, and guarantees that the discounted total
//! reconciles with an independent CAPEX/OPEX decomposition.
pub mod amortization;
pub mod cashflow;
pub mod cli;
pub mod decomposition;
pub mod defaults;
#[cfg(test)]
pub(crate) mod fixture;
pub mod log;
pub mod params;
pub mod pricing;
pub mod tco;
pub mod units;
pub mod vehicle;
