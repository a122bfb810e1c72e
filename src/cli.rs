//! The command line interface for the calculator.
use crate::decomposition::{
    DEFAULT_TOLERANCE, check_consistency, cumulative_costs, decomposition_rows,
};
use crate::defaults::{DefaultsTable, make_spec};
use crate::log;
use crate::params::GlobalParams;
use crate::tco::{Results, compute_all_techs};
use crate::units::{Dimensionless, Kilometres};
use crate::vehicle::{Technology, VehicleSpec};
use ::log::{debug, info, warn};
use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use indexmap::IndexMap;
use std::path::PathBuf;
use strum::IntoEnumIterator;

/// The command line interface for the calculator.
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// The available commands.
    #[command(subcommand)]
    command: Commands,
    /// The program log level
    #[arg(long, global = true)]
    log_level: Option<String>,
}

/// Options for the `run` command
#[derive(Args)]
pub struct RunOpts {
    /// Vehicle class to compare (case-insensitive)
    #[arg(short = 'c', long, default_value = "midsize")]
    pub vehicle_class: String,
    /// Ownership horizon in years
    #[arg(long, default_value_t = 8)]
    pub years: u32,
    /// Annual distance driven (km)
    #[arg(long, default_value_t = 15_000.0)]
    pub km_per_year: f64,
    /// Discount rate as a decimal (e.g. 0.04)
    #[arg(long, default_value_t = 0.04)]
    pub discount_rate: f64,
    /// Energy-price inflation per year as a decimal
    #[arg(long, default_value_t = 0.02)]
    pub energy_inflation: f64,
    /// OPEX inflation per year as a decimal
    #[arg(long, default_value_t = 0.015)]
    pub opex_inflation: f64,
    /// Disable the tire-cost doubling rule
    #[arg(long)]
    pub no_tires_x2: bool,
    /// Disable the accelerated-maintenance rule beyond year 6
    #[arg(long)]
    pub no_maint_7_over_6: bool,
    /// Compute a single technology instead of all three
    #[arg(short, long)]
    pub tech: Option<Technology>,
    /// Path to a defaults file; the built-in table is used when omitted
    #[arg(long)]
    pub defaults_file: Option<PathBuf>,
}

/// The available commands.
#[derive(Subcommand)]
enum Commands {
    /// Compute the TCO comparison for a vehicle class.
    Run {
        /// Other run options
        #[command(flatten)]
        opts: RunOpts,
    },
    /// Check that a defaults file parses and is complete.
    Validate {
        /// Path to the defaults file.
        defaults_file: PathBuf,
    },
    /// List the vehicle classes available in the defaults table.
    Classes {
        /// Path to a defaults file; the built-in table is used when omitted
        #[arg(long)]
        defaults_file: Option<PathBuf>,
    },
}

impl Commands {
    /// Execute the supplied CLI command
    fn execute(self) -> Result<()> {
        match self {
            Self::Run { opts } => handle_run_command(&opts),
            Self::Validate { defaults_file } => handle_validate_command(&defaults_file),
            Self::Classes { defaults_file } => handle_classes_command(defaults_file.as_deref()),
        }
    }
}

/// Parse CLI arguments and run the calculator
pub fn run_cli() -> Result<()> {
    let cli = Cli::parse();
    log::init(cli.log_level.as_deref())?;
    cli.command.execute()
}

fn load_table(path: Option<&std::path::Path>) -> Result<DefaultsTable> {
    let table = match path {
        Some(path) => DefaultsTable::from_path(path)?,
        None => DefaultsTable::builtin(),
    };
    table.validate()?;
    Ok(table)
}

fn handle_run_command(opts: &RunOpts) -> Result<()> {
    let params = GlobalParams {
        years: opts.years,
        km_per_year: Kilometres(opts.km_per_year),
        discount_rate: Dimensionless(opts.discount_rate),
        energy_inflation: Dimensionless(opts.energy_inflation),
        opex_inflation: Dimensionless(opts.opex_inflation),
        include_tires_x2: !opts.no_tires_x2,
        apply_maint_7_over_6: !opts.no_maint_7_over_6,
    };
    params.validate()?;

    let table = load_table(opts.defaults_file.as_deref())?;
    let techs: Vec<Technology> = match opts.tech {
        Some(tech) => vec![tech],
        None => Technology::iter().collect(),
    };
    let specs: IndexMap<Technology, VehicleSpec> = techs
        .into_iter()
        .map(|tech| Ok((tech, make_spec(tech, &opts.vehicle_class, &table)?)))
        .collect::<Result<_>>()?;

    info!(
        "Computing TCO for class '{}' over {} years at {} km/year",
        opts.vehicle_class, params.years, params.km_per_year.value()
    );
    let results = compute_all_techs(&params, &specs);

    print_summary(&results, &params);
    Ok(())
}

fn print_summary(results: &IndexMap<Technology, Results>, params: &GlobalParams) {
    println!("Technology  NPV (CHF)      Cost (CHF/km)  Residual (CHF)");
    for (tech, res) in results {
        println!(
            "{:<10}  {:>13.0}  {:>13.3}  {:>14.0}",
            tech.to_string(),
            res.npv_total.value(),
            res.cost_per_km.value(),
            res.residual_value_nominal.value()
        );
    }

    println!("\nDiscounted cost decomposition (CHF):");
    for row in decomposition_rows(results, params) {
        println!("{:<6}  {:<36}  {:>13.0}", row.tech.to_string(), row.category.to_string(), row.amount.value());
    }

    for (tech, res) in results {
        for point in cumulative_costs(res) {
            debug!(
                "{tech} cumulative discounted cost after year {}: {:.0} CHF",
                point.year,
                point.cumulative.value()
            );
        }

        let report = check_consistency(res, params, DEFAULT_TOLERANCE);
        if report.passed {
            debug!(
                "{tech} decomposition check passed: |NPV| {:.2} CHF",
                report.npv_magnitude.value()
            );
        } else {
            warn!(
                "{tech} decomposition check FAILED: |NPV| {:.2} CHF vs acquisition {:.2} + OPEX {:.2} CHF",
                report.npv_magnitude.value(),
                report.net_acquisition.value(),
                report.operating_discounted.value()
            );
        }
    }
}

fn handle_validate_command(defaults_file: &std::path::Path) -> Result<()> {
    let table = load_table(Some(defaults_file))?;
    info!(
        "Defaults file is valid; classes: {}",
        table.classes().collect::<Vec<_>>().join(", ")
    );
    Ok(())
}

fn handle_classes_command(defaults_file: Option<&std::path::Path>) -> Result<()> {
    let table = load_table(defaults_file)?;
    for class in table.classes() {
        println!("{class}");
    }
    Ok(())
}
