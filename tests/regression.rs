//! End-to-end checks of the calculator over the built-in defaults table.
use float_cmp::assert_approx_eq;
use indexmap::IndexMap;
use strum::IntoEnumIterator;
use tco::decomposition::{DEFAULT_TOLERANCE, check_consistency, decomposition_rows};
use tco::defaults::{DefaultsTable, make_spec};
use tco::params::GlobalParams;
use tco::tco::{compute_all_techs, compute_tco_vehicle};
use tco::units::Money;
use tco::vehicle::{Technology, VehicleSpec};

fn specs_for_class(vehicle_class: &str) -> IndexMap<Technology, VehicleSpec> {
    let table = DefaultsTable::builtin();
    table.validate().unwrap();
    Technology::iter()
        .map(|tech| (tech, make_spec(tech, vehicle_class, &table).unwrap()))
        .collect()
}

#[test]
fn all_classes_reconcile_for_all_technologies() {
    let params = GlobalParams::default();
    for class in DefaultsTable::builtin().classes() {
        let results = compute_all_techs(&params, &specs_for_class(class));
        assert_eq!(results.len(), 3);

        for (tech, res) in &results {
            let report = check_consistency(res, &params, DEFAULT_TOLERANCE);
            assert!(
                report.passed,
                "decomposition check failed for {tech} in class '{class}'"
            );
            assert!(res.npv_total < Money(0.0), "NPV should be a net cost");
            assert!(res.cost_per_km.is_finite());
            assert_eq!(res.annual_table.rows.len(), params.years as usize);
        }
    }
}

#[test]
fn decomposition_rows_match_npv_magnitudes() {
    let params = GlobalParams::default();
    let results = compute_all_techs(&params, &specs_for_class("midsize"));
    let rows = decomposition_rows(&results, &params);

    for (tech, res) in &results {
        let total: Money = rows
            .iter()
            .filter(|row| row.tech == *tech)
            .map(|row| row.amount)
            .sum();
        assert_approx_eq!(
            f64,
            total.value(),
            res.npv_total.abs().value(),
            epsilon = DEFAULT_TOLERANCE.value()
        );
    }
}

#[test]
fn bev_energy_costs_undercut_ice_for_midsize_defaults() {
    // With the baseline prices (2.00 CHF/L, 0.23 CHF/kWh weighted) a midsize
    // BEV spends far less on energy per year than its ICE counterpart
    let params = GlobalParams::default();
    let results = compute_all_techs(&params, &specs_for_class("midsize"));

    let ice_energy = results[&Technology::Ice].annual_table.rows[0].energy;
    let bev_energy = results[&Technology::Bev].annual_table.rows[0].energy;
    let phev_energy = results[&Technology::Phev].annual_table.rows[0].energy;

    assert!(bev_energy < phev_energy);
    assert!(phev_energy < ice_energy);
}

#[test]
fn disabling_amortization_rules_never_increases_costs() {
    let base = GlobalParams::default();
    let relaxed = GlobalParams {
        include_tires_x2: false,
        apply_maint_7_over_6: false,
        ..base
    };
    let with_rules = compute_all_techs(&base, &specs_for_class("suv"));

    for (tech, spec) in &specs_for_class("suv") {
        let without = compute_tco_vehicle(&relaxed, spec);
        // NPVs are negative, so a cheaper scenario has a larger (less
        // negative) NPV
        assert!(
            without.npv_total >= with_rules[tech].npv_total,
            "relaxing the rules should not increase the cost for {tech}"
        );
    }
}
