//! Integration tests for the optimization query model.

use fabrica::foundation::{SyntheticVar, TypeTag, Var};
use fabrica::query::{Objective, OptimizationQuery};

fn item(slug: &str) -> Var {
    Var::entity(TypeTag::Item, slug)
}

fn resource(slug: &str) -> Var {
    Var::entity(TypeTag::Resource, slug)
}

#[test]
fn constraint_maps_cover_all_sections() {
    let mut query = OptimizationQuery::new();
    query.add_output(item("iron-plate"), Some(60), false);
    query.add_output(item("screw"), None, false);
    query.add_input(resource("iron-ore"), None, false);
    query.add_input(resource("coal"), Some(15), false);
    query.add_include(Var::entity(TypeTag::Crafter, "smelter"));
    query.add_exclude(Var::entity(TypeTag::Recipe, "alternate-cast-screw"));

    let eq = query.eq_constraints();
    let ge = query.ge_constraints();
    let le = query.le_constraints();

    assert_eq!(eq.len(), 1);
    assert_eq!(eq[&Var::entity(TypeTag::Recipe, "alternate-cast-screw")], 0.0);

    assert_eq!(ge.len(), 4);
    assert_eq!(ge[&item("iron-plate")], 60.0);
    assert_eq!(ge[&item("screw")], 0.0);
    assert_eq!(ge[&resource("coal")], -15.0);
    assert_eq!(ge[&Var::entity(TypeTag::Crafter, "smelter")], 0.0);

    assert_eq!(le.len(), 1);
    assert_eq!(le[&resource("iron-ore")], 0.0);
}

#[test]
fn overwriting_a_variable_keeps_last_amount() {
    let mut query = OptimizationQuery::new();
    query.add_output(item("screw"), Some(10), false);
    query.add_output(item("screw"), Some(25), false);
    assert_eq!(query.ge_constraints()[&item("screw")], 25.0);
    assert_eq!(query.outputs().len(), 1);
}

#[test]
fn canonical_string_is_reparsable_shape() {
    let mut query = OptimizationQuery::new();
    query.set_objective(Objective::maximize([item("iron-plate")]));
    query.add_input(resource("iron-ore"), None, false);
    query.add_include(Var::entity(TypeTag::Crafter, "smelter"));

    assert_eq!(
        query.to_string(),
        "produce ? item:iron-plate from resource:iron-ore using only crafter:smelter"
    );
}

#[test]
fn query_vars_span_objective_and_sections() {
    let mut query = OptimizationQuery::new();
    query.set_objective(Objective::minimize([Var::Synthetic(
        SyntheticVar::UnweightedResources,
    )]));
    query.add_output(item("cable"), Some(30), false);
    query.add_exclude(Var::Synthetic(SyntheticVar::Byproducts));

    let vars = query.query_vars();
    assert_eq!(vars.len(), 3);
    assert!(vars.contains(&Var::Synthetic(SyntheticVar::UnweightedResources)));
    assert!(vars.contains(&item("cable")));
    assert!(vars.contains(&Var::Synthetic(SyntheticVar::Byproducts)));
}

#[test]
fn fresh_queries_are_structurally_equal() {
    let build = || {
        let mut query = OptimizationQuery::new();
        query.add_output(item("screw"), Some(10), true);
        query.add_include(Var::entity(TypeTag::Recipe, "screw"));
        query.set_objective(Objective::minimize([resource("iron-ore")]));
        query
    };
    assert_eq!(build(), build());
}
