//! Integration tests for the semantic builder.

use fabrica::compiler::{Query, compile};
use fabrica::foundation::{Entity, ErrorKind, SyntheticVar, TypeTag, Var};
use fabrica::storage::sample_database;

fn item(slug: &str) -> Var {
    Var::entity(TypeTag::Item, slug)
}

fn compile_optimization(input: &str) -> fabrica::query::OptimizationQuery {
    let db = sample_database();
    match compile(input, &db) {
        Ok(Query::Optimization(query)) => query,
        other => panic!("{input}: expected optimization query, got {other:?}"),
    }
}

#[test]
fn fixed_output_with_default_objective() {
    let query = compile_optimization("produce 60 iron ingots");
    assert!(query.eq_constraints().is_empty());
    assert_eq!(query.ge_constraints()[&item("iron-ingot")], 60.0);

    // No input clause: minimize unweighted resources by default.
    let objective = query.objective().unwrap();
    assert!(!objective.is_maximize());
    assert_eq!(
        objective.coefficients()[&Var::Synthetic(SyntheticVar::UnweightedResources)],
        -1
    );
}

#[test]
fn maximize_output_against_free_input() {
    let query = compile_optimization("produce ? iron ingots from iron ore");
    let objective = query.objective().unwrap();
    assert!(objective.is_maximize());
    assert_eq!(objective.coefficients()[&item("iron-ingot")], 1);
    assert_eq!(
        query.le_constraints()[&Var::entity(TypeTag::Resource, "iron-ore")],
        0.0
    );
}

#[test]
fn strict_include_contract() {
    let query = compile_optimization("produce 10 screws using only recipe:screw");
    assert_eq!(
        query.ge_constraints()[&Var::entity(TypeTag::Recipe, "screw")],
        0.0
    );
    // Strict recipes: the solver must force every other recipe to zero even
    // though no constraint for them is emitted here.
    assert!(query.strict_recipes());
    assert!(!query.strict_power_recipes());
    assert!(!query.strict_crafters());
    assert!(!query.strict_generators());
}

#[test]
fn multi_entity_regex_clause_constrains_each_match() {
    let query = compile_optimization("produce 10 .*ingot");
    let ge = query.ge_constraints();
    assert_eq!(ge[&item("iron-ingot")], 10.0);
    assert_eq!(ge[&item("copper-ingot")], 10.0);
}

#[test]
fn power_and_exclusion_literals_flow_through() {
    let query =
        compile_optimization("produce ? power using coal generators without alternate recipes");
    assert!(query.has_power_output());
    assert!(query.strict_generators());
    assert_eq!(
        query.eq_constraints()[&Var::Synthetic(SyntheticVar::AlternateRecipes)],
        0.0
    );
}

#[test]
fn duplicate_objective_rejected_across_sections() {
    let db = sample_database();
    let err = compile("produce ? screws from ? iron ore", &db).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::DuplicateObjective));
}

#[test]
fn resolution_failure_names_span_and_types() {
    let db = sample_database();
    let err = compile("produce 1 screw using warp drive", &db).unwrap_err();
    let ErrorKind::Resolution { span, searched } = &err.kind else {
        panic!("expected resolution error");
    };
    assert_eq!(span, "warp drive");
    assert_eq!(
        searched,
        &[
            TypeTag::Recipe,
            TypeTag::PowerRecipe,
            TypeTag::Crafter,
            TypeTag::Generator
        ]
    );
}

#[test]
fn recipes_for_resource_is_searched() {
    // Resources participate in "recipes for" lookups even though few
    // recipes produce them.
    let db = sample_database();
    let query = compile("recipes for leaves", &db).unwrap();
    let Query::Info(info) = query else {
        panic!("expected info query");
    };
    assert!(info.is_empty());
}

#[test]
fn recipes_from_water_is_empty_but_resolves() {
    let db = sample_database();
    let Query::Info(info) = compile("recipes from water", &db).unwrap() else {
        panic!("expected info query");
    };
    assert!(info.is_empty());
}

#[test]
fn entity_details_resolve_across_all_types() {
    let db = sample_database();
    let Query::Info(info) = compile("screw", &db).unwrap() else {
        panic!("expected info query");
    };
    // Item, recipe (by slug) both match.
    let tags: Vec<TypeTag> = info.iter().map(|e| e.tag()).collect();
    assert!(tags.contains(&TypeTag::Item));
    assert!(tags.contains(&TypeTag::Recipe));
}
