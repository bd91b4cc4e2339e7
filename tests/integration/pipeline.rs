//! Full-pipeline compilations of representative commands.

use fabrica::compiler::{Query, compile};
use fabrica::foundation::{Entity, TypeTag, Var};
use fabrica::storage::sample_database;

#[test]
fn plan_a_factory_slice() {
    let db = sample_database();
    let query = compile(
        "produce 5 reinforced iron plates from iron ore using only constructors and assemblers \
         without recipe:alternate-cast-screw",
        &db,
    )
    .unwrap();

    let Query::Optimization(opt) = query else {
        panic!("expected optimization query");
    };

    assert_eq!(
        opt.ge_constraints()[&Var::entity(TypeTag::Item, "reinforced-iron-plate")],
        5.0
    );
    assert_eq!(
        opt.eq_constraints()[&Var::entity(TypeTag::Recipe, "alternate-cast-screw")],
        0.0
    );
    assert_eq!(
        opt.le_constraints()[&Var::entity(TypeTag::Resource, "iron-ore")],
        0.0
    );
    assert!(opt.strict_crafters());
    assert!(!opt.strict_recipes());

    // Everything the solver needs to size its variable space.
    let vars = opt.query_vars();
    assert!(vars.contains(&Var::entity(TypeTag::Crafter, "constructor")));
    assert!(vars.contains(&Var::entity(TypeTag::Crafter, "assembler")));
}

#[test]
fn canonical_string_recompiles_to_same_query() {
    let db = sample_database();
    let Query::Optimization(first) =
        compile("produce ? iron plates from 60 iron ore using smelters", &db).unwrap()
    else {
        panic!("expected optimization query");
    };

    let Query::Optimization(second) = compile(&first.to_string(), &db).unwrap() else {
        panic!("expected optimization query");
    };

    assert_eq!(first, second);
}

#[test]
fn lookup_pipeline_orders_entities() {
    let db = sample_database();
    let Query::Info(info) = compile("recipes from iron ingots", &db).unwrap() else {
        panic!("expected info query");
    };
    let slugs: Vec<&str> = info.iter().map(|e| e.var().slug()).collect();
    // Link indexes preserve database insertion order.
    assert_eq!(slugs, ["iron-plate", "iron-rod", "alternate-cast-screw"]);
}

#[test]
fn concurrent_compilations_share_the_database() {
    let db = std::sync::Arc::new(sample_database());
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let db = std::sync::Arc::clone(&db);
            std::thread::spawn(move || {
                for _ in 0..25 {
                    let query = compile("produce 60 screws from iron ore", &*db).unwrap();
                    assert!(matches!(query, Query::Optimization(_)));
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }
}
