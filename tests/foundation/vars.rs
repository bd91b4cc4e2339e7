//! Integration tests for canonical variables.

use fabrica::foundation::{SyntheticVar, TypeTag, Var, VarId};

#[test]
fn every_tag_round_trips_through_var_id() {
    for tag in TypeTag::ALL {
        let id = VarId::new(tag, "some-slug");
        let text = id.to_string();
        assert_eq!(text, format!("{}:some-slug", tag.as_str()));
        assert_eq!(VarId::parse(&text), Some(id));
    }
}

#[test]
fn var_display_matches_wire_form() {
    assert_eq!(
        Var::entity(TypeTag::PowerRecipe, "coal").to_string(),
        "power-recipe:coal"
    );
    assert_eq!(
        Var::Synthetic(SyntheticVar::UnweightedResources).to_string(),
        "unweighted-resources"
    );
}

#[test]
fn var_id_parse_splits_on_first_colon_only() {
    // Slugs never contain colons in practice, but parsing must not choke if
    // one does.
    let id = VarId::parse("item:weird:slug").unwrap();
    assert_eq!(id.tag(), TypeTag::Item);
    assert_eq!(id.slug(), "weird:slug");
}

#[test]
fn vars_order_deterministically() {
    let mut vars = vec![
        Var::Synthetic(SyntheticVar::Power),
        Var::entity(TypeTag::Recipe, "screw"),
        Var::entity(TypeTag::Item, "screw"),
    ];
    vars.sort();
    let sorted: Vec<String> = vars.iter().map(ToString::to_string).collect();
    // Stable order: items before recipes before synthetics, per enum order.
    assert_eq!(sorted, ["item:screw", "recipe:screw", "power"]);
}
