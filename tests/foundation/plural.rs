//! Integration tests for pluralization.

use fabrica::foundation::pluralize;
use proptest::prelude::*;

#[test]
fn pluralize_common_item_names() {
    assert_eq!(pluralize("iron ingot"), "iron ingots");
    assert_eq!(pluralize("screw"), "screws");
    assert_eq!(pluralize("battery"), "batteries");
    assert_eq!(pluralize("iron ore"), "iron ores");
}

#[test]
fn pluralize_es_endings() {
    assert_eq!(pluralize("glass"), "glasses");
    assert_eq!(pluralize("flux"), "fluxes");
    assert_eq!(pluralize("quartz"), "quartzes");
    assert_eq!(pluralize("workbench"), "workbenches");
    assert_eq!(pluralize("wash"), "washes");
}

proptest! {
    #[test]
    fn pluralize_never_shrinks(word in "[a-z]{1,12}( [a-z]{1,12}){0,2}") {
        let plural = pluralize(&word);
        prop_assert!(plural.len() > word.len());
        // Only the final word changes.
        if let Some((head, _)) = word.rsplit_once(' ') {
            prop_assert!(plural.starts_with(head));
        }
    }
}
