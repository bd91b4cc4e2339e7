//! Integration tests for section/category bookkeeping.

use fabrica::foundation::{SyntheticVar, TypeTag, Var};
use fabrica::query::{CategoryKey, Section};

#[test]
fn elements_group_under_their_type_tag() {
    let mut section: Section<u32> = Section::new();
    section.add(Var::entity(TypeTag::Item, "screw"), 1, false);
    section.add(Var::entity(TypeTag::Item, "rod"), 2, false);
    section.add(Var::entity(TypeTag::Resource, "iron-ore"), 3, false);

    let items = section.category(CategoryKey::Tag(TypeTag::Item)).unwrap();
    assert_eq!(items.len(), 2);
    let resources = section
        .category(CategoryKey::Tag(TypeTag::Resource))
        .unwrap();
    assert_eq!(resources.len(), 1);
}

#[test]
fn synthetic_vars_get_their_own_category() {
    let mut section: Section<()> = Section::new();
    section.add(Var::Synthetic(SyntheticVar::Power), (), false);
    assert!(
        section
            .category(CategoryKey::Synthetic(SyntheticVar::Power))
            .is_some()
    );
    assert!(section.category(CategoryKey::Tag(TypeTag::Item)).is_none());
}

#[test]
fn strictness_is_per_category() {
    let mut section: Section<()> = Section::new();
    section.add(Var::entity(TypeTag::Recipe, "screw"), (), true);
    section.add(Var::entity(TypeTag::Crafter, "smelter"), (), false);

    assert!(section.is_strict(CategoryKey::Tag(TypeTag::Recipe)));
    assert!(!section.is_strict(CategoryKey::Tag(TypeTag::Crafter)));
}

#[test]
fn strict_on_empty_category_is_inert() {
    let mut section: Section<()> = Section::new();
    section.mark_strict(CategoryKey::Tag(TypeTag::Item));
    assert!(!section.is_strict(CategoryKey::Tag(TypeTag::Item)));
    assert!(section.is_empty());
}

#[test]
fn section_iteration_is_ordered() {
    let mut section: Section<u32> = Section::new();
    section.add(Var::entity(TypeTag::Crafter, "smelter"), 1, false);
    section.add(Var::entity(TypeTag::Item, "screw"), 2, false);

    let keys: Vec<&CategoryKey> = section.categories().map(|(k, _)| k).collect();
    assert_eq!(
        keys,
        [
            &CategoryKey::Tag(TypeTag::Item),
            &CategoryKey::Tag(TypeTag::Crafter)
        ]
    );
}
