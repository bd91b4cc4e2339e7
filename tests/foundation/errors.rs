//! Integration tests for the error taxonomy.

use fabrica::foundation::{Error, ErrorKind, TypeTag};

#[test]
fn grammar_error_renders_caret_diagnostic() {
    let err = Error::grammar("produce 60", 8, "expected output expression");
    let rendered = err.to_string();
    let lines: Vec<&str> = rendered.lines().collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0], "\"produce 60\" ==> failed parse:");
    assert_eq!(lines[1].find('^'), Some(9));
    assert!(lines[2].contains("(at offset 8)"));
}

#[test]
fn resolution_error_carries_structured_fields() {
    let err = Error::resolution("copper beam", &[TypeTag::Recipe, TypeTag::Crafter]);
    let ErrorKind::Resolution { span, searched } = &err.kind else {
        panic!("expected resolution kind");
    };
    assert_eq!(span, "copper beam");
    assert_eq!(searched, &[TypeTag::Recipe, TypeTag::Crafter]);
}

#[test]
fn semantic_error_messages_are_user_facing() {
    assert_eq!(
        Error::duplicate_objective().to_string(),
        "only one objective may be specified"
    );
    assert_eq!(
        Error::empty_outputs().to_string(),
        "no outputs specified in optimization query"
    );
}
