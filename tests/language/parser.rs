//! Integration tests for the query grammar.

use fabrica::foundation::{ErrorKind, SyntheticVar};
use fabrica::language::{Amount, QueryAst, Subject, parse};

fn parse_optimization(input: &str) -> fabrica::language::OptimizationAst {
    match parse(input) {
        Ok(QueryAst::Optimization(opt)) => opt,
        other => panic!("{input}: expected optimization query, got {other:?}"),
    }
}

// =============================================================================
// Optimization shape
// =============================================================================

#[test]
fn all_output_keywords_are_equivalent() {
    for keyword in ["produce", "make", "create", "output"] {
        let opt = parse_optimization(&format!("{keyword} 5 screws"));
        assert_eq!(opt.outputs.len(), 1);
    }
}

#[test]
fn all_section_keywords_parse() {
    for input in [
        "produce 5 screws from iron ore",
        "produce 5 screws input iron ore",
        "produce 5 screws using constructors",
        "produce 5 screws with constructors",
        "produce 5 screws without byproducts",
        "produce 5 screws excluding byproducts",
    ] {
        assert!(parse(input).is_ok(), "failed: {input}");
    }
}

#[test]
fn clause_amounts() {
    let opt = parse_optimization("produce ? screws and 30 rods and any plates and _ wire");
    assert_eq!(opt.outputs[0].amount, Amount::Objective);
    assert_eq!(opt.outputs[1].amount, Amount::Count(30));
    assert_eq!(opt.outputs[2].amount, Amount::Any);
    assert_eq!(opt.outputs[3].amount, Amount::Any);
}

#[test]
fn only_marks_clause_strict() {
    let opt = parse_optimization("produce only 60 screws from only iron ore");
    assert!(opt.outputs[0].strict);
    assert!(opt.inputs[0].strict);
}

#[test]
fn entity_span_stops_at_keywords() {
    let opt = parse_optimization("produce 1 heavy modular frame from iron ore and coal");
    let Subject::Entity(span) = &opt.outputs[0].subject else {
        panic!("expected entity span");
    };
    assert_eq!(span.text, "heavy modular frame");
    assert_eq!(opt.inputs.len(), 2);
}

#[test]
fn literal_subjects_by_section() {
    let opt = parse_optimization(
        "produce ? power and 100 tickets from weighted resources and space \
         using space without alternate recipes or byproducts",
    );
    assert_eq!(opt.outputs[0].subject, Subject::Literal(SyntheticVar::Power));
    assert_eq!(
        opt.outputs[1].subject,
        Subject::Literal(SyntheticVar::Tickets)
    );
    assert_eq!(
        opt.inputs[0].subject,
        Subject::Literal(SyntheticVar::WeightedResources)
    );
    assert_eq!(opt.inputs[1].subject, Subject::Literal(SyntheticVar::Space));
    assert_eq!(
        opt.includes[0].subject,
        Subject::Literal(SyntheticVar::Space)
    );
    assert_eq!(
        opt.excludes[0].subject,
        Subject::Literal(SyntheticVar::AlternateRecipes)
    );
    assert_eq!(
        opt.excludes[1].subject,
        Subject::Literal(SyntheticVar::Byproducts)
    );
}

#[test]
fn bare_resources_literal_is_unweighted() {
    let opt = parse_optimization("produce 5 screws from ? resources");
    assert_eq!(
        opt.inputs[0].subject,
        Subject::Literal(SyntheticVar::UnweightedResources)
    );
}

// =============================================================================
// Lookup shapes
// =============================================================================

#[test]
fn recipe_lookup_shapes() {
    assert!(matches!(
        parse("recipes for iron rods"),
        Ok(QueryAst::RecipesFor(_))
    ));
    assert!(matches!(
        parse("iron rod recipes"),
        Ok(QueryAst::RecipesFor(_))
    ));
    assert!(matches!(
        parse("recipes from iron ingots"),
        Ok(QueryAst::RecipesFrom(_))
    ));
    assert!(matches!(
        parse("smelter"),
        Ok(QueryAst::EntityDetails(_))
    ));
}

#[test]
fn optimization_wins_over_lookup() {
    // "produce" opens an optimization query even though "recipes" appears.
    assert!(matches!(
        parse("produce 1 screw without alternate recipes"),
        Ok(QueryAst::Optimization(_))
    ));
}

// =============================================================================
// Failures
// =============================================================================

#[test]
fn grammar_errors_surface_input_and_offset() {
    let err = parse("produce").unwrap_err();
    let ErrorKind::Grammar {
        input,
        offset,
        message,
    } = &err.kind
    else {
        panic!("expected grammar error");
    };
    assert_eq!(input, "produce");
    assert_eq!(*offset, 7);
    assert!(message.contains("expected output expression"));
}

#[test]
fn caret_diagnostic_is_preserved() {
    let err = parse("recipes blah").unwrap_err();
    let rendered = err.to_string();
    assert!(rendered.contains("==> failed parse:"));
    assert!(rendered.contains('^'));
}

#[test]
fn malformed_inputs_fail() {
    for input in [
        "",
        "   ",
        "?",
        "60",
        "from iron ore",
        "produce 5 screws garbage! tokens",
        "produce 5 screws using without byproducts",
    ] {
        assert!(parse(input).is_err(), "should fail: {input}");
    }
}
