//! Integration tests for the lexer.

use fabrica::language::{Lexer, TokenKind};

fn kinds(source: &str) -> Vec<TokenKind> {
    Lexer::tokenize(source)
        .into_iter()
        .map(|t| t.kind)
        .collect()
}

#[test]
fn full_command_tokenizes() {
    assert_eq!(
        kinds("produce ? Iron Plates from 60 iron ore"),
        vec![
            TokenKind::Word("produce".into()),
            TokenKind::Question,
            TokenKind::Word("iron".into()),
            TokenKind::Word("plates".into()),
            TokenKind::Word("from".into()),
            TokenKind::Int(60),
            TokenKind::Word("iron".into()),
            TokenKind::Word("ore".into()),
            TokenKind::Eof,
        ]
    );
}

#[test]
fn numbers_and_words_are_distinct() {
    assert_eq!(
        kinds("60 x3 3x"),
        vec![
            TokenKind::Int(60),
            TokenKind::Word("x3".into()),
            TokenKind::Word("3x".into()),
            TokenKind::Eof,
        ]
    );
}

#[test]
fn oversized_integer_degrades_to_word() {
    // 2^64 does not fit in u64; the run of digits survives as a word.
    assert_eq!(
        kinds("18446744073709551616"),
        vec![
            TokenKind::Word("18446744073709551616".into()),
            TokenKind::Eof
        ]
    );
}

#[test]
fn token_text_recovers_original_slice() {
    let source = "Make 12 Screws";
    let tokens = Lexer::tokenize(source);
    assert_eq!(tokens[0].text(source), "Make");
    assert_eq!(tokens[1].text(source), "12");
    assert_eq!(tokens[2].text(source), "Screws");
}
