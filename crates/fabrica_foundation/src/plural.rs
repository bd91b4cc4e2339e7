//! English pluralization for entity name matching.
//!
//! The resolver accepts the plural of any entity name, so "iron plates"
//! matches the item named "Iron Plate". Only the final word of a multi-word
//! name is pluralized.

/// Returns the English plural of a name, pluralizing its final word.
#[must_use]
pub fn pluralize(name: &str) -> String {
    match name.rsplit_once(' ') {
        Some((head, last)) => format!("{head} {}", pluralize_word(last)),
        None => pluralize_word(name),
    }
}

/// Pluralizes a single word.
///
/// Rules: consonant + `y` becomes `ies`; words ending in `s`, `x`, `z`,
/// `ch`, or `sh` take `es`; everything else takes `s`.
fn pluralize_word(word: &str) -> String {
    if let Some(stem) = word.strip_suffix('y') {
        let penultimate = stem.chars().last();
        if penultimate.is_some_and(|c| !matches!(c, 'a' | 'e' | 'i' | 'o' | 'u')) {
            return format!("{stem}ies");
        }
    }
    if word.ends_with(['s', 'x', 'z']) || word.ends_with("ch") || word.ends_with("sh") {
        return format!("{word}es");
    }
    format!("{word}s")
}
