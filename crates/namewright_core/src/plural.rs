//! Best-effort English pluralization for suggested names.
//!
//! Names derived from a collection's element type are pluralized (`IEnumerable<Token>` suggests
//! `tokens`). The rules are deliberately simple: an irregular-noun table first, then suffix rules.
//!
//! ## Notes
//! - Irregular replacements keep the case of the input's first letter (`Index` becomes `Indices`).
//! - Suffix rules append lower-case text regardless of the word's casing (`IO` becomes `IOs`).
//! - A phrase is pluralized through its last word only (`CancellationToken` becomes
//!   `CancellationTokens`). The pluralized word keeps its acronym flag, so `IOs` still renders
//!   as an acronym.
//!
//! ## Examples
//! ```rust
//! use namewright_core::plural::pluralize;
//!
//! assert_eq!(pluralize("Index"), "Indices");
//! assert_eq!(pluralize("category"), "categories");
//! assert_eq!(pluralize("Box"), "Boxes");
//! ```

use crate::words::Word;

/// Irregular nouns as `(singular, plural)`, lower-case.
pub const IRREGULAR_PLURALS: &[(&str, &str)] = &[
    ("person", "people"),
    ("child", "children"),
    ("man", "men"),
    ("woman", "women"),
    ("foot", "feet"),
    ("tooth", "teeth"),
    ("goose", "geese"),
    ("mouse", "mice"),
    ("ox", "oxen"),
    ("leaf", "leaves"),
    ("life", "lives"),
    ("knife", "knives"),
    ("half", "halves"),
    ("self", "selves"),
    ("analysis", "analyses"),
    ("axis", "axes"),
    ("basis", "bases"),
    ("crisis", "crises"),
    ("criterion", "criteria"),
    ("datum", "data"),
    ("medium", "media"),
    ("index", "indices"),
    ("appendix", "appendices"),
    ("matrix", "matrices"),
    ("vertex", "vertices"),
];

/// Pluralize a single word.
///
/// ## Returns
/// - The irregular plural if the word is in [`IRREGULAR_PLURALS`] (or is already such a
///   plural), otherwise the suffix-rule plural. Empty input yields an empty string.
pub fn pluralize(word: &str) -> String {
    if word.is_empty() {
        return String::new();
    }
    let lower = word.to_lowercase();
    let irregular = IRREGULAR_PLURALS
        .iter()
        .find(|(singular, plural)| lower == *singular || lower == *plural);
    if let Some((_, plural)) = irregular {
        return match_first_letter(word, plural);
    }

    if let Some(stem) = lower.strip_suffix('y') {
        let before = stem.chars().next_back();
        if before.is_some_and(|c| c.is_alphabetic() && !is_vowel(c)) {
            let cut = word.len() - 'y'.len_utf8();
            return format!("{}ies", &word[..cut]);
        }
    }
    if ["s", "x", "z", "ch", "sh"].iter().any(|s| lower.ends_with(s)) {
        return format!("{word}es");
    }
    format!("{word}s")
}

/// Pluralize a phrase of words by replacing its last word.
pub fn pluralize_last<'a>(words: &[Word<'a>]) -> Vec<Word<'a>> {
    let mut out = words.to_vec();
    if let Some(last) = out.pop() {
        out.push(last.with_text(pluralize(last.as_str())));
    }
    out
}

fn is_vowel(c: char) -> bool {
    matches!(c.to_ascii_lowercase(), 'a' | 'e' | 'i' | 'o' | 'u')
}

fn match_first_letter(original: &str, replacement: &str) -> String {
    let upper = original.chars().next().is_some_and(char::is_uppercase);
    let mut chars = replacement.chars();
    match chars.next() {
        Some(first) if upper => first.to_uppercase().chain(chars).collect(),
        _ => replacement.to_string(),
    }
}
