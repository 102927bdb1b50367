//! Canonicalization of free-text category labels.
//!
//! Result files from different organizers spell the same class many
//! ways ("A - Muzi", "a – muži", "A-MUZI"). Labels that do not
//! normalize to the identical string are silently treated as distinct
//! categories for the rest of the pipeline, so every rule here is
//! load-bearing. The transformation is idempotent.

use std::sync::LazyLock;

use regex::Regex;

static DASH_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("[\u{00A0}\u{2013}\u{2014}-]+").expect("dash-run regex"));
static SPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("space-run regex"));
static TRAILING_LETTER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r" [a-z]$").expect("trailing-letter regex"));

/// Lexical fixes for the two gendered nouns organizers keep typing
/// without diacritics.
const SUBSTITUTIONS: &[(&str, &str)] = &[("muzi", "muži"), ("zeny", "ženy")];

/// Return the canonical form of a category label, or an empty string
/// for empty input.
///
/// Pipeline: lowercase and trim; collapse runs of dash-like characters
/// (hyphen, en/em dash, NBSP) into a single ` - `; collapse whitespace
/// runs; strip one trailing single-letter token (a gender marker some
/// producers append, a heuristic with known false-positive risk on
/// legitimately one-letter-suffixed names); apply the substitution
/// table; capitalize the first character.
pub fn normalize_category(raw: &str) -> String {
    if raw.is_empty() {
        return String::new();
    }

    let name = raw.to_lowercase();
    let name = name.trim();
    let name = DASH_RUN.replace_all(name, " - ");
    let name = SPACE_RUN.replace_all(&name, " ");
    let name = name.trim();
    let name = TRAILING_LETTER.replace(name, "");

    let mut name = name.into_owned();
    for (plain, accented) in SUBSTITUTIONS {
        name = name.replace(plain, accented);
    }
    capitalize_first(&name)
}

fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
