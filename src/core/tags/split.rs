//! core/tags/split.rs
//! Turn raw artist tag values into individual artist names.

use std::sync::LazyLock;

use regex::Regex;

/// "feat", "feat.", "ft", "ft." as whole words, any case.
static FEATURING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b(?:feat|ft)\b\.?").expect("valid featuring regex"));

/// Any run of artist delimiters.
static DELIMITERS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[;,:&]+").expect("valid delimiter regex"));

/// Split one tag value:
/// - "A feat. B" -> ["A", "B"]
/// - "Y; Z" -> ["Y", "Z"]
/// - "  ;  " -> []
pub(crate) fn split_artist_tag(value: &str) -> Vec<String> {
    let value = FEATURING.replace_all(value, ",");

    DELIMITERS
        .split(&value)
        .map(|part| part.trim_matches(|c: char| c == '\0' || c.is_whitespace()))
        .filter(|part| !part.is_empty())
        .map(str::to_owned)
        .collect()
}

/// Split every value and fall back to `fallback` if nothing usable is left.
/// Duplicates are kept.
pub fn normalize_artists<S: AsRef<str>>(values: &[S], fallback: &str) -> Vec<String> {
    let artists: Vec<String> = values
        .iter()
        .flat_map(|v| split_artist_tag(v.as_ref()))
        .collect();

    if artists.is_empty() {
        vec![fallback.to_string()]
    } else {
        artists
    }
}
