// SPDX-License-Identifier: GPL-3.0-or-later

//! Search query construction.

use lazy_static::lazy_static;
use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use regex::Regex;

/// Featured-artist markers dropped from optimized queries.
const CREDIT_TOKENS: [&str; 2] = ["feat.", "ft."];

/// Characters escaped in a query-string value. Everything a URL path may carry
/// is kept, except the delimiters that would split or terminate the query.
const QUERY_VALUE: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'&')
    .add(b'+')
    .add(b'<')
    .add(b'>')
    .add(b'=')
    .add(b'?')
    .add(b'[')
    .add(b'\\')
    .add(b']')
    .add(b'^')
    .add(b'`')
    .add(b'{')
    .add(b'|')
    .add(b'}');

/// Build a search-friendly query from free-form title and artist text.
///
/// Lowercases, drops `(...)` and `[...]` annotations along with `feat.`/`ft.`
/// markers, then collapses whitespace.
///
/// ```
/// use genius_client::normalize_query;
///
/// assert_eq!(normalize_query("Song (Remix)", "Artist"), "song artist");
/// ```
pub fn normalize_query(title: &str, artist: &str) -> String {
    lazy_static! {
        static ref PARENTHESIZED_REGEX: Regex =
            Regex::new(r" *\([^)]*\) *").expect("valid parenthesized regex");
        static ref BRACKETED_REGEX: Regex =
            Regex::new(r" *\[[^\]]*\] *").expect("valid bracketed regex");
        static ref WHITESPACE_REGEX: Regex = Regex::new(r"\s+").expect("valid whitespace regex");
    }

    let joined = format!("{} {}", title, artist).to_lowercase();
    let without_parens = PARENTHESIZED_REGEX.replace_all(&joined, " ");
    let mut stripped = BRACKETED_REGEX
        .replace_all(&without_parens, " ")
        .into_owned();

    // Removing one marker can splice together another, e.g. "feft.at.".
    while let Some(token) = CREDIT_TOKENS.iter().find(|token| stripped.contains(*token)) {
        stripped = stripped.replace(token, "");
    }

    WHITESPACE_REGEX
        .replace_all(&stripped, " ")
        .trim()
        .to_string()
}

/// The query sent to Genius: normalized when requested, otherwise `"{title} {artist}"`.
pub(crate) fn search_query(title: &str, artist: &str, optimize: bool) -> String {
    if optimize {
        normalize_query(title, artist)
    } else {
        format!("{} {}", title, artist)
    }
}

pub(crate) fn encode_query_value(value: &str) -> String {
    utf8_percent_encode(value, QUERY_VALUE).to_string()
}
