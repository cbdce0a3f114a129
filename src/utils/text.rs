//! Whitespace handling for search text.
//!
//! Trimming and word splitting use the whitespace set of browser form input
//! (`\s` in ECMAScript regular expressions), not Unicode `White_Space`: U+FEFF
//! counts as whitespace, U+0085 does not. Estimates and links shared between
//! the browser dashboard and this tool only agree if both see the same words.

pub fn is_search_whitespace(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n'
            | '\u{0B}'
            | '\u{0C}'
            | '\r'
            | ' '
            | '\u{A0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
            | '\u{FEFF}'
    )
}

pub fn trim_search(value: &str) -> &str {
    value.trim_matches(is_search_whitespace)
}

/// Non-empty words separated by runs of search whitespace.
pub fn search_words(value: &str) -> impl Iterator<Item = &str> {
    value.split(is_search_whitespace).filter(|word| !word.is_empty())
}
