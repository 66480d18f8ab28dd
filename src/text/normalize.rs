//! Whitespace, case, and quote normalization
//!
//! Trimming and case folding are deliberately ASCII-only: template text is
//! compared byte-for-byte against generated SQL, so character
//! classification must not depend on locale or Unicode tables. The
//! whitespace predicate is spelled out because `char::is_ascii_whitespace`
//! does not include vertical tab.

/// ASCII whitespace: space, tab, line feed, vertical tab, form feed,
/// carriage return.
fn is_ascii_space(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\x0B' | '\x0C' | '\r')
}

/// Remove the maximal run of ASCII whitespace from the start of `text`.
pub fn trim_left(text: &str) -> String {
    text.trim_start_matches(is_ascii_space).to_string()
}

/// Remove the maximal run of ASCII whitespace from the end of `text`.
pub fn trim_right(text: &str) -> String {
    text.trim_end_matches(is_ascii_space).to_string()
}

/// Remove ASCII whitespace from both ends of `text`.
pub fn trim(text: &str) -> String {
    text.trim_matches(is_ascii_space).to_string()
}

/// Return `text` with every ASCII letter lowercased.
///
/// All other characters, including non-ASCII ones, pass through unchanged.
/// The input is left untouched; the result is an independent copy.
pub fn to_lower_case(text: &str) -> String {
    text.to_ascii_lowercase()
}

/// Strip one layer of matching single or double quotes from `text`.
///
/// When the first and last characters are the same quote character the
/// substring strictly between them is returned. Mismatched pairs and
/// inputs shorter than two characters come back unchanged, and stripping
/// is never recursive: `"''abc''"` becomes `"'abc'"`.
pub fn remove_parentheses(text: &str) -> String {
    for quote in ['\'', '"'] {
        if let Some(inner) = text
            .strip_prefix(quote)
            .and_then(|rest| rest.strip_suffix(quote))
        {
            return inner.to_string();
        }
    }
    text.to_string()
}
