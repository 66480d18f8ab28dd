//! Substring scanning: repeated delimiter-bounded extraction and global
//! replacement
//!
//! Both operations walk the source left to right over byte offsets.
//! Offsets returned by `str::find` always sit on character boundaries, so
//! the slicing below cannot split a multi-byte character.

/// Collect every substring of `source` found strictly between an
/// occurrence of `pre` and the next occurrence of `post` after it.
///
/// The scan is sequential and non-overlapping: after a match it resumes
/// immediately past the consumed `post`, so a suffix marker never doubles
/// as part of a later extraction. A trailing `pre` with no matching `post`
/// is dropped without being reported. Empty markers match nothing.
pub fn multi_find_between(source: &str, pre: &str, post: &str) -> Vec<String> {
    let mut values = Vec::new();
    if pre.is_empty() || post.is_empty() {
        return values;
    }

    let mut cursor = 0;
    while let Some(offset) = source[cursor..].find(pre) {
        let fragment = cursor + offset + pre.len();
        match source[fragment..].find(post) {
            Some(length) => {
                values.push(source[fragment..fragment + length].to_string());
                cursor = fragment + length + post.len();
            }
            None => break,
        }
    }
    values
}

/// Replace every non-overlapping occurrence of `search` in `source` with
/// `replacement`, in a single left-to-right pass.
///
/// Inserted replacement text is never rescanned, so the call terminates
/// even when `replacement` contains `search`. An empty `search` is a
/// no-op returning the source unchanged.
pub fn replace_all(source: &str, search: &str, replacement: &str) -> String {
    if search.is_empty() {
        return source.to_string();
    }
    source.replace(search, replacement)
}
