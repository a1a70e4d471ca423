//! Label normalizer.
//!
//! Upstream schemas emit vocabulary values as path-like identifiers such as
//! `https://example.org/vocab/OpenAccess`. For display in the search index
//! only the last segment matters, and its CamelCase words are spread out:
//! `Open Access`.
//!
//! All functions here are total over `&str`; none of them can fail.

/// Return the last `/`-separated segment of `path` with its first character
/// uppercased.
///
/// An empty trailing segment (e.g. `"a/b/"`) yields an empty string.
/// Uppercasing only affects letters, so `"1st"` stays `"1st"`.
pub fn last_segment(path: &str) -> String {
    let token = path.rsplit('/').next().unwrap_or_default();

    let mut chars = token.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Insert a single space before every uppercase character except the first
/// one in the string.
///
/// Runs of capitals are not merged: `"ABCdef"` becomes `"A B Cdef"`. Spaces
/// already present are kept, so applying this twice to a string containing
/// `" X"` inserts another space.
pub fn split_words(token: &str) -> String {
    let mut result = String::with_capacity(token.len() + token.len() / 4);
    let mut start = 0;

    for (i, c) in token.char_indices().skip(1) {
        if c.is_uppercase() {
            result.push_str(&token[start..i]);
            result.push(' ');
            start = i;
        }
    }
    result.push_str(&token[start..]);
    result
}

/// Turn a path-like identifier into a display label.
///
/// Equivalent to `split_words(&last_segment(path))`.
pub fn derive_label(path: &str) -> String {
    split_words(&last_segment(path))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_last_segment_of_uri() {
        assert_eq!(
            last_segment("https://example.org/vocab/OpenAccess"),
            "OpenAccess"
        );
    }

    #[test]
    fn test_last_segment_uppercases_first_letter() {
        assert_eq!(last_segment("/access-right/openAccess"), "OpenAccess");
        assert_eq!(last_segment("dataset"), "Dataset");
    }

    #[test]
    fn test_last_segment_non_letter_first() {
        assert_eq!(last_segment("vocab/1stEdition"), "1stEdition");
        assert_eq!(last_segment("vocab/_private"), "_private");
    }

    #[test]
    fn test_last_segment_empty() {
        assert_eq!(last_segment(""), "");
        assert_eq!(last_segment("https://example.org/vocab/"), "");
        assert_eq!(last_segment("/"), "");
    }

    #[test]
    fn test_last_segment_unicode() {
        assert_eq!(last_segment("begriffe/ämter"), "Ämter");
    }

    #[test]
    fn test_split_words() {
        assert_eq!(split_words("OpenAccess"), "Open Access");
        assert_eq!(split_words("AccessOpenAccess"), "Access Open Access");
    }

    #[test]
    fn test_split_words_trivial_inputs() {
        assert_eq!(split_words(""), "");
        assert_eq!(split_words("x"), "x");
        assert_eq!(split_words("X"), "X");
        assert_eq!(split_words("lowercase"), "lowercase");
    }

    #[test]
    fn test_split_words_consecutive_capitals() {
        assert_eq!(split_words("ABCdef"), "A B Cdef");
    }

    #[test]
    fn test_split_words_lowercase_first() {
        assert_eq!(split_words("openAccess"), "open Access");
    }

    #[test]
    fn test_split_words_multibyte() {
        assert_eq!(split_words("ÄrzteÜbersicht"), "Ärzte Übersicht");
    }

    #[test]
    fn test_split_words_not_idempotent_with_spaces() {
        let once = split_words("OpenAccess");
        let twice = split_words(&once);
        assert_eq!(once, "Open Access");
        assert_eq!(twice, "Open  Access");
        assert_ne!(once, twice);
    }

    #[test]
    fn test_derive_label() {
        assert_eq!(
            derive_label("https://example.org/vocab/OpenAccess"),
            "Open Access"
        );
        assert_eq!(derive_label(".../TextDocument"), "Text Document");
        assert_eq!(derive_label(""), "");
    }
}
