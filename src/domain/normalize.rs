//! Text normalization applied before vectorization.

/// Whitespace as the entry cleaner sees it: Unicode whitespace plus the ASCII
/// separators U+001C..=U+001F (file, group, record, unit).
pub fn is_space(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}

/// True when `text` holds nothing but whitespace (per [`is_space`]).
pub fn is_blank(text: &str) -> bool {
    text.trim_matches(is_space).is_empty()
}

/// Lower-case, keep only `a`-`z` and whitespace, then collapse whitespace runs
/// into single spaces and trim. Total over all inputs.
pub fn normalize(raw: &str) -> String {
    let lowered = raw.to_ascii_lowercase();
    let kept: String = lowered
        .chars()
        .filter(|c| c.is_ascii_lowercase() || is_space(*c))
        .collect();
    kept.split(is_space)
        .filter(|word| !word.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_normalize_strips_punctuation() {
        assert_eq!(normalize("Hello, World!!"), "hello world");
    }

    #[test]
    fn test_normalize_collapses_whitespace() {
        assert_eq!(normalize("   multiple   spaces  "), "multiple spaces");
        assert_eq!(normalize("tab\tand\nnewline"), "tab and newline");
    }

    #[test]
    fn test_normalize_treats_ascii_separators_as_space() {
        assert_eq!(normalize("a\u{1f}b"), "a b");
        assert_eq!(normalize("\u{1c}one\u{1d}\u{1e}two\u{1f}"), "one two");
    }

    #[test]
    fn test_normalize_empty_and_digits() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("123"), "");
        assert_eq!(normalize("  !!  "), "");
    }

    #[test]
    fn test_normalize_deletes_rather_than_replaces() {
        assert_eq!(normalize("don't stop"), "dont stop");
        assert_eq!(normalize("café au lait"), "caf au lait");
        assert_eq!(normalize("a1b2c3"), "abc");
    }

    #[test]
    fn test_is_blank() {
        assert!(is_blank(""));
        assert!(is_blank(" \t\n"));
        assert!(is_blank("\u{1c}"));
        assert!(is_blank("\u{1f} \u{1d}"));
        assert!(!is_blank(" x "));
        assert!(!is_blank("\u{1b}"));
    }

    proptest! {
        #[test]
        fn test_normalize_idempotent(s in ".*") {
            let once = normalize(&s);
            prop_assert_eq!(normalize(&once), once.clone());
        }

        #[test]
        fn test_normalize_output_alphabet(s in ".*") {
            let out = normalize(&s);
            prop_assert!(out.chars().all(|c| c.is_ascii_lowercase() || c == ' '));
            prop_assert!(!out.starts_with(' ') && !out.ends_with(' '));
            prop_assert!(!out.contains("  "));
        }
    }
}
