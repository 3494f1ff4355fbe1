//! Property-based tests for the annotation engine.
//!
//! These pin the structural guarantees: tokenization is lossless, the
//! matcher produces ordered disjoint spans, and text with no convention
//! characters passes through the formatter untouched.

use proptest::prelude::*;
use rpmark::{apply_formatting, find_matches, serialize, tokenize};

proptest! {
    /// Serializing the token stream reproduces the input exactly, tags,
    /// malformed `<` characters and all.
    #[test]
    fn tokenize_serialize_roundtrip(s in ".{0,80}") {
        prop_assert_eq!(serialize(&tokenize(&s)), s);
    }

    /// Roundtrip with a heavy bias toward tag-like shapes.
    #[test]
    fn tokenize_serialize_roundtrip_taggy(
        s in r"([a-z ]{0,6}(<[a-z0-9\(\)]{0,8}>|<|>)?){0,8}"
    ) {
        prop_assert_eq!(serialize(&tokenize(&s)), s);
    }

    /// Matches come out ordered, disjoint, and in bounds.
    #[test]
    fn matches_are_ordered_and_disjoint(
        s in r#"[a-z0-9dc \*\(\)\[\]"/_]{0,60}"#
    ) {
        let text: Vec<char> = s.chars().collect();
        let matches = find_matches(&text);
        for m in &matches {
            prop_assert!(m.start < m.end);
            prop_assert!(m.end <= text.len());
        }
        for pair in matches.windows(2) {
            prop_assert!(pair[0].end <= pair[1].start);
        }
    }

    /// Visible text containing none of the convention characters is
    /// returned byte-for-byte unchanged by the formatter.
    #[test]
    fn plain_text_is_untouched(s in r"[a-zA-Z0-9 .,!?'\-]{0,60}") {
        let tokens = tokenize(&s);
        prop_assert_eq!(serialize(&apply_formatting(&tokens)), s);
    }

    /// Tag-bearing input without convention characters is also untouched:
    /// tags are invisible to the matcher.
    #[test]
    fn tags_alone_never_trigger_formatting(
        s in r"([a-z ]{0,8}<[a-z0-9\(\)]{1,8}>){1,4}[a-z ]{0,8}"
    ) {
        let tokens = tokenize(&s);
        prop_assert_eq!(serialize(&apply_formatting(&tokens)), s);
    }

    /// The annotated stream always contains the original visible text in
    /// order once formatting tags are stripped back out, except for
    /// emphasis delimiters consumed inside quotes and the appended marker
    /// glyphs. Restricting the alphabet to quote-free, marker-free text
    /// makes the visible text an exact invariant.
    #[test]
    fn visible_text_preserved_without_quotes(
        s in r"[a-z \*\[\]]{0,40}"
    ) {
        let tokens = tokenize(&s);
        let before = rpmark::PlainText::project(&tokens).text();
        let after_tokens = apply_formatting(&tokens);
        let after = rpmark::PlainText::project(&after_tokens).text();
        prop_assert_eq!(before, after);
    }
}
