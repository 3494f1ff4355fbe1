//! Plain-text projection: the visible characters of a token stream.
//!
//! Tags contribute nothing to the projection; every visible character
//! remembers which token it came from and at which offset, so matches
//! found in the projection can be spliced back at exact boundaries.
//!
//! All positions are **character** (not byte) indices, so multi-byte
//! glyphs occupy a single position.

use crate::token::MacroToken;

/// Origin of one visible character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourcePos {
    /// Index of the originating token in the document.
    pub token: usize,
    /// Character offset within that token's text.
    pub offset: usize,
}

/// The visible-text view of a token stream.
///
/// Invariant: `chars.len() == map.len()`, and `map` is monotonically
/// non-decreasing in the token index.
#[derive(Debug, Default, Clone)]
pub struct PlainText {
    pub chars: Vec<char>,
    pub map: Vec<SourcePos>,
}

impl PlainText {
    /// Build the projection by walking tokens in order.
    pub fn project(tokens: &[MacroToken]) -> Self {
        let mut plain = Self::default();
        for (token, item) in tokens.iter().enumerate() {
            if let MacroToken::TextRun(text) = item {
                for (offset, ch) in text.chars().enumerate() {
                    plain.chars.push(ch);
                    plain.map.push(SourcePos { token, offset });
                }
            }
        }
        plain
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// The visible text as an owned string.
    pub fn text(&self) -> String {
        self.chars.iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::tokenize;

    #[test]
    fn tags_are_invisible() {
        let plain = PlainText::project(&tokenize("a<icon(1)>b"));
        assert_eq!(plain.text(), "ab");
        assert_eq!(
            plain.map,
            vec![
                SourcePos { token: 0, offset: 0 },
                SourcePos { token: 2, offset: 0 },
            ]
        );
    }

    #[test]
    fn map_is_parallel_to_chars() {
        let plain = PlainText::project(&tokenize("He said <i>\"hi\"</i> there"));
        assert_eq!(plain.chars.len(), plain.map.len());
        // Token indices never decrease.
        for pair in plain.map.windows(2) {
            assert!(pair[0].token <= pair[1].token);
        }
    }

    #[test]
    fn tag_only_document_is_empty() {
        let plain = PlainText::project(&tokenize("<a><b>"));
        assert!(plain.is_empty());
    }

    #[test]
    fn offsets_restart_per_token() {
        let plain = PlainText::project(&tokenize("ab<t>cd"));
        assert_eq!(plain.map[2], SourcePos { token: 2, offset: 0 });
        assert_eq!(plain.map[3], SourcePos { token: 2, offset: 1 });
    }
}
