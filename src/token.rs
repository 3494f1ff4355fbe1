//! Macro token model: lossless tokenization of tag-bearing chat text.
//!
//! A macro string mixes literal text with `<...>` control directives. The
//! tokenizer never loses information: serializing the token stream back
//! reproduces the input exactly, including malformed `<` characters that
//! have no closing `>` (those stay literal text).

use std::fmt;

use itertools::Itertools;

/// One token of a macro string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MacroToken {
    /// A maximal run of literal characters.
    TextRun(String),
    /// One control directive. The name is opaque: never parsed, never split.
    Tag(String),
}

impl MacroToken {
    pub fn text(text: impl Into<String>) -> Self {
        Self::TextRun(text.into())
    }

    pub fn tag(name: impl Into<String>) -> Self {
        Self::Tag(name.into())
    }

    pub fn is_tag(&self) -> bool {
        matches!(self, Self::Tag(_))
    }
}

impl fmt::Display for MacroToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TextRun(text) => write!(f, "{text}"),
            Self::Tag(name) => write!(f, "<{name}>"),
        }
    }
}

/// Split a macro string into tokens.
///
/// A `<` opens a tag closed by the first following `>` (no nesting: the
/// first `>` always closes). A `<` with no closing `>` is an ordinary
/// literal character. Empty input produces zero tokens.
pub fn tokenize(input: &str) -> Vec<MacroToken> {
    let chars: Vec<char> = input.chars().collect();
    let mut tokens = Vec::new();
    let mut buffer = String::new();
    let mut i = 0;

    while i < chars.len() {
        if chars[i] == '<'
            && let Some(off) = chars[i + 1..].iter().position(|&c| c == '>')
        {
            if !buffer.is_empty() {
                tokens.push(MacroToken::TextRun(std::mem::take(&mut buffer)));
            }
            let end = i + 1 + off;
            tokens.push(MacroToken::Tag(chars[i + 1..end].iter().collect()));
            i = end + 1;
        } else {
            buffer.push(chars[i]);
            i += 1;
        }
    }

    if !buffer.is_empty() {
        tokens.push(MacroToken::TextRun(buffer));
    }
    tokens
}

/// Flatten a token stream back to a macro string.
///
/// Inverse of [`tokenize`] on well-formed input. Total: never fails.
pub fn serialize(tokens: &[MacroToken]) -> String {
    tokens.iter().join("")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_text_single_run() {
        assert_eq!(tokenize("hello"), vec![MacroToken::text("hello")]);
    }

    #[test]
    fn empty_input_no_tokens() {
        assert_eq!(tokenize(""), vec![]);
    }

    #[test]
    fn tag_between_text_runs() {
        assert_eq!(
            tokenize("a<icon(1)>b"),
            vec![
                MacroToken::text("a"),
                MacroToken::tag("icon(1)"),
                MacroToken::text("b"),
            ]
        );
    }

    #[test]
    fn leading_and_trailing_tags() {
        assert_eq!(
            tokenize("<a>mid<b>"),
            vec![
                MacroToken::tag("a"),
                MacroToken::text("mid"),
                MacroToken::tag("b"),
            ]
        );
    }

    #[test]
    fn unterminated_open_stays_literal() {
        assert_eq!(tokenize("a < b"), vec![MacroToken::text("a < b")]);
    }

    #[test]
    fn first_close_wins() {
        // No nested tag support: '>' at index 4 closes the tag opened at 0.
        assert_eq!(
            tokenize("<a<b>c>"),
            vec![MacroToken::tag("a<b"), MacroToken::text("c>")]
        );
    }

    #[test]
    fn lone_close_is_literal() {
        assert_eq!(tokenize("a>b"), vec![MacroToken::text("a>b")]);
    }

    #[test]
    fn roundtrip_examples() {
        for s in [
            "",
            "plain",
            "<tag>",
            "a<icon(22)> b <color(gnum13)>c",
            "broken < tag",
            "trailing<",
            "unicode ✓ <i>",
        ] {
            assert_eq!(serialize(&tokenize(s)), s);
        }
    }
}
