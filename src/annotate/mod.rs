//! Roleplay annotation engine.
//!
//! Scans the visible text of a tokenized macro string for roleplay
//! conventions and splices formatting tags around them, leaving every
//! original control tag in place.
//!
//! # Conventions
//!
//! | Pattern                        | Meaning          | Formatting            |
//! |--------------------------------|------------------|-----------------------|
//! | `(d)`, `(3/3)`                 | Done marker      | echo color + ✓ glyph  |
//! | `(c)`, `(1/3)`                 | Continued marker | echo color + glyph    |
//! | `"speech"`                     | Quoted speech    | say color             |
//! | `(aside)`, `[aside]`, `[[..]]` | OOC aside        | tell color            |
//! | `*action*`                     | Emote action     | emote color           |
//! | `*word*` inside quotes         | Bold             | say edge color        |
//! | `_word_`, `/word/` in quotes   | Italic           | italic on/off         |
//!
//! Matching is a single greedy left-to-right pass in the order above;
//! earlier rows win at the same starting position and claimed spans never
//! overlap. Quote interiors are re-scanned exactly one level deep for the
//! bold/italic sub-spans.

pub mod matcher;
pub mod splice;

pub use matcher::{Match, MatchKind, find_matches};

use crate::project::PlainText;
use crate::token::MacroToken;

/// Annotate a token stream with roleplay formatting tags.
///
/// Builds the plain-text projection, finds matches, and splices a new
/// document; the input is never mutated. With no visible text or no
/// matches the result is a structural copy of the input.
pub fn apply_formatting(tokens: &[MacroToken]) -> Vec<MacroToken> {
    let plain = PlainText::project(tokens);
    let matches = matcher::find_matches(&plain.chars);
    splice::splice(tokens, &plain, &matches)
}
