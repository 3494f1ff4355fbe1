//! Formatting-tag vocabulary: the client color palette and marker glyphs.
//!
//! The host renderer resolves `color(gnumN)` tags through its global
//! parameter table; the categories here are the semantic names the rest of
//! the crate works with. `color(stackcolor)` pops back to the previous
//! color on the render stack.

use phf::{Map, phf_map};

use crate::token::MacroToken;

/// Semantic color categories of the host chat palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorCategory {
    Say,
    Emote,
    Tell,
    Echo,
}

/// Host global-parameter indices for the stock chat colors.
static GLOBAL_COLORS: Map<&'static str, u32> = phf_map! {
    "say" => 13,
    "emote" => 19,
    "tell" => 15,
    "echo" => 32,
};

impl ColorCategory {
    pub fn key(self) -> &'static str {
        match self {
            Self::Say => "say",
            Self::Emote => "emote",
            Self::Tell => "tell",
            Self::Echo => "echo",
        }
    }

    /// Global color-parameter index understood by the host renderer.
    pub fn gnum(self) -> u32 {
        GLOBAL_COLORS[self.key()]
    }
}

/// Fixed foreground color of the continued-marker glyph (amber).
pub const CONTINUED_COLOR: u32 = 16755477;
/// Fixed foreground color of the done-marker glyph (green).
pub const DONE_COLOR: u32 = 1703780;

/// Private-use glyph appended after a continued marker.
pub const CONTINUED_GLYPH: &str = "\u{e031}";
/// Checkmark appended after a done marker.
pub const DONE_GLYPH: &str = "✓";

/// Host glyph id for the roleplaying status badge.
pub const ROLEPLAYING_ICON: u32 = 22;
/// Host glyph id for the continuation-line arrow.
pub const ARROW_DOWN_ICON: u32 = 6;

pub fn color_push(category: ColorCategory) -> MacroToken {
    MacroToken::tag(format!("color(gnum{})", category.gnum()))
}

pub fn color_pop() -> MacroToken {
    MacroToken::tag("color(stackcolor)")
}

pub fn edge_color_push(category: ColorCategory) -> MacroToken {
    MacroToken::tag(format!("edgecolor(gnum{})", category.gnum()))
}

pub fn edge_color_pop() -> MacroToken {
    MacroToken::tag("edgecolor(stackcolor)")
}

pub fn italic(on: bool) -> MacroToken {
    MacroToken::tag(if on { "italic(1)" } else { "italic(0)" })
}

pub fn fixed_color_push(rgb: u32) -> MacroToken {
    MacroToken::tag(format!("color({rgb})"))
}

pub fn icon(id: u32) -> MacroToken {
    MacroToken::tag(format!("icon({id})"))
}
