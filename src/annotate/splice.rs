//! Token splicer: rebuild a token stream with formatting tags around
//! matched spans.
//!
//! The splicer never mutates the input document. It walks the match list
//! with a plain-text cursor, copying unmatched gaps verbatim (splitting
//! text runs at character boundaries where a span starts or ends inside
//! one) and wrapping matched spans in the tag pairs of the palette.
//! Original tags encountered inside a copied range pass through untouched;
//! tags that fall outside every range keep their original relative
//! position through the flush cursor.

use crate::palette::{self, ColorCategory};
use crate::project::PlainText;
use crate::token::MacroToken;

use super::matcher::{Match, MatchKind, find_emphasis_end};

/// Rebuild `tokens` with formatting spliced in around `matches`.
///
/// With no visible text or no matches the result is a structural copy of
/// the input.
pub fn splice(tokens: &[MacroToken], plain: &PlainText, matches: &[Match]) -> Vec<MacroToken> {
    if plain.is_empty() || matches.is_empty() {
        return tokens.to_vec();
    }

    let mut splicer = Splicer {
        tokens,
        plain,
        out: Vec::new(),
        emitted: vec![false; tokens.len()],
        tag_cursor: 0,
    };

    let mut last = 0;
    for m in matches {
        splicer.copy_range(last, m.start);
        splicer.emit_match(m);
        last = m.end;
    }
    splicer.copy_range(last, plain.len());
    splicer.finish()
}

struct Splicer<'a> {
    tokens: &'a [MacroToken],
    plain: &'a PlainText,
    out: Vec<MacroToken>,
    /// Per-token flag: the token has appeared in the output (fully or as a
    /// split part).
    emitted: Vec<bool>,
    /// Tokens before this index have been considered for the orphan flush.
    tag_cursor: usize,
}

impl Splicer<'_> {
    /// Copy the tokens behind the plain-text range `[start, end)` into the
    /// output, splitting text runs at the range edges. Tags inside the
    /// range pass through verbatim.
    fn copy_range(&mut self, start: usize, end: usize) {
        if start >= end || start >= self.plain.map.len() {
            return;
        }
        let first = self.plain.map[start];
        let last = self.plain.map[end.min(self.plain.map.len()) - 1];
        self.flush_tags_before(first.token);

        let tokens = self.tokens;
        for idx in first.token..=last.token {
            match &tokens[idx] {
                MacroToken::Tag(_) => {
                    self.out.push(tokens[idx].clone());
                }
                MacroToken::TextRun(text) => {
                    let from = if idx == first.token { first.offset } else { 0 };
                    let to = if idx == last.token {
                        last.offset + 1
                    } else {
                        text.chars().count()
                    };
                    if from < to {
                        self.out.push(MacroToken::TextRun(
                            text.chars().skip(from).take(to - from).collect(),
                        ));
                    }
                }
            }
            self.emitted[idx] = true;
        }
    }

    /// Emit any not-yet-seen tags with an index below `token`, preserving
    /// their original relative position between copied ranges.
    fn flush_tags_before(&mut self, token: usize) {
        while self.tag_cursor < token {
            let idx = self.tag_cursor;
            if !self.emitted[idx] && self.tokens[idx].is_tag() {
                self.out.push(self.tokens[idx].clone());
                self.emitted[idx] = true;
            }
            self.tag_cursor += 1;
        }
    }

    fn finish(mut self) -> Vec<MacroToken> {
        self.flush_tags_before(self.tokens.len());
        self.out
    }

    fn emit_match(&mut self, m: &Match) {
        match m.kind {
            MatchKind::Quote => {
                self.out.push(palette::color_push(ColorCategory::Say));
                self.emit_quote_interior(m);
                self.out.push(palette::color_pop());
            }
            MatchKind::Action => {
                self.out.push(palette::color_push(ColorCategory::Emote));
                self.copy_range(m.start, m.end);
                self.out.push(palette::color_pop());
            }
            MatchKind::Ooc => {
                self.out.push(palette::color_push(ColorCategory::Tell));
                self.copy_range(m.start, m.end);
                self.out.push(palette::color_pop());
            }
            MatchKind::Continued => {
                self.emit_progress(m, palette::CONTINUED_COLOR, palette::CONTINUED_GLYPH);
            }
            MatchKind::Done => {
                self.emit_progress(m, palette::DONE_COLOR, palette::DONE_GLYPH);
            }
            // Sub-kinds are produced only inside emit_quote_interior; a
            // top-level occurrence degrades to a plain copy.
            MatchKind::Bold | MatchKind::Italic => self.copy_range(m.start, m.end),
        }
    }

    /// Echo-colored marker text, a space, then the fixed-color glyph.
    fn emit_progress(&mut self, m: &Match, rgb: u32, glyph: &str) {
        self.out.push(palette::color_push(ColorCategory::Echo));
        self.copy_range(m.start, m.end);
        self.out.push(MacroToken::text(" "));
        self.out.push(palette::color_pop());
        self.out.push(palette::fixed_color_push(rgb));
        self.out.push(MacroToken::text(glyph));
        self.out.push(palette::color_pop());
    }

    /// Copy a quote span, re-scanning its interior one level deep for
    /// `*bold*` and `_italic_` / `/italic/` sub-spans. The emphasis
    /// delimiters themselves are consumed; only their interiors reach the
    /// output, wrapped in the matching tag pair.
    fn emit_quote_interior(&mut self, m: &Match) {
        let inner_start = m.start + 1;
        let inner_end = m.end - 1;
        if inner_start >= inner_end {
            // Empty quote: nothing to re-scan.
            self.copy_range(m.start, m.end);
            return;
        }

        // Opening quote mark.
        self.copy_range(m.start, inner_start);

        let plain = self.plain;
        let text = plain.chars.as_slice();
        let mut plain_from = inner_start;
        let mut i = inner_start;
        while i < inner_end {
            let sub = match text[i] {
                '*' => Some(MatchKind::Bold),
                '_' | '/' => Some(MatchKind::Italic),
                _ => None,
            };
            if let Some(kind) = sub
                && let Some(end) = find_emphasis_end(text, i + 1, inner_end, text[i])
            {
                if i > plain_from {
                    self.copy_range(plain_from, i);
                }
                match kind {
                    MatchKind::Bold => {
                        self.out.push(palette::edge_color_push(ColorCategory::Say));
                        self.copy_range(i + 1, end);
                        self.out.push(palette::edge_color_pop());
                    }
                    _ => {
                        self.out.push(palette::italic(true));
                        self.copy_range(i + 1, end);
                        self.out.push(palette::italic(false));
                    }
                }
                i = end + 1;
                plain_from = i;
                continue;
            }
            i += 1;
        }
        if plain_from < inner_end {
            self.copy_range(plain_from, inner_end);
        }

        // Closing quote mark.
        self.copy_range(inner_end, m.end);
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
