//! A markup-aware annotator for roleplay chat text.
//!
//! Chat lines arrive as "macro" strings: literal text interleaved with
//! `<...>` control tags. The annotator finds roleplay conventions (quoted
//! speech, `*actions*`, `[ooc]` asides, `(c)`/`(d)` progress markers) in
//! the visible text only and splices formatting tags around them at exact
//! character boundaries, without disturbing, reordering, or duplicating
//! any original tag.
//!
//! # Example
//!
//! ```rust
//! use rpmark::{apply_formatting, serialize, tokenize};
//!
//! let tokens = tokenize(r#"He said "hi" <icon(5)>"#);
//! let annotated = serialize(&apply_formatting(&tokens));
//!
//! assert_eq!(
//!     annotated,
//!     r#"He said <color(gnum13)>"hi"<color(stackcolor)> <icon(5)>"#
//! );
//! ```
//!
//! Every stage is a pure function over fresh per-call structures, so the
//! engine is safe to invoke once per incoming message from any number of
//! call sites.

pub mod annotate;
pub mod palette;
pub mod pipeline;
mod project;
mod settings;
mod token;

pub use annotate::{Match, MatchKind, apply_formatting, find_matches};
pub use palette::ColorCategory;
pub use pipeline::{Incoming, Outgoing, process};
pub use project::{PlainText, SourcePos};
pub use settings::{Channel, Settings};
pub use token::{MacroToken, serialize, tokenize};
