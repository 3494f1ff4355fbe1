//! Message pipeline: decides whether and how one chat line is annotated.
//!
//! The host converts its native rich strings to macro code before calling
//! in and converts the replacements back afterwards; everything here is a
//! pure transformation over strings.

use tracing::debug;

use crate::annotate::apply_formatting;
use crate::palette::{self, ColorCategory};
use crate::project::PlainText;
use crate::settings::{Channel, Settings};
use crate::token::{MacroToken, serialize, tokenize};

/// One incoming chat event, already converted to macro strings.
#[derive(Debug)]
pub struct Incoming<'a> {
    pub channel: Channel,
    pub sender: &'a str,
    pub message: &'a str,
    /// Whether the sender currently carries the roleplaying status.
    pub roleplaying: bool,
}

/// Replacement strings for the event; `None` leaves the original untouched.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Outgoing {
    pub sender: Option<String>,
    pub message: Option<String>,
}

/// Run one message through the gates and, where warranted, the annotator.
pub fn process(settings: &Settings, incoming: &Incoming) -> Outgoing {
    if !settings.is_channel_enabled(incoming.channel) {
        debug!(channel = incoming.channel.name(), "channel not enabled, skipping");
        return Outgoing::default();
    }
    if settings.require_roleplay_status && !incoming.roleplaying {
        debug!("sender has no roleplaying status, skipping");
        return Outgoing::default();
    }

    let sender = (settings.show_roleplay_icon && incoming.roleplaying).then(|| {
        format!(
            "{} {}",
            palette::icon(palette::ROLEPLAYING_ICON),
            incoming.sender
        )
    });

    let (message, continuation) = strip_pipe_prefix(incoming.message);

    let emote_style = incoming.channel == Channel::Say || continuation;
    let wrap_as_emote = if settings.treat_say_as_emote_for_everyone {
        settings.treat_say_as_emote && emote_style
    } else {
        settings.treat_say_as_emote && emote_style && incoming.roleplaying
    };

    let tokens = tokenize(message);
    let visible = PlainText::project(&tokens).text();
    let has_rp_patterns = visible.trim_start().contains(['"', '*', '(', '[']);

    let message = if has_rp_patterns || wrap_as_emote || continuation {
        let mut out = Vec::new();
        if continuation {
            out.push(palette::icon(palette::ARROW_DOWN_ICON));
            out.push(MacroToken::text("\n"));
        }
        if wrap_as_emote {
            out.push(palette::color_push(ColorCategory::Emote));
        }
        out.extend(apply_formatting(&tokens));
        if wrap_as_emote {
            out.push(palette::color_pop());
        }
        Some(serialize(&out))
    } else {
        None
    };

    debug!(
        changed_sender = sender.is_some(),
        changed_message = message.is_some(),
        "processed message"
    );
    Outgoing { sender, message }
}

/// A leading `|` or `||` (after leading whitespace) marks an emote-style
/// continuation line; the prefix and following whitespace are stripped.
fn strip_pipe_prefix(message: &str) -> (&str, bool) {
    let trimmed = message.trim_start();
    if let Some(rest) = trimmed.strip_prefix("||") {
        (rest.trim_start(), true)
    } else if let Some(rest) = trimmed.strip_prefix('|') {
        (rest.trim_start(), true)
    } else {
        (message, false)
    }
}
