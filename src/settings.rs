//! Runtime settings for the annotation pipeline.
//!
//! In-memory only; persistence belongs to the host.

use std::collections::HashSet;

/// Chat channels the host distinguishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    Say,
    Shout,
    TellOutgoing,
    TellIncoming,
    Party,
    Alliance,
    CustomEmote,
    Yell,
    CrossParty,
    Echo,
}

impl Channel {
    /// The host's numeric id for this channel.
    pub fn id(self) -> u16 {
        match self {
            Self::Say => 10,
            Self::Shout => 11,
            Self::TellOutgoing => 12,
            Self::TellIncoming => 13,
            Self::Party => 14,
            Self::Alliance => 15,
            Self::CustomEmote => 28,
            Self::Yell => 30,
            Self::CrossParty => 32,
            Self::Echo => 56,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Say => "say",
            Self::Shout => "shout",
            Self::TellOutgoing => "tell-out",
            Self::TellIncoming => "tell-in",
            Self::Party => "party",
            Self::Alliance => "alliance",
            Self::CustomEmote => "emote",
            Self::Yell => "yell",
            Self::CrossParty => "cross-party",
            Self::Echo => "echo",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        let all = [
            Self::Say,
            Self::Shout,
            Self::TellOutgoing,
            Self::TellIncoming,
            Self::Party,
            Self::Alliance,
            Self::CustomEmote,
            Self::Yell,
            Self::CrossParty,
            Self::Echo,
        ];
        all.into_iter().find(|c| c.name() == name)
    }
}

/// Pipeline behavior toggles plus the enabled channel set.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Only annotate messages whose sender carries the roleplaying status.
    pub require_roleplay_status: bool,
    /// Recolor say-style lines as emotes.
    pub treat_say_as_emote: bool,
    /// Apply the say-as-emote recolor even for non-roleplaying senders.
    pub treat_say_as_emote_for_everyone: bool,
    /// Prefix the sender name with the roleplaying badge icon.
    pub show_roleplay_icon: bool,
    enabled_channels: HashSet<Channel>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            require_roleplay_status: true,
            treat_say_as_emote: true,
            treat_say_as_emote_for_everyone: false,
            show_roleplay_icon: true,
            enabled_channels: Self::default_channels(),
        }
    }
}

impl Settings {
    pub fn default_channels() -> HashSet<Channel> {
        [
            Channel::Say,
            Channel::Yell,
            Channel::CustomEmote,
            Channel::Party,
            Channel::CrossParty,
            Channel::TellIncoming,
            Channel::TellOutgoing,
            Channel::Echo,
        ]
        .into_iter()
        .collect()
    }

    pub fn is_channel_enabled(&self, channel: Channel) -> bool {
        self.enabled_channels.contains(&channel)
    }

    pub fn set_channel_enabled(&mut self, channel: Channel, enabled: bool) {
        if enabled {
            self.enabled_channels.insert(channel);
        } else {
            self.enabled_channels.remove(&channel);
        }
    }
}
