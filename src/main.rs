use clap::Parser;
use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use rpmark::{Channel, Incoming, Settings, pipeline};

/// Annotate macro-tagged chat lines from stdin with roleplay formatting.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Chat channel the lines belong to
    #[arg(short = 'c', long, default_value = "say")]
    channel: String,

    /// Sender name for the lines
    #[arg(short, long, default_value = "")]
    sender: String,

    /// Treat the sender as carrying the roleplaying status
    #[arg(short, long)]
    roleplaying: bool,

    /// Annotate lines from non-roleplaying senders too
    #[arg(short = 'e', long)]
    everyone: bool,

    /// Disable the say-as-emote recolor
    #[arg(long)]
    no_say_as_emote: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let channel = Channel::from_name(&args.channel)
        .with_context(|| format!("unknown channel {:?}", args.channel))?;

    let mut settings = Settings::default();
    settings.set_channel_enabled(channel, true);
    if args.everyone {
        settings.require_roleplay_status = false;
        settings.treat_say_as_emote_for_everyone = true;
    }
    if args.no_say_as_emote {
        settings.treat_say_as_emote = false;
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    for line in io::stdin().lock().lines() {
        let line = line.context("failed to read stdin")?;
        let incoming = Incoming {
            channel,
            sender: &args.sender,
            message: &line,
            roleplaying: args.roleplaying,
        };
        let processed = pipeline::process(&settings, &incoming);
        writeln!(out, "{}", processed.message.as_deref().unwrap_or(&line))?;
    }
    Ok(())
}
