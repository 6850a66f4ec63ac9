use std::io::{self, BufRead, Write};

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use plum_boards::commands::command_top::{execute, parse_command, Reply};
use plum_boards::config::{EngineConfig, DEFAULT_CHANNEL};
use plum_boards::game_state::board_types::GameMode;
use plum_boards::registry::session_registry::SessionRegistry;

/// Play per-channel chess and draughts games from the terminal.
///
/// Each line is `<chess|draughts> <verb> [args]`; `channel <name>` switches
/// the active channel and `quit` exits.
#[derive(Debug, Parser)]
#[command(name = "plum_boards", version)]
struct Args {
    /// Seed for the computer opponent.
    #[arg(long, env = "BOARD_ENGINE_SEED")]
    seed: Option<u64>,

    /// Channel the first commands are sent to.
    #[arg(long, default_value = DEFAULT_CHANNEL)]
    channel: String,

    /// Make `start` without a mode open a game against the computer.
    #[arg(long)]
    solo: bool,

    /// Log filter, e.g. `debug` or `plum_boards=trace`. Defaults to `RUST_LOG`.
    #[arg(long)]
    log: Option<String>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let filter = match &args.log {
        Some(directives) => EnvFilter::try_new(directives).context("invalid --log filter")?,
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let mut config = EngineConfig {
        default_channel: args.channel,
        ..EngineConfig::default()
    };
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }
    if args.solo {
        config = config.with_default_mode(GameMode::HumanVsAi);
    }

    run_stdio_loop(SessionRegistry::new(config)).context("console loop failed")
}

fn run_stdio_loop(registry: SessionRegistry) -> io::Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut channel = registry.config().default_channel.clone();

    for line in stdin.lock().lines() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        let mut parts = trimmed.split_whitespace();
        match parts.next() {
            Some("quit") | Some("exit") => break,
            Some("channel") => match parts.next() {
                Some(name) => {
                    channel = name.to_owned();
                    writeln!(stdout, "channel {channel}")?;
                }
                None => writeln!(stdout, "channel {channel}")?,
            },
            _ => match parse_command(trimmed).and_then(|cmd| execute(&registry, &channel, &cmd)) {
                Ok(reply) => write_reply(&mut stdout, &reply)?,
                Err(err) => writeln!(stdout, "error: {err}")?,
            },
        }
        stdout.flush()?;
    }

    Ok(())
}

fn write_reply(out: &mut impl Write, reply: &Reply) -> io::Result<()> {
    writeln!(out, "started {} UTC", reply.started_at.format("%H:%M"))?;
    writeln!(out, "{}", reply.board)?;
    writeln!(out, "{}", reply.status)
}
