//! engine-lens - renders engine state dumps as FEN and coordinate notation.
//!
//! Reads JSON dumps shaped like debugger variables (a move `{ mask }`, a
//! move list `{ moves: { len, xs } }`, a board with twelve bitboard words)
//! and prints the human-readable form. Diagnostics go to stderr through
//! `tracing`; stdout carries only rendered values.

mod config;

use anyhow::Context;
use clap::{Parser, Subcommand};
use config::LensConfig;
use lens_codec::decode_move;
use lens_host::{parse_unsigned, Inspector};
use serde_json::Value;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "engine-lens")]
#[command(about = "Render engine snapshots as FEN and coordinate notation")]
struct Cli {
    /// Config file with snapshot field names (default: ./lens.toml if present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Decode packed move masks
    Move {
        /// Masks in decimal or 0x-prefixed hex
        #[arg(required = true, value_parser = parse_mask)]
        masks: Vec<u64>,
    },
    /// Render a position dump as FEN
    Position {
        /// JSON dump to read (stdin when omitted)
        file: Option<PathBuf>,
    },
    /// Summarize a move list dump
    Moves {
        /// JSON dump to read (stdin when omitted)
        file: Option<PathBuf>,
        /// Also decode every element up to the length counter
        #[arg(short, long)]
        expand: bool,
    },
}

fn parse_mask(s: &str) -> Result<u64, String> {
    parse_unsigned(s).ok_or_else(|| format!("invalid move mask '{}'", s))
}

fn read_dump(file: Option<&Path>) -> anyhow::Result<Value> {
    let text = match file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read stdin")?;
            buf
        }
    };
    serde_json::from_str(&text).context("Input is not valid JSON")
}

/// A top-level JSON array is treated as a sequence of dumps.
fn dumps(value: Value) -> Vec<Value> {
    match value {
        Value::Array(items) => items,
        other => vec![other],
    }
}

/// Produces the output lines for a command.
fn render(inspector: &Inspector, command: &Commands) -> anyhow::Result<Vec<String>> {
    let mut lines = Vec::new();
    match command {
        Commands::Move { masks } => {
            lines.extend(masks.iter().map(|&mask| decode_move(mask)));
        }
        Commands::Position { file } => {
            for dump in dumps(read_dump(file.as_deref())?) {
                lines.push(inspector.format_position(&dump));
            }
        }
        Commands::Moves { file, expand } => {
            for dump in dumps(read_dump(file.as_deref())?) {
                lines.push(inspector.format_move_list(&dump));
                if *expand {
                    lines.extend(render_expanded(inspector, &dump));
                }
            }
        }
    }
    Ok(lines)
}

fn render_expanded(inspector: &Inspector, dump: &Value) -> Vec<String> {
    inspector
        .expand_move_list(dump)
        .into_iter()
        .enumerate()
        .map(|(i, coord)| format!("  [{}] {}", i, coord))
        .collect()
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = LensConfig::load(cli.config.as_deref())?;
    let inspector = Inspector::new(config.layout);

    for line in render(&inspector, &cli.command)? {
        println!("{}", line);
    }
    Ok(())
}
