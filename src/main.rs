// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Pvboard and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Pvboard CLI entrypoint.
//!
//! Loads a board snapshot (or the built-in demo board), applies the requested point edits in
//! order and prints the per-card report.

use std::fmt;
use std::path::{Path, PathBuf};

use pvboard::config::{ConfigError, EngineConfig};
use pvboard::engine::PvEngine;
use pvboard::model::{Board, BoardSnapshot, CardId, Side};
use pvboard::ops::{ClearScope, PointOp};
use pvboard::render::{render_outcome, render_report};
use tracing_subscriber::EnvFilter;

fn print_usage(program: &str) {
    eprintln!(
        "Usage:\n  {program} <snapshot.json> [--config <file>] [--delta <card>:<side>:<n>]... [--clear <card>[:<side>]]... [--json]\n  {program} --demo [--config <file>] [--delta <card>:<side>:<n>]... [--clear <card>[:<side>]]... [--json]\n\nThe snapshot is a `{{\"cards\": [...], \"connections\": [...]}}` JSON document.\n--delta adds (positive n) or removes (negative n) manual points on one side of a card.\n--clear resets manual points on one side, or both sides when no side is given.\nEdits run in the order given. Set RUST_LOG=debug to trace propagation."
    );
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
struct CliOptions {
    demo: bool,
    snapshot: Option<String>,
    config: Option<String>,
    ops: Vec<PointOp>,
    json: bool,
}

fn parse_options(mut args: impl Iterator<Item = String>) -> Result<CliOptions, ()> {
    let mut options = CliOptions::default();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--demo" => {
                if options.demo {
                    return Err(());
                }
                options.demo = true;
            }
            "--json" => {
                if options.json {
                    return Err(());
                }
                options.json = true;
            }
            "--config" => {
                if options.config.is_some() {
                    return Err(());
                }
                options.config = Some(args.next().ok_or(())?);
            }
            "--delta" => {
                let raw = args.next().ok_or(())?;
                options.ops.push(parse_delta(&raw)?);
            }
            "--clear" => {
                let raw = args.next().ok_or(())?;
                options.ops.push(parse_clear(&raw)?);
            }
            _ if arg.starts_with('-') => return Err(()),
            _ => {
                if options.snapshot.is_some() {
                    return Err(());
                }
                options.snapshot = Some(arg);
            }
        }
    }

    if options.demo == options.snapshot.is_some() {
        return Err(());
    }

    Ok(options)
}

fn parse_side(raw: &str) -> Option<Side> {
    match raw {
        "left" | "l" | "L" => Some(Side::Left),
        "right" | "r" | "R" => Some(Side::Right),
        _ => None,
    }
}

/// `<card>:<side>:<n>`; the card id may itself contain `:`.
fn parse_delta(raw: &str) -> Result<PointOp, ()> {
    let mut parts = raw.rsplitn(3, ':');
    let delta = parts.next().ok_or(())?.parse::<i64>().map_err(|_| ())?;
    let side = parse_side(parts.next().ok_or(())?).ok_or(())?;
    let card_id = CardId::new(parts.next().ok_or(())?).map_err(|_| ())?;
    Ok(PointOp::Adjust {
        card_id,
        side,
        delta,
    })
}

fn parse_clear(raw: &str) -> Result<PointOp, ()> {
    let (card, scope) = match raw.rsplit_once(':') {
        Some((card, side)) => match parse_side(side) {
            Some(side) => (card, ClearScope::Side(side)),
            None => (raw, ClearScope::Both),
        },
        None => (raw, ClearScope::Both),
    };
    let card_id = CardId::new(card).map_err(|_| ())?;
    Ok(PointOp::Clear { card_id, scope })
}

#[derive(Debug)]
enum SnapshotError {
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    Json {
        path: Option<PathBuf>,
        source: serde_json::Error,
    },
    InvalidConfig(ConfigError),
}

impl fmt::Display for SnapshotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "failed to read snapshot {}: {source}", path.display())
            }
            Self::Json {
                path: Some(path),
                source,
            } => write!(f, "invalid snapshot {}: {source}", path.display()),
            Self::Json { path: None, source } => write!(f, "invalid demo board: {source}"),
            Self::InvalidConfig(source) => write!(f, "invalid config: {source}"),
        }
    }
}

impl std::error::Error for SnapshotError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Json { source, .. } => Some(source),
            Self::InvalidConfig(source) => Some(source),
        }
    }
}

impl From<ConfigError> for SnapshotError {
    fn from(source: ConfigError) -> Self {
        Self::InvalidConfig(source)
    }
}

fn load_snapshot(path: &Path) -> Result<Board, SnapshotError> {
    let raw = std::fs::read_to_string(path).map_err(|source| SnapshotError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let snapshot: BoardSnapshot =
        serde_json::from_str(&raw).map_err(|source| SnapshotError::Json {
            path: Some(path.to_path_buf()),
            source,
        })?;
    Ok(snapshot.into())
}

fn run(options: CliOptions) -> Result<(), SnapshotError> {
    let config = match options.config.as_deref() {
        Some(path) => EngineConfig::from_json_file(path)?,
        None => EngineConfig::default(),
    };
    let board = match options.snapshot.as_deref() {
        Some(path) => load_snapshot(Path::new(path))?,
        None => pvboard::demo::demo_board()
            .map_err(|source| SnapshotError::Json { path: None, source })?,
    };

    let mut engine = PvEngine::new(board, config)?;
    tracing::info!(
        cards = engine.board().cards().len(),
        connections = engine.board().connections().len(),
        threshold = config.threshold,
        "pvboard.loaded"
    );

    for op in &options.ops {
        let outcome = engine.apply(op);
        if !options.json {
            println!("{}: {}", op.card_id(), render_outcome(&outcome));
        }
    }

    let views = engine.card_views();
    if options.json {
        let rendered = serde_json::to_string_pretty(&views)
            .map_err(|source| SnapshotError::Json { path: None, source })?;
        println!("{rendered}");
    } else {
        if !options.ops.is_empty() {
            println!();
        }
        print!("{}", render_report(&views));
    }
    Ok(())
}

fn main() {
    let mut args = std::env::args();
    let program = args.next().unwrap_or_else(|| "pvboard".to_owned());

    let options = match parse_options(args) {
        Ok(options) => options,
        Err(()) => {
            print_usage(&program);
            std::process::exit(2);
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(err) = run(options) {
        eprintln!("pvboard: {err}");
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::{parse_options, CliOptions};
    use pvboard::model::{CardId, Side};
    use pvboard::ops::{ClearScope, PointOp};

    fn args(raw: &[&str]) -> impl Iterator<Item = String> {
        raw.iter().map(|arg| (*arg).to_owned()).collect::<Vec<_>>().into_iter()
    }

    fn cid(value: &str) -> CardId {
        CardId::new(value).expect("card id")
    }

    #[test]
    fn parses_demo_flag() {
        let options = parse_options(args(&["--demo"])).expect("parse options");
        assert_eq!(
            options,
            CliOptions {
                demo: true,
                ..CliOptions::default()
            }
        );
    }

    #[test]
    fn parses_snapshot_config_and_edits_in_order() {
        let options = parse_options(args(&[
            "board.json",
            "--delta",
            "b:left:30",
            "--config",
            "pv.json",
            "--delta",
            "c:1:r:-5",
            "--clear",
            "b",
            "--clear",
            "c:1:right",
        ]))
        .expect("parse options");

        assert_eq!(options.snapshot.as_deref(), Some("board.json"));
        assert_eq!(options.config.as_deref(), Some("pv.json"));
        assert_eq!(
            options.ops,
            vec![
                PointOp::Adjust {
                    card_id: cid("b"),
                    side: Side::Left,
                    delta: 30
                },
                PointOp::Adjust {
                    card_id: cid("c:1"),
                    side: Side::Right,
                    delta: -5
                },
                PointOp::Clear {
                    card_id: cid("b"),
                    scope: ClearScope::Both
                },
                PointOp::Clear {
                    card_id: cid("c:1"),
                    scope: ClearScope::Side(Side::Right)
                },
            ]
        );
    }

    #[test]
    fn requires_exactly_one_board_source() {
        parse_options(args(&[])).unwrap_err();
        parse_options(args(&["--demo", "board.json"])).unwrap_err();
    }

    #[test]
    fn rejects_malformed_deltas() {
        parse_options(args(&["--demo", "--delta"])).unwrap_err();
        parse_options(args(&["--demo", "--delta", "b:left"])).unwrap_err();
        parse_options(args(&["--demo", "--delta", "b:up:3"])).unwrap_err();
        parse_options(args(&["--demo", "--delta", "b:left:lots"])).unwrap_err();
        parse_options(args(&["--demo", "--delta", ":left:3"])).unwrap_err();
    }

    #[test]
    fn rejects_unknown_and_duplicate_flags() {
        parse_options(args(&["--demo", "--nope"])).unwrap_err();
        parse_options(args(&["--demo", "--demo"])).unwrap_err();
        parse_options(args(&["--demo", "--json", "--json"])).unwrap_err();
        parse_options(args(&["--demo", "--config", "a", "--config", "b"])).unwrap_err();
        parse_options(args(&["one.json", "two.json"])).unwrap_err();
    }
}
