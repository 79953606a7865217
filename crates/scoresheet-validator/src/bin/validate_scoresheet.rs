//! Validate a digitized scoresheet and print the result as JSON.
//!
//! Usage:
//!   validate-scoresheet game.json
//!   validate-scoresheet --movetext moves.txt --fen "<FEN>"
//!   cat game.json | validate-scoresheet -

use std::io::Read;

use anyhow::{bail, Context};
use chess_core::{ScoresheetGame, StandardRules};
use scoresheet_validator::{Validator, ValidatorConfig};
use tracing::info;

struct Args {
    input: String,
    movetext: bool,
    fen: Option<String>,
}

fn parse_args() -> anyhow::Result<Args> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let mut input = None;
    let mut movetext = false;
    let mut fen = None;

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--movetext" => movetext = true,
            "--fen" => {
                let value = args.get(i + 1).context("--fen needs a FEN string")?;
                fen = Some(value.clone());
                i += 1;
            }
            "-h" | "--help" => {
                bail!("usage: validate-scoresheet [--movetext] [--fen <FEN>] <file|->")
            }
            other => {
                if input.replace(other.to_string()).is_some() {
                    bail!("only one input file may be given");
                }
            }
        }
        i += 1;
    }

    Ok(Args {
        input: input.context("no input file given (use - for stdin)")?,
        movetext,
        fen,
    })
}

fn read_input(path: &str) -> anyhow::Result<String> {
    if path == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read stdin")?;
        Ok(buf)
    } else {
        std::fs::read_to_string(path).with_context(|| format!("Failed to read {path}"))
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    // Load .env file for local dev
    dotenvy::dotenv().ok();

    let args = parse_args()?;
    let raw = read_input(&args.input)?;

    let game = if args.movetext {
        ScoresheetGame::from_movetext(&raw)?
    } else {
        ScoresheetGame::from_json(&raw)?
    };

    let validator = match &args.fen {
        Some(fen) => Validator::new(StandardRules::from_fen(fen)?, ValidatorConfig::from_env()),
        None => Validator::from_env(),
    };
    info!(
        half_moves = game.half_move_count(),
        autocorrect = validator.config().autocorrect,
        "Validating scoresheet"
    );

    let validation = validator.validate_game(&game);
    println!("{}", serde_json::to_string_pretty(&validation)?);

    let summary = validation.summary();
    info!(
        valid = summary.valid,
        warnings = summary.warnings,
        errors = summary.errors,
        corrections = summary.corrections,
        "Validation finished"
    );

    Ok(())
}
