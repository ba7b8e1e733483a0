//! Self-play driver: the bot plays both colors from a given position.
//!
//! Usage: `selfplay [position] [depth] [max-plies]`

use std::env;
use std::process::ExitCode;

use chess_bot::board::{Color, GameOutcome};
use chess_bot::engine::{Engine, EngineConfig};

const DEFAULT_MAX_PLIES: u32 = 200;

fn main() -> ExitCode {
    let args: Vec<String> = env::args().skip(1).collect();
    let defaults = EngineConfig::default();

    let start_position = args
        .first()
        .cloned()
        .unwrap_or_else(|| defaults.start_position.clone());
    let difficulty = match args.get(1).map(|s| s.parse::<u32>()) {
        None => defaults.difficulty,
        Some(Ok(depth)) => depth,
        Some(Err(_)) => {
            eprintln!("invalid depth '{}'", args[1]);
            return ExitCode::FAILURE;
        }
    };
    let max_plies = match args.get(2).map(|s| s.parse::<u32>()) {
        None => DEFAULT_MAX_PLIES,
        Some(Ok(n)) => n,
        Some(Err(_)) => {
            eprintln!("invalid ply limit '{}'", args[2]);
            return ExitCode::FAILURE;
        }
    };

    let config = EngineConfig {
        start_position,
        difficulty,
        player_is_bot: true,
        ..defaults
    };
    let mut engine = match Engine::new(config) {
        Ok(engine) => engine,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };

    println!("start {}", engine.position().to_fen());
    for _ in 0..max_plies {
        if engine.outcome() != GameOutcome::None {
            break;
        }
        let number = engine.position().fullmove_number();
        let mover = engine.position().side_to_move();
        match engine.bot() {
            Ok(Some(mv)) => {
                let dots = if mover == Color::White { "." } else { "..." };
                println!("{number}{dots} {mv}  {}", engine.position().to_fen());
            }
            Ok(None) => break,
            Err(e) => {
                eprintln!("{e}");
                return ExitCode::FAILURE;
            }
        }
    }

    println!("result {}", engine.outcome());
    let message = engine.position().outcome_message();
    if !message.is_empty() {
        println!("{message}");
    }
    ExitCode::SUCCESS
}
