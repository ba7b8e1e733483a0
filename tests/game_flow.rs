//! Whole-game tests through the public API.

use chess_bot::board::prelude::*;
use chess_bot::board::{MoveError, INACTIVITY_LIMIT};
use chess_bot::engine::{Engine, EngineConfig};

fn mv(text: &str) -> Move {
    Position::parse_move(text).unwrap()
}

#[test]
fn default_game_round_trip() {
    let mut engine = Engine::new(EngineConfig {
        difficulty: 1,
        ..EngineConfig::default()
    })
    .unwrap();
    assert_eq!(engine.outcome(), GameOutcome::None);

    engine.play(mv("b1b5")).unwrap();
    let bot_move = engine.bot().unwrap().expect("bot should answer");
    assert_eq!(engine.position().side_to_move(), Color::White);

    let record = engine.position().history().get(1).unwrap();
    assert_eq!(record.white.as_ref().unwrap().notation, "Rb5");
    let black = record.black.as_ref().unwrap();
    assert!(black.notation.ends_with(&bot_move.to().to_string()));
    assert_eq!(black.fen, engine.position().to_fen());

    let reparsed = Position::try_from_fen(&black.fen).unwrap();
    assert_eq!(reparsed.to_fen(), black.fen);
}

#[test]
fn rewind_and_replay() {
    let mut pos = Position::new_game("b2k3b/8/8/8/8/8/8/1R3K3 w 0 1").unwrap();
    for text in ["b1b5", "d8e7", "f1e1", "e7e6", "b5b6"] {
        pos.make_move(mv(text)).unwrap();
    }
    assert_eq!(pos.history().len(), 3);

    // Back to the position after Black's first move.
    let snapshot = pos.history().get(1).unwrap().black.clone().unwrap().fen;
    pos.load_snapshot(&snapshot).unwrap();
    assert_eq!(pos.to_fen(), snapshot);
    assert_eq!(pos.side_to_move(), Color::White);
    assert_eq!(pos.history().len(), 1);
    assert!(pos.history().get(1).unwrap().black.is_some());

    pos.make_move(mv("b5b2")).unwrap();
    assert_eq!(pos.history().get(2).unwrap().white.as_ref().unwrap().notation, "Rb2");
}

#[test]
fn illegal_requests_are_errors() {
    let mut pos = Position::new_game("b2k3b/8/8/8/8/8/8/1R3K2 w 0 1").unwrap();
    let err = pos.make_move(mv("d8d7")).unwrap_err();
    assert!(matches!(err, MoveError::NotYourTurn { .. }));
    assert!(!err.to_string().is_empty());

    let err = pos.make_move(mv("b1c2")).unwrap_err();
    assert!(matches!(err, MoveError::IllegalMove { .. }));

    assert!(Position::try_from_fen("b2k3b/8/8/8/8/8/8/1R3Q2 w 0 1").is_err());
    assert!(Position::parse_move("b1").is_err());
}

#[test]
fn inactivity_draw_ends_play() {
    let mut pos = Position::new_game("k7/8/8/8/8/8/8/1R5K w 0 1").unwrap();
    let shuffle = ["h1g1", "a8a7", "g1h1", "a7a8"];
    let mut plies = 0;
    while !pos.outcome().is_over() {
        pos.make_move(mv(shuffle[plies % shuffle.len()])).unwrap();
        plies += 1;
    }
    assert_eq!(pos.outcome(), GameOutcome::DrawByInactivity);
    assert_eq!(plies as u32, INACTIVITY_LIMIT + 1);
    assert!(pos.make_move(mv("h1g1")).is_err());
}

#[test]
fn highlight_flags_follow_selection() {
    let mut pos = Position::new_game("b2k3b/8/8/8/8/8/8/1R3K2 w 0 1").unwrap();
    let b1: Square = "b1".parse().unwrap();
    pos.highlight_moves(b1);
    assert!(pos.flags("b8".parse().unwrap()).highlight);
    pos.clear_highlight(false);
    assert!(Square::all().all(|sq| !pos.flags(sq).highlight));
}

#[test]
fn builder_and_parser_agree() {
    let built = PositionBuilder::new()
        .piece("a8".parse().unwrap(), Color::Black, Piece::King)
        .piece("h1".parse().unwrap(), Color::White, Piece::King)
        .piece("c3".parse().unwrap(), Color::White, Piece::Bishop)
        .side_to_move(Color::Black)
        .build();
    assert_eq!(built, Position::from_fen("k7/8/8/8/8/2B5/8/7K b 0 1"));
}
