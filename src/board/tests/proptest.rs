//! Property-based tests using proptest.

use std::panic::{catch_unwind, AssertUnwindSafe};

use crate::board::{Color, Move, Piece, Position, PositionBuilder, Square};
use proptest::prelude::*;

/// Strategy for a board filling: up to 12 (square, piece code) pairs
fn placement_strategy() -> impl Strategy<Value = Vec<(usize, usize)>> {
    prop::collection::vec((0..64usize, 0..6usize), 0..12)
}

fn seed_strategy() -> impl Strategy<Value = u64> {
    any::<u64>()
}

fn piece_from_code(code: usize) -> (Color, Piece) {
    let color = if code < 3 { Color::White } else { Color::Black };
    (color, Piece::ALL[code % 3])
}

proptest! {
    /// Property: any placement serializes to a string that parses back to it
    #[test]
    fn prop_fen_roundtrip_random_placement(
        placement in placement_strategy(),
        black in any::<bool>(),
        clock in 0..200u32,
        number in 1..500u32,
    ) {
        let mut builder = PositionBuilder::new()
            .side_to_move(if black { Color::Black } else { Color::White })
            .halfmove_clock(clock)
            .fullmove_number(number);
        for (idx, code) in placement {
            let (color, piece) = piece_from_code(code);
            builder = builder.piece(Square::from_index(idx), color, piece);
        }
        let pos = builder.build();
        let fen = pos.to_fen();
        let parsed = Position::try_from_fen(&fen).unwrap();
        prop_assert_eq!(parsed.to_fen(), fen);
        prop_assert_eq!(parsed.placement(), pos.placement());
    }

    /// Property: positions reached by play, and every logged position, round-trip
    #[test]
    fn prop_fen_roundtrip_after_play(seed in seed_strategy(), num_moves in 1..=16usize) {
        use rand::prelude::*;

        let mut pos = Position::new_game("b2k3b/8/8/8/8/8/8/1R3K2 w 0 1").unwrap();
        let mut rng = StdRng::seed_from_u64(seed);

        for _ in 0..num_moves {
            if pos.outcome().is_over() {
                break;
            }
            let moves = pos.generate_moves(pos.side_to_move());
            if moves.is_empty() {
                break;
            }
            let mv = moves[rng.gen_range(0..moves.len())];
            pos.make_move(mv).unwrap();

            let fen = pos.to_fen();
            prop_assert_eq!(Position::try_from_fen(&fen).unwrap().to_fen(), fen);
        }

        for (_, record) in pos.history().iter() {
            for ply in [&record.white, &record.black].into_iter().flatten() {
                prop_assert_eq!(Position::try_from_fen(&ply.fen).unwrap().to_fen(), ply.fen.clone());
            }
        }
    }

    /// Property: a virtual move leaves the position exactly as it was,
    /// whether the closure returns, fails or panics
    #[test]
    fn prop_virtual_move_restores(from in 0..64usize, to in 0..64usize, mode in 0..3u8) {
        let mut pos = Position::new_game("b2k3b/8/8/8/8/8/8/1R3K2 w 0 1").unwrap();
        let before = pos.clone();
        let mv = Move::new(Square::from_index(from), Square::from_index(to));

        match mode {
            0 => {
                let _ = pos.virtual_move(mv, |p| p.is_in_check(Color::White, None));
            }
            1 => {
                let result: Result<(), String> = pos.virtual_move(mv, |p| Err(p.to_fen()));
                prop_assert!(result.is_err());
            }
            _ => {
                let caught = catch_unwind(AssertUnwindSafe(|| {
                    pos.virtual_move(mv, |_| -> () { panic!("inspect failure") })
                }));
                prop_assert!(caught.is_err());
            }
        }
        prop_assert_eq!(pos, before);
    }
}
