//! Property tests over arbitrary move sequences.

use proptest::prelude::*;
use strictly_rounds::{Board, Cell, Player, RoundEngine, RoundStatus};

fn changed_cells(before: &Board, after: &Board) -> usize {
    before
        .cells()
        .iter()
        .zip(after.cells())
        .filter(|(a, b)| a != b)
        .count()
}

proptest! {
    #[test]
    fn prop_each_move_changes_at_most_one_cell(moves in prop::collection::vec(0usize..12, 0..30)) {
        let mut engine = RoundEngine::new();
        for index in moves {
            let before = engine.snapshot();
            let result = engine.apply_move(index);
            let after = engine.snapshot();

            match result {
                Ok(_) => {
                    prop_assert_eq!(changed_cells(before.board(), after.board()), 1);
                    prop_assert_eq!(
                        after.board().get_index(index),
                        Some(Cell::Occupied(*before.current_player()))
                    );
                }
                Err(_) => prop_assert_eq!(&before, &after),
            }
        }
    }

    #[test]
    fn prop_turns_alternate_from_x(moves in prop::collection::vec(0usize..9, 0..20)) {
        let mut engine = RoundEngine::new();
        let mut expected = Player::X;
        for index in moves {
            let mover = engine.current_player();
            match engine.apply_move(index) {
                Ok(RoundStatus::InProgress) => {
                    prop_assert_eq!(mover, expected);
                    expected = expected.opponent();
                    prop_assert_eq!(engine.current_player(), expected);
                }
                Ok(_) => {
                    prop_assert_eq!(mover, expected);
                    // Frozen on the last mover.
                    prop_assert_eq!(engine.current_player(), mover);
                }
                Err(_) => prop_assert_eq!(engine.current_player(), mover),
            }
        }
    }

    #[test]
    fn prop_terminal_round_scores_exactly_once(
        rounds in prop::collection::vec(prop::collection::vec(0usize..9, 0..15), 1..6)
    ) {
        let mut engine = RoundEngine::new();
        for moves in rounds {
            let start = engine.scoreboard();
            for index in moves {
                let _ = engine.apply_move(index);
            }
            let end = engine.scoreboard();
            let delta = (
                end.wins_x() - start.wins_x(),
                end.wins_o() - start.wins_o(),
                end.ties() - start.ties(),
            );
            match engine.status() {
                RoundStatus::Won(Player::X) => prop_assert_eq!(delta, (1, 0, 0)),
                RoundStatus::Won(Player::O) => prop_assert_eq!(delta, (0, 1, 0)),
                RoundStatus::Drawn => prop_assert_eq!(delta, (0, 0, 1)),
                RoundStatus::InProgress => prop_assert_eq!(delta, (0, 0, 0)),
            }
            engine.start_new_round();
        }
    }

    #[test]
    fn prop_new_round_always_resets(moves in prop::collection::vec(0usize..9, 0..12)) {
        let mut engine = RoundEngine::new();
        for index in moves {
            let _ = engine.apply_move(index);
        }
        let scores = engine.scoreboard();
        let round = engine.round();

        engine.start_new_round();

        prop_assert_eq!(engine.board(), &Board::new());
        prop_assert_eq!(engine.current_player(), Player::X);
        prop_assert_eq!(engine.status(), RoundStatus::InProgress);
        prop_assert_eq!(engine.scoreboard(), scores);
        prop_assert_eq!(engine.round(), round + 1);
    }
}
