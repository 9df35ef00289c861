//! Randomized playouts over the legal-action generator.
//!
//! Plays random legal actions and asserts the structural invariants the rules
//! guarantee: the board stays consistent, counters stay in range, piece
//! accounting matches the arena, and only terminal states stop the game.

use morris_core::{
    INITIAL_PIECES, MorrisGame, MorrisPhase, MorrisPlayer, MorrisWinReason, gen_actions,
};
use rand::prelude::*;

const PLAYOUTS: usize = 50;
const MAX_PLIES: usize = 400;

#[test]
fn random_playouts_preserve_invariants() {
    let mut rng = rand::thread_rng();
    for _ in 0..PLAYOUTS {
        let mut game = MorrisGame::new();
        for _ in 0..MAX_PLIES {
            if game.phase == MorrisPhase::Victory {
                break;
            }
            let actions = gen_actions(&game);
            assert!(
                !actions.is_empty(),
                "non-terminal state without a legal action: {:?}",
                game.phase
            );
            let action = *actions.choose(&mut rng).expect("actions are not empty");
            assert!(game.apply(action), "generated action {:?} rejected", action);
            check_accounting(&game);
        }
    }
}

#[test]
fn random_playouts_reach_consistent_endings() {
    let mut rng = rand::thread_rng();
    let mut finished = 0;
    for _ in 0..PLAYOUTS {
        let mut game = MorrisGame::new();
        for _ in 0..MAX_PLIES {
            if game.phase == MorrisPhase::Victory {
                break;
            }
            let actions = gen_actions(&game);
            let action = *actions.choose(&mut rng).expect("actions are not empty");
            assert!(game.apply(action));
        }
        if game.phase == MorrisPhase::Victory {
            finished += 1;
            let (winner, reason) = game.winner.expect("victory carries a winner");
            match reason {
                MorrisWinReason::Reduction => {
                    assert_eq!(game.in_play(winner.other()), 2);
                }
                MorrisWinReason::Blockade => {
                    assert!(!game.board.player_can_move(winner.other()));
                }
            }
            assert!(gen_actions(&game).is_empty());
        }
    }
    // Random play removes pieces aggressively; most playouts should finish.
    assert!(finished > 0, "no playout reached a terminal state");
}

fn check_accounting(game: &MorrisGame) {
    game.board.validate().expect("board invariants hold");
    for player in MorrisPlayer::ALL {
        assert!(game.reserve(player) <= INITIAL_PIECES);
        assert!(game.in_play(player) <= INITIAL_PIECES);
        assert_eq!(
            game.board.count_pieces(player) + game.reserve(player),
            game.in_play(player),
            "piece accounting drifted for {:?}",
            player
        );
        if game.phase != MorrisPhase::Victory {
            assert!(game.in_play(player) > 2);
        }
    }
    if game.phase == MorrisPhase::Set {
        assert!(
            game.hands.iter().any(|hand| hand.reserve > 0),
            "set phase with both reserves empty"
        );
    }
}
