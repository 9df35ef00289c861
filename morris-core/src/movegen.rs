use crate::{MorrisAction, MorrisGame, MorrisPhase};

/// Enumerates every action that is legal in the current state. Terminal
/// states yield nothing.
pub fn gen_actions(game: &MorrisGame) -> Vec<MorrisAction> {
    let mut actions = Vec::new();
    match game.phase {
        MorrisPhase::Set => {
            for pos in game.board.iter_empty() {
                actions.push(MorrisAction::Place { pos });
            }
        }
        MorrisPhase::Remove => {
            for (pos, _) in game.board.iter_pieces(Some(game.current_player.other())) {
                actions.push(MorrisAction::Remove { pos });
            }
        }
        MorrisPhase::Move => {
            for (from, _) in game.board.iter_pieces(Some(game.current_player)) {
                for &to in game.board.neighbors(from) {
                    if game.board.is_empty(to) {
                        actions.push(MorrisAction::Move { from, to });
                    }
                }
            }
        }
        MorrisPhase::Victory => {}
    }
    actions
}
