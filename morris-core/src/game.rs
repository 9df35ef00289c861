use crate::{
    INITIAL_PIECES, MorrisAction, MorrisActionRecord, MorrisBoard, MorrisCoord,
    MorrisInvalidActionError, MorrisInvalidMoveError, MorrisInvalidPlaceError,
    MorrisInvalidRemoveError, MorrisInvalidSelectError, MorrisPhase, MorrisPlayer, MorrisWinReason,
};

/// Per-player piece accounting. `reserve` counts placements still to make,
/// `in_play` counts pieces not yet captured (placed or not).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MorrisHand {
    pub reserve: usize,
    pub in_play: usize,
}

impl MorrisHand {
    pub fn new(initial: usize) -> Self {
        MorrisHand {
            reserve: initial,
            in_play: initial,
        }
    }

    pub fn try_take(&mut self) -> bool {
        if self.reserve > 0 {
            self.reserve -= 1;
            true
        } else {
            false
        }
    }

    pub fn capture(&mut self) {
        self.in_play -= 1;
    }

    pub fn is_exhausted(&self) -> bool {
        self.reserve == 0
    }
}

/// The game state machine. All rule enforcement goes through the `try_*`
/// methods; an invalid action is rejected with the state unchanged.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MorrisGame {
    pub board: MorrisBoard,
    pub current_player: MorrisPlayer,
    pub phase: MorrisPhase,
    pub hands: [MorrisHand; 2],
    pub selected: Option<MorrisCoord>,
    pub winner: Option<(MorrisPlayer, MorrisWinReason)>,
    pub action_history: Vec<MorrisActionRecord>,
}

impl MorrisGame {
    pub fn new() -> Self {
        MorrisGame {
            board: MorrisBoard::new(),
            current_player: MorrisPlayer::White,
            phase: MorrisPhase::Set,
            hands: [
                MorrisHand::new(INITIAL_PIECES),
                MorrisHand::new(INITIAL_PIECES),
            ],
            selected: None,
            winner: None,
            action_history: Vec::new(),
        }
    }

    pub fn reserve(&self, player: MorrisPlayer) -> usize {
        self.hands[player.index()].reserve
    }

    pub fn in_play(&self, player: MorrisPlayer) -> usize {
        self.hands[player.index()].in_play
    }

    /// Places a piece for the current player. Forming a mill moves the game
    /// to the remove phase with the turn held; otherwise the turn switches
    /// and, once both reserves are empty, the move phase begins.
    pub fn try_place(&mut self, pos: MorrisCoord) -> Result<(), MorrisInvalidPlaceError> {
        if self.phase != MorrisPhase::Set {
            return Err(MorrisInvalidPlaceError::NotAllowed);
        }
        self.board.can_place(pos)?;
        if !self.hands[self.current_player.index()].try_take() {
            return Err(MorrisInvalidPlaceError::NoPiecesLeft);
        }
        let player = self.current_player;
        self.board.place_unchecked(pos, player);
        self.action_history
            .push(MorrisActionRecord::Place { pos, player });
        if self.board.check_new_mills() {
            self.phase = MorrisPhase::Remove;
        } else {
            self.advance_turn();
        }
        Ok(())
    }

    /// Records the piece on `pos` as selected for moving.
    pub fn try_select(&mut self, pos: MorrisCoord) -> Result<(), MorrisInvalidSelectError> {
        if self.phase != MorrisPhase::Move {
            return Err(MorrisInvalidSelectError::NotAllowed);
        }
        self.board.can_select(pos, self.current_player)?;
        self.selected = Some(pos);
        Ok(())
    }

    /// Slides the selected piece to `pos`.
    pub fn try_move_selected(&mut self, pos: MorrisCoord) -> Result<(), MorrisInvalidMoveError> {
        if self.phase != MorrisPhase::Move {
            return Err(MorrisInvalidMoveError::NotAllowed);
        }
        let from = self.selected.ok_or(MorrisInvalidMoveError::NoSelection)?;
        self.move_piece(from, pos)
    }

    /// Removes an opponent piece after a mill, then resumes the interrupted
    /// phase (or ends the game).
    pub fn try_remove(&mut self, pos: MorrisCoord) -> Result<(), MorrisInvalidRemoveError> {
        if self.phase != MorrisPhase::Remove {
            return Err(MorrisInvalidRemoveError::NotAllowed);
        }
        let piece = match self.board.occupant(pos) {
            Some(piece) => *piece,
            None if pos.is_valid() => return Err(MorrisInvalidRemoveError::PositionEmpty),
            None => return Err(MorrisInvalidRemoveError::InvalidPosition),
        };
        if piece.player == self.current_player {
            return Err(MorrisInvalidRemoveError::OwnPiece);
        }
        let player = self.current_player;
        let opponent = player.other();
        self.board.remove_unchecked(pos);
        self.hands[opponent.index()].capture();
        self.action_history
            .push(MorrisActionRecord::Remove { pos, player });
        if self.hands[opponent.index()].in_play == 2 {
            self.declare_winner(player, MorrisWinReason::Reduction);
            return Ok(());
        }
        self.phase = if self.hands.iter().any(|hand| hand.reserve > 0) {
            MorrisPhase::Set
        } else {
            MorrisPhase::Move
        };
        self.advance_turn();
        Ok(())
    }

    /// Dispatches a complete action value.
    pub fn try_do_action(&mut self, action: MorrisAction) -> Result<(), MorrisInvalidActionError> {
        match action {
            MorrisAction::Place { pos } => self
                .try_place(pos)
                .map_err(MorrisInvalidActionError::InvalidPlace),
            MorrisAction::Move { from, to } => {
                if self.phase != MorrisPhase::Move {
                    return Err(MorrisInvalidActionError::InvalidMove(
                        MorrisInvalidMoveError::NotAllowed,
                    ));
                }
                self.board
                    .can_select(from, self.current_player)
                    .map_err(MorrisInvalidActionError::InvalidSelect)?;
                self.move_piece(from, to)
                    .map_err(MorrisInvalidActionError::InvalidMove)
            }
            MorrisAction::Remove { pos } => self
                .try_remove(pos)
                .map_err(MorrisInvalidActionError::InvalidRemove),
        }
    }

    /// Success/no-op form of `try_do_action`.
    pub fn apply(&mut self, action: MorrisAction) -> bool {
        self.try_do_action(action).is_ok()
    }

    fn move_piece(
        &mut self,
        from: MorrisCoord,
        to: MorrisCoord,
    ) -> Result<(), MorrisInvalidMoveError> {
        self.board.can_move(from, to)?;
        let player = self.current_player;
        self.board.move_unchecked(from, to);
        self.selected = None;
        self.action_history
            .push(MorrisActionRecord::Move { from, to, player });
        if self.board.check_new_mills() {
            self.phase = MorrisPhase::Remove;
        } else {
            self.advance_turn();
        }
        Ok(())
    }

    fn advance_turn(&mut self) {
        self.current_player = self.current_player.other();
        if self.phase == MorrisPhase::Set && self.hands.iter().all(MorrisHand::is_exhausted) {
            self.phase = MorrisPhase::Move;
        }
        // A player left without a mobile piece loses on the spot.
        if self.phase == MorrisPhase::Move && !self.board.player_can_move(self.current_player) {
            self.declare_winner(self.current_player.other(), MorrisWinReason::Blockade);
        }
    }

    fn declare_winner(&mut self, winner: MorrisPlayer, reason: MorrisWinReason) {
        self.phase = MorrisPhase::Victory;
        self.selected = None;
        self.winner = Some((winner, reason));
    }
}

impl Default for MorrisGame {
    fn default() -> Self {
        Self::new()
    }
}
