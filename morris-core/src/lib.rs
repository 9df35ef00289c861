mod action;
mod board;
mod coord;
mod game;
mod movegen;
mod ring;

pub use action::*;
pub use board::*;
pub use coord::*;
pub use game::*;
pub use movegen::*;
pub use ring::*;

/// Number of pieces each player starts with.
pub const INITIAL_PIECES: usize = 9;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, fixed_map::Key)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MorrisPlayer {
    White,
    Black,
}

impl MorrisPlayer {
    pub const ALL: [MorrisPlayer; 2] = [MorrisPlayer::White, MorrisPlayer::Black];

    pub fn other(&self) -> Self {
        match self {
            MorrisPlayer::White => MorrisPlayer::Black,
            MorrisPlayer::Black => MorrisPlayer::White,
        }
    }

    pub fn index(&self) -> usize {
        match self {
            MorrisPlayer::White => 0,
            MorrisPlayer::Black => 1,
        }
    }
}

/// The four stations of a game. `Victory` is terminal: no action is accepted
/// once it is reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MorrisPhase {
    Set,
    Remove,
    Move,
    Victory,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MorrisWinReason {
    /// The opponent was reduced to two pieces.
    Reduction,
    /// The opponent had no piece left with an empty neighbor on their turn.
    Blockade,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MorrisInvalidPlaceError {
    NotAllowed,
    InvalidPosition,
    PositionOccupied,
    NoPiecesLeft,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MorrisInvalidSelectError {
    NotAllowed,
    InvalidPosition,
    PositionEmpty,
    NotOwnPiece,
    NoEmptyNeighbor,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MorrisInvalidMoveError {
    NotAllowed,
    NoSelection,
    InvalidPosition,
    PositionEmpty,
    PositionOccupied,
    NotAdjacent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MorrisInvalidRemoveError {
    NotAllowed,
    InvalidPosition,
    PositionEmpty,
    OwnPiece,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MorrisInvalidActionError {
    InvalidPlace(MorrisInvalidPlaceError),
    InvalidSelect(MorrisInvalidSelectError),
    InvalidMove(MorrisInvalidMoveError),
    InvalidRemove(MorrisInvalidRemoveError),
}
