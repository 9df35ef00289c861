use crate::{MorrisCoord, MorrisPlayer};

/// A complete, self-contained player action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MorrisAction {
    Place { pos: MorrisCoord },
    Move { from: MorrisCoord, to: MorrisCoord },
    Remove { pos: MorrisCoord },
}

/// An applied action as appended to the game history.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MorrisActionRecord {
    Place {
        pos: MorrisCoord,
        player: MorrisPlayer,
    },
    Move {
        from: MorrisCoord,
        to: MorrisCoord,
        player: MorrisPlayer,
    },
    Remove {
        pos: MorrisCoord,
        player: MorrisPlayer,
    },
}

impl MorrisActionRecord {
    pub fn player(&self) -> MorrisPlayer {
        match self {
            MorrisActionRecord::Place { player, .. } => *player,
            MorrisActionRecord::Move { player, .. } => *player,
            MorrisActionRecord::Remove { player, .. } => *player,
        }
    }

    pub fn to_action(&self) -> MorrisAction {
        match self {
            MorrisActionRecord::Place { pos, .. } => MorrisAction::Place { pos: *pos },
            MorrisActionRecord::Move { from, to, .. } => MorrisAction::Move {
                from: *from,
                to: *to,
            },
            MorrisActionRecord::Remove { pos, .. } => MorrisAction::Remove { pos: *pos },
        }
    }

    pub fn to_text(&self) -> String {
        self.to_action().to_text()
    }
}

impl MorrisAction {
    /// Compact text form for move logs: `o0` places, `o6-o5` moves and `xm1`
    /// removes.
    pub fn to_text(&self) -> String {
        match self {
            MorrisAction::Place { pos } => format!("{}", pos),
            MorrisAction::Move { from, to } => format!("{}-{}", from, to),
            MorrisAction::Remove { pos } => format!("x{}", pos),
        }
    }

    pub fn from_text(input: &str) -> Option<Self> {
        if let Some(rest) = input.strip_prefix('x') {
            return MorrisCoord::from_text(rest).map(|pos| MorrisAction::Remove { pos });
        }
        if let Some((from, to)) = input.split_once('-') {
            let from = MorrisCoord::from_text(from)?;
            let to = MorrisCoord::from_text(to)?;
            return Some(MorrisAction::Move { from, to });
        }
        MorrisCoord::from_text(input).map(|pos| MorrisAction::Place { pos })
    }
}
