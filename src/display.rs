use fixed_map::Map;
use morris_core::{MorrisBoard, MorrisCoord, MorrisGame, MorrisPhase, MorrisPlayer};

/// Display names for the two players. The core knows only `MorrisPlayer`;
/// everything user-facing lives here.
pub fn player_names() -> Map<MorrisPlayer, &'static str> {
    let mut names = Map::new();
    names.insert(MorrisPlayer::White, "White");
    names.insert(MorrisPlayer::Black, "Black");
    names
}

pub fn name(names: &Map<MorrisPlayer, &'static str>, player: MorrisPlayer) -> &'static str {
    names.get(player).copied().unwrap_or("?")
}

/// Sketches the board. Empty positions show their coordinate so the player
/// knows what to type; occupied ones show `WW` or `BB`.
pub fn render_board(board: &MorrisBoard) -> String {
    let cell = |ring: usize, index: usize| -> String {
        let pos = MorrisCoord::new(ring, index);
        match board.occupant(pos) {
            Some(piece) if piece.player == MorrisPlayer::White => "WW".to_string(),
            Some(_) => "BB".to_string(),
            None => pos.to_string(),
        }
    };
    format!(
        "{}----------{}----------{}\n\
         |           |           |\n\
         |   {}------{}------{}  |\n\
         |   |       |       |   |\n\
         |   |   {}--{}--{}  |   |\n\
         |   |   |       |   |   |\n\
         {}--{}--{}      {}--{}--{}\n\
         |   |   |       |   |   |\n\
         |   |   {}--{}--{}  |   |\n\
         |   |       |       |   |\n\
         |   {}------{}------{}  |\n\
         |           |           |\n\
         {}----------{}----------{}",
        cell(0, 0),
        cell(0, 1),
        cell(0, 2),
        cell(1, 0),
        cell(1, 1),
        cell(1, 2),
        cell(2, 0),
        cell(2, 1),
        cell(2, 2),
        cell(0, 3),
        cell(1, 3),
        cell(2, 3),
        cell(2, 4),
        cell(1, 4),
        cell(0, 4),
        cell(2, 5),
        cell(2, 6),
        cell(2, 7),
        cell(1, 5),
        cell(1, 6),
        cell(1, 7),
        cell(0, 5),
        cell(0, 6),
        cell(0, 7),
    )
}

/// Maps the abstract phase to the caption shown above the prompt.
pub fn caption(game: &MorrisGame, names: &Map<MorrisPlayer, &'static str>) -> String {
    let turn = name(names, game.current_player);
    match game.phase {
        MorrisPhase::Set => format!(
            "{} places a piece ({} left in hand)",
            turn,
            game.reserve(game.current_player)
        ),
        MorrisPhase::Remove => format!("Mill! {} removes an enemy piece", turn),
        MorrisPhase::Move => match game.selected {
            Some(from) => format!("{} moves the piece on {}", turn, from),
            None => format!("{} selects a piece to move", turn),
        },
        MorrisPhase::Victory => match game.winner {
            Some((winner, _)) => format!("Victory! {} wins", name(names, winner)),
            None => "Victory".to_string(),
        },
    }
}
