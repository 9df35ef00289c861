use std::io::{self, BufRead, Write};

use morris_core::{
    MorrisCoord, MorrisGame, MorrisInvalidMoveError, MorrisInvalidPlaceError,
    MorrisInvalidRemoveError, MorrisInvalidSelectError, MorrisPhase,
};

mod display;
mod input;

use input::Command;

const HELP: &str = "\
Type a position to act on it; the current phase decides what happens:
  set phase     an empty position receives your piece
  remove phase  an enemy piece on that position is taken off the board
  move phase    your piece gets selected, then an empty neighbor receives it
Positions are a ring letter plus an index: o0-o7 (outer), m0-m7 (middle),
i0-i7 (inner). Other commands: board (redraw), help, quit.";

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("terminal i/o failed: {0}")]
    Io(#[from] io::Error),
}

fn main() {
    let _logger = flexi_logger::Logger::try_with_env_or_str("info")
        .expect("default log specification should parse")
        .start()
        .expect("logger should start");
    if let Err(err) = run() {
        eprintln!("{}", err);
        std::process::exit(1);
    }
}

fn run() -> Result<(), CliError> {
    let names = display::player_names();
    let mut game = MorrisGame::new();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    writeln!(out, "Nine Men's Morris")?;
    writeln!(out, "{}", HELP)?;
    writeln!(out, "\n{}\n", display::render_board(&game.board))?;
    writeln!(out, "{}", display::caption(&game, &names))?;
    write!(out, "> ")?;
    out.flush()?;
    for line in io::stdin().lock().lines() {
        let line = line?;
        match input::parse(&line) {
            Ok(Command::Quit) => break,
            Ok(Command::Help) => writeln!(out, "{}", HELP)?,
            Ok(Command::Board) => writeln!(out, "{}", display::render_board(&game.board))?,
            Ok(Command::Activate(pos)) => match activate(&mut game, pos) {
                Some(rejection) => writeln!(out, "{}", rejection)?,
                None => writeln!(out, "\n{}\n", display::render_board(&game.board))?,
            },
            Err(err) => writeln!(out, "{}", err)?,
        }
        writeln!(out, "{}", display::caption(&game, &names))?;
        if game.phase == MorrisPhase::Victory {
            if let Some((winner, reason)) = game.winner {
                log::info!("{:?} wins by {:?}", winner, reason);
            }
            break;
        }
        write!(out, "> ")?;
        out.flush()?;
    }
    Ok(())
}

/// Translates "this position was activated" into whatever action the current
/// phase calls for, and reports why an activation was ignored.
fn activate(game: &mut MorrisGame, pos: MorrisCoord) -> Option<&'static str> {
    let player = game.current_player;
    match game.phase {
        MorrisPhase::Set => match game.try_place(pos) {
            Ok(()) => {
                log::info!("{:?} places {}", player, pos);
                None
            }
            Err(err) => Some(describe_place(err)),
        },
        MorrisPhase::Remove => match game.try_remove(pos) {
            Ok(()) => {
                log::info!("{:?} removes {}", player, pos);
                None
            }
            Err(err) => Some(describe_remove(err)),
        },
        MorrisPhase::Move => {
            // Activating an empty position completes the pending move, any
            // other activation (re)selects a piece.
            if game.selected.is_some() && game.board.is_empty(pos) {
                match game.try_move_selected(pos) {
                    Ok(()) => {
                        log::info!("{:?} moves to {}", player, pos);
                        None
                    }
                    Err(err) => Some(describe_move(err)),
                }
            } else {
                match game.try_select(pos) {
                    Ok(()) => {
                        log::debug!("{:?} selects {}", player, pos);
                        None
                    }
                    Err(err) => Some(describe_select(err)),
                }
            }
        }
        MorrisPhase::Victory => Some("the game is over"),
    }
}

fn describe_place(err: MorrisInvalidPlaceError) -> &'static str {
    match err {
        MorrisInvalidPlaceError::NotAllowed => "placing is not allowed right now",
        MorrisInvalidPlaceError::InvalidPosition => "no such position",
        MorrisInvalidPlaceError::PositionOccupied => "that position is occupied",
        MorrisInvalidPlaceError::NoPiecesLeft => "no pieces left to place",
    }
}

fn describe_select(err: MorrisInvalidSelectError) -> &'static str {
    match err {
        MorrisInvalidSelectError::NotAllowed => "selecting is not allowed right now",
        MorrisInvalidSelectError::InvalidPosition => "no such position",
        MorrisInvalidSelectError::PositionEmpty => "that position is empty",
        MorrisInvalidSelectError::NotOwnPiece => "that piece is not yours",
        MorrisInvalidSelectError::NoEmptyNeighbor => "that piece has nowhere to go",
    }
}

fn describe_move(err: MorrisInvalidMoveError) -> &'static str {
    match err {
        MorrisInvalidMoveError::NotAllowed => "moving is not allowed right now",
        MorrisInvalidMoveError::NoSelection => "select one of your pieces first",
        MorrisInvalidMoveError::InvalidPosition => "no such position",
        MorrisInvalidMoveError::PositionEmpty => "there is no piece to move there",
        MorrisInvalidMoveError::PositionOccupied => "that position is occupied",
        MorrisInvalidMoveError::NotAdjacent => "that position is not adjacent",
    }
}

fn describe_remove(err: MorrisInvalidRemoveError) -> &'static str {
    match err {
        MorrisInvalidRemoveError::NotAllowed => "removing is not allowed right now",
        MorrisInvalidRemoveError::InvalidPosition => "no such position",
        MorrisInvalidRemoveError::PositionEmpty => "that position is empty",
        MorrisInvalidRemoveError::OwnPiece => "you cannot remove your own piece",
    }
}
