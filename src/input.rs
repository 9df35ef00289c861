use morris_core::MorrisCoord;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum InputError {
    #[error("{0:?} is not a position (o0-o7, m0-m7, i0-i7) or a command (help, board, quit)")]
    Unrecognized(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// A board position was activated.
    Activate(MorrisCoord),
    Board,
    Help,
    Quit,
}

pub fn parse(line: &str) -> Result<Command, InputError> {
    let word = line.trim();
    match word {
        "" | "b" | "board" => Ok(Command::Board),
        "h" | "help" | "?" => Ok(Command::Help),
        "q" | "quit" | "exit" => Ok(Command::Quit),
        _ => MorrisCoord::from_text(word)
            .map(Command::Activate)
            .ok_or_else(|| InputError::Unrecognized(word.to_string())),
    }
}
