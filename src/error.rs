//! Error types for parsing and dispatching robot commands.
//!
//! Every variant of [`CommandError`] is recoverable: the interpreter turns it
//! into a message for the operator and leaves the robot exactly as it was.
//! Only [`ShellError`] can end a session abnormally, and it never comes from
//! the core.

use crate::interpreter::CommandKind;
use crate::position::Position;
use rustyline::error::ReadlineError;
use thiserror::Error;

/// Failure to read a single token as a typed value.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("unknown heading '{0}'")]
    UnknownHeading(String),
}

/// Failure to read the `X,Y,DIRECTION` argument of `PLACE`.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum PlacementError {
    #[error("Invalid position location or direction. Empty values.")]
    Empty,

    /// Wrong number of comma-separated fields.
    #[error("Invalid position location or direction. Valid Example: 1,1,SOUTH")]
    FieldCount(usize),

    #[error("Invalid location. X value must be integer. Valid Example: 1,0,EAST")]
    InvalidX(String),

    #[error("Invalid location. Y value must be integer. Valid Example: 2,1,NORTH")]
    InvalidY(String),

    /// Coordinates parsed but the heading did not.
    ///
    /// `position` holds the coordinates that were read so callers can still
    /// inspect them, even though the placement as a whole is rejected.
    #[error("Invalid direction. It can be: NORTH/EAST/SOUTH/WEST only. Valid Example: 3,1,WEST")]
    UnknownHeading { position: Position, heading: String },
}

/// The user-facing error taxonomy of the interpreter.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("Command must not be empty")]
    Empty,

    #[error("Sorry, didn't get the command '{0}'. Please try again ...")]
    Unrecognized(String),

    #[error("Command '{0}' cannot have empty parameters.")]
    MissingArgument(CommandKind),

    #[error(transparent)]
    Placement(#[from] PlacementError),

    #[error("{}", not_placed_message(.0))]
    NotPlaced(CommandKind),

    #[error("Sorry, I can not go on location {0}. I will fall off the table")]
    OffTable(Position),
}

fn not_placed_message(kind: &CommandKind) -> &'static str {
    match kind {
        CommandKind::Move => "I am not on the table yet. Please PLACE me ...",
        CommandKind::Left => "Sorry, I am not on the right PLACE yet ...",
        CommandKind::Right => "Sorry, you didn't PLACE me somewhere on the table yet ...",
        CommandKind::Report => "Sorry, you have to PLACE me on the table first ...",
        // Never refused for being off the table.
        CommandKind::Help | CommandKind::Exit | CommandKind::Place | CommandKind::Unknown => {
            "I am not on the table yet."
        }
    }
}

/// Failures of the terminal shell around the interpreter.
#[derive(Debug, Error)]
pub enum ShellError {
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("line editor error: {0}")]
    Readline(#[from] ReadlineError),
}
