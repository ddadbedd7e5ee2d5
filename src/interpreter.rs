//! Interpreter that turns lines of operator text into robot actions.
//!
//! The entry point is [`Interpreter::execute`], which takes one raw input line
//! and always produces a [`Response`]: either the robot's new report, a help or
//! farewell text, or the message of the [`CommandError`] that stopped the
//! command. Errors never leave the robot partially updated.

use crate::agent::Agent;
use crate::error::{CommandError, PlacementError};
use crate::heading::Heading;
use crate::position::Position;
use std::fmt;
use tracing::debug;

/// Fixed help text listing every command.
pub const HELP_TEXT: &str = "\
Hello. I am a table robot.
You can move me on a 5x5 table; both X and Y run from 0 to 4.
The bottom-left corner is 0,0. NORTH is up, EAST is right, SOUTH is down, WEST is left.
I understand the following commands (CAPITAL LETTERS ONLY, please):
\tHELP - Print this help
\tEXIT - Terminate the session
\tPLACE X,Y,DIRECTION - Put me on the table at X,Y facing NORTH, EAST, SOUTH or WEST.
\t\tExample: PLACE 1,1,SOUTH - I will be placed at 1,1 facing SOUTH
\tMOVE - Move me one unit forward in the direction I am facing
\tLEFT - Rotate me 90 degrees to the left without changing my position
\tRIGHT - Rotate me 90 degrees to the right without changing my position
\tREPORT - Announce my X,Y and DIRECTION
";

/// Message returned by `EXIT`.
pub const FAREWELL: &str = "Bye bye! Hope to see you again soon!";

/// The closed set of command words, plus a variant for everything else.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CommandKind {
    Help,
    Exit,
    Place,
    Move,
    Left,
    Right,
    Report,
    /// Any token that is not an exact match for a known command.
    Unknown,
}

impl CommandKind {
    const TABLE: [(&'static str, CommandKind); 7] = [
        ("HELP", CommandKind::Help),
        ("EXIT", CommandKind::Exit),
        ("PLACE", CommandKind::Place),
        ("MOVE", CommandKind::Move),
        ("LEFT", CommandKind::Left),
        ("RIGHT", CommandKind::Right),
        ("REPORT", CommandKind::Report),
    ];

    /// Case-sensitive lookup of a command word. Never fails.
    pub fn from_token(token: &str) -> Self {
        Self::TABLE
            .iter()
            .find(|(word, _)| *word == token)
            .map_or(CommandKind::Unknown, |(_, kind)| *kind)
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            CommandKind::Help => "HELP",
            CommandKind::Exit => "EXIT",
            CommandKind::Place => "PLACE",
            CommandKind::Move => "MOVE",
            CommandKind::Left => "LEFT",
            CommandKind::Right => "RIGHT",
            CommandKind::Report => "REPORT",
            CommandKind::Unknown => "UNKNOWN",
        }
    }

    /// Commands refused while the robot is off the table.
    pub const fn requires_placement(self) -> bool {
        matches!(
            self,
            CommandKind::Move | CommandKind::Left | CommandKind::Right | CommandKind::Report
        )
    }
}

impl fmt::Display for CommandKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A tokenized input line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Command {
    pub kind: CommandKind,
    /// The command word as typed.
    pub token: String,
    /// Everything after the first space, if there was one.
    pub argument: Option<String>,
}

impl Command {
    /// Splits `line` into a command word and an optional argument.
    ///
    /// Surrounding whitespace is ignored; the line is split on its first
    /// space only and the argument is kept verbatim. Unknown words produce
    /// [`CommandKind::Unknown`] rather than an error.
    pub fn parse(line: &str) -> Result<Self, CommandError> {
        let line = line.trim();
        if line.is_empty() {
            return Err(CommandError::Empty);
        }

        let (token, argument) = match line.split_once(' ') {
            Some((token, rest)) => (token, Some(rest.to_owned())),
            None => (line, None),
        };

        let kind = CommandKind::from_token(token);
        if kind == CommandKind::Place && argument.as_deref().is_none_or(str::is_empty) {
            return Err(CommandError::MissingArgument(kind));
        }

        Ok(Self {
            kind,
            token: token.to_owned(),
            argument,
        })
    }
}

/// Parses a `PLACE` argument of the form `X,Y,DIRECTION`.
///
/// The returned position is not checked against the table; that is left to
/// [`Agent::place`]. When only the heading is bad, the error still carries the
/// parsed coordinates.
pub fn parse_placement(argument: &str) -> Result<(Position, Heading), PlacementError> {
    if argument.is_empty() {
        return Err(PlacementError::Empty);
    }

    let fields: Vec<&str> = argument.split(',').collect();
    let [x, y, heading] = fields.as_slice() else {
        return Err(PlacementError::FieldCount(fields.len()));
    };

    let x: i32 = x
        .parse()
        .map_err(|_| PlacementError::InvalidX((*x).to_owned()))?;
    let y: i32 = y
        .parse()
        .map_err(|_| PlacementError::InvalidY((*y).to_owned()))?;
    let position = Position::new(x, y);

    let heading = Heading::parse(heading).map_err(|_| PlacementError::UnknownHeading {
        position,
        heading: (*heading).to_owned(),
    })?;

    Ok((position, heading))
}

/// Whether the session should keep reading input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Control {
    Continue,
    Exit,
}

/// What the interpreter says back for one input line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Response {
    pub message: String,
    pub control: Control,
}

impl Response {
    pub fn reply(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            control: Control::Continue,
        }
    }

    pub fn exit(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            control: Control::Exit,
        }
    }

    pub fn should_continue(&self) -> bool {
        self.control == Control::Continue
    }
}

/// Drives a single [`Agent`] from textual commands.
#[derive(Clone, Debug, Default)]
pub struct Interpreter {
    agent: Agent,
}

impl Interpreter {
    /// Creates an interpreter whose robot starts off the table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the robot the interpreter drives (builder pattern).
    pub fn with_agent(mut self, agent: Agent) -> Self {
        self.agent = agent;
        self
    }

    pub fn agent(&self) -> &Agent {
        &self.agent
    }

    /// Runs one raw input line and reports the outcome.
    ///
    /// Every failure is folded into the returned message; only `EXIT` yields
    /// [`Control::Exit`].
    pub fn execute(&mut self, line: &str) -> Response {
        match Command::parse(line).and_then(|command| self.dispatch(&command)) {
            Ok(response) => response,
            Err(err) => {
                debug!(input = line, error = %err, "command rejected");
                Response::reply(err.to_string())
            }
        }
    }

    /// Applies an already tokenized command to the robot.
    ///
    /// Accepts commands built by hand as well as by [`Command::parse`], so a
    /// `PLACE` without an argument is refused here too.
    pub fn dispatch(&mut self, command: &Command) -> Result<Response, CommandError> {
        debug!(command = %command.kind, argument = ?command.argument, "dispatching command");

        if command.kind.requires_placement() && !self.agent.on_table() {
            return Err(CommandError::NotPlaced(command.kind));
        }

        match command.kind {
            CommandKind::Help => Ok(Response::reply(HELP_TEXT)),
            CommandKind::Exit => Ok(Response::exit(FAREWELL)),
            CommandKind::Place => {
                let argument = command
                    .argument
                    .as_deref()
                    .filter(|arg| !arg.is_empty())
                    .ok_or(CommandError::MissingArgument(CommandKind::Place))?;
                let (position, heading) = parse_placement(argument)?;
                debug!(%position, %heading, "placement parsed");

                if !self.agent.place(position, heading) {
                    return Err(CommandError::OffTable(position));
                }
                Ok(Response::reply(self.agent.report()))
            }
            CommandKind::Move => {
                self.agent.move_forward();
                Ok(Response::reply(self.agent.report()))
            }
            CommandKind::Left => {
                self.agent.turn_left();
                Ok(Response::reply(self.agent.report()))
            }
            CommandKind::Right => {
                self.agent.turn_right();
                Ok(Response::reply(self.agent.report()))
            }
            CommandKind::Report => Ok(Response::reply(self.agent.report())),
            CommandKind::Unknown => Err(CommandError::Unrecognized(command.token.clone())),
        }
    }
}
