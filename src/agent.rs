//! Robot state and the operations that mutate it.

use crate::heading::Heading;
use crate::position::Position;
use serde::{Deserialize, Serialize};
use tracing::info;

/// The robot on the table.
///
/// Starts off the table (at the invalid default [`Position`]) and stays there
/// until a successful [`place`](Self::place). Once placed it can never leave:
/// [`move_forward`](Self::move_forward) saturates at the edges and a rejected
/// placement keeps the previous state.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Agent {
    position: Position,
    heading: Heading,
}

impl Agent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn heading(&self) -> Heading {
        self.heading
    }

    /// Whether the robot currently occupies a valid cell.
    pub fn on_table(&self) -> bool {
        self.position.is_valid()
    }

    /// Puts the robot at `position` facing `heading`.
    ///
    /// Returns `false` and changes nothing when `position` is off the table.
    pub fn place(&mut self, position: Position, heading: Heading) -> bool {
        if !position.is_valid() {
            return false;
        }

        self.position = position;
        self.heading = heading;
        info!(%position, %heading, "robot placed");
        true
    }

    /// Advances one cell in the current heading, stopping at the table edge.
    ///
    /// Does nothing while the robot is off the table.
    pub fn move_forward(&mut self) {
        if !self.on_table() {
            return;
        }

        self.position = self.position.translate(self.heading);
        info!(position = %self.position, "robot moved");
    }

    /// Rotates 90 degrees counter-clockwise in place.
    pub fn turn_left(&mut self) {
        self.heading = self.heading.rotate_left();
        info!(heading = %self.heading, "robot turned left");
    }

    /// Rotates 90 degrees clockwise in place.
    pub fn turn_right(&mut self) {
        self.heading = self.heading.rotate_right();
        info!(heading = %self.heading, "robot turned right");
    }

    /// Formats the state as `X,Y,HEADING`, e.g. `3,1,EAST`.
    ///
    /// Only meaningful once placed; an unplaced robot reports `-1,-1,NORTH`.
    pub fn report(&self) -> String {
        format!("{},{}", self.position, self.heading)
    }
}
