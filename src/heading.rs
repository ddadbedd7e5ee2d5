//! Cardinal headings and their rotation algebra.

use crate::error::ParseError;
use glam::IVec2;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the four directions the robot can face.
///
/// `North` points up the table (+Y) and `East` to the right (+X).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Heading {
    #[default]
    North,
    East,
    South,
    West,
}

impl Heading {
    /// All headings in clockwise order, starting at `North`.
    pub const ALL: [Heading; 4] = [Heading::North, Heading::East, Heading::South, Heading::West];

    /// Returns the heading 90 degrees counter-clockwise from this one.
    pub const fn rotate_left(self) -> Self {
        match self {
            Heading::North => Heading::West,
            Heading::West => Heading::South,
            Heading::South => Heading::East,
            Heading::East => Heading::North,
        }
    }

    /// Returns the heading 90 degrees clockwise from this one.
    pub const fn rotate_right(self) -> Self {
        match self {
            Heading::North => Heading::East,
            Heading::East => Heading::South,
            Heading::South => Heading::West,
            Heading::West => Heading::North,
        }
    }

    /// Unit displacement of a single step in this heading.
    pub const fn vector(self) -> IVec2 {
        match self {
            Heading::North => IVec2::new(0, 1),
            Heading::East => IVec2::new(1, 0),
            Heading::South => IVec2::new(0, -1),
            Heading::West => IVec2::new(-1, 0),
        }
    }

    /// The uppercase name used on the command line and in reports.
    pub const fn as_str(self) -> &'static str {
        match self {
            Heading::North => "NORTH",
            Heading::East => "EAST",
            Heading::South => "SOUTH",
            Heading::West => "WEST",
        }
    }

    /// Case-sensitive exact match against the four heading names.
    ///
    /// Lowercase spellings, abbreviations and the empty string are all rejected.
    pub fn parse(text: &str) -> Result<Self, ParseError> {
        Self::ALL
            .into_iter()
            .find(|h| h.as_str() == text)
            .ok_or_else(|| ParseError::UnknownHeading(text.to_owned()))
    }
}

impl FromStr for Heading {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Heading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
