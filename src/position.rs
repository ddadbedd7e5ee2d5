//! Integer coordinates on the table.

use crate::heading::Heading;
use glam::IVec2;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Largest valid X coordinate (the table is `X_LIMIT + 1` cells wide).
pub const X_LIMIT: i32 = 4;

/// Largest valid Y coordinate (the table is `Y_LIMIT + 1` cells tall).
pub const Y_LIMIT: i32 = 4;

/// A cell address on the table, origin at the bottom-left corner.
///
/// Coordinates are stored as given, so a `Position` may lie off the table.
/// Such positions are how the rest of the crate represents "nowhere": the
/// default position is `(-1, -1)` and is never valid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position(IVec2);

impl Position {
    /// Creates a position without clamping or checking it.
    pub const fn new(x: i32, y: i32) -> Self {
        Self(IVec2::new(x, y))
    }

    pub const fn x(&self) -> i32 {
        self.0.x
    }

    pub const fn y(&self) -> i32 {
        self.0.y
    }

    /// Whether both coordinates lie within `[0, X_LIMIT] x [0, Y_LIMIT]`.
    pub const fn is_valid(&self) -> bool {
        self.0.x >= 0 && self.0.x <= X_LIMIT && self.0.y >= 0 && self.0.y <= Y_LIMIT
    }

    /// Steps one cell towards `heading`, then clamps each axis onto the table.
    ///
    /// The result is always valid, even when `self` is not: movement saturates
    /// at the table edge instead of being refused.
    pub fn translate(&self, heading: Heading) -> Self {
        let moved = self.0.saturating_add(heading.vector());
        Self(moved.clamp(IVec2::ZERO, IVec2::new(X_LIMIT, Y_LIMIT)))
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::new(-1, -1)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.0.x, self.0.y)
    }
}
