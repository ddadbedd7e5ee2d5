//! # tabletop-robot
//!
//! A command interpreter for a single robot on a 5x5 table.
//!
//! Text such as `PLACE 1,2,EAST`, `MOVE`, `LEFT` and `REPORT` is parsed into typed
//! commands and applied to an [`Agent`] whose [`Position`] can never leave the
//! table once it has been placed: moves saturate at the edges and invalid
//! placements are refused without touching the current state.
//!
//! The [`shell`] module wraps an [`Interpreter`] in a read-execute-print loop
//! that can be fed from a terminal or from a script.

pub mod agent;
pub mod error;
pub mod heading;
pub mod interpreter;
pub mod position;
pub mod shell;

pub use agent::*;
pub use error::*;
pub use heading::*;
pub use interpreter::*;
pub use position::*;
pub use shell::{EditorSource, LineSource, RunSummary, ScriptSource, ShellConfig, run};
