//! The library components of the scorekeeper. They allow initializing the interactive session,
//! taking roll input, computing bowling scores and rendering the scoresheet.
//!
//! The scoring rules live in the scoring module and are usable on their own through [`Game`];
//! the starting point of the interactive program is the game.rs file, which contains the session
//! loop.

#![expect(
    clippy::cargo_common_metadata,
    reason = "The package has not yet been pushed to a remote."
)]

mod game;
mod input;
mod scoresheet;
mod scoring;

pub use game::init;
pub use scoring::{Game, GameError};
