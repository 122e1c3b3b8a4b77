//! # tenpin
//!
//! This crate is an interactive scorekeeper for ten-pin bowling. You enter the pin count of each
//! roll as you bowl it, and the program keeps the frames straight for you: strikes and spares earn
//! their bonus rolls, the tenth frame takes its extra throws, and the final score appears the
//! moment the game is complete.
//!
//! The scoring rules themselves are exposed as a small library type, so the binary is little more
//! than a prompt loop around it. A scoresheet view and a JSON export are available behind
//! command-line options.

#![expect(
    unused_crate_dependencies,
    reason = "The dependencies are used in the library crate."
)]

use anyhow::Result;
use tenpin::init;

fn main() -> Result<()> {
    init()
}
