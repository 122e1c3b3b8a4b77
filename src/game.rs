//! The game module drives an interactive scorekeeping session on the terminal.
//!
//! It contains the `init()` function to initialize and run the session loop, as well as the
//! welcome message, some terminal configuration and the command-line argument definitions. The
//! actual bowling rules live in the scoring module; this module only feeds rolls into them and
//! displays the results.

use anyhow::Result;
use clap::Parser;
use console::{style, Term};

use crate::input::{play_again, take_roll_input};
use crate::scoresheet::{draw_scoresheet, export_json};
use crate::scoring::Game;

/// This struct holds information about the application when it comes to the command-line argument
/// parser of choice, which is clap. It uses the derive attribute and multiple other attributes to
/// set up the different options, as that was found to be the simplest way of accomplishing what
/// was set out to do.
#[derive(Parser)]
#[command(name = "tenpin", version, about)]
#[command(next_line_help = true)]
struct Cli {
    /// Emit a machine-readable JSON summary of the game once it completes.
    ///
    /// The summary carries the raw roll list, the ten per-frame scores, the total score and the
    /// completion flag, and is printed after the regular final-score line.
    #[arg(short, long)]
    #[arg(env = "TENPIN_JSON")]
    json: bool,
    /// Redraw the frame-by-frame scoresheet after every recorded roll.
    ///
    /// Without this option only the final score is shown at the end of the game. The scoresheet
    /// marks strikes and spares with the traditional X and / notation.
    #[arg(short, long)]
    #[arg(env = "TENPIN_SCORESHEET")]
    scoresheet: bool,
}

/// Initializes the session state and handles literally everything. This is a `main()` function of
/// sorts though it is still called from main.rs.
///
/// This function specifically creates a new interface to the standard output and then loops over
/// whole games: each game prompts for rolls until the tenth frame is finished, prints the final
/// score, and offers another round.
///
/// # Errors
///
/// The function may return any one of the following errors:
///
/// - io::Error
/// - dialoguer::Error
/// - serde_json::Error
/// - tenpin::GameError
pub fn init() -> Result<()> {
    let term = Term::stdout();
    let cli = Cli::parse();

    // show the init message
    init_message(&term)?;

    // session loop; one iteration per full game
    loop {
        let mut game = Game::new();

        // roll loop; completion is recomputed from the roll list after every throw
        while !game.is_complete() {
            let pins = take_roll_input(&term, &game)?;

            // the prompt only admits pin counts the game accepts, so a rejection here would be a
            // validator bug worth surfacing
            game.roll(pins)?;

            if cli.scoresheet {
                draw_scoresheet(&term, &game)?;
            }
        }

        term.write_line(&format!(
            "{}",
            style(format!("Final score: {}", game.score())).bold()
        ))?;

        if cli.json {
            term.write_line(&export_json(&game)?)?;
        }

        if !play_again(&term)? {
            term.clear_screen()?;
            break Ok(());
        }

        term.clear_screen()?;
    }
}

/// This function initializes the message to be used at the start of the program, as well as a few
/// other fallible operations. Among these, the screen is cleared and the title of the console
/// window is set to the name of the game.
fn init_message(term: &Term) -> Result<()> {
    const MSG: &str = "Welcome to the tenpin scorekeeper";
    let msg = style(MSG).bold();

    term.clear_screen()?;
    term.set_title("tenpin");

    term.write_line(&format!("{}", msg))?;
    Ok(())
}
