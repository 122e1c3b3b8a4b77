//! This module contains all functions related to taking input from the user. They all use the
//! `dialoguer` crate to process the input, and they all check for input validation.
//!
//! Specifically, the two available functions so far take the pin count of a single roll, and ask
//! whether another game should be started after one finishes.

use anyhow::Result;
use console::{style, Term};
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Confirm, Input};

use crate::scoring::Game;

/// This function is in charge of taking the pin count of the next roll. The prompt is validated
/// inline so only whole numbers between zero and ten ever reach the game; anything else, including
/// fractional or negative text, is refused and asked again.
pub(crate) fn take_roll_input(term: &Term, game: &Game) -> Result<usize> {
    let roll_number = game.rolls().len() + 1;
    let input: usize = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(format!(
            "{}",
            style(format!("Roll {roll_number}: pins knocked down (0-10)")).bold()
        ))
        .validate_with(|input: &String| -> Result<(), &str> {
            if !input.is_empty() && input.as_bytes().iter().all(|c| c.is_ascii_digit()) {
                // unwrap is safe; at this point, the string is known to be solely made out of
                // digits
                let num: usize = input.parse().unwrap();

                if num <= 10 {
                    return Ok(());
                }

                Err("A roll can knock down at most 10 pins")
            } else {
                Err("The input should be a whole number between 0 and 10")
            }
        })
        .interact_text_on(term)?
        .parse()
        // unwrap is safe; the input was validated with dialoguer's validate_with() method
        .unwrap();

    Ok(input)
}

/// This function asks whether the user wants to bowl another game once the current one is
/// complete. It defaults to not playing again so a stray return key ends the session cleanly.
pub(crate) fn play_again(term: &Term) -> Result<bool> {
    let input = Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt(format!("{}", style("Bowl another game?").bold()))
        .default(false)
        .interact_on(term)?;

    Ok(input)
}
