//! This module renders the state of a game for people and for machines. The human side is a
//! frame-by-frame scoresheet drawn on the terminal with the traditional strike and spare marks;
//! the machine side is a JSON summary of a finished game.

use anyhow::Result;
use console::{style, Term};
use serde::{Deserialize, Serialize};

use crate::scoring::Game;

/// This struct holds the machine-readable summary of a game, emitted as JSON when the
/// corresponding command-line option is set. It carries everything a consumer needs to re-derive
/// the scoresheet without knowing the scoring rules.
#[derive(Serialize, Deserialize, Debug, PartialEq, Eq)]
pub(crate) struct GameSummary {
    /// This field contains whether all ten frames had been bowled when the summary was taken.
    complete: bool,
    /// This field contains the ten per-frame scores, in frame order.
    frame_scores: Vec<usize>,
    /// This field contains every recorded roll, in the order it was bowled.
    rolls: Vec<usize>,
    /// This field contains the total score, which equals the sum of the per-frame scores.
    total: usize,
}

impl GameSummary {
    /// This function takes a snapshot of the given game.
    fn new(game: &Game) -> Self {
        Self {
            complete: game.is_complete(),
            frame_scores: game.frame_scores(),
            rolls: game.rolls().to_vec(),
            total: game.score(),
        }
    }
}

/// This function draws the scoresheet for every frame bowled so far: the frame number, its roll
/// marks, its score under the bonus rules, and the running total up to that frame.
pub(crate) fn draw_scoresheet(term: &Term, game: &Game) -> Result<()> {
    let scores = game.frame_scores();
    let marks = frame_marks(game);
    let mut running = 0;

    for (index, mark) in marks.iter().enumerate() {
        let score = scores.get(index).copied().unwrap_or(0);
        running += score;

        let header = style(format!("Frame {:>2}", index + 1)).bold();
        term.write_line(&format!("{header}  {mark:<7} {score:>3}  total {running}"))?;
    }

    Ok(())
}

/// This function serializes the summary of the given game as pretty-printed JSON.
pub(crate) fn export_json(game: &Game) -> Result<String> {
    let summary = GameSummary::new(game);

    Ok(serde_json::to_string_pretty(&summary)?)
}

/// This function renders the roll marks of every frame bowled so far, one entry per frame. A
/// strike shows as X, the second roll of a spare as /, and anything else as its pin count. The
/// tenth frame may show up to three marks.
fn frame_marks(game: &Game) -> Vec<String> {
    let rolls = game.rolls();
    let mut marks = Vec::new();
    let mut cursor = 0;

    // frames one through nine
    for _ in 0..9 {
        let Some(first) = rolls.get(cursor).copied() else {
            return marks;
        };

        if first == 10 {
            marks.push("X".to_owned());
            cursor += 1;
        } else if let Some(second) = rolls.get(cursor + 1).copied() {
            if first + second == 10 {
                marks.push(format!("{first} /"));
            } else {
                marks.push(format!("{first} {second}"));
            }
            cursor += 2;
        } else {
            // the frame is mid-throw; show what exists so far
            marks.push(first.to_string());
            return marks;
        }
    }

    // the tenth frame takes whatever rolls remain, up to three
    let mut tenth = Vec::new();
    let mut previous = None;
    for pins in rolls.iter().skip(cursor).take(3).copied() {
        if pins == 10 {
            tenth.push("X".to_owned());
            previous = None;
        } else if previous.is_some_and(|last: usize| last + pins == 10) {
            tenth.push("/".to_owned());
            previous = None;
        } else {
            tenth.push(pins.to_string());
            previous = Some(pins);
        }
    }

    if !tenth.is_empty() {
        marks.push(tenth.join(" "));
    }

    marks
}
