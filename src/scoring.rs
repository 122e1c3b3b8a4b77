//! The scoring module contains the core rules of ten-pin bowling, free of any terminal or input
//! concerns.
//!
//! It contains the [`Game`] type, which records rolls and computes total and per-frame scores
//! following the standard rules: strikes score ten plus the next two rolls, spares score ten plus
//! the next roll, open frames score their pinfall, and the tenth frame may hold up to three rolls.

/// The number of rolls a strike knocks down, and thus the pinfall at which a single roll or a pair
/// of rolls clears the deck.
const ALL_PINS: usize = 10;

/// The number of frames in a game. Frames below this count advance a cursor over the roll list;
/// the last frame consumes whatever rolls remain.
const FRAMES: usize = 10;

/// This enum holds the single way recording a roll can fail. The pin count is the only argument
/// the game ever takes, so it is the only thing that gets validated.
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum GameError {
    /// This variant is used when a roll reports more than ten pins knocked down. The offending
    /// value is carried along for the caller to display.
    #[error("invalid pin count: {0}; a roll must knock down between 0 and 10 pins")]
    InvalidPinCount(usize),
}

/// This struct holds the state of a single bowling game: the ordered list of rolls recorded so
/// far. Frames are never stored; every scoring operation walks the roll list with a cursor that
/// advances by one roll after a strike and by two rolls otherwise.
#[derive(Debug, Default, Clone)]
pub struct Game {
    /// This field contains every roll recorded so far, in the order it was bowled. Each entry is a
    /// pin count in the range zero to ten, enforced by [`Game::roll`].
    rolls: Vec<usize>,
}

impl Game {
    /// This function creates a new game with an empty roll history.
    #[must_use]
    pub const fn new() -> Self {
        Self { rolls: Vec::new() }
    }

    /// This function records a single roll.
    ///
    /// It only checks that the pin count is at most ten; it deliberately does not check that two
    /// rolls in one frame stay at or below ten pins together, nor that the game is still in
    /// progress. Callers that care about those cases should consult [`Game::is_complete`] before
    /// rolling.
    ///
    /// # Errors
    ///
    /// The function returns [`GameError::InvalidPinCount`] if `pins` is greater than ten, in which
    /// case the roll is not recorded.
    pub fn roll(&mut self, pins: usize) -> Result<(), GameError> {
        if pins > ALL_PINS {
            return Err(GameError::InvalidPinCount(pins));
        }

        self.rolls.push(pins);
        Ok(())
    }

    /// This function returns the total score of the game so far.
    ///
    /// It never fails; on an incomplete game, missing bonus rolls simply contribute nothing, so
    /// the returned number is a partial score with no final meaning. Callers that need a
    /// well-defined final score should check [`Game::is_complete`] first.
    #[must_use]
    pub fn score(&self) -> usize {
        self.frame_scores().iter().sum()
    }

    /// This function returns the score of each of the ten frames, in order.
    ///
    /// Each entry uses the same strike, spare and tenth-frame bonus rules as [`Game::score`], and
    /// the entries always sum to the total score. Frames the game has not reached yet score zero.
    #[must_use]
    pub fn frame_scores(&self) -> Vec<usize> {
        let mut scores = Vec::with_capacity(FRAMES);
        let mut cursor = 0;

        for _ in 0..FRAMES - 1 {
            if self.is_strike(cursor) {
                scores.push(ALL_PINS + self.strike_bonus(cursor));
                cursor += 1;
            } else if self.is_spare(cursor) {
                scores.push(ALL_PINS + self.spare_bonus(cursor));
                cursor += 2;
            } else {
                let pinfall =
                    self.roll_at(cursor).unwrap_or(0) + self.roll_at(cursor + 1).unwrap_or(0);
                scores.push(pinfall);
                cursor += 2;
            }
        }

        scores.push(self.tenth_frame_score(cursor));
        scores
    }

    /// This function reports whether all ten frames have been bowled.
    ///
    /// It walks the first nine frames with the usual cursor rule and reports false as soon as a
    /// frame is missing a roll. The tenth frame needs three rolls after a strike or a spare, and
    /// two otherwise. Completion is recomputed from the roll list every time; no flag is stored.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        let mut cursor = 0;

        for _ in 0..FRAMES - 1 {
            if cursor >= self.rolls.len() {
                return false;
            }

            if self.is_strike(cursor) {
                cursor += 1;
            } else {
                if cursor + 1 >= self.rolls.len() {
                    return false;
                }
                cursor += 2;
            }
        }

        let rolls_in_tenth = self.rolls.len() - cursor;
        if rolls_in_tenth < 2 {
            return false;
        }

        if self.is_strike(cursor) || self.is_spare(cursor) {
            rolls_in_tenth >= 3
        } else {
            rolls_in_tenth >= 2
        }
    }

    /// This function returns the rolls recorded so far, in the order they were bowled.
    #[must_use]
    pub fn rolls(&self) -> &[usize] {
        &self.rolls
    }

    /// This function returns the roll at the given index, or nothing if the game has not reached
    /// that roll yet. Every lookahead in the scoring rules goes through here, so a missing bonus
    /// roll always degrades to zero instead of panicking.
    fn roll_at(&self, index: usize) -> Option<usize> {
        self.rolls.get(index).copied()
    }

    /// This function checks whether the roll at the given index is a strike.
    fn is_strike(&self, index: usize) -> bool {
        self.roll_at(index) == Some(ALL_PINS)
    }

    /// This function checks whether the two rolls starting at the given index form a spare. A
    /// strike also sums to ten with a following gutter ball, so callers must check for a strike
    /// first.
    fn is_spare(&self, index: usize) -> bool {
        match (self.roll_at(index), self.roll_at(index + 1)) {
            (Some(first), Some(second)) => first + second == ALL_PINS,
            _ => false,
        }
    }

    /// This function returns the bonus for a strike at the given index: the next two rolls, with
    /// any roll not yet bowled contributing zero.
    fn strike_bonus(&self, index: usize) -> usize {
        self.roll_at(index + 1).unwrap_or(0) + self.roll_at(index + 2).unwrap_or(0)
    }

    /// This function returns the bonus for a spare starting at the given index: the single roll
    /// after the pair, or zero if it has not been bowled yet.
    fn spare_bonus(&self, index: usize) -> usize {
        self.roll_at(index + 2).unwrap_or(0)
    }

    /// This function scores the tenth frame, whose rolls start at the given cursor position. A
    /// strike there earns up to two bonus rolls and a spare one; an open or unfinished tenth frame
    /// simply scores whatever pinfall exists.
    fn tenth_frame_score(&self, cursor: usize) -> usize {
        if self.is_strike(cursor) {
            ALL_PINS + self.strike_bonus(cursor)
        } else if self.is_spare(cursor) {
            ALL_PINS + self.spare_bonus(cursor)
        } else {
            self.roll_at(cursor).unwrap_or(0) + self.roll_at(cursor + 1).unwrap_or(0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Game, GameError};

    /// This function records the same pin count a number of times in a row.
    fn roll_many(game: &mut Game, times: usize, pins: usize) {
        for _ in 0..times {
            game.roll(pins).expect("pin count within range");
        }
    }

    #[test]
    fn gutter_game_scores_zero() {
        let mut game = Game::new();
        roll_many(&mut game, 20, 0);

        assert_eq!(game.score(), 0);
    }

    #[test]
    fn all_ones_scores_twenty() {
        let mut game = Game::new();
        roll_many(&mut game, 20, 1);

        assert_eq!(game.score(), 20);
    }

    #[test]
    fn spare_earns_next_roll_as_bonus() {
        let mut game = Game::new();
        game.roll(6).expect("pin count within range");
        game.roll(4).expect("pin count within range");
        game.roll(3).expect("pin count within range");
        roll_many(&mut game, 17, 0);

        // frame one is 10 + 3, frame two is 3, the rest are gutters
        assert_eq!(game.score(), 16);
    }

    #[test]
    fn strike_earns_next_two_rolls_as_bonus() {
        let mut game = Game::new();
        game.roll(10).expect("pin count within range");
        game.roll(3).expect("pin count within range");
        game.roll(4).expect("pin count within range");
        roll_many(&mut game, 16, 0);

        // frame one is 10 + 3 + 4, frame two is 7, the rest are gutters
        assert_eq!(game.score(), 24);
    }

    #[test]
    fn perfect_game_scores_three_hundred() {
        let mut game = Game::new();
        roll_many(&mut game, 12, 10);

        assert_eq!(game.score(), 300);
    }

    #[test]
    fn perfect_game_completes_at_exactly_twelve_rolls() {
        let mut game = Game::new();
        roll_many(&mut game, 11, 10);
        assert!(!game.is_complete(), "eleven strikes leave a bonus roll pending");

        game.roll(10).expect("pin count within range");
        assert!(game.is_complete(), "twelve strikes finish the game");
    }

    #[test]
    fn all_spares_scores_one_hundred_fifty() {
        let mut game = Game::new();
        roll_many(&mut game, 21, 5);

        assert_eq!(game.score(), 150);
    }

    #[test]
    fn excessive_pin_count_is_rejected_and_not_recorded() {
        let mut game = Game::new();

        assert_eq!(game.roll(11), Err(GameError::InvalidPinCount(11)));
        assert!(game.rolls().is_empty(), "a rejected roll must not be stored");
    }

    #[test]
    fn empty_game_is_incomplete() {
        let game = Game::new();

        assert!(!game.is_complete());
        assert_eq!(game.score(), 0);
    }

    #[test]
    fn open_game_completes_at_twenty_rolls() {
        let mut game = Game::new();
        roll_many(&mut game, 19, 2);
        assert!(!game.is_complete(), "nineteen open-frame rolls are one short");

        game.roll(2).expect("pin count within range");
        assert!(game.is_complete(), "twenty open-frame rolls finish the game");
    }

    #[test]
    fn tenth_frame_spare_needs_its_bonus_roll() {
        let mut game = Game::new();
        roll_many(&mut game, 18, 2);
        game.roll(5).expect("pin count within range");
        game.roll(5).expect("pin count within range");
        assert!(!game.is_complete(), "a tenth-frame spare awaits its bonus roll");

        game.roll(7).expect("pin count within range");
        assert!(game.is_complete());
        assert_eq!(game.score(), 36 + 17);
    }

    #[test]
    fn frame_scores_has_ten_entries_summing_to_score() {
        let mut game = Game::new();
        let pins = [10, 9, 1, 5, 5, 7, 2, 10, 10, 10, 9, 0, 8, 2, 9, 1, 10];
        for roll in pins {
            game.roll(roll).expect("pin count within range");
        }
        assert!(game.is_complete(), "the fixture is a full game");

        let frames = game.frame_scores();
        assert_eq!(frames.len(), 10, "one entry per frame");
        assert_eq!(frames.iter().sum::<usize>(), game.score());
    }

    #[test]
    fn frame_scores_of_known_game() {
        let mut game = Game::new();
        let pins = [10, 3, 4];
        for roll in pins {
            game.roll(roll).expect("pin count within range");
        }
        roll_many(&mut game, 16, 0);

        let frames = game.frame_scores();
        assert_eq!(frames.first().copied(), Some(17));
        assert_eq!(frames.get(1).copied(), Some(7));
        assert_eq!(frames.iter().skip(2).sum::<usize>(), 0);
    }

    #[test]
    fn incomplete_game_degrades_to_partial_score() {
        let mut game = Game::new();
        game.roll(10).expect("pin count within range");

        // no bonus rolls exist yet, so the strike counts as a bare ten
        assert_eq!(game.score(), 10);
        assert!(!game.is_complete());
    }

    #[test]
    fn extra_rolls_after_completion_are_still_accepted() {
        let mut game = Game::new();
        roll_many(&mut game, 20, 1);
        assert!(game.is_complete());

        // the core does not reject late rolls; that is left to the caller
        game.roll(3).expect("pin count within range");
        assert_eq!(game.rolls().len(), 21);
    }
}
