//! One play-through against a fixed secret
//!
//! A Round owns the secret code, an append-only log of scored guesses, and
//! the remaining-guess counter. The round is won when a guess matches every
//! position and lost when the counter runs out first.

use super::GameConfig;
use crate::core::{Code, Palette, Score, ScoreError};

/// One logged guess with its score
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessRecord {
    pub guess: Code,
    pub score: Score,
}

/// Where the round stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundStatus {
    InProgress,
    Won,
    Lost,
}

/// One round of Mastermind: a secret, its guess log, and a guess budget
#[derive(Debug)]
pub struct Round {
    secret: Code,
    memory: Vec<GuessRecord>,
    remaining: usize,
    status: RoundStatus,
    palette: Palette,
}

impl Round {
    /// Start a round with a freshly randomized secret
    #[must_use]
    pub fn new(config: &GameConfig) -> Self {
        let palette = config.palette();
        let secret = palette.random_code(config.slots, &mut rand::rng());
        Self::with_secret(secret, config.rounds, palette)
    }

    /// Start a round with a known secret
    #[must_use]
    pub const fn with_secret(secret: Code, rounds: usize, palette: Palette) -> Self {
        Self {
            secret,
            memory: Vec::new(),
            remaining: rounds,
            status: RoundStatus::InProgress,
            palette,
        }
    }

    /// Score one guess and advance the round
    ///
    /// A winning guess ends the round immediately; it is not logged and does
    /// not consume a remaining guess. Any other guess is appended to the
    /// memory log and costs one guess; spending the last one loses the
    /// round. After the round has ended further guesses are scored but
    /// change nothing.
    ///
    /// # Errors
    /// Returns [`ScoreError::LengthMismatch`] for a wrong-length guess; the
    /// round state is left untouched and no guess is consumed.
    pub fn guess(&mut self, guess: &Code) -> Result<Score, ScoreError> {
        let score = Score::calculate(&self.secret, guess)?;

        if self.status != RoundStatus::InProgress {
            return Ok(score);
        }

        if score.solves(self.secret.len()) {
            self.status = RoundStatus::Won;
        } else {
            self.memory.push(GuessRecord {
                guess: guess.clone(),
                score,
            });
            self.remaining -= 1;
            if self.remaining == 0 {
                self.status = RoundStatus::Lost;
            }
        }

        Ok(score)
    }

    /// The secret code, intact for the end-of-round reveal
    #[must_use]
    pub fn secret(&self) -> &Code {
        &self.secret
    }

    /// Number of pegs in the secret
    #[must_use]
    pub fn slots(&self) -> usize {
        self.secret.len()
    }

    /// Guesses left before the round is lost
    #[must_use]
    pub const fn remaining(&self) -> usize {
        self.remaining
    }

    /// The log of scored (non-winning) guesses, oldest first
    #[must_use]
    pub fn memory(&self) -> &[GuessRecord] {
        &self.memory
    }

    /// Guesses already spent
    #[must_use]
    pub fn turns_taken(&self) -> usize {
        self.memory.len()
    }

    #[must_use]
    pub const fn status(&self) -> RoundStatus {
        self.status
    }

    #[must_use]
    pub const fn is_over(&self) -> bool {
        !matches!(self.status, RoundStatus::InProgress)
    }

    #[must_use]
    pub const fn palette(&self) -> Palette {
        self.palette
    }
}
