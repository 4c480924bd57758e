//! Main code-breaker interface

use super::strategy::Strategy;
use crate::core::{Code, Palette, Peg, Score};

/// Enumerate every code of `slots` pegs over the palette
///
/// The code space plays the role a dictionary does for word games: it is
/// both the guess pool and the candidate set. Its size is
/// `colors.pow(slots)`, so callers should bound slots and colors before
/// enumerating.
#[must_use]
pub fn enumerate_codes(palette: Palette, slots: usize) -> Vec<Code> {
    let colors = palette.size();
    let total = colors.pow(slots as u32);
    let mut codes = Vec::with_capacity(total);

    // Count in base `colors`, one digit per slot
    for mut n in 0..total {
        let mut pegs = Vec::with_capacity(slots);
        for _ in 0..slots {
            pegs.push(Peg::ALL[n % colors]);
            n /= colors;
        }
        codes.push(Code::new(pegs));
    }

    codes
}

/// Automated code breaker
///
/// Coordinates candidate filtering and guess selection using a given
/// strategy.
pub struct Breaker<'a, S: Strategy> {
    strategy: S,
    code_space: &'a [Code],
    palette: Palette,
}

impl<'a, S: Strategy> Breaker<'a, S> {
    /// Create a breaker over an enumerated code space
    ///
    /// # Parameters
    /// - `strategy`: the guess selection strategy to use
    /// - `code_space`: every legal code, from [`enumerate_codes`]
    /// - `palette`: the palette the space was enumerated over
    pub const fn new(strategy: S, code_space: &'a [Code], palette: Palette) -> Self {
        Self {
            strategy,
            code_space,
            palette,
        }
    }

    /// The opening guess for a fresh round
    ///
    /// Knuth's analysis favors an opener of duplicated color pairs (AABB for
    /// the classic four-slot game); generalized here to pairs over however
    /// many slots and colors are active.
    pub fn first_guess(&self) -> Option<&'a Code> {
        let slots = self.code_space.first()?.len();
        let opener: Code = (0..slots)
            .map(|i| Peg::ALL[(i / 2) % self.palette.size()])
            .collect();

        self.code_space.iter().find(|c| **c == opener)
    }

    /// The next guess given previous guesses and their scores
    ///
    /// # Parameters
    /// - `history`: slice of (guess, score) pairs from previous turns
    ///
    /// Returns `None` if no code is consistent with the history, which means
    /// some reported score was wrong.
    pub fn next_guess(&self, history: &[(Code, Score)]) -> Option<&'a Code> {
        if history.is_empty() {
            return self.first_guess();
        }

        let candidates = self.filter_candidates(history);

        if candidates.is_empty() {
            return None;
        }

        // A lone survivor must be the secret
        if candidates.len() == 1 {
            return Some(candidates[0]);
        }

        let candidate_codes: Vec<Code> = candidates.into_iter().cloned().collect();

        self.strategy.select_guess(self.code_space, &candidate_codes)
    }

    /// Filter the code space to codes consistent with the guess history
    ///
    /// A code survives if, were it the secret, it would have answered every
    /// past guess with the observed score.
    fn filter_candidates(&self, history: &[(Code, Score)]) -> Vec<&'a Code> {
        self.code_space
            .iter()
            .filter(|&candidate| {
                history.iter().all(|(guess, observed)| {
                    Score::calculate(candidate, guess).is_ok_and(|score| score == *observed)
                })
            })
            .collect()
    }

    /// Count how many candidates remain given the history
    pub fn count_candidates(&self, history: &[(Code, Score)]) -> usize {
        self.filter_candidates(history).len()
    }

    /// Get the current candidates (public accessor)
    pub fn get_candidates(&self, history: &[(Code, Score)]) -> Vec<&'a Code> {
        self.filter_candidates(history)
    }
}
