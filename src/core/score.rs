//! Guess scoring with the classic duplicate-handling rule
//!
//! A score reports how many guess pegs match the secret exactly (right color,
//! right position) and how many more match in color only. Each secret peg can
//! satisfy at most one guess peg across both counts, so duplicated colors in
//! the guess never earn more credit than the secret actually holds.

use super::Code;
use std::fmt;

/// Feedback for one guess: exact and misplaced color matches
///
/// For a code of length `L`, `exact + misplaced <= L` always holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Score {
    exact: usize,
    misplaced: usize,
}

/// Error type for malformed scoring input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreError {
    /// Secret and guess differ in length
    LengthMismatch { secret: usize, guess: usize },
}

impl fmt::Display for ScoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LengthMismatch { secret, guess } => {
                write!(
                    f,
                    "Guess has {guess} pegs but the secret has {secret}"
                )
            }
        }
    }
}

impl std::error::Error for ScoreError {}

impl Score {
    /// Build a score from raw counts
    #[must_use]
    pub const fn new(exact: usize, misplaced: usize) -> Self {
        Self { exact, misplaced }
    }

    /// Pegs matching in both color and position
    #[must_use]
    pub const fn exact(self) -> usize {
        self.exact
    }

    /// Pegs matching in color at a different, still-unclaimed position
    #[must_use]
    pub const fn misplaced(self) -> usize {
        self.misplaced
    }

    /// Whether this score wins a round with `slots` code positions
    #[must_use]
    pub const fn solves(self, slots: usize) -> bool {
        self.exact == slots
    }

    /// Score `guess` against `secret`
    ///
    /// The secret is never mutated; consumption bookkeeping runs on a copy of
    /// its color counts so the secret stays intact for the end-of-round
    /// reveal.
    ///
    /// # Algorithm
    /// 1. First pass: count exact position matches and remove each matched
    ///    peg from the pool of available secret colors.
    /// 2. Second pass: for every non-exact guess peg whose color survives in
    ///    the pool, count a misplaced match and remove one peg of that color.
    ///
    /// The one-to-one consumption is what bounds duplicate credit: a secret
    /// with two Reds can answer at most two Red guess pegs, however many the
    /// guess contains.
    ///
    /// # Errors
    /// Returns [`ScoreError::LengthMismatch`] when the lengths differ.
    /// Checking peg validity is the parsing layer's job, not the engine's.
    ///
    /// # Examples
    /// ```
    /// use mastermind::core::{Code, Peg, Score};
    ///
    /// let secret = Code::new(vec![Peg::Red, Peg::Blue, Peg::Green, Peg::Yellow]);
    /// let guess = Code::new(vec![Peg::Red, Peg::Green, Peg::Blue, Peg::Pink]);
    ///
    /// let score = Score::calculate(&secret, &guess).unwrap();
    /// assert_eq!((score.exact(), score.misplaced()), (1, 2));
    /// ```
    pub fn calculate(secret: &Code, guess: &Code) -> Result<Self, ScoreError> {
        if secret.len() != guess.len() {
            return Err(ScoreError::LengthMismatch {
                secret: secret.len(),
                guess: guess.len(),
            });
        }

        let mut available = secret.color_counts();
        let mut exact = 0;

        // First pass: exact matches consume their secret peg
        for (s, g) in secret.pegs().iter().zip(guess.pegs()) {
            if s == g {
                exact += 1;
                if let Some(count) = available.get_mut(g) {
                    *count -= 1;
                }
            }
        }

        // Second pass: color-only matches against the surviving pool
        let mut misplaced = 0;
        for (s, g) in secret.pegs().iter().zip(guess.pegs()) {
            if s != g
                && let Some(count) = available.get_mut(g)
                && *count > 0
            {
                misplaced += 1;
                *count -= 1;
            }
        }

        Ok(Self { exact, misplaced })
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} exact, {} misplaced", self.exact, self.misplaced)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Peg::{self, Black, Blue, Green, Pink, Red, Yellow};

    fn code(pegs: &[Peg]) -> Code {
        Code::new(pegs.to_vec())
    }

    fn score(secret: &[Peg], guess: &[Peg]) -> Score {
        Score::calculate(&code(secret), &code(guess)).unwrap()
    }

    #[test]
    fn perfect_guess_scores_all_exact() {
        let s = score(&[Red, Blue, Green, Yellow], &[Red, Blue, Green, Yellow]);
        assert_eq!(s, Score::new(4, 0));
        assert!(s.solves(4));
    }

    #[test]
    fn disjoint_colors_score_nothing() {
        let s = score(&[Red, Red, Blue, Blue], &[Green, Yellow, Green, Yellow]);
        assert_eq!(s, Score::new(0, 0));
        assert!(!s.solves(4));
    }

    #[test]
    fn duplicate_guess_colors_bounded_by_secret() {
        // Only two Reds exist in the secret; both are exact matches, so the
        // two extra guessed Reds earn nothing.
        let s = score(&[Red, Red, Blue, Blue], &[Red, Red, Red, Red]);
        assert_eq!(s, Score::new(2, 0));
    }

    #[test]
    fn duplicate_guess_colors_bounded_without_exacts() {
        // Three guessed Reds against two in the secret, none aligned: the
        // third Red finds no unconsumed secret peg and earns nothing
        let s = score(
            &[Red, Red, Blue, Blue, Green],
            &[Green, Green, Red, Red, Red],
        );
        assert_eq!(s, Score::new(0, 3));

        let s = score(&[Blue, Red, Red, Blue], &[Red, Blue, Blue, Red]);
        assert_eq!(s, Score::new(0, 4));

        let s = score(&[Red, Red, Blue, Green], &[Green, Blue, Red, Red]);
        assert_eq!(s, Score::new(0, 4));
    }

    #[test]
    fn full_reordering_scores_all_misplaced() {
        let s = score(&[Red, Blue, Green, Yellow], &[Blue, Red, Yellow, Green]);
        assert_eq!(s, Score::new(0, 4));
    }

    #[test]
    fn partial_match_mixes_exact_and_misplaced() {
        // Red exact; Blue and Green swapped; Pink absent from the secret
        let s = score(&[Red, Blue, Green, Yellow], &[Red, Green, Blue, Pink]);
        assert_eq!(s, Score::new(1, 2));
    }

    #[test]
    fn exact_match_consumes_peg_before_misplaced_pass() {
        // The guess's second Blue must not claim the secret peg already
        // consumed by the exact match.
        let s = score(&[Red, Blue], &[Blue, Blue]);
        assert_eq!(s, Score::new(1, 0));
    }

    #[test]
    fn counts_never_exceed_code_length() {
        let cases: &[(&[Peg], &[Peg])] = &[
            (&[Red, Red, Red, Red], &[Red, Red, Red, Red]),
            (&[Red, Blue, Red, Blue], &[Blue, Red, Blue, Red]),
            (&[Red, Red, Blue, Green], &[Red, Blue, Blue, Blue]),
            (&[Black, Pink, Black, Pink], &[Pink, Pink, Black, Black]),
        ];

        for (secret, guess) in cases {
            let s = score(secret, guess);
            assert!(s.exact() + s.misplaced() <= secret.len());
            assert!(s.misplaced() <= secret.len() - s.exact());
        }
    }

    #[test]
    fn scoring_is_idempotent() {
        let secret = code(&[Red, Red, Blue, Green]);
        let guess = code(&[Red, Blue, Blue, Blue]);

        let first = Score::calculate(&secret, &guess).unwrap();
        let second = Score::calculate(&secret, &guess).unwrap();
        assert_eq!(first, second);

        // The secret survives scoring untouched
        assert_eq!(secret, code(&[Red, Red, Blue, Green]));
    }

    #[test]
    fn equal_color_multisets_score_symmetrically() {
        // Rearrangements of the same pegs must agree in both directions
        let pairs: &[(&[Peg], &[Peg])] = &[
            (&[Red, Blue, Green, Yellow], &[Blue, Red, Yellow, Green]),
            (&[Red, Red, Blue, Blue], &[Blue, Red, Blue, Red]),
            (&[Black, Black, Black, Pink], &[Pink, Black, Black, Black]),
        ];

        for (a, b) in pairs {
            assert_eq!(score(a, b), score(b, a));
        }
    }

    #[test]
    fn differing_multisets_still_agree_on_totals() {
        // exact positions coincide under argument swap, and the misplaced
        // count is the sum over colors of min(remaining in secret, remaining
        // in guess), which is symmetric too
        let pairs: &[(&[Peg], &[Peg])] = &[
            (&[Red, Red, Blue, Blue], &[Red, Red, Red, Red]),
            (&[Red, Red, Blue], &[Blue, Blue, Red]),
            (&[Red, Blue, Green, Yellow], &[Red, Green, Blue, Pink]),
        ];

        for (a, b) in pairs {
            assert_eq!(score(a, b), score(b, a));
        }
    }

    #[test]
    fn length_mismatch_fails_loudly() {
        let secret = code(&[Red, Blue, Green]);
        let guess = code(&[Red, Blue]);

        assert_eq!(
            Score::calculate(&secret, &guess),
            Err(ScoreError::LengthMismatch {
                secret: 3,
                guess: 2
            })
        );
    }

    #[test]
    fn empty_codes_score_empty() {
        let s = Score::calculate(&code(&[]), &code(&[])).unwrap();
        assert_eq!(s, Score::new(0, 0));
        assert!(s.solves(0));
    }

    #[test]
    fn display_reads_naturally() {
        assert_eq!(format!("{}", Score::new(2, 1)), "2 exact, 1 misplaced");
    }
}
