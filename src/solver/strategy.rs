//! Guess selection strategies for the automated code breaker
//!
//! Defines the Strategy trait and concrete implementations.

use crate::core::Code;

/// A strategy for selecting the next guess from a pool of codes
pub trait Strategy {
    /// Select the next guess from the guess pool given the current candidates
    ///
    /// `candidates` are the codes still consistent with every score seen so
    /// far. Returns `None` if no usable guess exists.
    fn select_guess<'a>(&self, guess_pool: &'a [Code], candidates: &[Code]) -> Option<&'a Code>;
}

/// Enum wrapper for all strategy types
///
/// Allows runtime selection of strategy while maintaining static dispatch.
pub enum StrategyType {
    /// Knuth-style worst-case minimization (default, strongest)
    Minimax(MinimaxStrategy),
    /// First code still consistent with the history
    FirstConsistent(FirstConsistentStrategy),
    /// Random pick among consistent codes
    Random(RandomStrategy),
}

impl Strategy for StrategyType {
    fn select_guess<'a>(&self, guess_pool: &'a [Code], candidates: &[Code]) -> Option<&'a Code> {
        match self {
            Self::Minimax(s) => s.select_guess(guess_pool, candidates),
            Self::FirstConsistent(s) => s.select_guess(guess_pool, candidates),
            Self::Random(s) => s.select_guess(guess_pool, candidates),
        }
    }
}

impl StrategyType {
    /// Create strategy from name string
    ///
    /// Supported names: "minimax", "first", "consistent", "random".
    /// Defaults to minimax if name is unrecognized.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "first" | "consistent" => Self::FirstConsistent(FirstConsistentStrategy),
            "random" => Self::Random(RandomStrategy),
            _ => Self::Minimax(MinimaxStrategy),
        }
    }
}

/// Knuth-style minimax strategy
///
/// Selects the guess whose worst-case score partition leaves the fewest
/// candidates.
pub struct MinimaxStrategy;

impl Strategy for MinimaxStrategy {
    fn select_guess<'a>(&self, guess_pool: &'a [Code], candidates: &[Code]) -> Option<&'a Code> {
        super::minimax::select_best_guess(guess_pool, candidates).map(|(best, _)| best)
    }
}

/// Plays the first code still consistent with every score seen so far
///
/// The classic "simple strategy": guaranteed to win eventually because each
/// wrong guess eliminates at least itself.
pub struct FirstConsistentStrategy;

impl Strategy for FirstConsistentStrategy {
    fn select_guess<'a>(&self, guess_pool: &'a [Code], candidates: &[Code]) -> Option<&'a Code> {
        candidates
            .first()
            .and_then(|c| guess_pool.iter().find(|g| *g == c))
    }
}

/// Random strategy
///
/// Randomly selects from remaining candidates. A baseline to compare the
/// others against.
pub struct RandomStrategy;

impl Strategy for RandomStrategy {
    fn select_guess<'a>(&self, guess_pool: &'a [Code], candidates: &[Code]) -> Option<&'a Code> {
        use rand::prelude::IndexedRandom;

        candidates
            .choose(&mut rand::rng())
            .and_then(|c| guess_pool.iter().find(|g| *g == c))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Peg::{Blue, Green, Red};

    fn setup_test_data() -> (Vec<Code>, Vec<Code>) {
        let pool = vec![
            Code::new(vec![Red, Red]),
            Code::new(vec![Red, Blue]),
            Code::new(vec![Blue, Red]),
            Code::new(vec![Green, Green]),
        ];
        let candidates = vec![Code::new(vec![Red, Blue]), Code::new(vec![Blue, Red])];
        (pool, candidates)
    }

    #[test]
    fn first_consistent_takes_leading_candidate() {
        let (pool, candidates) = setup_test_data();

        let strategy = FirstConsistentStrategy;
        let guess = strategy.select_guess(&pool, &candidates).unwrap();

        assert_eq!(guess, &Code::new(vec![Red, Blue]));
    }

    #[test]
    fn random_selects_a_candidate() {
        let (pool, candidates) = setup_test_data();

        let strategy = RandomStrategy;
        let guess = strategy.select_guess(&pool, &candidates).unwrap();

        assert!(candidates.contains(guess));
    }

    #[test]
    fn minimax_selects_from_pool() {
        let (pool, candidates) = setup_test_data();

        let strategy = MinimaxStrategy;
        let guess = strategy.select_guess(&pool, &candidates).unwrap();

        assert!(pool.contains(guess));
    }

    #[test]
    fn strategies_return_none_without_candidates() {
        let (pool, _) = setup_test_data();

        assert!(FirstConsistentStrategy.select_guess(&pool, &[]).is_none());
        assert!(RandomStrategy.select_guess(&pool, &[]).is_none());
    }

    #[test]
    fn from_name_maps_known_names() {
        assert!(matches!(
            StrategyType::from_name("random"),
            StrategyType::Random(_)
        ));
        assert!(matches!(
            StrategyType::from_name("first"),
            StrategyType::FirstConsistent(_)
        ));
        assert!(matches!(
            StrategyType::from_name("minimax"),
            StrategyType::Minimax(_)
        ));
        assert!(matches!(
            StrategyType::from_name("anything-else"),
            StrategyType::Minimax(_)
        ));
    }
}
