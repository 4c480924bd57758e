//! Worst-case partition analysis over guess scores
//!
//! Knuth's observation: a guess splits the remaining candidates into groups
//! by the score each candidate would answer with. Picking the guess whose
//! largest group is smallest bounds the worst case of the whole game.

use crate::core::{Code, Score};
use rayon::prelude::*;
use rustc_hash::FxHashMap;

/// Calculate the worst-case number of candidates remaining after a guess
///
/// For each score the guess could receive, counts the candidates that would
/// answer with it; the largest such group is the worst case.
#[must_use]
pub fn worst_case_remaining(guess: &Code, candidates: &[Code]) -> usize {
    if candidates.is_empty() {
        return 0;
    }

    let partitions = partition_by_score(guess, candidates);
    partitions.values().max().copied().unwrap_or(0)
}

/// Group candidates by the score they would answer the guess with
fn partition_by_score(guess: &Code, candidates: &[Code]) -> FxHashMap<Score, usize> {
    let mut counts = FxHashMap::default();

    for candidate in candidates {
        // The candidate plays the secret's role here
        if let Ok(score) = Score::calculate(candidate, guess) {
            *counts.entry(score).or_insert(0) += 1;
        }
    }

    counts
}

/// Select the guess minimizing the worst-case remaining candidates
///
/// Evaluates the full guess pool in parallel. Ties prefer guesses that are
/// themselves candidates (they can win outright), then the earliest pool
/// position, so selection is deterministic.
///
/// Returns the chosen guess and its worst-case count, or `None` if the pool
/// is empty.
#[must_use]
pub fn select_best_guess<'a>(
    guess_pool: &'a [Code],
    candidates: &[Code],
) -> Option<(&'a Code, usize)> {
    guess_pool
        .par_iter()
        .enumerate()
        .map(|(index, guess)| {
            let worst = worst_case_remaining(guess, candidates);
            let is_candidate = candidates.contains(guess);
            (guess, worst, is_candidate, index)
        })
        .min_by_key(|&(_, worst, is_candidate, index)| (worst, !is_candidate, index))
        .map(|(guess, worst, _, _)| (guess, worst))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Peg::{Blue, Green, Red, Yellow};

    fn code(pegs: &[crate::core::Peg]) -> Code {
        Code::new(pegs.to_vec())
    }

    #[test]
    fn worst_case_counts_largest_partition() {
        let guess = code(&[Red, Blue]);
        let candidates = vec![
            code(&[Red, Blue]),   // (2, 0)
            code(&[Blue, Red]),   // (0, 2)
            code(&[Red, Green]),  // (1, 0)
            code(&[Red, Yellow]), // (1, 0)
        ];

        assert_eq!(worst_case_remaining(&guess, &candidates), 2);
    }

    #[test]
    fn worst_case_of_uninformative_guess_is_everything() {
        // No candidate shares a color with the guess: one big (0, 0) group
        let guess = code(&[Green, Green]);
        let candidates = vec![code(&[Red, Blue]), code(&[Blue, Red]), code(&[Red, Red])];

        assert_eq!(worst_case_remaining(&guess, &candidates), 3);
    }

    #[test]
    fn worst_case_empty_candidates() {
        let guess = code(&[Red, Blue]);
        assert_eq!(worst_case_remaining(&guess, &[]), 0);
    }

    #[test]
    fn selects_lowest_worst_case() {
        let pool = vec![
            code(&[Green, Green]), // Lumps every candidate together
            code(&[Red, Blue]),    // Separates them
        ];
        let candidates = vec![code(&[Red, Blue]), code(&[Blue, Red]), code(&[Red, Red])];

        let (best, worst) = select_best_guess(&pool, &candidates).unwrap();

        assert_eq!(best, &code(&[Red, Blue]));
        assert!(worst < 3);
    }

    #[test]
    fn ties_prefer_candidate_guesses() {
        // Both pool codes split the lone candidate equally; the one that can
        // actually win must be chosen
        let pool = vec![code(&[Green, Green]), code(&[Red, Blue])];
        let candidates = vec![code(&[Red, Blue])];

        let (best, _) = select_best_guess(&pool, &candidates).unwrap();
        assert_eq!(best, &code(&[Red, Blue]));
    }

    #[test]
    fn ties_resolved_consistently() {
        let pool = vec![code(&[Green, Green]), code(&[Yellow, Yellow])];
        let candidates = vec![code(&[Red, Blue])];

        let first = select_best_guess(&pool, &candidates).unwrap();
        let second = select_best_guess(&pool, &candidates).unwrap();

        assert_eq!(first.0, second.0);
        assert_eq!(first.1, second.1);
    }

    #[test]
    fn returns_none_on_empty_guess_pool() {
        let candidates = vec![code(&[Red, Blue])];
        assert!(select_best_guess(&[], &candidates).is_none());
    }
}
