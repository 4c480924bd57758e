//! Automated play statistics
//!
//! Plays many rounds against random secrets using a code-breaking strategy
//! and aggregates the outcomes.

use crate::core::{Code, Score};
use crate::game::GameConfig;
use crate::solver::{Breaker, Strategy, StrategyType, enumerate_codes};
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Largest code space the simulator will enumerate
const MAX_CODE_SPACE: usize = 1_000_000;

/// Outcome of one simulated game
struct GameOutcome {
    won: bool,
    guesses: usize,
}

/// Result of a simulation run
pub struct SimulationResult {
    pub total_games: usize,
    pub wins: usize,
    pub losses: usize,
    /// Average guesses among won games only
    pub average_guesses: f64,
    pub min_guesses: usize,
    pub max_guesses: usize,
    /// Won games keyed by how many guesses they took
    pub distribution: HashMap<usize, usize>,
    pub rounds: usize,
    pub duration: Duration,
    pub games_per_second: f64,
}

/// Play `count` games with random secrets and the named strategy
///
/// Games run in parallel; each one generates a fresh secret from the
/// configured palette and lets the breaker guess until it wins or the round
/// budget runs out.
///
/// # Errors
///
/// Returns an error if the configuration is out of bounds or the code space
/// is too large to enumerate.
pub fn run_simulation(
    config: &GameConfig,
    strategy_name: &str,
    count: usize,
) -> Result<SimulationResult, String> {
    config.validate().map_err(|e| e.to_string())?;

    let space_size = config
        .colors
        .checked_pow(config.slots as u32)
        .filter(|&size| size <= MAX_CODE_SPACE);
    if space_size.is_none() {
        return Err(format!(
            "Code space of {} colors over {} slots is too large to enumerate",
            config.colors, config.slots
        ));
    }

    let palette = config.palette();
    let code_space = enumerate_codes(palette, config.slots);
    let strategy = StrategyType::from_name(strategy_name);
    let breaker = Breaker::new(strategy, &code_space, palette);

    let pb = ProgressBar::new(count as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
            .unwrap()
            .progress_chars("█▓▒░"),
    );

    let start = Instant::now();

    let outcomes: Vec<GameOutcome> = (0..count)
        .into_par_iter()
        .map(|_| {
            let outcome = play_one(&breaker, config);
            pb.inc(1);
            outcome
        })
        .collect();

    pb.finish_with_message("Complete!");

    let duration = start.elapsed();

    let wins = outcomes.iter().filter(|o| o.won).count();
    let mut distribution: HashMap<usize, usize> = HashMap::new();
    let mut total_winning_guesses = 0;
    let mut min_guesses = usize::MAX;
    let mut max_guesses = 0;

    for outcome in outcomes.iter().filter(|o| o.won) {
        *distribution.entry(outcome.guesses).or_insert(0) += 1;
        total_winning_guesses += outcome.guesses;
        min_guesses = min_guesses.min(outcome.guesses);
        max_guesses = max_guesses.max(outcome.guesses);
    }

    if wins == 0 {
        min_guesses = 0;
    }
    let average_guesses = if wins > 0 {
        total_winning_guesses as f64 / wins as f64
    } else {
        0.0
    };

    Ok(SimulationResult {
        total_games: count,
        wins,
        losses: count - wins,
        average_guesses,
        min_guesses,
        max_guesses,
        distribution,
        rounds: config.rounds,
        duration,
        games_per_second: count as f64 / duration.as_secs_f64(),
    })
}

/// Run one game to completion
fn play_one<S: Strategy>(breaker: &Breaker<'_, S>, config: &GameConfig) -> GameOutcome {
    let secret = config.palette().random_code(config.slots, &mut rand::rng());
    let mut history: Vec<(Code, Score)> = Vec::new();
    let mut guesses = 0;

    while guesses < config.rounds {
        let Some(guess) = breaker.next_guess(&history) else {
            break;
        };
        guesses += 1;

        let Ok(score) = Score::calculate(&secret, guess) else {
            break;
        };

        if score.solves(config.slots) {
            return GameOutcome { won: true, guesses };
        }

        history.push((guess.clone(), score));
    }

    GameOutcome {
        won: false,
        guesses,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_config() -> GameConfig {
        GameConfig::new(10, 2, 3)
    }

    #[test]
    fn consistent_play_wins_every_small_game() {
        // Nine candidate codes, ten guesses, and every wrong guess eliminates
        // at least itself: the breaker cannot lose
        let result = run_simulation(&small_config(), "first", 20).unwrap();

        assert_eq!(result.total_games, 20);
        assert_eq!(result.wins, 20);
        assert_eq!(result.losses, 0);
        assert!(result.average_guesses >= 1.0);
        assert!(result.max_guesses <= 10);
    }

    #[test]
    fn distribution_sums_to_wins() {
        let result = run_simulation(&small_config(), "minimax", 10).unwrap();

        let total: usize = result.distribution.values().sum();
        assert_eq!(total, result.wins);
    }

    #[test]
    fn metrics_stay_consistent() {
        let result = run_simulation(&small_config(), "random", 10).unwrap();

        assert_eq!(result.wins + result.losses, result.total_games);
        if result.wins > 0 {
            assert!(result.average_guesses >= result.min_guesses as f64);
            assert!(result.average_guesses <= result.max_guesses as f64);
        }
        for &guesses in result.distribution.keys() {
            assert!((1..=result.rounds).contains(&guesses));
        }
    }

    #[test]
    fn zero_games_simulate_cleanly() {
        let result = run_simulation(&small_config(), "first", 0).unwrap();

        assert_eq!(result.total_games, 0);
        assert_eq!(result.wins, 0);
        assert_eq!(result.min_guesses, 0);
        assert_eq!(result.average_guesses, 0.0);
    }

    #[test]
    fn rejects_invalid_configuration() {
        let config = GameConfig::new(0, 4, 6);
        assert!(run_simulation(&config, "first", 1).is_err());
    }

    #[test]
    fn rejects_oversized_code_space() {
        // 12^12 codes is far past the enumeration cap
        let config = GameConfig::new(1, 12, 12);
        assert!(run_simulation(&config, "first", 1).is_err());
    }
}
