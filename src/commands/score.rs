//! One-shot scoring command
//!
//! Scores a single guess against a given secret and returns the result for
//! display.

use crate::core::{Code, Palette, Score};

/// Result of scoring one guess against one secret
pub struct ScoreReport {
    pub secret: Code,
    pub guess: Code,
    pub score: Score,
    pub solved: bool,
}

/// Score a guess line against a secret line
///
/// Both lines use the letter abbreviations; the secret fixes the slot count
/// and the guess must match it.
///
/// # Errors
///
/// Returns an error if:
/// - Either line names a color outside the active palette
/// - The secret is empty
/// - The guess length differs from the secret length
pub fn score_codes(secret: &str, guess: &str, palette: Palette) -> Result<ScoreReport, String> {
    let secret = Code::parse(secret, palette).map_err(|e| format!("Invalid secret: {e}"))?;
    if secret.is_empty() {
        return Err("Secret must contain at least one peg".to_string());
    }

    let guess = Code::parse(guess, palette).map_err(|e| format!("Invalid guess: {e}"))?;

    let score = Score::calculate(&secret, &guess).map_err(|e| e.to_string())?;
    let solved = score.solves(secret.len());

    Ok(ScoreReport {
        secret,
        guess,
        score,
        solved,
    })
}
