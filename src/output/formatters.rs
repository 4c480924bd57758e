//! Formatting utilities for terminal output

use crate::core::{Code, Peg, Score};
use colored::{Color, ColoredString, Colorize};

/// Terminal color for a peg
#[must_use]
pub const fn peg_color(peg: Peg) -> Color {
    match peg {
        Peg::Red => Color::Red,
        Peg::Blue => Color::Blue,
        Peg::Yellow => Color::Yellow,
        Peg::Green => Color::Green,
        Peg::Orange => Color::BrightRed,
        Peg::Violet => Color::Magenta,
        Peg::White => Color::White,
        Peg::Black => Color::BrightBlack,
        Peg::Grey => Color::BrightWhite,
        Peg::Indigo => Color::BrightBlue,
        Peg::Pink => Color::BrightMagenta,
        Peg::Brown => Color::BrightYellow,
    }
}

/// Format a peg as its colored abbreviation letter
#[must_use]
pub fn peg_letter(peg: Peg) -> ColoredString {
    peg.letter().to_string().color(peg_color(peg)).bold()
}

/// Format a code as colored letters separated by spaces
#[must_use]
pub fn code_line(code: &Code) -> String {
    let letters: Vec<String> = code
        .pegs()
        .iter()
        .map(|&peg| peg_letter(peg).to_string())
        .collect();
    letters.join(" ")
}

/// Format a code with full color names, for the end-of-round reveal
#[must_use]
pub fn code_names(code: &Code) -> String {
    let names: Vec<String> = code.pegs().iter().map(|&peg| peg.to_string()).collect();
    names.join(", ")
}

/// Format a score as classic feedback pips
///
/// One filled pip per exact match, one hollow pip per misplaced match,
/// dots padding out the remaining slots.
#[must_use]
pub fn score_pips(score: Score, slots: usize) -> String {
    let mut pips = String::new();
    pips.push_str(&"●".repeat(score.exact()));
    pips.push_str(&"○".repeat(score.misplaced()));
    pips.push_str(&"·".repeat(slots.saturating_sub(score.exact() + score.misplaced())));
    pips
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn score_pips_orders_exact_before_misplaced() {
        let pips = score_pips(Score::new(2, 1), 4);
        assert_eq!(pips, "●●○·");
    }

    #[test]
    fn score_pips_all_exact() {
        assert_eq!(score_pips(Score::new(4, 0), 4), "●●●●");
    }

    #[test]
    fn score_pips_empty_score() {
        assert_eq!(score_pips(Score::new(0, 0), 4), "····");
    }

    #[test]
    fn code_names_joins_full_names() {
        let code = Code::new(vec![Peg::Red, Peg::Black]);
        assert_eq!(code_names(&code), "Red (R), Black (K)");
    }

    #[test]
    fn every_peg_has_a_distinct_letter_rendering() {
        // Colored output still carries the letter itself
        for peg in Peg::ALL {
            let rendered = peg_letter(peg).to_string();
            assert!(rendered.contains(peg.letter()));
        }
    }

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }
}
