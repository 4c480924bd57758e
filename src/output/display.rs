//! Display functions for command results

use super::formatters::{code_line, create_progress_bar, peg_letter, score_pips};
use crate::commands::{ScoreReport, SimulationResult};
use crate::core::Palette;
use colored::Colorize;

/// Print the active palette, one color per line
pub fn print_palette(palette: Palette) {
    for &peg in palette.pegs() {
        println!("{} {}", peg_letter(peg), peg.name());
    }
}

/// Print the result of scoring one guess against a secret
pub fn print_score_report(report: &ScoreReport) {
    println!("\n{}", "─".repeat(60).cyan());
    println!("Secret: {}", code_line(&report.secret));
    println!(
        "Guess:  {}  {}",
        code_line(&report.guess),
        score_pips(report.score, report.secret.len())
    );
    println!("{}", "─".repeat(60).cyan());

    println!(
        "\nResult: {}",
        report.score.to_string().bright_yellow().bold()
    );

    if report.solved {
        println!("{}", "✅ That guess cracks the code!".green().bold());
    }
}

/// Print the result of a simulation run
pub fn print_simulation_result(result: &SimulationResult, strategy: &str) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "SIMULATION RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Strategy:         {strategy}");
    println!("   Games played:     {}", result.total_games);
    println!(
        "   Games won:        {} {}",
        result.wins,
        format!(
            "({:.1}%)",
            percentage(result.wins, result.total_games)
        )
        .green()
    );
    if result.losses > 0 {
        println!(
            "   Games lost:       {} {}",
            result.losses,
            format!(
                "({:.1}%)",
                percentage(result.losses, result.total_games)
            )
            .red()
        );
    }
    println!(
        "   Average guesses:  {}",
        format!("{:.2}", result.average_guesses)
            .bright_yellow()
            .bold()
    );
    println!(
        "   Best case:        {}",
        format!("{}", result.min_guesses).green()
    );
    println!(
        "   Worst case:       {}",
        format!("{}", result.max_guesses).yellow()
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Games/second:     {:.1}", result.games_per_second);

    println!("\n📈 {}", "Guess Distribution:".bright_cyan().bold());
    let max_count = result.distribution.values().max().copied().unwrap_or(1);
    for guesses in 1..=result.rounds {
        if let Some(&count) = result.distribution.get(&guesses) {
            let pct = percentage(count, result.total_games);
            let bar = create_progress_bar(count as f64, max_count as f64, 40);
            println!("   {guesses:>2}: {} {count:4} ({pct:5.1}%)", bar.green());
        }
    }
}

fn percentage(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        0.0
    } else {
        part as f64 / whole as f64 * 100.0
    }
}
