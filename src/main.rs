//! Mastermind - CLI
//!
//! Text-based Mastermind with duplicate-safe scoring, a TUI board, the
//! classic menu-driven mode, and an automated code-breaking simulator.

use anyhow::Result;
use clap::{Parser, Subcommand};
use mastermind::{
    commands::{run_classic, run_simulation, score_codes},
    game::GameConfig,
    interactive::{App, run_tui},
    output::{print_palette, print_score_report, print_simulation_result},
};

#[derive(Parser)]
#[command(
    name = "mastermind",
    about = "Text-based Mastermind with duplicate-safe scoring",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Maximum number of guesses per round
    #[arg(short, long, global = true, default_value_t = 10)]
    rounds: usize,

    /// Number of pegs in the code
    #[arg(short, long, global = true, default_value_t = 4)]
    slots: usize,

    /// Number of active colors, counted from the start of the palette
    #[arg(short, long, global = true, default_value_t = 6)]
    colors: usize,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Classic menu-driven mode with interactive setup
    Classic,

    /// Score one guess against a given secret
    Score {
        /// The secret code, as color letters (e.g. RBGY)
        secret: String,

        /// The guess to score against it
        guess: String,
    },

    /// Auto-play games with a code-breaking strategy
    Simulate {
        /// Number of games to play
        #[arg(short = 'n', long, default_value_t = 100)]
        count: usize,

        /// Strategy: minimax (default), first, random
        #[arg(short = 't', long, default_value = "minimax")]
        strategy: String,
    },

    /// Show the active palette
    Colors,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = GameConfig::new(cli.rounds, cli.slots, cli.colors);

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(config),
        Commands::Classic => run_classic().map_err(|e| anyhow::anyhow!(e)),
        Commands::Score { secret, guess } => run_score_command(&secret, &guess, config),
        Commands::Simulate { count, strategy } => run_simulate_command(&config, &strategy, count),
        Commands::Colors => {
            print_palette(config.palette());
            Ok(())
        }
    }
}

fn run_play_command(config: GameConfig) -> Result<()> {
    config.validate()?;
    let app = App::new(config);
    run_tui(app)
}

fn run_score_command(secret: &str, guess: &str, config: GameConfig) -> Result<()> {
    let report =
        score_codes(secret, guess, config.palette()).map_err(|e| anyhow::anyhow!(e))?;
    print_score_report(&report);
    Ok(())
}

fn run_simulate_command(config: &GameConfig, strategy: &str, count: usize) -> Result<()> {
    println!(
        "Simulating {count} games ({} slots, {} colors, {} guesses each)...",
        config.slots, config.colors, config.rounds
    );

    let result = run_simulation(config, strategy, count).map_err(|e| anyhow::anyhow!(e))?;
    print_simulation_result(&result, strategy);
    Ok(())
}
