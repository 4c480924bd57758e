//! Command implementations

pub mod classic;
pub mod score;
pub mod simulate;

pub use classic::run_classic;
pub use score::{ScoreReport, score_codes};
pub use simulate::{SimulationResult, run_simulation};
