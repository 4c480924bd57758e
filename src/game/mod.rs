//! Round state and game configuration

mod config;
mod round;

pub use config::{ConfigError, GameConfig};
pub use round::{GuessRecord, Round, RoundStatus};
