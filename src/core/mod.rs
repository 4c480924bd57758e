//! Core domain types for Mastermind
//!
//! This module contains the fundamental domain types with zero external dependencies
//! beyond hashing and randomness. All types here are pure, testable, and have clear
//! mathematical properties.

mod code;
mod peg;
mod score;

pub use code::{Code, CodeError};
pub use peg::{Palette, Peg};
pub use score::{Score, ScoreError};
