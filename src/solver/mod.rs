//! Automated code breaking
//!
//! Candidate filtering over the enumerated code space plus guess selection
//! strategies, including Knuth-style minimax.

mod engine;
pub mod minimax;
pub mod strategy;

pub use engine::{Breaker, enumerate_codes};
pub use strategy::{
    FirstConsistentStrategy, MinimaxStrategy, RandomStrategy, Strategy, StrategyType,
};
