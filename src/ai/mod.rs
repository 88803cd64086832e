//! Automated players: the `Agent` move-source trait, the fixed-depth negamax
//! search, and a random baseline.

mod agent;
mod negamax;
mod random;

pub use agent::Agent;
pub use negamax::{select_move, NegamaxAgent};
pub use random::RandomAgent;
