//! Core Oware game logic: board rules (sowing, capture, starvation
//! settlement), side tags, and the turn state machine with immutable
//! transitions.

mod board;
mod player;
mod state;

pub use board::{Board, PITS, PITS_PER_SIDE, SEEDS_PER_PIT, TOTAL_SEEDS};
pub use player::Player;
pub use state::{GameOutcome, GameState, MoveError, TurnSummary};
