//! # Oware
//!
//! A terminal Oware (Awari) game: a 12-pit seed-sowing board engine with
//! capture and starvation-settlement rules, a fixed-depth negamax player,
//! and a Ratatui front end.
//!
//! ## Modules
//!
//! - [`game`] — Core rules: board, side tags, turn state machine
//! - [`ai`] — Agent trait, negamax search, random baseline
//! - [`ui`] — Terminal UI: board view and interactive game loop
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod ai;
pub mod config;
pub mod error;
pub mod game;
pub mod ui;
