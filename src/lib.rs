//! # Minimax Connect Four
//!
//! Connect Four on a configurable H×W board with a depth-limited minimax
//! player using alpha-beta pruning.
//!
//! ## Modules
//!
//! - [`game`] — Rules engine: board, players, line geometry, win/draw detection
//! - [`ai`] — Segment heuristic and alpha-beta search
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types
//!
//! ```
//! use minimax_connect_four::ai::{Depth, Minimax};
//! use minimax_connect_four::game::{Connect4, Player};
//!
//! let engine = Connect4::standard();
//! let state = engine.initial_state();
//! let result = Minimax::new(engine).best_move(&state, Depth::Plies(2), Player::Max);
//! assert!(result.action.is_some());
//! ```

pub mod ai;
pub mod config;
pub mod error;
pub mod game;
