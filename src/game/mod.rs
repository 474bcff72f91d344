//! Connect Four rules on an H×W board: board representation, players,
//! line geometry, and the immutable state transitions of the rules engine.

mod board;
pub mod bounds;
mod player;
mod rules;
mod state;

pub use board::{Board, Cell, MAX_DIM};
pub use bounds::{get_bounds, Direction, Line, LineBounds};
pub use player::Player;
pub use rules::{Connect4, CONNECT};
pub use state::{GameOutcome, GameState, Position, TerminalStatus, WIN_REWARD};

#[cfg(test)]
pub(crate) use rules::state_from_rows;
