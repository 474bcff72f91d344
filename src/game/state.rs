use super::{Board, Player};

/// Magnitude of the reward for a won game. Far above any heuristic value.
pub const WIN_REWARD: f64 = 1000.0;

/// (row, column) of a placed piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Position { row, col }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Winner(Player),
    Draw,
}

impl GameOutcome {
    /// Exact value of a finished game: ±[`WIN_REWARD`] for a win, 0 for a draw.
    pub fn reward(self) -> f64 {
        match self {
            GameOutcome::Winner(player) => player.sign() * WIN_REWARD,
            GameOutcome::Draw => 0.0,
        }
    }
}

/// Result of checking the position after a move.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TerminalStatus {
    outcome: Option<GameOutcome>,
}

impl TerminalStatus {
    pub fn ongoing() -> Self {
        TerminalStatus { outcome: None }
    }

    pub fn finished(outcome: GameOutcome) -> Self {
        TerminalStatus {
            outcome: Some(outcome),
        }
    }

    pub fn is_terminal(&self) -> bool {
        self.outcome.is_some()
    }

    pub fn outcome(&self) -> Option<GameOutcome> {
        self.outcome
    }

    pub fn winner(&self) -> Option<Player> {
        match self.outcome {
            Some(GameOutcome::Winner(player)) => Some(player),
            _ => None,
        }
    }

    /// `None` for a game still in progress; use the heuristic instead.
    pub fn reward(&self) -> Option<f64> {
        self.outcome.map(GameOutcome::reward)
    }
}

/// A board plus the position of the most recent piece.
///
/// States are values: applying an action yields a new state and leaves
/// the parent untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameState {
    pub(crate) board: Board,
    pub(crate) last_move: Option<Position>,
}

impl GameState {
    /// Get reference to board
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Position of the last piece placed, `None` on the initial board.
    pub fn last_move(&self) -> Option<Position> {
        self.last_move
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rewards() {
        assert_eq!(GameOutcome::Winner(Player::Max).reward(), 1000.0);
        assert_eq!(GameOutcome::Winner(Player::Min).reward(), -1000.0);
        assert_eq!(GameOutcome::Draw.reward(), 0.0);
    }

    #[test]
    fn test_terminal_status() {
        let ongoing = TerminalStatus::ongoing();
        assert!(!ongoing.is_terminal());
        assert_eq!(ongoing.reward(), None);
        assert_eq!(ongoing.winner(), None);

        let won = TerminalStatus::finished(GameOutcome::Winner(Player::Min));
        assert!(won.is_terminal());
        assert_eq!(won.winner(), Some(Player::Min));
        assert_eq!(won.reward(), Some(-WIN_REWARD));

        let draw = TerminalStatus::finished(GameOutcome::Draw);
        assert!(draw.is_terminal());
        assert_eq!(draw.winner(), None);
        assert_eq!(draw.reward(), Some(0.0));
    }
}
