use log::trace;

use crate::error::{ConfigError, InvalidAction};

use super::bounds::{get_bounds, LineBounds};
use super::{Board, GameOutcome, GameState, Player, Position, TerminalStatus, MAX_DIM};

/// Pieces in a row needed to win.
pub const CONNECT: usize = 4;

/// Rules of Connect Four on a fixed H×W board.
///
/// Construct one engine per game size and pass it to whoever needs the
/// rules; it holds no game state of its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Connect4 {
    rows: usize,
    cols: usize,
}

impl Connect4 {
    pub fn new(rows: usize, cols: usize) -> Result<Self, ConfigError> {
        if !(1..=MAX_DIM).contains(&rows) {
            return Err(ConfigError::Validation(format!(
                "rows must be in 1..={MAX_DIM}, got {rows}"
            )));
        }
        if !(1..=MAX_DIM).contains(&cols) {
            return Err(ConfigError::Validation(format!(
                "cols must be in 1..={MAX_DIM}, got {cols}"
            )));
        }
        Ok(Connect4 { rows, cols })
    }

    /// The classic 6×7 game.
    pub fn standard() -> Self {
        Connect4 { rows: 6, cols: 7 }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Empty board, no last move.
    pub fn initial_state(&self) -> GameState {
        GameState {
            board: Board::new(self.rows, self.cols),
            last_move: None,
        }
    }

    /// Columns that can still take a piece, in ascending order.
    ///
    /// The order is the search's iteration order, so it decides tie-breaks.
    pub fn valid_actions(&self, state: &GameState) -> Vec<usize> {
        self.check_dims(state);
        (0..self.cols)
            .filter(|&col| !state.board.is_column_full(col))
            .collect()
    }

    /// Drop `player`'s piece into column `action`.
    ///
    /// Returns the new state and where the piece landed; `state` is left
    /// unchanged.
    pub fn apply_action(
        &self,
        state: &GameState,
        action: usize,
        player: Player,
    ) -> Result<(GameState, Position), InvalidAction> {
        self.check_dims(state);
        if action >= self.cols {
            return Err(InvalidAction::OutOfRange {
                action,
                width: self.cols,
            });
        }
        if state.board.is_column_full(action) {
            return Err(InvalidAction::ColumnFull(action));
        }

        // Gravity: the piece rests on the lowest empty cell
        let row = state.board.empty_in_column(action) - 1;
        let pos = Position::new(row, action);
        let mut board = state.board;
        board.set(row, action, player.to_cell());
        trace!("{} plays column {action}, lands on row {row}", player.name());

        Ok((
            GameState {
                board,
                last_move: Some(pos),
            },
            pos,
        ))
    }

    /// Decide whether `mover`'s piece at `last_move` ended the game.
    ///
    /// Only the four windowed lines through `last_move` are scanned, so a
    /// win elsewhere on the board is not reported here.
    pub fn check_terminal(
        &self,
        state: &GameState,
        last_move: Option<Position>,
        mover: Player,
    ) -> TerminalStatus {
        self.check_dims(state);
        let Some(pos) = last_move else {
            return TerminalStatus::ongoing();
        };

        let piece = mover.to_cell();
        let bounds = self.get_bounds(pos);
        for line in bounds.lines() {
            let mut run = 0;
            for p in line.positions() {
                if state.board.get(p.row, p.col) == piece {
                    run += 1;
                    if run == CONNECT {
                        return TerminalStatus::finished(GameOutcome::Winner(mover));
                    }
                } else {
                    run = 0;
                }
            }
        }

        if state.board.is_full() {
            return TerminalStatus::finished(GameOutcome::Draw);
        }
        TerminalStatus::ongoing()
    }

    /// The windowed lines through `pos` on this engine's board.
    pub fn get_bounds(&self, pos: Position) -> LineBounds {
        get_bounds(self.rows, self.cols, pos)
    }

    /// Whether every cell of the board is occupied.
    pub fn is_board_full(&self, state: &GameState) -> bool {
        state.board.is_full()
    }

    fn check_dims(&self, state: &GameState) {
        assert!(
            state.board.rows() == self.rows && state.board.cols() == self.cols,
            "{}x{} state handed to a {}x{} engine",
            state.board.rows(),
            state.board.cols(),
            self.rows,
            self.cols
        );
    }
}

impl Default for Connect4 {
    fn default() -> Self {
        Self::standard()
    }
}

/// Build a state directly from rows of cells, top row first. Test helper.
#[cfg(test)]
pub(crate) fn state_from_rows(rows: &[&str], last_move: Option<Position>) -> GameState {
    use super::Cell;

    let mut board = Board::new(rows.len(), rows[0].len());
    for (r, line) in rows.iter().enumerate() {
        for (c, ch) in line.chars().enumerate() {
            let cell = match ch {
                'X' => Cell::Max,
                'O' => Cell::Min,
                _ => Cell::Empty,
            };
            board.set(r, c, cell);
        }
    }
    GameState { board, last_move }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Cell;

    fn play(engine: &Connect4, moves: &[(usize, Player)]) -> (GameState, Position) {
        let mut state = engine.initial_state();
        let mut pos = None;
        for &(col, player) in moves {
            let (next, p) = engine.apply_action(&state, col, player).unwrap();
            state = next;
            pos = Some(p);
        }
        (state, pos.unwrap())
    }

    #[test]
    fn test_initial_state() {
        let engine = Connect4::standard();
        let state = engine.initial_state();
        assert_eq!(state.last_move(), None);
        assert_eq!(engine.valid_actions(&state), vec![0, 1, 2, 3, 4, 5, 6]);
        assert!(!engine.check_terminal(&state, None, Player::Max).is_terminal());
    }

    #[test]
    fn test_new_rejects_bad_dimensions() {
        assert!(Connect4::new(0, 7).is_err());
        assert!(Connect4::new(6, MAX_DIM + 1).is_err());
        assert!(Connect4::new(4, 4).is_ok());
    }

    #[test]
    fn test_apply_action_gravity() {
        let engine = Connect4::standard();
        let state = engine.initial_state();

        let (state, pos) = engine.apply_action(&state, 3, Player::Max).unwrap();
        assert_eq!(pos, Position::new(5, 3));
        assert_eq!(state.board().get(5, 3), Cell::Max);
        assert_eq!(state.last_move(), Some(pos));

        let (next, pos) = engine.apply_action(&state, 3, Player::Min).unwrap();
        assert_eq!(pos, Position::new(4, 3));
        assert_eq!(next.board().get(4, 3), Cell::Min);
        assert_eq!(next.board().get(5, 3), Cell::Max);
        // parent untouched
        assert_eq!(state.board().get(4, 3), Cell::Empty);
    }

    #[test]
    fn test_apply_action_rejects_invalid_columns() {
        let engine = Connect4::new(2, 3).unwrap();
        let state = engine.initial_state();
        assert_eq!(
            engine.apply_action(&state, 3, Player::Max),
            Err(InvalidAction::OutOfRange {
                action: 3,
                width: 3
            })
        );

        let (state, _) = play(&engine, &[(1, Player::Max), (1, Player::Min)]);
        assert_eq!(
            engine.apply_action(&state, 1, Player::Max),
            Err(InvalidAction::ColumnFull(1))
        );
        assert_eq!(engine.valid_actions(&state), vec![0, 2]);
    }

    #[test]
    fn test_vertical_win() {
        let engine = Connect4::standard();
        let (state, pos) = play(
            &engine,
            &[
                (3, Player::Max),
                (0, Player::Min),
                (3, Player::Max),
                (0, Player::Min),
                (3, Player::Max),
                (6, Player::Min),
                (3, Player::Max),
            ],
        );
        let status = engine.check_terminal(&state, Some(pos), Player::Max);
        assert_eq!(status.outcome(), Some(GameOutcome::Winner(Player::Max)));
        assert_eq!(status.reward(), Some(1000.0));
    }

    #[test]
    fn test_three_is_not_a_win() {
        let engine = Connect4::standard();
        let (state, pos) = play(&engine, &[(0, Player::Min), (1, Player::Min), (2, Player::Min)]);
        assert!(!engine.check_terminal(&state, Some(pos), Player::Min).is_terminal());
    }

    #[test]
    fn test_horizontal_win_completed_in_the_middle() {
        let engine = Connect4::standard();
        let (state, pos) = play(
            &engine,
            &[(0, Player::Min), (1, Player::Min), (3, Player::Min), (2, Player::Min)],
        );
        let status = engine.check_terminal(&state, Some(pos), Player::Min);
        assert_eq!(status.winner(), Some(Player::Min));
        assert_eq!(status.reward(), Some(-1000.0));
    }

    #[test]
    fn test_diagonal_wins() {
        let engine = Connect4::standard();
        let up = state_from_rows(
            &[
                ".......",
                ".......",
                "...X...",
                "..XO...",
                ".XOO...",
                "XOOO...",
            ],
            Some(Position::new(2, 3)),
        );
        assert_eq!(
            engine.check_terminal(&up, up.last_move(), Player::Max).winner(),
            Some(Player::Max)
        );

        let down = state_from_rows(
            &[
                ".......",
                ".......",
                "...O...",
                "...XO..",
                "...XXO.",
                "...XXXO",
            ],
            Some(Position::new(2, 3)),
        );
        assert_eq!(
            engine.check_terminal(&down, down.last_move(), Player::Min).winner(),
            Some(Player::Min)
        );
    }

    #[test]
    fn test_only_mover_pieces_count() {
        let engine = Connect4::standard();
        let state = state_from_rows(
            &[
                ".......",
                ".......",
                ".......",
                ".......",
                ".......",
                "XXXX...",
            ],
            Some(Position::new(5, 3)),
        );
        assert!(!engine.check_terminal(&state, state.last_move(), Player::Min).is_terminal());
    }

    #[test]
    fn test_draw_on_full_board() {
        let engine = Connect4::standard();
        let state = state_from_rows(
            &[
                "XXOOXXO",
                "OOXXOOX",
                "XXOOXXO",
                "OOXXOOX",
                "XXOOXXO",
                "OOXXOOX",
            ],
            Some(Position::new(0, 6)),
        );
        let status = engine.check_terminal(&state, state.last_move(), Player::Min);
        assert_eq!(status.outcome(), Some(GameOutcome::Draw));
        assert_eq!(status.reward(), Some(0.0));
    }

    #[test]
    fn test_win_on_last_cell_beats_draw() {
        let engine = Connect4::new(4, 4).unwrap();
        let state = state_from_rows(
            &["XOXX", "OXOX", "XOXX", "OXOX"],
            Some(Position::new(0, 3)),
        );
        let status = engine.check_terminal(&state, state.last_move(), Player::Max);
        assert_eq!(status.winner(), Some(Player::Max));
    }

    #[test]
    #[should_panic(expected = "engine")]
    fn test_mismatched_state_panics() {
        let small = Connect4::new(4, 4).unwrap();
        let state = Connect4::standard().initial_state();
        small.valid_actions(&state);
    }
}
