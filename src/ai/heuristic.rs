use crate::game::{Board, Cell, Connect4, GameState, LineBounds, Position, CONNECT};

/// Longest windowed line: the cell plus 3 on either side.
const MAX_LINE: usize = 7;

/// Trait for scoring a non-terminal position at the search horizon.
///
/// Positive values favour MAX, negative values favour MIN.
pub trait Heuristic: Send + Sync {
    fn evaluate(&self, engine: &Connect4, state: &GameState, last_move: Option<Position>) -> f64;
}

/// Default heuristic: the marginal segment score of the last move.
#[derive(Debug, Clone, Copy, Default)]
pub struct SegmentHeuristic;

impl Heuristic for SegmentHeuristic {
    fn evaluate(&self, engine: &Connect4, state: &GameState, last_move: Option<Position>) -> f64 {
        heuristic_eval(engine, state, last_move)
    }
}

/// Score a 4-cell window: +pieces if only MAX is in it, -pieces if only
/// MIN is, 0 if empty or blocked by both.
pub fn score_segment(segment: &[Cell]) -> i32 {
    assert_eq!(
        segment.len(),
        CONNECT,
        "segment length should be {CONNECT}, got {}",
        segment.len()
    );
    let max = segment.iter().filter(|&&c| c == Cell::Max).count() as i32;
    let min = segment.iter().filter(|&&c| c == Cell::Min).count() as i32;
    match (max, min) {
        (m, 0) => m,
        (0, n) => -n,
        _ => 0,
    }
}

/// Sum of the segment scores of every 4-cell window in `line`.
pub fn score_line(line: &[Cell]) -> i32 {
    assert!(
        line.len() >= CONNECT,
        "line length should be >= {CONNECT}, got {}",
        line.len()
    );
    line.windows(CONNECT).map(score_segment).sum()
}

fn score_bounds(board: &Board, bounds: &LineBounds) -> i32 {
    let mut total = 0;
    for line in bounds.lines() {
        // Too short to hold a segment
        if line.len < CONNECT {
            continue;
        }
        let mut cells = [Cell::Empty; MAX_LINE];
        for (slot, p) in cells.iter_mut().zip(line.positions()) {
            *slot = board.get(p.row, p.col);
        }
        total += score_line(&cells[..line.len]);
    }
    total
}

/// How much the last move changed the segment score of the four lines
/// through it.
///
/// The lines are scored once as the board stands and once with the last
/// piece lifted out; the result is the difference. Only the windowed lines
/// around the move are read, so the cost does not grow with the board.
/// Returns 0.0 when there is no last move.
pub fn heuristic_eval(engine: &Connect4, state: &GameState, last_move: Option<Position>) -> f64 {
    let Some(pos) = last_move else {
        return 0.0;
    };
    let bounds = engine.get_bounds(pos);

    let mut before = *state.board();
    before.set(pos.row, pos.col, Cell::Empty);

    let score = score_bounds(state.board(), &bounds);
    let prev_score = score_bounds(&before, &bounds);
    f64::from(score - prev_score)
}
