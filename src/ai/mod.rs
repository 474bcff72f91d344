//! Move selection: the segment heuristic and the alpha-beta minimax search.

mod heuristic;
mod minimax;

pub use heuristic::{heuristic_eval, score_line, score_segment, Heuristic, SegmentHeuristic};
pub use minimax::{Depth, Minimax, SearchResult, SearchStats};
