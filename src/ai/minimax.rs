use log::debug;

use crate::game::{Connect4, GameState, Player};

use super::heuristic::{Heuristic, SegmentHeuristic};

/// How far the search looks ahead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Depth {
    /// Stop after this many plies and fall back to the heuristic.
    Plies(u32),
    /// Search every line to the end of the game.
    Unbounded,
}

impl Depth {
    /// Map the conventional integer depth: any negative value (normally
    /// -1) means unbounded.
    pub fn from_raw(raw: i32) -> Self {
        match u32::try_from(raw) {
            Ok(plies) => Depth::Plies(plies),
            Err(_) => Depth::Unbounded,
        }
    }

    pub fn is_horizon(self) -> bool {
        self == Depth::Plies(0)
    }

    fn child(self) -> Self {
        match self {
            Depth::Plies(n) => Depth::Plies(n.saturating_sub(1)),
            Depth::Unbounded => Depth::Unbounded,
        }
    }
}

impl From<i32> for Depth {
    fn from(raw: i32) -> Self {
        Depth::from_raw(raw)
    }
}

/// Counters collected over one search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Every node entered, the root included.
    pub nodes: u64,
    /// Nodes where the previous move finished the game.
    pub terminal_hits: u64,
    /// Nodes scored by the heuristic at the horizon.
    pub horizon_evals: u64,
    /// Alpha or beta cutoffs taken.
    pub cutoffs: u64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchResult {
    /// Best column for the player to move, `None` at a terminal or horizon node.
    pub action: Option<usize>,
    /// Exact reward if the line ends the game, otherwise a heuristic value.
    pub value: f64,
    pub stats: SearchStats,
}

/// Depth-limited minimax with alpha-beta pruning.
///
/// Each node owns its own copy of the state, so sibling branches never see
/// each other's moves.
pub struct Minimax {
    engine: Connect4,
    heuristic: Box<dyn Heuristic>,
    pruning: bool,
}

impl Minimax {
    pub fn new(engine: Connect4) -> Self {
        Minimax {
            engine,
            heuristic: Box::new(SegmentHeuristic),
            pruning: true,
        }
    }

    pub fn with_heuristic(engine: Connect4, heuristic: Box<dyn Heuristic>) -> Self {
        Minimax {
            engine,
            heuristic,
            pruning: true,
        }
    }

    /// Plain minimax: every branch is visited. Same values, more nodes.
    pub fn without_pruning(mut self) -> Self {
        self.pruning = false;
        self
    }

    pub fn engine(&self) -> &Connect4 {
        &self.engine
    }

    /// Best move for `player` in `state`, searching the full window.
    pub fn best_move(&self, state: &GameState, depth: Depth, player: Player) -> SearchResult {
        self.alpha_beta(state, depth, f64::NEG_INFINITY, f64::INFINITY, player)
    }

    /// Search `state` with an explicit (alpha, beta) window.
    ///
    /// `player` is the side to move; the last move in `state` was made by
    /// the other side.
    pub fn alpha_beta(
        &self,
        state: &GameState,
        depth: Depth,
        alpha: f64,
        beta: f64,
        player: Player,
    ) -> SearchResult {
        let mut stats = SearchStats::default();
        let (action, value) = self.search(state, depth, alpha, beta, player, &mut stats);
        debug!(
            "{} search at {depth:?}: action {action:?}, value {value}, {} nodes, {} cutoffs",
            player.name(),
            stats.nodes,
            stats.cutoffs
        );
        SearchResult {
            action,
            value,
            stats,
        }
    }

    fn search(
        &self,
        state: &GameState,
        depth: Depth,
        mut alpha: f64,
        mut beta: f64,
        player: Player,
        stats: &mut SearchStats,
    ) -> (Option<usize>, f64) {
        stats.nodes += 1;

        // Did the opponent's last move end the game?
        let status = self
            .engine
            .check_terminal(state, state.last_move(), player.other());
        if let Some(reward) = status.reward() {
            stats.terminal_hits += 1;
            return (None, reward);
        }

        if depth.is_horizon() {
            stats.horizon_evals += 1;
            let value = self
                .heuristic
                .evaluate(&self.engine, state, state.last_move());
            return (None, value);
        }

        let mut best_action = None;
        match player {
            Player::Max => {
                let mut best = f64::NEG_INFINITY;
                for action in self.engine.valid_actions(state) {
                    let child = self.child(state, action, player);
                    let (_, value) =
                        self.search(&child, depth.child(), alpha, beta, Player::Min, stats);
                    if value > best {
                        best = value;
                        best_action = Some(action);
                    }
                    if self.pruning {
                        if best >= beta {
                            stats.cutoffs += 1;
                            break;
                        }
                        alpha = alpha.max(best);
                    }
                }
                (best_action, best)
            }
            Player::Min => {
                let mut best = f64::INFINITY;
                for action in self.engine.valid_actions(state) {
                    let child = self.child(state, action, player);
                    let (_, value) =
                        self.search(&child, depth.child(), alpha, beta, Player::Max, stats);
                    if value < best {
                        best = value;
                        best_action = Some(action);
                    }
                    if self.pruning {
                        if best <= alpha {
                            stats.cutoffs += 1;
                            break;
                        }
                        beta = beta.min(best);
                    }
                }
                (best_action, best)
            }
        }
    }

    fn child(&self, state: &GameState, action: usize, player: Player) -> GameState {
        match self.engine.apply_action(state, action, player) {
            Ok((child, _)) => child,
            Err(e) => unreachable!("valid_actions yielded an unplayable column: {e}"),
        }
    }
}
