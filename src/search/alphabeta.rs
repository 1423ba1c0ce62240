//! Fixed-depth minimax with alpha-beta pruning
//!
//! Every node is scored from the searching side's fixed perspective. A node
//! maximizes when that side is to move and minimizes otherwise, so the
//! alternation follows the actual side to move rather than depth parity.
//!
//! # Example
//!
//! ```
//! use dama::{GameState, RulesConfig};
//! use dama::search::Searcher;
//! use rand::SeedableRng;
//!
//! let cfg = RulesConfig::default();
//! let state = GameState::initial(&cfg);
//! let mut rng = rand::rngs::StdRng::seed_from_u64(3);
//!
//! let mut searcher = Searcher::new(&cfg, state.turn);
//! let result = searcher.search(&state, 2, &mut rng);
//! assert!(result.best_move.is_some());
//! assert!(result.nodes > 0);
//! ```

use std::time::Instant;

use rand::Rng;
use tracing::trace;

use crate::board::{Color, Move};
use crate::engine::{play, GameResult, GameState};
use crate::eval::evaluate;
use crate::rules::{legal_moves, RulesConfig};

use super::ordering::{order_moves, ScoredMove};

/// Score of a won position; lost positions score the negation
pub const WIN_SCORE: f64 = 10_000.0;

/// Plies searched by the hard AI
pub const DEFAULT_DEPTH: u8 = 3;

/// Search counters for diagnostics
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Positions visited below the root
    pub nodes: u64,
    /// Positions scored by the evaluation function
    pub leaves: u64,
    /// Finished or stuck positions scored as a win or loss
    pub terminals: u64,
    /// Branches abandoned because alpha met beta
    pub cutoffs: u64,
}

/// Best root move with its score
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// `None` only when the root had no moves
    pub best_move: Option<Move>,
    pub score: f64,
    pub depth: u8,
    pub nodes: u64,
    pub time_ms: u64,
    pub stats: SearchStats,
}

/// Alpha-beta searcher for one side under one ruleset
pub struct Searcher<'a> {
    cfg: &'a RulesConfig,
    color: Color,
    stats: SearchStats,
}

impl<'a> Searcher<'a> {
    /// Searcher scoring positions for `color`
    pub fn new(cfg: &'a RulesConfig, color: Color) -> Self {
        Self {
            cfg,
            color,
            stats: SearchStats::default(),
        }
    }

    #[inline]
    pub fn color(&self) -> Color {
        self.color
    }

    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Search the legal moves of `state`, ordered best-first by immediate score.
    pub fn search<R: Rng + ?Sized>(&mut self, state: &GameState, depth: u8, rng: &mut R) -> SearchResult {
        let legal = legal_moves(&state.board, state.turn, self.cfg);
        let ordered = order_moves(legal, rng);
        self.search_ordered(state, ordered, depth)
    }

    /// Search root moves in the given order.
    ///
    /// Alpha rises as root moves are scored while beta stays open; a later move
    /// only replaces the best one when it scores strictly higher.
    pub fn search_ordered(&mut self, state: &GameState, ordered: Vec<ScoredMove>, depth: u8) -> SearchResult {
        let start = Instant::now();
        self.stats = SearchStats::default();

        let mut best_move = None;
        let mut best = f64::NEG_INFINITY;
        let mut alpha = f64::NEG_INFINITY;
        let beta = f64::INFINITY;

        for ScoredMove { mv, score: prior } in ordered {
            let next = play(state, &mv, self.cfg);
            let val = self.minimax(&next, depth.saturating_sub(1), alpha, beta);
            trace!(mv = %mv, prior, val, "root move scored");
            if val > best {
                best = val;
                best_move = Some(mv);
            }
            alpha = alpha.max(best);
        }

        SearchResult {
            best_move,
            score: best,
            depth,
            nodes: self.stats.nodes,
            time_ms: start.elapsed().as_millis() as u64,
            stats: self.stats.clone(),
        }
    }

    /// Minimax value of `state` searched `depth` plies deep.
    pub fn minimax(&mut self, state: &GameState, depth: u8, mut alpha: f64, mut beta: f64) -> f64 {
        self.stats.nodes += 1;

        if let GameResult::Finished { winner, .. } = state.result {
            self.stats.terminals += 1;
            return self.outcome(winner == self.color);
        }
        if depth == 0 {
            self.stats.leaves += 1;
            return evaluate(state, self.color, self.cfg);
        }

        let player = state.turn;
        let legal = legal_moves(&state.board, player, self.cfg);
        if legal.is_empty() {
            self.stats.terminals += 1;
            return self.outcome(player != self.color);
        }

        if player == self.color {
            let mut best = f64::NEG_INFINITY;
            for mv in &legal {
                let next = play(state, mv, self.cfg);
                best = best.max(self.minimax(&next, depth - 1, alpha, beta));
                alpha = alpha.max(best);
                if beta <= alpha {
                    self.stats.cutoffs += 1;
                    break;
                }
            }
            best
        } else {
            let mut best = f64::INFINITY;
            for mv in &legal {
                let next = play(state, mv, self.cfg);
                best = best.min(self.minimax(&next, depth - 1, alpha, beta));
                beta = beta.min(best);
                if beta <= alpha {
                    self.stats.cutoffs += 1;
                    break;
                }
            }
            best
        }
    }

    #[inline]
    fn outcome(&self, won: bool) -> f64 {
        if won {
            WIN_SCORE
        } else {
            -WIN_SCORE
        }
    }
}
