//! Computer opponent
//!
//! Three difficulty tiers, each a separate strategy:
//!
//! 1. **Easy**: uniformly random legal move
//! 2. **Medium**: best immediate tactical score (captures, then promotion),
//!    ties broken at random
//! 3. **Hard**: fixed-depth alpha-beta search with tactical move ordering
//!
//! The random source is a type parameter so tests and replays can seed it.
//!
//! # Example
//!
//! ```
//! use dama::{AiEngine, Difficulty, GameState, RulesConfig};
//!
//! let cfg = RulesConfig::default();
//! let state = GameState::initial(&cfg);
//! let mut ai = AiEngine::seeded(42);
//!
//! let choice = ai.choose_move_with_stats(&state, state.turn, Difficulty::Hard, &cfg);
//! println!("Move: {:?}", choice.best_move);
//! println!("Strategy: {:?}", choice.strategy);
//! println!("Time: {}ms", choice.time_ms);
//! ```

use std::fmt;
use std::str::FromStr;
use std::time::Instant;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::board::{Color, Move};
use crate::engine::GameState;
use crate::error::DifficultyParseError;
use crate::eval::score_immediate;
use crate::rules::{legal_moves, RulesConfig};
use crate::search::{order_moves, Searcher, DEFAULT_DEPTH};

/// Scores within this distance of the best count as tied
const TIE_EPSILON: f64 = 1e-6;

/// AI strength
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    pub fn as_str(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = DifficultyParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Difficulty::ALL
            .into_iter()
            .find(|d| d.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| DifficultyParseError(s.to_string()))
    }
}

/// Strategy that produced a [`MoveChoice`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// Uniform random pick
    Random,
    /// Single-ply tactical scoring
    Tactical,
    /// Alpha-beta search
    AlphaBeta,
    /// No move was available to choose
    NoMove,
}

impl From<Difficulty> for Strategy {
    fn from(difficulty: Difficulty) -> Self {
        match difficulty {
            Difficulty::Easy => Strategy::Random,
            Difficulty::Medium => Strategy::Tactical,
            Difficulty::Hard => Strategy::AlphaBeta,
        }
    }
}

/// Chosen move with search diagnostics
#[derive(Debug, Clone)]
pub struct MoveChoice {
    pub best_move: Option<Move>,
    /// Tactical score (medium) or search value (hard)
    pub score: Option<f64>,
    pub strategy: Strategy,
    /// Positions visited by the search
    pub nodes: u64,
    pub time_ms: u64,
}

impl MoveChoice {
    #[inline]
    fn none() -> Self {
        Self {
            best_move: None,
            score: None,
            strategy: Strategy::NoMove,
            nodes: 0,
            time_ms: 0,
        }
    }
}

/// AI move picker over a random source `R`
pub struct AiEngine<R = StdRng> {
    rng: R,
    depth: u8,
}

impl AiEngine<StdRng> {
    /// Engine seeded from the thread-local generator
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_rng(&mut rand::rng()))
    }

    /// Reproducible engine
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }
}

impl Default for AiEngine<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> AiEngine<R> {
    pub fn with_rng(rng: R) -> Self {
        Self {
            rng,
            depth: DEFAULT_DEPTH,
        }
    }

    /// Set the hard search depth (at least one ply)
    #[must_use]
    pub fn with_depth(mut self, depth: u8) -> Self {
        self.set_depth(depth);
        self
    }

    pub fn set_depth(&mut self, depth: u8) {
        self.depth = depth.max(1);
    }

    #[inline]
    pub fn depth(&self) -> u8 {
        self.depth
    }

    /// Pick a move for `side`.
    ///
    /// Returns `None` when the game is finished, it is not `side`'s turn, or
    /// `side` has no legal move.
    pub fn choose_move(
        &mut self,
        state: &GameState,
        side: Color,
        difficulty: Difficulty,
        cfg: &RulesConfig,
    ) -> Option<Move> {
        self.choose_move_with_stats(state, side, difficulty, cfg).best_move
    }

    /// [`choose_move`](Self::choose_move) with the score and search counters
    pub fn choose_move_with_stats(
        &mut self,
        state: &GameState,
        side: Color,
        difficulty: Difficulty,
        cfg: &RulesConfig,
    ) -> MoveChoice {
        if state.is_finished() || state.turn != side {
            return MoveChoice::none();
        }
        let legal = legal_moves(&state.board, side, cfg);
        if legal.is_empty() {
            return MoveChoice::none();
        }

        let start = Instant::now();
        let (best_move, score, nodes) = match difficulty {
            Difficulty::Easy => (self.pick_random(legal), None, 0),
            Difficulty::Medium => {
                let (mv, score) = self.pick_tactical(legal);
                (mv, score, 0)
            }
            Difficulty::Hard => self.pick_searched(state, side, legal, cfg),
        };
        let choice = MoveChoice {
            best_move,
            score,
            strategy: difficulty.into(),
            nodes,
            time_ms: start.elapsed().as_millis() as u64,
        };

        debug!(
            %difficulty,
            %side,
            mv = ?choice.best_move.as_ref().map(Move::key),
            score = ?choice.score,
            nodes = choice.nodes,
            time_ms = choice.time_ms,
            "ai move chosen"
        );
        choice
    }

    fn pick_random(&mut self, mut legal: Vec<Move>) -> Option<Move> {
        let idx = self.rng.random_range(0..legal.len());
        Some(legal.swap_remove(idx))
    }

    /// Uniform pick among the moves tied for the best immediate score
    fn pick_tactical(&mut self, legal: Vec<Move>) -> (Option<Move>, Option<f64>) {
        let scored: Vec<(Move, f64)> = legal
            .into_iter()
            .map(|mv| {
                let score = score_immediate(&mv, &mut self.rng);
                (mv, score)
            })
            .collect();
        let best = scored
            .iter()
            .map(|(_, score)| *score)
            .fold(f64::NEG_INFINITY, f64::max);

        let mut top: Vec<(Move, f64)> = scored
            .into_iter()
            .filter(|(_, score)| *score >= best - TIE_EPSILON)
            .collect();
        if top.is_empty() {
            return (None, None);
        }
        let idx = self.rng.random_range(0..top.len());
        let (mv, score) = top.swap_remove(idx);
        (Some(mv), Some(score))
    }

    fn pick_searched(
        &mut self,
        state: &GameState,
        side: Color,
        legal: Vec<Move>,
        cfg: &RulesConfig,
    ) -> (Option<Move>, Option<f64>, u64) {
        let fallback = legal.first().cloned();
        let ordered = order_moves(legal, &mut self.rng);

        let mut searcher = Searcher::new(cfg, side);
        let result = searcher.search_ordered(state, ordered, self.depth);
        let best = result.best_move.or(fallback);
        (best, Some(result.score), result.nodes)
    }
}

/// Pick a move with the thread-local random generator.
///
/// See [`AiEngine::choose_move`].
pub fn choose_move(
    state: &GameState,
    side: Color,
    difficulty: Difficulty,
    cfg: &RulesConfig,
) -> Option<Move> {
    AiEngine::with_rng(rand::rng()).choose_move(state, side, difficulty, cfg)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Board, Pos};
    use crate::engine::{apply_move, FinishReason, GameResult};

    fn position(text: &str, turn: Color, cfg: &RulesConfig) -> GameState {
        let board: Board = text.parse().unwrap();
        GameState::from_position(board, turn, cfg)
    }

    // Black man on (3,2) can take red's only piece; another black man sits at home
    const WINNING_CAPTURE: &str = "
        .b......
        ........
        ........
        ..b.....
        ...r....
        ........
        ........
        ........
    ";

    #[test]
    fn test_difficulty_parse_and_display() {
        assert_eq!("hard".parse::<Difficulty>(), Ok(Difficulty::Hard));
        assert_eq!(" Easy ".parse::<Difficulty>(), Ok(Difficulty::Easy));
        assert_eq!(
            "expert".parse::<Difficulty>(),
            Err(DifficultyParseError("expert".to_string()))
        );
        assert_eq!(Difficulty::Medium.to_string(), "medium");
        assert_eq!(Difficulty::default(), Difficulty::Medium);
        assert_eq!(serde_json::to_string(&Difficulty::Hard).unwrap(), "\"hard\"");
    }

    #[test]
    fn test_depth_settings() {
        let mut ai = AiEngine::seeded(0);
        assert_eq!(ai.depth(), DEFAULT_DEPTH);
        ai.set_depth(0);
        assert_eq!(ai.depth(), 1);
        assert_eq!(AiEngine::seeded(0).with_depth(5).depth(), 5);
    }

    #[test]
    fn test_every_tier_returns_legal_move() {
        let cfg = RulesConfig::default();
        let state = GameState::initial(&cfg);
        let legal = legal_moves(&state.board, state.turn, &cfg);
        let mut ai = AiEngine::seeded(9);

        for difficulty in Difficulty::ALL {
            let mv = ai.choose_move(&state, Color::Black, difficulty, &cfg).unwrap();
            assert!(legal.contains(&mv), "{difficulty} chose {mv}");
        }
    }

    #[test]
    fn test_none_when_not_your_turn_or_finished() {
        let cfg = RulesConfig::default();
        let state = GameState::initial(&cfg);
        let mut ai = AiEngine::seeded(1);
        assert_eq!(ai.choose_move(&state, Color::Red, Difficulty::Easy, &cfg), None);

        let mut finished = state.clone();
        finished.result = GameResult::Finished {
            winner: Color::Red,
            reason: FinishReason::NoMoves,
        };
        for difficulty in Difficulty::ALL {
            assert_eq!(ai.choose_move(&finished, Color::Black, difficulty, &cfg), None);
        }
        let choice = ai.choose_move_with_stats(&finished, Color::Black, Difficulty::Hard, &cfg);
        assert_eq!(choice.strategy, Strategy::NoMove);
    }

    #[test]
    fn test_none_when_no_legal_moves() {
        let cfg = RulesConfig::default();
        // Result left active although black is blocked
        let state = GameState {
            board: "
                ........
                ........
                ........
                ........
                ........
                ........
                b.......
                .b......
            "
            .parse()
            .unwrap(),
            turn: Color::Black,
            result: GameResult::Active,
        };
        let mut ai = AiEngine::seeded(1);
        assert_eq!(ai.choose_move(&state, Color::Black, Difficulty::Hard, &cfg), None);
    }

    #[test]
    fn test_seeded_engines_agree() {
        let cfg = RulesConfig::default();
        let state = GameState::initial(&cfg);
        for difficulty in Difficulty::ALL {
            let a = AiEngine::seeded(77).choose_move(&state, Color::Black, difficulty, &cfg);
            let b = AiEngine::seeded(77).choose_move(&state, Color::Black, difficulty, &cfg);
            assert_eq!(a, b);
        }
    }

    #[test]
    fn test_easy_covers_the_legal_set() {
        let cfg = RulesConfig::default();
        let state = GameState::initial(&cfg);
        let legal = legal_moves(&state.board, state.turn, &cfg);
        let mut ai = AiEngine::seeded(3);

        let mut seen = std::collections::HashSet::new();
        for _ in 0..300 {
            let mv = ai.choose_move(&state, Color::Black, Difficulty::Easy, &cfg).unwrap();
            seen.insert(mv.key());
        }
        assert_eq!(seen.len(), legal.len());
    }

    #[test]
    fn test_medium_prefers_capture_when_optional() {
        let cfg = RulesConfig::default().with_mandatory_capture(false);
        let state = position(WINNING_CAPTURE, Color::Black, &cfg);
        let mut ai = AiEngine::seeded(21);
        for _ in 0..20 {
            let choice = ai.choose_move_with_stats(&state, Color::Black, Difficulty::Medium, &cfg);
            assert!(choice.best_move.unwrap().is_capture());
            assert_eq!(choice.strategy, Strategy::Tactical);
            assert!(choice.score.unwrap() >= 10.0);
        }
    }

    #[test]
    fn test_medium_prefers_promotion() {
        let cfg = RulesConfig::default();
        let state = position(
            "
            ........
            ..r.....
            ........
            ........
            ........
            ....r...
            ........
            b.......
            ",
            Color::Red,
            &cfg,
        );
        let mut ai = AiEngine::seeded(4);
        let mv = ai.choose_move(&state, Color::Red, Difficulty::Medium, &cfg).unwrap();
        assert!(mv.promotes);
        assert_eq!(mv.from, Pos::new(1, 2));
    }

    #[test]
    fn test_hard_finds_win() {
        let cfg = RulesConfig::default().with_mandatory_capture(false);
        let state = position(WINNING_CAPTURE, Color::Black, &cfg);
        let mut ai = AiEngine::seeded(8);
        let choice = ai.choose_move_with_stats(&state, Color::Black, Difficulty::Hard, &cfg);
        let mv = choice.best_move.unwrap();
        assert_eq!(mv.captures, vec![Pos::new(4, 3)]);
        assert_eq!(choice.strategy, Strategy::AlphaBeta);
        assert_eq!(choice.score, Some(crate::search::WIN_SCORE));
        assert!(choice.nodes > 0);

        let next = apply_move(&state, &mv, &cfg);
        assert_eq!(next.result.winner(), Some(Color::Black));
    }

    #[test]
    fn test_free_function_is_legal() {
        let cfg = RulesConfig::default();
        let state = GameState::initial(&cfg);
        let legal = legal_moves(&state.board, state.turn, &cfg);
        let mv = choose_move(&state, Color::Black, Difficulty::Medium, &cfg).unwrap();
        assert!(legal.contains(&mv));
    }
}
