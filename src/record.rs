//! Persisted move records and game replay
//!
//! A stored game is a list of [`MoveRecord`]s: origin, destination and
//! (optionally) the captured squares. That is enough to rebuild every full
//! [`Move`] by matching against the legal set at each ply.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::board::{Move, Pos};
use crate::engine::{play, GameState};
use crate::error::ReplayError;
use crate::rules::{legal_moves, RulesConfig};

/// Minimal persisted form of a move
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MoveRecord {
    pub from: Pos,
    pub to: Pos,
    /// Captured squares in the order taken; `None` when not stored
    #[serde(default)]
    pub captures: Option<Vec<Pos>>,
}

impl MoveRecord {
    pub fn new(from: Pos, to: Pos) -> Self {
        Self {
            from,
            to,
            captures: None,
        }
    }

    #[must_use]
    pub fn with_captures(mut self, captures: Vec<Pos>) -> Self {
        self.captures = Some(captures);
        self
    }
}

impl From<&Move> for MoveRecord {
    fn from(mv: &Move) -> Self {
        Self {
            from: mv.from,
            to: mv.to,
            captures: Some(mv.captures.clone()),
        }
    }
}

/// Rebuild the full move a record describes.
///
/// Exact `from`/`to`/`captures` matches win, the lowest signature breaking ties.
/// Otherwise falls back to [`pick_move_from_to`].
pub fn resolve_move<'a>(legal: &'a [Move], record: &MoveRecord) -> Option<&'a Move> {
    let recorded = record.captures.as_deref().unwrap_or(&[]);
    let exact = legal
        .iter()
        .filter(|m| m.from == record.from && m.to == record.to && m.captures == recorded)
        .min_by_key(|m| m.key());
    exact.or_else(|| pick_move_from_to(legal, record.from, record.to))
}

/// Move from `from` to `to`, preferring the most captures, then promotion,
/// then the lowest signature.
///
/// Flying kings can reach one square along several capture paths; this picks
/// the most forcing one.
pub fn pick_move_from_to(legal: &[Move], from: Pos, to: Pos) -> Option<&Move> {
    legal
        .iter()
        .filter(|m| m.from == from && m.to == to)
        .min_by(|a, b| preference(a, b))
}

fn preference(a: &Move, b: &Move) -> Ordering {
    b.captures
        .len()
        .cmp(&a.captures.len())
        .then(b.promotes.cmp(&a.promotes))
        .then_with(|| a.key().cmp(&b.key()))
}

/// Play `records` from the initial position.
///
/// Returns every state including the initial one, so `states.len() == records.len() + 1`.
pub fn replay(cfg: &RulesConfig, records: &[MoveRecord]) -> Result<Vec<GameState>, ReplayError> {
    let mut states = Vec::with_capacity(records.len() + 1);
    let mut state = GameState::initial(cfg);

    for (ply, record) in records.iter().enumerate() {
        if state.is_finished() {
            return Err(ReplayError::AfterGameEnd { ply });
        }
        let legal = legal_moves(&state.board, state.turn, cfg);
        let mv = resolve_move(&legal, record).ok_or(ReplayError::UnmatchedRecord {
            ply,
            player: state.turn,
            from: record.from,
            to: record.to,
        })?;
        let next = play(&state, mv, cfg);
        states.push(std::mem::replace(&mut state, next));
    }

    states.push(state);
    Ok(states)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Board, Color};

    fn flying_king_board() -> Board {
        // Red king on (7,0); black men on (5,2) and (2,5)
        "
        ........
        ........
        .....b..
        ........
        ........
        ..b.....
        ........
        R.......
        "
        .parse()
        .unwrap()
    }

    #[test]
    fn test_pick_prefers_more_captures() {
        let single = Move::capture(
            Color::Red,
            vec![Pos::new(7, 0), Pos::new(1, 6)],
            vec![Pos::new(4, 3)],
            false,
        );
        let double = Move::capture(
            Color::Red,
            vec![Pos::new(7, 0), Pos::new(4, 3), Pos::new(1, 6)],
            vec![Pos::new(5, 2), Pos::new(2, 5)],
            false,
        );
        let legal = vec![single.clone(), double.clone()];
        assert_eq!(
            pick_move_from_to(&legal, Pos::new(7, 0), Pos::new(1, 6)),
            Some(&double)
        );
        assert_eq!(pick_move_from_to(&legal, Pos::new(7, 0), Pos::new(0, 7)), None);

        // An exact capture list beats the preference order
        let record = MoveRecord::new(Pos::new(7, 0), Pos::new(1, 6)).with_captures(vec![Pos::new(4, 3)]);
        assert_eq!(resolve_move(&legal, &record), Some(&single));
    }

    #[test]
    fn test_pick_prefers_promotion() {
        let plain = Move::quiet(Color::Black, Pos::new(6, 1), Pos::new(7, 2), false);
        let crowned = Move::quiet(Color::Black, Pos::new(6, 1), Pos::new(7, 2), true);
        let legal = vec![plain, crowned.clone()];
        assert_eq!(pick_move_from_to(&legal, Pos::new(6, 1), Pos::new(7, 2)), Some(&crowned));
    }

    #[test]
    fn test_resolve_falls_back_on_stale_captures() {
        let cfg = RulesConfig::default();
        let legal = legal_moves(&flying_king_board(), Color::Red, &cfg);
        assert!(!legal.is_empty());
        let target = &legal[0];

        // Captures recorded in a different order still resolve by from/to
        let mut caps = target.captures.clone();
        caps.reverse();
        caps.push(Pos::new(0, 0));
        let record = MoveRecord::new(target.from, target.to).with_captures(caps);
        let resolved = resolve_move(&legal, &record).unwrap();
        assert_eq!((resolved.from, resolved.to), (target.from, target.to));
    }

    #[test]
    fn test_exact_ties_take_lowest_signature() {
        let cfg = RulesConfig::default();
        let legal = legal_moves(&flying_king_board(), Color::Red, &cfg);
        // Two landings after the first jump, two after the second
        assert_eq!(legal.len(), 4);

        for mv in &legal {
            let resolved = resolve_move(&legal, &MoveRecord::from(mv)).unwrap();
            assert_eq!(
                (resolved.from, resolved.to, &resolved.captures),
                (mv.from, mv.to, &mv.captures)
            );
            assert!(resolved.key() <= mv.key());
        }

        let record = MoveRecord::new(Pos::new(7, 0), Pos::new(1, 6))
            .with_captures(vec![Pos::new(5, 2), Pos::new(2, 5)]);
        let resolved = resolve_move(&legal, &record).unwrap();
        assert_eq!(resolved.path[1], Pos::new(3, 4));
    }

    #[test]
    fn test_replay_opening() {
        let cfg = RulesConfig::default();
        let records = vec![
            MoveRecord::new(Pos::new(2, 1), Pos::new(3, 2)),
            MoveRecord::new(Pos::new(5, 4), Pos::new(4, 3)),
        ];
        let states = replay(&cfg, &records).unwrap();
        assert_eq!(states.len(), 3);
        assert_eq!(states[0], GameState::initial(&cfg));
        assert_eq!(states[1].turn, Color::Red);
        assert_eq!(states[2].turn, Color::Black);
        assert!(states[2].board.get(Pos::new(4, 3)).is_some());
    }

    #[test]
    fn test_replay_stops_at_unmatched_record() {
        let cfg = RulesConfig::default();
        let records = vec![
            MoveRecord::new(Pos::new(2, 1), Pos::new(3, 2)),
            // Red cannot move a black piece
            MoveRecord::new(Pos::new(2, 3), Pos::new(3, 4)),
        ];
        assert_eq!(
            replay(&cfg, &records),
            Err(ReplayError::UnmatchedRecord {
                ply: 1,
                player: Color::Red,
                from: Pos::new(2, 3),
                to: Pos::new(3, 4),
            })
        );
    }

    #[test]
    fn test_record_json_shape() {
        let record: MoveRecord =
            serde_json::from_str(r#"{"from": {"row": 2, "col": 1}, "to": {"row": 3, "col": 2}}"#).unwrap();
        assert_eq!(record, MoveRecord::new(Pos::new(2, 1), Pos::new(3, 2)));
    }
}
