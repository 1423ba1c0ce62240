//! Root move ordering

use rand::Rng;

use crate::board::Move;
use crate::eval::score_immediate;

/// A move with its immediate tactical score
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredMove {
    pub mv: Move,
    pub score: f64,
}

/// Score every move with [`score_immediate`] and sort best first.
///
/// The sort is stable, so moves whose scores tie keep generation order.
pub fn order_moves<R: Rng + ?Sized>(moves: Vec<Move>, rng: &mut R) -> Vec<ScoredMove> {
    let mut scored: Vec<ScoredMove> = moves
        .into_iter()
        .map(|mv| {
            let score = score_immediate(&mv, rng);
            ScoredMove { mv, score }
        })
        .collect();
    scored.sort_by(|a, b| b.score.total_cmp(&a.score));
    scored
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Color, Pos};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_captures_then_promotions_first() {
        let mut rng = StdRng::seed_from_u64(1);
        let quiet = Move::quiet(Color::Black, Pos::new(2, 1), Pos::new(3, 2), false);
        let crowning = Move::quiet(Color::Black, Pos::new(6, 1), Pos::new(7, 2), true);
        let capture = Move::capture(
            Color::Black,
            vec![Pos::new(2, 3), Pos::new(4, 5)],
            vec![Pos::new(3, 4)],
            false,
        );

        let ordered = order_moves(vec![quiet.clone(), crowning.clone(), capture.clone()], &mut rng);
        let moves: Vec<_> = ordered.iter().map(|s| &s.mv).collect();
        assert_eq!(moves, vec![&capture, &crowning, &quiet]);
        assert!(ordered.windows(2).all(|w| w[0].score >= w[1].score));
    }

    #[test]
    fn test_empty() {
        let mut rng = StdRng::seed_from_u64(1);
        assert!(order_moves(Vec::new(), &mut rng).is_empty());
    }
}
