//! Immediate tactical scoring of a single move

use rand::Rng;

use crate::board::Move;

/// Score per captured piece
pub const CAPTURE_WEIGHT: f64 = 10.0;

/// Bonus for a promoting move
pub const PROMOTION_BONUS: f64 = 4.0;

/// Upper bound of the random jitter added by [`score_immediate`]
pub const JITTER: f64 = 0.01;

/// Captures first, promotion second
#[inline]
pub fn tactical_value(mv: &Move) -> f64 {
    let promotion = if mv.promotes { PROMOTION_BONUS } else { 0.0 };
    mv.captures.len() as f64 * CAPTURE_WEIGHT + promotion
}

/// [`tactical_value`] plus a jitter in `[0, JITTER)` so equal moves do not
/// always sort the same way.
#[inline]
pub fn score_immediate<R: Rng + ?Sized>(mv: &Move, rng: &mut R) -> f64 {
    tactical_value(mv) + rng.random::<f64>() * JITTER
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Color, Pos};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_tactical_value() {
        let quiet = Move::quiet(Color::Red, Pos::new(5, 0), Pos::new(4, 1), false);
        let crowning = Move::quiet(Color::Red, Pos::new(1, 0), Pos::new(0, 1), true);
        let double = Move::capture(
            Color::Red,
            vec![Pos::new(6, 1), Pos::new(4, 3), Pos::new(2, 1)],
            vec![Pos::new(5, 2), Pos::new(3, 2)],
            false,
        );
        assert_eq!(tactical_value(&quiet), 0.0);
        assert_eq!(tactical_value(&crowning), 4.0);
        assert_eq!(tactical_value(&double), 20.0);
    }

    #[test]
    fn test_jitter_is_bounded() {
        let mut rng = StdRng::seed_from_u64(7);
        let single = Move::capture(
            Color::Black,
            vec![Pos::new(2, 1), Pos::new(4, 3)],
            vec![Pos::new(3, 2)],
            false,
        );
        for _ in 0..100 {
            let score = score_immediate(&single, &mut rng);
            assert!((10.0..10.0 + JITTER).contains(&score));
        }
    }
}
