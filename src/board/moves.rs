//! One full turn for one piece

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{Color, Pos};

/// A complete move for a single turn.
///
/// - `path` holds the origin and each landing square in order, so
///   `path[0] == from` and `path[last] == to`.
/// - `captures` are the opponent pieces removed, in the order taken.
///
/// A move is self-contained: it can be replayed without re-deriving it from the board.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub player: Color,
    pub from: Pos,
    pub to: Pos,
    pub path: Vec<Pos>,
    pub captures: Vec<Pos>,
    pub promotes: bool,
}

impl Move {
    /// Single non-capturing step or slide
    pub fn quiet(player: Color, from: Pos, to: Pos, promotes: bool) -> Self {
        Self {
            player,
            from,
            to,
            path: vec![from, to],
            captures: Vec::new(),
            promotes,
        }
    }

    /// Capture sequence from the first square of `path` to its last.
    ///
    /// `path` must hold at least the origin.
    pub fn capture(player: Color, path: Vec<Pos>, captures: Vec<Pos>, promotes: bool) -> Self {
        debug_assert!(!path.is_empty(), "capture path needs an origin");
        let from = path.first().copied().unwrap_or(Pos::new(0, 0));
        let to = path.last().copied().unwrap_or(from);
        Self {
            player,
            from,
            to,
            path,
            captures,
            promotes,
        }
    }

    #[inline]
    pub fn is_capture(&self) -> bool {
        !self.captures.is_empty()
    }

    /// Canonical signature: player, path, captures and promotion flag.
    ///
    /// Two moves with the same signature are the same move. Distinct capture paths
    /// that land on the same square have distinct signatures.
    ///
    /// ```
    /// use dama::board::{Color, Move, Pos};
    ///
    /// let m = Move::quiet(Color::Black, Pos::new(2, 1), Pos::new(3, 2), false);
    /// assert_eq!(m.key(), "black:2,1->3,2::-");
    /// ```
    pub fn key(&self) -> String {
        let path = join(&self.path, "->");
        let caps = join(&self.captures, "|");
        let promo = if self.promotes { "P" } else { "-" };
        format!("{}:{path}:{caps}:{promo}", self.player)
    }
}

fn join(positions: &[Pos], sep: &str) -> String {
    positions
        .iter()
        .map(Pos::to_string)
        .collect::<Vec<_>>()
        .join(sep)
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sep = if self.is_capture() { " x " } else { " - " };
        let path = self
            .path
            .iter()
            .map(|p| format!("({p})"))
            .collect::<Vec<_>>()
            .join(sep);
        write!(f, "{path}")?;
        if self.promotes {
            write!(f, " =K")?;
        }
        Ok(())
    }
}
