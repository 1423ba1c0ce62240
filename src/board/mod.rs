//! Board representation for Dama

pub mod board;
pub mod moves;


use serde::{Deserialize, Serialize};

// Re-exports
pub use board::{Board, Square, MAX_BOARD_SIZE};
pub use moves::Move;

/// Default board size (8x8)
pub const DEFAULT_BOARD_SIZE: u8 = 8;

/// Diagonal step as (row delta, col delta)
pub type Dir = (i8, i8);

/// The four diagonals, in enumeration order
pub const DIAGONALS: [Dir; 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

/// Side colors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Red,
    Black,
}

impl Color {
    /// Get opponent color
    #[inline]
    pub fn opponent(self) -> Color {
        match self {
            Color::Red => Color::Black,
            Color::Black => Color::Red,
        }
    }

    /// Row delta of a forward step. Row 0 is the top: black moves down, red moves up.
    #[inline]
    pub fn forward(self) -> i8 {
        match self {
            Color::Black => 1,
            Color::Red => -1,
        }
    }

    #[inline]
    pub fn as_str(self) -> &'static str {
        match self {
            Color::Red => "red",
            Color::Black => "black",
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}

/// Piece rank
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PieceKind {
    Man,
    King,
}

/// A piece on the board. Promotion produces a new value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    pub color: Color,
    pub kind: PieceKind,
}

impl Piece {
    #[inline]
    pub const fn man(color: Color) -> Self {
        Self { color, kind: PieceKind::Man }
    }

    #[inline]
    pub const fn king(color: Color) -> Self {
        Self { color, kind: PieceKind::King }
    }

    #[inline]
    pub fn is_king(self) -> bool {
        self.kind == PieceKind::King
    }

    /// Same color, king rank
    #[inline]
    pub fn crowned(self) -> Self {
        Self::king(self.color)
    }

    /// Single-character notation: `b`/`B` black man/king, `r`/`R` red man/king
    pub fn symbol(self) -> char {
        match (self.color, self.kind) {
            (Color::Black, PieceKind::Man) => 'b',
            (Color::Black, PieceKind::King) => 'B',
            (Color::Red, PieceKind::Man) => 'r',
            (Color::Red, PieceKind::King) => 'R',
        }
    }

    pub fn from_symbol(ch: char) -> Option<Self> {
        match ch {
            'b' => Some(Self::man(Color::Black)),
            'B' => Some(Self::king(Color::Black)),
            'r' => Some(Self::man(Color::Red)),
            'R' => Some(Self::king(Color::Red)),
            _ => None,
        }
    }
}

/// Position on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pos {
    pub row: u8,
    pub col: u8,
}

impl Pos {
    #[inline]
    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// Standard checkers coloring: dark squares are where (row + col) is odd.
    #[inline]
    pub fn is_dark(self) -> bool {
        (self.row ^ self.col) & 1 == 1
    }

    /// Position `steps` squares along `dir`, or `None` when it leaves a `size`-wide board.
    #[inline]
    pub fn offset(self, dir: Dir, steps: i32, size: u8) -> Option<Pos> {
        let row = i32::from(self.row) + i32::from(dir.0) * steps;
        let col = i32::from(self.col) + i32::from(dir.1) * steps;
        if Self::is_valid(row, col, size) {
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let pos = Pos::new(row as u8, col as u8);
            Some(pos)
        } else {
            None
        }
    }

    #[inline]
    pub fn is_valid(row: i32, col: i32, size: u8) -> bool {
        let size = i32::from(size);
        row >= 0 && row < size && col >= 0 && col < size
    }
}

impl PartialOrd for Pos {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Pos {
    // Row-major, the board scan order
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        (self.row, self.col).cmp(&(other.row, other.col))
    }
}

impl std::fmt::Display for Pos {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{},{}", self.row, self.col)
    }
}

/// The two forward diagonals of a man
#[inline]
pub fn forward_directions(color: Color) -> [Dir; 2] {
    let dr = color.forward();
    [(dr, -1), (dr, 1)]
}

/// Row on which a man of `color` is crowned
#[inline]
pub fn promotion_row(color: Color, size: u8) -> u8 {
    match color {
        Color::Black => size.saturating_sub(1),
        Color::Red => 0,
    }
}
