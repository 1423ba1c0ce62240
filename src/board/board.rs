//! Square grid with text notation and nested-array serialization

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::{Color, Piece, Pos};
use crate::error::BoardError;

/// Largest grid a board can hold, since coordinates are `u8`
pub const MAX_BOARD_SIZE: u8 = u8::MAX;

/// Number of rows each side starts with
const HOME_ROWS: u8 = 3;

/// Either empty or exactly one piece
pub type Square = Option<Piece>;

/// Square game board, row-major.
///
/// Serializes as a nested array of rows (`null` or `{color, kind}` per square),
/// which is the shape callers persist.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "Vec<Vec<Square>>", try_from = "Vec<Vec<Square>>")]
pub struct Board {
    size: u8,
    squares: Vec<Square>,
}

impl Board {
    /// All squares empty
    pub fn empty(size: u8) -> Self {
        let cells = usize::from(size) * usize::from(size);
        Self {
            size,
            squares: vec![None; cells],
        }
    }

    /// Standard start: three rows of men per side on dark squares.
    /// Black at the top (rows 0..3), red at the bottom.
    pub fn initial(size: u8) -> Self {
        let mut board = Self::empty(size);
        for row in 0..HOME_ROWS.min(size) {
            for col in 0..size {
                let pos = Pos::new(row, col);
                if pos.is_dark() {
                    board.place(pos, Piece::man(Color::Black));
                }
            }
        }
        for row in size.saturating_sub(HOME_ROWS)..size {
            for col in 0..size {
                let pos = Pos::new(row, col);
                if pos.is_dark() {
                    board.place(pos, Piece::man(Color::Red));
                }
            }
        }
        board
    }

    /// Build from explicit rows. Rows must form a square grid.
    pub fn from_rows(rows: Vec<Vec<Square>>) -> Result<Self, BoardError> {
        let height = rows.len();
        if height == 0 || height > usize::from(MAX_BOARD_SIZE) {
            return Err(BoardError::UnsupportedSize { size: height });
        }
        let mut squares = Vec::with_capacity(height * height);
        for (row, cells) in rows.into_iter().enumerate() {
            if cells.len() != height {
                return Err(BoardError::RaggedRow {
                    row,
                    len: cells.len(),
                    expected: height,
                });
            }
            squares.extend(cells);
        }
        #[allow(clippy::cast_possible_truncation)]
        let size = height as u8;
        Ok(Self { size, squares })
    }

    /// Copy out as nested rows
    pub fn to_rows(&self) -> Vec<Vec<Square>> {
        self.squares
            .chunks(usize::from(self.size).max(1))
            .map(<[Square]>::to_vec)
            .collect()
    }

    #[inline]
    pub fn size(&self) -> u8 {
        self.size
    }

    #[inline]
    pub fn contains(&self, pos: Pos) -> bool {
        pos.row < self.size && pos.col < self.size
    }

    #[inline]
    fn index(&self, pos: Pos) -> usize {
        usize::from(pos.row) * usize::from(self.size) + usize::from(pos.col)
    }

    /// Piece at position; off-board positions read as empty
    #[inline]
    pub fn get(&self, pos: Pos) -> Square {
        if self.contains(pos) {
            self.squares[self.index(pos)]
        } else {
            None
        }
    }

    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        self.get(pos).is_none()
    }

    /// Put a piece on a square, replacing whatever was there.
    /// Off-board positions are ignored.
    #[inline]
    pub fn place(&mut self, pos: Pos, piece: Piece) {
        if self.contains(pos) {
            let idx = self.index(pos);
            self.squares[idx] = Some(piece);
        }
    }

    /// Clear a square, returning what was on it
    #[inline]
    pub fn remove(&mut self, pos: Pos) -> Square {
        if self.contains(pos) {
            let idx = self.index(pos);
            self.squares[idx].take()
        } else {
            None
        }
    }

    /// Occupied squares in row-major order
    pub fn pieces(&self) -> impl Iterator<Item = (Pos, Piece)> + '_ {
        let size = usize::from(self.size);
        self.squares.iter().enumerate().filter_map(move |(idx, sq)| {
            #[allow(clippy::cast_possible_truncation)]
            let pos = Pos::new((idx / size) as u8, (idx % size) as u8);
            sq.map(|piece| (pos, piece))
        })
    }

    /// Occupied squares of one color in row-major order
    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = (Pos, Piece)> + '_ {
        self.pieces().filter(move |(_, piece)| piece.color == color)
    }

    /// Total pieces on board
    #[inline]
    pub fn piece_count(&self) -> usize {
        self.squares.iter().filter(|sq| sq.is_some()).count()
    }
}

impl From<Board> for Vec<Vec<Square>> {
    fn from(board: Board) -> Self {
        board.to_rows()
    }
}

impl TryFrom<Vec<Vec<Square>>> for Board {
    type Error = BoardError;

    fn try_from(rows: Vec<Vec<Square>>) -> Result<Self, Self::Error> {
        Board::from_rows(rows)
    }
}

impl FromStr for Board {
    type Err = BoardError;

    /// One row per line: `.` empty, `b`/`B` black man/king, `r`/`R` red man/king.
    /// Blank lines and whitespace inside a row are ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut rows = Vec::new();
        for (line_no, line) in s.lines().enumerate() {
            let mut row = Vec::new();
            for (col, ch) in line.chars().filter(|c| !c.is_whitespace()).enumerate() {
                let square = match ch {
                    '.' => None,
                    other => Some(Piece::from_symbol(other).ok_or(BoardError::UnknownSymbol {
                        symbol: other,
                        line: line_no + 1,
                        col,
                    })?),
                };
                row.push(square);
            }
            if !row.is_empty() {
                rows.push(row);
            }
        }
        Board::from_rows(rows)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.squares.chunks(usize::from(self.size).max(1)) {
            let line: String = row
                .iter()
                .map(|sq| sq.map_or('.', Piece::symbol))
                .collect();
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}
