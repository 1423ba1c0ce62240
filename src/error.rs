//! Error types for the Dama engine
//!
//! The rules kernel itself is total: legal-move generation never fails and an
//! illegal move leaves the game state unchanged. These errors cover the edges
//! around it: parsing boards and rule files, explaining why a move was refused,
//! and replaying persisted move records.

use thiserror::Error;

use crate::board::{Color, Pos};

/// Errors building a [`Board`](crate::board::Board) from text or nested rows
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// Grid has no rows or more rows than the board supports
    #[error("unsupported board size {size}")]
    UnsupportedSize { size: usize },

    /// A row's length differs from the number of rows
    #[error("row {row} has {len} squares, expected {expected}")]
    RaggedRow {
        row: usize,
        len: usize,
        expected: usize,
    },

    /// Character that is not `.`, `b`, `B`, `r` or `R`
    #[error("unknown square symbol {symbol:?} at line {line}, column {col}")]
    UnknownSymbol { symbol: char, line: usize, col: usize },
}

/// Errors loading or checking a [`RulesConfig`](crate::rules::RulesConfig)
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("board size {size} is outside the supported range {min}..={max}")]
    BoardSize { size: u8, min: u8, max: u8 },

    #[error("malformed rules document: {0}")]
    Json(#[from] serde_json::Error),
}

/// Why a submitted move was not applied
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MoveRejection {
    #[error("game is already finished")]
    GameFinished,

    #[error("it is {expected}'s turn, not {got}'s")]
    NotYourTurn { expected: Color, got: Color },

    #[error("move {key} is not legal in this position")]
    IllegalMove { key: String },
}

/// Errors replaying a recorded game
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReplayError {
    /// The record at `ply` matches no legal move of the side to move
    #[error("move {ply} ({from} -> {to}) does not match any legal move for {player}")]
    UnmatchedRecord {
        ply: usize,
        player: Color,
        from: Pos,
        to: Pos,
    },

    /// A record was found after the game had ended
    #[error("move {ply} was recorded after the game finished")]
    AfterGameEnd { ply: usize },
}

/// Unknown difficulty name
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown difficulty {0:?} (expected easy, medium or hard)")]
pub struct DifficultyParseError(pub String);
