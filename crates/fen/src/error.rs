//! Errors raised while reading or writing fen strings.

use quill_board::{Color, Square};

/// One of the two numeric fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display)]
pub enum Counter {
    #[strum(serialize = "halfmove clock")]
    Halfmove,
    #[strum(serialize = "fullmove counter")]
    Fullmove,
}

/// Ranks in board errors are notation ranks, `1..=8`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The string did not split into exactly six non-empty fields.
    #[error("expected 6 fields, found {found}")]
    FieldCount { found: usize },
    /// A character in the piece placement is neither a piece letter nor a digit.
    #[error("invalid piece character {ch:?} on rank {rank}")]
    InvalidPiece { rank: u8, ch: char },
    /// A run of empty squares outside `1..=8`.
    #[error("invalid empty run {digit:?} on rank {rank}")]
    InvalidEmptyRun { rank: u8, digit: char },
    /// A rank that does not cover exactly eight files.
    #[error("rank {rank} covers {files} files, expected 8")]
    RankLength { rank: u8, files: u8 },
    /// The piece placement does not hold exactly eight ranks.
    #[error("expected 8 ranks, found {found}")]
    RankCount { found: usize },
    #[error("invalid active color {0:?}, expected `w` or `b`")]
    InvalidPlayer(String),
    #[error("invalid castling character {0:?}")]
    InvalidCastling(char),
    /// Only raised with [`Checks::DUPLICATE_CASTLING`](crate::Checks::DUPLICATE_CASTLING).
    #[error("castling character {0:?} appears more than once")]
    DuplicateCastling(char),
    #[error("invalid en passant target {0:?}")]
    InvalidEnPassant(String),
    /// Only raised with [`Checks::EP_RANK`](crate::Checks::EP_RANK).
    #[error("en passant target {square} is not reachable with {active:?} to move")]
    EnPassantMismatch { square: Square, active: Color },
    #[error("invalid {field} {text:?}, expected decimal digits")]
    InvalidNumeric { field: Counter, text: String },
    #[error("{field} {value} is out of range")]
    CounterOutOfRange { field: Counter, value: u64 },
    /// The output sink passed to [`ser::write`](crate::ser::write) failed.
    #[error("formatter error")]
    Fmt(#[from] std::fmt::Error),
}
