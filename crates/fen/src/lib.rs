//! Fen de/serialization utilities.

use quill_board::Position;

pub mod de;
pub mod error;
pub mod ser;
pub mod token;

pub use de::Checks;
pub use error::{Counter, Error};

/// Parse a position from the given fen string.
#[inline]
pub fn from_str(s: &str) -> Result<Position, Error> {
    de::parse(s)
}

/// Parse a position from the given fen string, applying extra `checks`.
#[inline]
pub fn from_str_with(s: &str, checks: Checks) -> Result<Position, Error> {
    de::parse_with(s, checks)
}

/// Serialize a position into a fen string.
#[inline]
pub fn to_string(position: &Position) -> Result<String, Error> {
    ser::to_string(position)
}
