//! Fen serializer implementation.

use std::fmt::Write;

use quill_board::{Board, Position};

use crate::de::{FIELD_SEPARATOR, RANK_SEPARATOR};
use crate::error::{Counter, Error};

/// Largest counter value accepted by both parser and serializer.
pub const MAX_COUNTER: u8 = 99;

/// Upper bound on the length of a serialized position.
const MAX_LEN: usize = (64 + 7) + 1 + 4 + 2 + 2 * 2 + 5;

fn check_counter(value: u8, field: Counter) -> Result<(), Error> {
    if value > MAX_COUNTER {
        log::debug!("refusing to serialize {field} {value}");
        return Err(Error::CounterOutOfRange {
            field,
            value: value.into(),
        });
    }

    Ok(())
}

fn write_board<W: Write>(board: &Board, out: &mut W) -> Result<(), Error> {
    for (n, rank) in board.ranks().rev().enumerate() {
        if n > 0 {
            out.write_char(RANK_SEPARATOR)?;
        }

        let mut empty = 0u8;

        for cell in rank {
            match cell {
                Some(piece) => {
                    if empty > 0 {
                        write!(out, "{empty}")?;
                        empty = 0;
                    }
                    out.write_char(piece.as_char())?;
                }
                None => empty += 1,
            }
        }

        if empty > 0 {
            write!(out, "{empty}")?;
        }
    }

    Ok(())
}

/// Write the fen string for a position.
///
/// Counters are validated before anything is written, so `out` is untouched on error.
pub fn write<W: Write>(position: &Position, out: &mut W) -> Result<(), Error> {
    check_counter(position.halfmove_clock, Counter::Halfmove)?;
    check_counter(position.fullmove_counter, Counter::Fullmove)?;

    write_board(&position.board, out)?;

    let sep = FIELD_SEPARATOR;
    write!(out, "{sep}{}{sep}{}{sep}", position.active_color.as_char(), position.castling)?;

    match position.ep_target {
        Some(square) => write!(out, "{square}")?,
        None => out.write_char('-')?,
    }

    write!(
        out,
        "{sep}{}{sep}{}",
        position.halfmove_clock, position.fullmove_counter
    )?;

    Ok(())
}

/// Serialize a position into a fen string.
pub fn to_string(position: &Position) -> Result<String, Error> {
    let mut out = String::with_capacity(MAX_LEN);
    write(position, &mut out)?;
    Ok(out)
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use quill_board::{CastlingRights, Color, Piece, Square};

    use super::*;

    #[test]
    fn default_position() {
        assert_eq!(
            to_string(&Position::default()).unwrap(),
            "8/8/8/8/8/8/8/8 w - - 0 0"
        );
    }

    #[test]
    fn starting_position() {
        assert_eq!(
            to_string(&Position::starting()).unwrap(),
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1"
        );
    }

    #[test]
    fn hand_built_position() {
        let mut position = Position::default();
        position.board.set(Square::from_str("e4").unwrap(), Piece::from_char('P'));
        position.board.set(Square::from_str("a8").unwrap(), Piece::from_char('k'));
        position.board.set(Square::from_str("h1").unwrap(), Piece::from_char('K'));
        position.active_color = Color::Black;
        position.castling = CastlingRights::BLACK_OOO | CastlingRights::WHITE_OO;
        position.ep_target = Square::from_str("e3").ok();
        position.halfmove_clock = 12;
        position.fullmove_counter = 34;

        assert_eq!(
            to_string(&position).unwrap(),
            "k7/8/8/8/4P3/8/8/7K b Kq e3 12 34"
        );
    }

    #[test]
    fn counter_bounds() {
        let mut position = Position::starting();
        position.halfmove_clock = 99;
        position.fullmove_counter = 99;
        assert!(to_string(&position).unwrap().ends_with(" 99 99"));

        position.halfmove_clock = 100;
        assert_eq!(
            to_string(&position),
            Err(Error::CounterOutOfRange {
                field: Counter::Halfmove,
                value: 100
            })
        );

        position.halfmove_clock = 0;
        position.fullmove_counter = u8::MAX;
        assert_eq!(
            to_string(&position),
            Err(Error::CounterOutOfRange {
                field: Counter::Fullmove,
                value: 255
            })
        );
    }

    #[test]
    fn error_leaves_output_untouched() {
        let mut position = Position::default();
        position.fullmove_counter = 200;

        let mut out = String::from("prefix");
        assert!(write(&position, &mut out).is_err());
        assert_eq!(out, "prefix");
    }

    #[test]
    fn fits_capacity() {
        let mut position = Position::default();
        for index in 0..64u8 {
            let square = Square::at(index / 8, index % 8).unwrap();
            position.board.set(square, Piece::from_char('q'));
        }
        position.castling = CastlingRights::all();
        position.ep_target = Square::from_str("a6").ok();
        position.halfmove_clock = 99;
        position.fullmove_counter = 99;

        let out = to_string(&position).unwrap();
        assert!(out.len() <= MAX_LEN);
    }
}
