//! Fen parser implementation.
//!
//! <https://en.wikipedia.org/wiki/Forsyth%E2%80%93Edwards_Notation>

use std::str::FromStr;

use nom::character::complete::{one_of, satisfy};
use nom::combinator::all_consuming;
use nom::multi::fold_many1;
use nom::sequence::pair;
use nom::{Finish, IResult};

use quill_board::{Board, CastlingRights, Color, Piece, Position, Rank, Square, BOARD_SIZE};

use crate::error::{Counter, Error};
use crate::ser::MAX_COUNTER;
use crate::token::Tokenizer;

/// Separator between the six fields.
pub const FIELD_SEPARATOR: char = ' ';
/// Separator between ranks in the piece placement.
pub const RANK_SEPARATOR: char = '/';
pub const FIELD_COUNT: usize = 6;
/// Longest accepted counter field, zero padding included.
pub const MAX_COUNTER_DIGITS: usize = 2;

bitflags::bitflags! {
    /// Optional validation on top of the plain grammar.
    ///
    /// The default, [`Checks::empty`], accepts everything the grammar allows.
    #[derive(Default)]
    pub struct Checks: u8 {
        /// Reject castling fields that repeat a letter, such as `KK`.
        const DUPLICATE_CASTLING = 0x01;
        /// Require an en passant target on rank 6 with white to move, rank 3 with black.
        const EP_RANK = 0x02;
        /// Reject a fullmove counter of zero.
        const ZERO_FULLMOVE = 0x04;
    }
}

/// Split the input into its six non-empty fields.
fn split_fields(input: &str) -> Result<[&str; FIELD_COUNT], Error> {
    let mut fields = [""; FIELD_COUNT];
    let mut found = 0;

    for token in Tokenizer::new(input, FIELD_SEPARATOR).filter(|t| !t.is_empty()) {
        if let Some(field) = fields.get_mut(found) {
            *field = token.slice(input);
        }
        found += 1;
    }

    if found != FIELD_COUNT {
        return Err(Error::FieldCount { found });
    }

    Ok(fields)
}

/// Decode a single rank, `rank` being its notation number.
fn parse_rank(text: &str, rank: u8) -> Result<Rank, Error> {
    let mut cells: Rank = [None; BOARD_SIZE as usize];
    let mut files = 0u8;

    for ch in text.chars() {
        let (run, piece) = match ch.to_digit(10) {
            Some(digit @ 1..=8) => (digit as u8, None),
            Some(_) => return Err(Error::InvalidEmptyRun { rank, digit: ch }),
            None => match Piece::from_char(ch) {
                Some(piece) => (1, Some(piece)),
                None => return Err(Error::InvalidPiece { rank, ch }),
            },
        };

        if files + run > BOARD_SIZE {
            return Err(Error::RankLength {
                rank,
                files: files + run,
            });
        }

        // empty runs are already `None`
        if piece.is_some() {
            cells[files as usize] = piece;
        }
        files += run;
    }

    if files != BOARD_SIZE {
        return Err(Error::RankLength { rank, files });
    }

    Ok(cells)
}

/// Decode the piece placement field.
///
/// The first group is rank 8 and lands at the highest rank index.
pub fn parse_board(field: &str) -> Result<Board, Error> {
    let groups = Tokenizer::new(field, RANK_SEPARATOR);

    let found = groups.clone().count();
    if found != BOARD_SIZE as usize {
        return Err(Error::RankCount { found });
    }

    let mut ranks = [[None; BOARD_SIZE as usize]; BOARD_SIZE as usize];

    let notation_ranks = (1..=BOARD_SIZE).rev();

    for ((slot, token), rank) in ranks.iter_mut().rev().zip(groups).zip(notation_ranks) {
        *slot = parse_rank(token.slice(field), rank)?;
    }

    Ok(Board::from_ranks(ranks))
}

fn color_letter(input: &str) -> IResult<&str, char> {
    one_of("wb")(input)
}

/// Decode the active color field, exactly `w` or `b`.
pub fn parse_active_color(field: &str) -> Result<Color, Error> {
    let (_, letter) = all_consuming(color_letter)(field)
        .finish()
        .map_err(|_| Error::InvalidPlayer(field.to_owned()))?;

    Ok(if letter == 'w' {
        Color::White
    } else {
        Color::Black
    })
}

/// Decode the castling rights field.
///
/// Repeated letters are accepted unless [`Checks::DUPLICATE_CASTLING`] is set.
pub fn parse_castling_rights(field: &str, checks: Checks) -> Result<CastlingRights, Error> {
    let mut castling = CastlingRights::empty();

    if field == "-" {
        return Ok(castling);
    }

    for ch in field.chars() {
        let flag = CastlingRights::from_char(ch).ok_or(Error::InvalidCastling(ch))?;

        if checks.contains(Checks::DUPLICATE_CASTLING) && castling.contains(flag) {
            return Err(Error::DuplicateCastling(ch));
        }

        castling |= flag;
    }

    Ok(castling)
}

fn ep_square(input: &str) -> IResult<&str, (char, char)> {
    pair(one_of("abcdefgh"), one_of("36"))(input)
}

/// Decode the en passant target field, `-` or a square on rank 3 or 6.
pub fn parse_ep_target(field: &str) -> Result<Option<Square>, Error> {
    if field == "-" {
        return Ok(None);
    }

    let invalid = || Error::InvalidEnPassant(field.to_owned());

    all_consuming(ep_square)(field).finish().map_err(|_| invalid())?;
    Square::from_str(field).map(Some).map_err(|()| invalid())
}

/// Check that the en passant target is on the rank a pawn of the side not to move just skipped.
pub fn check_ep_rank(square: Square, active: Color) -> Result<(), Error> {
    let expected = match active {
        Color::White => 5,
        Color::Black => 2,
    };

    if square.rank() != expected {
        return Err(Error::EnPassantMismatch { square, active });
    }

    Ok(())
}

/// Digits folded into a saturating `u64`, so overlong fields still report a value.
fn decimal(input: &str) -> IResult<&str, u64> {
    fold_many1(
        satisfy(|c| c.is_ascii_digit()),
        || 0u64,
        |n, c| {
            n.saturating_mul(10)
                .saturating_add(u64::from(c as u8 - b'0'))
        },
    )(input)
}

/// Decode a numeric field of at most [`MAX_COUNTER_DIGITS`] digits.
///
/// Values above [`MAX_COUNTER`] are `CounterOutOfRange`; longer fields with a small value, such
/// as `007`, are `InvalidNumeric`.
pub fn parse_counter(text: &str, field: Counter) -> Result<u8, Error> {
    let invalid = || Error::InvalidNumeric {
        field,
        text: text.to_owned(),
    };

    let (_, value) = all_consuming(decimal)(text)
        .finish()
        .map_err(|_| invalid())?;

    let counter = u8::try_from(value)
        .ok()
        .filter(|&n| n <= MAX_COUNTER)
        .ok_or(Error::CounterOutOfRange { field, value })?;

    if text.len() > MAX_COUNTER_DIGITS {
        return Err(invalid());
    }

    Ok(counter)
}

/// Parse a chessboard state from the provided fen string with the default checks.
#[inline]
pub fn parse(input: &str) -> Result<Position, Error> {
    parse_with(input, Checks::empty())
}

/// Parse a chessboard state from the provided fen string.
///
/// Surrounding whitespace is ignored. Fields are separated by one or more spaces.
pub fn parse_with(input: &str, checks: Checks) -> Result<Position, Error> {
    let result = parse_fields(input.trim(), checks);

    if let Err(err) = &result {
        log::debug!("rejected fen {input:?}: {err}");
    }

    result
}

fn parse_fields(input: &str, checks: Checks) -> Result<Position, Error> {
    let [board, active_color, castling, ep_target, halfmove_clock, fullmove_counter] =
        split_fields(input)?;

    let board = parse_board(board)?;
    log::trace!("piece placement decoded: {} pieces", board.pieces().count());

    let active_color = parse_active_color(active_color)?;
    let castling = parse_castling_rights(castling, checks)?;
    let ep_target = parse_ep_target(ep_target)?;

    if checks.contains(Checks::EP_RANK) {
        if let Some(square) = ep_target {
            check_ep_rank(square, active_color)?;
        }
    }

    let halfmove_clock = parse_counter(halfmove_clock, Counter::Halfmove)?;
    let fullmove_counter = parse_counter(fullmove_counter, Counter::Fullmove)?;

    if checks.contains(Checks::ZERO_FULLMOVE) && fullmove_counter == 0 {
        return Err(Error::CounterOutOfRange {
            field: Counter::Fullmove,
            value: 0,
        });
    }

    log::trace!(
        "fen fields decoded: {active_color:?} {castling} {ep_target:?} {halfmove_clock} {fullmove_counter}"
    );

    Ok(Position {
        board,
        active_color,
        castling,
        ep_target,
        halfmove_clock,
        fullmove_counter,
    })
}
