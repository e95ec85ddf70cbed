//! The full game position.

use std::fmt::Display;

use crate::{Board, Color, Square};

bitflags::bitflags! {
    /// Player castling availability.
    #[derive(Default)]
    pub struct CastlingRights: u8 {
        /// White kingside.
        const WHITE_OO = 0x01;
        /// White queenside.
        const WHITE_OOO = 0x02;
        /// Black kingside.
        const BLACK_OO = 0x04;
        /// Black queenside.
        const BLACK_OOO = 0x08;
    }
}

impl CastlingRights {
    /// Flags paired with their notation letters, in canonical order.
    pub const LETTERS: [(Self, char); 4] = [
        (Self::WHITE_OO, 'K'),
        (Self::WHITE_OOO, 'Q'),
        (Self::BLACK_OO, 'k'),
        (Self::BLACK_OOO, 'q'),
    ];

    /// Flag for a single notation letter.
    #[inline]
    pub fn from_char(c: char) -> Option<Self> {
        Self::LETTERS
            .iter()
            .find_map(|&(flag, letter)| (letter == c).then_some(flag))
    }
}

impl Display for CastlingRights {
    /// Format as `KQkq` order, or `-` if no side can castle.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_empty() {
            return write!(f, "-");
        }

        for (flag, letter) in Self::LETTERS {
            if self.contains(flag) {
                write!(f, "{letter}")?;
            }
        }

        Ok(())
    }
}

/// Full chessboard state.
///
/// [`Position::default`] is an empty board with white to move, no castling rights, no en passant
/// target and both counters at zero.
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash)]
pub struct Position {
    /// Piece positions.
    pub board: Board,
    /// Whose turn it is to move.
    pub active_color: Color,
    /// Castling rights flags.
    pub castling: CastlingRights,
    /// En passant target square.
    pub ep_target: Option<Square>,
    /// Half-move (ply) clock.
    ///
    /// A half-move is a single move made by a single player. This counts the number of half-moves
    /// since the last capture or pawn move, and is used for the 50-move rule.
    pub halfmove_clock: u8,
    /// Full-move counter.
    ///
    /// A full-move consists of two half-moves, one by white and one by black. This counts the total
    /// number of moves since the game began. It starts at 1 and increments after black's move.
    pub fullmove_counter: u8,
}

impl Position {
    pub fn starting() -> Self {
        Position {
            board: Board::starting_position(),
            active_color: Color::White,
            castling: CastlingRights::all(),
            ep_target: None,
            halfmove_clock: 0,
            fullmove_counter: 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_position() {
        let position = Position::default();
        assert!(position.board.is_empty());
        assert_eq!(position.active_color, Color::White);
        assert!(position.castling.is_empty());
        assert_eq!(position.ep_target, None);
        assert_eq!((position.halfmove_clock, position.fullmove_counter), (0, 0));
    }

    #[test]
    fn castling_display() {
        assert_eq!(CastlingRights::empty().to_string(), "-");
        assert_eq!(CastlingRights::all().to_string(), "KQkq");
        assert_eq!(
            (CastlingRights::BLACK_OO | CastlingRights::WHITE_OOO).to_string(),
            "Qk"
        );
    }

    #[test]
    fn castling_letters() {
        assert_eq!(CastlingRights::from_char('q'), Some(CastlingRights::BLACK_OOO));
        assert_eq!(CastlingRights::from_char('K'), Some(CastlingRights::WHITE_OO));
        assert_eq!(CastlingRights::from_char('-'), None);
        assert_eq!(CastlingRights::from_char('x'), None);
    }
}
