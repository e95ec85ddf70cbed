//! Piece specific definitions.

use strum::{EnumCount, EnumIter, FromRepr};

/// Represents a player or a piece's color.
#[repr(u8)]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, EnumCount, EnumIter, FromRepr)]
pub enum Color {
    #[default]
    White,
    Black,
}

impl Color {
    /// Active color field representation, `w` or `b`.
    #[inline]
    pub const fn as_char(&self) -> char {
        match self {
            Self::White => 'w',
            Self::Black => 'b',
        }
    }
}

/// All possible piece types.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumCount, EnumIter, FromRepr)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    /// Uppercase letter for this kind.
    #[inline]
    #[rustfmt::skip]
    pub const fn as_char(&self) -> char {
        match self {
            Self::Pawn   => 'P',
            Self::Knight => 'N',
            Self::Bishop => 'B',
            Self::Rook   => 'R',
            Self::Queen  => 'Q',
            Self::King   => 'K',
        }
    }

    /// Kind for a letter of either case.
    #[inline]
    pub const fn from_char(c: char) -> Option<Self> {
        let kind = match c.to_ascii_uppercase() {
            'P' => Self::Pawn,
            'N' => Self::Knight,
            'B' => Self::Bishop,
            'R' => Self::Rook,
            'Q' => Self::Queen,
            'K' => Self::King,
            _ => return None,
        };

        Some(kind)
    }
}

/// Piece belonging to a side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub color: Color,
    pub kind: PieceKind,
}

impl Piece {
    #[inline]
    pub const fn new(color: Color, kind: PieceKind) -> Self {
        Self { color, kind }
    }

    /// Standard representation for this piece.
    ///
    /// White pieces are uppercase, black pieces lowercase.
    #[inline]
    pub const fn as_char(&self) -> char {
        let c = self.kind.as_char();

        match self.color {
            Color::White => c,
            Color::Black => c.to_ascii_lowercase(),
        }
    }

    /// Piece for one of the twelve standard letters.
    #[inline]
    pub const fn from_char(c: char) -> Option<Self> {
        let color = if c.is_ascii_uppercase() {
            Color::White
        } else {
            Color::Black
        };

        match PieceKind::from_char(c) {
            Some(kind) => Some(Self { color, kind }),
            None => None,
        }
    }
}
