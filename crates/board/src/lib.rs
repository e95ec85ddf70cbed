use std::fmt::Display;
use std::str::FromStr;

pub mod piece;
pub mod position;

pub use piece::*;
pub use position::*;

/// Number of ranks (and files) on the board.
pub const BOARD_SIZE: u8 = 8;

/// A position on the board.
///
/// Rank index `0` is notation rank 1 (white's back rank) and index `7` is notation rank 8. Files
/// run from `0` (the a-file) to `7` (the h-file).
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Square(pub(crate) u8);

impl Square {
    /// The square at a particular rank and file.
    #[inline]
    pub const fn at(rank: u8, file: u8) -> Option<Self> {
        if rank >= BOARD_SIZE || file >= BOARD_SIZE {
            return None;
        }

        Some(Self(rank * BOARD_SIZE + file))
    }

    /// Rank index of this square.
    #[inline]
    pub const fn rank(&self) -> u8 {
        self.0 / BOARD_SIZE
    }

    /// File index of this square.
    #[inline]
    pub const fn file(&self) -> u8 {
        self.0 % BOARD_SIZE
    }

    /// File letter, `'a'..='h'`.
    #[inline]
    pub const fn file_char(&self) -> char {
        (self.file() + b'a') as char
    }

    /// Rank digit, `'1'..='8'`.
    #[inline]
    pub const fn rank_char(&self) -> char {
        (self.rank() + b'1') as char
    }
}

impl TryFrom<(u8, u8)> for Square {
    type Error = ();

    /// Determine a square from a (rank, file) pair.
    #[inline]
    fn try_from(value: (u8, u8)) -> Result<Self, Self::Error> {
        Self::at(value.0, value.1).ok_or(())
    }
}

impl FromStr for Square {
    type Err = ();

    /// Determine a square's position from algebraic notation.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let &[file, rank] = s.as_bytes() else {
            return Err(());
        };

        let file = file.to_ascii_lowercase().checked_sub(b'a').ok_or(())?;
        let rank = rank.checked_sub(b'1').ok_or(())?;

        Self::try_from((rank, file))
    }
}

impl Display for Square {
    /// Format the square into algebraic notation.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.file_char(), self.rank_char())
    }
}

/// One rank of the board, indexed by file.
pub type Rank = [Option<Piece>; BOARD_SIZE as usize];

/// Represents the board and all the pieces on it.
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    /// Ranks indexed the same way as [`Square::rank`].
    ranks: [Rank; BOARD_SIZE as usize],
}

impl Board {
    /// The standard initial arrangement.
    pub fn starting_position() -> Self {
        use PieceKind::*;

        const BACK_RANK: [PieceKind; 8] = [Rook, Knight, Bishop, Queen, King, Bishop, Knight, Rook];

        let mut board = Self::default();

        for (file, kind) in BACK_RANK.into_iter().enumerate() {
            board.ranks[0][file] = Some(Piece::new(Color::White, kind));
            board.ranks[1][file] = Some(Piece::new(Color::White, Pawn));
            board.ranks[6][file] = Some(Piece::new(Color::Black, Pawn));
            board.ranks[7][file] = Some(Piece::new(Color::Black, kind));
        }

        board
    }

    /// Get the piece at a certain square.
    #[inline]
    pub const fn get(&self, square: Square) -> Option<Piece> {
        self.ranks[square.rank() as usize][square.file() as usize]
    }

    /// Set a piece on the board, or clear the square with `None`.
    #[inline]
    pub fn set(&mut self, square: Square, piece: Option<Piece>) {
        self.ranks[square.rank() as usize][square.file() as usize] = piece;
    }

    /// Get a full rank by index, `None` if the index is off the board.
    #[inline]
    pub fn rank(&self, index: u8) -> Option<&Rank> {
        self.ranks.get(index as usize)
    }

    /// Build a board from ranks ordered the same way as [`Square::rank`].
    #[inline]
    pub const fn from_ranks(ranks: [Rank; BOARD_SIZE as usize]) -> Self {
        Self { ranks }
    }

    /// Iterate over ranks, starting from rank 1.
    #[inline]
    pub fn ranks(&self) -> std::slice::Iter<'_, Rank> {
        self.ranks.iter()
    }

    /// Iterate over all occupied squares, starting from a1.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        (0..BOARD_SIZE * BOARD_SIZE).filter_map(|index| {
            let square = Square(index);
            self.get(square).map(|piece| (square, piece))
        })
    }

    /// Check if no piece is on the board.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.ranks.iter().flatten().all(Option::is_none)
    }
}

impl Display for Board {
    // not pretty but works
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, " a  b  c  d  e  f  g  h")?;

        for rank in self.ranks.iter().rev() {
            for cell in rank {
                match cell {
                    Some(piece) => write!(f, " {} ", piece.as_char())?,
                    None => write!(f, "   ")?,
                }
            }

            writeln!(f)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod square_tests {
    use super::*;

    #[test]
    fn square_to_str() {
        assert_eq!(&Square::at(0, 0).unwrap().to_string(), "a1");
        assert_eq!(&Square::at(7, 5).unwrap().to_string(), "f8");
        assert_eq!(&Square::at(3, 4).unwrap().to_string(), "e4");
        assert_eq!(&Square::at(5, 2).unwrap().to_string(), "c6");
        assert_eq!(&Square::at(8, 8), &None);
    }

    #[test]
    fn square_from_str() {
        assert_eq!(Square::from_str("a2"), Square::at(1, 0).ok_or(()));
        assert_eq!(Square::from_str("h8"), Square::at(7, 7).ok_or(()));
        assert_eq!(Square::from_str("C5"), Square::at(4, 2).ok_or(()));
        assert!(Square::from_str("5c").is_err());
        assert!(Square::from_str("b-").is_err());
        assert!(Square::from_str("^8").is_err());
        assert!(Square::from_str("b891").is_err());
        assert!(Square::from_str("b0").is_err());
        assert!(Square::from_str("i1").is_err());
        assert!(Square::from_str("").is_err());
    }

    #[test]
    fn square_chars() {
        let square = Square::from_str("e3").unwrap();
        assert_eq!(square.file_char(), 'e');
        assert_eq!(square.rank_char(), '3');
        assert_eq!((square.rank(), square.file()), (2, 4));
    }
}
