//! Checkers primitives commonly used within [`crate::checkers`].

use std::fmt::{self, Write};

use anyhow::bail;

/// Width of the board in squares.
pub const BOARD_WIDTH: i8 = 8;
/// Number of squares on the board.
pub const BOARD_SIZE: usize = (BOARD_WIDTH * BOARD_WIDTH) as usize;

/// A square coordinate: `row` 0 is the top of the rendered board (Black's
/// own back rank), `col` 0 is the leftmost column.
///
/// Off-board coordinates are representable so that diagonal arithmetic near
/// the edges stays total; every consumer checks [`Location::is_on_board`]
/// before indexing into a board.
///
/// ```
/// use dama::checkers::core::{Direction, Location};
///
/// let corner = Location::new(0, 0);
/// assert!(corner.is_on_board());
/// assert!(!corner.diagonal(Direction::UpLeft).is_on_board());
/// assert_eq!(corner.jump_target(Direction::DownRight), Location::new(2, 2));
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Location {
    row: i8,
    col: i8,
}

impl Location {
    #[allow(missing_docs)]
    #[must_use]
    pub const fn new(row: i8, col: i8) -> Self {
        Self { row, col }
    }

    #[allow(missing_docs)]
    #[must_use]
    pub const fn row(self) -> i8 {
        self.row
    }

    #[allow(missing_docs)]
    #[must_use]
    pub const fn col(self) -> i8 {
        self.col
    }

    /// Returns true when the coordinate lies within the 8×8 grid.
    #[must_use]
    pub const fn is_on_board(self) -> bool {
        self.row >= 0 && self.row < BOARD_WIDTH && self.col >= 0 && self.col < BOARD_WIDTH
    }

    /// The adjacent square one step away in `direction`.
    #[must_use]
    pub const fn diagonal(self, direction: Direction) -> Self {
        let (row, col) = direction.offset();
        Self::new(self.row + row, self.col + col)
    }

    /// The square two steps away in `direction`: where a piece jumping over
    /// [`Location::diagonal`] lands.
    #[must_use]
    pub const fn jump_target(self, direction: Direction) -> Self {
        self.diagonal(direction).diagonal(direction)
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.row, self.col)
    }
}

/// The four diagonal directions a checkers piece can ever move in. "Up"
/// means decreasing row.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[allow(missing_docs)]
pub enum Direction {
    UpLeft,
    UpRight,
    DownLeft,
    DownRight,
}

impl Direction {
    /// All four diagonals, in a fixed sweep order.
    pub const ALL: [Self; 4] = [Self::UpLeft, Self::UpRight, Self::DownLeft, Self::DownRight];

    pub(crate) const fn offset(self) -> (i8, i8) {
        match self {
            Self::UpLeft => (-1, -1),
            Self::UpRight => (-1, 1),
            Self::DownLeft => (1, -1),
            Self::DownRight => (1, 1),
        }
    }
}

/// A game of checkers is played between Red and Black; Black traditionally
/// has the first turn.
#[allow(missing_docs)]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Player {
    Red,
    Black,
}

impl Player {
    /// "Flips" the side.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Self::Red => Self::Black,
            Self::Black => Self::Red,
        }
    }

    /// Whether `direction` is forward for this player's men: red men advance
    /// up the board (toward row 0), black men down (toward row 7). Kings are
    /// not restricted by this.
    #[must_use]
    pub const fn advances(self, direction: Direction) -> bool {
        match self {
            Self::Red => matches!(direction, Direction::UpLeft | Direction::UpRight),
            Self::Black => matches!(direction, Direction::DownLeft | Direction::DownRight),
        }
    }

    /// The row on which this player's men are crowned: the opponent's back
    /// rank.
    #[must_use]
    pub const fn king_row(self) -> i8 {
        match self {
            Self::Red => 0,
            Self::Black => BOARD_WIDTH - 1,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_char(match self {
            Self::Red => 'r',
            Self::Black => 'b',
        })
    }
}

/// A checkers piece is either a man or, once crowned, a king.
#[allow(missing_docs)]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PieceKind {
    Man,
    King,
}

/// A specific piece owned by a player. An empty square is represented as
/// `Option::<Piece>::None` by the board.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Piece {
    #[allow(missing_docs)]
    pub owner: Player,
    #[allow(missing_docs)]
    pub kind: PieceKind,
}

impl Piece {
    /// An ordinary (uncrowned) piece.
    #[must_use]
    pub const fn man(owner: Player) -> Self {
        Self {
            owner,
            kind: PieceKind::Man,
        }
    }

    /// A crowned piece.
    #[must_use]
    pub const fn king(owner: Player) -> Self {
        Self {
            owner,
            kind: PieceKind::King,
        }
    }

    #[allow(missing_docs)]
    #[must_use]
    pub const fn is_king(self) -> bool {
        matches!(self.kind, PieceKind::King)
    }

    /// The crowned version of this piece; kings are unchanged.
    #[must_use]
    pub const fn crowned(self) -> Self {
        Self::king(self.owner)
    }
}

impl TryFrom<char> for Piece {
    type Error = anyhow::Error;

    /// Parses a piece glyph: `x`/`X` are the red man and king, `o`/`O` the
    /// black man and king.
    ///
    /// # Errors
    ///
    /// Fails on any other character; the `-` empty-square glyph is handled by
    /// the board parser, not here.
    fn try_from(symbol: char) -> anyhow::Result<Self> {
        match symbol {
            'x' => Ok(Self::man(Player::Red)),
            'X' => Ok(Self::king(Player::Red)),
            'o' => Ok(Self::man(Player::Black)),
            'O' => Ok(Self::king(Player::Black)),
            _ => bail!("piece glyph should be within \"xXoO\", got '{symbol}'"),
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_char(match (self.owner, self.kind) {
            (Player::Red, PieceKind::Man) => 'x',
            (Player::Red, PieceKind::King) => 'X',
            (Player::Black, PieceKind::Man) => 'o',
            (Player::Black, PieceKind::King) => 'O',
        })
    }
}
