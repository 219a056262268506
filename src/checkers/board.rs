//! The board value type: an 8×8 grid of squares together with parsing,
//! rendering and move application.
//!
//! A [`Board`] is immutable by convention: every operation that would change
//! it, notably [`Board::apply_move`], returns a new value and leaves the
//! receiver untouched. Boards are plain 64-square value copies, so no two
//! positions ever share mutable state.

use std::fmt;

use anyhow::bail;
use itertools::{iproduct, Itertools};

use crate::checkers::core::{Location, Piece, Player, BOARD_SIZE, BOARD_WIDTH};
use crate::checkers::moves::Move;

/// State of the checkers board: the contents of its 64 squares.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Board {
    squares: [[Option<Piece>; BOARD_WIDTH as usize]; BOARD_WIDTH as usize],
}

impl Board {
    /// A board with no pieces on it.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            squares: [[None; BOARD_WIDTH as usize]; BOARD_WIDTH as usize],
        }
    }

    /// The standard starting position: black men on the dark squares of the
    /// three top rows, red men on the three bottom rows.
    ///
    /// ```
    /// use dama::checkers::board::Board;
    ///
    /// let board = Board::starting();
    /// assert_eq!(board.to_string().lines().next(), Some("|- o - o - o - o|"));
    /// ```
    #[must_use]
    pub fn starting() -> Self {
        let mut board = Self::empty();
        for (row, col) in iproduct!(0..BOARD_WIDTH, 0..BOARD_WIDTH) {
            if (row + col) % 2 == 0 {
                // Light square; pieces only ever occupy dark squares.
                continue;
            }
            let loc = Location::new(row, col);
            if row < 3 {
                board.put(loc, Some(Piece::man(Player::Black)));
            } else if row >= BOARD_WIDTH - 3 {
                board.put(loc, Some(Piece::man(Player::Red)));
            }
        }
        board
    }

    /// Contents of the square at `loc`, which must be on the board.
    #[must_use]
    pub fn at(&self, loc: Location) -> Option<Piece> {
        debug_assert!(loc.is_on_board(), "indexing off-board location {loc}");
        self.squares[loc.row() as usize][loc.col() as usize]
    }

    fn put(&mut self, loc: Location, square: Option<Piece>) {
        self.squares[loc.row() as usize][loc.col() as usize] = square;
    }

    /// Iterates over all occupied squares in row-major order.
    pub fn pieces(&self) -> impl Iterator<Item = (Location, Piece)> + '_ {
        iproduct!(0..BOARD_WIDTH, 0..BOARD_WIDTH)
            .map(|(row, col)| Location::new(row, col))
            .filter_map(|loc| self.at(loc).map(|piece| (loc, piece)))
    }

    /// Returns the board resulting from `player` committing `m`.
    ///
    /// The moved piece leaves `m.from()` and lands on the final `m.to()`;
    /// every square captured along a jump or jump chain is cleared. A man
    /// ending its move on the opponent's back rank is crowned; whether the
    /// move crowns is decided once, against the final landing square, using
    /// the moved piece's original king status.
    #[must_use]
    pub fn apply_move(&self, player: Player, m: &Move) -> Self {
        let piece = self.at(m.from());
        let mut next = *self;
        next.put(m.from(), None);
        let landed = piece.map(|piece| {
            if !piece.is_king() && m.to().row() == player.king_row() {
                piece.crowned()
            } else {
                piece
            }
        });
        next.put(m.to(), landed);
        for captured in m.captures() {
            next.put(captured, None);
        }
        next
    }
}

impl TryFrom<&str> for Board {
    type Error = anyhow::Error;

    /// Parses the compact textual grid produced by the [`fmt::Display`]
    /// implementation: one glyph per square in row-major order, `-` for an
    /// empty square and `x X o O` for the four pieces. `|` row delimiters
    /// and whitespace are ignored.
    ///
    /// # Errors
    ///
    /// Fails on unknown glyphs or on any square count other than 64.
    fn try_from(input: &str) -> anyhow::Result<Self> {
        let mut board = Self::empty();
        let mut count = 0usize;
        for symbol in input.chars() {
            match symbol {
                '|' => continue,
                symbol if symbol.is_whitespace() => continue,
                square => {
                    if count == BOARD_SIZE {
                        bail!("board should have exactly {BOARD_SIZE} squares, got more");
                    }
                    let width = BOARD_WIDTH as usize;
                    let loc = Location::new((count / width) as i8, (count % width) as i8);
                    let contents = match square {
                        '-' => None,
                        glyph => Some(Piece::try_from(glyph)?),
                    };
                    board.put(loc, contents);
                    count += 1;
                },
            }
        }
        if count != BOARD_SIZE {
            bail!("board should have exactly {BOARD_SIZE} squares, got {count}");
        }
        Ok(board)
    }
}

impl fmt::Display for Board {
    /// Renders the bar-delimited grid accepted by the `TryFrom<&str>`
    /// parser. Lossless: parsing the rendering yields an equal board.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..BOARD_WIDTH {
            if row > 0 {
                f.write_str("\n")?;
            }
            let glyphs = (0..BOARD_WIDTH)
                .map(|col| match self.at(Location::new(row, col)) {
                    Some(piece) => piece.to_string(),
                    None => String::from("-"),
                })
                .join(" ");
            write!(f, "|{glyphs}|")?;
        }
        Ok(())
    }
}
