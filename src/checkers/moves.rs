//! Move handling: the single-step and composite (jump-chain) move
//! representations produced by [`crate::checkers::movegen`] and consumed by
//! [`Board::apply_move`].
//!
//! [`Board::apply_move`]: crate::checkers::board::Board::apply_move

use std::fmt;

use itertools::{Either, Itertools};

use crate::checkers::core::Location;

/// One diagonal step of a turn: a slide onto an adjacent empty square, or a
/// jump over `over` onto the empty square beyond it.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Step {
    #[allow(missing_docs)]
    pub from: Location,
    #[allow(missing_docs)]
    pub to: Location,
    /// Square of the captured piece; `None` for a slide.
    pub over: Option<Location>,
}

impl Step {
    /// A non-capturing step.
    #[must_use]
    pub const fn slide(from: Location, to: Location) -> Self {
        Self {
            from,
            to,
            over: None,
        }
    }

    /// A capturing step over `over`.
    #[must_use]
    pub const fn jump(from: Location, over: Location, to: Location) -> Self {
        Self {
            from,
            to,
            over: Some(over),
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{}->{}}}", self.from, self.to)
    }
}

/// A complete turn for one player.
///
/// Equality is path-sensitive: two jump chains that land on the same square
/// through different captures are distinct moves.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Move {
    /// A slide, or a single jump with no continuation.
    Step(Step),
    /// Two or more consecutive jumps performed as a single turn, in order.
    /// The sequence is the sole source of truth for the turn's path; the
    /// endpoints are derived from it. Build chains through [`Move::chain`],
    /// which rejects empty sequences.
    Chain(Vec<Step>),
}

impl Move {
    /// Wraps a complete jump sequence into a composite move.
    ///
    /// # Panics
    ///
    /// Panics when `steps` is empty: an empty turn is a programmer error,
    /// not a representable move.
    #[must_use]
    pub fn chain(steps: Vec<Step>) -> Self {
        assert!(!steps.is_empty(), "a jump chain requires at least one step");
        Self::Chain(steps)
    }

    /// The square the turn starts from.
    #[must_use]
    pub fn from(&self) -> Location {
        match self {
            Self::Step(step) => step.from,
            Self::Chain(steps) => steps[0].from,
        }
    }

    /// The square the turn ends on.
    #[must_use]
    pub fn to(&self) -> Location {
        match self {
            Self::Step(step) => step.to,
            Self::Chain(steps) => steps[steps.len() - 1].to,
        }
    }

    /// Whether the turn captures at least one piece.
    #[must_use]
    pub fn is_jump(&self) -> bool {
        match self {
            Self::Step(step) => step.over.is_some(),
            Self::Chain(_) => true,
        }
    }

    /// Squares of every piece captured by this turn, in jump order.
    pub fn captures(&self) -> impl Iterator<Item = Location> + '_ {
        match self {
            Self::Step(step) => Either::Left(step.over.into_iter()),
            Self::Chain(steps) => Either::Right(steps.iter().filter_map(|step| step.over)),
        }
    }
}

impl fmt::Display for Move {
    /// Serializes a move into a compact debugging form: `{(4,0)->(2,2)}` for
    /// a single step, and for a chain the endpoints followed by the full
    /// path, e.g. `{{(4,0)->(0,0)},[{(4,0)->(2,2)},{(2,2)->(0,0)}]}`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Step(step) => write!(f, "{step}"),
            Self::Chain(steps) => write!(
                f,
                "{{{{{}->{}}},[{}]}}",
                self.from(),
                self.to(),
                steps.iter().map(ToString::to_string).join(",")
            ),
        }
    }
}
