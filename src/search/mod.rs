//! Fixed-depth adversarial search over the legal-move generator.

pub mod minimax;

use crate::checkers::moves::Move;
use crate::evaluation::Value;

/// Search depth in turns (plies).
pub type Depth = u8;

/// Outcome of a search.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchResult {
    /// The guaranteed score for the searching player.
    pub score: Value,
    /// The move achieving `score`. `None` when the search terminated
    /// immediately: at depth zero, or in a position where the player has no
    /// legal moves.
    pub best_move: Option<Move>,
}
