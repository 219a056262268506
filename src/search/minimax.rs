//! Implementation of the [Minimax] algorithm over checkers boards.
//!
//! The search is deliberately plain: no pruning, no transposition tables,
//! no move ordering. The value of a board to the player is defined as the
//! negation of its value to the opponent, computed by recursively applying
//! the search for the opponent one level shallower.
//!
//! [Minimax]: https://en.wikipedia.org/wiki/Minimax

use crate::checkers::board::Board;
use crate::checkers::core::Player;
use crate::checkers::movegen::legal_moves;
use crate::evaluation::Value;
use crate::search::{Depth, SearchResult};

/// Finds the move maximizing the outcome `player` can force looking `depth`
/// turns ahead, scoring leaf boards with `static_evaluator`.
///
/// At depth zero, and in positions where `player` has no legal moves (an
/// effectively lost game), the current board is evaluated directly and no
/// move is returned. Among equally good moves the first one in generation
/// order is kept; callers must not rely on which one that is.
#[must_use]
pub fn minimax(
    board: &Board,
    player: Player,
    depth: Depth,
    static_evaluator: &dyn Fn(Player, &Board) -> Value,
) -> SearchResult {
    if depth == 0 {
        return SearchResult {
            score: static_evaluator(player, board),
            best_move: None,
        };
    }
    let moves = legal_moves(board, player);
    if moves.is_empty() {
        return SearchResult {
            score: static_evaluator(player, board),
            best_move: None,
        };
    }
    let mut best = SearchResult {
        score: Value::MIN,
        best_move: None,
    };
    for next_move in moves {
        let after = board.apply_move(player, &next_move);
        let score = -minimax(&after, player.opponent(), depth - 1, static_evaluator).score;
        if score > best.score {
            best = SearchResult {
                score,
                best_move: Some(next_move),
            };
        }
    }
    best
}
