//! A basic evaluation based on material advantage with fixed piece weights.
//!
//! While crude, this policy is great for exercising the search: it is
//! stable, deterministic and easy to reason about in tests. Variants that
//! count only men or only kings are provided for diagnosing where an
//! advantage comes from.

use crate::checkers::board::Board;
use crate::checkers::core::{Piece, PieceKind, Player};
use crate::evaluation::Value;

const MAN_VALUE: Value = 100;
const KING_VALUE: Value = 130;

const fn piece_value(piece: Piece) -> Value {
    match piece.kind {
        PieceKind::Man => MAN_VALUE,
        PieceKind::King => KING_VALUE,
    }
}

/// Difference between the weighted piece values of `player` and those of
/// the opponent: each man is worth 100, each king 130.
#[must_use]
pub fn material_advantage(player: Player, board: &Board) -> Value {
    material(player, board, |_| true)
}

/// Material advantage counting men only.
#[must_use]
pub fn man_advantage(player: Player, board: &Board) -> Value {
    material(player, board, |piece| !piece.is_king())
}

/// Material advantage counting kings only.
#[must_use]
pub fn king_advantage(player: Player, board: &Board) -> Value {
    material(player, board, Piece::is_king)
}

fn material(player: Player, board: &Board, filter: impl Fn(Piece) -> bool) -> Value {
    board
        .pieces()
        .filter(|(_, piece)| filter(*piece))
        .map(|(_, piece)| {
            if piece.owner == player {
                piece_value(piece)
            } else {
                -piece_value(piece)
            }
        })
        .sum()
}
