//! Legal-move generation: single-step jump and slide detection, the
//! [forced-capture] rule and recursive multi-jump chain enumeration.
//!
//! This is the correctness-critical path of the engine. The forced-capture
//! rule is applied in two explicit stages: [`moves_from`] suppresses slides
//! on any square that has a jump, and [`legal_moves`] discards every
//! non-jump move board-wide as soon as one square reports a jump. Multi-jump
//! chains are explored depth-first on the board resulting from each jump,
//! forking where several continuations exist and stopping a branch early
//! when the jump crowns the moving man.
//!
//! Callers must not rely on the order of the returned moves.
//!
//! [forced-capture]: https://en.wikipedia.org/wiki/English_draughts#Rules

use arrayvec::ArrayVec;
use itertools::iproduct;
use tracing::{debug, trace};

use crate::checkers::board::Board;
use crate::checkers::core::{Direction, Location, Piece, Player, BOARD_WIDTH};
use crate::checkers::moves::{Move, Step};

/// Produces every legal move for `player`. If any piece can jump, capturing
/// is mandatory and every non-jump move is discarded, no matter which square
/// it originates from.
#[must_use]
pub fn legal_moves(board: &Board, player: Player) -> Vec<Move> {
    let mut moves = Vec::new();
    let mut capture_available = false;
    for (row, col) in iproduct!(0..BOARD_WIDTH, 0..BOARD_WIDTH) {
        let (mut from_square, has_jump) = moves_from(board, player, Location::new(row, col));
        moves.append(&mut from_square);
        capture_available |= has_jump;
    }
    if capture_available {
        debug!(%player, "capture available, discarding non-jump moves");
        moves.retain(Move::is_jump);
    }
    moves
}

/// Legal moves starting from `from`, together with a flag reporting whether
/// any of them is a jump.
///
/// Slides from a square are considered only when that square has no jumps;
/// the board-wide part of the forced-capture rule is layered on top by
/// [`legal_moves`]. Each jump is expanded into every maximal chain reachable
/// from its landing square; a jump with no continuation stays a plain
/// single-step move.
///
/// An empty square, a square held by the opponent or an off-board location
/// yields no moves.
#[must_use]
pub fn moves_from(board: &Board, player: Player, from: Location) -> (Vec<Move>, bool) {
    let mut moves = Vec::new();
    let jumps = jumps_from(board, player, from);
    let has_jump = !jumps.is_empty();
    for first in jumps {
        for sequence in jump_sequences(board, player, first) {
            if sequence.len() == 1 {
                moves.push(Move::Step(first));
            } else {
                moves.push(Move::chain(sequence));
            }
        }
    }
    if !has_jump {
        moves.extend(slides_from(board, player, from).into_iter().map(Move::Step));
    }
    (moves, has_jump)
}

/// Single-step jumps available from `from`: for each diagonal, the square in
/// between must hold an opponent piece and the landing square two steps away
/// must be an empty board square. Men jump only toward the opponent's back
/// rank; kings jump in all four directions.
#[must_use]
pub fn jumps_from(board: &Board, player: Player, from: Location) -> ArrayVec<Step, 4> {
    let mut steps = ArrayVec::new();
    let Some(piece) = own_piece(board, player, from) else {
        return steps;
    };
    for direction in Direction::ALL {
        if !piece.is_king() && !player.advances(direction) {
            continue;
        }
        let over = from.diagonal(direction);
        let to = from.jump_target(direction);
        // `to` being on the board implies `over` is as well.
        if !to.is_on_board() || board.at(to).is_some() {
            continue;
        }
        if board.at(over).is_some_and(|jumped| jumped.owner != player) {
            steps.push(Step::jump(from, over, to));
        }
    }
    steps
}

/// Single-step slides from `from` onto an adjacent empty square; men slide
/// only toward the opponent's back rank.
#[must_use]
pub fn slides_from(board: &Board, player: Player, from: Location) -> ArrayVec<Step, 4> {
    let mut steps = ArrayVec::new();
    let Some(piece) = own_piece(board, player, from) else {
        return steps;
    };
    for direction in Direction::ALL {
        if !piece.is_king() && !player.advances(direction) {
            continue;
        }
        let to = from.diagonal(direction);
        if to.is_on_board() && board.at(to).is_none() {
            steps.push(Step::slide(from, to));
        }
    }
    steps
}

/// Counts the leaf nodes of the legal-move tree to the given depth: the
/// standard correctness harness for a move generator. A multi-jump chain
/// counts as a single move.
#[must_use]
pub fn perft(board: &Board, player: Player, depth: u8) -> u64 {
    if depth == 0 {
        return 1;
    }
    let moves = legal_moves(board, player);
    if depth == 1 {
        return moves.len() as u64;
    }
    moves
        .iter()
        .map(|m| perft(&board.apply_move(player, m), player.opponent(), depth - 1))
        .sum()
}

fn own_piece(board: &Board, player: Player, loc: Location) -> Option<Piece> {
    if !loc.is_on_board() {
        return None;
    }
    board.at(loc).filter(|piece| piece.owner == player)
}

/// Enumerates every maximal jump sequence that starts with `first`,
/// exploring continuations depth-first on the board each jump produces.
/// Returns `[[first]]` alone when the jump has no continuation, including
/// when it crowns the moving man (which ends the turn on the spot).
fn jump_sequences(board: &Board, player: Player, first: Step) -> Vec<Vec<Step>> {
    let after = board.apply_move(player, &Move::Step(first));
    let mut sequences = Vec::new();
    if crowns(board, &after, first) {
        sequences.push(vec![first]);
        return sequences;
    }
    extend_chain(&after, player, vec![first], &mut sequences);
    sequences
}

/// Depth-first continuation search. `prefix` is the jump sequence taken so
/// far and `board` the position it produced; every fork receives its own
/// copy of the prefix, so sibling branches never observe each other's steps.
fn extend_chain(board: &Board, player: Player, prefix: Vec<Step>, sequences: &mut Vec<Vec<Step>>) {
    let at = prefix[prefix.len() - 1].to;
    let continuations = jumps_from(board, player, at);
    if continuations.is_empty() {
        sequences.push(prefix);
        return;
    }
    if continuations.len() > 1 {
        trace!(%at, forks = continuations.len(), "jump chain forks");
    }
    for step in continuations {
        let after = board.apply_move(player, &Move::Step(step));
        let mut branch = prefix.clone();
        branch.push(step);
        if crowns(board, &after, step) {
            // A man crowned mid-chain may not keep jumping this turn.
            sequences.push(branch);
        } else {
            extend_chain(&after, player, branch, sequences);
        }
    }
}

/// Whether applying `step` crowned the moving piece: the piece on the
/// landing square differs from the piece that left `step.from`.
fn crowns(before: &Board, after: &Board, step: Step) -> bool {
    before.at(step.from) != after.at(step.to)
}
