//! Rules engine and adversarial search for checkers (English draughts) on
//! the standard 8×8 board.
//!
//! The crate answers two questions about a position: which moves are legal,
//! with the [forced-capture] and multi-jump rules enforced in full (including
//! branching jump chains), and which move is best under a fixed-depth
//! [minimax](search::minimax) search with a pluggable evaluation function.
//!
//! ```
//! use dama::checkers::board::Board;
//! use dama::checkers::core::Player;
//! use dama::evaluation::material::material_advantage;
//! use dama::search::minimax::minimax;
//!
//! let board = Board::starting();
//! let result = minimax(&board, Player::Black, 4, &material_advantage);
//! assert!(result.best_move.is_some());
//! ```
//!
//! [forced-capture]: https://en.wikipedia.org/wiki/English_draughts#Rules

pub mod checkers;
pub mod evaluation;
pub mod search;
