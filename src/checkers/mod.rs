//! Implementation of the checkers environment: board, pieces, rules and
//! move generation.

pub mod board;
pub mod core;
pub mod movegen;
pub mod moves;
