//! This module implements "static" evaluation: predicting the relative
//! value of a given board for a player without running [`crate::search`].
//!
//! Scores are expressed in centi-man units: 100 is the worth of one
//! ordinary man and a king is worth 1.3 men. The search is agnostic to the
//! scoring policy; any pure `Fn(Player, &Board) -> Value` can be plugged
//! in, and [`material`] provides the default weighted-material family.

pub mod material;

/// Relative value of a board in centi-man units (100 = one man).
pub type Value = i32;
