//! Puzzle Insight - rule inference and reachability for rule-rewriting grid puzzles
//!
//! Takes a text snapshot of a board where rules are spelled out by word tiles
//! ("BABA IS YOU") and answers questions about it: which rules are active,
//! where the controlled entity is, what it can reach, and how to get there.

pub mod board;
pub mod core;
pub mod help;
pub mod insights;
pub mod navigation;
pub mod query;
pub mod rules;
