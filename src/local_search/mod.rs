//! Pairwise-exchange local search over flattened task sequences.
//!
//! - [`improve_solution`] — best-improvement pairwise task exchange
//! - [`reassemble`] — canonical greedy mapping from a task sequence back
//!   to stations
//! - [`Objective`] — the two competing load-distribution objectives

mod improve;
mod objective;

pub use improve::{improve_solution, reassemble};
pub use objective::{Objective, BALANCED_PROBABILITY};
