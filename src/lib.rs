//! # u-balancing
//!
//! Assembly line balancing library for the setup-oriented assembly line
//! balancing problem with sequence-dependent setup times (SUALBSP): assign
//! tasks to the minimum number of workstations so that no station exceeds a
//! fixed cycle time, precedence relations hold across the whole line, and
//! the time a task occupies a station includes the setup from the task
//! sequenced directly before it.
//!
//! ## Modules
//!
//! - [`models`] — Domain model types (Task, Station, Solution, Instance)
//! - [`rules`] — Task ordering rules (MaxTS, MinTS, MaxS, MinS)
//! - [`construction`] — Deterministic construction strategies (station- and task-oriented)
//! - [`grasp`] — GRASP metaheuristic with restricted candidate sampling
//! - [`local_search`] — Pairwise-exchange improvement over flattened task sequences
//! - [`error`] — Solver error types
//!
//! ## Reference
//!
//! Martino, L. & Pastor, R. (2010). "Heuristic procedures for solving the
//! general assembly line balancing problem with setups", *International
//! Journal of Production Research* 48(6), 1787-1804.

pub mod construction;
pub mod error;
pub mod grasp;
pub mod local_search;
pub mod models;
pub mod rules;

#[cfg(test)]
mod test_support;
