//! Domain model types for assembly line balancing.
//!
//! Provides the core abstractions: tasks with processing times, precedence
//! relations and sequence-dependent setup times, stations as ordered
//! capacity-bounded task sequences, complete solutions, and the instance
//! type that ties everything together.

mod instance;
mod solution;
mod station;
mod task;

pub use instance::Instance;
pub use solution::Solution;
pub use station::Station;
pub use task::{Task, TaskId};
