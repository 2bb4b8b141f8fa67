//! Solver error types.

use thiserror::Error;

use crate::models::TaskId;

/// Errors raised by construction and ordering.
///
/// Local search never fails: a sequence without any feasible exchange is
/// already a local optimum and is returned as-is.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SolverError {
    /// A task can never be scheduled because its processing time alone
    /// exceeds the cycle time. Detected before construction starts so the
    /// station loop cannot keep opening empty stations forever.
    #[error(
        "task {task_id} is infeasible: processing time {processing_time} \
         exceeds cycle time {cycle_time}"
    )]
    InfeasibleTask {
        /// Offending task.
        task_id: TaskId,
        /// Its processing time.
        processing_time: u32,
        /// The instance cycle time.
        cycle_time: u32,
    },

    /// The empty-station fallback of the ordering rules averages the
    /// `n - 1` setup times towards other tasks; with a single-task instance
    /// there is nothing to average.
    #[error(
        "ordering rules need at least two tasks to average setup times, \
         instance has {num_tasks}"
    )]
    DegenerateOrderingInput {
        /// Number of tasks in the instance.
        num_tasks: usize,
    },
}
