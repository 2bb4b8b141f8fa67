//! Task type.

use serde::{Deserialize, Serialize};

/// Identifier of a task. Task ids are dense indices in `[0, n)` and double
/// as positions into an instance's task slice and setup-time rows.
pub type TaskId = usize;

/// An atomic unit of work on the assembly line.
///
/// A task carries its processing time, the ids of the tasks that must be
/// sequenced strictly before it anywhere on the line, and a dense row of
/// sequence-dependent setup times: `setup_times[j]` is the time to set up
/// for task `j` when it directly follows this task within a station. The
/// self entry `setup_times[id]` is zero.
///
/// # Examples
///
/// ```
/// use u_balancing::models::Task;
///
/// let task = Task::new(0, 4, vec![], vec![0, 2, 3]);
/// assert_eq!(task.processing_time(), 4);
/// assert_eq!(task.setup_time_to(2), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    processing_time: u32,
    predecessors: Vec<TaskId>,
    setup_times: Vec<u32>,
}

impl Task {
    /// Creates a new task.
    pub fn new(
        id: TaskId,
        processing_time: u32,
        predecessors: Vec<TaskId>,
        setup_times: Vec<u32>,
    ) -> Self {
        Self {
            id,
            processing_time,
            predecessors,
            setup_times,
        }
    }

    /// Returns the task id.
    pub fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the processing time.
    pub fn processing_time(&self) -> u32 {
        self.processing_time
    }

    /// Returns the ids of the tasks that must precede this one.
    pub fn predecessors(&self) -> &[TaskId] {
        &self.predecessors
    }

    /// Returns the full setup-time row of this task.
    pub fn setup_times(&self) -> &[u32] {
        &self.setup_times
    }

    /// Setup time incurred when `other` directly follows this task.
    pub fn setup_time_to(&self, other: TaskId) -> u32 {
        self.setup_times[other]
    }

    /// Returns `true` if this task is a predecessor of `other`.
    pub fn is_predecessor_of(&self, other: &Task) -> bool {
        other.predecessors.contains(&self.id)
    }

    /// Mean setup time towards all *other* tasks, excluding the zero self
    /// entry. Used by the ordering rules when a station is still empty.
    ///
    /// Returns `None` for a single-task instance, where there is nothing
    /// to average.
    pub fn mean_setup_time(&self) -> Option<f64> {
        let others = self.setup_times.len().checked_sub(1)?;
        if others == 0 {
            return None;
        }
        let total: u64 = self.setup_times.iter().map(|&s| u64::from(s)).sum();
        Some(total as f64 / others as f64)
    }
}
