//! Balancing problem instance.

use serde::{Deserialize, Serialize};

use super::Task;

/// A validated SUALBSP instance: the full task set and the cycle time.
///
/// Instances arrive from an external parser which is responsible for
/// syntactic validation and for rejecting cyclic precedence relations;
/// the solver assumes a DAG. Task ids are dense indices `[0, n)` matching
/// their position in the task list, and every setup-time row spans all
/// `n` tasks.
///
/// # Examples
///
/// ```
/// use u_balancing::models::{Instance, Task};
///
/// let instance = Instance::new(
///     vec![
///         Task::new(0, 4, vec![], vec![0, 2, 3]),
///         Task::new(1, 5, vec![0], vec![2, 0, 1]),
///         Task::new(2, 3, vec![0], vec![3, 1, 0]),
///     ],
///     10,
/// );
/// assert_eq!(instance.num_tasks(), 3);
/// assert_eq!(instance.cycle_time(), 10);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Instance {
    name: String,
    tasks: Vec<Task>,
    cycle_time: u32,
}

impl Instance {
    /// Creates an instance from already-validated tasks.
    pub fn new(tasks: Vec<Task>, cycle_time: u32) -> Self {
        debug_assert!(
            tasks.iter().enumerate().all(|(i, t)| t.id() == i),
            "task ids must be dense and match their position"
        );
        debug_assert!(
            tasks.iter().all(|t| t.setup_times().len() == tasks.len()),
            "every setup-time row must cover all tasks"
        );
        Self {
            name: String::new(),
            tasks,
            cycle_time,
        }
    }

    /// Attaches an instance name, typically the source file stem.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Instance name; empty if none was set.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the task set, indexed by task id.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Number of tasks.
    pub fn num_tasks(&self) -> usize {
        self.tasks.len()
    }

    /// The cycle time shared by all stations of this instance.
    pub fn cycle_time(&self) -> u32 {
        self.cycle_time
    }
}
