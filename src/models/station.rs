//! Station type.

use serde::{Deserialize, Serialize};

use super::{Task, TaskId};

/// A workstation: an ordered, capacity-bounded sequence of tasks.
///
/// The occupied time is cached and maintained incrementally on every
/// append: the first task contributes its processing time, every later
/// task contributes the setup time from the task sequenced directly before
/// it plus its own processing time. Stations only ever grow; local search
/// rebuilds stations from scratch instead of removing tasks.
///
/// # Examples
///
/// ```
/// use u_balancing::models::{Station, Task};
///
/// let tasks = vec![
///     Task::new(0, 4, vec![], vec![0, 2, 3]),
///     Task::new(1, 5, vec![0], vec![2, 0, 1]),
///     Task::new(2, 3, vec![0], vec![3, 1, 0]),
/// ];
/// let mut station = Station::new(10);
/// station.push(&tasks[0], &tasks);
/// assert_eq!(station.station_time(), 4);
/// // Appending task 2 adds setup 0→2 (3) plus processing (3).
/// assert!(station.can_fit(&tasks[2], &tasks));
/// station.push(&tasks[2], &tasks);
/// assert_eq!(station.station_time(), 10);
/// // Task 1 no longer fits: 10 + setup 2→1 (1) + 5 > 10.
/// assert!(!station.can_fit(&tasks[1], &tasks));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Station {
    cycle_time: u32,
    tasks: Vec<TaskId>,
    station_time: u32,
}

impl Station {
    /// Creates an empty station with the given cycle time.
    pub fn new(cycle_time: u32) -> Self {
        Self {
            cycle_time,
            tasks: Vec::new(),
            station_time: 0,
        }
    }

    /// Returns the cycle time bounding this station.
    pub fn cycle_time(&self) -> u32 {
        self.cycle_time
    }

    /// Returns the assigned task ids in sequence order.
    pub fn tasks(&self) -> &[TaskId] {
        &self.tasks
    }

    /// Returns the number of assigned tasks.
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Returns `true` if no task is assigned yet.
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Returns the id of the most recently assigned task, if any.
    pub fn last(&self) -> Option<TaskId> {
        self.tasks.last().copied()
    }

    /// Cached cumulative occupied time.
    pub fn station_time(&self) -> u32 {
        self.station_time
    }

    /// Occupied time this station would have after appending `task`.
    ///
    /// `tasks` is the instance task slice, indexed by id to look up the
    /// setup time from the current last task.
    pub fn time_with(&self, task: &Task, tasks: &[Task]) -> u32 {
        match self.last() {
            None => task.processing_time(),
            Some(last) => {
                self.station_time + tasks[last].setup_time_to(task.id()) + task.processing_time()
            }
        }
    }

    /// Returns `true` if appending `task` keeps the station within its
    /// cycle time.
    pub fn can_fit(&self, task: &Task, tasks: &[Task]) -> bool {
        self.time_with(task, tasks) <= self.cycle_time
    }

    /// Appends `task` and updates the cached station time.
    pub fn push(&mut self, task: &Task, tasks: &[Task]) {
        self.station_time = self.time_with(task, tasks);
        self.tasks.push(task.id());
    }
}
