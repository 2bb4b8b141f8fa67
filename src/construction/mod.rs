//! Deterministic construction strategies for building initial solutions.
//!
//! - [`ConstructionStrategy::StationOriented`] — fill the current station with
//!   fitting, precedence-free tasks; open a new station when none fit
//! - [`ConstructionStrategy::TaskOriented`] — pick the best precedence-free
//!   task, then assign it to the first open station that fits it
//! - [`CandidatePool`] — per-run working view over the task set tracking
//!   which precedence relations are still open
//!
//! # Reference
//!
//! Martino & Pastor (2010), sections 3.1 and 3.3.

use std::fmt;

mod pool;
mod station_oriented;
mod task_oriented;

pub use pool::CandidatePool;

use crate::error::SolverError;
use crate::models::{Instance, Solution, Station, Task, TaskId};
use crate::rules::OrderingRule;

/// A deterministic placement policy used to turn an instance into a full
/// solution under a given ordering rule.
///
/// # Examples
///
/// ```
/// use u_balancing::construction::ConstructionStrategy;
/// use u_balancing::models::{Instance, Task};
/// use u_balancing::rules::OrderingRule;
///
/// let instance = Instance::new(
///     vec![
///         Task::new(0, 4, vec![], vec![0, 2, 3]),
///         Task::new(1, 5, vec![0], vec![2, 0, 1]),
///         Task::new(2, 3, vec![0], vec![3, 1, 0]),
///     ],
///     10,
/// );
/// let solution = ConstructionStrategy::StationOriented
///     .construct(&instance, OrderingRule::MinS)
///     .unwrap();
/// assert_eq!(solution.num_stations(), 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConstructionStrategy {
    /// Station by station: only tasks that fit the currently open station
    /// are candidates.
    StationOriented,
    /// Task by task: the best ready task is chosen first and then placed
    /// into the first station that fits it.
    TaskOriented,
}

impl ConstructionStrategy {
    /// Short display name.
    pub fn name(&self) -> &'static str {
        match self {
            ConstructionStrategy::StationOriented => "StationOriented",
            ConstructionStrategy::TaskOriented => "TaskOriented",
        }
    }

    /// Builds a full solution for `instance` under `rule`.
    ///
    /// # Errors
    ///
    /// - [`SolverError::InfeasibleTask`] if any task's processing time
    ///   exceeds the cycle time; no station could ever hold it.
    /// - [`SolverError::DegenerateOrderingInput`] for single-task instances
    ///   (the empty-station score fallback is undefined there).
    pub fn construct(
        &self,
        instance: &Instance,
        rule: OrderingRule,
    ) -> Result<Solution, SolverError> {
        validate(instance)?;
        log::debug!(
            "{} construction with {} over {} tasks, cycle time {}",
            self.name(),
            rule,
            instance.num_tasks(),
            instance.cycle_time()
        );
        match self {
            ConstructionStrategy::StationOriented => station_oriented::construct(instance, rule),
            ConstructionStrategy::TaskOriented => task_oriented::construct(instance, rule),
        }
    }
}

impl fmt::Display for ConstructionStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Rejects instances containing a task that exceeds the cycle time on its
/// own. Checked up front so the construction loops can rely on every ready
/// task fitting a freshly opened station.
pub(crate) fn validate(instance: &Instance) -> Result<(), SolverError> {
    for task in instance.tasks() {
        if task.processing_time() > instance.cycle_time() {
            return Err(SolverError::InfeasibleTask {
                task_id: task.id(),
                processing_time: task.processing_time(),
                cycle_time: instance.cycle_time(),
            });
        }
    }
    Ok(())
}

/// Filters `candidates` down to the tasks that fit `station`.
pub(crate) fn fitting_tasks(
    candidates: &[TaskId],
    station: &Station,
    tasks: &[Task],
) -> Vec<TaskId> {
    candidates
        .iter()
        .copied()
        .filter(|&id| station.can_fit(&tasks[id], tasks))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn instance() -> Instance {
        Instance::new(
            vec![
                Task::new(0, 4, vec![], vec![0, 2, 3]),
                Task::new(1, 5, vec![0], vec![2, 0, 1]),
                Task::new(2, 3, vec![0], vec![3, 1, 0]),
            ],
            10,
        )
    }

    #[test]
    fn test_validate_accepts_feasible_instance() {
        assert_eq!(validate(&instance()), Ok(()));
    }

    #[test]
    fn test_validate_rejects_oversized_task() {
        let bad = Instance::new(
            vec![
                Task::new(0, 4, vec![], vec![0, 1]),
                Task::new(1, 11, vec![], vec![1, 0]),
            ],
            10,
        );
        assert_eq!(
            validate(&bad),
            Err(SolverError::InfeasibleTask {
                task_id: 1,
                processing_time: 11,
                cycle_time: 10,
            })
        );
    }

    #[test]
    fn test_construct_fails_fast_on_infeasible_task() {
        let bad = Instance::new(
            vec![
                Task::new(0, 12, vec![], vec![0, 1]),
                Task::new(1, 5, vec![], vec![1, 0]),
            ],
            10,
        );
        for strategy in [
            ConstructionStrategy::StationOriented,
            ConstructionStrategy::TaskOriented,
        ] {
            let err = strategy.construct(&bad, OrderingRule::MinTs).unwrap_err();
            assert!(matches!(err, SolverError::InfeasibleTask { task_id: 0, .. }));
        }
    }

    #[test]
    fn test_fitting_tasks_filters_by_capacity() {
        let instance = instance();
        let mut station = Station::new(10);
        station.push(&instance.tasks()[0], instance.tasks());
        // Task 1 would need 4 + 2 + 5 = 11, task 2 exactly 10.
        let fitting = fitting_tasks(&[1, 2], &station, instance.tasks());
        assert_eq!(fitting, vec![2]);
    }

    #[test]
    fn test_display_names() {
        assert_eq!(
            ConstructionStrategy::StationOriented.to_string(),
            "StationOriented"
        );
        assert_eq!(ConstructionStrategy::TaskOriented.name(), "TaskOriented");
    }
}
