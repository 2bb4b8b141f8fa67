//! Task ordering rules.
//!
//! A rule scores every candidate task relative to the station it would be
//! appended to and returns the candidates sorted by score. With a non-empty
//! station the score is based on the setup time from the station's last
//! task to the candidate; with an empty station there is no previous task,
//! so the candidate's mean setup time towards all other tasks stands in.
//!
//! # Rules
//!
//! - **MaxTS / MinTS** — setup time plus processing time, descending / ascending
//! - **MaxS / MinS** — setup time only, descending / ascending
//!
//! # Reference
//!
//! Martino & Pastor (2010), section 3.2, priority rules for SUALBSP.

use std::fmt;

use crate::error::SolverError;
use crate::models::{Station, Task, TaskId};

/// A priority rule ranking candidate tasks for the next assignment.
///
/// The variants form a closed set; every consumer dispatches with a single
/// `match`.
///
/// # Examples
///
/// ```
/// use u_balancing::models::{Station, Task};
/// use u_balancing::rules::OrderingRule;
///
/// let tasks = vec![
///     Task::new(0, 4, vec![], vec![0, 2, 3]),
///     Task::new(1, 5, vec![], vec![2, 0, 1]),
///     Task::new(2, 3, vec![], vec![3, 1, 0]),
/// ];
/// let mut station = Station::new(10);
/// station.push(&tasks[0], &tasks);
///
/// // From task 0, setup to task 1 is 2 and to task 2 is 3.
/// let ranked = OrderingRule::MinS.order(&[1, 2], &station, &tasks).unwrap();
/// assert_eq!(ranked[0].0, 1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderingRule {
    /// Processing plus setup time, largest first.
    MaxTs,
    /// Processing plus setup time, smallest first.
    MinTs,
    /// Setup time only, largest first.
    MaxS,
    /// Setup time only, smallest first.
    MinS,
}

impl OrderingRule {
    /// All rules, in the order the experiments iterate them.
    pub const ALL: [OrderingRule; 4] = [
        OrderingRule::MaxTs,
        OrderingRule::MinTs,
        OrderingRule::MaxS,
        OrderingRule::MinS,
    ];

    /// Short display name.
    pub fn name(&self) -> &'static str {
        match self {
            OrderingRule::MaxTs => "MaxTS",
            OrderingRule::MinTs => "MinTS",
            OrderingRule::MaxS => "MaxS",
            OrderingRule::MinS => "MinS",
        }
    }

    /// Scores `candidates` relative to `station` and returns them sorted
    /// by priority, best first, as `(task id, score)` pairs.
    ///
    /// The sort is stable, so candidates with equal scores keep their
    /// input order and repeated runs produce identical rankings.
    ///
    /// # Errors
    ///
    /// [`SolverError::DegenerateOrderingInput`] if the empty-station
    /// fallback has no other tasks to average setup times over.
    pub fn order(
        &self,
        candidates: &[TaskId],
        station: &Station,
        tasks: &[Task],
    ) -> Result<Vec<(TaskId, f64)>, SolverError> {
        let mut scored = match self {
            OrderingRule::MaxTs | OrderingRule::MinTs => {
                setups_plus_processing(candidates, station, tasks)?
            }
            OrderingRule::MaxS | OrderingRule::MinS => setups_only(candidates, station, tasks)?,
        };
        match self {
            OrderingRule::MaxTs | OrderingRule::MaxS => {
                scored.sort_by(|a, b| b.1.total_cmp(&a.1));
            }
            OrderingRule::MinTs | OrderingRule::MinS => {
                scored.sort_by(|a, b| a.1.total_cmp(&b.1));
            }
        }
        Ok(scored)
    }
}

impl fmt::Display for OrderingRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Scores each candidate with its processing time plus the setup time from
/// the station's last task; mean setup time stands in for an empty station.
fn setups_plus_processing(
    candidates: &[TaskId],
    station: &Station,
    tasks: &[Task],
) -> Result<Vec<(TaskId, f64)>, SolverError> {
    candidates
        .iter()
        .map(|&id| {
            let task = &tasks[id];
            let value = match station.last() {
                Some(last) => {
                    f64::from(tasks[last].setup_time_to(id) + task.processing_time())
                }
                None => f64::from(task.processing_time()) + mean_setup_time(task, tasks)?,
            };
            Ok((id, value))
        })
        .collect()
}

/// Scores each candidate with the pure setup cost, same empty-station
/// fallback as [`setups_plus_processing`].
fn setups_only(
    candidates: &[TaskId],
    station: &Station,
    tasks: &[Task],
) -> Result<Vec<(TaskId, f64)>, SolverError> {
    candidates
        .iter()
        .map(|&id| {
            let task = &tasks[id];
            let value = match station.last() {
                Some(last) => f64::from(tasks[last].setup_time_to(id)),
                None => mean_setup_time(task, tasks)?,
            };
            Ok((id, value))
        })
        .collect()
}

fn mean_setup_time(task: &Task, tasks: &[Task]) -> Result<f64, SolverError> {
    task.mean_setup_time()
        .ok_or(SolverError::DegenerateOrderingInput {
            num_tasks: tasks.len(),
        })
}
