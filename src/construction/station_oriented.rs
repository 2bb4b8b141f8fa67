//! Station-oriented construction.
//!
//! # Algorithm
//!
//! Keep exactly one station open at a time. In each step the candidates
//! are the ready tasks (no open predecessors) that still fit the current
//! station. The ordering rule ranks them relative to that station and the
//! top-ranked task is appended. When no ready task fits, the station is
//! closed and a new one opened.
//!
//! # Complexity
//!
//! O(n² log n): each of the n assignments filters and sorts up to n
//! candidates.

use super::{fitting_tasks, CandidatePool};
use crate::error::SolverError;
use crate::models::{Instance, Solution, Station};
use crate::rules::OrderingRule;

/// Builds a solution station by station.
///
/// The caller has already validated the instance, so every ready task fits
/// an empty station and the open-new-station step always makes progress.
pub(crate) fn construct(
    instance: &Instance,
    rule: OrderingRule,
) -> Result<Solution, SolverError> {
    let tasks = instance.tasks();
    let cycle_time = instance.cycle_time();
    let mut pool = CandidatePool::new(tasks);
    let mut stations = vec![Station::new(cycle_time)];

    while !pool.is_empty() {
        let ready = pool.ready_tasks();
        debug_assert!(!ready.is_empty(), "non-empty pool with no ready task");

        let current = stations.len() - 1;
        let candidates = fitting_tasks(&ready, &stations[current], tasks);
        if candidates.is_empty() {
            stations.push(Station::new(cycle_time));
            continue;
        }

        let ranked = rule.order(&candidates, &stations[current], tasks)?;
        let (chosen, _) = ranked[0];
        stations[current].push(&tasks[chosen], tasks);
        pool.schedule(chosen);
    }

    let solution = Solution::from_stations(stations);
    debug_assert_eq!(solution.num_assigned(), tasks.len());
    Ok(solution)
}
