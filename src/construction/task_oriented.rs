//! Task-oriented construction.
//!
//! # Algorithm
//!
//! All stations opened so far stay open. In each step every ready task is
//! a candidate regardless of fit; the ordering rule ranks them and the
//! top-ranked task is assigned to the first station, in creation order,
//! that can hold it. The scan starts at the latest station holding one of
//! the task's predecessors, so the flattened station sequence keeps every
//! predecessor strictly ahead of its successors. A new station is opened
//! only when no open station fits.
//!
//! The rule ranks candidates relative to the most recently opened station.
//! With several stations open the "right" reference station is ambiguous
//! (the setup cost depends on which station the task ends up in); this
//! procedure keeps the historical choice rather than resolving it.
//!
//! # Reference
//!
//! Martino & Pastor (2010), section 3.3, the task-oriented procedure (TH).

use super::CandidatePool;
use crate::error::SolverError;
use crate::models::{Instance, Solution, Station};
use crate::rules::OrderingRule;

/// Builds a solution task by task with first-fit station placement.
pub(crate) fn construct(
    instance: &Instance,
    rule: OrderingRule,
) -> Result<Solution, SolverError> {
    let tasks = instance.tasks();
    let cycle_time = instance.cycle_time();
    let mut pool = CandidatePool::new(tasks);
    let mut stations = vec![Station::new(cycle_time)];
    let mut station_of = vec![0usize; tasks.len()];

    while !pool.is_empty() {
        let ready = pool.ready_tasks();
        debug_assert!(!ready.is_empty(), "non-empty pool with no ready task");

        let last = stations.len() - 1;
        let ranked = rule.order(&ready, &stations[last], tasks)?;
        let (chosen, _) = ranked[0];
        let task = &tasks[chosen];

        // Earliest station that keeps all predecessors at or before the
        // task's own station.
        let earliest = task
            .predecessors()
            .iter()
            .map(|&pred| station_of[pred])
            .max()
            .unwrap_or(0);

        let slot = (earliest..stations.len()).find(|&idx| stations[idx].can_fit(task, tasks));
        let idx = match slot {
            Some(idx) => idx,
            None => {
                stations.push(Station::new(cycle_time));
                stations.len() - 1
            }
        };
        stations[idx].push(task, tasks);
        station_of[chosen] = idx;
        pool.schedule(chosen);
    }

    let solution = Solution::from_stations(stations);
    debug_assert_eq!(solution.num_assigned(), tasks.len());
    Ok(solution)
}
