//! Best-improvement pairwise exchange over the flattened task sequence.
//!
//! # Algorithm
//!
//! The solution is flattened into one global task sequence. Every outer
//! iteration samples one of the two objectives, scores all feasible
//! pairwise exchanges `(i, j)` against the current sequence, and applies
//! the best one as long as it reduces the station count or improves the
//! sampled objective at an equal count. Exchanged sequences are mapped
//! back to stations with the canonical greedy [`reassemble`] pass.
//!
//! An exchange is infeasible when the right task would be moved ahead of
//! one of its predecessors. If the predecessor is the left task itself,
//! every further `j` for this `i` would leave that predecessor even
//! further right, so the whole row is skipped; a predecessor strictly
//! between `i` and `j` rules out only that particular exchange.
//!
//! # Complexity
//!
//! O(n³) per outer iteration: O(n²) exchanges, each reassembled in O(n).

use rand::Rng;

use super::objective::Objective;
use crate::models::{Solution, Station, Task, TaskId};

/// Rebuilds stations from a task sequence, greedily left to right: each
/// task goes into the currently open station if it fits, otherwise a new
/// station is opened for it.
///
/// This is the canonical sequence-to-solution mapping; reassembling the
/// flattened sequence of a solution produced by it yields the same
/// station boundaries again.
///
/// # Examples
///
/// ```
/// use u_balancing::local_search::reassemble;
/// use u_balancing::models::Task;
///
/// let tasks = vec![
///     Task::new(0, 4, vec![], vec![0, 2, 3]),
///     Task::new(1, 5, vec![0], vec![2, 0, 1]),
///     Task::new(2, 3, vec![0], vec![3, 1, 0]),
/// ];
/// let solution = reassemble(&[0, 2, 1], &tasks, 10);
/// assert_eq!(solution.num_stations(), 2);
/// assert_eq!(solution.stations()[0].tasks(), &[0, 2]);
/// ```
pub fn reassemble(sequence: &[TaskId], tasks: &[Task], cycle_time: u32) -> Solution {
    let mut stations = vec![Station::new(cycle_time)];
    for &id in sequence {
        let task = &tasks[id];
        let current = stations.len() - 1;
        if stations[current].can_fit(task, tasks) {
            stations[current].push(task, tasks);
        } else {
            let mut station = Station::new(cycle_time);
            station.push(task, tasks);
            stations.push(station);
        }
    }
    Solution::from_stations(stations)
}

/// Improves `solution` by repeated best pairwise exchanges.
///
/// Each outer iteration samples the balanced objective with probability
/// `balanced_probability` and the imbalanced one otherwise. The search
/// stops at the first iteration in which no exchange reduces the station
/// count or improves the sampled objective; a sequence without any
/// feasible exchange at all (fully precedence-chained instances) is
/// already a local optimum and is returned unchanged. The result never
/// has more stations than the input.
pub fn improve_solution<R: Rng>(
    solution: &Solution,
    tasks: &[Task],
    cycle_time: u32,
    balanced_probability: f64,
    rng: &mut R,
) -> Solution {
    let mut sequence = solution.flattened();
    let n = sequence.len();
    if n == 0 {
        return solution.clone();
    }

    loop {
        let objective = Objective::sample(balanced_probability, rng);
        let current = reassemble(&sequence, tasks, cycle_time);
        let current_value = objective.value(&current);
        let current_stations = current.num_stations();

        // (station count, variation, positions) per feasible exchange
        // that does not add stations.
        let mut exchanges: Vec<(usize, f64, (usize, usize))> = Vec::new();

        for i in 0..n - 1 {
            for j in i + 1..n {
                let right = &tasks[sequence[j]];
                if tasks[sequence[i]].is_predecessor_of(right) {
                    break;
                }
                if (i + 1..j).any(|k| tasks[sequence[k]].is_predecessor_of(right)) {
                    continue;
                }

                let mut modified = sequence.clone();
                modified.swap(i, j);
                let candidate = reassemble(&modified, tasks, cycle_time);
                let stations = candidate.num_stations();
                if stations <= current_stations {
                    let variation =
                        objective.variation(current_value, objective.value(&candidate));
                    exchanges.push((stations, variation, (i, j)));
                }
            }
        }

        let best = exchanges.into_iter().min_by(|a, b| {
            a.0.cmp(&b.0)
                .then(a.1.total_cmp(&b.1))
                .then(a.2.cmp(&b.2))
        });

        match best {
            Some((stations, variation, (i, j)))
                if stations < current_stations || variation < 0.0 =>
            {
                log::trace!(
                    "exchange ({i}, {j}): {current_stations} -> {stations} stations, \
                     variation {variation}"
                );
                sequence.swap(i, j);
            }
            _ => break,
        }
    }

    reassemble(&sequence, tasks, cycle_time)
}
