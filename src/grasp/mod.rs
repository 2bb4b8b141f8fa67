//! GRASP metaheuristic for assembly line balancing.
//!
//! # Algorithm
//!
//! Each iteration builds a solution station by station like the
//! station-oriented strategy, but instead of an ordering rule it samples
//! the next task uniformly from a restricted candidate list (RCL): every
//! fitting candidate gets a greedy index `g = 1 / total_time` and the RCL
//! keeps the candidates with `g <= g_min + alpha * (g_max - g_min)`. Each
//! constructed solution is improved by pairwise-exchange local search and
//! the solution with the fewest stations over all iterations wins; ties
//! keep the earliest.
//!
//! Note the direction of the threshold filter: because the greedy index is
//! the *reciprocal* of the total time, `g <= threshold` admits the
//! candidates with comparatively *large* setup-plus-processing time as
//! `alpha` approaches zero. This follows the reference procedure exactly
//! and is deliberately left as-is.
//!
//! # Reference
//!
//! Feo, T. & Resende, M. (1995). "Greedy Randomized Adaptive Search
//! Procedures", *Journal of Global Optimization* 6, 109-133.

use rand::Rng;

use crate::construction::{fitting_tasks, validate, CandidatePool};
use crate::error::SolverError;
use crate::local_search::{improve_solution, BALANCED_PROBABILITY};
use crate::models::{Instance, Solution, Station, Task, TaskId};

/// Tuning parameters for [`solve`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GraspConfig {
    /// Number of independent construction + improvement iterations.
    /// At least one iteration always runs.
    pub iterations: usize,
    /// Greediness/randomness trade-off in `[0, 1]` for the restricted
    /// candidate list.
    pub alpha: f64,
}

impl Default for GraspConfig {
    fn default() -> Self {
        Self {
            iterations: 5,
            alpha: 0.3,
        }
    }
}

/// Runs GRASP and returns the best solution found.
///
/// All randomness is drawn from `rng`; seeding it makes the whole run
/// reproducible.
///
/// # Errors
///
/// [`SolverError::InfeasibleTask`] if any task's processing time exceeds
/// the cycle time.
///
/// # Examples
///
/// ```
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
/// use u_balancing::grasp::{self, GraspConfig};
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
/// let mut rng = StdRng::seed_from_u64(42);
/// let best = grasp::solve(&instance, &GraspConfig::default(), &mut rng).unwrap();
/// assert_eq!(best.num_assigned(), 3);
/// ```
pub fn solve<R: Rng>(
    instance: &Instance,
    config: &GraspConfig,
    rng: &mut R,
) -> Result<Solution, SolverError> {
    validate(instance)?;
    log::debug!(
        "GRASP over {} tasks: {} iterations, alpha {}",
        instance.num_tasks(),
        config.iterations,
        config.alpha
    );

    let mut best = iterate(instance, config.alpha, rng)?;
    for iteration in 2..=config.iterations {
        let improved = iterate(instance, config.alpha, rng)?;
        log::debug!(
            "iteration {iteration}: {} stations (best so far {})",
            improved.num_stations(),
            best.num_stations()
        );
        if improved.num_stations() < best.num_stations() {
            best = improved;
        }
    }
    Ok(best)
}

/// One GRASP iteration: randomized construction plus local search.
fn iterate<R: Rng>(
    instance: &Instance,
    alpha: f64,
    rng: &mut R,
) -> Result<Solution, SolverError> {
    let constructed = construct_randomized(instance, alpha, rng)?;
    Ok(improve_solution(
        &constructed,
        instance.tasks(),
        instance.cycle_time(),
        BALANCED_PROBABILITY,
        rng,
    ))
}

/// Builds one solution with restricted-candidate sampling.
fn construct_randomized<R: Rng>(
    instance: &Instance,
    alpha: f64,
    rng: &mut R,
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

        let restricted = restricted_candidates(&candidates, &stations[current], tasks, alpha);
        let chosen = restricted[rng.random_range(0..restricted.len())];
        stations[current].push(&tasks[chosen], tasks);
        pool.schedule(chosen);
    }

    let solution = Solution::from_stations(stations);
    debug_assert_eq!(solution.num_assigned(), tasks.len());
    Ok(solution)
}

/// Greedy index per candidate: the reciprocal of processing time plus the
/// setup from the station's last task (processing time alone for an empty
/// station).
fn greedy_indices(candidates: &[TaskId], station: &Station, tasks: &[Task]) -> Vec<f64> {
    candidates
        .iter()
        .map(|&id| {
            let total = match station.last() {
                None => tasks[id].processing_time(),
                Some(last) => tasks[last].setup_time_to(id) + tasks[id].processing_time(),
            };
            1.0 / f64::from(total)
        })
        .collect()
}

/// Threshold for the restricted candidate list.
fn threshold(indices: &[f64], alpha: f64) -> f64 {
    let g_min = indices.iter().copied().fold(f64::INFINITY, f64::min);
    let g_max = indices.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    g_min + alpha * (g_max - g_min)
}

/// Candidates whose greedy index passes the threshold condition.
fn restricted_candidates(
    candidates: &[TaskId],
    station: &Station,
    tasks: &[Task],
    alpha: f64,
) -> Vec<TaskId> {
    let indices = greedy_indices(candidates, station, tasks);
    let threshold = threshold(&indices, alpha);
    let restricted: Vec<TaskId> = candidates
        .iter()
        .zip(&indices)
        .filter(|(_, &g)| g <= threshold)
        .map(|(&id, _)| id)
        .collect();
    if restricted.is_empty() {
        // The threshold is NaN when every index is infinite (all total
        // times zero); treat the whole candidate set as restricted.
        return candidates.to_vec();
    }
    restricted
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{arb_instance, assert_feasible};
    use proptest::prelude::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn five_task_instance() -> Instance {
        Instance::new(
            vec![
                Task::new(0, 3, vec![], vec![0, 1, 2, 1, 2]),
                Task::new(1, 4, vec![0], vec![1, 0, 1, 2, 1]),
                Task::new(2, 5, vec![0], vec![2, 1, 0, 1, 2]),
                Task::new(3, 2, vec![1], vec![1, 2, 1, 0, 1]),
                Task::new(4, 4, vec![1, 2], vec![2, 1, 2, 1, 0]),
            ],
            9,
        )
    }

    #[test]
    fn test_solve_produces_feasible_solution() {
        let instance = five_task_instance();
        let mut rng = StdRng::seed_from_u64(42);
        let solution = solve(&instance, &GraspConfig::default(), &mut rng).unwrap();
        assert_feasible(&solution, instance.tasks(), instance.cycle_time());
    }

    #[test]
    fn test_solve_is_reproducible_with_seed() {
        let instance = five_task_instance();
        let config = GraspConfig::default();
        let mut first_rng = StdRng::seed_from_u64(7);
        let mut second_rng = StdRng::seed_from_u64(7);
        let first = solve(&instance, &config, &mut first_rng).unwrap();
        let second = solve(&instance, &config, &mut second_rng).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_more_iterations_never_worse_with_shared_seed() {
        // Iteration 1 of the 10-iteration run replays the 1-iteration run
        // exactly, so the best of ten cannot have more stations.
        let instance = five_task_instance();
        let mut single_rng = StdRng::seed_from_u64(3);
        let single = solve(
            &instance,
            &GraspConfig {
                iterations: 1,
                alpha: 0.3,
            },
            &mut single_rng,
        )
        .unwrap();

        let mut multi_rng = StdRng::seed_from_u64(3);
        let multi = solve(
            &instance,
            &GraspConfig {
                iterations: 10,
                alpha: 0.3,
            },
            &mut multi_rng,
        )
        .unwrap();

        assert!(multi.num_stations() <= single.num_stations());
    }

    #[test]
    fn test_infeasible_task_fails_fast() {
        let instance = Instance::new(
            vec![
                Task::new(0, 12, vec![], vec![0, 1]),
                Task::new(1, 3, vec![], vec![1, 0]),
            ],
            10,
        );
        let mut rng = StdRng::seed_from_u64(1);
        let err = solve(&instance, &GraspConfig::default(), &mut rng).unwrap_err();
        assert!(matches!(err, SolverError::InfeasibleTask { task_id: 0, .. }));
    }

    #[test]
    fn test_greedy_index_is_reciprocal_total_time() {
        let instance = five_task_instance();
        let tasks = instance.tasks();
        let empty = Station::new(9);
        let indices = greedy_indices(&[0, 2], &empty, tasks);
        assert_eq!(indices, vec![1.0 / 3.0, 1.0 / 5.0]);

        let mut station = Station::new(9);
        station.push(&tasks[0], tasks);
        // From task 0: setup 1 + proc 4 = 5, setup 2 + proc 5 = 7.
        let indices = greedy_indices(&[1, 2], &station, tasks);
        assert_eq!(indices, vec![1.0 / 5.0, 1.0 / 7.0]);
    }

    #[test]
    fn test_threshold_interpolates_between_extremes() {
        let indices = vec![0.2, 0.5];
        assert_eq!(threshold(&indices, 0.0), 0.2);
        assert_eq!(threshold(&indices, 1.0), 0.5);
        assert!((threshold(&indices, 0.5) - 0.35).abs() < 1e-12);
    }

    #[test]
    fn test_rcl_inversion_small_alpha_keeps_slowest_tasks() {
        // With alpha = 0 the threshold sits at g_min, so only candidates
        // with the *largest* total time (smallest reciprocal) pass.
        let instance = five_task_instance();
        let tasks = instance.tasks();
        let empty = Station::new(9);
        let restricted = restricted_candidates(&[0, 1, 2], &empty, tasks, 0.0);
        assert_eq!(restricted, vec![2]);
    }

    #[test]
    fn test_rcl_alpha_one_keeps_everything() {
        // Processing times 4 and 2 give exact reciprocals 0.25 and 0.5,
        // so the alpha = 1 threshold lands exactly on g_max.
        let tasks = vec![
            Task::new(0, 4, vec![], vec![0, 1]),
            Task::new(1, 2, vec![], vec![1, 0]),
        ];
        let empty = Station::new(9);
        let restricted = restricted_candidates(&[0, 1], &empty, &tasks, 1.0);
        assert_eq!(restricted, vec![0, 1]);
        // And alpha = 0 keeps only the slower task.
        let restricted = restricted_candidates(&[0, 1], &empty, &tasks, 0.0);
        assert_eq!(restricted, vec![0]);
    }

    #[test]
    fn test_rcl_all_zero_total_times_falls_back_to_full_set() {
        let tasks = vec![
            Task::new(0, 0, vec![], vec![0, 0]),
            Task::new(1, 0, vec![], vec![0, 0]),
        ];
        let empty = Station::new(5);
        let restricted = restricted_candidates(&[0, 1], &empty, &tasks, 0.3);
        assert_eq!(restricted, vec![0, 1]);
    }

    #[test]
    fn test_zero_iterations_still_runs_once() {
        let instance = five_task_instance();
        let mut rng = StdRng::seed_from_u64(11);
        let solution = solve(
            &instance,
            &GraspConfig {
                iterations: 0,
                alpha: 0.3,
            },
            &mut rng,
        )
        .unwrap();
        assert_feasible(&solution, instance.tasks(), instance.cycle_time());
    }

    proptest! {
        #[test]
        fn prop_solve_preserves_invariants(instance in arb_instance(), seed in 0u64..1000) {
            let mut rng = StdRng::seed_from_u64(seed);
            let solution = solve(&instance, &GraspConfig::default(), &mut rng).unwrap();
            assert_feasible(&solution, instance.tasks(), instance.cycle_time());
        }
    }
}
