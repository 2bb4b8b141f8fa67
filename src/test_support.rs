//! Shared assertions and generators for the crate's tests.

use proptest::prelude::*;

use crate::models::{Instance, Solution, Task};

/// Checks the three feasibility invariants of a complete solution: every
/// task assigned exactly once, every station within the cycle time, and
/// every predecessor strictly ahead of its successors in the flattened
/// sequence.
pub(crate) fn assert_feasible(solution: &Solution, tasks: &[Task], cycle_time: u32) {
    let mut seen = vec![false; tasks.len()];
    for &id in &solution.flattened() {
        assert!(!seen[id], "task {id} assigned twice");
        seen[id] = true;
    }
    assert!(seen.iter().all(|&s| s), "not all tasks assigned");

    for station in solution.stations() {
        assert!(station.station_time() <= cycle_time);
    }

    let sequence = solution.flattened();
    for (pos, &id) in sequence.iter().enumerate() {
        for &pred in tasks[id].predecessors() {
            let pred_pos = sequence.iter().position(|&t| t == pred).unwrap();
            assert!(pred_pos < pos, "task {pred} must precede task {id}");
        }
    }
}

/// Random instances of 2 to 7 tasks with processing times that always fit
/// the cycle time on their own.
pub(crate) fn arb_instance() -> impl Strategy<Value = Instance> {
    (2usize..=7).prop_flat_map(|n| {
        (
            prop::collection::vec(1u32..=10, n),
            prop::collection::vec(prop::collection::vec(0u32..=3, n), n),
            prop::collection::vec(prop::collection::vec(any::<bool>(), n), n),
            10u32..=30,
        )
            .prop_map(move |(processing, mut setups, pred_flags, cycle_time)| {
                let tasks = (0..n)
                    .map(|i| {
                        setups[i][i] = 0;
                        // Predecessors only among lower ids keeps the
                        // precedence graph acyclic.
                        let preds = (0..i).filter(|&p| pred_flags[i][p]).collect();
                        Task::new(i, processing[i], preds, setups[i].clone())
                    })
                    .collect();
                Instance::new(tasks, cycle_time)
            })
    })
}
