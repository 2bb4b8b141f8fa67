//! Solution type.

use serde::{Deserialize, Serialize};

use super::{Station, TaskId};

/// A complete solution: an ordered list of stations that together contain
/// every task of the instance exactly once.
///
/// Flattening the stations in order yields the global task sequence; in a
/// feasible solution every predecessor of a task appears strictly earlier
/// in that sequence.
///
/// # Examples
///
/// ```
/// use u_balancing::models::{Solution, Station};
///
/// let mut solution = Solution::new();
/// solution.push_station(Station::new(10));
/// assert_eq!(solution.num_stations(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Solution {
    stations: Vec<Station>,
}

impl Solution {
    /// Creates an empty solution.
    pub fn new() -> Self {
        Self {
            stations: Vec::new(),
        }
    }

    /// Creates a solution from an already-built list of stations.
    pub fn from_stations(stations: Vec<Station>) -> Self {
        Self { stations }
    }

    /// Appends a station.
    pub fn push_station(&mut self, station: Station) {
        self.stations.push(station);
    }

    /// Returns the stations in line order.
    pub fn stations(&self) -> &[Station] {
        &self.stations
    }

    /// Number of stations; the objective value of the balancing problem.
    pub fn num_stations(&self) -> usize {
        self.stations.len()
    }

    /// Total number of assigned tasks across all stations.
    pub fn num_assigned(&self) -> usize {
        self.stations.iter().map(|s| s.len()).sum()
    }

    /// The global task sequence: all stations' task lists concatenated in
    /// line order.
    pub fn flattened(&self) -> Vec<TaskId> {
        self.stations
            .iter()
            .flat_map(|s| s.tasks().iter().copied())
            .collect()
    }
}

impl Default for Solution {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Task;

    #[test]
    fn test_empty_solution() {
        let solution = Solution::new();
        assert_eq!(solution.num_stations(), 0);
        assert_eq!(solution.num_assigned(), 0);
        assert!(solution.flattened().is_empty());
    }

    #[test]
    fn test_flattened_keeps_station_order() {
        let tasks = vec![
            Task::new(0, 2, vec![], vec![0, 1, 1]),
            Task::new(1, 2, vec![], vec![1, 0, 1]),
            Task::new(2, 2, vec![], vec![1, 1, 0]),
        ];
        let mut first = Station::new(10);
        first.push(&tasks[2], &tasks);
        first.push(&tasks[0], &tasks);
        let mut second = Station::new(10);
        second.push(&tasks[1], &tasks);

        let solution = Solution::from_stations(vec![first, second]);
        assert_eq!(solution.flattened(), vec![2, 0, 1]);
        assert_eq!(solution.num_assigned(), 3);
        assert_eq!(solution.num_stations(), 2);
    }
}
