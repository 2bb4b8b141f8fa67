//! Candidate pool: per-run scheduling state over an immutable task arena.

use crate::models::{Task, TaskId};

/// Mutable working view over an instance's task set for one construction
/// run.
///
/// The tasks themselves are borrowed immutably; only the bookkeeping of
/// which tasks are still unassigned and how many of their predecessors are
/// still open lives here. Constructions and GRASP iterations each create a
/// fresh pool, so runs never interfere and the setup matrices are never
/// cloned.
///
/// # Examples
///
/// ```
/// use u_balancing::construction::CandidatePool;
/// use u_balancing::models::Task;
///
/// let tasks = vec![
///     Task::new(0, 4, vec![], vec![0, 2]),
///     Task::new(1, 5, vec![0], vec![2, 0]),
/// ];
/// let mut pool = CandidatePool::new(&tasks);
/// assert_eq!(pool.ready_tasks(), vec![0]);
/// pool.schedule(0);
/// assert_eq!(pool.ready_tasks(), vec![1]);
/// ```
#[derive(Debug, Clone)]
pub struct CandidatePool<'a> {
    tasks: &'a [Task],
    in_pool: Vec<bool>,
    open_predecessors: Vec<usize>,
    successors: Vec<Vec<TaskId>>,
    remaining: usize,
}

impl<'a> CandidatePool<'a> {
    /// Creates a fresh pool over the full task set.
    pub fn new(tasks: &'a [Task]) -> Self {
        let n = tasks.len();
        let mut open_predecessors = vec![0; n];
        let mut successors: Vec<Vec<TaskId>> = vec![Vec::new(); n];
        for task in tasks {
            open_predecessors[task.id()] = task.predecessors().len();
            for &pred in task.predecessors() {
                successors[pred].push(task.id());
            }
        }
        Self {
            tasks,
            in_pool: vec![true; n],
            open_predecessors,
            successors,
            remaining: n,
        }
    }

    /// The task arena this pool draws from.
    pub fn tasks(&self) -> &'a [Task] {
        self.tasks
    }

    /// Number of tasks still unassigned.
    pub fn len(&self) -> usize {
        self.remaining
    }

    /// Returns `true` once every task has been scheduled.
    pub fn is_empty(&self) -> bool {
        self.remaining == 0
    }

    /// Unassigned tasks whose predecessors have all been scheduled, in id
    /// order.
    pub fn ready_tasks(&self) -> Vec<TaskId> {
        (0..self.tasks.len())
            .filter(|&id| self.in_pool[id] && self.open_predecessors[id] == 0)
            .collect()
    }

    /// Marks `id` as scheduled and releases the precedence relation it
    /// held over its successors.
    pub fn schedule(&mut self, id: TaskId) {
        debug_assert!(self.in_pool[id], "task {id} scheduled twice");
        debug_assert_eq!(
            self.open_predecessors[id], 0,
            "task {id} scheduled before its predecessors"
        );
        self.in_pool[id] = false;
        self.remaining -= 1;
        for &succ in &self.successors[id] {
            if self.in_pool[succ] {
                self.open_predecessors[succ] -= 1;
            }
        }
    }
}
