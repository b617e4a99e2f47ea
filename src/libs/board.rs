//! Column grouping for a single board.
//!
//! `BoardView` is the pure derivation step of rendering: given the full
//! task list, a board name, and the configured column order, it buckets the
//! board's tasks per status column. Building it twice from the same inputs
//! yields the same view, so re-rendering after a mutation can never
//! duplicate a task.

use crate::libs::task::{Task, TaskFilter};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    pub status: String,
    pub tasks: Vec<Task>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardView {
    pub board: String,
    pub columns: Vec<Column>,
}

impl BoardView {
    /// Buckets `tasks` into one column per status, in the given order.
    /// Matching is exact string equality on both board and status; a task
    /// whose status is not a configured column appears in no column.
    pub fn build(tasks: &[Task], board: &str, statuses: &[String]) -> Self {
        let columns = statuses
            .iter()
            .map(|status| {
                let filter = TaskFilter::BoardStatus(board.to_string(), status.clone());
                Column {
                    status: status.clone(),
                    tasks: tasks.iter().filter(|t| filter.matches(t)).cloned().collect(),
                }
            })
            .collect();
        BoardView {
            board: board.to_string(),
            columns,
        }
    }

    /// Total tasks across all columns.
    pub fn total(&self) -> usize {
        self.columns.iter().map(|c| c.tasks.len()).sum()
    }
}
