use serde::{Deserialize, Serialize};

/// A single kanban task. The `board` field is the only thing tying a task
/// to a board; boards have no stored identity of their own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub status: String,
    pub board: String,
}

/// Input for task creation. The id is assigned by the store at insert time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskDraft {
    pub title: String,
    pub description: String,
    pub status: String,
    pub board: String,
}

impl TaskDraft {
    pub fn new(title: &str, description: &str, status: &str, board: &str) -> Self {
        TaskDraft {
            title: title.to_string(),
            description: description.to_string(),
            status: status.to_string(),
            board: board.to_string(),
        }
    }
}

impl From<&Task> for TaskDraft {
    fn from(task: &Task) -> Self {
        TaskDraft::new(&task.title, &task.description, &task.status, &task.board)
    }
}

/// Partial update for a task; only present fields are merged over the
/// stored record.
#[derive(Debug, Clone, Default)]
pub struct TaskPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub status: Option<String>,
    pub board: Option<String>,
}

#[derive(Debug, Clone)]
pub enum TaskFilter {
    All,
    Board(String),
    BoardStatus(String, String),
}

impl TaskFilter {
    /// Exact string equality on board and status, matching how columns are
    /// populated. Board names are not trimmed here; only derivation trims.
    pub fn matches(&self, task: &Task) -> bool {
        match self {
            TaskFilter::All => true,
            TaskFilter::Board(board) => task.board == *board,
            TaskFilter::BoardStatus(board, status) => task.board == *board && task.status == *status,
        }
    }
}
