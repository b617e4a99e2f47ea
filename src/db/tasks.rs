//! Task persistence over the key-value store.
//!
//! The whole task list is serialized under a single storage key. Every
//! mutation reads the full list, applies the change in memory, and writes
//! the full list back. Callers re-render from a fresh fetch afterwards, so
//! the view can never show a state the store does not hold.

use crate::db::store::{Store, KEY_TASKS};
use crate::libs::task::{Task, TaskDraft, TaskFilter, TaskPatch};
use crate::msg_debug;
use anyhow::Result;
use serde::{Deserialize, Serialize};

/// How ids are assigned at creation time.
///
/// `Sequential` reproduces the original numbering: one past the id of the
/// *last* task in storage order, not the maximum. It assumes ids are only
/// ever appended in increasing order; once the list holds an id higher than
/// the tail's, a new task can collide with it. `Max` is the corrected
/// strategy for users who want collision-free ids.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum IdStrategy {
    #[default]
    Sequential,
    Max,
}

pub struct Tasks {
    store: Store,
    id_strategy: IdStrategy,
}

impl Tasks {
    pub fn new() -> Result<Self> {
        Ok(Tasks {
            store: Store::new()?,
            id_strategy: IdStrategy::default(),
        })
    }

    pub fn with_strategy(id_strategy: IdStrategy) -> Result<Self> {
        Ok(Tasks {
            store: Store::new()?,
            id_strategy,
        })
    }

    /// Full persisted list in storage order, narrowed by `filter`.
    pub fn fetch(&self, filter: TaskFilter) -> Result<Vec<Task>> {
        let tasks = self.load()?;
        Ok(tasks.into_iter().filter(|t| filter.matches(t)).collect())
    }

    pub fn get_by_id(&self, id: i32) -> Result<Option<Task>> {
        Ok(self.load()?.into_iter().find(|t| t.id == id))
    }

    /// Appends a new task and writes the list back. The id comes from the
    /// configured strategy; see [`IdStrategy`].
    pub fn create(&mut self, draft: &TaskDraft) -> Result<Task> {
        let mut tasks = self.load()?;
        let id = self.next_id(&tasks);
        let task = Task {
            id,
            title: draft.title.clone(),
            description: draft.description.clone(),
            status: draft.status.clone(),
            board: draft.board.clone(),
        };
        tasks.push(task.clone());
        self.save(&tasks)?;
        msg_debug!("created task {} on board '{}'", task.id, task.board);
        Ok(task)
    }

    /// Merges present patch fields over the record with the given id.
    /// Returns `None` when no task has that id; nothing is written then.
    pub fn patch(&mut self, id: i32, patch: &TaskPatch) -> Result<Option<Task>> {
        let mut tasks = self.load()?;
        let Some(task) = tasks.iter_mut().find(|t| t.id == id) else {
            return Ok(None);
        };
        if let Some(title) = &patch.title {
            task.title = title.clone();
        }
        if let Some(description) = &patch.description {
            task.description = description.clone();
        }
        if let Some(status) = &patch.status {
            task.status = status.clone();
        }
        if let Some(board) = &patch.board {
            task.board = board.clone();
        }
        let updated = task.clone();
        self.save(&tasks)?;
        Ok(Some(updated))
    }

    /// Replaces the whole record with the given id. Returns `None` when no
    /// task has that id; nothing is written then.
    pub fn put(&mut self, id: i32, task: &Task) -> Result<Option<Task>> {
        let mut tasks = self.load()?;
        let Some(slot) = tasks.iter_mut().find(|t| t.id == id) else {
            return Ok(None);
        };
        *slot = Task { id, ..task.clone() };
        let updated = slot.clone();
        self.save(&tasks)?;
        Ok(Some(updated))
    }

    /// Removes the record with the given id. Returns `false` when no task
    /// has that id; nothing is written then.
    pub fn delete(&mut self, id: i32) -> Result<bool> {
        let mut tasks = self.load()?;
        let before = tasks.len();
        tasks.retain(|t| t.id != id);
        if tasks.len() == before {
            return Ok(false);
        }
        self.save(&tasks)?;
        msg_debug!("deleted task {}", id);
        Ok(true)
    }

    fn next_id(&self, tasks: &[Task]) -> i32 {
        match self.id_strategy {
            IdStrategy::Sequential => tasks.last().map_or(1, |t| t.id + 1),
            IdStrategy::Max => tasks.iter().map(|t| t.id).max().unwrap_or(0) + 1,
        }
    }

    fn load(&self) -> Result<Vec<Task>> {
        match self.store.get(KEY_TASKS)? {
            Some(raw) => Ok(serde_json::from_str(&raw)?),
            None => Ok(Vec::new()),
        }
    }

    fn save(&mut self, tasks: &[Task]) -> Result<()> {
        let raw = serde_json::to_string(tasks)?;
        self.store.set(KEY_TASKS, &raw)?;
        Ok(())
    }
}
