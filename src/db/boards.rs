//! Board derivation and active-board selection.
//!
//! Boards are not stored entities. The board list is derived from the task
//! list on every fetch: trimmed, non-empty board names in first-occurrence
//! order. Only the *active* board is persisted, as a JSON string under its
//! own storage key, and it is re-validated against the derived set every
//! time it is read.

use crate::db::store::{Store, KEY_ACTIVE_BOARD};
use crate::libs::task::Task;
use crate::msg_debug;
use anyhow::Result;

pub struct Boards {
    store: Store,
}

impl Boards {
    pub fn new() -> Result<Self> {
        Ok(Boards { store: Store::new()? })
    }

    /// Distinct non-empty board names, whitespace-trimmed, in order of
    /// first occurrence.
    pub fn derive(tasks: &[Task]) -> Vec<String> {
        let mut boards: Vec<String> = Vec::new();
        for task in tasks {
            let name = task.board.trim();
            if name.is_empty() {
                continue;
            }
            if !boards.iter().any(|b| b == name) {
                boards.push(name.to_string());
            }
        }
        boards
    }

    /// The persisted selection when it still names a derived board,
    /// otherwise the first derived board, otherwise `None`. A stale
    /// selection falls back silently; nothing is surfaced to the user.
    pub fn active(&self, tasks: &[Task]) -> Result<Option<String>> {
        let boards = Self::derive(tasks);
        if boards.is_empty() {
            return Ok(None);
        }
        if let Some(raw) = self.store.get(KEY_ACTIVE_BOARD)? {
            let persisted: String = serde_json::from_str(&raw)?;
            if boards.iter().any(|b| *b == persisted) {
                return Ok(Some(persisted));
            }
            msg_debug!("active board '{}' no longer exists, falling back to '{}'", persisted, boards[0]);
        }
        Ok(Some(boards[0].clone()))
    }

    /// Persists the selection. Idempotent; does not validate the name.
    pub fn set_active(&mut self, name: &str) -> Result<()> {
        let raw = serde_json::to_string(name)?;
        self.store.set(KEY_ACTIVE_BOARD, &raw)?;
        Ok(())
    }
}
