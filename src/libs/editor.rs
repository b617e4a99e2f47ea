//! Editor session state machine.
//!
//! Create and edit flows share one editor with explicit states instead of
//! ad-hoc callbacks: `Closed`, `Creating`, and `Editing(id)`. A single
//! `transition` function accepts events and either moves the machine or
//! rejects the event for the current state. Opening while a session is
//! already open replaces it wholesale (last-open-wins); there is never
//! more than one pending session.

use crate::libs::task::TaskDraft;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorState {
    Closed,
    Creating,
    Editing(i32),
}

#[derive(Debug, Clone)]
pub enum EditorEvent {
    OpenCreate,
    /// Opens an edit session for `id`. When the task could not be found the
    /// prefill is `None` and the draft starts blank; the failure surfaces
    /// later, at save time, as a not-found result.
    OpenEdit { id: i32, prefill: Option<TaskDraft> },
    Save,
    Delete,
    Cancel,
}

/// What the caller must do after a successful transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    /// A session opened; fill in the draft, then send `Save`.
    Opened,
    /// Create a task from the draft.
    Create(TaskDraft),
    /// Overwrite the task with this id from the draft.
    Overwrite(i32, TaskDraft),
    /// Delete the task with this id.
    Remove(i32),
    /// Session discarded; nothing was written.
    Discarded,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TransitionError {
    #[error("no editor session is open")]
    NotOpen,
    #[error("only an edit session can delete its task")]
    NoDeleteTarget,
}

#[derive(Debug, Default)]
pub struct Editor {
    state: EditorState,
    draft: TaskDraft,
}

impl Default for EditorState {
    fn default() -> Self {
        EditorState::Closed
    }
}

impl Editor {
    pub fn new() -> Self {
        Editor::default()
    }

    pub fn state(&self) -> EditorState {
        self.state
    }

    pub fn draft(&self) -> &TaskDraft {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut TaskDraft {
        &mut self.draft
    }

    pub fn transition(&mut self, event: EditorEvent) -> Result<Transition, TransitionError> {
        match (self.state, event) {
            // Open events are legal from any state and replace whatever
            // session was pending.
            (_, EditorEvent::OpenCreate) => {
                self.state = EditorState::Creating;
                self.draft = TaskDraft::default();
                Ok(Transition::Opened)
            }
            (_, EditorEvent::OpenEdit { id, prefill }) => {
                self.state = EditorState::Editing(id);
                self.draft = prefill.unwrap_or_default();
                Ok(Transition::Opened)
            }

            (EditorState::Creating, EditorEvent::Save) => {
                self.state = EditorState::Closed;
                Ok(Transition::Create(std::mem::take(&mut self.draft)))
            }
            (EditorState::Editing(id), EditorEvent::Save) => {
                self.state = EditorState::Closed;
                Ok(Transition::Overwrite(id, std::mem::take(&mut self.draft)))
            }
            (EditorState::Closed, EditorEvent::Save) => Err(TransitionError::NotOpen),

            (EditorState::Editing(id), EditorEvent::Delete) => {
                self.state = EditorState::Closed;
                self.draft = TaskDraft::default();
                Ok(Transition::Remove(id))
            }
            (EditorState::Creating, EditorEvent::Delete) => Err(TransitionError::NoDeleteTarget),
            (EditorState::Closed, EditorEvent::Delete) => Err(TransitionError::NotOpen),

            (EditorState::Closed, EditorEvent::Cancel) => Err(TransitionError::NotOpen),
            (_, EditorEvent::Cancel) => {
                self.state = EditorState::Closed;
                self.draft = TaskDraft::default();
                Ok(Transition::Discarded)
            }
        }
    }
}
