//! Display implementation for kanbo application messages.
//!
//! All user-facing text lives here, keyed by `Message` variant, so the
//! command layer never formats strings inline. Messages with dynamic
//! content carry their parameters in the enum variant.

use super::types::Message;
use std::fmt;

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            // Task messages
            Message::TaskCreated(id) => format!("Task {} created successfully", id),
            Message::TaskUpdated(id) => format!("Task {} updated successfully", id),
            Message::TaskDeleted(id) => format!("Task {} deleted successfully", id),
            Message::TaskNotFoundWithId(id) => format!("Task with ID {} not found", id),
            Message::TasksHeader => "📋 Tasks".to_string(),
            Message::NoTasksFound => "No tasks found".to_string(),
            Message::ConfirmDeleteTask(id) => format!("Are you sure you want to delete task {}?", id),
            Message::UnknownStatus(status) => format!("Status '{}' is not one of the configured columns", status),
            Message::EditingTask(id) => format!("Editing task {}", id),

            // Board messages
            Message::BoardsHeader => "🗂 Boards".to_string(),
            Message::BoardHeader(board) => format!("🗂 {}", board),
            Message::NoBoardsFound => "No boards yet. Create a task to start a board".to_string(),
            Message::BoardSwitched(board) => format!("Switched to board '{}'", board),
            Message::BoardNotFound(board) => format!("Board '{}' not found", board),
            Message::BoardEmpty(board) => format!("Board '{}' has no tasks", board),

            // Storage messages
            Message::StorageInitialized => "Storage initialized".to_string(),
            Message::StorageAlreadyInitialized => "Storage already initialized".to_string(),
            Message::DemoDataSeeded(count) => format!("Seeded {} demo tasks", count),

            // Configuration messages
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigParseError => "Failed to parse configuration".to_string(),

            // UI state messages
            Message::ThemeLightEnabled => "Light theme enabled".to_string(),
            Message::ThemeLightDisabled => "Light theme disabled".to_string(),
            Message::SidebarShown => "Board sidebar shown".to_string(),
            Message::SidebarHidden => "Board sidebar hidden".to_string(),

            // Prompts
            Message::PromptTaskTitle => "Enter task title".to_string(),
            Message::PromptTaskDescription => "Enter description".to_string(),
            Message::PromptTaskStatus => "Select status".to_string(),
            Message::PromptTaskBoard => "Enter board name".to_string(),
            Message::PromptStatuses => "Enter status columns (comma-separated, in display order)".to_string(),
            Message::PromptIdStrategy => "Select ID assignment strategy".to_string(),

            // Generic
            Message::OperationCancelled => "Operation cancelled".to_string(),
        };
        write!(f, "{}", text)
    }
}
