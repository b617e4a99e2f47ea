//! # Kanbo - Command-Line Kanban Board
//!
//! A command-line utility for managing tasks on kanban boards. Tasks carry
//! a status column and a board name; boards are derived from the tasks that
//! reference them, and the active board is a persisted selection.
//!
//! ## Features
//!
//! - **Task Management**: Create, edit, and delete tasks with interactive prompts
//! - **Board Derivation**: Boards exist exactly as long as a task references them
//! - **Column Views**: Tasks rendered per status column in a fixed, configurable order
//! - **Full Refresh**: Every mutation re-renders the active board from the complete task list
//! - **Local Storage**: A flat key-value storage file, rewritten whole on every change
//!
//! ## Usage
//!
//! ```rust,no_run
//! use kanbo::commands::Cli;
//!
//! fn main() -> anyhow::Result<()> {
//!     Cli::menu()
//! }
//! ```

pub mod commands;
pub mod db;
pub mod libs;
