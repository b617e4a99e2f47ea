//! Task management command: create, edit, delete, and list.
//!
//! Create and edit run through the editor state machine; missing values
//! are collected interactively. Every successful mutation ends with a full
//! refresh of the active board. Not-found failures are reported and skip
//! the refresh.

use crate::db::boards::Boards;
use crate::db::tasks::Tasks;
use crate::libs::config::Config;
use crate::libs::editor::{Editor, EditorEvent, Transition};
use crate::libs::messages::Message;
use crate::libs::task::{Task, TaskFilter};
use crate::libs::view::View;
use crate::{commands, msg_bail_anyhow, msg_error, msg_info, msg_print, msg_success};
use anyhow::Result;
use clap::{Args, Subcommand};
use dialoguer::{theme::ColorfulTheme, Confirm, Input, Select};

#[derive(Debug, Args)]
pub struct TaskArgs {
    #[command(subcommand)]
    command: Option<TaskCommand>,
}

#[derive(Debug, Subcommand)]
enum TaskCommand {
    /// Create a new task on the active board
    Create {
        /// Task title
        #[arg(short, long)]
        title: Option<String>,
        /// Task description
        #[arg(short, long)]
        description: Option<String>,
        /// Status column
        #[arg(short, long)]
        status: Option<String>,
        /// Board name; defaults to the active board
        #[arg(short, long)]
        board: Option<String>,
    },
    /// Edit an existing task
    Edit {
        /// Task ID to edit
        id: i32,
    },
    /// Delete a task
    Delete {
        /// Task ID to delete
        id: i32,
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
    /// List tasks
    List {
        /// Only tasks on this board
        #[arg(long)]
        board: Option<String>,
        /// Only tasks in this status column
        #[arg(long, requires = "board")]
        status: Option<String>,
    },
}

pub fn cmd(args: TaskArgs) -> Result<()> {
    match args.command {
        Some(TaskCommand::Create {
            title,
            description,
            status,
            board,
        }) => handle_create(title, description, status, board),
        Some(TaskCommand::Edit { id }) => handle_edit(id),
        Some(TaskCommand::Delete { id, yes }) => handle_delete(id, yes),
        Some(TaskCommand::List { board, status }) => handle_list(board, status),
        None => handle_list(None, None),
    }
}

fn handle_create(title: Option<String>, description: Option<String>, status: Option<String>, board: Option<String>) -> Result<()> {
    let config = Config::read()?;
    let mut tasks_db = Tasks::with_strategy(config.id_strategy)?;
    let all = tasks_db.fetch(TaskFilter::All)?;
    let active = Boards::new()?.active(&all)?;

    let mut editor = Editor::new();
    editor.transition(EditorEvent::OpenCreate)?;

    editor.draft_mut().title = match title {
        Some(t) => t,
        None => Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptTaskTitle.to_string())
            .interact_text()?,
    };

    editor.draft_mut().description = match description {
        Some(d) => d,
        None => Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptTaskDescription.to_string())
            .allow_empty(true)
            .interact_text()?,
    };

    editor.draft_mut().status = match status {
        Some(s) => {
            if !config.statuses.contains(&s) {
                msg_bail_anyhow!(Message::UnknownStatus(s));
            }
            s
        }
        None => {
            let selection = Select::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptTaskStatus.to_string())
                .items(&config.statuses)
                .default(0)
                .interact()?;
            config.statuses[selection].clone()
        }
    };

    editor.draft_mut().board = match board.or(active) {
        Some(b) => b,
        None => Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptTaskBoard.to_string())
            .interact_text()?,
    };

    if let Transition::Create(draft) = editor.transition(EditorEvent::Save)? {
        let task = tasks_db.create(&draft)?;
        msg_success!(Message::TaskCreated(task.id));
        commands::refresh()?;
    }
    Ok(())
}

fn handle_edit(id: i32) -> Result<()> {
    let config = Config::read()?;
    let mut tasks_db = Tasks::new()?;
    let current = tasks_db.get_by_id(id)?;

    let mut editor = Editor::new();
    editor.transition(EditorEvent::OpenEdit {
        id,
        prefill: current.as_ref().map(Into::into),
    })?;

    msg_print!(Message::EditingTask(id), true);
    let draft = editor.draft().clone();

    editor.draft_mut().title = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptTaskTitle.to_string())
        .default(draft.title)
        .interact_text()?;

    editor.draft_mut().description = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptTaskDescription.to_string())
        .default(draft.description)
        .allow_empty(true)
        .interact_text()?;

    let current_index = config.statuses.iter().position(|s| *s == draft.status).unwrap_or(0);
    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptTaskStatus.to_string())
        .items(&config.statuses)
        .default(current_index)
        .interact()?;
    editor.draft_mut().status = config.statuses[selection].clone();

    if let Transition::Overwrite(id, draft) = editor.transition(EditorEvent::Save)? {
        let task = Task {
            id,
            title: draft.title,
            description: draft.description,
            status: draft.status,
            board: draft.board,
        };
        match tasks_db.put(id, &task)? {
            Some(updated) => {
                msg_success!(Message::TaskUpdated(updated.id));
                commands::refresh()?;
            }
            None => msg_error!(Message::TaskNotFoundWithId(id)),
        }
    }
    Ok(())
}

fn handle_delete(id: i32, yes: bool) -> Result<()> {
    if !yes {
        let confirmed = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::ConfirmDeleteTask(id).to_string())
            .default(false)
            .interact()?;
        if !confirmed {
            msg_info!(Message::OperationCancelled);
            return Ok(());
        }
    }

    let mut tasks_db = Tasks::new()?;
    let current = tasks_db.get_by_id(id)?;

    let mut editor = Editor::new();
    editor.transition(EditorEvent::OpenEdit {
        id,
        prefill: current.as_ref().map(Into::into),
    })?;

    if let Transition::Remove(id) = editor.transition(EditorEvent::Delete)? {
        if tasks_db.delete(id)? {
            msg_success!(Message::TaskDeleted(id));
            commands::refresh()?;
        } else {
            msg_error!(Message::TaskNotFoundWithId(id));
        }
    }
    Ok(())
}

fn handle_list(board: Option<String>, status: Option<String>) -> Result<()> {
    let filter = match (board, status) {
        (Some(b), Some(s)) => TaskFilter::BoardStatus(b, s),
        (Some(b), None) => TaskFilter::Board(b),
        _ => TaskFilter::All,
    };

    let tasks = Tasks::new()?.fetch(filter)?;
    if tasks.is_empty() {
        msg_info!(Message::NoTasksFound);
        return Ok(());
    }

    msg_print!(Message::TasksHeader, true);
    View::tasks(&tasks)
}
