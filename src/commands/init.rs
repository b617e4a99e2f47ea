//! Storage and configuration initialization command.
//!
//! Creates the storage file with its default flag keys when it does not
//! exist yet, the command-line counterpart of the original first-load
//! seeding. `--demo` additionally seeds a small example board so a new
//! install has something to render.

use crate::db::store::{Store, KEY_EDIT_TASK_FORM, KEY_SHOW_SIDEBAR, KEY_TASKS};
use crate::libs::config::Config;
use crate::libs::messages::Message;
use crate::libs::task::Task;
use crate::{commands, msg_success, msg_warning};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct InitArgs {
    /// Seed a demo board with example tasks
    #[arg(long)]
    demo: bool,

    /// Skip the interactive wizard and write the default configuration
    #[arg(long)]
    defaults: bool,
}

fn demo_tasks() -> Vec<Task> {
    let board = "Getting Started";
    vec![
        Task {
            id: 1,
            title: "Create your first task".to_string(),
            description: "Run `kanbo task create` and fill in the prompts".to_string(),
            status: "todo".to_string(),
            board: board.to_string(),
        },
        Task {
            id: 2,
            title: "Explore the columns".to_string(),
            description: "Tasks move between columns when their status changes".to_string(),
            status: "doing".to_string(),
            board: board.to_string(),
        },
        Task {
            id: 3,
            title: "Install kanbo".to_string(),
            description: String::new(),
            status: "done".to_string(),
            board: board.to_string(),
        },
    ]
}

pub fn cmd(init_args: InitArgs) -> Result<()> {
    let config = if init_args.defaults { Config::default() } else { Config::init()? };
    config.save()?;
    msg_success!(Message::ConfigSaved);

    let mut store = Store::new()?;
    if store.get(KEY_TASKS)?.is_some() {
        msg_warning!(Message::StorageAlreadyInitialized);
        return Ok(());
    }

    let tasks = if init_args.demo { demo_tasks() } else { Vec::new() };
    store.set(KEY_TASKS, &serde_json::to_string(&tasks)?)?;
    store.set(KEY_SHOW_SIDEBAR, "true")?;
    store.set(KEY_EDIT_TASK_FORM, "false")?;

    msg_success!(Message::StorageInitialized);
    if init_args.demo {
        msg_success!(Message::DemoDataSeeded(tasks.len()));
    }
    commands::refresh()
}
