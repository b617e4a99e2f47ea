//! Board navigation command: list boards and switch the active one.
//!
//! Switching persists the selection and then re-renders the columns, the
//! same sequence the original ran on a board click. Switching to a board
//! that no task references is rejected; boards only exist through their
//! tasks.

use crate::db::boards::Boards;
use crate::db::tasks::Tasks;
use crate::libs::messages::Message;
use crate::libs::task::TaskFilter;
use crate::libs::view::View;
use crate::{commands, msg_error, msg_info, msg_success};
use anyhow::Result;
use clap::{Args, Subcommand};

#[derive(Debug, Args)]
pub struct BoardArgs {
    #[command(subcommand)]
    command: Option<BoardCommand>,
}

#[derive(Debug, Subcommand)]
enum BoardCommand {
    /// List all boards
    List,
    /// Switch the active board
    Switch {
        /// Board name to activate
        name: String,
    },
}

pub fn cmd(args: BoardArgs) -> Result<()> {
    match args.command {
        Some(BoardCommand::List) => handle_list(),
        Some(BoardCommand::Switch { name }) => handle_switch(name),
        None => commands::refresh(),
    }
}

fn handle_list() -> Result<()> {
    let tasks = Tasks::new()?.fetch(TaskFilter::All)?;
    let boards_db = Boards::new()?;
    let boards = Boards::derive(&tasks);

    if boards.is_empty() {
        msg_info!(Message::NoBoardsFound);
        return Ok(());
    }

    let active = boards_db.active(&tasks)?;
    View::boards(&boards, active.as_deref())
}

fn handle_switch(name: String) -> Result<()> {
    let tasks = Tasks::new()?.fetch(TaskFilter::All)?;
    let boards = Boards::derive(&tasks);

    if !boards.iter().any(|b| *b == name) {
        msg_error!(Message::BoardNotFound(name));
        return Ok(());
    }

    Boards::new()?.set_active(&name)?;
    msg_success!(Message::BoardSwitched(name));
    commands::refresh()
}
