pub mod board;
pub mod init;
pub mod show;
pub mod sidebar;
pub mod task;
pub mod theme;

use crate::db::boards::Boards;
use crate::db::store::Store;
use crate::db::tasks::Tasks;
use crate::libs::board::BoardView;
use crate::libs::config::Config;
use crate::libs::messages::Message;
use crate::libs::task::TaskFilter;
use crate::libs::view::View;
use crate::msg_info;
use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Initialize storage and configuration")]
    Init(init::InitArgs),
    #[command(about = "Create, edit, delete, and list tasks")]
    Task(task::TaskArgs),
    #[command(about = "List boards and switch the active board")]
    Board(board::BoardArgs),
    #[command(about = "Show the active board's columns")]
    Show,
    #[command(about = "Switch between light and dark table theme")]
    Theme(theme::ThemeArgs),
    #[command(about = "Show or hide the board sidebar")]
    Sidebar(sidebar::SidebarArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Init(args) => init::cmd(args),
            Commands::Task(args) => task::cmd(args),
            Commands::Board(args) => board::cmd(args),
            Commands::Show => show::cmd(),
            Commands::Theme(args) => theme::cmd(args),
            Commands::Sidebar(args) => sidebar::cmd(args),
        }
    }
}

/// Re-derives and re-renders the active board from the full task list.
/// Every successful mutation and every active-board change ends here;
/// nothing is patched incrementally.
pub(crate) fn refresh() -> Result<()> {
    let tasks_db = Tasks::new()?;
    let tasks = tasks_db.fetch(TaskFilter::All)?;

    let boards_db = Boards::new()?;
    let Some(active) = boards_db.active(&tasks)? else {
        msg_info!(Message::NoBoardsFound);
        return Ok(());
    };

    let store = Store::new()?;
    if store.show_sidebar()? {
        View::boards(&Boards::derive(&tasks), Some(active.as_str()))?;
    }

    let config = Config::read()?;
    let view = BoardView::build(&tasks, &active, &config.statuses);
    View::columns(&view, store.light_theme()?)?;
    if view.total() == 0 {
        msg_info!(Message::BoardEmpty(active));
    }
    Ok(())
}
