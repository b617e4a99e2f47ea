//! Board sidebar visibility toggle.
//!
//! Controls whether `show` and post-mutation refreshes print the board
//! navigation list above the columns. Stored as the `"true"` / `"false"`
//! string the original storage layout used.

use crate::db::store::Store;
use crate::libs::messages::Message;
use crate::msg_success;
use anyhow::Result;
use clap::{Args, Subcommand};

#[derive(Debug, Args)]
pub struct SidebarArgs {
    #[command(subcommand)]
    command: SidebarCommand,
}

#[derive(Debug, Subcommand)]
enum SidebarCommand {
    /// Show the board sidebar
    Show,
    /// Hide the board sidebar
    Hide,
}

pub fn cmd(args: SidebarArgs) -> Result<()> {
    let mut store = Store::new()?;
    match args.command {
        SidebarCommand::Show => {
            store.set_show_sidebar(true)?;
            msg_success!(Message::SidebarShown);
        }
        SidebarCommand::Hide => {
            store.set_show_sidebar(false)?;
            msg_success!(Message::SidebarHidden);
        }
    }
    Ok(())
}
