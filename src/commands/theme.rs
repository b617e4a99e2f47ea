//! Light/dark theme toggle.
//!
//! Persists the preference as the `"enabled"` / `"disabled"` string the
//! original storage layout used. The flag only affects how tables are
//! rendered; it does not trigger a refresh.

use crate::db::store::Store;
use crate::libs::messages::Message;
use crate::msg_success;
use anyhow::Result;
use clap::{Args, Subcommand};

#[derive(Debug, Args)]
pub struct ThemeArgs {
    #[command(subcommand)]
    command: ThemeCommand,
}

#[derive(Debug, Subcommand)]
enum ThemeCommand {
    /// Enable the light theme
    On,
    /// Disable the light theme
    Off,
}

pub fn cmd(args: ThemeArgs) -> Result<()> {
    let mut store = Store::new()?;
    match args.command {
        ThemeCommand::On => {
            store.set_light_theme(true)?;
            msg_success!(Message::ThemeLightEnabled);
        }
        ThemeCommand::Off => {
            store.set_light_theme(false)?;
            msg_success!(Message::ThemeLightDisabled);
        }
    }
    Ok(())
}
