//! Read-only render of the active board.

use crate::commands;
use anyhow::Result;

pub fn cmd() -> Result<()> {
    commands::refresh()
}
