//! Console rendering of boards, columns, and task tables.
//!
//! Rendering is stateless: every call prints from the data it is handed,
//! and callers re-derive that data from the full task list after each
//! mutation. The light-theme flag switches the table format.

use super::board::BoardView;
use super::task::Task;
use crate::libs::messages::Message;
use crate::msg_print;
use anyhow::Result;
use prettytable::{format, row, Table};

pub struct View {}

impl View {
    /// Board navigation list; the active board carries a marker. Exactly
    /// one row is marked, matched by exact string equality.
    pub fn boards(boards: &[String], active: Option<&str>) -> Result<()> {
        msg_print!(Message::BoardsHeader);
        let mut table = Table::new();
        for board in boards {
            let marker = if active == Some(board.as_str()) { "▸" } else { "" };
            table.add_row(row![marker, board]);
        }
        table.printstd();
        Ok(())
    }

    /// One table per status column, in configured order. Empty columns
    /// still render their header so the column layout stays visible.
    pub fn columns(view: &BoardView, light_theme: bool) -> Result<()> {
        msg_print!(Message::BoardHeader(view.board.clone()), true);
        for column in &view.columns {
            let mut table = Table::new();
            if light_theme {
                table.set_format(*format::consts::FORMAT_BOX_CHARS);
            }
            table.add_row(row![
                format!("{} ({})", column.status.to_uppercase(), column.tasks.len())
            ]);
            for task in &column.tasks {
                table.add_row(row![format!("[{}] {}", task.id, task.title)]);
            }
            table.printstd();
        }
        Ok(())
    }

    /// Flat task table, independent of board grouping.
    pub fn tasks(tasks: &[Task]) -> Result<()> {
        let mut table = Table::new();
        table.add_row(row!["ID", "TITLE", "STATUS", "BOARD"]);
        for task in tasks {
            table.add_row(row![task.id, task.title, task.status, task.board]);
        }
        table.printstd();
        Ok(())
    }
}
