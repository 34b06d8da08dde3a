//! Public-facing crate root – re-exports + one-shot helper.

pub mod cli;
pub mod core;
pub mod render;

pub use crate::core::{
    color::{AnsiCode, ColorError, colorize},
    error::TableError,
    row::Row,
    style::LineStyle,
    width::{strip_ansi, truncate_visible, visible_width},
};

pub use crate::render::{ColumnMode, PropertyTable, RowMark, Table, Wrap};

/// Convenience function: render rows to stdout, wrapped to the current
/// terminal width.
pub fn print_table(
    header: Option<Row>,
    rows: Vec<Row>,
    style: LineStyle,
) -> Result<(), TableError> {
    use std::io::{Write, stdout};

    let mut table = Table::new(style);
    table.set_screen_width(crate::core::screen::screen_width());
    table.set_wrap(Wrap::Enabled {
        force_break_after: None,
    });
    if let Some(h) = header {
        table.set_header(h);
    }
    for row in rows {
        table.add_row(row);
    }

    let mut out = stdout().lock();
    table.render(&mut out)?;
    out.flush()?;
    Ok(())
}
