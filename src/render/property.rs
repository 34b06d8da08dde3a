//! Aligned key/value view atop the layout engine.
//!
//! ```text
//! Key        : value 1
//! LongKey    : value 2
//! Multivalue : 2
//!     element 1
//!     element 2
//! Next Key   : value 3
//! ```

use std::fmt::{self, Display};
use std::io::{self, Write};

use crate::core::{
    color::{AnsiCode, colorize},
    row::Row,
    style::LineStyle,
};
use crate::render::table::Table;

/// Handle to one added row, for targeted recoloring.
///
/// Returned by every `add*` method so painting names its row instead of
/// relying on "the last row added" staying last.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct RowMark(usize);

/// Two-column `key : value` listing with multi-value expansion.
pub struct PropertyTable {
    table: Table,
    yes: String,
    no: String,
}

impl Default for PropertyTable {
    fn default() -> Self {
        Self::new()
    }
}

impl PropertyTable {
    #[must_use]
    pub fn new() -> Self {
        Self {
            table: Table::new(LineStyle::Colon),
            yes: "Yes".to_owned(),
            no: "No".to_owned(),
        }
    }

    /// Override the boolean row texts — localisation is the caller's
    /// job, the engine only stores the strings it is given.
    #[must_use]
    pub fn bool_text(mut self, yes: impl Into<String>, no: impl Into<String>) -> Self {
        self.yes = yes.into();
        self.no = no.into();
        self
    }

    /// Append `key : value`.
    pub fn add(&mut self, key: impl Into<String>, value: impl Display) -> RowMark {
        self.push_row(Row::new().add(key).add(value.to_string()))
    }

    /// Append `key : Yes` or `key : No`.
    pub fn add_flag(&mut self, key: impl Into<String>, value: bool) -> RowMark {
        let text = if value { &self.yes } else { &self.no };
        self.push_row(Row::new().add(key).add(text.clone()))
    }

    /// Append a collection row.
    ///
    /// Empty collections keep the separator visible with an empty
    /// value; a single element behaves like [`add`](Self::add); two or
    /// more render the element count as the value and every element as
    /// an indented detail line beneath the row, in order.
    pub fn add_list<I>(&mut self, key: impl Into<String>, values: I) -> RowMark
    where
        I: IntoIterator,
        I::Item: Display,
    {
        let values: Vec<String> = values.into_iter().map(|v| v.to_string()).collect();
        let row = Row::new().add(key);
        let row = match values.len() {
            0 => row.add(""),
            1 => row.add(values.into_iter().next().unwrap_or_default()),
            n => {
                let mut row = row.add(n.to_string());
                for v in values {
                    row = row.add_detail(v);
                }
                row
            }
        };
        self.push_row(row)
    }

    /// Recolor the value cell of the marked row when `cond` holds.
    ///
    /// Single-shot: the cell's raw text is rewritten in place, so
    /// painting the same row twice nests a second escape sequence
    /// around the first. Paint each row at most once.
    pub fn paint(&mut self, mark: RowMark, color: &AnsiCode, cond: bool) {
        if !cond {
            return;
        }
        if let Some(cell) = self
            .table
            .rows_mut()
            .get_mut(mark.0)
            .and_then(Row::last_cell_mut)
        {
            *cell = colorize(color, cell);
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// # Errors
    /// Propagates write failures from `out`.
    pub fn render<W: Write>(&self, out: &mut W) -> io::Result<()> {
        self.table.render(out)
    }

    fn push_row(&mut self, row: Row) -> RowMark {
        self.table.add_row(row);
        RowMark(self.table.rows().len() - 1)
    }
}

impl fmt::Display for PropertyTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.table.fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::width::strip_ansi;

    #[test]
    fn flag_rows_use_the_yes_no_text() {
        let mut pt = PropertyTable::new();
        pt.add_flag("Locked", true);
        pt.add_flag("Hidden", false);
        let rendered = pt.to_string();
        assert_eq!(rendered, "Locked : Yes\nHidden : No \n");
    }

    #[test]
    fn bool_text_is_caller_supplied() {
        let mut pt = PropertyTable::new().bool_text("Ja", "Nein");
        pt.add_flag("Gesperrt", false);
        assert!(pt.to_string().contains("Gesperrt : Nein"));
    }

    #[test]
    fn keys_align_on_the_colon() {
        let mut pt = PropertyTable::new();
        pt.add("Name", "zsh");
        pt.add("Installed Size", "1.2 MiB");
        let rendered = pt.to_string();
        assert_eq!(rendered, "Name           : zsh    \nInstalled Size : 1.2 MiB\n");
    }

    #[test]
    fn empty_list_keeps_the_separator_visible() {
        let mut pt = PropertyTable::new();
        pt.add_list("Conflicts", Vec::<String>::new());
        assert_eq!(pt.to_string(), "Conflicts : \n");
    }

    #[test]
    fn singleton_list_behaves_like_a_scalar() {
        let mut pt = PropertyTable::new();
        pt.add_list("Provides", ["shell"]);
        assert_eq!(pt.to_string(), "Provides : shell\n");
    }

    #[test]
    fn longer_lists_expand_into_detail_lines() {
        let mut pt = PropertyTable::new();
        pt.add_list("Recommends", ["pkg-one", "pkg-two", "pkg-three"]);
        let rendered = pt.to_string();
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("Recommends : 3"));
        assert_eq!(lines[1].trim_end(), "    pkg-one");
        assert_eq!(lines[2].trim_end(), "    pkg-two");
        assert_eq!(lines[3].trim_end(), "    pkg-three");
    }

    #[test]
    fn paint_targets_the_marked_row() {
        let mut pt = PropertyTable::new();
        let first = pt.add("Status", "broken");
        pt.add("Name", "zsh");
        pt.paint(first, &AnsiCode::red(), true);

        let rendered = pt.to_string();
        assert!(rendered.contains("\x1b[31m"));
        // colouring must not disturb the alignment
        assert_eq!(
            strip_ansi(&rendered),
            "Status : broken\nName   : zsh   \n"
        );
    }

    #[test]
    fn paint_with_false_condition_is_a_noop() {
        let mut pt = PropertyTable::new();
        let mark = pt.add("Status", "ok");
        pt.paint(mark, &AnsiCode::red(), false);
        assert!(!pt.to_string().contains('\x1b'));
    }
}
