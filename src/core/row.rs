//! Row model: ordered cells plus attached detail lines.

/// One table row.
///
/// Cells are appended left to right; detail lines are secondary text
/// rendered as indented continuation lines beneath the row. Rows with
/// differing cell counts are legal — the layout engine pads the gaps.
#[derive(Clone, Debug, Default)]
pub struct Row {
    cells: Vec<String>,
    details: Vec<String>,
}

impl Row {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Reserve room for `n` cells up front.
    #[must_use]
    pub fn with_capacity(n: usize) -> Self {
        Self {
            cells: Vec::with_capacity(n),
            details: Vec::new(),
        }
    }

    /// Append one cell; chainable.
    #[must_use]
    pub fn add(mut self, cell: impl Into<String>) -> Self {
        self.cells.push(cell.into());
        self
    }

    /// Append one detail line; chainable.
    #[must_use]
    pub fn add_detail(mut self, line: impl Into<String>) -> Self {
        self.details.push(line.into());
        self
    }

    #[must_use]
    pub fn column_count(&self) -> usize {
        self.cells.len()
    }

    /// Cell at `col`, if this row reaches that far.
    #[must_use]
    pub fn get(&self, col: usize) -> Option<&str> {
        self.cells.get(col).map(String::as_str)
    }

    #[must_use]
    pub fn cells(&self) -> &[String] {
        &self.cells
    }

    #[must_use]
    pub fn details(&self) -> &[String] {
        &self.details
    }

    /// The only mutation the model supports beyond appends: the
    /// recoloring hook rewrites the most recently added cell in place.
    pub(crate) fn last_cell_mut(&mut self) -> Option<&mut String> {
        self.cells.last_mut()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chained_appends_keep_order() {
        let r = Row::new().add("a").add("b").add("c");
        assert_eq!(r.column_count(), 3);
        assert_eq!(r.get(0), Some("a"));
        assert_eq!(r.get(2), Some("c"));
        assert_eq!(r.get(3), None);
    }

    #[test]
    fn details_are_independent_of_cells() {
        let r = Row::new().add("key").add_detail("one").add_detail("two");
        assert_eq!(r.column_count(), 1);
        assert_eq!(r.details(), ["one", "two"]);
    }

    #[test]
    fn last_cell_is_rewritable() {
        let mut r = Row::new().add("k").add("v");
        *r.last_cell_mut().unwrap() = "painted".into();
        assert_eq!(r.get(1), Some("painted"));
    }
}
