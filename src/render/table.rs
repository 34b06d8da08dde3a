//! Column layout + border drawing engine.
//!
//! A [`Table`] owns the rows, measures visible column widths, decides
//! between abbreviating flagged columns and wrapping the whole table
//! into column groups, and draws the result with the glyphs of the
//! configured [`LineStyle`].

use std::borrow::Cow;
use std::fmt;
use std::io::{self, Write};

use crate::core::{
    constants::{ABBREV_MIN_WIDTH, BORDER_OVERHEAD, DEFAULT_SCREEN_WIDTH, DETAIL_INDENT,
        SEPARATOR_WIDTH},
    row::Row,
    style::{Glyphs, LineStyle},
    width::{truncate_visible, visible_width},
};

/// Whether an over-wide table is split into column groups.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum Wrap {
    #[default]
    Disabled,
    Enabled {
        /// End the first group after this column; later groups then
        /// repeat column 0 as the row key. `None` groups greedily.
        force_break_after: Option<usize>,
    },
}

/// Per-column render mode. One mode per column; the last
/// `allow_abbrev`/`set_edition` call on a column wins.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum ColumnMode {
    #[default]
    Normal,
    /// Truncate over-wide cells with a marker instead of wrapping.
    Abbrev,
    /// Right-align (combined name/version style values).
    Edition,
}

/// The layout engine.
pub struct Table {
    header: Option<Row>,
    rows: Vec<Row>,
    style: LineStyle,
    margin: usize,
    screen_width: usize,
    wrap: Wrap,
    modes: Vec<ColumnMode>,
}

impl Table {
    /// An empty table. The style is explicit — there is no process-wide
    /// default; callers own their fallback.
    #[must_use]
    pub fn new(style: LineStyle) -> Self {
        Self {
            header: None,
            rows: Vec::new(),
            style,
            margin: 0,
            screen_width: DEFAULT_SCREEN_WIDTH,
            wrap: Wrap::Disabled,
            modes: Vec::new(),
        }
    }

    // --- Population ---

    /// Store the header row. A second call replaces the first.
    pub fn set_header(&mut self, row: Row) {
        self.header = Some(row);
    }

    pub fn add_row(&mut self, row: Row) {
        self.rows.push(row);
    }

    /// Stable lexicographic sort by the cell at `col`; rows without
    /// that column sort as the empty string.
    pub fn sort_by_column(&mut self, col: usize) {
        self.rows
            .sort_by(|a, b| a.get(col).unwrap_or("").cmp(b.get(col).unwrap_or("")));
    }

    // --- Configuration (effective on next render) ---

    pub fn set_line_style(&mut self, style: LineStyle) {
        self.style = style;
    }

    /// Spaces padded onto both ends of every emitted line.
    pub fn set_margin(&mut self, margin: usize) {
        self.margin = margin;
    }

    /// Target width in columns. Zero is clamped to 1.
    pub fn set_screen_width(&mut self, width: usize) {
        self.screen_width = width.max(1);
    }

    pub fn set_wrap(&mut self, wrap: Wrap) {
        self.wrap = wrap;
    }

    /// Let `col` shrink below its content width, truncating cells.
    pub fn allow_abbrev(&mut self, col: usize) {
        self.set_mode(col, ColumnMode::Abbrev);
    }

    /// Render `col` in edition mode (right-aligned).
    pub fn set_edition(&mut self, col: usize) {
        self.set_mode(col, ColumnMode::Edition);
    }

    fn set_mode(&mut self, col: usize, mode: ColumnMode) {
        if self.modes.len() <= col {
            self.modes.resize(col + 1, ColumnMode::Normal);
        }
        self.modes[col] = mode;
    }

    fn mode(&self, col: usize) -> ColumnMode {
        self.modes.get(col).copied().unwrap_or_default()
    }

    // --- Accessors ---

    /// True iff no data rows have been added; a header alone does not
    /// count.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    #[must_use]
    pub fn header(&self) -> Option<&Row> {
        self.header.as_ref()
    }

    #[must_use]
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn rows_mut(&mut self) -> &mut Vec<Row> {
        &mut self.rows
    }

    // --- Measurement ---

    fn column_count(&self) -> usize {
        self.header
            .iter()
            .chain(&self.rows)
            .map(Row::column_count)
            .max()
            .unwrap_or(0)
    }

    /// Maximum visible width per column over header + all rows.
    /// Derived fresh on every render, so it is never stale.
    fn natural_widths(&self, ncol: usize) -> Vec<usize> {
        let mut widths = vec![0usize; ncol];
        for row in self.header.iter().chain(&self.rows) {
            for (i, cell) in row.cells().iter().enumerate() {
                widths[i] = widths[i].max(visible_width(cell));
            }
        }
        widths
    }

    fn separator_width(&self) -> usize {
        if self.style.glyphs().vertical.is_empty() {
            1
        } else {
            SEPARATOR_WIDTH
        }
    }

    /// Printed width of one block holding `cols`, margins included.
    fn block_width(&self, widths: &[usize], cols: &[usize]) -> usize {
        let content: usize = cols.iter().map(|&c| widths[c]).sum::<usize>()
            + self.separator_width() * cols.len().saturating_sub(1);
        let border = if self.style.is_bordered() {
            BORDER_OVERHEAD
        } else {
            0
        };
        content + border + 2 * self.margin
    }

    /// Shrink abbreviation-flagged columns until the table fits the
    /// screen (or the flagged columns hit their floor). Abbreviation is
    /// independent of wrapping: it narrows single columns, wrapping
    /// reshapes the whole table.
    fn fit_widths(&self, mut widths: Vec<usize>) -> Vec<usize> {
        let all: Vec<usize> = (0..widths.len()).collect();
        let total = self.block_width(&widths, &all);
        if total <= self.screen_width {
            return widths;
        }
        let mut excess = total - self.screen_width;
        for (c, w) in widths.iter_mut().enumerate() {
            if self.mode(c) != ColumnMode::Abbrev {
                continue;
            }
            let cut = (*w).saturating_sub(ABBREV_MIN_WIDTH).min(excess);
            *w -= cut;
            excess -= cut;
            if excess == 0 {
                break;
            }
        }
        widths
    }

    /// Partition columns into consecutive groups that each fit the
    /// screen. With a forced first break, later groups are prefixed by
    /// column 0 as the row key; otherwise grouping is greedy
    /// left-to-right. Every group holds at least one data column even
    /// when that column alone is over-wide.
    fn wrap_groups(&self, widths: &[usize], force_break_after: Option<usize>) -> Vec<Vec<usize>> {
        let ncol = widths.len();
        let mut groups: Vec<Vec<usize>> = Vec::new();

        let (start, key) = match force_break_after {
            Some(k) => {
                let k = k.min(ncol - 1);
                groups.push((0..=k).collect());
                if k + 1 == ncol {
                    return groups;
                }
                (k + 1, Some(0usize))
            }
            None => (0, None),
        };

        let base = usize::from(key.is_some());
        let mut cur: Vec<usize> = key.into_iter().collect();
        for c in start..ncol {
            if cur.len() > base {
                let cand = self.block_width(widths, &cur) + self.separator_width() + widths[c];
                if cand > self.screen_width {
                    groups.push(std::mem::take(&mut cur));
                    cur.extend(key);
                }
            }
            cur.push(c);
        }
        groups.push(cur);
        groups
    }

    // --- Drawing ---

    /// Render the table into a string.
    ///
    /// A table with neither header nor rows renders nothing; a header
    /// alone renders its block.
    #[must_use]
    pub fn render_to_string(&self) -> String {
        let mut out = String::new();
        let ncol = self.column_count();
        if ncol == 0 {
            return out;
        }

        let widths = self.fit_widths(self.natural_widths(ncol));
        let all: Vec<usize> = (0..ncol).collect();
        let fits = self.block_width(&widths, &all) <= self.screen_width;

        match self.wrap {
            Wrap::Enabled { force_break_after } if !fits => {
                let groups = self.wrap_groups(&widths, force_break_after);
                for (i, group) in groups.iter().enumerate() {
                    // details belong to the row, not a column slice
                    self.render_block(&mut out, &widths, group, i == 0);
                }
            }
            _ => self.render_block(&mut out, &widths, &all, true),
        }
        out
    }

    /// Render to an output sink. Reads the table only; rendering twice
    /// gives identical bytes.
    ///
    /// # Errors
    /// Propagates write failures from `out`.
    pub fn render<W: Write>(&self, out: &mut W) -> io::Result<()> {
        out.write_all(self.render_to_string().as_bytes())
    }

    /// Degenerate fallback: header (if set) then rows, cells joined by
    /// one tab. No borders, wrapping, abbreviation or detail lines.
    ///
    /// # Errors
    /// Propagates write failures from `out`.
    pub fn write_tsv<W: Write>(&self, out: &mut W) -> io::Result<()> {
        for row in self.header.iter().chain(&self.rows) {
            writeln!(out, "{}", row.cells().join("\t"))?;
        }
        Ok(())
    }

    fn render_block(&self, out: &mut String, widths: &[usize], cols: &[usize], details: bool) {
        if cols.is_empty() {
            return;
        }
        let g = self.style.glyphs();
        let bordered = self.style.is_bordered();
        let sep = if g.vertical.is_empty() {
            " ".to_owned()
        } else {
            format!(" {} ", g.vertical)
        };
        let content_w: usize = cols.iter().map(|&c| widths[c]).sum::<usize>()
            + self.separator_width() * (cols.len() - 1);

        if bordered {
            self.push_line(out, &rule_line(&g, content_w, true));
        }
        if let Some(h) = &self.header {
            self.push_line(out, &self.cells_line(h, widths, cols, &sep, &g, bordered));
            if bordered {
                self.push_line(out, &junction_line(&g, widths, cols));
            }
        }
        for row in &self.rows {
            self.push_line(out, &self.cells_line(row, widths, cols, &sep, &g, bordered));
            if details {
                for d in row.details() {
                    self.push_line(out, &detail_line(d, content_w, &g, bordered));
                }
            }
        }
        if bordered {
            self.push_line(out, &rule_line(&g, content_w, false));
        }
    }

    fn cells_line(
        &self,
        row: &Row,
        widths: &[usize],
        cols: &[usize],
        sep: &str,
        g: &Glyphs,
        bordered: bool,
    ) -> String {
        let mut line = String::new();
        if bordered {
            line.push_str(g.vertical);
            line.push(' ');
        }
        for (pos, &c) in cols.iter().enumerate() {
            if pos > 0 {
                line.push_str(sep);
            }
            push_cell(&mut line, row.get(c).unwrap_or(""), widths[c], self.mode(c));
        }
        if bordered {
            line.push(' ');
            line.push_str(g.vertical);
        }
        line
    }

    fn push_line(&self, out: &mut String, body: &str) {
        push_spaces(out, self.margin);
        out.push_str(body);
        push_spaces(out, self.margin);
        out.push('\n');
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render_to_string())
    }
}

// --- Line assembly helpers ---

fn push_spaces(out: &mut String, n: usize) {
    for _ in 0..n {
        out.push(' ');
    }
}

/// One cell, padded (or truncated) to its allotted width.
fn push_cell(line: &mut String, cell: &str, allotted: usize, mode: ColumnMode) {
    let vw = visible_width(cell);
    let (text, text_w): (Cow<'_, str>, usize) = if vw > allotted && mode == ColumnMode::Abbrev {
        (Cow::Owned(truncate_visible(cell, allotted)), allotted)
    } else {
        (Cow::Borrowed(cell), vw)
    };
    let pad = allotted.saturating_sub(text_w);
    if mode == ColumnMode::Edition {
        push_spaces(line, pad);
        line.push_str(&text);
    } else {
        line.push_str(&text);
        push_spaces(line, pad);
    }
}

/// Top or bottom rule: corner, horizontal span, corner.
fn rule_line(g: &Glyphs, content_w: usize, top: bool) -> String {
    let [tl, tr, bl, br] = g.corners;
    let (l, r) = if top { (tl, tr) } else { (bl, br) };
    format!("{l}{}{r}", g.horizontal.repeat(content_w + 2))
}

/// Header/body separator: crosses under every column boundary.
fn junction_line(g: &Glyphs, widths: &[usize], cols: &[usize]) -> String {
    let mut line = String::from(g.cross);
    for &c in cols {
        line.push_str(&g.horizontal.repeat(widths[c] + 2));
        line.push_str(g.cross);
    }
    line
}

/// Continuation line: indent instead of column separators, padded to
/// the block's content span.
fn detail_line(text: &str, content_w: usize, g: &Glyphs, bordered: bool) -> String {
    let mut line = String::new();
    if bordered {
        line.push_str(g.vertical);
        line.push(' ');
    }
    push_spaces(&mut line, DETAIL_INDENT);
    line.push_str(text);
    let used = DETAIL_INDENT + visible_width(text);
    push_spaces(&mut line, content_w.saturating_sub(used));
    if bordered {
        line.push(' ');
        line.push_str(g.vertical);
    }
    line
}
