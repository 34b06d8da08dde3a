use std::io::{Write, stdout};

use crate::core::{
    color::{AnsiCode, colorize},
    data::{numeric_columns, read_csv_from_path},
    error::TableError,
    row::Row,
    screen::screen_width,
    style::LineStyle,
};
use crate::render::{Table, Wrap};

use super::parse::CsvArgs;

pub fn csv(a: &CsvArgs) -> Result<(), TableError> {
    let mut records = read_csv_from_path(&a.file)?;
    if let Some(col) = a.sort {
        // keep the header line out of the sort
        let skip = usize::from(!a.no_header);
        records[skip..].sort_by(|l, r| {
            l.get(col)
                .map_or("", String::as_str)
                .cmp(r.get(col).map_or("", String::as_str))
        });
    }

    let style = LineStyle::from_name(&a.style)
        .ok_or_else(|| TableError::UnknownStyle(a.style.clone()))?;

    let mut table = Table::new(style);
    table.set_margin(a.margin);
    table.set_screen_width(a.width.unwrap_or_else(screen_width));
    if a.wrap || a.break_after.is_some() {
        table.set_wrap(Wrap::Enabled {
            force_break_after: a.break_after,
        });
    }
    for &col in &a.abbrev {
        table.allow_abbrev(col);
    }
    if a.numeric {
        let skip = usize::from(!a.no_header);
        for col in numeric_columns(&records[skip.min(records.len())..]) {
            table.set_edition(col);
        }
    }

    let mut records = records.into_iter();
    if !a.no_header {
        if let Some(cells) = records.next() {
            let color = match &a.color {
                Some(name) => Some(AnsiCode::from_name(name)?),
                None => None,
            };
            let mut header = Row::with_capacity(cells.len());
            for cell in cells {
                header = match &color {
                    Some(c) => header.add(colorize(c, &cell)),
                    None => header.add(cell),
                };
            }
            table.set_header(header);
        }
    }
    for cells in records {
        let mut row = Row::with_capacity(cells.len());
        for cell in cells {
            row = row.add(cell);
        }
        table.add_row(row);
    }

    let mut out = stdout().lock();
    if a.tsv {
        table.write_tsv(&mut out)?;
    } else {
        table.render(&mut out)?;
    }
    out.flush()?;
    Ok(())
}

/// Pretty-print every style name above a small sample table.
pub fn styles() {
    for style in LineStyle::ALL {
        let mut sample = Table::new(style);
        sample.set_header(Row::new().add("Name").add("Version"));
        sample.add_row(Row::new().add("zsh").add("5.9"));
        sample.set_margin(2);
        println!("{}:\n{sample}", style.name());
    }
}

/// Print handy invocations for new users.
pub fn examples() {
    let bin = "cargo run"; // adjust if you rename the binary
    println!(
        "
Example invocations
-------------------
• Basic CSV        : {bin} csv packages.csv
• From stdin       : some-tool --csv | {bin} csv
• Unicode borders  : {bin} csv packages.csv --style light
• Key/value look   : {bin} csv packages.csv --style colon
• Fit the terminal : {bin} csv packages.csv --wrap --abbrev 3
• Keyed wrapping   : {bin} csv packages.csv --break-after 1
• Sorted, aligned  : {bin} csv packages.csv --sort 0 --numeric
• Colored header   : {bin} csv packages.csv --color cyan
• Plain dump       : {bin} csv packages.csv --tsv
"
    );
}
