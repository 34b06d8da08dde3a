//! CSV loader feeding the command-line front end.
//!
//! Cells stay plain strings — the engine tabulates whatever text it is
//! given. The dialect is deliberately naive: comma split, no quoting,
//! `#` comments and blank lines skipped.

use std::{
    error::Error,
    fmt::{self, Display},
    io::{BufRead, BufReader, Read},
};

// --- Error Handling ---
#[derive(Debug)]
pub struct ParseCsvError {
    pub line: usize,
    pub kind: ParseErrorKind,
}

#[derive(Debug)]
pub enum ParseErrorKind {
    Io(std::io::Error),
    Empty,
}

impl Display for ParseCsvError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ParseErrorKind::Io(e) => write!(f, "I/O error on line {}: {}", self.line, e),
            ParseErrorKind::Empty => f.write_str("no rows in input"),
        }
    }
}
impl Error for ParseCsvError {}

// --- Helpers ---
#[inline]
fn trim(mut b: &[u8]) -> &[u8] {
    while !b.is_empty() && b[0].is_ascii_whitespace() {
        b = &b[1..];
    }
    while !b.is_empty() && b[b.len() - 1].is_ascii_whitespace() {
        b = &b[..b.len() - 1];
    }
    b
}

// --- Fast CSV ingest ---
const BUF_CAP: usize = 1 << 20; // 1 MiB

/// Read every data line of `src` into cell vectors, in input order.
/// Ragged line widths are preserved — the layout engine handles them.
pub fn read_csv<R: Read>(src: R) -> Result<Vec<Vec<String>>, ParseCsvError> {
    let mut rdr = BufReader::with_capacity(BUF_CAP, src);
    let mut buf = Vec::<u8>::with_capacity(256);
    let mut rows = Vec::<Vec<String>>::new();
    let mut line_no = 0usize;

    loop {
        buf.clear();
        let n = rdr.read_until(b'\n', &mut buf).map_err(|e| ParseCsvError {
            line: line_no,
            kind: ParseErrorKind::Io(e),
        })?;
        if n == 0 {
            break;
        }
        line_no += 1;

        if buf.ends_with(b"\n") {
            buf.pop();
        }
        if buf.ends_with(b"\r") {
            buf.pop();
        }

        if buf.is_empty() || buf[0] == b'#' {
            continue;
        }

        let mut cells = Vec::new();
        let mut start = 0;
        loop {
            let end = buf[start..]
                .iter()
                .position(|&b| b == b',')
                .map_or(buf.len(), |p| start + p);
            cells.push(String::from_utf8_lossy(trim(&buf[start..end])).into_owned());
            if end == buf.len() {
                break;
            }
            start = end + 1;
        }
        rows.push(cells);
    }

    if rows.is_empty() {
        return Err(ParseCsvError {
            line: 0,
            kind: ParseErrorKind::Empty,
        });
    }
    Ok(rows)
}

pub fn read_csv_from_path(path: &str) -> Result<Vec<Vec<String>>, ParseCsvError> {
    if path == "-" {
        read_csv(std::io::stdin())
    } else {
        use std::fs::File;
        read_csv(File::open(path).map_err(|e| ParseCsvError {
            line: 0,
            kind: ParseErrorKind::Io(e),
        })?)
    }
}

/// Column indices whose every non-empty cell parses as a finite float.
/// Used by the CLI to right-align number columns.
#[must_use]
pub fn numeric_columns(rows: &[Vec<String>]) -> Vec<usize> {
    let max_col = rows.iter().map(Vec::len).max().unwrap_or(0);
    (0..max_col)
        .filter(|&c| {
            let mut saw_value = false;
            for row in rows {
                let Some(cell) = row.get(c) else { continue };
                if cell.is_empty() {
                    continue;
                }
                match lexical_core::parse::<f64>(cell.as_bytes()) {
                    Ok(v) if v.is_finite() => saw_value = true,
                    _ => return false,
                }
            }
            saw_value
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_rows_in_order() {
        let rows = read_csv("Name,Version\nzsh,5.9\nbash,5.1\n".as_bytes()).unwrap();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0], ["Name", "Version"]);
        assert_eq!(rows[2], ["bash", "5.1"]);
    }

    #[test]
    fn skips_comments_blanks_and_crlf() {
        let rows = read_csv("# header comment\r\n\r\na, b \r\nc,d\n".as_bytes()).unwrap();
        assert_eq!(rows, [vec!["a", "b"], vec!["c", "d"]]);
    }

    #[test]
    fn ragged_rows_survive() {
        let rows = read_csv("a,b,c\nd\n".as_bytes()).unwrap();
        assert_eq!(rows[0].len(), 3);
        assert_eq!(rows[1].len(), 1);
    }

    #[test]
    fn empty_input_is_an_error() {
        assert!(read_csv("".as_bytes()).is_err());
        assert!(read_csv("# only a comment\n".as_bytes()).is_err());
    }

    #[test]
    fn numeric_detection() {
        let rows: Vec<Vec<String>> = vec![
            vec!["zsh".into(), "5.9".into(), String::new()],
            vec!["bash".into(), "5.1".into(), "12".into()],
        ];
        assert_eq!(numeric_columns(&rows), [1, 2]);
    }

    #[test]
    fn mixed_text_is_not_numeric() {
        let rows: Vec<Vec<String>> = vec![vec!["1".into()], vec!["two".into()]];
        assert!(numeric_columns(&rows).is_empty());
    }
}
