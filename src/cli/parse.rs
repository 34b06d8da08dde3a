use clap::{Parser, Subcommand};

/// Top-level CLI structure.
#[derive(Parser)]
#[command(
    name = "cli-table",
    about = "Box-drawing tables for terminal output"
)]
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Tabulate a CSV file
    Csv(CsvArgs),
    /// Show available line styles
    Styles,
    /// Print example invocations
    Examples,
}

/// `cli-table csv …`
#[derive(Parser, Debug)]
pub struct CsvArgs {
    /// CSV path (use `-` for stdin)
    #[arg(value_name = "FILE", default_value = "-")]
    pub file: String,

    /// Line style (see `styles`)
    #[arg(short, long, default_value = "ascii")]
    pub style: String,

    /// Spaces padded onto both ends of every line
    #[arg(long, default_value_t = 1)]
    pub margin: usize,

    /// Target width in columns (terminal width if omitted)
    #[arg(long)]
    pub width: Option<usize>,

    /// Split over-wide tables into column groups
    #[arg(long)]
    pub wrap: bool,

    /// Force the first wrap break after this column (implies --wrap);
    /// later groups repeat column 0 as the row key
    #[arg(long, value_name = "COL")]
    pub break_after: Option<usize>,

    /// Columns that may be truncated with `...` to fit the screen
    #[arg(long, value_name = "COL")]
    pub abbrev: Vec<usize>,

    /// Sort rows by this column before rendering
    #[arg(long, value_name = "COL")]
    pub sort: Option<usize>,

    /// Treat the first line as data, not as the header
    #[arg(long)]
    pub no_header: bool,

    /// Right-align columns whose cells all parse as numbers
    #[arg(long)]
    pub numeric: bool,

    /// Colorize the header row (name or `#RRGGBB`)
    #[arg(long)]
    pub color: Option<String>,

    /// Tab-separated dump: no borders, wrapping or abbreviation
    #[arg(long)]
    pub tsv: bool,
}
