//! Aggregates the data/measurement layer.

pub mod color;
pub mod constants;
pub mod data;
pub mod error;
pub mod row;
pub mod screen;
pub mod style;
pub mod width;

// re-export frequently-used items for convenience
pub use color::{AnsiCode, ColorError, colorize};
pub use constants::{ABBREV_MIN_WIDTH, DEFAULT_SCREEN_WIDTH, DETAIL_INDENT, ELLIPSIS};
pub use error::TableError;
pub use row::Row;
pub use style::LineStyle;
pub use width::{strip_ansi, truncate_visible, visible_width};
