pub mod property;
pub mod table;

pub use property::{PropertyTable, RowMark};
pub use table::{ColumnMode, Table, Wrap};
