//! A collection of constants.

/// Marker appended to cells cut short by column abbreviation.
pub const ELLIPSIS: &str = "...";

/// An abbreviated column never shrinks below this many characters,
/// so the marker plus at least one character of content survives.
pub const ABBREV_MIN_WIDTH: usize = 5;

/// Detail lines are indented by this many spaces in place of the
/// normal column separators.
pub const DETAIL_INDENT: usize = 4;

/// Screen width assumed when the terminal cannot be queried.
pub const DEFAULT_SCREEN_WIDTH: usize = 80;

/// Visible width of one column separator in bordered styles (` │ `).
pub const SEPARATOR_WIDTH: usize = 3;

/// Border glyphs + inner padding on both sides of a bordered block.
pub const BORDER_OVERHEAD: usize = 4;
