//! Terminal size plumbing.
//!
//! The layout engine never queries the terminal itself — callers pass an
//! explicit screen width. This helper is for the glue layers (CLI, the
//! one-shot `print_table`) that want the real width.

use terminal_size::{Width, terminal_size};

use crate::core::constants::DEFAULT_SCREEN_WIDTH;

/// Current terminal width in columns (80 fallback).
#[inline]
#[must_use]
pub fn screen_width() -> usize {
    terminal_size().map_or(DEFAULT_SCREEN_WIDTH, |(Width(w), _)| w as usize)
}
