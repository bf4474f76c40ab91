// Only allow lints that are either transitive-dependency noise or
// genuinely opinionated style choices that don't indicate real issues.
#![allow(
    // Transitive dependency version mismatches we can't control
    clippy::multiple_crate_versions,
    // module_name_repetitions is pure style preference (e.g. editor::Editor)
    clippy::module_name_repetitions
)]

//! # Extmove
//!
//! Extended cursor motions for text editors.
//!
//! Extmove moves cursors by:
//! - Whitespace boundaries, across lines
//! - The next or previous occurrence of a character on the line
//! - Stepping out of, and back into, bracket and quote pairs
//!
//! ## Architecture
//!
//! The navigation engine is a set of pure scans over a read-only
//! [`TextBuffer`](buffer::TextBuffer). The editor layer runs a scan once per
//! cursor and swaps in the resulting selection set in one step.
//!
//! ## Modules
//!
//! - [`buffer`]: Positions, offsets and the buffer abstraction
//! - [`navigation`]: Whitespace, character and delimiter scans
//! - [`editor`]: Selections, motions and search memory
//! - [`config`]: Flag files and persisted search state

pub mod buffer;
pub mod config;
pub mod editor;
pub mod navigation;

pub use buffer::{Offset, Position, TextBuffer};
pub use navigation::{
    find_next_char, find_next_closing_delimiter, find_next_whitespace, find_previous_char,
    find_previous_closing_delimiter, find_previous_whitespace,
};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::buffer::{Position, TextBuffer};
    pub use crate::editor::{Direction, Editor, Motion, Selection, SelectionSet};
    pub use crate::navigation::ScanError;
}
