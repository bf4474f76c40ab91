//! Cursor navigation over a [`TextBuffer`](crate::buffer::TextBuffer).
//!
//! Every operation is a pure scan: it borrows the buffer, computes a target
//! and returns it, or returns `None` when there is nothing to move to.
//!
//! ## Operations
//!
//! - [`find_next_whitespace`] / [`find_previous_whitespace`]: whitespace-run
//!   boundaries, crossing line breaks
//! - [`find_next_char`] / [`find_previous_char`]: literal character on the
//!   current line
//! - [`find_next_closing_delimiter`] / [`find_previous_closing_delimiter`]:
//!   step out of or back into a bracket/quote pair
//!
//! ## Modules
//!
//! - [`classify`]: delimiter tables and skippable characters
//! - [`matcher`]: partner lookup for a delimiter, nesting and escape aware
//! - [`surrounding`]: exit/enter scans built on the matcher

mod chars;
pub mod classify;
pub mod matcher;
pub mod surrounding;
mod whitespace;

use thiserror::Error;

use crate::buffer::Offset;

pub use chars::{find_next_char, find_previous_char};
pub use classify::Delimiter;
pub use matcher::{match_backward, match_forward};
pub use surrounding::{
    enter_surrounding, exit_surrounding, find_next_closing_delimiter,
    find_previous_closing_delimiter,
};
pub use whitespace::{find_next_whitespace, find_previous_whitespace};

/// Why a delimiter scan produced no target.
///
/// The public operations collapse all of these into `None`; the `scan_*`
/// and `try_*` variants expose them for callers that want to report why.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ScanError {
    #[error("reached the buffer boundary without a match")]
    NotFound,
    #[error("blocked by {found:?} at offset {offset}")]
    BlockedByContent { offset: Offset, found: char },
    #[error("unmatched {delimiter:?} at offset {offset}")]
    UnmatchedDelimiter { offset: Offset, delimiter: char },
    #[error("offset {offset} does not follow a closing delimiter")]
    NotAfterCloser { offset: Offset },
}
