//! Stepping out of and back into bracket/quote pairs.
//!
//! **Exit** walks forward from the cursor to the nearest closing delimiter
//! and lands just past it. Only whitespace, trivial punctuation, escaped
//! units and complete nested pairs may lie in between; anything else means
//! the cursor is not at the tail of a surrounding and the scan gives up.
//!
//! **Enter** is the reverse step. It only fires when the cursor sits right
//! after a closing delimiter, and lands just after the last real content
//! inside that pair.

use super::ScanError;
use super::classify::{ESCAPE, is_closing, is_opening, is_skippable};
use super::matcher::{is_escaped, try_match_backward, try_match_forward};
use crate::buffer::{Offset, Position, TextBuffer};

/// Position of the closing delimiter an exit from `position` would step over.
pub fn find_next_closing_delimiter<B>(buffer: &B, position: Position) -> Option<Position>
where
    B: TextBuffer + ?Sized,
{
    report(position, scan_exit(buffer, position)).map(|offset| buffer.position_at(offset))
}

/// Cursor target for leaving the current surrounding: just past its closer.
pub fn exit_surrounding<B>(buffer: &B, position: Position) -> Option<Position>
where
    B: TextBuffer + ?Sized,
{
    report(position, scan_exit(buffer, position)).map(|offset| buffer.position_at(offset + 1))
}

/// Cursor target for entering the pair closed right before `position`.
pub fn find_previous_closing_delimiter<B>(buffer: &B, position: Position) -> Option<Position>
where
    B: TextBuffer + ?Sized,
{
    report(position, scan_enter(buffer, position)).map(|offset| buffer.position_at(offset))
}

/// Alias of [`find_previous_closing_delimiter`] named after the command.
pub fn enter_surrounding<B>(buffer: &B, position: Position) -> Option<Position>
where
    B: TextBuffer + ?Sized,
{
    find_previous_closing_delimiter(buffer, position)
}

/// Offset of the closing delimiter reached by scanning forward from
/// `position`.
///
/// # Errors
///
/// - [`ScanError::BlockedByContent`] when non-trivial content comes first
/// - [`ScanError::UnmatchedDelimiter`] when a nested opener never closes
/// - [`ScanError::NotFound`] when the buffer ends first
pub fn scan_exit<B>(buffer: &B, position: Position) -> Result<Offset, ScanError>
where
    B: TextBuffer + ?Sized,
{
    let len = buffer.len_chars();
    let mut offset = buffer.offset_at(position);
    while offset < len {
        let Some(c) = buffer.char_at(offset) else {
            break;
        };
        if c == ESCAPE && offset + 1 < len {
            offset += 2;
        } else if is_closing(c) {
            return Ok(offset);
        } else if is_opening(c) {
            // Step over the whole nested pair.
            offset = try_match_forward(buffer, offset, c)? + 1;
        } else if is_skippable(c) {
            offset += 1;
        } else {
            return Err(ScanError::BlockedByContent { offset, found: c });
        }
    }
    Err(ScanError::NotFound)
}

/// Offset just after the last non-skippable character inside the pair
/// closed right before `position`, or just after its opener when the
/// interior is empty or entirely skippable.
///
/// # Errors
///
/// - [`ScanError::NotAfterCloser`] when the preceding character is not a
///   closing delimiter
/// - [`ScanError::UnmatchedDelimiter`] when that closer has no opener
pub fn scan_enter<B>(buffer: &B, position: Position) -> Result<Offset, ScanError>
where
    B: TextBuffer + ?Sized,
{
    let offset = buffer.offset_at(position);
    let not_after_closer = ScanError::NotAfterCloser { offset };
    let close = offset.checked_sub(1).ok_or(not_after_closer)?;
    let close_char = buffer
        .char_at(close)
        .filter(|&c| is_closing(c))
        .ok_or(not_after_closer)?;
    let open = try_match_backward(buffer, close, close_char)?;

    // `end` is one past the candidate being inspected.
    let mut end = close;
    while end > open + 1 {
        let candidate = end - 1;
        if is_escaped(buffer, candidate) && candidate - 1 > open {
            end = candidate - 1;
            continue;
        }
        match buffer.char_at(candidate) {
            Some(c) if is_skippable(c) => end = candidate,
            _ => break,
        }
    }
    Ok(end)
}

fn report(position: Position, result: Result<Offset, ScanError>) -> Option<Offset> {
    result
        .inspect_err(|err| tracing::trace!(%position, %err, "surrounding scan failed"))
        .ok()
}
