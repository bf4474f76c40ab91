//! Partner lookup for bracket and quote delimiters.
//!
//! Scans run in offset space so a pair may span any number of lines.
//! Two rules shape every scan:
//!
//! - A backslash escapes the character after it. Forward scans step over
//!   the pair as one unit; backward scans treat a character as escaped when
//!   the character before it is an unescaped backslash, that is, when an odd
//!   number of backslashes run up to it.
//! - Brackets nest, so same-type openers and closers adjust a depth counter.
//!   Quotes open and close with the same character and cannot nest, so the
//!   first unescaped occurrence ends the pair.

use super::ScanError;
use super::classify::{Delimiter, ESCAPE};
use crate::buffer::{Offset, TextBuffer};

/// Offset of the delimiter closing the one opened by `open_char` at
/// `open_offset`, or `None` if it is never closed.
pub fn match_forward<B>(buffer: &B, open_offset: Offset, open_char: char) -> Option<Offset>
where
    B: TextBuffer + ?Sized,
{
    try_match_forward(buffer, open_offset, open_char).ok()
}

/// Offset of the delimiter opening the one closed by `close_char` at
/// `close_offset`, or `None` if it is never opened.
pub fn match_backward<B>(buffer: &B, close_offset: Offset, close_char: char) -> Option<Offset>
where
    B: TextBuffer + ?Sized,
{
    try_match_backward(buffer, close_offset, close_char).ok()
}

/// [`match_forward`] reporting why no partner was found.
///
/// # Errors
///
/// Returns [`ScanError::UnmatchedDelimiter`] when `open_char` is not an
/// opening delimiter or the buffer ends before the pair closes.
pub fn try_match_forward<B>(
    buffer: &B,
    open_offset: Offset,
    open_char: char,
) -> Result<Offset, ScanError>
where
    B: TextBuffer + ?Sized,
{
    let unmatched = ScanError::UnmatchedDelimiter {
        offset: open_offset,
        delimiter: open_char,
    };
    let delimiter = Delimiter::from_open(open_char).ok_or(unmatched)?;
    let close_char = delimiter.close();
    let len = buffer.len_chars();

    let mut depth = 1usize;
    let mut offset = open_offset + 1;
    while offset < len {
        let Some(c) = buffer.char_at(offset) else {
            break;
        };
        if c == ESCAPE && offset + 1 < len {
            offset += 2;
            continue;
        }
        if delimiter.is_self_paired() {
            if c == close_char {
                return Ok(offset);
            }
        } else if c == open_char {
            depth += 1;
        } else if c == close_char {
            depth -= 1;
            if depth == 0 {
                return Ok(offset);
            }
        }
        offset += 1;
    }
    tracing::trace!(open_offset, %open_char, "delimiter never closed");
    Err(unmatched)
}

/// [`match_backward`] reporting why no partner was found.
///
/// # Errors
///
/// Returns [`ScanError::UnmatchedDelimiter`] when `close_char` is not a
/// closing delimiter or the start of the buffer is reached first.
pub fn try_match_backward<B>(
    buffer: &B,
    close_offset: Offset,
    close_char: char,
) -> Result<Offset, ScanError>
where
    B: TextBuffer + ?Sized,
{
    let unmatched = ScanError::UnmatchedDelimiter {
        offset: close_offset,
        delimiter: close_char,
    };
    let delimiter = Delimiter::from_close(close_char).ok_or(unmatched)?;
    let open_char = delimiter.open();

    let mut depth = 1usize;
    for offset in (0..close_offset.min(buffer.len_chars())).rev() {
        let Some(c) = buffer.char_at(offset) else {
            continue;
        };
        if is_escaped(buffer, offset) {
            continue;
        }
        if delimiter.is_self_paired() {
            if c == open_char {
                return Ok(offset);
            }
        } else if c == close_char {
            depth += 1;
        } else if c == open_char {
            depth -= 1;
            if depth == 0 {
                return Ok(offset);
            }
        }
    }
    tracing::trace!(close_offset, %close_char, "delimiter never opened");
    Err(unmatched)
}

/// Whether the character at `offset` is preceded by an unescaped backslash.
pub(crate) fn is_escaped<B>(buffer: &B, offset: Offset) -> bool
where
    B: TextBuffer + ?Sized,
{
    let run = (0..offset)
        .rev()
        .take_while(|&i| buffer.char_at(i) == Some(ESCAPE))
        .count();
    run % 2 == 1
}
