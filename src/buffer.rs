//! Read-only text buffer abstraction used by the navigation engine.
//!
//! Navigation only needs line access, offset/position conversion and
//! random character access. [`TextBuffer`] captures exactly that surface so
//! the scanners never depend on how text is stored. A rope-backed
//! implementation is provided for [`ropey::Rope`].

use std::fmt;
use std::ops::Range;
use std::str::FromStr;

use ropey::Rope;
use thiserror::Error;

/// Absolute index into the whole buffer, counted in `char`s.
pub type Offset = usize;

/// A location in a line-oriented buffer.
///
/// `character` counts `char`s from the start of the line. Ordering is
/// row-major, so comparing two positions compares their buffer order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    /// Zero-based line index.
    pub line: usize,
    /// Zero-based character index within the line.
    pub character: usize,
}

impl Position {
    /// Create a position at `line`, `character`.
    pub const fn new(line: usize, character: usize) -> Self {
        Self { line, character }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.character)
    }
}

/// Error returned when a `LINE:CHARACTER` string cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid position {input:?}, expected LINE:CHARACTER")]
pub struct ParsePositionError {
    input: String,
}

impl FromStr for Position {
    type Err = ParsePositionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParsePositionError {
            input: s.to_string(),
        };
        let (line, character) = s.trim().split_once(':').ok_or_else(err)?;
        let line = line.parse().map_err(|_| err())?;
        let character = character.parse().map_err(|_| err())?;
        Ok(Self::new(line, character))
    }
}

/// Line-oriented, read-only view over text.
///
/// Offsets and positions are in bijection through the per-line lengths:
/// the line break(s) that end a line occupy offsets of their own but are
/// never part of [`TextBuffer::line_text`].
pub trait TextBuffer {
    /// Number of lines. An empty buffer has one empty line.
    fn line_count(&self) -> usize;

    /// Text of a line without its line break, or `None` past the last line.
    fn line_text(&self, line: usize) -> Option<String>;

    /// Total length of the buffer in `char`s, line breaks included.
    fn len_chars(&self) -> usize;

    /// Character at an absolute offset.
    fn char_at(&self, offset: Offset) -> Option<char>;

    /// Offset of the first character of `line`.
    fn line_start(&self, line: usize) -> Offset;

    /// Line containing `offset`.
    fn line_of_offset(&self, offset: Offset) -> usize;

    /// Text in an offset range, clamped to the buffer.
    fn slice(&self, range: Range<Offset>) -> String;

    /// Length of a line in `char`s, excluding the line break.
    fn line_len(&self, line: usize) -> usize {
        self.line_text(line).map_or(0, |text| text.chars().count())
    }

    /// Characters of a line, for index-based scanning.
    fn line_chars(&self, line: usize) -> Option<Vec<char>> {
        self.line_text(line).map(|text| text.chars().collect())
    }

    /// Whether the buffer holds no text at all.
    fn is_empty(&self) -> bool {
        self.len_chars() == 0
    }

    /// Convert a position to an absolute offset.
    ///
    /// Characters past the end of a line clamp to the line end and lines
    /// past the end of the buffer clamp to the buffer end.
    fn offset_at(&self, position: Position) -> Offset {
        if position.line >= self.line_count() {
            return self.len_chars();
        }
        self.line_start(position.line) + position.character.min(self.line_len(position.line))
    }

    /// Convert an absolute offset to a position.
    ///
    /// Offsets that fall inside a line break map to the end of that line.
    fn position_at(&self, offset: Offset) -> Position {
        let offset = offset.min(self.len_chars());
        let line = self.line_of_offset(offset);
        let character = (offset - self.line_start(line)).min(self.line_len(line));
        Position::new(line, character)
    }
}

/// Characters ropey treats as line breaks.
const fn is_line_break(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r' | '\u{000B}' | '\u{000C}' | '\u{0085}' | '\u{2028}' | '\u{2029}'
    )
}

impl TextBuffer for Rope {
    fn line_count(&self) -> usize {
        self.len_lines()
    }

    fn line_text(&self, line: usize) -> Option<String> {
        if line >= self.len_lines() {
            return None;
        }
        let text = self.line(line).to_string();
        Some(text.trim_end_matches(is_line_break).to_string())
    }

    fn len_chars(&self) -> usize {
        Self::len_chars(self)
    }

    fn char_at(&self, offset: Offset) -> Option<char> {
        self.get_char(offset)
    }

    fn line_start(&self, line: usize) -> Offset {
        self.line_to_char(line.min(self.len_lines().saturating_sub(1)))
    }

    fn line_of_offset(&self, offset: Offset) -> usize {
        self.char_to_line(offset.min(Self::len_chars(self)))
    }

    fn slice(&self, range: Range<Offset>) -> String {
        let len = Self::len_chars(self);
        let end = range.end.min(len);
        let start = range.start.min(end);
        Self::slice(self, start..end).to_string()
    }

    fn line_len(&self, line: usize) -> usize {
        if line >= self.len_lines() {
            return 0;
        }
        let slice = self.line(line);
        let mut len = slice.len_chars();
        if len > 0 && is_line_break(slice.char(len - 1)) {
            let last = slice.char(len - 1);
            len -= 1;
            // CRLF is a single break
            if last == '\n' && len > 0 && slice.char(len - 1) == '\r' {
                len -= 1;
            }
        }
        len
    }
}
