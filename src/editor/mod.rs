//! Editor session glue around the navigation engine.
//!
//! Holds a rope-backed document, the current multi-cursor selection set and
//! the session's search memory, and turns [`Motion`]s into selection
//! updates.

mod motion;
mod selection;

pub use motion::{CommandError, Direction, Motion, SearchMemory, parse_search_char};
pub use selection::{Selection, SelectionSet};

use ropey::Rope;

use crate::buffer::{Position, TextBuffer};
use crate::navigation;

/// A read-only document with cursors.
pub struct Editor {
    rope: Rope,
    selections: SelectionSet,
    memory: SearchMemory,
}

impl Editor {
    /// Create an editor over `text` with a single caret at the start.
    pub fn from_text(text: &str) -> Self {
        Self {
            rope: Rope::from_str(text),
            selections: SelectionSet::default(),
            memory: SearchMemory::default(),
        }
    }

    /// Create an editor over an empty document.
    pub fn empty() -> Self {
        Self::from_text("")
    }

    /// Replace the selection set.
    pub fn with_selections(mut self, selections: SelectionSet) -> Self {
        self.selections = selections;
        self
    }

    /// Start from a previously saved search memory.
    pub const fn with_memory(mut self, memory: SearchMemory) -> Self {
        self.memory = memory;
        self
    }

    pub const fn selections(&self) -> &SelectionSet {
        &self.selections
    }

    pub const fn memory(&self) -> SearchMemory {
        self.memory
    }

    /// The document as a navigation buffer.
    pub const fn buffer(&self) -> &Rope {
        &self.rope
    }

    /// Total number of lines in the document.
    pub fn line_count(&self) -> usize {
        self.rope.line_count()
    }

    /// Get the content of a line (without trailing newline).
    pub fn line_at(&self, line_idx: usize) -> Option<String> {
        self.rope.line_text(line_idx)
    }

    /// The full text content of the document.
    pub fn text(&self) -> String {
        self.rope.to_string()
    }

    /// Run `motion` for every cursor.
    ///
    /// `extend` keeps each selection's anchor in place. Surrounding motions
    /// always collapse to carets.
    ///
    /// Returns whether any cursor found a target.
    ///
    /// # Errors
    ///
    /// - [`CommandError::MissingLastChar`] when repeating a search before
    ///   any character was searched
    /// - [`CommandError::CharNotFound`] when no cursor finds the character
    pub fn execute(&mut self, motion: Motion, extend: bool) -> Result<bool, CommandError> {
        let rope = &self.rope;
        let found = match motion {
            Motion::Whitespace(Direction::Forward) => self
                .selections
                .apply(|pos| navigation::find_next_whitespace(rope, pos), extend),
            Motion::Whitespace(Direction::Backward) => self
                .selections
                .apply(|pos| navigation::find_previous_whitespace(rope, pos), extend),
            Motion::Char(ch, direction) => {
                self.memory.remember(ch, direction);
                let found = self.selections.apply(
                    |pos| find_char(rope, pos, ch, direction),
                    extend,
                );
                if !found {
                    return Err(CommandError::CharNotFound { ch, direction });
                }
                found
            }
            Motion::LastChar(direction) => {
                let ch = self.memory.last_char.ok_or(CommandError::MissingLastChar)?;
                return self.execute(Motion::Char(ch, direction), extend);
            }
            Motion::ExitSurrounding => self
                .selections
                .apply(|pos| navigation::exit_surrounding(rope, pos), false),
            Motion::EnterSurrounding => self
                .selections
                .apply(|pos| navigation::enter_surrounding(rope, pos), false),
        };
        tracing::debug!(?motion, extend, found, cursors = self.selections.len(), "motion applied");
        Ok(found)
    }
}

fn find_char(rope: &Rope, pos: Position, ch: char, direction: Direction) -> Option<Position> {
    match direction {
        Direction::Forward => navigation::find_next_char(rope, pos, ch),
        Direction::Backward => navigation::find_previous_char(rope, pos, ch),
    }
}

impl std::fmt::Debug for Editor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Editor")
            .field(
                "rope",
                &format_args!("Rope({} lines)", self.rope.len_lines()),
            )
            .field("selections", &self.selections)
            .field("memory", &self.memory)
            .finish()
    }
}

#[cfg(test)]
mod tests;
