//! Literal character search on the cursor's line.

use crate::buffer::{Position, TextBuffer};

/// First occurrence of `target` strictly after `position` on the same line.
pub fn find_next_char<B>(buffer: &B, position: Position, target: char) -> Option<Position>
where
    B: TextBuffer + ?Sized,
{
    let chars = buffer.line_chars(position.line)?;
    let from = position.character.saturating_add(1);
    let index = chars.get(from..)?.iter().position(|&c| c == target)?;
    Some(Position::new(position.line, from + index))
}

/// Last occurrence of `target` strictly before `position` on the same line.
pub fn find_previous_char<B>(buffer: &B, position: Position, target: char) -> Option<Position>
where
    B: TextBuffer + ?Sized,
{
    let chars = buffer.line_chars(position.line)?;
    let end = position.character.min(chars.len());
    let index = chars[..end].iter().rposition(|&c| c == target)?;
    Some(Position::new(position.line, index))
}
