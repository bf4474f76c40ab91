//! Whitespace-run boundary search.
//!
//! Both directions look for a maximal run of whitespace bounded by
//! non-whitespace or a line edge and land just after it. Line breaks are
//! not part of a line's text, so moving between lines happens one line at a
//! time rather than by treating the break as whitespace.

use crate::buffer::{Position, TextBuffer};

/// Position just after the next whitespace run at or after `position`.
///
/// Scans the rest of the current line, then each following line from its
/// start. Returns `None` when no whitespace remains in the buffer.
pub fn find_next_whitespace<B>(buffer: &B, position: Position) -> Option<Position>
where
    B: TextBuffer + ?Sized,
{
    let mut start = position.character;
    for line in position.line..buffer.line_count() {
        let chars = buffer.line_chars(line)?;
        if let Some(end) = whitespace_run_end(&chars, start.min(chars.len())) {
            return Some(Position::new(line, end));
        }
        start = 0;
    }
    tracing::trace!(%position, "no whitespace ahead");
    None
}

/// Position just after the last whitespace run that precedes a word before
/// `position`.
///
/// Trailing whitespace right before the cursor is ignored, so repeated calls
/// walk back one word at a time. Falls back to previous lines, scanning each
/// from its end. Returns `None` at the start of the buffer.
pub fn find_previous_whitespace<B>(buffer: &B, position: Position) -> Option<Position>
where
    B: TextBuffer + ?Sized,
{
    if position.line >= buffer.line_count() {
        return None;
    }
    let mut end = Some(position.character);
    for line in (0..=position.line).rev() {
        let chars = buffer.line_chars(line)?;
        let limit = end.map_or(chars.len(), |end| end.min(chars.len()));
        if let Some(after) = last_whitespace_run_end(&chars[..limit]) {
            return Some(Position::new(line, after));
        }
        end = None;
    }
    tracing::trace!(%position, "no whitespace behind");
    None
}

/// End of the first whitespace run starting at or after `start`.
fn whitespace_run_end(chars: &[char], start: usize) -> Option<usize> {
    let run_start = start + chars[start..].iter().position(|c| c.is_whitespace())?;
    let run_len = chars[run_start..]
        .iter()
        .take_while(|c| c.is_whitespace())
        .count();
    Some(run_start + run_len)
}

/// End of the whitespace run that directly precedes the last word of
/// `chars` once trailing whitespace is trimmed.
fn last_whitespace_run_end(chars: &[char]) -> Option<usize> {
    let trimmed = chars.iter().rposition(|c| !c.is_whitespace())? + 1;
    let word_start = chars[..trimmed]
        .iter()
        .rposition(|c| c.is_whitespace())?
        + 1;
    Some(word_start)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ropey::Rope;

    fn buf(text: &str) -> Rope {
        Rope::from_str(text)
    }

    // --- Forward ---

    #[test]
    fn test_next_lands_after_run() {
        let b = buf("foo   bar");
        assert_eq!(find_next_whitespace(&b, Position::new(0, 0)), Some(Position::new(0, 6)));
    }

    #[test]
    fn test_next_from_inside_run_lands_after_it() {
        let b = buf("foo   bar");
        assert_eq!(find_next_whitespace(&b, Position::new(0, 4)), Some(Position::new(0, 6)));
    }

    #[test]
    fn test_next_trailing_whitespace_lands_at_line_end() {
        let b = buf("foo  \nbar");
        assert_eq!(find_next_whitespace(&b, Position::new(0, 1)), Some(Position::new(0, 5)));
    }

    #[test]
    fn test_next_crosses_lines() {
        let b = buf("foo\nbar\n  baz qux");
        assert_eq!(find_next_whitespace(&b, Position::new(0, 1)), Some(Position::new(2, 2)));
    }

    #[test]
    fn test_next_at_line_end_continues_on_next_line() {
        let b = buf("a b\nc d");
        assert_eq!(find_next_whitespace(&b, Position::new(0, 3)), Some(Position::new(1, 2)));
    }

    #[test]
    fn test_next_none_at_buffer_end() {
        let b = buf("foo bar");
        assert_eq!(find_next_whitespace(&b, Position::new(0, 4)), None);
    }

    #[test]
    fn test_next_tabs_count_as_whitespace() {
        let b = buf("a\t\tb");
        assert_eq!(find_next_whitespace(&b, Position::new(0, 0)), Some(Position::new(0, 3)));
    }

    #[test]
    fn test_next_past_last_line_is_none() {
        let b = buf("a b");
        assert_eq!(find_next_whitespace(&b, Position::new(4, 0)), None);
    }

    // --- Backward ---

    #[test]
    fn test_previous_lands_at_word_start() {
        let b = buf("foo bar baz");
        assert_eq!(find_previous_whitespace(&b, Position::new(0, 11)), Some(Position::new(0, 8)));
    }

    #[test]
    fn test_previous_skips_trailing_whitespace_before_cursor() {
        let b = buf("foo bar   baz");
        assert_eq!(find_previous_whitespace(&b, Position::new(0, 10)), Some(Position::new(0, 4)));
    }

    #[test]
    fn test_previous_from_word_start_jumps_one_word() {
        let b = buf("foo bar baz");
        assert_eq!(find_previous_whitespace(&b, Position::new(0, 8)), Some(Position::new(0, 4)));
    }

    #[test]
    fn test_previous_leading_whitespace_counts() {
        let b = buf("   foo");
        assert_eq!(find_previous_whitespace(&b, Position::new(0, 6)), Some(Position::new(0, 3)));
    }

    #[test]
    fn test_previous_crosses_to_previous_line_end() {
        let b = buf("one two\nthree");
        assert_eq!(find_previous_whitespace(&b, Position::new(1, 3)), Some(Position::new(0, 4)));
    }

    #[test]
    fn test_previous_none_at_buffer_start() {
        let b = buf("foo bar");
        assert_eq!(find_previous_whitespace(&b, Position::new(0, 4)), None);
        assert_eq!(find_previous_whitespace(&b, Position::new(0, 0)), None);
    }

    #[test]
    fn test_previous_clamps_character_past_line_end() {
        let b = buf("ab cd");
        assert_eq!(find_previous_whitespace(&b, Position::new(0, 50)), Some(Position::new(0, 3)));
    }

    // --- Helpers ---

    #[test]
    fn test_run_end_helpers_on_empty_input() {
        assert_eq!(whitespace_run_end(&[], 0), None);
        assert_eq!(last_whitespace_run_end(&[]), None);
        assert_eq!(last_whitespace_run_end(&[' ', ' ']), None);
    }

    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn no_whitespace_means_no_target(
                text in "[a-z(),.]{0,12}(\n[a-z(),.]{0,12}){0,4}",
                line in 0..6usize,
                character in 0..16usize,
            ) {
                let b = buf(&text);
                let pos = Position::new(line, character);
                prop_assert_eq!(find_next_whitespace(&b, pos), None);
                prop_assert_eq!(find_previous_whitespace(&b, pos), None);
            }

            #[test]
            fn forward_always_progresses(
                text in "[a-c \t]{0,10}(\n[a-c \t]{0,10}){0,4}",
            ) {
                let b = buf(&text);
                let mut pos = Position::new(0, 0);
                while let Some(next) = find_next_whitespace(&b, pos) {
                    prop_assert!(next > pos);
                    pos = next;
                }
            }

            #[test]
            fn backward_always_regresses(
                text in "[a-c \t]{0,10}(\n[a-c \t]{0,10}){0,4}",
            ) {
                let b = buf(&text);
                let last = TextBuffer::line_count(&b) - 1;
                let mut pos = Position::new(last, TextBuffer::line_len(&b, last));
                while let Some(prev) = find_previous_whitespace(&b, pos) {
                    prop_assert!(prev < pos);
                    pos = prev;
                }
            }
        }
    }
}
