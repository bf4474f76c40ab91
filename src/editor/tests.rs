use crate::buffer::Position;

use super::{CommandError, Direction, Editor, Motion, SearchMemory, Selection, SelectionSet};

fn pos(line: usize, character: usize) -> Position {
    Position::new(line, character)
}

fn editor_at(text: &str, carets: &[(usize, usize)]) -> Editor {
    let selections = SelectionSet::carets(carets.iter().map(|&(l, c)| pos(l, c))).unwrap();
    Editor::from_text(text).with_selections(selections)
}

fn actives(editor: &Editor) -> Vec<Position> {
    editor.selections().iter().map(|s| s.active).collect()
}

// --- Construction ---

#[test]
fn test_from_text_preserves_content() {
    let editor = Editor::from_text("hello\nworld");
    assert_eq!(editor.line_count(), 2);
    assert_eq!(editor.line_at(0), Some("hello".to_string()));
    assert_eq!(editor.line_at(1), Some("world".to_string()));
    assert_eq!(editor.text(), "hello\nworld");
}

#[test]
fn test_buffer_feeds_navigation_scans() {
    let editor = Editor::from_text("call(arg, )\nnext");
    let buffer = editor.buffer();
    assert_eq!(buffer.len_chars(), 16);
    assert_eq!(
        crate::navigation::exit_surrounding(buffer, pos(0, 8)),
        Some(pos(0, 11))
    );
    assert_eq!(crate::navigation::find_next_whitespace(buffer, pos(0, 11)), None);
}

#[test]
fn test_empty_editor_has_one_line_and_origin_caret() {
    let editor = Editor::empty();
    assert_eq!(editor.line_count(), 1);
    assert_eq!(editor.selections().primary(), Selection::caret(pos(0, 0)));
}

// --- Whitespace motions ---

#[test]
fn test_whitespace_forward_moves_every_cursor() {
    let mut editor = editor_at("foo bar\nbaz qux", &[(0, 0), (1, 0)]);
    assert_eq!(editor.execute(Motion::Whitespace(Direction::Forward), false), Ok(true));
    assert_eq!(actives(&editor), vec![pos(0, 4), pos(1, 4)]);
}

#[test]
fn test_whitespace_backward_with_extend_keeps_anchor() {
    let mut editor = editor_at("foo bar baz", &[(0, 11)]);
    editor
        .execute(Motion::Whitespace(Direction::Backward), true)
        .unwrap();
    assert_eq!(
        editor.selections().primary(),
        Selection::new(pos(0, 11), pos(0, 8))
    );
}

#[test]
fn test_whitespace_not_found_leaves_cursor() {
    let mut editor = editor_at("foobar", &[(0, 2)]);
    assert_eq!(editor.execute(Motion::Whitespace(Direction::Forward), false), Ok(false));
    assert_eq!(actives(&editor), vec![pos(0, 2)]);
}

// --- Character motions ---

#[test]
fn test_char_motion_updates_memory_and_moves() {
    let mut editor = editor_at("a,b,c", &[(0, 0)]);
    assert_eq!(editor.execute(Motion::Char(',', Direction::Forward), false), Ok(true));
    assert_eq!(actives(&editor), vec![pos(0, 1)]);
    assert_eq!(
        editor.memory(),
        SearchMemory {
            last_char: Some(','),
            last_direction: Some(Direction::Forward),
        }
    );
}

#[test]
fn test_char_motion_not_found_reports_and_still_remembers() {
    let mut editor = editor_at("abc", &[(0, 0)]);
    assert_eq!(
        editor.execute(Motion::Char('z', Direction::Forward), false),
        Err(CommandError::CharNotFound {
            ch: 'z',
            direction: Direction::Forward
        })
    );
    assert_eq!(editor.memory().last_char, Some('z'));
    assert_eq!(actives(&editor), vec![pos(0, 0)]);
}

#[test]
fn test_char_motion_succeeds_if_any_cursor_moves() {
    let mut editor = editor_at("x.y\nxyz", &[(0, 0), (1, 0)]);
    assert_eq!(editor.execute(Motion::Char('.', Direction::Forward), false), Ok(true));
    assert_eq!(actives(&editor), vec![pos(0, 1), pos(1, 0)]);
}

#[test]
fn test_last_char_without_memory_fails() {
    let mut editor = editor_at("abc", &[(0, 0)]);
    assert_eq!(
        editor.execute(Motion::LastChar(Direction::Forward), false),
        Err(CommandError::MissingLastChar)
    );
}

#[test]
fn test_last_char_repeats_search_in_new_direction() {
    let memory = SearchMemory {
        last_char: Some('-'),
        last_direction: Some(Direction::Forward),
    };
    let mut editor = editor_at("a-b-c-d", &[(0, 4)]).with_memory(memory);
    assert_eq!(editor.execute(Motion::LastChar(Direction::Backward), true), Ok(true));
    assert_eq!(editor.selections().primary(), Selection::new(pos(0, 4), pos(0, 3)));
    assert_eq!(editor.memory().last_direction, Some(Direction::Backward));
}

// --- Surrounding motions ---

#[test]
fn test_exit_then_enter_round_trip() {
    let mut editor = editor_at("call(arg, )", &[(0, 8)]);
    assert_eq!(editor.execute(Motion::ExitSurrounding, false), Ok(true));
    assert_eq!(actives(&editor), vec![pos(0, 11)]);
    assert_eq!(editor.execute(Motion::EnterSurrounding, false), Ok(true));
    assert_eq!(actives(&editor), vec![pos(0, 8)]);
}

#[test]
fn test_surrounding_motion_ignores_extend() {
    let mut editor = editor_at("f(a )", &[(0, 3)]);
    editor.execute(Motion::ExitSurrounding, true).unwrap();
    assert!(editor.selections().primary().is_caret());
    assert_eq!(actives(&editor), vec![pos(0, 5)]);
}

#[test]
fn test_exit_blocked_cursor_stays_while_others_move() {
    let mut editor = editor_at("f(ab)\ng(c )", &[(0, 2), (1, 3)]);
    assert_eq!(editor.execute(Motion::ExitSurrounding, false), Ok(true));
    assert_eq!(actives(&editor), vec![pos(0, 2), pos(1, 5)]);
}

#[test]
fn test_enter_not_after_closer_reports_nothing_found() {
    let mut editor = editor_at("foo(hello) bar", &[(0, 14)]);
    assert_eq!(editor.execute(Motion::EnterSurrounding, false), Ok(false));
    assert_eq!(actives(&editor), vec![pos(0, 14)]);
}
