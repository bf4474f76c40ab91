use thiserror::Error;

/// Search direction for character and whitespace motions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Forward,
    Backward,
}

impl Direction {
    /// Word used in user-facing messages.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Forward => "Next",
            Self::Backward => "Previous",
        }
    }

    /// Name used in persisted state.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Forward => "forward",
            Self::Backward => "backward",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "forward" => Some(Self::Forward),
            "backward" => Some(Self::Backward),
            _ => None,
        }
    }
}

/// A cursor motion the editor can execute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Motion {
    /// Jump past the next/previous whitespace run.
    Whitespace(Direction),
    /// Jump to the next/previous occurrence of a character on the line.
    Char(char, Direction),
    /// Repeat the last character search in the given direction.
    LastChar(Direction),
    /// Step out past the closer of the current surrounding.
    ExitSurrounding,
    /// Step back into the pair closed right before the cursor.
    EnterSurrounding,
}

/// The most recent character search of a session. Last write wins.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchMemory {
    pub last_char: Option<char>,
    /// Recorded and persisted with the char, but repeat searches take their
    /// direction from the motion, never from here.
    pub last_direction: Option<Direction>,
}

impl SearchMemory {
    pub const fn remember(&mut self, ch: char, direction: Direction) {
        self.last_char = Some(ch);
        self.last_direction = Some(direction);
    }
}

/// Failures reported back to the user after running a motion.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("Last character not found")]
    MissingLastChar,
    #[error("{} char \"{ch}\" not found", .direction.label())]
    CharNotFound { ch: char, direction: Direction },
    #[error("expected a single character, got {0:?}")]
    InvalidSearchChar(String),
}

/// Accept search input only when it is exactly one character.
///
/// # Errors
///
/// Returns [`CommandError::InvalidSearchChar`] for empty or longer input.
pub fn parse_search_char(input: &str) -> Result<char, CommandError> {
    let mut chars = input.chars();
    match (chars.next(), chars.next()) {
        (Some(ch), None) => Ok(ch),
        _ => Err(CommandError::InvalidSearchChar(input.to_string())),
    }
}
