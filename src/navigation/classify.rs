//! Delimiter and skippable-character classification.

/// Escape character. A backslash and the character after it form one unit.
pub const ESCAPE: char = '\\';

/// Bracket and quote pairs recognised by navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Delimiter {
    /// `(` `)`
    Paren,
    /// `[` `]`
    Bracket,
    /// `{` `}`
    Brace,
    /// `"`
    DoubleQuote,
    /// `'`
    SingleQuote,
    /// `` ` ``
    Backtick,
}

impl Delimiter {
    pub const ALL: [Self; 6] = [
        Self::Paren,
        Self::Bracket,
        Self::Brace,
        Self::DoubleQuote,
        Self::SingleQuote,
        Self::Backtick,
    ];

    /// Opening character.
    pub const fn open(self) -> char {
        match self {
            Self::Paren => '(',
            Self::Bracket => '[',
            Self::Brace => '{',
            Self::DoubleQuote => '"',
            Self::SingleQuote => '\'',
            Self::Backtick => '`',
        }
    }

    /// Closing character.
    pub const fn close(self) -> char {
        match self {
            Self::Paren => ')',
            Self::Bracket => ']',
            Self::Brace => '}',
            Self::DoubleQuote => '"',
            Self::SingleQuote => '\'',
            Self::Backtick => '`',
        }
    }

    /// Quotes open and close with the same character and never nest.
    pub const fn is_self_paired(self) -> bool {
        matches!(self, Self::DoubleQuote | Self::SingleQuote | Self::Backtick)
    }

    /// Delimiter whose opening character is `c`.
    pub const fn from_open(c: char) -> Option<Self> {
        match c {
            '(' => Some(Self::Paren),
            '[' => Some(Self::Bracket),
            '{' => Some(Self::Brace),
            '"' => Some(Self::DoubleQuote),
            '\'' => Some(Self::SingleQuote),
            '`' => Some(Self::Backtick),
            _ => None,
        }
    }

    /// Delimiter whose closing character is `c`.
    pub const fn from_close(c: char) -> Option<Self> {
        match c {
            ')' => Some(Self::Paren),
            ']' => Some(Self::Bracket),
            '}' => Some(Self::Brace),
            '"' => Some(Self::DoubleQuote),
            '\'' => Some(Self::SingleQuote),
            '`' => Some(Self::Backtick),
            _ => None,
        }
    }
}

pub const fn is_opening(c: char) -> bool {
    Delimiter::from_open(c).is_some()
}

pub const fn is_closing(c: char) -> bool {
    Delimiter::from_close(c).is_some()
}

/// Opening character paired with the closing character `close`.
pub fn paired_open_for(close: char) -> Option<char> {
    Delimiter::from_close(close).map(Delimiter::open)
}

/// Closing character paired with the opening character `open`.
pub fn paired_close_for(open: char) -> Option<char> {
    Delimiter::from_open(open).map(Delimiter::close)
}

/// Whitespace or trivial punctuation that navigation may pass over.
///
/// Never true for a delimiter.
pub fn is_skippable(c: char) -> bool {
    c.is_whitespace()
        || matches!(
            c,
            ',' | ';'
                | ':'
                | '.'
                | '-'
                | '+'
                | '*'
                | '/'
                | '<'
                | '>'
                | '='
                | '!'
                | '&'
                | '|'
                | '^'
                | '~'
                | '?'
                | '@'
                | '#'
                | '$'
                | '%'
                | ESCAPE
        )
}
