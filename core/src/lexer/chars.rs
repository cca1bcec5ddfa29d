//! Character classes consulted by the scanner.

pub const DIGITS: [char; 10] = ['0', '1', '2', '3', '4', '5', '6', '7', '8', '9'];

pub const WHITESPACE: [char; 3] = [' ', '\t', '\n'];

/// Punctuation that becomes a standalone token when
/// `LexerOptions::split_special_chars` is enabled.
pub const SPECIAL_CHARS: [char; 7] = ['(', ')', '[', ']', '{', '}', ','];

pub fn is_digit(c: char) -> bool {
    DIGITS.contains(&c)
}

pub fn is_whitespace(c: char) -> bool {
    WHITESPACE.contains(&c)
}

pub fn is_special_char(c: char) -> bool {
    SPECIAL_CHARS.contains(&c)
}
