// Keyboard bindings for the book

use std::str::FromStr;
use thiserror::Error;

use super::navigator::PageNavigator;
use super::types::RequestOutcome;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    ArrowLeft,
    ArrowRight,
    Home,
    End,
    Contact,
    Digit(u32),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum KeyParseError {
    #[error("Empty key input")]
    Empty,
    #[error("Unknown key '{0}' (try left, right, home, end, contact or a page number)")]
    Unknown(String),
}

impl FromStr for Key {
    type Err = KeyParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim();
        if token.is_empty() {
            return Err(KeyParseError::Empty);
        }
        if let Ok(page) = token.parse::<u32>() {
            return Ok(Key::Digit(page));
        }
        match token.to_ascii_lowercase().as_str() {
            "left" | "arrowleft" | "h" | "p" | "prev" | "previous" => Ok(Key::ArrowLeft),
            "right" | "arrowright" | "l" | "n" | "next" => Ok(Key::ArrowRight),
            "home" => Ok(Key::Home),
            "end" => Ok(Key::End),
            "c" | "contact" => Ok(Key::Contact),
            _ => Err(KeyParseError::Unknown(token.to_string())),
        }
    }
}

/// Split a comma or whitespace separated key list
pub fn parse_key_sequence(input: &str) -> Result<Vec<Key>, KeyParseError> {
    input
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .map(str::parse::<Key>)
        .collect()
}

/// Translate a key press into a navigator operation.
///
/// End jumps to the last page; `contact_page` is the id the contact
/// shortcut targets.
pub fn dispatch(navigator: &PageNavigator, key: Key, contact_page: u32) -> RequestOutcome {
    match key {
        Key::ArrowLeft => navigator.previous(),
        Key::ArrowRight => navigator.next(),
        Key::Home => navigator.go_to(1),
        Key::End => navigator.go_to(navigator.total_pages()),
        Key::Contact => navigator.go_to(contact_page),
        Key::Digit(page) => navigator.go_to(page),
    }
}
