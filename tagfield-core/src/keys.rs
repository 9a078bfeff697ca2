use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Platform-agnostic key, translated from crossterm or ratzilla events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Char(char),
    Enter,
    Tab,
    Backspace,
    Up,
    Down,
    Left,
    Right,
    Esc,
    Other,
}

/// A key press together with the shift state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyPress {
    pub key: Key,
    pub shift: bool,
}

impl KeyPress {
    pub fn new(key: Key) -> Self {
        Self { key, shift: false }
    }

    pub fn shifted(key: Key) -> Self {
        Self { key, shift: true }
    }
}

impl From<Key> for KeyPress {
    fn from(key: Key) -> Self {
        KeyPress::new(key)
    }
}

/// A key that finalizes the current query into a tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Delimiter {
    Enter,
    Tab,
    Char(char),
}

impl Delimiter {
    pub fn defaults() -> Vec<Delimiter> {
        vec![Delimiter::Enter, Delimiter::Tab]
    }

    /// Character this delimiter stands for inside pasted text
    pub fn as_char(&self) -> char {
        match self {
            Delimiter::Enter => '\n',
            Delimiter::Tab => '\t',
            Delimiter::Char(c) => *c,
        }
    }

    pub fn matches(&self, press: &KeyPress) -> bool {
        matches!(
            (self, press.key),
            (Delimiter::Enter, Key::Enter) | (Delimiter::Tab, Key::Tab)
        ) || matches!((self, press.key), (Delimiter::Char(d), Key::Char(c)) if *d == c)
    }
}

impl fmt::Display for Delimiter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Delimiter::Enter => f.write_str("enter"),
            Delimiter::Tab => f.write_str("tab"),
            Delimiter::Char(c) => write!(f, "{}", c),
        }
    }
}

impl TryFrom<String> for Delimiter {
    type Error = ConfigError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        match value.to_ascii_lowercase().as_str() {
            "enter" | "return" => return Ok(Delimiter::Enter),
            "tab" => return Ok(Delimiter::Tab),
            "space" => return Ok(Delimiter::Char(' ')),
            _ => {}
        }

        let mut chars = value.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Ok(Delimiter::Char(c)),
            _ => Err(ConfigError::InvalidDelimiter(value)),
        }
    }
}

impl From<Delimiter> for String {
    fn from(delimiter: Delimiter) -> Self {
        delimiter.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delimiter_parsing() {
        assert_eq!(Delimiter::try_from("Enter".to_string()).unwrap(), Delimiter::Enter);
        assert_eq!(Delimiter::try_from("tab".to_string()).unwrap(), Delimiter::Tab);
        assert_eq!(Delimiter::try_from(",".to_string()).unwrap(), Delimiter::Char(','));
        assert_eq!(Delimiter::try_from("space".to_string()).unwrap(), Delimiter::Char(' '));
        assert!(Delimiter::try_from("comma".to_string()).is_err());
        assert!(Delimiter::try_from(String::new()).is_err());
    }

    #[test]
    fn test_delimiter_matches_key() {
        assert!(Delimiter::Enter.matches(&Key::Enter.into()));
        assert!(Delimiter::Char(',').matches(&Key::Char(',').into()));
        assert!(!Delimiter::Char(',').matches(&Key::Char(';').into()));
        assert!(!Delimiter::Tab.matches(&Key::Enter.into()));
    }
}
