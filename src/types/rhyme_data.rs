use serde::{Deserialize, Serialize};
use std::fmt;

/// Phoneme tokens of one dictionary entry, in dictionary order.
pub type PhonemeSequence = Vec<String>;

/// The rhyme-bearing tail of a word's pronunciation.
///
/// Tokens are stored in the order they were visited, last phoneme first, and
/// concatenated without separators. Only equality between endings matters.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct PhoneticEnding(pub String);

impl PhoneticEnding {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PhoneticEnding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One lowercase rhyme letter per line, in line order.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(transparent)]
pub struct RhymeScheme(String);

impl RhymeScheme {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, letter: char) {
        self.0.push(letter);
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&str> for RhymeScheme {
    fn from(letters: &str) -> Self {
        RhymeScheme(letters.to_string())
    }
}

impl fmt::Display for RhymeScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SonnetForm {
    Shakespearean,
    Petrarchan,
    Spenserian,
    Unknown,
}

impl SonnetForm {
    /// The three forms that have a fixed reference pattern.
    pub const CANONICAL: [SonnetForm; 3] = [
        SonnetForm::Shakespearean,
        SonnetForm::Petrarchan,
        SonnetForm::Spenserian,
    ];

    /// The 14-letter reference scheme, or `None` for `Unknown`.
    pub fn pattern(self) -> Option<&'static str> {
        match self {
            SonnetForm::Shakespearean => Some("ababcdcdefefgg"),
            SonnetForm::Petrarchan => Some("abbaabbacdcdcd"),
            SonnetForm::Spenserian => Some("ababbcbccdcdee"),
            SonnetForm::Unknown => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SonnetForm::Shakespearean => "Shakespearean",
            SonnetForm::Petrarchan => "Petrarchan",
            SonnetForm::Spenserian => "Spenserian",
            SonnetForm::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for SonnetForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
