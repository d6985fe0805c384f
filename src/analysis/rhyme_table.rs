use std::collections::HashMap;

use crate::error::AnalysisError;
use crate::types::rhyme_data::PhoneticEnding;

/// Per-poem mapping from phonetic ending to rhyme letter.
///
/// Letters are issued in order starting at `'a'`. Construct one table per
/// poem, or call [`RhymeTable::reset`] before reusing it.
#[derive(Debug, Clone)]
pub struct RhymeTable {
    letters: HashMap<PhoneticEnding, char>,
    next: Option<char>,
}

impl Default for RhymeTable {
    fn default() -> Self {
        Self::new()
    }
}

impl RhymeTable {
    pub fn new() -> Self {
        RhymeTable {
            letters: HashMap::new(),
            next: Some('a'),
        }
    }

    /// Forgets every ending and rewinds the cursor to `'a'`.
    pub fn reset(&mut self) {
        self.letters.clear();
        self.next = Some('a');
    }

    /// Letter for `ending`, issuing the next free one if it is new.
    ///
    /// Fails once all 26 letters are taken; the table is left unchanged.
    pub fn letter_for(&mut self, ending: &PhoneticEnding) -> Result<char, AnalysisError> {
        if let Some(&letter) = self.letters.get(ending) {
            return Ok(letter);
        }
        let letter = self.next.ok_or_else(|| AnalysisError::RhymeClassOverflow {
            ending: ending.to_string(),
        })?;
        self.letters.insert(ending.clone(), letter);
        self.next = if letter == 'z' {
            None
        } else {
            Some((letter as u8 + 1) as char)
        };
        Ok(letter)
    }

    /// Number of distinct endings seen since the last reset.
    pub fn classes(&self) -> usize {
        self.letters.len()
    }
}
