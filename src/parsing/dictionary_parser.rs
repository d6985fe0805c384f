use crate::types::rhyme_data::PhonemeSequence;

/// One `WORD p1 p2 ...` line of a phoneme dictionary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DictionaryEntry {
    /// Headword, ASCII-uppercased so it compares equal to tokenizer output.
    pub word: String,
    pub phonemes: PhonemeSequence,
}

/// Parses one dictionary line. Blank lines yield `None`.
///
/// A headword with no phonemes is kept; its phonetic ending is empty.
pub fn parse_entry(line: &str) -> Option<DictionaryEntry> {
    let mut tokens = line.split_whitespace();
    let word = tokens.next()?;
    Some(DictionaryEntry {
        word: normalize_word(word),
        phonemes: tokens.map(String::from).collect(),
    })
}

/// Case policy shared by dictionary headwords and lookup queries.
pub fn normalize_word(word: &str) -> String {
    word.trim().to_ascii_uppercase()
}
