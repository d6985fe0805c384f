use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::error::AnalysisError;
use crate::parsing::dictionary_parser::{normalize_word, parse_entry};
use crate::parsing::lines::lossy_lines;
use crate::types::rhyme_data::PhonemeSequence;

/// Anything that can answer "how is this word pronounced?".
///
/// `Ok(None)` means the word is absent. `Err` is reserved for a dictionary
/// that cannot be read at all.
pub trait PhonemeSource {
    fn lookup(&self, word: &str) -> Result<Option<PhonemeSequence>, AnalysisError>;
}

/// Whole dictionary indexed in memory, built once per run.
#[derive(Debug, Default, Clone)]
pub struct PhonemeDictionary {
    entries: HashMap<String, PhonemeSequence>,
}

impl PhonemeDictionary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads and indexes the dictionary at `path`.
    pub fn load(path: &Path) -> Result<Self, AnalysisError> {
        let unavailable = |source| AnalysisError::DictionaryUnavailable {
            path: path.to_path_buf(),
            source,
        };
        let file = File::open(path).map_err(unavailable)?;
        let dictionary = Self::from_reader(BufReader::new(file)).map_err(unavailable)?;
        info!(path = %path.display(), words = dictionary.size(), "loaded phoneme dictionary");
        Ok(dictionary)
    }

    /// Indexes `WORD p1 p2 ...` lines. When a headword repeats, the first
    /// entry in file order is kept.
    pub fn from_reader<R: BufRead>(reader: R) -> std::io::Result<Self> {
        let mut dictionary = Self::new();
        for line in lossy_lines(reader) {
            if let Some(entry) = parse_entry(&line?) {
                let word = entry.word.clone();
                if !dictionary.insert_if_absent(entry.word, entry.phonemes) {
                    debug!(word = %word, "ignoring duplicate dictionary entry");
                }
            }
        }
        Ok(dictionary)
    }

    /// Adds an entry unless the headword is already present. Returns whether
    /// it was inserted.
    pub fn insert_if_absent(&mut self, word: String, phonemes: PhonemeSequence) -> bool {
        match self.entries.entry(word) {
            std::collections::hash_map::Entry::Occupied(_) => false,
            std::collections::hash_map::Entry::Vacant(slot) => {
                slot.insert(phonemes);
                true
            }
        }
    }

    pub fn get(&self, word: &str) -> Option<&PhonemeSequence> {
        self.entries.get(&normalize_word(word))
    }

    /// Number of distinct headwords.
    pub fn size(&self) -> usize {
        self.entries.len()
    }
}

impl PhonemeSource for PhonemeDictionary {
    fn lookup(&self, word: &str) -> Result<Option<PhonemeSequence>, AnalysisError> {
        Ok(self.get(word).cloned())
    }
}

/// Re-reads the dictionary file from the top for every query.
#[derive(Debug, Clone)]
pub struct ScanningDictionary {
    path: PathBuf,
}

impl ScanningDictionary {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        ScanningDictionary { path: path.into() }
    }
}

impl PhonemeSource for ScanningDictionary {
    fn lookup(&self, word: &str) -> Result<Option<PhonemeSequence>, AnalysisError> {
        let unavailable = |source| AnalysisError::DictionaryUnavailable {
            path: self.path.clone(),
            source,
        };
        let query = normalize_word(word);
        let reader = BufReader::new(File::open(&self.path).map_err(unavailable)?);
        for line in lossy_lines(reader) {
            let line = line.map_err(unavailable)?;
            if let Some(entry) = parse_entry(&line) {
                if entry.word == query {
                    return Ok(Some(entry.phonemes));
                }
            }
        }
        Ok(None)
    }
}
