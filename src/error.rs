use std::error::Error;
use std::fmt;
use std::io;
use std::path::PathBuf;

/// Everything that can stop a poem from producing a rhyme scheme.
///
/// An `Unknown` sonnet form is not an error; it is a regular classification
/// result. Every variant here means no scheme was produced at all.
#[derive(Debug)]
pub enum AnalysisError {
    /// The last word of a line has no entry in the phoneme dictionary.
    UnknownWord { line: usize, word: String },
    /// A line yielded no last word (empty line, or the word count points past
    /// the last alphanumeric run).
    NoWord { line: usize },
    /// The dictionary file could not be opened or read.
    DictionaryUnavailable { path: PathBuf, source: io::Error },
    /// More than 26 distinct phonetic endings within a single poem.
    RhymeClassOverflow { ending: String },
    /// Reading the sonnet itself failed.
    Io(io::Error),
}

impl fmt::Display for AnalysisError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnalysisError::UnknownWord { line, word } => {
                write!(f, "line {}: no phonetic entry for '{}'", line, word)
            }
            AnalysisError::NoWord { line } => write!(f, "line {}: no final word found", line),
            AnalysisError::DictionaryUnavailable { path, source } => {
                write!(f, "cannot read dictionary {:?}: {}", path, source)
            }
            AnalysisError::RhymeClassOverflow { ending } => write!(
                f,
                "more than 26 rhyme classes in one poem (ending '{}' has no letter left)",
                ending
            ),
            AnalysisError::Io(e) => write!(f, "failed to read sonnet: {}", e),
        }
    }
}

impl Error for AnalysisError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            AnalysisError::DictionaryUnavailable { source, .. } => Some(source),
            AnalysisError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for AnalysisError {
    fn from(e: io::Error) -> Self {
        AnalysisError::Io(e)
    }
}

impl AnalysisError {
    /// True for the failures that mean "no phonetic ending could be derived"
    /// for some line: unknown word, missing word, or unreachable dictionary.
    pub fn is_unresolvable_word(&self) -> bool {
        matches!(
            self,
            AnalysisError::UnknownWord { .. }
                | AnalysisError::NoWord { .. }
                | AnalysisError::DictionaryUnavailable { .. }
        )
    }
}
