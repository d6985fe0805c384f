use crate::analysis::dictionary::PhonemeSource;
use crate::error::AnalysisError;
use crate::types::rhyme_data::PhoneticEnding;

fn has_vowel(phoneme: &str) -> bool {
    phoneme
        .chars()
        .any(|c| matches!(c.to_ascii_lowercase(), 'a' | 'e' | 'i' | 'o' | 'u'))
}

impl PhoneticEnding {
    /// Walks `phonemes` from the last token backwards, appending each one,
    /// and stops right after the first token that contains a vowel letter.
    pub fn from_phonemes<S: AsRef<str>>(phonemes: &[S]) -> Self {
        let mut ending = String::new();
        for phoneme in phonemes.iter().rev() {
            let phoneme = phoneme.as_ref();
            ending.push_str(phoneme);
            if has_vowel(phoneme) {
                break;
            }
        }
        PhoneticEnding(ending)
    }
}

/// Looks `word` up and extracts its phonetic ending.
///
/// Returns `Ok(None)` when the word is not in the dictionary; the caller
/// knows which line it came from and builds the error.
pub fn ending_for<S: PhonemeSource + ?Sized>(
    word: &str,
    source: &S,
) -> Result<Option<PhoneticEnding>, AnalysisError> {
    Ok(source
        .lookup(word)?
        .map(|phonemes| PhoneticEnding::from_phonemes(phonemes.as_slice())))
}
