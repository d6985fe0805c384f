use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::{debug, warn};

use super::classifier::classify;
use super::dictionary::PhonemeSource;
use super::ending::ending_for;
use super::rhyme_table::RhymeTable;
use crate::error::AnalysisError;
use crate::parsing::lines::lossy_lines;
use crate::parsing::tokenizer::last_word;
use crate::report_io::SonnetReport;
use crate::types::rhyme_data::RhymeScheme;

/// Knobs for how sonnet lines are read.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SchemeOptions {
    /// Blank lines (whitespace only) contribute no letter instead of failing
    /// the poem.
    pub skip_blank_lines: bool,
}

/// Derives the rhyme scheme of the poem read from `lines`.
///
/// `table` is reset before the first line. The first line whose last word
/// cannot be resolved aborts the whole poem.
pub fn build_scheme<R, S>(
    lines: R,
    source: &S,
    table: &mut RhymeTable,
    options: SchemeOptions,
) -> Result<RhymeScheme, AnalysisError>
where
    R: BufRead,
    S: PhonemeSource + ?Sized,
{
    table.reset();
    let mut scheme = RhymeScheme::new();

    for (index, line) in lossy_lines(lines).enumerate() {
        let line = line?;
        let line_no = index + 1;
        if options.skip_blank_lines && line.trim().is_empty() {
            debug!(line = line_no, "skipping blank line");
            continue;
        }

        let word = last_word(&line).ok_or(AnalysisError::NoWord { line: line_no })?;
        let ending = match ending_for(&word, source)? {
            Some(ending) => ending,
            None => {
                warn!(line = line_no, word = %word, "word missing from phoneme dictionary");
                return Err(AnalysisError::UnknownWord { line: line_no, word });
            }
        };
        let letter = table.letter_for(&ending)?;
        debug!(line = line_no, word = %word, ending = %ending, letter = %letter, "assigned rhyme letter");
        scheme.push(letter);
    }

    Ok(scheme)
}

/// Opens the sonnet at `path` and derives its rhyme scheme with a fresh table.
pub fn find_rhyme_scheme<S: PhonemeSource + ?Sized>(
    path: &Path,
    source: &S,
    options: SchemeOptions,
) -> Result<RhymeScheme, AnalysisError> {
    let file = File::open(path)?;
    let mut table = RhymeTable::new();
    build_scheme(BufReader::new(file), source, &mut table, options)
}

/// Derives and classifies the sonnet at `path`.
pub fn identify_sonnet<S: PhonemeSource + ?Sized>(
    path: &Path,
    source: &S,
    options: SchemeOptions,
) -> Result<SonnetReport, AnalysisError> {
    let scheme = find_rhyme_scheme(path, source, options)?;
    let form = classify(&scheme);
    debug!(path = %path.display(), scheme = %scheme, form = %form, "classified sonnet");
    Ok(SonnetReport {
        source: path.to_path_buf(),
        scheme,
        form,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::dictionary::PhonemeDictionary;
    use std::io::Cursor;

    fn dictionary() -> PhonemeDictionary {
        let text = "LIGHT L AY T\nNIGHT N AY T\nDAY D EY\nWAY W EY\nKNOWN N OW N\n";
        PhonemeDictionary::from_reader(Cursor::new(text)).unwrap()
    }

    fn scheme_of(poem: &str, options: SchemeOptions) -> Result<RhymeScheme, AnalysisError> {
        build_scheme(Cursor::new(poem), &dictionary(), &mut RhymeTable::new(), options)
    }

    #[test]
    fn matching_endings_share_letters() {
        let poem = "In the light\nAll through the night,\nBy the day\nAnd on the way.\n";
        assert_eq!(scheme_of(poem, SchemeOptions::default()).unwrap().as_str(), "aabb");
    }

    #[test]
    fn table_is_reset_between_poems() {
        let dictionary = dictionary();
        let mut table = RhymeTable::new();
        let first = build_scheme(
            Cursor::new("light\nday\n"),
            &dictionary,
            &mut table,
            SchemeOptions::default(),
        )
        .unwrap();
        let second = build_scheme(
            Cursor::new("day\nlight\n"),
            &dictionary,
            &mut table,
            SchemeOptions::default(),
        )
        .unwrap();
        assert_eq!(first.as_str(), "ab");
        assert_eq!(second.as_str(), "ab");
    }

    #[test]
    fn unknown_last_word_fails_the_poem() {
        let err = scheme_of("light\nnight\nmoon\n", SchemeOptions::default()).unwrap_err();
        match err {
            AnalysisError::UnknownWord { line, word } => {
                assert_eq!(line, 3);
                assert_eq!(word, "MOON");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn blank_line_fails_unless_skipped() {
        let poem = "light\n\nnight\n";
        assert!(matches!(
            scheme_of(poem, SchemeOptions::default()),
            Err(AnalysisError::NoWord { line: 2 })
        ));
        let skip = SchemeOptions { skip_blank_lines: true };
        assert_eq!(scheme_of(poem, skip).unwrap().as_str(), "aa");
    }

    #[test]
    fn latin1_bytes_in_a_line_act_as_separators() {
        let poem: &[u8] = b"caf\xE9 in the light\nall night\r\n";
        let scheme = build_scheme(
            Cursor::new(poem),
            &dictionary(),
            &mut RhymeTable::new(),
            SchemeOptions::default(),
        )
        .unwrap();
        assert_eq!(scheme.as_str(), "aa");
    }

    #[test]
    fn hyphenated_line_end_resolves() {
        assert_eq!(scheme_of("well-known\n", SchemeOptions::default()).unwrap().as_str(), "a");
    }

    #[test]
    fn empty_input_gives_empty_scheme() {
        assert!(scheme_of("", SchemeOptions::default()).unwrap().is_empty());
    }
}
