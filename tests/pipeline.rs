//! End-to-end tests for the rhyme-scheme pipeline
//!
//! Fixtures live in tests/fixtures: three public-domain sonnets and a small
//! phoneme dictionary covering their line endings.

use std::io::{Cursor, Write};
use std::path::PathBuf;

use rstest::rstest;
use sonnet_form::{
    build_scheme, classify, find_rhyme_scheme, identify_sonnet, AnalysisError, PhonemeDictionary,
    PhonemeSource, RhymeTable, ScanningDictionary, SchemeOptions, SonnetForm,
};

fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn fixture_dictionary() -> PhonemeDictionary {
    PhonemeDictionary::load(&fixture_path("dictionary.txt")).unwrap()
}

#[rstest]
#[case("shakespeare_18.txt", "ababcdcdefefgg", SonnetForm::Shakespearean)]
#[case("wordsworth_world.txt", "abbaabbacdcdcd", SonnetForm::Petrarchan)]
#[case("spenser_amoretti_75.txt", "ababbcbccdcdee", SonnetForm::Spenserian)]
fn identifies_canonical_sonnets(
    #[case] file: &str,
    #[case] expected_scheme: &str,
    #[case] expected_form: SonnetForm,
) {
    let report = identify_sonnet(
        &fixture_path(file),
        &fixture_dictionary(),
        SchemeOptions::default(),
    )
    .unwrap();
    assert_eq!(report.scheme.as_str(), expected_scheme);
    assert_eq!(report.form, expected_form);
}

#[rstest]
#[case("shakespeare_18.txt")]
#[case("wordsworth_world.txt")]
#[case("spenser_amoretti_75.txt")]
fn scanning_dictionary_agrees_with_index(#[case] file: &str) {
    let path = fixture_path(file);
    let indexed = find_rhyme_scheme(&path, &fixture_dictionary(), SchemeOptions::default()).unwrap();
    let scanning = ScanningDictionary::new(fixture_path("dictionary.txt"));
    let scanned = find_rhyme_scheme(&path, &scanning, SchemeOptions::default()).unwrap();
    assert_eq!(indexed, scanned);
}

#[test]
fn light_night_day_way_is_aabb() {
    let dictionary =
        PhonemeDictionary::from_reader(Cursor::new("LIGHT L AY T\nNIGHT N AY T\nDAY D EY\nWAY W EY\n"))
            .unwrap();
    let poem = "I wake into the light\nand sleep into the night\nI work throughout the day\nand wander on my way\n";
    let scheme =
        build_scheme(Cursor::new(poem), &dictionary, &mut RhymeTable::new(), SchemeOptions::default())
            .unwrap();
    assert_eq!(scheme.as_str(), "aabb");
    assert_eq!(classify(&scheme), SonnetForm::Unknown);
}

#[test]
fn duplicate_headword_keeps_first_pronunciation() {
    // the fixture lists "sea S EH" after "SEA S IY"
    let dictionary = fixture_dictionary();
    assert_eq!(dictionary.lookup("sea").unwrap().unwrap(), vec!["S", "IY"]);
    let scanning = ScanningDictionary::new(fixture_path("dictionary.txt"));
    assert_eq!(scanning.lookup("SEA").unwrap().unwrap(), vec!["S", "IY"]);
}

#[test]
fn missing_final_word_fails_instead_of_unknown() {
    let original = std::fs::read_to_string(fixture_path("wordsworth_world.txt")).unwrap();
    let altered = original.replace("wreathed horn.", "wreathed trumpet.");
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(altered.as_bytes()).unwrap();

    let err = identify_sonnet(file.path(), &fixture_dictionary(), SchemeOptions::default())
        .unwrap_err();
    assert!(err.is_unresolvable_word());
    assert!(matches!(err, AnalysisError::UnknownWord { line: 14, .. }));
}

#[test]
fn unreadable_dictionary_fails_every_line_lookup() {
    let dir = tempfile::tempdir().unwrap();
    let scanning = ScanningDictionary::new(dir.path().join("missing.txt"));
    let err = find_rhyme_scheme(
        &fixture_path("shakespeare_18.txt"),
        &scanning,
        SchemeOptions::default(),
    )
    .unwrap_err();
    assert!(err.is_unresolvable_word());
    assert!(matches!(err, AnalysisError::DictionaryUnavailable { .. }));
}

#[test]
fn missing_sonnet_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = find_rhyme_scheme(
        &dir.path().join("no-sonnet.txt"),
        &fixture_dictionary(),
        SchemeOptions::default(),
    )
    .unwrap_err();
    assert!(matches!(err, AnalysisError::Io(_)));
}

#[test]
fn shorter_poem_is_unknown() {
    let original = std::fs::read_to_string(fixture_path("shakespeare_18.txt")).unwrap();
    let first_twelve: String = original.lines().take(12).map(|l| format!("{}\n", l)).collect();
    let scheme = build_scheme(
        Cursor::new(first_twelve),
        &fixture_dictionary(),
        &mut RhymeTable::new(),
        SchemeOptions::default(),
    )
    .unwrap();
    assert_eq!(scheme.as_str(), "ababcdcdefef");
    assert_eq!(classify(&scheme), SonnetForm::Unknown);
}

#[test]
fn one_table_reused_across_sonnets_starts_fresh_each_time() {
    let dictionary = fixture_dictionary();
    let mut table = RhymeTable::new();
    for (file, form) in [
        ("spenser_amoretti_75.txt", SonnetForm::Spenserian),
        ("wordsworth_world.txt", SonnetForm::Petrarchan),
    ] {
        let reader = std::io::BufReader::new(std::fs::File::open(fixture_path(file)).unwrap());
        let scheme = build_scheme(reader, &dictionary, &mut table, SchemeOptions::default()).unwrap();
        assert!(scheme.as_str().starts_with('a'));
        assert_eq!(classify(&scheme), form);
    }
}
