use crate::types::rhyme_data::{RhymeScheme, SonnetForm};

/// Exact, full-length match against the canonical patterns.
pub fn classify(scheme: &RhymeScheme) -> SonnetForm {
    SonnetForm::CANONICAL
        .into_iter()
        .find(|form| form.pattern() == Some(scheme.as_str()))
        .unwrap_or(SonnetForm::Unknown)
}
