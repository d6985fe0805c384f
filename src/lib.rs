// Declare all modules that are part of this library
pub mod config;
pub mod error;
pub mod types {
    pub mod rhyme_data;
}
pub mod parsing;
pub mod analysis;
pub mod report_io;

pub use analysis::{
    build_scheme, classify, find_rhyme_scheme, identify_sonnet, PhonemeDictionary, PhonemeSource,
    RhymeTable, ScanningDictionary, SchemeOptions,
};
pub use error::AnalysisError;
pub use report_io::SonnetReport;
pub use types::rhyme_data::{PhoneticEnding, RhymeScheme, SonnetForm};
