pub mod classifier;
pub mod dictionary;
pub mod ending;
pub mod rhyme_table;
pub mod scheme;

// Re-export the pipeline pieces callers usually need together
pub use classifier::classify;
pub use dictionary::{PhonemeDictionary, PhonemeSource, ScanningDictionary};
pub use ending::ending_for;
pub use rhyme_table::RhymeTable;
pub use scheme::{build_scheme, find_rhyme_scheme, identify_sonnet, SchemeOptions};
