pub mod dictionary_parser;
pub mod lines;
pub mod tokenizer;

pub use dictionary_parser::{parse_entry, DictionaryEntry};
pub use lines::lossy_lines;
pub use tokenizer::{last_word, nth_word, word_count};
