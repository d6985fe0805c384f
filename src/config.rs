use serde::Deserialize;
use std::fs;
use std::path::PathBuf;

use crate::analysis::SchemeOptions;

/// How the phoneme dictionary is consulted.
#[derive(Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DictionaryMode {
    /// Load once into memory.
    #[default]
    Indexed,
    /// Re-read the file for every word.
    Scanning,
}

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    pub dictionary_path: PathBuf,
    pub dictionary_mode: DictionaryMode,
    pub skip_blank_lines: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            dictionary_path: PathBuf::from("dictionary.txt"),
            dictionary_mode: DictionaryMode::Indexed,
            skip_blank_lines: false,
        }
    }
}

impl Config {
    pub fn scheme_options(&self) -> SchemeOptions {
        SchemeOptions {
            skip_blank_lines: self.skip_blank_lines,
        }
    }
}

impl Config {
    /// Checks that `dictionary_path` names an existing file. `origin` names
    /// where the setting came from in the error message.
    pub fn validate(&self, origin: &str) -> Result<(), String> {
        if self.dictionary_path.is_file() {
            Ok(())
        } else {
            Err(format!(
                "Error: dictionary_path specified in {} ('{}') is not a readable file.",
                origin,
                self.dictionary_path.display()
            ))
        }
    }
}

/// Reads and deserializes `file_path` without checking the dictionary path,
/// so callers can apply overrides before [`Config::validate`].
pub fn parse_config_file(file_path: &str) -> Result<Config, String> {
    match fs::read_to_string(file_path) {
        Ok(contents) => toml::from_str::<Config>(&contents)
            .map_err(|e| format!("Failed to parse {}: {}", file_path, e)),
        Err(e) => Err(format!(
            "Failed to read {}: {}. Please ensure it exists.",
            file_path, e
        )),
    }
}

pub fn load_config_from_file(file_path: &str) -> Result<Config, String> {
    let loaded_config = parse_config_file(file_path)?;
    loaded_config.validate(file_path)?;
    Ok(loaded_config)
}
