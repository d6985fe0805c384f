use crate::types::rhyme_data::{RhymeScheme, SonnetForm};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fs::File;
use std::io::{BufReader, BufWriter, Error as IoError, ErrorKind as IoErrorKind};
use std::path::{Path, PathBuf};

/// Outcome of analysing one sonnet file.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct SonnetReport {
    pub source: PathBuf,
    pub scheme: RhymeScheme,
    pub form: SonnetForm,
}

/// Writes the reports to `file_path` as pretty-printed JSON.
pub fn save_reports(reports: &[SonnetReport], file_path: &Path) -> Result<(), Box<dyn Error>> {
    let file = File::create(file_path)
        .map_err(|e| format!("Failed to create report file at {:?}: {}", file_path, e))?;
    let writer = BufWriter::new(file);

    serde_json::to_writer_pretty(writer, reports)
        .map_err(|e| format!("Failed to serialize reports to {:?}: {}", file_path, e))?;

    Ok(())
}

/// Reads back a report file written by [`save_reports`].
pub fn load_reports(file_path: &Path) -> Result<Vec<SonnetReport>, Box<dyn Error>> {
    if !file_path.exists() {
        return Err(Box::new(IoError::new(
            IoErrorKind::NotFound,
            format!("Report file not found at {:?}", file_path),
        )));
    }

    let file = File::open(file_path)
        .map_err(|e| format!("Failed to open report file at {:?}: {}", file_path, e))?;
    let reader = BufReader::new(file);

    let reports: Vec<SonnetReport> = serde_json::from_reader(reader)
        .map_err(|e| format!("Failed to deserialize reports from {:?}: {}", file_path, e))?;

    Ok(reports)
}
