pub mod file_finder;
pub mod processor;
pub mod stripper;

pub use file_finder::{
    CliArgs, InputKind, InputReport, collect_by_pattern, collect_input, collect_inputs,
    collect_recursive,
};

pub use processor::{FileOutcome, ProcessedFileResult, RunSummary, process_files};
pub use stripper::sanitize_file;

use std::path::PathBuf;

#[derive(thiserror::Error, Debug)]
pub enum CoreError {
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to read directory: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("Not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    #[error("Invalid file pattern {pattern:?}: {source}")]
    InvalidPattern {
        pattern: String,
        source: regex::Error,
    },
}
