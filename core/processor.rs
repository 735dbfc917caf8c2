use crate::CoreError;
use crate::stripper::{FileReport, sanitize_file};
use rayon::prelude::*;
use std::path::PathBuf;

#[derive(Debug)]
pub enum FileOutcome {
    Cleaned {
        match_count: usize,
        chars_removed: usize,
    },
    Unchanged,
    Failed(CoreError),
}

impl From<Result<FileReport, CoreError>> for FileOutcome {
    fn from(r: Result<FileReport, CoreError>) -> Self {
        match r {
            Ok(FileReport {
                modified: true,
                match_count,
                chars_removed,
            }) => FileOutcome::Cleaned {
                match_count,
                chars_removed,
            },
            Ok(_) => FileOutcome::Unchanged,
            Err(e) => FileOutcome::Failed(e),
        }
    }
}

#[derive(Debug)]
pub struct ProcessedFileResult {
    pub path: PathBuf,
    pub outcome: FileOutcome,
}

/// Totals for one run, built by folding per-file outcomes.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub cleaned: usize,
    pub unchanged: usize,
    pub failed: usize,
    pub chars_removed: usize,
}

impl RunSummary {
    pub fn record(mut self, outcome: &FileOutcome) -> Self {
        match outcome {
            FileOutcome::Cleaned { chars_removed, .. } => {
                self.cleaned += 1;
                self.chars_removed += chars_removed;
            }
            FileOutcome::Unchanged => self.unchanged += 1,
            FileOutcome::Failed(_) => self.failed += 1,
        }
        self
    }

    pub fn total(&self) -> usize {
        self.cleaned + self.unchanged + self.failed
    }
}

impl<'a> FromIterator<&'a ProcessedFileResult> for RunSummary {
    fn from_iter<I: IntoIterator<Item = &'a ProcessedFileResult>>(iter: I) -> Self {
        iter.into_iter()
            .fold(RunSummary::default(), |s, r| s.record(&r.outcome))
    }
}

/// Sanitizes every file on the rayon pool. Results keep the input order and
/// a failing file only affects its own entry.
pub fn process_files(files: Vec<PathBuf>) -> Vec<ProcessedFileResult> {
    files
        .into_par_iter()
        .map(|p| {
            let outcome = FileOutcome::from(sanitize_file(&p));
            if let FileOutcome::Failed(e) = &outcome {
                log::debug!("{} failed: {}", p.display(), e);
            }
            ProcessedFileResult { path: p, outcome }
        })
        .collect()
}
