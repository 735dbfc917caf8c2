use crate::CoreError;
use clap::Parser;
use regex::Regex;
use std::collections::HashSet;
use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

#[derive(Debug, Parser, Clone)]
#[clap(
    name = "modstrip",
    version = "0.1.0",
    about = "Strip leftover ES module boilerplate from compiled .js files",
    long_about = "Removes empty `export {};` statements and `__esModule` interop flags from .js files in place.\nDirectories are searched recursively; inputs containing `*` match files in a single directory."
)]
pub struct CliArgs {
    #[clap(
        value_name = "DIR_OR_PATTERN",
        allow_hyphen_values = true,
        help = "Directories to search recursively, or patterns such as ./build/*.js"
    )]
    pub inputs: Vec<String>,
}

const TARGET_SUFFIX: &str = ".js";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    Directory,
    Pattern,
}

pub fn classify_input(token: &str) -> InputKind {
    if token.contains('*') {
        InputKind::Pattern
    } else {
        InputKind::Directory
    }
}

/// Files found for one branch of the search, plus anything that went wrong on the way.
#[derive(Debug, Default)]
pub struct Collection {
    pub files: Vec<PathBuf>,
    pub problems: Vec<CoreError>,
}

#[derive(Debug)]
pub struct InputReport {
    pub token: String,
    pub kind: InputKind,
    pub files: Vec<PathBuf>,
    pub problems: Vec<CoreError>,
}

/// Insertion-ordered set of files keyed by physical location.
#[derive(Debug, Default)]
pub struct FileSet {
    paths: Vec<PathBuf>,
    seen: HashSet<PathBuf>,
}

impl FileSet {
    pub fn insert(&mut self, path: PathBuf) -> bool {
        let key = fs::canonicalize(&path).unwrap_or_else(|_| path.clone());
        if self.seen.insert(key) {
            self.paths.push(path);
            true
        } else {
            false
        }
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PathBuf> {
        self.paths.iter()
    }

    pub fn into_vec(self) -> Vec<PathBuf> {
        self.paths
    }
}

#[derive(Debug, Default)]
pub struct Gathered {
    pub files: FileSet,
    pub reports: Vec<InputReport>,
}

fn has_target_suffix(name: &OsStr) -> bool {
    name.to_string_lossy().ends_with(TARGET_SUFFIX)
}

pub fn collect_recursive(dir: &Path) -> Collection {
    let mut c = Collection::default();
    for i in WalkDir::new(dir).sort_by_file_name() {
        match i {
            Ok(e) => {
                if e.file_type().is_file() && has_target_suffix(e.file_name()) {
                    c.files.push(e.into_path());
                }
            }
            Err(e) => {
                log::debug!("Skipping unreadable entry under {}: {}", dir.display(), e);
                c.problems.push(CoreError::Walk(e));
            }
        }
    }
    log::debug!("{}: {} target files", dir.display(), c.files.len());
    c
}

/// Splits a pattern into the directory to list and the file-name part,
/// the way `dirname`/`basename` would. No directory part means `.`.
pub fn split_pattern(pattern: &str) -> (PathBuf, String) {
    let p = Path::new(pattern);
    let dir = match p.parent() {
        Some(d) if !d.as_os_str().is_empty() => d.to_path_buf(),
        _ => PathBuf::from("."),
    };
    let name = p
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    (dir, name)
}

/// Turns a file-name pattern into an anchored matcher: each `*` becomes `.*`.
///
/// Nothing else is escaped, so the remaining characters are regex syntax:
/// `.` matches any character and `+`, `?`, `(` keep their regex meaning.
/// Existing invocations rely on this, so it is left as-is.
pub fn compile_name_pattern(name: &str) -> Result<Regex, regex::Error> {
    Regex::new(&format!("^{}$", name.replace('*', ".*")))
}

pub fn collect_by_pattern(pattern: &str) -> Collection {
    let mut c = Collection::default();
    let (dir, name) = split_pattern(pattern);
    let m = match compile_name_pattern(&name) {
        Ok(r) => r,
        Err(source) => {
            c.problems.push(CoreError::InvalidPattern {
                pattern: pattern.to_string(),
                source,
            });
            return c;
        }
    };
    match fs::metadata(&dir) {
        Ok(md) if md.is_dir() => {}
        Ok(_) => {
            c.problems.push(CoreError::NotADirectory(dir));
            return c;
        }
        Err(source) => {
            c.problems.push(CoreError::Io { path: dir, source });
            return c;
        }
    }
    let w = WalkDir::new(&dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name();
    for i in w {
        match i {
            Ok(e) => {
                if e.file_type().is_file() && m.is_match(&e.file_name().to_string_lossy()) {
                    c.files.push(e.into_path());
                }
            }
            Err(e) => {
                let unreadable_dir = e.depth() == 0;
                c.problems.push(CoreError::Walk(e));
                if unreadable_dir {
                    c.files.clear();
                    break;
                }
            }
        }
    }
    log::debug!(
        "pattern {:?} in {}: {} matches",
        name,
        dir.display(),
        c.files.len()
    );
    c
}

pub fn collect_input(token: &str) -> InputReport {
    let kind = classify_input(token);
    let c = match kind {
        InputKind::Pattern => collect_by_pattern(token),
        InputKind::Directory => {
            let p = Path::new(token);
            match fs::metadata(p) {
                Ok(md) if md.is_dir() => collect_recursive(p),
                Ok(_) => Collection {
                    files: Vec::new(),
                    problems: vec![CoreError::NotADirectory(p.to_path_buf())],
                },
                Err(source) => Collection {
                    files: Vec::new(),
                    problems: vec![CoreError::Io {
                        path: p.to_path_buf(),
                        source,
                    }],
                },
            }
        }
    };
    InputReport {
        token: token.to_string(),
        kind,
        files: c.files,
        problems: c.problems,
    }
}

/// Runs every input in order and unions the results.
pub fn collect_inputs<S: AsRef<str>>(inputs: &[S]) -> Gathered {
    let mut g = Gathered::default();
    for t in inputs {
        let r = collect_input(t.as_ref());
        for f in &r.files {
            g.files.insert(f.clone());
        }
        g.reports.push(r);
    }
    g
}
