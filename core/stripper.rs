use crate::CoreError;
use once_cell::sync::Lazy;
use regex::Regex;
use std::fs;
use std::path::Path;

/// A fixed piece of bundler output that is deleted wherever it appears.
struct ReplacementRule {
    name: &'static str,
    pattern: Regex,
}

impl ReplacementRule {
    fn new(name: &'static str, pattern: &str) -> Self {
        Self {
            name,
            pattern: Regex::new(pattern).unwrap(),
        }
    }
}

/// Applied in this order. Both rules also eat the whitespace that follows the match.
static RULES: Lazy<Vec<ReplacementRule>> = Lazy::new(|| {
    vec![
        // export {};
        ReplacementRule::new("empty export", r"export\s*\{\s*\}\s*;?\s*"),
        // Object.defineProperty(exports, "__esModule", { value: true });
        ReplacementRule::new(
            "__esModule flag",
            r#"Object\.defineProperty\s*\(\s*exports\s*,\s*["']__esModule["']\s*,\s*\{\s*value\s*:\s*(!0|true)\s*\}\s*\)\s*;?\s*"#,
        ),
    ]
});

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SanitizeOutcome {
    pub content: String,
    pub match_count: usize,
    pub chars_removed: usize,
}

impl SanitizeOutcome {
    pub fn modified(&self) -> bool {
        self.match_count > 0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileReport {
    pub modified: bool,
    pub match_count: usize,
    pub chars_removed: usize,
}

pub fn sanitize_text(input: &str) -> SanitizeOutcome {
    let mut content = input.to_string();
    let mut match_count = 0;
    for rule in RULES.iter() {
        let n = rule.pattern.find_iter(&content).count();
        if n == 0 {
            continue;
        }
        log::debug!("rule {:?} matched {} times", rule.name, n);
        match_count += n;
        content = rule.pattern.replace_all(&content, "").into_owned();
    }
    let chars_removed = input.chars().count() - content.chars().count();
    SanitizeOutcome {
        content,
        match_count,
        chars_removed,
    }
}

/// Rewrites `path` only when a rule matched; untouched files are never saved.
pub fn sanitize_file(path: &Path) -> Result<FileReport, CoreError> {
    let original = fs::read_to_string(path).map_err(|source| CoreError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let out = sanitize_text(&original);
    if out.modified() {
        fs::write(path, &out.content).map_err(|source| CoreError::Io {
            path: path.to_path_buf(),
            source,
        })?;
    }
    Ok(FileReport {
        modified: out.modified(),
        match_count: out.match_count,
        chars_removed: out.chars_removed,
    })
}
