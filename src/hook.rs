//! Reading the commit message file handed to the `prepare-commit-msg` hook.

use std::fs;
use std::path::Path;

use crate::error::HookError;

/// Read `path`, dropping comment lines (those starting with `#`).
///
/// With `git commit --verbose` the diff is part of the message file, so the
/// remaining text is what gets sent to the model.
pub fn read_diff_file(path: &Path) -> Result<String, HookError> {
    let content = fs::read_to_string(path).map_err(|source| HookError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(strip_comments(&content))
}

/// Remove lines starting with `#`, keeping the rest newline-separated.
pub fn strip_comments(content: &str) -> String {
    content
        .lines()
        .filter(|line| !line.starts_with('#'))
        .collect::<Vec<_>>()
        .join("\n")
}
