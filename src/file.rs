// src/file.rs

use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::config::consts::{DEFAULT_EXPORT_FILE, DEFAULT_OUT_DIR};
use crate::ranking::RankRow;
use crate::report;

/// Write the ranking export to `path`, creating parent directories as
/// needed. Returns the path actually written.
pub fn write_export(
    path: &Path,
    rows: &[RankRow],
) -> Result<PathBuf, Box<dyn std::error::Error>> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }

    let contents = report::to_export_string(rows);
    fs::write(path, contents)?;
    Ok(path.to_path_buf())
}

/// Default export target when the user gives no -o: `out/ranking.txt`.
pub fn default_out_path() -> PathBuf {
    PathBuf::from(DEFAULT_OUT_DIR).join(DEFAULT_EXPORT_FILE)
}

/// Resolve a user-supplied -o value. Empty → default path. A directory
/// (existing, or hinted by a trailing separator) gets the default filename
/// appended; anything else is taken as the file to write.
pub fn resolve_out_path(user_o: &str) -> Result<PathBuf, Box<dyn std::error::Error>> {
    if user_o.is_empty() {
        return Ok(default_out_path());
    }
    let p = PathBuf::from(normalize_separators(user_o));
    if looks_like_dir_hint(&p) || p.is_dir() {
        ensure_directory(&p)?;
        Ok(p.join(DEFAULT_EXPORT_FILE))
    } else {
        Ok(p)
    }
}

pub fn normalize_separators(p: &str) -> String {
    let sep = std::path::MAIN_SEPARATOR;
    p.chars().map(|c| if c == '/' || c == '\\' { sep } else { c }).collect()
}

pub fn ensure_directory(dir: &Path) -> Result<(), Box<dyn std::error::Error>> {
    if dir.exists() && !dir.is_dir() {
        return Err(format!("Path exists but is not a directory: {}", dir.display()).into());
    }
    if !dir.exists() { fs::create_dir_all(dir)?; }
    Ok(())
}

pub fn looks_like_dir_hint(p: &Path) -> bool {
    let s = p.to_string_lossy();
    s.ends_with('/') || s.ends_with('\\')
}
