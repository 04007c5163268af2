//! Filesystem path helpers

use std::path::PathBuf;

/// Expand a user-supplied path into an absolute path.
///
/// `~` and `~/...` resolve against the home directory; anything relative
/// (`.`, `..`, `data`, `./jobboard.json`) is joined onto the current working
/// directory. Absolute paths are returned as-is. Components are not
/// canonicalized, so the path need not exist yet.
pub fn expand_path(path: &str) -> PathBuf {
    let path = path.trim();

    if path.is_empty() {
        return current_dir();
    }

    let expanded = match path.strip_prefix('~') {
        Some("") => dirs::home_dir().unwrap_or_else(|| PathBuf::from(path)),
        Some(rest) if rest.starts_with('/') || rest.starts_with('\\') => dirs::home_dir()
            .map(|home| home.join(&rest[1..]))
            .unwrap_or_else(|| PathBuf::from(path)),
        _ => PathBuf::from(path),
    };

    if expanded.is_relative() {
        current_dir().join(expanded)
    } else {
        expanded
    }
}

fn current_dir() -> PathBuf {
    std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
}
