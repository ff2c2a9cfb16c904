//! Path utilities for locating data and configuration files.
//!
//! The data directory holds the persisted selection and the log file. It is
//! resolved in this order:
//!
//! 1. `TOPTEN_DATA_DIR` environment variable
//! 2. `$HOME/.local/share/topten`
//! 3. `./.topten` when no home directory is known

use std::path::PathBuf;

/// Environment variable overriding the data directory.
pub const DATA_DIR_ENV: &str = "TOPTEN_DATA_DIR";

/// Returns the default data directory for selection and log files.
#[must_use]
pub fn get_data_dir() -> PathBuf {
    if let Some(dir) = std::env::var_os(DATA_DIR_ENV).filter(|v| !v.is_empty()) {
        return PathBuf::from(dir);
    }

    home_dir().map_or_else(
        || PathBuf::from(".topten"),
        |home| home.join(".local").join("share").join("topten"),
    )
}

/// Expands a leading `~` to the user's home directory.
///
/// Paths without a leading `~`, or any path when `HOME` is unset, are returned
/// unchanged.
///
/// # Examples
///
/// ```
/// use topten::infrastructure::expand_tilde;
///
/// assert_eq!(expand_tilde("/absolute/path"), "/absolute/path");
/// assert_eq!(expand_tilde("relative/~/path"), "relative/~/path");
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> String {
    let Some(home) = home_dir() else {
        return path.to_string();
    };
    let home = home.to_string_lossy();

    if let Some(rest) = path.strip_prefix("~/") {
        format!("{home}/{rest}")
    } else if path == "~" {
        home.into_owned()
    } else {
        path.to_string()
    }
}

/// Resolves a configured file path: tilde-expanded, and relative paths are
/// taken relative to `base`.
#[must_use]
pub fn resolve_path(path: &str, base: &std::path::Path) -> PathBuf {
    let expanded = PathBuf::from(expand_tilde(path));
    if expanded.is_absolute() {
        expanded
    } else {
        base.join(expanded)
    }
}

fn home_dir() -> Option<PathBuf> {
    std::env::var_os("HOME")
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn absolute_paths_ignore_base() {
        assert_eq!(resolve_path("/etc/catalog.json", Path::new("/data")), PathBuf::from("/etc/catalog.json"));
    }

    #[test]
    fn relative_paths_join_base() {
        assert_eq!(resolve_path("catalog.json", Path::new("/data")), PathBuf::from("/data/catalog.json"));
    }

    #[test]
    fn tilde_expands_to_home_when_known() {
        if let Some(home) = home_dir() {
            assert_eq!(PathBuf::from(expand_tilde("~/x")), home.join("x"));
        }
    }
}
