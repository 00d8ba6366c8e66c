pub use std::path::absolute;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::configs::ConfigError;

/// Get the home directory path
///
/// Uses the `dirs` crate for cross-platform home directory detection.
pub fn home_dir() -> Option<PathBuf> {
    dirs::home_dir().and_then(|path| absolute(&path).ok())
}

/// Get the home directory path or return an error
///
/// This is a convenience wrapper around `home_dir()` that returns
/// a `ConfigError` instead of `None`.
pub fn require_home_dir() -> Result<PathBuf, ConfigError> {
    home_dir().ok_or_else(|| ConfigError::Path("Home directory not found".into()))
}

/// Strip trailing `/` and `\` from a directory path
///
/// Returns `None` for blank paths. A path made only of separators is kept
/// as-is so the filesystem root survives.
pub fn trim_directory_separators(path: &Path) -> Option<PathBuf> {
    let Some(text) = path.to_str() else {
        return Some(path.to_path_buf());
    };

    if text.trim().is_empty() {
        return None;
    }

    let trimmed = text.trim_end_matches(['/', '\\']);
    if trimmed.is_empty() {
        return Some(path.to_path_buf());
    }

    Some(PathBuf::from(trimmed))
}

/// Compare two paths ignoring case
pub fn eq_ignore_case(left: &Path, right: &Path) -> bool {
    left.to_string_lossy().to_lowercase() == right.to_string_lossy().to_lowercase()
}

/// Check whether `path` starts with `prefix`, ignoring case
///
/// This is a textual check, `/tmp-other` starts with `/tmp`.
pub fn starts_with_ignore_case(path: &Path, prefix: &Path) -> bool {
    path.to_string_lossy()
        .to_lowercase()
        .starts_with(&prefix.to_string_lossy().to_lowercase())
}

/// Append `.{extension}` to the full file name, keeping any existing extension
///
/// `/app/service.exe` becomes `/app/service.exe.logconf`.
pub fn append_extension(path: &Path, extension: &str) -> PathBuf {
    let mut raw = OsString::from(path.as_os_str());
    raw.push(".");
    raw.push(extension);
    PathBuf::from(raw)
}

/// Normalize a path string to an absolute ``PathBuf``
///
/// # Path Resolution Rules
///
/// - `~` or `~/path`: Expanded to home directory
/// - `/absolute/path`: Used as-is (absolute path)
/// - `relative/path`: **Resolved from HOME directory** (not current working directory)
///
/// Relative paths in settings files are resolved against the home directory
/// so the same file means the same thing wherever the command runs.
///
/// # Examples
///
/// ```ignore
/// normalize_path("~/logs")?;         // -> /home/user/logs
/// normalize_path("/etc/app")?;       // -> /etc/app (absolute, unchanged)
/// normalize_path("relative/path")?;  // -> /home/user/relative/path
/// ```
///
/// # Errors
///
/// Returns `ConfigError::Path` if:
/// - The path is empty after trimming
/// - Home directory cannot be found
/// - Path starts with `~` but is not `~` or `~/...` (e.g., `~user/path`)
/// - Path cannot be converted to an absolute path
pub fn normalize_path(path_str: &str) -> Result<PathBuf, ConfigError> {
    let path_str = path_str.trim();

    if path_str.is_empty() {
        return Err(ConfigError::Path("Empty path".into()));
    }

    let path = if path_str.starts_with('~') {
        let home = require_home_dir()?;

        if path_str.len() == 1 {
            home
        } else if let Some(subpath) = path_str.strip_prefix("~/") {
            if subpath.is_empty() {
                home
            } else {
                home.join(subpath)
            }
        } else {
            return Err(ConfigError::Path(format!(
                "Path '{path_str}' is not supported. Use absolute path or ~/path format.",
            )));
        }
    } else {
        let path = PathBuf::from(path_str);
        if path.is_absolute() {
            path
        } else {
            let home = require_home_dir()?;
            home.join(path)
        }
    };

    absolute(&path).map_err(|e| ConfigError::Path(e.to_string()))
}
