//! Resolution of the configuration file location.

use std::path::PathBuf;

/// Environment variable the CLI reads to override the file location.
///
/// Core code never reads it directly; the caller passes the value into
/// [`resolve`] so the store stays testable without mutating the process
/// environment.
pub const CONFIG_PATH_ENV: &str = "ACLI_CONFIG_PATH";

/// Filename used under the home directory when no override is given.
pub const DEFAULT_FILE_NAME: &str = ".acli_config.json";

/// Resolve the configuration file path.
///
/// A present, non-empty override is returned verbatim. Otherwise the file
/// lives directly under the user's home directory. Resolution is pure and
/// never fails: when no home directory can be determined the path falls
/// back to the current directory.
pub fn resolve(override_path: Option<&str>) -> PathBuf {
    match override_path {
        Some(path) if !path.is_empty() => PathBuf::from(path),
        _ => dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(DEFAULT_FILE_NAME),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_override_returned_verbatim() {
        let path = resolve(Some("/tmp/custom.json"));
        assert_eq!(path, PathBuf::from("/tmp/custom.json"));
    }

    #[test]
    fn test_empty_override_ignored() {
        let path = resolve(Some(""));
        assert!(path.ends_with(DEFAULT_FILE_NAME));
    }

    #[test]
    fn test_default_is_dotfile_in_home() {
        let path = resolve(None);
        assert!(path.ends_with(DEFAULT_FILE_NAME));
    }
}
