use crate::core::{Result, TranscriptError};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub user_agent: String,
    /// Per-request timeout in seconds.
    pub timeout: u64,
    pub accept_language: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            user_agent: format!("yt-transcript/{}", env!("CARGO_PKG_VERSION")),
            timeout: 30,
            accept_language: "en-US".to_string(),
        }
    }
}

impl Config {
    /// Reads a TOML config file, or returns the defaults when no path is given.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };

        let contents = std::fs::read_to_string(path).map_err(|e| TranscriptError::Config {
            path: path.to_path_buf(),
            detail: e.to_string(),
        })?;

        let config: Config = toml::from_str(&contents).map_err(|e| TranscriptError::Config {
            path: path.to_path_buf(),
            detail: e.to_string(),
        })?;

        tracing::debug!("Loaded config from {}: {:?}", path.display(), config);
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_without_path_uses_defaults() {
        let config = Config::load(None).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.timeout, 30);
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "timeout = 5").unwrap();
        writeln!(file, "accept_language = \"hu-HU\"").unwrap();

        let config = Config::load(Some(file.path())).unwrap();
        assert_eq!(config.timeout, 5);
        assert_eq!(config.accept_language, "hu-HU");
        assert_eq!(config.user_agent, Config::default().user_agent);
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "timeout = \"soon\"").unwrap();

        let err = Config::load(Some(file.path())).unwrap_err();
        assert!(matches!(err, TranscriptError::Config { .. }));
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = Config::load(Some(&dir.path().join("missing.toml"))).unwrap_err();
        assert!(matches!(err, TranscriptError::Config { .. }));
    }
}
