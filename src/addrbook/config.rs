use crate::book::DEFAULT_PAGE_SIZE;
use crate::error::{BookError, Result};
use directories::ProjectDirs;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_PROMPT: &str = "Input the command: ";

/// Overrides the platform config directory.
pub const CONFIG_DIR_ENV: &str = "ADDRBOOK_CONFIG_DIR";

/// Configuration for addrbook, stored in `<config dir>/config.json`
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct BookConfig {
    /// Default number of contacts shown by `show_participate`
    #[serde(default = "default_page_size")]
    pub page_size: usize,

    /// Text printed before each command is read
    #[serde(default = "default_prompt")]
    pub prompt: String,
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

fn default_prompt() -> String {
    DEFAULT_PROMPT.to_string()
}

impl Default for BookConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            prompt: default_prompt(),
        }
    }
}

impl BookConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(BookError::Io)?;
        let config: BookConfig =
            serde_json::from_str(&content).map_err(BookError::Serialization)?;
        Ok(config)
    }
}

/// Picks the config directory: explicit path, then `ADDRBOOK_CONFIG_DIR`,
/// then the platform default. `None` when no home directory can be found.
pub fn resolve_config_dir(explicit: Option<&Path>) -> Option<PathBuf> {
    if let Some(dir) = explicit {
        return Some(dir.to_path_buf());
    }
    if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV) {
        return Some(PathBuf::from(dir));
    }
    ProjectDirs::from("com", "addrbook", "addrbook").map(|dirs| dirs.config_dir().to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = BookConfig::default();
        assert_eq!(config.page_size, 3);
        assert_eq!(config.prompt, "Input the command: ");
    }

    #[test]
    fn test_load_missing_config() {
        let temp = TempDir::new().unwrap();
        let config = BookConfig::load(temp.path().join("nothing-here")).unwrap();
        assert_eq!(config, BookConfig::default());
    }

    #[test]
    fn test_load_full_file() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join(CONFIG_FILENAME),
            r#"{"page_size": 7, "prompt": "> "}"#,
        )
        .unwrap();

        let loaded = BookConfig::load(temp.path()).unwrap();
        assert_eq!(
            loaded,
            BookConfig {
                page_size: 7,
                prompt: "> ".to_string(),
            }
        );
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(CONFIG_FILENAME), r#"{"page_size": 5}"#).unwrap();

        let loaded = BookConfig::load(temp.path()).unwrap();
        assert_eq!(loaded.page_size, 5);
        assert_eq!(loaded.prompt, DEFAULT_PROMPT);
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(CONFIG_FILENAME), "page_size = 5").unwrap();

        assert!(matches!(
            BookConfig::load(temp.path()),
            Err(BookError::Serialization(_))
        ));
    }

    #[test]
    fn test_explicit_dir_wins() {
        let dir = PathBuf::from("/tmp/addrbook-explicit");
        assert_eq!(resolve_config_dir(Some(&dir)), Some(dir));
    }
}
