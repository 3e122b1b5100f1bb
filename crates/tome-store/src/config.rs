use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Errors from loading or validating a [`StoreConfig`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Configuration for the directory-backed [`FsStore`](crate::FsStore).
///
/// ```toml
/// root = "/var/lib/tome/books"
/// extension = "json"
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StoreConfig {
    /// Directory holding one file per identifier.
    pub root: PathBuf,
    /// File extension appended to each identifier. Empty for bare names.
    pub extension: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            extension: "json".into(),
        }
    }
}

impl StoreConfig {
    /// Config rooted at `root` with the default extension.
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            ..Self::default()
        }
    }

    /// Parse and validate a config from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    /// Check that the config describes a usable layout.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.root.as_os_str().is_empty() {
            return Err(ConfigError::Invalid("root cannot be empty".into()));
        }
        if self.extension.starts_with('.') {
            return Err(ConfigError::Invalid(format!(
                "extension {:?} must not start with '.'",
                self.extension
            )));
        }
        if self.extension.contains(['/', '\\', '\0']) {
            return Err(ConfigError::Invalid(format!(
                "extension {:?} must not contain path separators",
                self.extension
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let c = StoreConfig::default();
        assert_eq!(c.root, PathBuf::from("."));
        assert_eq!(c.extension, "json");
        assert!(c.validate().is_ok());
    }

    #[test]
    fn parses_full_toml() {
        let c = StoreConfig::from_toml_str("root = \"/srv/books\"\nextension = \"book\"\n").unwrap();
        assert_eq!(c.root, PathBuf::from("/srv/books"));
        assert_eq!(c.extension, "book");
    }

    #[test]
    fn missing_keys_take_defaults() {
        let c = StoreConfig::from_toml_str("root = \"data\"").unwrap();
        assert_eq!(c.root, PathBuf::from("data"));
        assert_eq!(c.extension, "json");
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let err = StoreConfig::from_toml_str("rot = \"typo\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn bad_extensions_are_rejected() {
        for ext in [".json", "a/b", "a\\b"] {
            let c = StoreConfig {
                extension: ext.into(),
                ..StoreConfig::default()
            };
            assert!(matches!(c.validate(), Err(ConfigError::Invalid(_))), "{ext}");
        }
    }

    #[test]
    fn empty_root_is_rejected() {
        let err = StoreConfig::from_toml_str("root = \"\"").unwrap_err();
        assert!(err.to_string().contains("root cannot be empty"));
    }

    #[test]
    fn load_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.toml");
        std::fs::write(&path, "extension = \"\"\n").unwrap();
        let c = StoreConfig::load(&path).unwrap();
        assert_eq!(c.extension, "");
    }

    #[test]
    fn load_reports_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = StoreConfig::load(dir.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }
}
