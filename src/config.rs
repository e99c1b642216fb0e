//! Configuration for the command-line tool
//!
//! Read from `<config_dir>/uuidkit/config.json` unless a path is given.
//! Every key is optional:
//!
//! ```json
//! { "format": "urn", "variant": "rfc4122", "policy": "strict", "namespace": "dns" }
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{ParsePolicy, Uuid, Variant};

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid config file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Invalid namespace `{value}` in config: {source}")]
    Namespace {
        value: String,
        source: crate::ParseError,
    },
}

/// Text representation used for output
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// 8-4-4-4-12 lowercase hex
    #[default]
    Canonical,
    /// `urn:uuid:` + canonical
    Urn,
    /// `{` + canonical + `}`
    Braced,
    /// 32 hex digits, no separators
    Compact,
}

impl OutputFormat {
    pub fn render(self, uuid: &Uuid) -> String {
        match self {
            OutputFormat::Canonical => uuid.hyphenated().to_string(),
            OutputFormat::Urn => uuid.urn().to_string(),
            OutputFormat::Braced => uuid.braced().to_string(),
            OutputFormat::Compact => uuid.simple().to_string(),
        }
    }
}

/// Run-time settings; missing keys take their defaults
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub format: OutputFormat,
    pub variant: Variant,
    pub policy: ParsePolicy,
    /// Namespace for name-based UUIDs: a well-known name or UUID text
    pub namespace: Option<String>,
}

impl Config {
    /// Load from `path`; a missing file yields the defaults
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// The configured namespace, if any, resolved to a UUID
    pub fn namespace(&self) -> Result<Option<Uuid>, ConfigError> {
        self.namespace
            .as_deref()
            .map(|value| {
                crate::resolve_namespace(value).map_err(|source| ConfigError::Namespace {
                    value: value.to_string(),
                    source,
                })
            })
            .transpose()
    }
}

/// Default config file location
#[cfg(feature = "cli")]
pub fn default_config_path() -> PathBuf {
    let base = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    base.join("uuidkit").join("config.json")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::NAMESPACE_URL;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_gives_defaults() {
        let temp = TempDir::new().unwrap();
        let config = Config::load(&temp.path().join("config.json")).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.format, OutputFormat::Canonical);
        assert_eq!(config.variant, Variant::Rfc4122);
        assert_eq!(config.policy, ParsePolicy::Permissive);
    }

    #[test]
    fn test_partial_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.json");
        fs::write(&path, r#"{"format": "urn", "policy": "strict"}"#).unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.format, OutputFormat::Urn);
        assert_eq!(config.policy, ParsePolicy::Strict);
        assert_eq!(config.variant, Variant::Rfc4122);
        assert_eq!(config.namespace, None);
    }

    #[test]
    fn test_full_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.json");
        fs::write(
            &path,
            r#"{"format": "compact", "variant": "microsoft", "policy": "permissive", "namespace": "url"}"#,
        )
        .unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.format, OutputFormat::Compact);
        assert_eq!(config.variant, Variant::Microsoft);
        assert_eq!(config.namespace().unwrap(), Some(NAMESPACE_URL));
    }

    #[test]
    fn test_malformed_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.json");
        fs::write(&path, r#"{"format": "base64"}"#).unwrap();

        let err = Config::load(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
        assert!(err.to_string().starts_with("Invalid config file"));
    }

    #[test]
    fn test_namespace_name_is_trimmed() {
        let config = Config {
            namespace: Some(" DNS ".to_string()),
            ..Config::default()
        };
        assert_eq!(config.namespace().unwrap(), Some(crate::engine::NAMESPACE_DNS));
    }

    #[test]
    fn test_bad_namespace() {
        let config = Config {
            namespace: Some("nowhere".to_string()),
            ..Config::default()
        };
        assert!(matches!(
            config.namespace(),
            Err(ConfigError::Namespace { .. })
        ));
    }

    #[test]
    fn test_render() {
        let uuid = NAMESPACE_URL;
        assert_eq!(
            OutputFormat::Canonical.render(&uuid),
            "6ba7b811-9dad-11d1-80b4-00c04fd430c8"
        );
        assert_eq!(
            OutputFormat::Urn.render(&uuid),
            "urn:uuid:6ba7b811-9dad-11d1-80b4-00c04fd430c8"
        );
        assert_eq!(
            OutputFormat::Braced.render(&uuid),
            "{6ba7b811-9dad-11d1-80b4-00c04fd430c8}"
        );
        assert_eq!(
            OutputFormat::Compact.render(&uuid),
            "6ba7b8119dad11d180b400c04fd430c8"
        );
    }
}
