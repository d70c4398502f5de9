//! Host configuration.
//!
//! Configuration is a YAML document; every field is optional.
//!
//! ```yaml
//! store: /var/lib/tributes/fcrm-styles.json
//! strict_colors: true
//! host:
//!   active_plugins:
//!     - fcrm-tributes/fcrm-tributes.php
//! stylesheet:
//!   handle: weave-firehawk-crm-tributes-styles
//!   href: css/weave-fcrm-tributes.css
//!   version: "1.0"
//!   media: all
//! ```

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::host::{ActivePlugins, TRIBUTES_PLUGIN};
use crate::inject::Stylesheet;

/// File looked up in the working directory when no config path is given.
pub const DEFAULT_CONFIG_FILE: &str = "fcrm-styles.yaml";

/// Store file used when the configuration names none.
pub const DEFAULT_STORE_FILE: &str = "fcrm-styles.json";

/// Error type for configuration loading.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config \"{}\": {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid config \"{}\": {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Path of the JSON settings store.
    pub store: PathBuf,
    /// Which plugins the host reports as active. Defaults to just the tributes plugin.
    pub host: ActivePlugins,
    /// The tributes stylesheet the custom properties are attached after.
    pub stylesheet: Stylesheet,
    /// Reject submitted values that are not colours.
    pub strict_colors: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            store: PathBuf::from(DEFAULT_STORE_FILE),
            host: ActivePlugins::new([TRIBUTES_PLUGIN]),
            stylesheet: default_stylesheet(),
            strict_colors: false,
        }
    }
}

/// The stylesheet shipped alongside the tributes overrides.
pub fn default_stylesheet() -> Stylesheet {
    Stylesheet::new(
        "weave-firehawk-crm-tributes-styles",
        "css/weave-fcrm-tributes.css",
    )
    .with_version("1.0")
}

impl Config {
    /// Parses a configuration document.
    pub fn from_yaml(source: &str, origin: &Path) -> Result<Self, ConfigError> {
        if source.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(source).map_err(|source| ConfigError::Parse {
            path: origin.to_path_buf(),
            source,
        })
    }

    /// Loads the configuration at `path`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let source = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_yaml(&source, path)?;
        log::debug!("loaded config from {}", path.display());
        Ok(config)
    }

    /// Loads `explicit` if given, otherwise [`DEFAULT_CONFIG_FILE`] from `dir`
    /// if it exists, otherwise the defaults.
    pub fn discover(explicit: Option<&Path>, dir: &Path) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            return Self::load(path);
        }
        let candidate = dir.join(DEFAULT_CONFIG_FILE);
        if candidate.is_file() {
            Self::load(candidate)
        } else {
            log::debug!("no {} found, using defaults", DEFAULT_CONFIG_FILE);
            Ok(Self::default())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::HostPresence;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.store, PathBuf::from("fcrm-styles.json"));
        assert_eq!(config.stylesheet.handle, "weave-firehawk-crm-tributes-styles");
        assert_eq!(config.stylesheet.url(), "css/weave-fcrm-tributes.css?ver=1.0");
        assert!(config.host.is_active());
        assert!(!config.strict_colors);
    }

    #[test]
    fn test_partial_document() {
        let yaml = "strict_colors: true\nhost:\n  active_plugins: [fcrm-tributes/fcrm-tributes.php]\n";
        let config = Config::from_yaml(yaml, Path::new("test.yaml")).unwrap();
        assert!(config.strict_colors);
        assert!(config.host.is_active());
        assert_eq!(config.store, PathBuf::from(DEFAULT_STORE_FILE));
    }

    #[test]
    fn test_empty_plugin_list_makes_host_inactive() {
        let config = Config::from_yaml("host:\n  active_plugins: []\n", Path::new("t.yaml")).unwrap();
        assert!(!config.host.is_active());
    }

    #[test]
    fn test_stylesheet_media_defaults_to_all() {
        let yaml = "stylesheet:\n  handle: custom\n  href: custom.css\n";
        let config = Config::from_yaml(yaml, Path::new("test.yaml")).unwrap();
        assert_eq!(config.stylesheet.media, "all");
        assert_eq!(config.stylesheet.version, None);
    }

    #[test]
    fn test_unknown_field_is_an_error() {
        let err = Config::from_yaml("colour: red\n", Path::new("test.yaml")).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
        assert!(err.to_string().contains("test.yaml"));
    }

    #[test]
    fn test_empty_document_is_default() {
        let config = Config::from_yaml("\n", Path::new("test.yaml")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_discover_without_file_uses_defaults() {
        let dir = TempDir::new().unwrap();
        let config = Config::discover(None, dir.path()).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_discover_finds_default_file() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(DEFAULT_CONFIG_FILE), "store: other.json\n").unwrap();
        let config = Config::discover(None, dir.path()).unwrap();
        assert_eq!(config.store, PathBuf::from("other.json"));
    }

    #[test]
    fn test_discover_explicit_missing_file_errors() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("nope.yaml");
        let err = Config::discover(Some(&missing), dir.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }
}
