//! Configuration file loading

use super::schema::ConfigSchema;
use crate::error::{Error, Result};
use std::path::{Path, PathBuf};

/// Project-local file names, checked in order before the user config dir
const LOCAL_CANDIDATES: [&str; 2] = [".toolglue.toml", "toolglue.toml"];

/// Configuration wrapper
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub schema: ConfigSchema,
    pub path: Option<PathBuf>,
}

impl Config {
    /// Load configuration from a file path or use defaults.
    ///
    /// An explicit path must exist. Without one, the first existing
    /// candidate is used, and no candidate at all means defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config_path = path.map(Path::to_path_buf).or_else(find_config_file);

        let schema = match config_path {
            Some(ref p) => load_config_file(p)?,
            None => ConfigSchema::default(),
        };

        Ok(Self {
            schema,
            path: config_path,
        })
    }

    /// Parse configuration from TOML text
    pub fn from_toml(content: &str) -> Result<Self> {
        let schema = toml::from_str(content)
            .map_err(|e| Error::config(format!("Failed to parse config: {e}")))?;

        Ok(Self { schema, path: None })
    }
}

/// Find configuration file in standard locations
fn find_config_file() -> Option<PathBuf> {
    let user_config = dirs::config_dir().map(|dir| dir.join("toolglue").join("config.toml"));

    LOCAL_CANDIDATES
        .into_iter()
        .map(PathBuf::from)
        .chain(user_config)
        .find(|candidate| candidate.exists())
}

/// Load and parse a TOML configuration file
fn load_config_file(path: &Path) -> Result<ConfigSchema> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        Error::config(format!("Failed to read config file {}: {e}", path.display()))
    })?;

    toml::from_str(&content).map_err(|e| {
        Error::config(format!("Failed to parse config file {}: {e}", path.display()))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::time::Duration;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert!(config.path.is_none());
        assert!(config.schema.format.enabled);
        assert_eq!(config.schema.format.edition, "2021");
        assert_eq!(config.schema.pipe.timeout(), None);
    }

    #[test]
    fn test_config_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[pipe]\ntimeout_ms = 250\n\n[format]\nenabled = false\n\n[log]\nlevel = \"debug\"\njson = true"
        )
        .unwrap();

        let config = Config::load(Some(file.path())).unwrap();
        assert_eq!(config.path.as_deref(), Some(file.path()));
        assert_eq!(config.schema.pipe.timeout(), Some(Duration::from_millis(250)));
        assert!(!config.schema.format.enabled);
        assert_eq!(config.schema.format.program, "rustfmt");
        assert_eq!(config.schema.log.level, "debug");
        assert!(config.schema.log.json);
    }

    #[test]
    fn test_config_partial_uses_defaults() {
        let config = Config::from_toml("[format]\nedition = \"2024\"").unwrap();
        assert_eq!(config.schema.format.edition, "2024");
        assert!(config.schema.format.enabled);
        assert_eq!(config.schema.log.level, "warn");
    }

    #[test]
    fn test_config_explicit_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = Config::load(Some(&dir.path().join("absent.toml"))).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_config_invalid_toml() {
        let err = Config::from_toml("[pipe\ntimeout_ms = ").unwrap_err();
        assert!(err.to_string().contains("Failed to parse config"));
    }
}
