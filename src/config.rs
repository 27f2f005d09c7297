use std::env;
use std::path::PathBuf;

use crate::{errors::CatalogError, router::OVERVIEW_PATH};

pub const START_PATH_VAR: &str = "DBCAT_START_PATH";
pub const EXPORT_DIR_VAR: &str = "DBCAT_EXPORT_DIR";
pub const LOG_FILE_VAR: &str = "DBCAT_LOG_FILE";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Path opened at startup.
    pub start_path: String,
    /// Directory the table list export is written to.
    pub export_dir: PathBuf,
    /// Log destination; logging is off when unset.
    pub log_file: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            start_path: OVERVIEW_PATH.to_string(),
            export_dir: PathBuf::from("."),
            log_file: None,
        }
    }
}

impl AppConfig {
    /// Reads the process environment, after loading `.env` if present.
    pub fn from_env() -> Result<Self, CatalogError> {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, CatalogError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let config = Self {
            start_path: lookup(START_PATH_VAR).unwrap_or(defaults.start_path),
            export_dir: lookup(EXPORT_DIR_VAR)
                .map(PathBuf::from)
                .unwrap_or(defaults.export_dir),
            log_file: lookup(LOG_FILE_VAR)
                .filter(|value| !value.is_empty())
                .map(PathBuf::from),
        };
        config.validate()?;
        Ok(config)
    }

    /// A positional argument replaces the configured start path.
    pub fn with_start_path(mut self, path: Option<String>) -> Result<Self, CatalogError> {
        if let Some(path) = path {
            self.start_path = path;
        }
        self.validate()?;
        Ok(self)
    }

    pub fn export_file(&self, name: &str) -> PathBuf {
        self.export_dir.join(name)
    }

    fn validate(&self) -> Result<(), CatalogError> {
        if self.start_path.trim().is_empty() {
            return Err(CatalogError::Config("start path must not be empty".to_string()));
        }
        if self.export_dir.exists() && !self.export_dir.is_dir() {
            return Err(CatalogError::Config(format!(
                "export path {} is not a directory",
                self.export_dir.display()
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = AppConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.start_path, "/");
    }

    #[test]
    fn test_reads_variables() {
        let dir = tempfile::tempdir().unwrap();
        let dir_str = dir.path().to_str().unwrap();
        let config = AppConfig::from_lookup(lookup(&[
            (START_PATH_VAR, "/tables"),
            (EXPORT_DIR_VAR, dir_str),
            (LOG_FILE_VAR, "/tmp/dbcat.log"),
        ]))
        .unwrap();

        assert_eq!(config.start_path, "/tables");
        assert_eq!(config.export_file("tables.csv"), dir.path().join("tables.csv"));
        assert_eq!(config.log_file, Some(PathBuf::from("/tmp/dbcat.log")));
    }

    #[test]
    fn test_rejects_file_as_export_dir() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let err = AppConfig::from_lookup(lookup(&[(
            EXPORT_DIR_VAR,
            file.path().to_str().unwrap(),
        )]))
        .unwrap_err();

        assert!(matches!(err, CatalogError::Config(_)));
    }

    #[test]
    fn test_start_path_override() {
        let config = AppConfig::default()
            .with_start_path(Some("/database/UserDB".to_string()))
            .unwrap();
        assert_eq!(config.start_path, "/database/UserDB");

        assert!(AppConfig::default()
            .with_start_path(Some("  ".to_string()))
            .is_err());
    }
}
