use std::env;
use std::fs::File;

use env_logger::{Builder, Target};
use log::LevelFilter;

use crate::{config::AppConfig, errors::CatalogError};

/// Installs the global logger when a log file is configured.
///
/// The TUI draws on the terminal, so there is no stderr fallback: without
/// `log_file` every record is dropped, whatever `RUST_LOG` says.
pub fn init(config: &AppConfig) -> Result<(), CatalogError> {
    match file_builder(config)? {
        Some(mut builder) => builder
            .try_init()
            .map_err(|e| CatalogError::Config(e.to_string())),
        None => {
            log::set_max_level(LevelFilter::Off);
            Ok(())
        }
    }
}

fn file_builder(config: &AppConfig) -> Result<Option<Builder>, CatalogError> {
    let Some(path) = &config.log_file else {
        return Ok(None);
    };

    let file = File::create(path)?;
    let mut builder = Builder::from_default_env();
    builder.target(Target::Pipe(Box::new(file)));
    if env::var_os("RUST_LOG").is_none() {
        builder.filter_level(LevelFilter::Info);
    }

    Ok(Some(builder))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_logger_without_file() {
        let config = AppConfig::default();
        assert!(file_builder(&config).unwrap().is_none());
    }

    #[test]
    fn test_file_target_when_configured() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dbcat.log");
        let config = AppConfig {
            log_file: Some(path.clone()),
            ..AppConfig::default()
        };

        assert!(file_builder(&config).unwrap().is_some());
        assert!(path.exists());
    }

    #[test]
    fn test_unwritable_log_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig {
            log_file: Some(dir.path().join("missing").join("dbcat.log")),
            ..AppConfig::default()
        };

        assert!(matches!(
            file_builder(&config),
            Err(CatalogError::Io(_))
        ));
    }
}
