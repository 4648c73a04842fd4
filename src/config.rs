//! Configuration for a rolodex session.
//!
//! The library itself holds everything in memory; configuration only
//! concerns the edges: where export files land, which format a bare
//! file name gets, and how many retries the interactive prompt allows.

use std::path::PathBuf;

use crate::error::{Result, ValidationError};
use crate::export::ExportFormat;

/// Session configuration.
///
/// Construct with struct-update syntax over [`Config::default()`]:
///
/// ```
/// use rolodex::{Config, ExportFormat};
///
/// let config = Config {
///     default_format: ExportFormat::Json,
///     ..Config::default()
/// };
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// Directory export files are written to and read from when the
    /// user gives a bare file name.
    pub data_dir: PathBuf,

    /// Format used when a file name carries no extension.
    pub default_format: ExportFormat,

    /// How many times the CLI re-prompts for a field that fails
    /// validation before abandoning the current step.
    pub prompt_attempts: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("./contacts"),
            default_format: ExportFormat::Text,
            prompt_attempts: 3,
        }
    }
}

impl Config {
    /// Checks the configuration for nonsensical values.
    ///
    /// # Errors
    ///
    /// [`ValidationError::InvalidField`] if `prompt_attempts` is zero
    /// (the prompt loop would never accept input).
    pub fn validate(&self) -> Result<()> {
        if self.prompt_attempts == 0 {
            return Err(
                ValidationError::invalid_field("prompt_attempts", "must be at least 1").into(),
            );
        }
        Ok(())
    }

    /// Resolves a user-supplied file name against `data_dir`, adding
    /// the default format's extension if the name has none.
    ///
    /// Absolute paths are used as-is (aside from the extension rule).
    pub fn resolve_export_path(&self, file_name: &str) -> PathBuf {
        let mut path = PathBuf::from(file_name);
        if !path.is_absolute() {
            path = self.data_dir.join(path);
        }
        if path.extension().is_none() {
            path.set_extension(self.default_format.to_string());
        }
        path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_valid() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn test_zero_attempts_rejected() {
        let config = Config {
            prompt_attempts: 0,
            ..Config::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_resolve_relative_name() {
        let config = Config::default();
        let path = config.resolve_export_path("work.csv");
        assert_eq!(path, PathBuf::from("./contacts/work.csv"));
    }

    #[test]
    fn test_resolve_adds_default_extension() {
        let config = Config {
            default_format: ExportFormat::Json,
            ..Config::default()
        };
        let path = config.resolve_export_path("work");
        assert_eq!(path, PathBuf::from("./contacts/work.json"));
    }

    #[test]
    fn test_resolve_absolute_path_kept() {
        let config = Config::default();
        let path = config.resolve_export_path("/tmp/out.csv");
        assert_eq!(path, PathBuf::from("/tmp/out.csv"));
    }
}
