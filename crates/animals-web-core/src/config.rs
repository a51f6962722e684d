//! Generator configuration (`animals-web.config.json`).
//!
//! Every field is optional in the file and falls back to the conventional
//! file names. Relative paths in a config file are resolved against the
//! directory that contains it.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{AnimalsWebError, Result};
use crate::style::RenderStyle;

pub const CONFIG_FILE: &str = "animals-web.config.json";
pub const DATA_FILE: &str = "animals_data.json";
pub const TEMPLATE_FILE: &str = "animals_template.html";
pub const OUTPUT_FILE: &str = "animals.html";

/// Where to read from, where to write to, and how to render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// JSON list of animal records.
    pub data: PathBuf,
    /// Page template containing the placeholder token.
    pub template: PathBuf,
    /// Output document, overwritten on every run.
    pub output: PathBuf,
    pub style: RenderStyle,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            data: PathBuf::from(DATA_FILE),
            template: PathBuf::from(TEMPLATE_FILE),
            output: PathBuf::from(OUTPUT_FILE),
            style: RenderStyle::default(),
        }
    }
}

impl GeneratorConfig {
    /// Load a config file. The file must exist.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => AnimalsWebError::ConfigNotFound {
                path: path.to_path_buf(),
            },
            _ => AnimalsWebError::ConfigReadFailed {
                path: path.to_path_buf(),
                source: e,
            },
        })?;
        let config: Self =
            serde_json::from_str(&contents).map_err(|e| AnimalsWebError::ConfigParse {
                path: path.to_path_buf(),
                source: e,
            })?;
        Ok(config.relative_to(path.parent().unwrap_or(Path::new(""))))
    }

    /// Load a config file, or fall back to defaults when it does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        match Self::load(path) {
            Err(AnimalsWebError::ConfigNotFound { .. }) => {
                tracing::debug!(path = %path.display(), "no config file, using defaults");
                Ok(Self::default())
            }
            other => other,
        }
    }

    /// Write the config as pretty-printed JSON.
    pub fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self).map_err(std::io::Error::from)?;
        std::fs::write(path, json + "\n")?;
        Ok(())
    }

    fn relative_to(self, base: &Path) -> Self {
        Self {
            data: base.join(self.data),
            template: base.join(self.template),
            output: base.join(self.output),
            style: self.style,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_use_conventional_names() {
        let config = GeneratorConfig::default();
        assert_eq!(config.data, PathBuf::from("animals_data.json"));
        assert_eq!(config.template, PathBuf::from("animals_template.html"));
        assert_eq!(config.output, PathBuf::from("animals.html"));
        assert_eq!(config.style, RenderStyle::CardListItem);
    }

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = GeneratorConfig::load_or_default(&dir.path().join(CONFIG_FILE)).unwrap();
        assert_eq!(config, GeneratorConfig::default());
    }

    #[test]
    fn test_explicit_load_of_missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let err = GeneratorConfig::load(&dir.path().join(CONFIG_FILE)).unwrap_err();
        assert!(matches!(err, AnimalsWebError::ConfigNotFound { .. }));
    }

    #[test]
    fn test_partial_file_resolves_relative_to_config_dir() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        std::fs::write(&path, r#"{"output": "site/index.html", "style": "plain-text"}"#).unwrap();

        let config = GeneratorConfig::load(&path).unwrap();
        assert_eq!(config.output, dir.path().join("site/index.html"));
        assert_eq!(config.data, dir.path().join(DATA_FILE));
        assert_eq!(config.style, RenderStyle::PlainText);
    }

    #[test]
    fn test_unreadable_config_is_not_treated_as_missing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        std::fs::create_dir(&path).unwrap();

        let err = GeneratorConfig::load_or_default(&path).unwrap_err();
        assert!(matches!(err, AnimalsWebError::ConfigReadFailed { .. }));
    }

    #[test]
    fn test_save_into_missing_directory_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join(CONFIG_FILE);

        let err = GeneratorConfig::default().save(&path).unwrap_err();
        assert!(matches!(err, AnimalsWebError::Io(_)));
    }

    #[test]
    fn test_invalid_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        std::fs::write(&path, "{ style: cards }").unwrap();

        let err = GeneratorConfig::load_or_default(&path).unwrap_err();
        assert!(matches!(err, AnimalsWebError::ConfigParse { .. }));
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        let config = GeneratorConfig {
            style: RenderStyle::SimpleListItem,
            ..GeneratorConfig::default()
        };
        config.save(&path).unwrap();

        let loaded = GeneratorConfig::load(&path).unwrap();
        assert_eq!(loaded.style, RenderStyle::SimpleListItem);
        assert_eq!(loaded.template, dir.path().join(TEMPLATE_FILE));
    }
}
