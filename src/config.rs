//! Declarative defaults for the dialog control.
//!
//! Hosts that keep widget settings in their application config can
//! deserialize a `[dialog]`-style TOML table into [`DialogConfig`] and
//! build the controller from it. Everything here can also be set
//! imperatively on the controller; the config layer only supplies
//! defaults.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

/// Controller defaults loaded from TOML.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct DialogConfig {
    /// Render prompts as partial fragments for asynchronous update.
    pub ajax: bool,
    /// Dialog layout path override.
    pub layout_file: Option<PathBuf>,
    /// Confirmer template path override.
    pub template_file: Option<PathBuf>,
}

impl Default for DialogConfig {
    fn default() -> Self {
        Self {
            ajax: true,
            layout_file: None,
            template_file: None,
        }
    }
}

impl DialogConfig {
    /// Parse a config from TOML text.
    pub fn from_toml(text: &str) -> Result<Self> {
        toml::from_str(text).context("parsing dialog config")
    }

    /// Load a config from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading dialog config from {}", path.display()))?;
        Self::from_toml(&text)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn defaults_enable_ajax_with_no_overrides() {
        let config = DialogConfig::default();
        assert!(config.ajax);
        assert!(config.layout_file.is_none());
        assert!(config.template_file.is_none());
    }

    #[test]
    fn empty_toml_yields_defaults() {
        let config = DialogConfig::from_toml("").unwrap();
        assert!(config.ajax);
        assert!(config.template_file.is_none());
    }

    #[test]
    fn toml_overrides_are_applied() {
        let config = DialogConfig::from_toml(
            r#"
            ajax = false
            layout-file = "custom/layout.html"
            template-file = "custom/confirmer.html"
            "#,
        )
        .unwrap();

        assert!(!config.ajax);
        assert_eq!(config.layout_file, Some(PathBuf::from("custom/layout.html")));
        assert_eq!(
            config.template_file,
            Some(PathBuf::from("custom/confirmer.html"))
        );
    }

    #[test]
    fn load_reads_config_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "ajax = false").unwrap();

        let config = DialogConfig::load(file.path()).unwrap();
        assert!(!config.ajax);
    }

    #[test]
    fn malformed_toml_is_an_error() {
        assert!(DialogConfig::from_toml("ajax = ").is_err());
    }
}
