use std::env;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use signup_core::Catalog;

pub const DEFAULT_CONFIG_FILE: &str = "signup.toml";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApplicationConfig {
    pub title: String,
    pub width: f32,
    pub height: f32,
    pub dark_mode: bool,
    pub support_email: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// YAML catalog to use instead of the built-in one.
    pub path: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SignupConfig {
    pub application: ApplicationConfig,
    pub catalog: CatalogConfig,
}

impl Default for ApplicationConfig {
    fn default() -> Self {
        ApplicationConfig {
            title: "Subscription Signup".to_string(),
            width: 940.0,
            height: 600.0,
            dark_mode: false,
            support_email: "support@loremgaming.com".to_string(),
        }
    }
}

impl SignupConfig {
    /// Load configuration from `SIGNUP_CONFIG` or `signup.toml`, then apply
    /// environment overrides. A missing file means defaults.
    pub fn load() -> Result<Self> {
        let path = env::var("SIGNUP_CONFIG")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_CONFIG_FILE));

        let mut config = match Self::load_from_file(&path)? {
            Some(config) => {
                log::info!("Loaded configuration from {}", path.display());
                config
            }
            None => {
                log::debug!("{} not found, using defaults", path.display());
                SignupConfig::default()
            }
        };

        config.apply_overrides(|key| env::var(key).ok());
        Ok(config)
    }

    pub fn from_toml_str(source: &str) -> Result<Self> {
        toml::from_str(source).context("Failed to parse signup configuration")
    }

    fn load_from_file(path: &Path) -> Result<Option<Self>> {
        if !path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        Self::from_toml_str(&content)
            .with_context(|| format!("Invalid configuration in {}", path.display()))
            .map(Some)
    }

    /// `lookup` resolves an environment variable name to its value.
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(path) = lookup("SIGNUP_CATALOG") {
            self.catalog.path = Some(PathBuf::from(path));
        }
        if let Some(dark) = lookup("SIGNUP_DARK_MODE") {
            self.application.dark_mode = dark.to_lowercase() == "true" || dark == "1";
        }
    }

    /// The configured catalog, or the built-in one when none is set.
    pub fn load_catalog(&self) -> Result<Catalog> {
        match &self.catalog.path {
            Some(path) => Catalog::load_from_path(path)
                .with_context(|| format!("Failed to load catalog from {}", path.display())),
            None => Ok(Catalog::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    #[test]
    fn defaults_when_sections_are_missing() {
        let config = SignupConfig::from_toml_str("").unwrap();
        assert_eq!(config.application.title, "Subscription Signup");
        assert_eq!(config.application.support_email, "support@loremgaming.com");
        assert!(config.catalog.path.is_none());
    }

    #[test]
    fn partial_sections_keep_remaining_defaults() {
        let config = SignupConfig::from_toml_str(
            "[application]\ntitle = \"Lorem Gaming\"\ndark_mode = true\n\n[catalog]\npath = \"plans.yaml\"\n",
        )
        .unwrap();

        assert_eq!(config.application.title, "Lorem Gaming");
        assert!(config.application.dark_mode);
        assert_eq!(config.application.width, 940.0);
        assert_eq!(config.catalog.path, Some(PathBuf::from("plans.yaml")));
    }

    #[test]
    fn invalid_toml_is_an_error() {
        assert!(SignupConfig::from_toml_str("[application\n").is_err());
    }

    #[test]
    fn env_overrides_win() {
        let vars: HashMap<&str, &str> =
            HashMap::from([("SIGNUP_CATALOG", "/tmp/catalog.yaml"), ("SIGNUP_DARK_MODE", "1")]);
        let mut config = SignupConfig::default();
        config.apply_overrides(|key| vars.get(key).map(|v| v.to_string()));

        assert_eq!(config.catalog.path, Some(PathBuf::from("/tmp/catalog.yaml")));
        assert!(config.application.dark_mode);
    }

    #[test]
    fn missing_file_yields_none() {
        let dir = tempfile::tempdir().unwrap();
        let loaded = SignupConfig::load_from_file(&dir.path().join("signup.toml")).unwrap();
        assert!(loaded.is_none());
    }

    #[test]
    fn builtin_catalog_without_path() {
        let catalog = SignupConfig::default().load_catalog().unwrap();
        assert_eq!(catalog, Catalog::default());
    }

    #[test]
    fn catalog_path_is_loaded() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "plans:\n  - name: Solo\n    price: \"$4/mo\"").unwrap();

        let mut config = SignupConfig::default();
        config.catalog.path = Some(file.path().to_path_buf());
        let catalog = config.load_catalog().unwrap();
        assert_eq!(catalog.plans[0].name, "Solo");
    }
}
