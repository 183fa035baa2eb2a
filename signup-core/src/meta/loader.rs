use std::path::Path;

use super::Catalog;
use crate::util::errors::CatalogError;

impl Catalog {
    pub fn from_yaml_str(source: &str) -> Result<Self, CatalogError> {
        let catalog: Catalog = serde_yaml::from_str(source)?;
        catalog.validate()?;
        Ok(catalog)
    }

    pub fn load_from_path(path: &Path) -> Result<Self, CatalogError> {
        let source = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let catalog = Self::from_yaml_str(&source)?;
        log::info!(
            "Loaded catalog from {}: {} plans, {} add-ons",
            path.display(),
            catalog.plans.len(),
            catalog.addons.len()
        );
        Ok(catalog)
    }
}
