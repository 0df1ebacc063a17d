//! Item and block catalog loader.

use std::path::Path;

use crate::catalog::Catalog;
use crate::loaders::{LoadResult, read_file};

/// Loader for item and block catalogs from RON files.
pub struct CatalogLoader;

impl CatalogLoader {
    /// Load a catalog from a RON file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the RON file containing a Catalog
    ///
    /// # Returns
    ///
    /// Returns a validated Catalog.
    pub fn load(path: &Path) -> LoadResult<Catalog> {
        let content = read_file(path)?;
        Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("Failed to load catalog {}: {}", path.display(), e))
    }

    /// Parse and validate catalog RON text.
    pub fn parse(content: &str) -> LoadResult<Catalog> {
        let catalog: Catalog = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse catalog RON: {}", e))?;
        catalog.validate()?;

        Ok(catalog)
    }
}
