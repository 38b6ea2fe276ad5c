pub mod plan;
pub mod recipe;

use dietplan_recipe::Catalog;

use crate::config::Config;

/// Catalog path from the command line, falling back to the configured one.
pub fn load_catalog(config: &Config, catalog_override: Option<String>) -> anyhow::Result<Catalog> {
    let path = catalog_override.unwrap_or_else(|| config.catalog.path.to_owned());

    Catalog::load(&path).map_err(|e| anyhow::anyhow!("failed to load catalog {path}: {e}"))
}
