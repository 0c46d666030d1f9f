//! Site data embedded at build time
//!
//! The catalog, the site configuration and the art manifest are compiled into
//! the binary and loaded once when the app starts. Bad data is logged and
//! replaced by defaults so the site still renders.

use atelier_common::{Catalog, ImageRegistry, ResolvedCatalog, SiteConfig};
use dioxus::prelude::*;
use tracing::{error, info};

const ARTWORKS_JSON: &str = include_str!("../data/artworks.json");
const SITE_YAML: &str = include_str!("../site.yaml");

include!(concat!(env!("OUT_DIR"), "/art_manifest.rs"));

/// Read-only site state shared through context
#[derive(Debug, Clone, PartialEq)]
pub struct Site {
    pub config: SiteConfig,
    pub catalog: ResolvedCatalog,
}

impl Site {
    pub fn load() -> Self {
        let config = SiteConfig::from_yaml(SITE_YAML).unwrap_or_else(|e| {
            error!("Falling back to the default site config: {e}");
            SiteConfig::default()
        });

        let registry = ImageRegistry::from_assets(
            ART_MANIFEST
                .iter()
                .map(|(path, asset)| (*path, asset.to_string())),
        );

        let catalog = Catalog::from_json(ARTWORKS_JSON).unwrap_or_else(|e| {
            error!("Catalog could not be read, showing no artworks: {e}");
            Catalog::default()
        });
        let catalog = catalog.resolve(&registry);

        info!(
            "Loaded {} artworks from {} images ({} hidden without an image)",
            catalog.len(),
            registry.len(),
            catalog.unresolved_count()
        );

        Self { config, catalog }
    }
}
