//! Artwork catalog and image registry
//!
//! The catalog is parsed once from embedded JSON and bound to the image
//! registry. Only artworks whose file resolves to exactly one asset survive
//! into the `ResolvedCatalog` that every view reads from.

use std::collections::BTreeSet;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use crate::selection::{GalleryKey, GallerySelection};

/// Catalog errors
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Invalid catalog JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// A single catalog record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Artwork {
    pub file: String,
    pub year: String,
    /// Medium category ("painting", "pencil", "ink", ...)
    #[serde(rename = "type")]
    pub kind: String,
    pub title: String,
    pub medium: String,
}

/// An artwork bound to a displayable image URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedArtwork {
    pub artwork: Artwork,
    pub src: String,
}

impl ResolvedArtwork {
    pub fn file(&self) -> &str {
        &self.artwork.file
    }
}

/// Read-only lookup from a catalog file reference to an image URL.
///
/// Built once from the static asset manifest. An asset matches a file when its
/// path equals the file or ends with `/<file>`.
#[derive(Debug, Clone, Default)]
pub struct ImageRegistry {
    assets: Vec<(String, String)>,
}

impl ImageRegistry {
    /// Build a registry from `(asset path, url)` pairs.
    pub fn from_assets<I, P, U>(assets: I) -> Self
    where
        I: IntoIterator<Item = (P, U)>,
        P: Into<String>,
        U: Into<String>,
    {
        Self {
            assets: assets
                .into_iter()
                .map(|(path, url)| (path.into(), url.into()))
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.assets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }

    /// Resolve a file reference. Ambiguous references do not resolve.
    pub fn resolve(&self, file: &str) -> Option<&str> {
        if file.is_empty() {
            return None;
        }
        let mut matches = self
            .assets
            .iter()
            .filter(|(path, _)| path_matches(path, file));
        let (_, url) = matches.next()?;
        if matches.next().is_some() {
            warn!("Ambiguous image reference '{file}' matches several assets");
            return None;
        }
        Some(url.as_str())
    }
}

fn path_matches(path: &str, file: &str) -> bool {
    match path.strip_suffix(file) {
        Some("") => true,
        Some(prefix) => prefix.ends_with('/'),
        None => false,
    }
}

/// The raw catalog, in file order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    artworks: Vec<Artwork>,
}

impl Catalog {
    pub fn new(artworks: Vec<Artwork>) -> Self {
        Self { artworks }
    }

    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let artworks: Vec<Artwork> = serde_json::from_str(json)?;
        Ok(Self { artworks })
    }

    pub fn artworks(&self) -> &[Artwork] {
        &self.artworks
    }

    pub fn len(&self) -> usize {
        self.artworks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.artworks.is_empty()
    }

    /// Bind every artwork to its image, dropping those that do not resolve.
    pub fn resolve(&self, registry: &ImageRegistry) -> ResolvedCatalog {
        let mut resolved = Vec::with_capacity(self.artworks.len());
        let mut unresolved = 0;

        for artwork in &self.artworks {
            match registry.resolve(&artwork.file) {
                Some(src) => resolved.push(Arc::new(ResolvedArtwork {
                    artwork: artwork.clone(),
                    src: src.to_string(),
                })),
                None => {
                    debug!("No image for '{}', excluding it", artwork.file);
                    unresolved += 1;
                }
            }
        }

        if unresolved > 0 {
            warn!(
                "{unresolved} of {} catalog entries have no image and are hidden",
                self.artworks.len()
            );
        }

        ResolvedCatalog {
            artworks: resolved,
            unresolved,
        }
    }
}

/// The displayable catalog: every entry has an image
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedCatalog {
    artworks: Vec<Arc<ResolvedArtwork>>,
    unresolved: usize,
}

impl ResolvedCatalog {
    pub fn all(&self) -> &[Arc<ResolvedArtwork>] {
        &self.artworks
    }

    pub fn len(&self) -> usize {
        self.artworks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.artworks.is_empty()
    }

    /// Number of catalog entries dropped for lack of an image
    pub fn unresolved_count(&self) -> usize {
        self.unresolved
    }

    /// Artworks matching `key`, in catalog order.
    pub fn selection(&self, key: &GalleryKey) -> GallerySelection {
        GallerySelection::new(
            key.clone(),
            self.artworks
                .iter()
                .filter(|art| key.matches(&art.artwork))
                .cloned()
                .collect(),
        )
    }

    /// Distinct years that have at least one displayable artwork, sorted.
    pub fn years(&self) -> Vec<String> {
        self.artworks
            .iter()
            .map(|art| art.artwork.year.clone())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Distinct medium kinds that have at least one displayable artwork, sorted.
    pub fn kinds(&self) -> Vec<String> {
        self.artworks
            .iter()
            .map(|art| art.artwork.kind.to_lowercase())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }
}
