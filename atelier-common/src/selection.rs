//! Gallery selections: a catalog subset for one year or one medium

use std::fmt;
use std::sync::Arc;

use crate::catalog::{Artwork, ResolvedArtwork};

/// What a gallery groups by
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum GalleryKey {
    /// Matches `Artwork::year` exactly
    Year(String),
    /// Matches `Artwork::kind`, ignoring case
    Medium(String),
}

impl GalleryKey {
    pub fn matches(&self, artwork: &Artwork) -> bool {
        match self {
            GalleryKey::Year(year) => artwork.year == *year,
            GalleryKey::Medium(kind) => artwork.kind.eq_ignore_ascii_case(kind),
        }
    }

    /// The raw value used in the URL and the page heading
    pub fn value(&self) -> &str {
        match self {
            GalleryKey::Year(year) => year,
            GalleryKey::Medium(kind) => kind,
        }
    }
}

impl fmt::Display for GalleryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GalleryKey::Year(year) => write!(f, "year {year}"),
            GalleryKey::Medium(kind) => write!(f, "medium {kind}"),
        }
    }
}

/// Ordered artworks for a gallery key, in catalog order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GallerySelection {
    key: GalleryKey,
    artworks: Vec<Arc<ResolvedArtwork>>,
}

impl GallerySelection {
    pub fn new(key: GalleryKey, artworks: Vec<Arc<ResolvedArtwork>>) -> Self {
        Self { key, artworks }
    }

    pub fn key(&self) -> &GalleryKey {
        &self.key
    }

    pub fn len(&self) -> usize {
        self.artworks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.artworks.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Arc<ResolvedArtwork>> {
        self.artworks.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Arc<ResolvedArtwork>> {
        self.artworks.iter()
    }

    /// Index of `file` within this selection
    pub fn position_of(&self, file: &str) -> Option<usize> {
        self.artworks.iter().position(|art| art.file() == file)
    }

    pub fn files(&self) -> Vec<String> {
        self.artworks
            .iter()
            .map(|art| art.file().to_string())
            .collect()
    }
}
