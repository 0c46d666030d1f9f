//! Site configuration loaded from the embedded YAML

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid site config YAML: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("Painting year range is empty: {first}..={last}")]
    InvalidYearRange { first: u32, last: u32 },
}

/// Site configuration, embedded as YAML at build time.
///
/// Every field has a default, so an empty document is a valid config.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub artist_name: String,
    /// Years listed in the PAINTING menu
    pub painting_years: YearRange,
    /// Entries of the SKETCH menu
    pub sketch_kinds: Vec<SketchKind>,
    /// Plain links after the menus
    pub links: Vec<NavLink>,
    pub timing: Timing,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            artist_name: "Jean-Léon Gérôme".to_string(),
            painting_years: YearRange::default(),
            sketch_kinds: vec![
                SketchKind {
                    label: "Pencil".to_string(),
                    kind: "pencil".to_string(),
                },
                SketchKind {
                    label: "Ink".to_string(),
                    kind: "ink".to_string(),
                },
            ],
            links: vec![NavLink {
                label: "ABOUT".to_string(),
                path: "/about".to_string(),
            }],
            timing: Timing::default(),
        }
    }
}

impl SiteConfig {
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        let config: SiteConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let YearRange { first, last } = self.painting_years;
        if first > last {
            return Err(ConfigError::InvalidYearRange { first, last });
        }
        Ok(())
    }
}

/// Inclusive year range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearRange {
    pub first: u32,
    pub last: u32,
}

impl Default for YearRange {
    fn default() -> Self {
        Self {
            first: 1840,
            last: 1900,
        }
    }
}

impl YearRange {
    pub fn years(&self) -> impl Iterator<Item = String> {
        (self.first..=self.last).map(|y| y.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SketchKind {
    pub label: String,
    /// Value matched against `Artwork::kind`
    pub kind: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavLink {
    pub label: String,
    pub path: String,
}

/// UI tuning constants, in milliseconds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Timing {
    /// Home carousel auto-advance period
    pub home_advance_ms: u64,
    /// Delay between successive strip items fading in
    pub reveal_stagger_ms: u64,
    /// Minimum gap between wheel-driven strip steps
    pub wheel_throttle_ms: u64,
    /// Lightbox fade-out before an image swap
    pub fade_out_ms: u64,
    /// Lightbox fade-in transition length
    pub fade_in_ms: u64,
    /// Fallback for load signals that never reach the next frame
    pub load_fallback_ms: u64,
}

impl Default for Timing {
    fn default() -> Self {
        Self {
            home_advance_ms: 5000,
            reveal_stagger_ms: 120,
            wheel_throttle_ms: 400,
            fade_out_ms: 80,
            fade_in_ms: 300,
            load_fallback_ms: 30,
        }
    }
}
