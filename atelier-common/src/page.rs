//! Page model: the pure mirror of the web router
//!
//! The router enum in `atelier-web` converts to and from `Page` so that path
//! building, overlay targets and theming can be tested without a browser.

use crate::selection::GalleryKey;

/// Every view the site can show
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Page {
    Home,
    PaintingYear { year: String },
    PaintingOverlay { year: String, file: String },
    Sketch { kind: String },
    SketchOverlay { kind: String, file: String },
    About,
    NotFound { segments: Vec<String> },
}

/// Color scheme for the chrome drawn over a page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    /// Light text over the full-bleed home carousel
    #[default]
    Home,
    /// Dark text over the white gallery background
    Gallery,
}

impl Page {
    /// The gallery page for `key`
    pub fn gallery(key: &GalleryKey) -> Self {
        match key {
            GalleryKey::Year(year) => Page::PaintingYear { year: year.clone() },
            GalleryKey::Medium(kind) => Page::Sketch { kind: kind.clone() },
        }
    }

    /// The overlay page showing `file` within the gallery for `key`
    pub fn overlay(key: &GalleryKey, file: impl Into<String>) -> Self {
        let file = file.into();
        match key {
            GalleryKey::Year(year) => Page::PaintingOverlay {
                year: year.clone(),
                file,
            },
            GalleryKey::Medium(kind) => Page::SketchOverlay {
                kind: kind.clone(),
                file,
            },
        }
    }

    /// Parse a URL path. Query strings and fragments are ignored.
    pub fn parse(path: &str) -> Self {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let segments: Vec<String> = path
            .split('/')
            .filter(|s| !s.is_empty())
            .map(decode_segment)
            .collect();

        match segments.as_slice() {
            [] => Page::Home,
            [about] if about == "about" => Page::About,
            [section, year] if section == "painting" => Page::PaintingYear { year: year.clone() },
            [section, year, file] if section == "painting" => Page::PaintingOverlay {
                year: year.clone(),
                file: file.clone(),
            },
            [section, kind] if section == "sketch" => Page::Sketch { kind: kind.clone() },
            [section, kind, file] if section == "sketch" => Page::SketchOverlay {
                kind: kind.clone(),
                file: file.clone(),
            },
            _ => Page::NotFound { segments },
        }
    }

    /// URL path for this page, with each dynamic segment percent-encoded
    pub fn path(&self) -> String {
        match self {
            Page::Home => "/".to_string(),
            Page::PaintingYear { year } => format!("/painting/{}", encode_segment(year)),
            Page::PaintingOverlay { year, file } => format!(
                "/painting/{}/{}",
                encode_segment(year),
                encode_segment(file)
            ),
            Page::Sketch { kind } => format!("/sketch/{}", encode_segment(kind)),
            Page::SketchOverlay { kind, file } => format!(
                "/sketch/{}/{}",
                encode_segment(kind),
                encode_segment(file)
            ),
            Page::About => "/about".to_string(),
            Page::NotFound { segments } => {
                let joined: Vec<String> = segments.iter().map(|s| encode_segment(s)).collect();
                format!("/{}", joined.join("/"))
            }
        }
    }

    /// Gallery key for gallery and overlay pages
    pub fn gallery_key(&self) -> Option<GalleryKey> {
        match self {
            Page::PaintingYear { year } | Page::PaintingOverlay { year, .. } => {
                Some(GalleryKey::Year(year.clone()))
            }
            Page::Sketch { kind } | Page::SketchOverlay { kind, .. } => {
                Some(GalleryKey::Medium(kind.clone()))
            }
            _ => None,
        }
    }

    /// `(gallery key, file)` for overlay pages
    pub fn overlay_target(&self) -> Option<(GalleryKey, &str)> {
        match self {
            Page::PaintingOverlay { year, file } => {
                Some((GalleryKey::Year(year.clone()), file.as_str()))
            }
            Page::SketchOverlay { kind, file } => {
                Some((GalleryKey::Medium(kind.clone()), file.as_str()))
            }
            _ => None,
        }
    }

    pub fn is_overlay(&self) -> bool {
        matches!(self, Page::PaintingOverlay { .. } | Page::SketchOverlay { .. })
    }

    /// The plain gallery page an overlay sits on
    pub fn gallery_page(&self) -> Option<Page> {
        self.gallery_key().map(|key| Page::gallery(&key))
    }

    pub fn theme(&self) -> Theme {
        match self {
            Page::Home => Theme::Home,
            _ => Theme::Gallery,
        }
    }
}

/// Percent-encode one path segment.
pub fn encode_segment(segment: &str) -> String {
    urlencoding::encode(segment).into_owned()
}

/// Percent-decode one path segment, keeping it as-is when it is not valid UTF-8
/// after decoding.
pub fn decode_segment(segment: &str) -> String {
    urlencoding::decode(segment)
        .map(|s| s.into_owned())
        .unwrap_or_else(|_| segment.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_routes() {
        assert_eq!(Page::parse("/"), Page::Home);
        assert_eq!(Page::parse(""), Page::Home);
        assert_eq!(Page::parse("/about"), Page::About);
        assert_eq!(
            Page::parse("/painting/1850"),
            Page::PaintingYear {
                year: "1850".into()
            }
        );
        assert_eq!(
            Page::parse("/painting/1850/a.jpg"),
            Page::PaintingOverlay {
                year: "1850".into(),
                file: "a.jpg".into()
            }
        );
        assert_eq!(
            Page::parse("/sketch/ink/"),
            Page::Sketch { kind: "ink".into() }
        );
    }

    #[test]
    fn test_parse_unknown_route() {
        assert_eq!(
            Page::parse("/gallery/x"),
            Page::NotFound {
                segments: vec!["gallery".into(), "x".into()]
            }
        );
        assert!(matches!(
            Page::parse("/painting/1850/a.jpg/extra"),
            Page::NotFound { .. }
        ));
    }

    #[test]
    fn test_parse_ignores_query_and_fragment() {
        assert_eq!(
            Page::parse("/painting/1850?x=1#top"),
            Page::PaintingYear {
                year: "1850".into()
            }
        );
    }

    #[test]
    fn test_file_segment_is_encoded_and_decoded() {
        let page = Page::PaintingOverlay {
            year: "1850".into(),
            file: "the duel.jpg".into(),
        };
        assert_eq!(page.path(), "/painting/1850/the%20duel.jpg");
        assert_eq!(Page::parse(&page.path()), page);
    }

    #[test]
    fn test_overlay_and_gallery_pages() {
        let key = GalleryKey::Medium("pencil".into());
        let overlay = Page::overlay(&key, "s.jpg");
        assert_eq!(overlay.path(), "/sketch/pencil/s.jpg");
        assert!(overlay.is_overlay());
        assert_eq!(overlay.overlay_target(), Some((key.clone(), "s.jpg")));
        assert_eq!(overlay.gallery_page(), Some(Page::gallery(&key)));
        assert_eq!(Page::gallery(&key).path(), "/sketch/pencil");
    }

    #[test]
    fn test_theme() {
        assert_eq!(Page::Home.theme(), Theme::Home);
        assert_eq!(Page::About.theme(), Theme::Gallery);
        assert_eq!(
            Page::PaintingYear {
                year: "1850".into()
            }
            .theme(),
            Theme::Gallery
        );
    }

    #[test]
    fn test_non_gallery_pages_have_no_key() {
        assert_eq!(Page::Home.gallery_key(), None);
        assert_eq!(Page::About.gallery_page(), None);
        assert_eq!(Page::About.overlay_target(), None);
    }
}
