//! Modal overlay routing
//!
//! Opening an artwork from a gallery keeps that gallery page as in-memory
//! background state. While the background is present the gallery stays
//! mounted underneath the overlay, so closing returns to the same scroll
//! position. A freshly loaded overlay link has no background and renders alone.

use crate::page::{Page, Theme};
use crate::selection::GallerySelection;

/// What the layout should render for the current location
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderPlan {
    /// Page rendered in the main slot
    pub base: Page,
    /// Overlay page drawn on top of `base`, if modal
    pub overlay: Option<Page>,
}

impl RenderPlan {
    /// Decide what to render for `current`, given the background attached when
    /// the overlay was opened. A background only counts while `current` is an
    /// overlay of that same gallery.
    pub fn resolve(current: &Page, background: Option<&Page>) -> Self {
        match background {
            Some(bg) if is_background_of(bg, current) => Self {
                base: bg.clone(),
                overlay: Some(current.clone()),
            },
            _ => Self {
                base: current.clone(),
                overlay: None,
            },
        }
    }

    pub fn is_modal(&self) -> bool {
        self.overlay.is_some()
    }

    /// Theme of the chrome, taken from the page underneath any overlay
    pub fn theme(&self) -> Theme {
        self.base.theme()
    }
}

fn is_background_of(background: &Page, current: &Page) -> bool {
    current.is_overlay() && current.gallery_page().as_ref() == Some(background)
}

/// Whether the in-memory background survives a move to `current`. Any page
/// that is not an overlay drops it, so an overlay reached again through
/// history later renders on its own.
pub fn keeps_background(current: &Page) -> bool {
    current.is_overlay()
}

/// How to dismiss an overlay
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CloseAction {
    /// Pop one history entry, revealing the preserved background gallery
    GoBack,
    /// No background to return to: replace the overlay with this page
    Replace(Page),
}

/// Close action for the overlay at `current`.
pub fn close_action(current: &Page, background: Option<&Page>) -> CloseAction {
    if RenderPlan::resolve(current, background).is_modal() {
        CloseAction::GoBack
    } else {
        CloseAction::Replace(current.gallery_page().unwrap_or(Page::Home))
    }
}

/// Outcome of looking up an overlay's file in its gallery
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OverlayResolution {
    /// Show the artwork at this index of the selection
    Show { index: usize },
    /// The file is not in the selection: replace the URL with this page
    Redirect(Page),
}

/// Locate `file` within `selection`. Unknown files, including every file of an
/// empty selection, redirect to the plain gallery page.
pub fn resolve_overlay(selection: &GallerySelection, file: &str) -> OverlayResolution {
    match selection.position_of(file) {
        Some(index) => OverlayResolution::Show { index },
        None => OverlayResolution::Redirect(Page::gallery(selection.key())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::tests::{artwork, registry_for};
    use crate::catalog::Catalog;
    use crate::selection::GalleryKey;

    fn gallery() -> Page {
        Page::PaintingYear {
            year: "1850".into(),
        }
    }

    fn overlay(file: &str) -> Page {
        Page::PaintingOverlay {
            year: "1850".into(),
            file: file.into(),
        }
    }

    #[test]
    fn test_overlay_with_background_is_modal() {
        let bg = gallery();
        let plan = RenderPlan::resolve(&overlay("a.jpg"), Some(&bg));
        assert_eq!(plan.base, gallery());
        assert_eq!(plan.overlay, Some(overlay("a.jpg")));
        assert_eq!(plan.theme(), Theme::Gallery);
    }

    #[test]
    fn test_direct_link_renders_overlay_alone() {
        let plan = RenderPlan::resolve(&overlay("a.jpg"), None);
        assert_eq!(plan.base, overlay("a.jpg"));
        assert!(!plan.is_modal());
    }

    #[test]
    fn test_background_of_other_gallery_is_ignored() {
        let bg = Page::PaintingYear {
            year: "1851".into(),
        };
        let plan = RenderPlan::resolve(&overlay("a.jpg"), Some(&bg));
        assert!(!plan.is_modal());
    }

    #[test]
    fn test_stale_background_on_gallery_page_is_ignored() {
        let bg = gallery();
        let plan = RenderPlan::resolve(&gallery(), Some(&bg));
        assert_eq!(plan.base, gallery());
        assert!(!plan.is_modal());
    }

    #[test]
    fn test_base_is_stable_across_overlay_steps() {
        let bg = gallery();
        let first = RenderPlan::resolve(&overlay("a.jpg"), Some(&bg));
        let second = RenderPlan::resolve(&overlay("b.jpg"), Some(&bg));
        assert_eq!(first.base, second.base);
    }

    #[test]
    fn test_close_goes_back_when_modal() {
        let bg = gallery();
        assert_eq!(
            close_action(&overlay("a.jpg"), Some(&bg)),
            CloseAction::GoBack
        );
    }

    #[test]
    fn test_close_falls_back_to_gallery_without_background() {
        assert_eq!(
            close_action(&overlay("a.jpg"), None),
            CloseAction::Replace(gallery())
        );
        let sketch = Page::SketchOverlay {
            kind: "ink".into(),
            file: "s.jpg".into(),
        };
        assert_eq!(
            close_action(&sketch, None),
            CloseAction::Replace(Page::Sketch { kind: "ink".into() })
        );
    }

    #[test]
    fn test_only_overlays_keep_background() {
        assert!(keeps_background(&overlay("a.jpg")));
        assert!(!keeps_background(&gallery()));
        assert!(!keeps_background(&Page::Home));
        assert!(!keeps_background(&Page::About));
    }

    #[test]
    fn test_home_theme_under_no_overlay() {
        assert_eq!(RenderPlan::resolve(&Page::Home, None).theme(), Theme::Home);
    }

    #[test]
    fn test_resolve_overlay_finds_index() {
        let resolved = Catalog::new(vec![
            artwork("a.jpg", "1850", "painting"),
            artwork("b.jpg", "1850", "painting"),
        ])
        .resolve(&registry_for(&["a.jpg", "b.jpg"]));
        let selection = resolved.selection(&GalleryKey::Year("1850".into()));

        assert_eq!(
            resolve_overlay(&selection, "b.jpg"),
            OverlayResolution::Show { index: 1 }
        );
        assert_eq!(
            resolve_overlay(&selection, "c.jpg"),
            OverlayResolution::Redirect(gallery())
        );
    }

    #[test]
    fn test_resolve_overlay_in_empty_selection_redirects() {
        let selection = GallerySelection::new(GalleryKey::Medium("ink".into()), Vec::new());
        assert_eq!(
            resolve_overlay(&selection, "a.jpg"),
            OverlayResolution::Redirect(Page::Sketch { kind: "ink".into() })
        );
    }
}
