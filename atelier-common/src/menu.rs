//! Navigation menu model

use crate::config::SiteConfig;
use crate::page::{Page, Theme};
use crate::selection::GalleryKey;

/// A navigable entry inside a dropdown list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuItem {
    pub label: String,
    pub page: Page,
}

impl MenuItem {
    /// `href` for the item's anchor
    pub fn path(&self) -> String {
        self.page.path()
    }
}

/// A top-level menu: a label (optionally a link itself) and its dropdown items
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuEntry {
    pub label: String,
    pub link: Option<String>,
    pub items: Vec<MenuItem>,
}

impl MenuEntry {
    /// PAINTING: one item per configured year
    pub fn paintings(config: &SiteConfig) -> Self {
        Self {
            label: "PAINTING".to_string(),
            link: None,
            items: config
                .painting_years
                .years()
                .map(|year| MenuItem {
                    page: Page::gallery(&GalleryKey::Year(year.clone())),
                    label: year,
                })
                .collect(),
        }
    }

    /// SKETCH: one item per configured medium
    pub fn sketches(config: &SiteConfig) -> Self {
        Self {
            label: "SKETCH".to_string(),
            link: None,
            items: config
                .sketch_kinds
                .iter()
                .map(|sketch| MenuItem {
                    label: sketch.label.clone(),
                    page: Page::gallery(&GalleryKey::Medium(sketch.kind.clone())),
                })
                .collect(),
        }
    }

    /// Every dropdown shown in the navigation bar, in order
    pub fn all(config: &SiteConfig) -> Vec<Self> {
        vec![Self::paintings(config), Self::sketches(config)]
    }
}

/// Tailwind classes for the chrome on a given theme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuPalette {
    pub label_text: &'static str,
    pub list_background: &'static str,
    pub list_text: &'static str,
    pub list_hover: &'static str,
}

impl MenuPalette {
    /// Gallery pages are white, so the list goes dark; the home page sits on
    /// imagery with a dark scrim, so the list goes light.
    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Home => Self {
                label_text: "text-white",
                list_background: "bg-white",
                list_text: "text-black",
                list_hover: "hover:bg-gray-200",
            },
            Theme::Gallery => Self {
                label_text: "text-black",
                list_background: "bg-black",
                list_text: "text-white",
                list_hover: "hover:bg-gray-800",
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_painting_menu_lists_every_year() {
        let menu = MenuEntry::paintings(&SiteConfig::default());
        assert_eq!(menu.items.len(), 61);
        assert_eq!(menu.items[0].label, "1840");
        assert_eq!(menu.items[0].path(), "/painting/1840");
        assert_eq!(menu.items[60].label, "1900");
    }

    #[test]
    fn test_sketch_menu_links_to_medium_galleries() {
        let menu = MenuEntry::sketches(&SiteConfig::default());
        let paths: Vec<String> = menu.items.iter().map(|i| i.path()).collect();
        assert_eq!(paths, vec!["/sketch/pencil", "/sketch/ink"]);
    }

    #[test]
    fn test_palette_inverts_between_themes() {
        let home = MenuPalette::for_theme(Theme::Home);
        let gallery = MenuPalette::for_theme(Theme::Gallery);
        assert_eq!(home.list_background, "bg-white");
        assert_eq!(gallery.list_background, "bg-black");
        assert_eq!(home.list_text, "text-black");
        assert_eq!(gallery.list_text, "text-white");
        assert_ne!(home.label_text, gallery.label_text);
    }
}
