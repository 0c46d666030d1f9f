//! Navigation bar view
//!
//! Pure, props-based: the artist name links home, followed by one dropdown per
//! menu and the plain links. Colors follow the theme of the page underneath.

use atelier_common::{MenuEntry, MenuPalette, NavLink, Page, Theme};
use dioxus::prelude::*;

use super::dropdown::NavDropdown;

#[component]
pub fn NavBarView(
    artist_name: String,
    menus: Vec<MenuEntry>,
    links: Vec<NavLink>,
    theme: Theme,
    on_navigate: EventHandler<Page>,
) -> Element {
    let palette = MenuPalette::for_theme(theme);
    let bar_class = match theme {
        Theme::Home => "bg-gradient-to-b from-black/50 to-transparent",
        Theme::Gallery => "bg-white",
    };

    rsx! {
        nav { class: "fixed inset-x-0 top-0 z-30 flex h-14 items-center gap-2 px-6 {bar_class}",
            a {
                class: "mr-6 text-lg tracking-wide {palette.label_text}",
                href: "/",
                onclick: move |evt: MouseEvent| {
                    evt.prevent_default();
                    on_navigate.call(Page::Home);
                },
                "{artist_name}"
            }
            for entry in menus {
                NavDropdown {
                    key: "{entry.label}",
                    entry: entry.clone(),
                    palette,
                    on_navigate,
                }
            }
            for link in links {
                {
                    let page = Page::parse(&link.path);
                    rsx! {
                        a {
                            key: "{link.path}",
                            class: "px-3 py-2 text-sm tracking-widest {palette.label_text}",
                            href: "{link.path}",
                            onclick: move |evt: MouseEvent| {
                                evt.prevent_default();
                                on_navigate.call(page.clone());
                            },
                            "{link.label}"
                        }
                    }
                }
            }
        }
    }
}
