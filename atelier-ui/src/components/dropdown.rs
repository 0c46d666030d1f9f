//! Hover dropdown for the navigation bar
//!
//! Opens while the pointer is over the label or the list, and closes as soon
//! as an item is chosen so the list never lingers over the next page.

use atelier_common::{MenuEntry, MenuItem, MenuPalette, Page};
use dioxus::prelude::*;

#[component]
pub fn NavDropdown(
    entry: MenuEntry,
    palette: MenuPalette,
    /// Called with the page of the chosen item (or of the label link)
    on_navigate: EventHandler<Page>,
) -> Element {
    let mut is_open = use_signal(|| false);
    let has_items = !entry.items.is_empty();
    let label_link = entry.link.as_deref().map(Page::parse);

    rsx! {
        div {
            class: "relative",
            onmouseenter: move |_| is_open.set(has_items),
            onmouseleave: move |_| is_open.set(false),

            match label_link {
                Some(page) => {
                    let href = page.path();
                    rsx! {
                        a {
                            class: "px-3 py-2 text-sm tracking-widest {palette.label_text}",
                            href: "{href}",
                            onclick: move |evt: MouseEvent| {
                                evt.prevent_default();
                                is_open.set(false);
                                on_navigate.call(page.clone());
                            },
                            "{entry.label}"
                        }
                    }
                }
                None => rsx! {
                    span { class: "px-3 py-2 text-sm tracking-widest cursor-default select-none {palette.label_text}",
                        "{entry.label}"
                    }
                },
            }

            if is_open() {
                ul { class: "absolute left-0 top-full z-40 max-h-[70vh] min-w-28 overflow-y-auto py-1 shadow-lg {palette.list_background} {palette.list_text}",
                    for MenuItem { label, page } in entry.items.iter().cloned() {
                        {
                            let path = page.path();
                            rsx! {
                                li { key: "{path}",
                                    a {
                                        class: "block px-4 py-1 text-sm transition-colors {palette.list_hover}",
                                        href: "{path}",
                                        onclick: move |evt: MouseEvent| {
                                            evt.prevent_default();
                                            is_open.set(false);
                                            on_navigate.call(page.clone());
                                        },
                                        "{label}"
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
