//! Year and medium gallery pages

use std::rc::Rc;

use atelier_common::{GalleryKey, Page};
use atelier_ui::StripCarouselView;
use dioxus::prelude::*;

use super::BackgroundPage;
use crate::site::Site;
use crate::Route;

#[component]
pub fn PaintingYear(year: String) -> Element {
    rsx! {
        GalleryPage { gallery: GalleryKey::Year(year) }
    }
}

#[component]
pub fn Sketch(kind: String) -> Element {
    rsx! {
        GalleryPage { gallery: GalleryKey::Medium(kind) }
    }
}

#[component]
fn GalleryPage(gallery: GalleryKey) -> Element {
    let site = use_context::<Rc<Site>>();
    let BackgroundPage(mut background) = use_context::<BackgroundPage>();
    let selection = site.catalog.selection(&gallery);

    let heading = match &gallery {
        GalleryKey::Year(year) => format!("PAINTING / {year}"),
        GalleryKey::Medium(kind) => format!("SKETCH / {}", kind.to_uppercase()),
    };

    let opened_from = selection.clone();
    let on_open = move |index: usize| {
        let Some(art) = opened_from.get(index) else {
            return;
        };
        background.set(Some(Page::gallery(&gallery)));
        navigator().push(Route::from(Page::overlay(&gallery, art.file())));
    };

    rsx! {
        section { class: "min-h-screen bg-white pt-24",
            h1 { class: "mb-6 pl-[50px] text-xs tracking-widest text-gray-500", "{heading}" }
            StripCarouselView { selection, timing: site.config.timing, on_open }
        }
    }
}
