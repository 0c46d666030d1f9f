//! Overlay pages: one artwork of a gallery, addressable by URL

use std::rc::Rc;

use atelier_common::{
    close_action, resolve_overlay, CloseAction, GalleryKey, OverlayResolution, Page,
};
use atelier_ui::LightboxView;
use dioxus::prelude::*;

use super::BackgroundPage;
use crate::site::Site;
use crate::Route;

#[component]
pub fn PaintingOverlay(year: String, file: String) -> Element {
    rsx! {
        OverlayPage { gallery: GalleryKey::Year(year), file }
    }
}

#[component]
pub fn SketchOverlay(kind: String, file: String) -> Element {
    rsx! {
        OverlayPage { gallery: GalleryKey::Medium(kind), file }
    }
}

#[component]
fn OverlayPage(gallery: GalleryKey, file: String) -> Element {
    let site = use_context::<Rc<Site>>();
    let BackgroundPage(background) = use_context::<BackgroundPage>();
    let selection = site.catalog.selection(&gallery);
    let resolution = resolve_overlay(&selection, &file);

    let redirect = match &resolution {
        OverlayResolution::Redirect(page) => Some(page.clone()),
        OverlayResolution::Show { .. } => None,
    };
    use_effect(use_reactive((&redirect,), |(redirect,)| {
        if let Some(page) = redirect {
            tracing::warn!("No artwork at this address, redirecting to {}", page.path());
            navigator().replace(Route::from(page));
        }
    }));

    let OverlayResolution::Show { index } = resolution else {
        return rsx! {};
    };

    let current = Page::overlay(&gallery, file);
    let stepping = selection.clone();
    let on_step = move |index: usize| {
        if let Some(art) = stepping.get(index) {
            navigator().replace(Route::from(Page::overlay(&gallery, art.file())));
        }
    };
    let on_close = move |_: ()| match close_action(&current, background.peek().as_ref()) {
        CloseAction::GoBack => navigator().go_back(),
        CloseAction::Replace(page) => {
            navigator().replace(Route::from(page));
        }
    };

    rsx! {
        LightboxView {
            selection,
            index,
            timing: site.config.timing,
            on_step,
            on_close,
        }
    }
}
