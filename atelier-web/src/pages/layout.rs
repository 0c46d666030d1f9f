//! Site layout
//!
//! Renders the navigation bar and the page chosen by the render plan instead
//! of the router outlet. While an overlay is open over a gallery, the gallery
//! stays in the base slot untouched and the overlay is drawn on top, so
//! closing it lands back on the same scroll position.

use std::rc::Rc;

use atelier_common::{keeps_background, MenuEntry, Page, RenderPlan};
use atelier_ui::NavBarView;
use dioxus::prelude::*;

use super::{About, Home, NotFound, PaintingOverlay, PaintingYear, Sketch, SketchOverlay};
use crate::site::Site;
use crate::Route;

/// The gallery an overlay was opened from, kept in memory only
#[derive(Clone, Copy)]
pub struct BackgroundPage(pub Signal<Option<Page>>);

#[component]
pub fn SiteLayout() -> Element {
    let site = use_context::<Rc<Site>>();
    let route = use_route::<Route>();
    let current = Page::from(&route);
    let BackgroundPage(mut background) =
        use_context_provider(|| BackgroundPage(Signal::new(None)));

    // Leaving the overlay for any other page drops the background for good
    if !keeps_background(&current) && background.peek().is_some() {
        background.set(None);
    }

    let plan = RenderPlan::resolve(&current, background.read().as_ref());
    let theme = plan.theme();
    let menus = MenuEntry::all(&site.config);

    rsx! {
        document::Title { "{site.config.artist_name}" }
        NavBarView {
            artist_name: site.config.artist_name.clone(),
            menus,
            links: site.config.links.clone(),
            theme,
            on_navigate: move |page: Page| {
                tracing::debug!("Navigating to {}", page.path());
                navigator().push(Route::from(page));
            },
        }
        main { PageView { page: plan.base } }
        if let Some(overlay) = plan.overlay {
            PageView { page: overlay }
        }
    }
}

#[component]
fn PageView(page: Page) -> Element {
    match page {
        Page::Home => rsx! { Home {} },
        Page::PaintingYear { year } => rsx! { PaintingYear { year } },
        Page::PaintingOverlay { year, file } => rsx! { PaintingOverlay { year, file } },
        Page::Sketch { kind } => rsx! { Sketch { kind } },
        Page::SketchOverlay { kind, file } => rsx! { SketchOverlay { kind, file } },
        Page::About => rsx! { About {} },
        Page::NotFound { segments } => rsx! { NotFound { segments } },
    }
}
