pub mod pages;
pub mod site;

use std::rc::Rc;

use atelier_common::Page;
use dioxus::prelude::*;
use pages::{
    About, Home, NotFound, PaintingOverlay, PaintingYear, SiteLayout, Sketch, SketchOverlay,
};
use site::Site;

pub const MAIN_CSS: Asset = asset!("/assets/main.css");
pub const TAILWIND_CSS: Asset = asset!("/assets/tailwind.css");

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(SiteLayout)]
    #[route("/")]
    Home {},
    #[route("/painting/:year")]
    PaintingYear { year: String },
    #[route("/painting/:year/:file")]
    PaintingOverlay { year: String, file: String },
    #[route("/sketch/:kind")]
    Sketch { kind: String },
    #[route("/sketch/:kind/:file")]
    SketchOverlay { kind: String, file: String },
    #[route("/about")]
    About {},
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

impl From<&Route> for Page {
    fn from(route: &Route) -> Self {
        match route.clone() {
            Route::Home {} => Page::Home,
            Route::PaintingYear { year } => Page::PaintingYear { year },
            Route::PaintingOverlay { year, file } => Page::PaintingOverlay { year, file },
            Route::Sketch { kind } => Page::Sketch { kind },
            Route::SketchOverlay { kind, file } => Page::SketchOverlay { kind, file },
            Route::About {} => Page::About,
            Route::NotFound { segments } => Page::NotFound { segments },
        }
    }
}

impl From<Page> for Route {
    fn from(page: Page) -> Self {
        match page {
            Page::Home => Route::Home {},
            Page::PaintingYear { year } => Route::PaintingYear { year },
            Page::PaintingOverlay { year, file } => Route::PaintingOverlay { year, file },
            Page::Sketch { kind } => Route::Sketch { kind },
            Page::SketchOverlay { kind, file } => Route::SketchOverlay { kind, file },
            Page::About => Route::About {},
            Page::NotFound { segments } => Route::NotFound { segments },
        }
    }
}

#[component]
pub fn App() -> Element {
    use_context_provider(|| Rc::new(Site::load()));

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Link { rel: "stylesheet", href: TAILWIND_CSS }
        div { class: "min-h-screen", Router::<Route> {} }
    }
}

