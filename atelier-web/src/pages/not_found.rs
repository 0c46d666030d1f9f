use dioxus::prelude::*;

use crate::Route;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = format!("/{}", segments.join("/"));

    rsx! {
        section { class: "flex min-h-screen flex-col items-center justify-center gap-4 bg-white",
            p { class: "text-sm text-gray-600", "Nothing lives at {path}" }
            Link { class: "text-xs tracking-widest text-black underline", to: Route::Home {}, "HOME" }
        }
    }
}
