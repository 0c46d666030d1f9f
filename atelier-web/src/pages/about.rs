use std::rc::Rc;

use dioxus::prelude::*;

use crate::site::Site;

#[component]
pub fn About() -> Element {
    let site = use_context::<Rc<Site>>();

    rsx! {
        section { class: "min-h-screen bg-white px-[50px] pt-24",
            h1 { class: "mb-6 text-xs tracking-widest text-gray-500", "ABOUT" }
            p { class: "max-w-xl text-sm leading-relaxed text-gray-800",
                "Paintings and sketches by {site.config.artist_name}, arranged by year and medium."
            }
        }
    }
}
