use std::rc::Rc;

use atelier_ui::HomeCarouselView;
use dioxus::prelude::*;

use crate::site::Site;

#[component]
pub fn Home() -> Element {
    let site = use_context::<Rc<Site>>();

    rsx! {
        HomeCarouselView {
            artworks: site.catalog.all().to_vec(),
            timing: site.config.timing,
        }
    }
}
