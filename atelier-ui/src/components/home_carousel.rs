//! Full-viewport home carousel
//!
//! Slides advance on a fixed interval and wrap in both directions. Clicking
//! the left half of the viewport goes back, the right half goes forward, and
//! the chevron on the side under the pointer is revealed while it hovers.

use std::sync::Arc;

use atelier_common::{HomeCarousel, PointerSide, ResolvedArtwork, Timing};
use dioxus::prelude::*;
use dioxus_core::{Runtime, RuntimeGuard, Task};

use crate::components::icons::{ChevronLeftIcon, ChevronRightIcon};
use crate::wasm_utils::{event_number, sleep_ms, viewport_width, EventListener};

#[component]
pub fn HomeCarouselView(artworks: Vec<Arc<ResolvedArtwork>>, timing: Timing) -> Element {
    let len = artworks.len();
    let mut carousel = use_signal(|| HomeCarousel::new(len));
    let mut last_len = use_signal(|| len);

    if len != *last_len.peek() {
        last_len.set(len);
        carousel.set(HomeCarousel::new(len));
    }

    let mut advance_task = use_signal(|| None::<Task>);
    let mut listeners: Signal<Vec<EventListener>> = use_signal(Vec::new);

    use_effect(move || {
        if !carousel.peek().should_auto_advance() {
            return;
        }
        let period = timing.home_advance_ms;
        let task = spawn(async move {
            loop {
                sleep_ms(period).await;
                carousel.write().advance();
            }
        });
        advance_task.set(Some(task));

        // Pointer events arrive from wasm-bindgen outside the Dioxus runtime
        let runtime = Runtime::current();
        let leave_runtime = runtime.clone();
        let mut attached = Vec::new();
        attached.extend(EventListener::on_window("mousemove", move |event| {
            let _guard = RuntimeGuard::new(runtime.clone());
            let (Some(x), Some(width)) = (event_number(&event, "clientX"), viewport_width())
            else {
                return;
            };
            let side = PointerSide::of(x, width);
            let unchanged = carousel
                .try_peek()
                .map(|state| state.shows_affordance(side))
                .unwrap_or(true);
            if unchanged {
                return;
            }
            if let Ok(mut state) = carousel.try_write() {
                state.pointer_moved(x, width);
            }
        }));
        attached.extend(EventListener::on_document("mouseleave", move |_| {
            let _guard = RuntimeGuard::new(leave_runtime.clone());
            if let Ok(mut state) = carousel.try_write() {
                state.pointer_left();
            }
        }));
        listeners.set(attached);
    });

    use_drop(move || {
        if let Some(task) = advance_task.write().take() {
            task.cancel();
        }
        drop(std::mem::take(&mut *listeners.write()));
    });

    let (current, opacities, show_left, show_right) = {
        let state = carousel.read();
        (
            state.index(),
            (0..len).map(|i| state.slide_opacity(i)).collect::<Vec<_>>(),
            state.shows_affordance(PointerSide::Left),
            state.shows_affordance(PointerSide::Right),
        )
    };
    let Some(current) = current else {
        return rsx! {
            div { class: "h-screen w-screen bg-black" }
        };
    };
    let caption = artworks.get(current).map(|art| {
        format!(
            "{} / {}",
            art.artwork.kind.to_uppercase(),
            art.artwork.year
        )
    });

    rsx! {
        div {
            class: "cursor-pointer bg-black",
            style: "position: relative; width: 100vw; height: 100vh; overflow: hidden;",
            onclick: move |evt: MouseEvent| {
                let x = evt.client_coordinates().x;
                let Some(width) = viewport_width() else {
                    return;
                };
                carousel.write().click(x, width);
            },

            for (art , opacity) in artworks.iter().zip(opacities) {
                img {
                    key: "{art.file()}",
                    src: "{art.src}",
                    alt: "{art.artwork.title}",
                    style: "position: absolute; inset: 0; width: 100%; height: 100%; object-fit: cover; opacity: {opacity}; transition: opacity 1000ms ease;",
                }
            }

            div {
                class: "pointer-events-none absolute left-6 top-1/2 -translate-y-1/2 text-white",
                style: if show_left { "opacity: 1; transition: opacity 300ms ease;" } else { "opacity: 0; transition: opacity 300ms ease;" },
                ChevronLeftIcon { class: "w-12 h-12", stroke_width: "1" }
            }
            div {
                class: "pointer-events-none absolute right-6 top-1/2 -translate-y-1/2 text-white",
                style: if show_right { "opacity: 1; transition: opacity 300ms ease;" } else { "opacity: 0; transition: opacity 300ms ease;" },
                ChevronRightIcon { class: "w-12 h-12", stroke_width: "1" }
            }

            if let Some(caption) = caption {
                div { class: "absolute bottom-6 left-6 text-xs tracking-widest text-white/80",
                    "{caption}"
                }
            }
        }
    }
}
