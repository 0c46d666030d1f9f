//! Horizontal gallery strip
//!
//! One row of artworks for a year or medium. Prev/next controls appear on the
//! hovered side, the wheel pages one item at a time, and items fade in one by
//! one whenever the selection key changes.

use std::collections::HashMap;
use std::rc::Rc;

use atelier_common::{GallerySelection, PointerSide, StripCarousel, Timing, WheelOutcome};
use dioxus::prelude::*;
use dioxus_core::Task;

use crate::components::icons::{ChevronLeftIcon, ChevronRightIcon};
use crate::wasm_utils::{now_ms, scroll_to_item, sleep_ms, viewport_width};

#[component]
pub fn StripCarouselView(
    selection: GallerySelection,
    timing: Timing,
    /// Called with the index of the clicked artwork
    on_open: EventHandler<usize>,
) -> Element {
    let len = selection.len();
    let mut strip = use_signal(|| StripCarousel::new(len, timing.wheel_throttle_ms));
    let mut reveal_task = use_signal(|| None::<Task>);
    let mut hover = use_signal(|| None::<PointerSide>);
    let mut container: Signal<Option<Rc<MountedData>>> = use_signal(|| None);
    let mut items: Signal<HashMap<usize, Rc<MountedData>>> = use_signal(HashMap::new);

    // Only write when the key moved, so a plain rerender does not dirty the signal
    let key_changed = strip.peek().key() != Some(selection.key());
    if key_changed && strip.write().sync(selection.key(), len) {
        tracing::debug!("Strip reset for {} ({} items)", selection.key(), len);
        items.write().clear();

        if let Some(task) = reveal_task.write().take() {
            task.cancel();
        }
        let stagger = timing.reveal_stagger_ms;
        reveal_task.set(Some(spawn(async move {
            while strip.write().reveal_next() {
                sleep_ms(stagger).await;
            }
        })));

        if let Some(el) = container
            .peek()
            .as_ref()
            .and_then(|m| m.downcast::<web_sys_x::Element>().cloned())
        {
            scroll_to_item(&el, None, false);
        }
    }

    use_drop(move || {
        if let Some(task) = reveal_task.write().take() {
            task.cancel();
        }
    });

    let go_to = move |index: Option<usize>| {
        let Some(index) = index else {
            return;
        };
        let Some(el) = container
            .peek()
            .as_ref()
            .and_then(|m| m.downcast::<web_sys_x::Element>().cloned())
        else {
            return;
        };
        let item = items
            .peek()
            .get(&index)
            .and_then(|m| m.downcast::<web_sys_x::Element>().cloned());
        scroll_to_item(&el, item.as_ref(), true);
    };

    let state = strip.read().clone();
    let show_previous = state.can_previous() && hover() == Some(PointerSide::Left);
    let show_next = state.can_next() && hover() == Some(PointerSide::Right);

    if selection.is_empty() {
        return rsx! {
            div { class: "flex h-[70vh] items-center justify-center text-sm text-gray-400",
                "Nothing here yet"
            }
        };
    }

    rsx! {
        div {
            class: "relative",
            onmousemove: move |evt: MouseEvent| {
                let x = evt.client_coordinates().x;
                if let Some(width) = viewport_width() {
                    hover.set(Some(PointerSide::of(x, width)));
                }
            },
            onmouseleave: move |_| hover.set(None),

            div {
                class: "flex h-[70vh] gap-8 overflow-hidden pl-[50px]",
                onmounted: move |evt: MountedEvent| container.set(Some(evt.data())),
                onwheel: move |evt: WheelEvent| {
                    let delta = evt.delta().strip_units();
                    let amount = if delta.y.abs() >= delta.x.abs() { delta.y } else { delta.x };
                    let outcome = strip.write().wheel(amount, now_ms());
                    if let WheelOutcome::Stepped(index) = outcome {
                        go_to(Some(index));
                    }
                },

                for (i , art) in selection.iter().enumerate() {
                    {
                        let opacity = state.item_opacity(i);
                        // The last item spans the viewport so it can scroll to the left edge
                        let width = if i + 1 == len { "width: calc(100vw - 50px);" } else { "" };
                        rsx! {
                            figure {
                                key: "{selection.key()}/{art.file()}",
                                class: "flex h-full shrink-0 cursor-pointer flex-col",
                                style: "opacity: {opacity}; transition: opacity 500ms ease; {width}",
                                onmounted: move |evt: MountedEvent| {
                                    items.write().insert(i, evt.data());
                                },
                                onclick: move |_| on_open.call(i),
                                img {
                                    src: "{art.src}",
                                    alt: "{art.artwork.title}",
                                    class: "h-[90%] w-auto object-contain",
                                }
                                figcaption { class: "mt-2 text-xs text-gray-600",
                                    span { class: "italic", "{art.artwork.title}" }
                                    if !art.artwork.medium.is_empty() {
                                        span { ", {art.artwork.medium}" }
                                    }
                                }
                            }
                        }
                    }
                }
            }

            if show_previous {
                button {
                    class: "absolute left-2 top-1/2 -translate-y-1/2 text-black",
                    onclick: move |e| {
                        e.stop_propagation();
                        let moved = strip.write().previous();
                        go_to(moved);
                    },
                    ChevronLeftIcon { class: "w-10 h-10", stroke_width: "1" }
                }
            }
            if show_next {
                button {
                    class: "absolute right-2 top-1/2 -translate-y-1/2 text-black",
                    onclick: move |e| {
                        e.stop_propagation();
                        let moved = strip.write().next();
                        go_to(moved);
                    },
                    ChevronRightIcon { class: "w-10 h-10", stroke_width: "1" }
                }
            }
        }
    }
}
