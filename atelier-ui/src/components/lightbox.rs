//! Full-screen artwork lightbox
//!
//! The URL decides the target; this view decides what is on screen. A change
//! of target fades the current image out, swaps, and fades the new one in
//! once it has loaded. Load events from an image that has since been swapped
//! out carry a stale ticket and are ignored.

use atelier_common::{GallerySelection, Lightbox, LightboxPhase, Retarget, Step, Timing};
use dioxus::prelude::*;
use dioxus_core::{Runtime, RuntimeGuard, Task};

use crate::components::icons::{ChevronLeftIcon, ChevronRightIcon, XIcon};
use crate::wasm_utils::{
    event_string, next_animation_frame, sleep_ms, EventListener, ScrollLock,
};

#[component]
pub fn LightboxView(
    selection: GallerySelection,
    /// Target index within `selection`
    index: usize,
    timing: Timing,
    /// Called with the neighbour index on prev/next
    on_step: EventHandler<usize>,
    on_close: EventHandler<()>,
) -> Element {
    let len = selection.len();
    let mut lightbox = use_signal(Lightbox::new);
    let mut fade_task = use_signal(|| None::<Task>);

    if lightbox.peek().target() != Some(index) || lightbox.peek().len() != len {
        let outcome = lightbox.write().retarget(index, len);
        match outcome {
            Retarget::FadeOut => {
                if let Some(task) = fade_task.write().take() {
                    task.cancel();
                }
                let delay = timing.fade_out_ms;
                let task = spawn(async move {
                    sleep_ms(delay).await;
                    lightbox.write().finish_fade();
                });
                fade_task.set(Some(task));
            }
            Retarget::Resume => {
                if let Some(task) = fade_task.write().take() {
                    task.cancel();
                }
            }
            Retarget::ShowNow | Retarget::Unchanged => {}
        }
    }

    let mut scroll_lock = use_signal(|| None::<ScrollLock>);
    let mut keydown = use_signal(|| None::<EventListener>);

    use_effect(move || {
        scroll_lock.set(ScrollLock::engage());

        // Keyboard events arrive from wasm-bindgen outside the Dioxus runtime
        let runtime = Runtime::current();
        keydown.set(EventListener::on_window("keydown", move |event| {
            let _guard = RuntimeGuard::new(runtime.clone());
            let Some(key) = event_string(&event, "key") else {
                return;
            };
            let step = match key.as_str() {
                "Escape" => {
                    on_close.call(());
                    return;
                }
                "ArrowLeft" => Step::Previous,
                "ArrowRight" => Step::Next,
                _ => return,
            };
            let neighbour = lightbox.try_read().ok().and_then(|lb| lb.step(step));
            if let Some(neighbour) = neighbour {
                on_step.call(neighbour);
            }
        }));
    });

    use_drop(move || {
        if let Some(task) = fade_task.write().take() {
            task.cancel();
        }
        keydown.write().take();
        scroll_lock.write().take();
        lightbox.write().close();
    });

    let (shown, ticket, phase, previous, next) = {
        let lb = lightbox.read();
        (
            lb.displayed(),
            lb.ticket(),
            lb.phase(),
            lb.step(Step::Previous),
            lb.step(Step::Next),
        )
    };
    let Some(art) = shown.and_then(|i| selection.get(i)).cloned() else {
        return rsx! {};
    };

    let opacity = if phase == LightboxPhase::Visible { 1 } else { 0 };
    let transition_ms = if phase == LightboxPhase::FadingOut {
        timing.fade_out_ms
    } else {
        timing.fade_in_ms
    };
    let fallback_ms = timing.load_fallback_ms;
    let counter = format!("{} / {}", index + 1, len);

    rsx! {
        div { class: "fixed inset-0 z-50 flex items-center justify-center bg-white",

            button {
                class: "fixed right-6 top-6 z-10 text-black/70 transition-colors hover:text-black",
                aria_label: "Close",
                onclick: move |e| {
                    e.stop_propagation();
                    on_close.call(());
                },
                XIcon { class: "w-7 h-7" }
            }

            if let Some(previous) = previous {
                button {
                    class: "fixed left-4 top-1/2 z-10 -translate-y-1/2 text-black/70 hover:text-black",
                    aria_label: "Previous",
                    onclick: move |e| {
                        e.stop_propagation();
                        on_step.call(previous);
                    },
                    ChevronLeftIcon { class: "w-10 h-10", stroke_width: "1" }
                }
            }

            if let Some(next) = next {
                button {
                    class: "fixed right-4 top-1/2 z-10 -translate-y-1/2 text-black/70 hover:text-black",
                    aria_label: "Next",
                    onclick: move |e| {
                        e.stop_propagation();
                        on_step.call(next);
                    },
                    ChevronRightIcon { class: "w-10 h-10", stroke_width: "1" }
                }
            }

            figure { class: "flex flex-col items-center",
                img {
                    key: "{art.file()}",
                    src: "{art.src}",
                    alt: "{art.artwork.title}",
                    class: "max-h-[80vh] max-w-[85vw] object-contain",
                    style: "opacity: {opacity}; transition: opacity {transition_ms}ms ease;",
                    onload: move |_| {
                        let Some(ticket) = ticket else {
                            return;
                        };
                        if !lightbox.peek().is_current(ticket) {
                            tracing::debug!("Ignoring stale image load");
                            return;
                        }
                        spawn(async move {
                            next_animation_frame().await;
                            lightbox.write().reveal(ticket);
                        });
                        spawn(async move {
                            sleep_ms(fallback_ms).await;
                            lightbox.write().reveal(ticket);
                        });
                    },
                }
                figcaption { class: "mt-4 text-xs text-gray-600",
                    span { class: "italic", "{art.artwork.title}" }
                    if !art.artwork.medium.is_empty() {
                        span { ", {art.artwork.medium}" }
                    }
                }
            }

            div { class: "fixed bottom-6 left-1/2 -translate-x-1/2 text-xs tracking-widest text-gray-500",
                "{counter}"
            }
        }
    }
}
