//! WASM utilities for browser interop
//!
//! # Event Listener Cleanup Pattern
//!
//! A JavaScript listener backed by a `Closure` must keep the closure alive for
//! as long as it is attached. `closure.forget()` leaks it and leaves the
//! listener attached forever, so instead the closure lives in a struct that
//! removes the listener in `Drop`:
//!
//! ```ignore
//! // Listener is attached when EventListener is created
//! let listener = EventListener::on_window("keydown", callback);
//!
//! // Listener is removed when `listener` goes out of scope or is dropped
//! drop(listener);
//! ```
//!
//! With Dioxus, keep the listener in a `Signal<Option<EventListener>>` and set
//! it to `None` (or let `use_drop` take it) to detach.

use wasm_bindgen_x::prelude::*;

/// An event listener that removes itself when dropped.
pub struct EventListener {
    target: web_sys_x::EventTarget,
    event_name: &'static str,
    callback: Closure<dyn FnMut(wasm_bindgen_x::JsValue)>,
}

impl EventListener {
    /// Attaches `callback` to `target` for `event_name`.
    pub fn new(
        target: web_sys_x::EventTarget,
        event_name: &'static str,
        callback: impl FnMut(wasm_bindgen_x::JsValue) + 'static,
    ) -> Self {
        let callback: Closure<dyn FnMut(wasm_bindgen_x::JsValue)> =
            Closure::wrap(Box::new(callback));

        target
            .add_event_listener_with_callback(event_name, callback.as_ref().unchecked_ref())
            .ok();

        Self {
            target,
            event_name,
            callback,
        }
    }

    /// Listen on `window`. Returns `None` outside a browser.
    pub fn on_window(
        event_name: &'static str,
        callback: impl FnMut(wasm_bindgen_x::JsValue) + 'static,
    ) -> Option<Self> {
        let window = web_sys_x::window()?;
        Some(Self::new(window.into(), event_name, callback))
    }

    /// Listen on `document`. Returns `None` outside a browser.
    pub fn on_document(
        event_name: &'static str,
        callback: impl FnMut(wasm_bindgen_x::JsValue) + 'static,
    ) -> Option<Self> {
        let document = web_sys_x::window()?.document()?;
        Some(Self::new(document.into(), event_name, callback))
    }
}

impl Drop for EventListener {
    fn drop(&mut self) {
        let _ = self.target.remove_event_listener_with_callback(
            self.event_name,
            self.callback.as_ref().unchecked_ref(),
        );
    }
}

/// Hides body overflow while alive and restores the previous value on drop.
pub struct ScrollLock {
    body: web_sys_x::HtmlElement,
    previous: String,
}

impl ScrollLock {
    pub fn engage() -> Option<Self> {
        let body = web_sys_x::window()?.document()?.body()?;
        let style = body.style();
        let previous = style.get_property_value("overflow").unwrap_or_default();
        if style.set_property("overflow", "hidden").is_err() {
            tracing::warn!("Could not lock page scroll");
        }
        Some(Self { body, previous })
    }
}

impl Drop for ScrollLock {
    fn drop(&mut self) {
        let style = self.body.style();
        let _ = if self.previous.is_empty() {
            style.remove_property("overflow").map(|_| ())
        } else {
            style.set_property("overflow", &self.previous)
        };
    }
}

/// String property of a JS event, e.g. `key`
pub fn event_string(event: &wasm_bindgen_x::JsValue, name: &str) -> Option<String> {
    js_sys_x::Reflect::get(event, &name.into())
        .ok()
        .and_then(|v| v.as_string())
}

/// Numeric property of a JS event, e.g. `clientX`
pub fn event_number(event: &wasm_bindgen_x::JsValue, name: &str) -> Option<f64> {
    js_sys_x::Reflect::get(event, &name.into())
        .ok()
        .and_then(|v| v.as_f64())
}

/// Viewport width in CSS pixels
pub fn viewport_width() -> Option<f64> {
    web_sys_x::window()?.inner_width().ok()?.as_f64()
}

/// Milliseconds since the epoch, as the browser clock reports it
pub fn now_ms() -> f64 {
    js_sys_x::Date::now()
}

/// Scroll `container` horizontally so that `item` sits at its left edge.
/// Without an item the container scrolls back to the start.
pub fn scroll_to_item(
    container: &web_sys_x::Element,
    item: Option<&web_sys_x::Element>,
    smooth: bool,
) {
    let left = item
        .and_then(|el| el.dyn_ref::<web_sys_x::HtmlElement>())
        .map(|el| el.offset_left() as f64)
        .unwrap_or(0.0);

    let options = web_sys_x::ScrollToOptions::new();
    options.set_left(left);
    options.set_behavior(if smooth {
        web_sys_x::ScrollBehavior::Smooth
    } else {
        web_sys_x::ScrollBehavior::Auto
    });
    container.scroll_to_with_scroll_to_options(&options);
}

#[cfg(target_arch = "wasm32")]
pub async fn sleep_ms(ms: u64) {
    gloo_timers::future::TimeoutFuture::new(ms as u32).await;
}

#[cfg(not(target_arch = "wasm32"))]
pub async fn sleep_ms(ms: u64) {
    tokio::time::sleep(std::time::Duration::from_millis(ms)).await;
}

/// Resolves on the next animation frame
#[cfg(target_arch = "wasm32")]
pub async fn next_animation_frame() {
    let Some(window) = web_sys_x::window() else {
        return;
    };
    let promise = js_sys_x::Promise::new(&mut |resolve, _reject| {
        if window.request_animation_frame(&resolve).is_err() {
            let _ = resolve.call0(&JsValue::NULL);
        }
    });
    let _ = wasm_bindgen_futures_x::JsFuture::from(promise).await;
}

#[cfg(not(target_arch = "wasm32"))]
pub async fn next_animation_frame() {
    sleep_ms(16).await;
}
