//! WASM utilities for browser interop
//!
//! # Listener lifetime
//!
//! A `Closure` handed to `addEventListener` must outlive the registration.
//! Instead of `closure.forget()`, which leaks the closure and leaves the
//! listener attached forever, [`EventListener`] owns the closure and detaches
//! it in `Drop`:
//!
//! ```ignore
//! let listener = EventListener::new(&document, "mouseup", callback);
//! // ... listener is live ...
//! drop(listener); // removed from the document
//! ```
//!
//! Keep listeners in the struct (or `Signal<Option<_>>`) whose lifetime should
//! bound them. The slider controller holds one per handle plus the two
//! document-wide ones.

use wasm_bindgen_x::prelude::*;

/// An event listener on any `EventTarget` that removes itself when dropped.
pub struct EventListener {
    target: web_sys_x::EventTarget,
    event_name: &'static str,
    callback: Closure<dyn FnMut(JsValue)>,
}

impl EventListener {
    /// Attach `callback` to `target` for `event_name`.
    pub fn new(
        target: &web_sys_x::EventTarget,
        event_name: &'static str,
        callback: impl FnMut(JsValue) + 'static,
    ) -> Self {
        let callback: Closure<dyn FnMut(JsValue)> = Closure::wrap(Box::new(callback));

        if target
            .add_event_listener_with_callback(event_name, callback.as_ref().unchecked_ref())
            .is_err()
        {
            tracing::warn!("Failed to attach {} listener", event_name);
        }

        Self {
            target: target.clone(),
            event_name,
            callback,
        }
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

/// Read `clientX` off a mouse event without requiring the `MouseEvent` binding.
pub fn client_x(event: &JsValue) -> Option<f64> {
    js_sys_x::Reflect::get(event, &"clientX".into())
        .ok()
        .and_then(|v| v.as_f64())
}

/// Cancel the browser's default action (text selection, image drag).
pub fn prevent_default(event: &JsValue) {
    if let Ok(prevent) = js_sys_x::Reflect::get(event, &"preventDefault".into()) {
        if let Some(func) = prevent.dyn_ref::<js_sys_x::Function>() {
            let _ = func.call0(event);
        }
    }
}

/// Render a thrown JS value as text for error messages.
pub fn js_error_text(value: &JsValue) -> String {
    value
        .as_string()
        .or_else(|| {
            js_sys_x::Reflect::get(value, &"message".into())
                .ok()
                .and_then(|m| m.as_string())
        })
        .unwrap_or_else(|| format!("{value:?}"))
}

/// The current window's document, if there is one.
pub fn document() -> Option<web_sys_x::Document> {
    web_sys_x::window().and_then(|w| w.document())
}
