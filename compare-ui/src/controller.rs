//! Page-level slider controller
//!
//! Enhances existing slider markup: finds every container, validates it and
//! wires mouse dragging. One `mousedown` listener per handle, plus a single
//! document-wide `mousemove` and `mouseup` shared by all sliders.

use crate::dom::{self, SliderElements};
use crate::wasm_utils::{client_x, prevent_default, EventListener};
use compare_common::{SliderError, SliderSelectors, SliderSet};
use std::cell::RefCell;
use std::rc::Rc;
use tracing::{debug, error, info, trace, warn};
use web_sys_x::{Document, DocumentReadyState};

/// Owns every bound slider and the listeners driving them.
///
/// Listeners are detached when the controller is dropped, so keep it alive
/// for as long as the sliders should respond.
pub struct SliderController {
    sliders: Rc<RefCell<SliderSet<SliderElements>>>,
    rejected: Vec<SliderError>,
    _listeners: Vec<EventListener>,
}

impl SliderController {
    /// Bind every well-formed slider in `document`.
    ///
    /// Malformed containers are skipped and kept in [`Self::rejected`]. Fails
    /// only when the selectors themselves are unusable.
    pub fn bind(document: &Document, selectors: &SliderSelectors) -> Result<Self, SliderError> {
        let discovery = dom::discover(document, selectors)?;
        let sliders: SliderSet<SliderElements> = discovery.bound.into_iter().collect();
        let sliders = Rc::new(RefCell::new(sliders));
        let mut listeners = Vec::with_capacity(sliders.borrow().len() + 2);

        for (index, slider) in sliders.borrow().iter().enumerate() {
            let shared = Rc::clone(&sliders);
            listeners.push(EventListener::new(
                &slider.elements().handle,
                "mousedown",
                move |event| {
                    prevent_default(&event);
                    if shared.borrow_mut().begin_drag(index) {
                        debug!("Drag started on slider {}", index);
                    }
                },
            ));
        }

        let shared = Rc::clone(&sliders);
        listeners.push(EventListener::new(document, "mousemove", move |event| {
            let Some(x) = client_x(&event) else {
                return;
            };
            let sliders = shared.borrow();
            let frames = sliders.drag_to(x, |elements| Some(elements.measure()));
            if frames.len() < sliders.dragging_count() {
                trace!("Skipped move over a slider container with no width");
            }
            for (elements, frame) in frames {
                if let Err(e) = elements.apply(&frame) {
                    warn!("Failed to update slider: {}", e);
                }
            }
        }));

        let shared = Rc::clone(&sliders);
        listeners.push(EventListener::new(document, "mouseup", move |_| {
            let released = shared.borrow_mut().release_all();
            if released > 0 {
                debug!("Drag ended on {} slider(s)", released);
            }
        }));

        info!(
            "Bound {} before/after slider(s), skipped {}",
            sliders.borrow().len(),
            discovery.rejected.len()
        );

        Ok(Self {
            sliders,
            rejected: discovery.rejected,
            _listeners: listeners,
        })
    }

    /// Bind once the document has finished parsing, using the page's
    /// selector config if it has one.
    ///
    /// `on_bound` receives the controller (or the reason binding failed). The
    /// returned listener, if any, must be kept until the document is ready.
    pub fn bind_when_ready(
        document: &Document,
        on_bound: impl FnOnce(Result<SliderController, SliderError>) + 'static,
    ) -> Option<EventListener> {
        let doc = document.clone();
        on_document_ready(document, move || {
            let result = dom::selectors_from_meta(&doc)
                .and_then(|selectors| SliderController::bind(&doc, &selectors));
            if let Err(ref e) = result {
                error!("Failed to initialize sliders: {}", e);
            }
            on_bound(result);
        })
    }

    /// Number of sliders that responded to dragging.
    pub fn bound_count(&self) -> usize {
        self.sliders.borrow().len()
    }

    /// Containers that failed validation and were not bound.
    pub fn rejected(&self) -> &[SliderError] {
        &self.rejected
    }
}

/// Run `ready` once the document's structure is parsed: immediately if that
/// already happened, otherwise on `DOMContentLoaded`.
pub fn on_document_ready(
    document: &Document,
    ready: impl FnOnce() + 'static,
) -> Option<EventListener> {
    if document.ready_state() != DocumentReadyState::Loading {
        ready();
        return None;
    }

    let mut ready = Some(ready);
    Some(EventListener::new(document, "DOMContentLoaded", move |_| {
        if let Some(ready) = ready.take() {
            ready();
        }
    }))
}
