//! Before/after comparison slider component
//!
//! Renders the same markup the page controller enhances, but keeps the drag
//! state in signals. Document-level mouse listeners only exist while a drag
//! is in progress.

use std::sync::atomic::{AtomicU64, Ordering};

use crate::dom::rect_by_id;
use crate::wasm_utils::{self, client_x, EventListener};
use compare_common::{Percentage, SliderFrame, SliderInstance};
use dioxus::prelude::*;

/// Counter for generating unique container IDs
static SLIDER_ID_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Container class for component-rendered sliders. Distinct from the page
/// controller's default so the two never bind the same markup.
pub const COMPONENT_CONTAINER_CLASS: &str = "compare-slider";

/// Cleanup handle for drag operation listeners
struct DragListeners {
    _mousemove: EventListener,
    _mouseup: EventListener,
}

/// Inline `style` values for the overlay and the handle at `percentage`.
fn inline_styles(percentage: Percentage) -> (String, String) {
    let frame = SliderFrame::at(percentage);
    (
        format!("clip-path: {};", frame.clip_path),
        format!("left: {};", frame.handle_left),
    )
}

/// Two stacked images with a handle that reveals the lower one.
#[component]
pub fn BeforeAfterSlider(
    /// Top image, clipped to the left of the handle
    before_src: String,
    /// Bottom image, revealed to the right of the handle
    after_src: String,
    #[props(default = "Before".to_string())] before_alt: String,
    #[props(default = "After".to_string())] after_alt: String,
    /// Starting handle position (0 - 100), clamped into range.
    /// Only read on first render; later changes to this prop are ignored.
    #[props(default = 50.0)]
    initial_percentage: f64,
    /// Additional CSS classes for the container
    #[props(default)]
    class: String,
    /// Called with the new percentage after each drag update
    #[props(default)]
    on_change: Option<EventHandler<f64>>,
) -> Element {
    let container_id = use_hook(|| {
        let id = SLIDER_ID_COUNTER.fetch_add(1, Ordering::Relaxed);
        format!("compare-slider-{}", id)
    });
    let mut slider = use_signal({
        let container_id = container_id.clone();
        move || SliderInstance::new(container_id)
    });
    let mut percentage = use_signal(|| Percentage::new(initial_percentage));
    let mut drag_listeners: Signal<Option<DragListeners>> = use_signal(|| None);

    // Document-level mouse listeners while dragging
    use_effect(move || {
        if !slider.read().is_dragging() {
            drag_listeners.set(None);
            return;
        }

        let Some(document) = wasm_utils::document() else {
            return;
        };

        let mousemove = EventListener::new(&document, "mousemove", move |e| {
            let Some(x) = client_x(&e) else {
                return;
            };
            let frame = slider.read().drag_to(x, |id| rect_by_id(id));
            if let Some(frame) = frame {
                percentage.set(frame.percentage);
                if let Some(on_change) = on_change {
                    on_change.call(frame.percentage.value());
                }
            }
        });

        let mouseup = EventListener::new(&document, "mouseup", move |_| {
            slider.write().release();
        });

        drag_listeners.set(Some(DragListeners {
            _mousemove: mousemove,
            _mouseup: mouseup,
        }));
    });

    let (overlay_style, handle_style) = inline_styles(percentage());
    let is_dragging = slider.read().is_dragging();

    rsx! {
        div {
            id: "{container_id}",
            class: format!(
                "{} {} {}",
                COMPONENT_CONTAINER_CLASS,
                if is_dragging { "is-dragging" } else { "" },
                class,
            ),
            img {
                class: "after",
                src: "{after_src}",
                alt: "{after_alt}",
                draggable: "false",
            }
            img {
                class: "before",
                src: "{before_src}",
                alt: "{before_alt}",
                draggable: "false",
                style: "{overlay_style}",
            }
            div {
                class: "slider-handle",
                style: "{handle_style}",
                onmousedown: move |e: MouseEvent| {
                    e.prevent_default();
                    slider.write().begin_drag();
                },
                div { class: "slider-handle-grip" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use compare_common::selectors::DEFAULT_CONTAINER_SELECTOR;

    #[test]
    fn test_initial_position_above_range_renders_fully_revealed() {
        let (overlay, handle) = inline_styles(Percentage::new(150.0));
        assert_eq!(overlay, "clip-path: polygon(0 0, 100% 0, 100% 100%, 0 100%);");
        assert_eq!(handle, "left: 100%;");
    }

    #[test]
    fn test_initial_position_below_range_renders_fully_clipped() {
        let (overlay, handle) = inline_styles(Percentage::new(-20.0));
        assert_eq!(overlay, "clip-path: polygon(0 0, 0% 0, 0% 100%, 0 100%);");
        assert_eq!(handle, "left: 0%;");
    }

    #[test]
    fn test_default_position_is_centered() {
        let (overlay, handle) = inline_styles(Percentage::new(50.0));
        assert_eq!(overlay, "clip-path: polygon(0 0, 50% 0, 50% 100%, 0 100%);");
        assert_eq!(handle, "left: 50%;");
    }

    #[test]
    fn test_container_class_differs_from_page_selector() {
        assert_ne!(
            format!(".{COMPONENT_CONTAINER_CLASS}"),
            DEFAULT_CONTAINER_SELECTOR
        );
    }
}
