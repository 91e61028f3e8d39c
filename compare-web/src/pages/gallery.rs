use crate::{AFTER_IMAGE, BEFORE_IMAGE};
use compare_ui::wasm_utils::{self, EventListener};
use compare_ui::SliderController;
use dioxus::prelude::*;
use tracing::{info, warn};

/// Captions for the statically rendered sliders
const CAPTIONS: [&str; 3] = ["Kitchen", "Living room", "Patio"];

/// Plain slider markup, wired up by `SliderController` once mounted.
///
/// The controller owns the listeners; dropping it from the signal on unmount
/// detaches them.
#[component]
pub fn Gallery() -> Element {
    let mut controller: Signal<Option<SliderController>> = use_signal(|| None);
    let mut pending_ready: Signal<Option<EventListener>> = use_signal(|| None);
    let mut status = use_signal(|| "Binding sliders...".to_string());

    use_effect(move || {
        let Some(document) = wasm_utils::document() else {
            return;
        };

        let pending = SliderController::bind_when_ready(&document, move |result| {
            match result {
                Ok(bound) => {
                    let skipped = bound.rejected().len();
                    if skipped > 0 {
                        warn!("Gallery has {} malformed slider(s)", skipped);
                        status.set(format!(
                            "{} slider(s) ready, {} skipped",
                            bound.bound_count(),
                            skipped
                        ));
                    } else {
                        info!("Gallery sliders ready");
                        status.set(format!("{} slider(s) ready", bound.bound_count()));
                    }
                    controller.set(Some(bound));
                }
                Err(e) => {
                    warn!("Gallery sliders unavailable: {}", e);
                    status.set(format!("Sliders unavailable: {e}"));
                }
            }
        });
        // Only set while the document is still loading; the callback runs
        // inside this listener, so it is left in place until unmount.
        pending_ready.set(pending);
    });

    rsx! {
        section { class: "gallery",
            p { class: "gallery-status", "{status}" }
            for caption in CAPTIONS {
                figure { key: "{caption}", class: "gallery-item",
                    div { class: "before-after-slider",
                        img {
                            class: "after",
                            src: "{AFTER_IMAGE}",
                            alt: "{caption} after",
                            draggable: "false",
                        }
                        img {
                            class: "before",
                            src: "{BEFORE_IMAGE}",
                            alt: "{caption} before",
                            draggable: "false",
                        }
                        div { class: "slider-handle",
                            div { class: "slider-handle-grip" }
                        }
                    }
                    figcaption { "{caption}" }
                }
            }
        }
    }
}
