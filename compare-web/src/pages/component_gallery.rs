use crate::{AFTER_IMAGE, BEFORE_IMAGE};
use compare_common::Percentage;
use compare_ui::BeforeAfterSlider;
use dioxus::prelude::*;

/// Sliders rendered by the `BeforeAfterSlider` component
#[component]
pub fn ComponentGallery() -> Element {
    let mut position = use_signal(|| Percentage::new(30.0));

    rsx! {
        section { class: "gallery",
            figure { class: "gallery-item",
                BeforeAfterSlider {
                    before_src: BEFORE_IMAGE.to_string(),
                    after_src: AFTER_IMAGE.to_string(),
                    initial_percentage: 30.0,
                    on_change: move |value: f64| position.set(Percentage::new(value)),
                }
                figcaption { "Revealed up to {position}" }
            }
            figure { class: "gallery-item",
                BeforeAfterSlider {
                    before_src: BEFORE_IMAGE.to_string(),
                    after_src: AFTER_IMAGE.to_string(),
                    before_alt: "Original".to_string(),
                    after_alt: "Restored".to_string(),
                }
                figcaption { "Default position" }
            }
        }
    }
}
