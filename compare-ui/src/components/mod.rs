//! Shared UI components

pub mod before_after_slider;

pub use before_after_slider::{BeforeAfterSlider, COMPONENT_CONTAINER_CLASS};
