//! compare-ui - Browser glue and components for before/after sliders
//!
//! Contains the page controller that enhances existing slider markup, the
//! DOM helpers it is built on, and a Dioxus component rendering the same
//! widget from props.

pub mod components;
pub mod controller;
pub mod dom;
pub mod wasm_utils;

pub use components::*;
pub use controller::{on_document_ready, SliderController};
pub use dom::SliderElements;
