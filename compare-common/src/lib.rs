//! compare-common - Pure model for before/after comparison sliders
//!
//! No DOM access here: geometry, drag state and the style values to write
//! are computed from plain numbers so every host shares the same behavior.

pub mod discovery;
pub mod drag;
pub mod error;
pub mod frame;
pub mod geometry;
pub mod selectors;

pub use discovery::Discovery;
pub use drag::{DragState, SliderInstance, SliderSet};
pub use error::{expect_single, Role, SliderError};
pub use frame::{ClipPolygon, SliderFrame};
pub use geometry::{ContainerRect, Percentage};
pub use selectors::SliderSelectors;
