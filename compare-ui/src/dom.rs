//! Slider discovery and style writes against the live DOM

use crate::wasm_utils::js_error_text;
use compare_common::{
    expect_single, ContainerRect, Discovery, Role, SliderError, SliderFrame, SliderSelectors,
};
use tracing::error;
use wasm_bindgen_x::JsCast;
use web_sys_x::{Document, Element, HtmlElement, NodeList};

/// `<meta name="compare-slider-selectors" content="{...}">` overrides the
/// default selectors for a page.
pub const SELECTORS_META_NAME: &str = "compare-slider-selectors";

/// The three elements making up one slider on the page.
#[derive(Debug, Clone)]
pub struct SliderElements {
    pub container: Element,
    pub overlay: HtmlElement,
    pub handle: HtmlElement,
}

impl SliderElements {
    /// Resolve the overlay and handle inside `container`, which must have
    /// exactly one of each.
    pub fn from_container(
        index: usize,
        container: Element,
        selectors: &SliderSelectors,
    ) -> Result<Self, SliderError> {
        let overlay = single_child(index, &container, &selectors.overlay, Role::Overlay)?;
        let handle = single_child(index, &container, &selectors.handle, Role::Handle)?;
        Ok(Self {
            container,
            overlay,
            handle,
        })
    }

    /// Current container rect; never cached.
    pub fn measure(&self) -> ContainerRect {
        rect_of(&self.container)
    }

    pub fn apply(&self, frame: &SliderFrame) -> Result<(), SliderError> {
        self.overlay
            .style()
            .set_property("clip-path", &frame.clip_path)
            .map_err(|e| SliderError::Dom(js_error_text(&e)))?;
        self.handle
            .style()
            .set_property("left", &frame.handle_left)
            .map_err(|e| SliderError::Dom(js_error_text(&e)))?;
        Ok(())
    }
}

pub fn rect_of(element: &Element) -> ContainerRect {
    let rect = element.get_bounding_client_rect();
    ContainerRect::new(rect.left(), rect.width())
}

/// Rect of the element with `id`, if it is in the document.
pub fn rect_by_id(id: &str) -> Option<ContainerRect> {
    let document = crate::wasm_utils::document()?;
    document.get_element_by_id(id).map(|el| rect_of(&el))
}

/// Find and validate every slider in `document`.
///
/// Each container is validated on its own: a malformed one is logged and
/// left out of `bound`, the others still bind. Only an unusable container
/// selector fails the whole call.
pub fn discover(
    document: &Document,
    selectors: &SliderSelectors,
) -> Result<Discovery<SliderElements>, SliderError> {
    selectors.validate()?;

    let containers = document
        .query_selector_all(&selectors.container)
        .map_err(|e| invalid_selector(&selectors.container, &e))?;

    let discovery: Discovery<SliderElements> = (0..containers.length())
        .map(|index| {
            let container = nth_as::<Element>(&containers, index)?;
            SliderElements::from_container(index as usize, container, selectors)
        })
        .collect();

    for e in &discovery.rejected {
        error!("Skipping slider: {}", e);
    }
    Ok(discovery)
}

/// Selectors from the page's config meta tag, or the defaults if there is none.
pub fn selectors_from_meta(document: &Document) -> Result<SliderSelectors, SliderError> {
    let query = format!("meta[name=\"{SELECTORS_META_NAME}\"]");
    let meta = document
        .query_selector(&query)
        .map_err(|e| invalid_selector(&query, &e))?;

    let content = meta.and_then(|m| m.get_attribute("content"));
    SliderSelectors::from_meta_content(content.as_deref())
}

fn single_child(
    index: usize,
    container: &Element,
    selector: &str,
    role: Role,
) -> Result<HtmlElement, SliderError> {
    let matches = container
        .query_selector_all(selector)
        .map_err(|e| invalid_selector(selector, &e))?;
    expect_single(index, role, matches.length())?;
    nth_as::<HtmlElement>(&matches, 0)
}

fn nth_as<T: JsCast>(list: &NodeList, index: u32) -> Result<T, SliderError> {
    list.item(index)
        .ok_or_else(|| SliderError::Dom(format!("node {index} vanished during discovery")))?
        .dyn_into::<T>()
        .map_err(|_| SliderError::Dom(format!("node {index} is not an HTML element")))
}

fn invalid_selector(selector: &str, err: &wasm_bindgen_x::JsValue) -> SliderError {
    SliderError::InvalidSelector {
        selector: selector.to_string(),
        reason: js_error_text(err),
    }
}
