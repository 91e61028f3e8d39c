use serde::Deserialize;

use crate::error::SliderError;

pub const DEFAULT_CONTAINER_SELECTOR: &str = ".before-after-slider";
pub const DEFAULT_OVERLAY_SELECTOR: &str = ".before";
pub const DEFAULT_HANDLE_SELECTOR: &str = ".slider-handle";

/// CSS selectors describing the slider markup.
///
/// `container` is queried document-wide; `overlay` and `handle` are queried
/// inside each container. Any field left out of a JSON config keeps its
/// default.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SliderSelectors {
    pub container: String,
    pub overlay: String,
    pub handle: String,
}

impl Default for SliderSelectors {
    fn default() -> Self {
        Self {
            container: DEFAULT_CONTAINER_SELECTOR.to_string(),
            overlay: DEFAULT_OVERLAY_SELECTOR.to_string(),
            handle: DEFAULT_HANDLE_SELECTOR.to_string(),
        }
    }
}

impl SliderSelectors {
    pub fn from_json(json: &str) -> Result<Self, SliderError> {
        let selectors: Self =
            serde_json::from_str(json).map_err(|e| SliderError::Config(e.to_string()))?;
        selectors.validate()?;
        Ok(selectors)
    }

    /// Selectors for a page given its config meta tag's `content`, if any.
    pub fn from_meta_content(content: Option<&str>) -> Result<Self, SliderError> {
        match content {
            Some(json) => Self::from_json(json),
            None => Ok(Self::default()),
        }
    }

    /// Reject blank selectors up front; the browser would throw on them anyway.
    pub fn validate(&self) -> Result<(), SliderError> {
        for selector in [&self.container, &self.overlay, &self.handle] {
            if selector.trim().is_empty() {
                return Err(SliderError::InvalidSelector {
                    selector: selector.clone(),
                    reason: "selector is empty".to_string(),
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_markup_classes() {
        let selectors = SliderSelectors::default();
        assert_eq!(selectors.container, ".before-after-slider");
        assert_eq!(selectors.overlay, ".before");
        assert_eq!(selectors.handle, ".slider-handle");
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let selectors = SliderSelectors::from_json(r#"{"container": ".compare"}"#).unwrap();
        assert_eq!(selectors.container, ".compare");
        assert_eq!(selectors.overlay, DEFAULT_OVERLAY_SELECTOR);
        assert_eq!(selectors.handle, DEFAULT_HANDLE_SELECTOR);
    }

    #[test]
    fn test_empty_object_is_default() {
        assert_eq!(
            SliderSelectors::from_json("{}").unwrap(),
            SliderSelectors::default()
        );
    }

    #[test]
    fn test_malformed_json_is_config_error() {
        let err = SliderSelectors::from_json("{container").unwrap_err();
        assert!(matches!(err, SliderError::Config(_)));
    }

    #[test]
    fn test_missing_meta_tag_uses_defaults() {
        assert_eq!(
            SliderSelectors::from_meta_content(None).unwrap(),
            SliderSelectors::default()
        );
    }

    #[test]
    fn test_meta_content_overrides_selectors() {
        let selectors =
            SliderSelectors::from_meta_content(Some(r#"{"handle": ".grip"}"#)).unwrap();
        assert_eq!(selectors.handle, ".grip");
        assert_eq!(selectors.container, DEFAULT_CONTAINER_SELECTOR);
    }

    #[test]
    fn test_empty_meta_content_is_config_error() {
        let err = SliderSelectors::from_meta_content(Some("")).unwrap_err();
        assert!(matches!(err, SliderError::Config(_)));
    }

    #[test]
    fn test_blank_selector_rejected() {
        let err = SliderSelectors::from_json(r#"{"handle": "  "}"#).unwrap_err();
        assert!(matches!(err, SliderError::InvalidSelector { .. }));
    }
}
