//! Style values written to the DOM for one slider position

use crate::geometry::Percentage;

/// CSS `clip-path` keeping the overlay visible from its left edge up to the
/// given percentage of its width, over the full height.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClipPolygon {
    pub right_edge: Percentage,
}

impl ClipPolygon {
    pub fn reveal_to(right_edge: Percentage) -> Self {
        Self { right_edge }
    }

    pub fn to_css(&self) -> String {
        let p = self.right_edge.value();
        format!("polygon(0 0, {p}% 0, {p}% 100%, 0 100%)")
    }
}

/// Everything one drag update changes: the overlay clip and the handle offset.
#[derive(Debug, Clone, PartialEq)]
pub struct SliderFrame {
    pub percentage: Percentage,
    /// Value for the overlay's `clip-path` property
    pub clip_path: String,
    /// Value for the handle's `left` property
    pub handle_left: String,
}

impl SliderFrame {
    pub fn at(percentage: Percentage) -> Self {
        Self {
            percentage,
            clip_path: ClipPolygon::reveal_to(percentage).to_css(),
            handle_left: percentage.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_polygon_at_quarter() {
        let frame = SliderFrame::at(Percentage::new(25.0));
        assert_eq!(frame.clip_path, "polygon(0 0, 25% 0, 25% 100%, 0 100%)");
        assert_eq!(frame.handle_left, "25%");
    }

    #[test]
    fn test_polygon_fully_clipped() {
        let frame = SliderFrame::at(Percentage::MIN);
        assert_eq!(frame.clip_path, "polygon(0 0, 0% 0, 0% 100%, 0 100%)");
        assert_eq!(frame.handle_left, "0%");
    }

    #[test]
    fn test_polygon_fully_revealed() {
        let frame = SliderFrame::at(Percentage::MAX);
        assert_eq!(frame.clip_path, "polygon(0 0, 100% 0, 100% 100%, 0 100%)");
        assert_eq!(frame.handle_left, "100%");
    }
}
