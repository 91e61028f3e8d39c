use std::fmt;

/// Horizontal extent of a slider container, relative to the viewport.
///
/// Sampled fresh on every move event so scrolling and layout changes are
/// always reflected.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ContainerRect {
    pub left: f64,
    pub width: f64,
}

impl ContainerRect {
    pub fn new(left: f64, width: f64) -> Self {
        Self { left, width }
    }

    /// A container with no usable width cannot map a pointer to a percentage.
    pub fn is_degenerate(&self) -> bool {
        !self.left.is_finite() || !self.width.is_finite() || self.width <= 0.0
    }

    /// Pointer offset from the left edge, pinned to `[0, width]`.
    pub fn offset_of(&self, client_x: f64) -> f64 {
        (client_x - self.left).clamp(0.0, self.width)
    }

    /// Map a viewport x coordinate to a percentage of the container width.
    ///
    /// Returns `None` for degenerate containers (zero, negative or non-finite
    /// width) or a non-finite pointer coordinate.
    pub fn percentage_at(&self, client_x: f64) -> Option<Percentage> {
        if self.is_degenerate() || !client_x.is_finite() {
            return None;
        }
        let x = self.offset_of(client_x);
        Some(Percentage::new((x / self.width) * 100.0))
    }
}

/// A position along the container width, always within `[0, 100]`.
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd)]
pub struct Percentage(f64);

impl Percentage {
    pub const MIN: Percentage = Percentage(0.0);
    pub const MAX: Percentage = Percentage(100.0);

    /// Clamp into range. NaN collapses to 0.
    pub fn new(value: f64) -> Self {
        if value.is_nan() {
            return Self::MIN;
        }
        // `+ 0.0` turns a negative zero into a positive one so it never renders as "-0%"
        Self(value.clamp(0.0, 100.0) + 0.0)
    }

    pub fn value(self) -> f64 {
        self.0
    }
}

impl fmt::Display for Percentage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset_clamps_left_of_container() {
        let rect = ContainerRect::new(100.0, 200.0);
        assert_eq!(rect.offset_of(40.0), 0.0);
        assert_eq!(rect.percentage_at(40.0), Some(Percentage::MIN));
    }

    #[test]
    fn test_offset_clamps_right_of_container() {
        let rect = ContainerRect::new(100.0, 200.0);
        assert_eq!(rect.offset_of(400.0), 200.0);
        assert_eq!(rect.percentage_at(400.0), Some(Percentage::MAX));
    }

    #[test]
    fn test_midpoint_is_fifty_percent() {
        let rect = ContainerRect::new(100.0, 200.0);
        assert_eq!(rect.percentage_at(200.0).map(Percentage::value), Some(50.0));
    }

    #[test]
    fn test_quarter_position() {
        let rect = ContainerRect::new(100.0, 200.0);
        assert_eq!(rect.percentage_at(150.0).map(Percentage::value), Some(25.0));
    }

    #[test]
    fn test_edges_are_inclusive() {
        let rect = ContainerRect::new(10.0, 80.0);
        assert_eq!(rect.percentage_at(10.0), Some(Percentage::MIN));
        assert_eq!(rect.percentage_at(90.0), Some(Percentage::MAX));
    }

    #[test]
    fn test_zero_width_has_no_percentage() {
        let rect = ContainerRect::new(100.0, 0.0);
        assert!(rect.is_degenerate());
        assert_eq!(rect.percentage_at(150.0), None);
    }

    #[test]
    fn test_non_finite_inputs_have_no_percentage() {
        assert_eq!(ContainerRect::new(0.0, f64::NAN).percentage_at(1.0), None);
        assert_eq!(ContainerRect::new(0.0, -5.0).percentage_at(1.0), None);
        assert_eq!(ContainerRect::new(0.0, 100.0).percentage_at(f64::INFINITY), None);
    }

    #[test]
    fn test_percentage_clamps_and_normalizes() {
        assert_eq!(Percentage::new(-3.0), Percentage::MIN);
        assert_eq!(Percentage::new(250.0), Percentage::MAX);
        assert_eq!(Percentage::new(f64::NAN), Percentage::MIN);
        assert_eq!(Percentage::new(-0.0).to_string(), "0%");
    }

    #[test]
    fn test_percentage_display() {
        assert_eq!(Percentage::new(25.0).to_string(), "25%");
        assert_eq!(Percentage::new(12.5).to_string(), "12.5%");
        assert_eq!(Percentage::MAX.to_string(), "100%");
    }
}
