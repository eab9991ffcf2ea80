//! Activity arrows: a block-arrow glyph whose size encodes magnitude and whose
//! orientation and colour encode sign.

use crate::geometry::{transform_polygon, Point, Polygon, Transform};
use crate::store::MagnitudeRange;
use crate::style::ArrowStyle;

/// Unit glyph, centred on the origin and pointing along +x.
pub const GLYPH: [Point; 7] = [
    Point::new(-1.5, 0.5),
    Point::new(0.5, 0.5),
    Point::new(0.5, 1.0),
    Point::new(1.5, 0.0),
    Point::new(0.5, -1.0),
    Point::new(0.5, -0.5),
    Point::new(-1.5, -0.5),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

impl Direction {
    /// Zero counts as `Down`.
    pub fn of(value: f64) -> Self {
        if value > 0.0 { Direction::Up } else { Direction::Down }
    }

    pub fn angle(self, style: &ArrowStyle) -> f64 {
        match self {
            Direction::Up => style.up_angle,
            Direction::Down => style.down_angle,
        }
    }

    pub fn color(self, style: &ArrowStyle) -> &str {
        match self {
            Direction::Up => &style.up_color,
            Direction::Down => &style.down_color,
        }
    }
}

/// Linear map of `|magnitude|` from `range` onto `[min_size, max_size]`.
pub fn arrow_size(magnitude: f64, range: &MagnitudeRange, style: &ArrowStyle) -> f64 {
    style.min_size + (style.max_size - style.min_size) * range.normalize(magnitude)
}

#[derive(Debug, Clone, PartialEq)]
pub struct Arrow {
    pub direction: Direction,
    pub size: f64,
    pub outline: Polygon,
}

pub fn place_arrow(center: Point, value: f64, range: &MagnitudeRange, style: &ArrowStyle) -> Arrow {
    let direction = Direction::of(value);
    let size = arrow_size(value, range, style);
    let t = Transform::identity()
        .scale(size)
        .rotate(direction.angle(style))
        .translate(center.x, center.y);
    Arrow { direction, size, outline: transform_polygon(&GLYPH, &t) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rstest::rstest;

    fn range() -> MagnitudeRange {
        MagnitudeRange { min: 0.5, max: 4.5 }
    }

    #[rstest]
    #[case(2.0, Direction::Up)]
    #[case(1e-9, Direction::Up)]
    #[case(0.0, Direction::Down)]
    #[case(-3.0, Direction::Down)]
    fn test_direction_keyed_on_sign(#[case] value: f64, #[case] expected: Direction) {
        assert_eq!(Direction::of(value), expected);
    }

    #[test]
    fn test_size_endpoints() {
        let style = ArrowStyle::default();
        assert_eq!(arrow_size(0.5, &range(), &style), 10.0);
        assert_eq!(arrow_size(-4.5, &range(), &style), 60.0);
        assert_eq!(arrow_size(2.5, &range(), &style), 35.0);
    }

    #[test]
    fn test_up_arrow_tip_points_up_right() {
        let style = ArrowStyle::default();
        let arrow = place_arrow(Point::new(100.0, 50.0), 4.5, &range(), &style);
        let tip = arrow.outline[3];
        // tip at 1.5 * 60 along 60 degrees
        assert!((tip.x - (100.0 + 90.0 * 0.5)).abs() < 1e-9);
        assert!((tip.y - (50.0 + 90.0 * 60f64.to_radians().sin())).abs() < 1e-9);
        assert_eq!(arrow.direction.color(&style), "#00ff00");
    }

    #[test]
    fn test_down_arrow_tip_points_down_right() {
        let style = ArrowStyle::default();
        let arrow = place_arrow(Point::new(0.0, 0.0), -1.0, &range(), &style);
        assert_eq!(arrow.direction, Direction::Down);
        assert!(arrow.outline[3].y < 0.0);
        assert!(arrow.outline[3].x > 0.0);
    }

    proptest! {
        #[test]
        fn prop_size_is_bounded(v in -10.0f64..10.0) {
            let style = ArrowStyle::default();
            let size = arrow_size(v, &range(), &style);
            prop_assert!(size >= style.min_size && size <= style.max_size);
        }

        #[test]
        fn prop_size_is_monotonic(a in 0.0f64..10.0, b in 0.0f64..10.0) {
            let style = ArrowStyle::default();
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(arrow_size(lo, &range(), &style) <= arrow_size(hi, &range(), &style));
            prop_assert!(arrow_size(-lo, &range(), &style) <= arrow_size(-hi, &range(), &style));
        }
    }
}
