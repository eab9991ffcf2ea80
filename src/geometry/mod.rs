//! Plane geometry in diagram space (y axis pointing up).

use serde::Serialize;
use smallvec::SmallVec;

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn lerp(self, other: Point, t: f64) -> Point {
        Point::new(self.x + (other.x - self.x) * t, self.y + (other.y - self.y) * t)
    }

    pub fn distance(self, other: Point) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }
}

/// Axis-aligned box, stored as its min/max corners.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub min: Point,
    pub max: Point,
}

impl Rect {
    pub fn centered(center: Point, width: f64, height: f64) -> Self {
        let (hw, hh) = (width / 2.0, height / 2.0);
        Self {
            min: Point::new(center.x - hw, center.y - hh),
            max: Point::new(center.x + hw, center.y + hh),
        }
    }

    pub fn from_points<'a>(points: impl IntoIterator<Item = &'a Point>) -> Option<Self> {
        let mut iter = points.into_iter();
        let first = *iter.next()?;
        Some(iter.fold(Rect { min: first, max: first }, |r, p| r.include(*p)))
    }

    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    pub fn center(&self) -> Point {
        self.min.lerp(self.max, 0.5)
    }

    pub fn enlarged(&self, by: f64) -> Self {
        Self {
            min: Point::new(self.min.x - by, self.min.y - by),
            max: Point::new(self.max.x + by, self.max.y + by),
        }
    }

    pub fn include(self, p: Point) -> Self {
        Self {
            min: Point::new(self.min.x.min(p.x), self.min.y.min(p.y)),
            max: Point::new(self.max.x.max(p.x), self.max.y.max(p.y)),
        }
    }

    pub fn union(self, other: Rect) -> Self {
        self.include(other.min).include(other.max)
    }

    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }

    /// Parameter range `[t0, t1]` of the segment `a + t(b - a)`, `t in [0, 1]`,
    /// that lies inside the box (Liang-Barsky). `None` if the segment misses it.
    pub fn clip_segment(&self, a: Point, b: Point) -> Option<(f64, f64)> {
        let (dx, dy) = (b.x - a.x, b.y - a.y);
        let mut t0: f64 = 0.0;
        let mut t1: f64 = 1.0;
        let checks = [
            (-dx, a.x - self.min.x),
            (dx, self.max.x - a.x),
            (-dy, a.y - self.min.y),
            (dy, self.max.y - a.y),
        ];
        for (p, q) in checks {
            if p == 0.0 {
                if q < 0.0 {
                    return None;
                }
                continue;
            }
            let r = q / p;
            if p < 0.0 {
                t0 = t0.max(r);
            } else {
                t1 = t1.min(r);
            }
            if t0 > t1 {
                return None;
            }
        }
        Some((t0, t1))
    }
}

/// Affine map `p -> (a*x + c*y + e, b*x + d*y + f)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    a: f64,
    b: f64,
    c: f64,
    d: f64,
    e: f64,
    f: f64,
}

impl Default for Transform {
    fn default() -> Self {
        Self::identity()
    }
}

impl Transform {
    pub const fn identity() -> Self {
        Self { a: 1.0, b: 0.0, c: 0.0, d: 1.0, e: 0.0, f: 0.0 }
    }

    /// `self` first, then `next`.
    pub fn then(self, next: Transform) -> Self {
        Self {
            a: next.a * self.a + next.c * self.b,
            b: next.b * self.a + next.d * self.b,
            c: next.a * self.c + next.c * self.d,
            d: next.b * self.c + next.d * self.d,
            e: next.a * self.e + next.c * self.f + next.e,
            f: next.b * self.e + next.d * self.f + next.f,
        }
    }

    pub fn scale(self, k: f64) -> Self {
        self.then(Self { a: k, d: k, ..Self::identity() })
    }

    /// Counter-clockwise rotation about the origin, in degrees.
    pub fn rotate(self, degrees: f64) -> Self {
        let (sin, cos) = degrees.to_radians().sin_cos();
        self.then(Self { a: cos, b: sin, c: -sin, d: cos, e: 0.0, f: 0.0 })
    }

    pub fn translate(self, dx: f64, dy: f64) -> Self {
        self.then(Self { e: dx, f: dy, ..Self::identity() })
    }

    pub fn apply(&self, p: Point) -> Point {
        Point::new(
            self.a * p.x + self.c * p.y + self.e,
            self.b * p.x + self.d * p.y + self.f,
        )
    }
}

/// Closed outline. Arrow glyphs and arrowheads fit inline.
pub type Polygon = SmallVec<[Point; 8]>;

pub fn transform_polygon(polygon: &[Point], t: &Transform) -> Polygon {
    polygon.iter().map(|&p| t.apply(p)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: Point, b: Point) -> bool {
        a.distance(b) < 1e-9
    }

    #[test]
    fn test_transform_order_is_application_order() {
        // scale, then rotate 90deg, then move: (1,0) -> (2,0) -> (0,2) -> (10,12)
        let t = Transform::identity().scale(2.0).rotate(90.0).translate(10.0, 10.0);
        assert!(close(t.apply(Point::new(1.0, 0.0)), Point::new(10.0, 12.0)));
    }

    #[test]
    fn test_rotation_is_counter_clockwise() {
        let t = Transform::identity().rotate(60.0);
        let p = t.apply(Point::new(1.0, 0.0));
        assert!(p.y > 0.0);
        assert!((p.x - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_clip_segment_through_box() {
        let r = Rect::centered(Point::new(0.0, 0.0), 2.0, 2.0);
        let (t0, t1) = r.clip_segment(Point::new(-2.0, 0.0), Point::new(2.0, 0.0)).unwrap();
        assert!((t0 - 0.25).abs() < 1e-9);
        assert!((t1 - 0.75).abs() < 1e-9);
    }

    #[test]
    fn test_clip_segment_misses_box() {
        let r = Rect::centered(Point::new(0.0, 0.0), 2.0, 2.0);
        assert!(r.clip_segment(Point::new(-2.0, 5.0), Point::new(2.0, 5.0)).is_none());
    }

    #[test]
    fn test_rect_union_and_contains() {
        let a = Rect::centered(Point::new(0.0, 0.0), 2.0, 2.0);
        let b = Rect::centered(Point::new(10.0, 0.0), 2.0, 2.0);
        let u = a.union(b);
        assert_eq!(u.width(), 12.0);
        assert!(u.contains(Point::new(5.0, 0.5)));
        assert!(!u.contains(Point::new(5.0, 2.0)));
    }
}
