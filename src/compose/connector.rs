//! Straight connectors between label boxes, ending in an arrowhead.

use crate::geometry::{Point, Polygon, Rect};
use crate::store::Node;
use crate::style::{ConnectorStyle, LabelStyle};
use smallvec::smallvec;

/// Half-angle of the arrowhead, in degrees.
const HEAD_HALF_ANGLE: f64 = 22.5;

/// Estimated extent of a node's label, centred on the node.
pub fn label_box(node: &Node, style: &LabelStyle) -> Rect {
    let chars = node.label.chars().count() as f64;
    Rect::centered(node.position, chars * style.char_width * style.font_size, style.font_size)
}

#[derive(Debug, Clone, PartialEq)]
pub struct Connector {
    pub start: Point,
    /// Where the stroke stops: the base of the arrowhead.
    pub end: Point,
    pub head: Polygon,
}

impl Connector {
    pub fn tip(&self) -> Point {
        self.head[0]
    }
}

/// Connector from the `from` box to the `to` box, kept `box_distance` clear of both.
///
/// `None` when the boxes are the same, or when the gap left after clipping is
/// shorter than the arrowhead.
pub fn connect(from: &Rect, to: &Rect, style: &ConnectorStyle) -> Option<Connector> {
    let (a, b) = (from.center(), to.center());
    let length = a.distance(b);
    if length < f64::EPSILON {
        return None;
    }

    let (_, t_exit) = from.enlarged(style.box_distance).clip_segment(a, b)?;
    let (t_enter, _) = to.enlarged(style.box_distance).clip_segment(a, b)?;
    if (t_enter - t_exit) * length < style.head_size {
        return None;
    }

    let (start, tip) = (a.lerp(b, t_exit), a.lerp(b, t_enter));
    let (ux, uy) = ((b.x - a.x) / length, (b.y - a.y) / length);
    let base = Point::new(tip.x - ux * style.head_size, tip.y - uy * style.head_size);
    let half = style.head_size * HEAD_HALF_ANGLE.to_radians().tan();
    let (px, py) = (-uy * half, ux * half);

    Some(Connector {
        start,
        end: base,
        head: smallvec![
            tip,
            Point::new(base.x + px, base.y + py),
            Point::new(base.x - px, base.y - py),
        ],
    })
}
