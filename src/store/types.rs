use crate::error::PathwayError;
use crate::geometry::{Point, Rect};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Node identifier as written in the graph export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize)]
pub struct NodeId(pub i64);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ShapeKind {
    Rectangle,
    Ellipse,
}

impl FromStr for ShapeKind {
    type Err = PathwayError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "RECTANGLE" => Ok(ShapeKind::Rectangle),
            "ELLIPSE" => Ok(ShapeKind::Ellipse),
            _ => Err(PathwayError::UnknownShape(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Node {
    pub id: NodeId,
    /// Join key into the activity table.
    pub label: String,
    /// Centre, in diagram space.
    pub position: Point,
    pub shape: ShapeKind,
    pub width: f64,
    pub height: f64,
}

impl Node {
    pub fn bounds(&self) -> Rect {
        Rect::centered(self.position, self.width, self.height)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Edge {
    pub source: NodeId,
    pub target: NodeId,
}
