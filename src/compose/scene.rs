//! scene.rs
//! One timepoint's drawing as an ordered list of primitives, independent of the
//! output format.

use super::arrow::{place_arrow, Arrow};
use super::connector::{connect, label_box, Connector};
use crate::geometry::{Point, Rect};
use crate::store::{Frame, MagnitudeRange, Network, NodeId, ShapeKind};
use crate::style::RenderStyle;
use log::warn;
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    /// Node background, rectangle variant.
    Box { bounds: Rect },
    /// Node background, ellipse variant (drawn as a circle of the node's half-width).
    Circle { center: Point, radius: f64 },
    Arrow { node: NodeId, arrow: Arrow },
    Label { anchor: Point, text: String, bounds: Rect },
    Connector(Connector),
}

impl Primitive {
    pub fn bounds(&self) -> Option<Rect> {
        match self {
            Primitive::Box { bounds } | Primitive::Label { bounds, .. } => Some(*bounds),
            Primitive::Circle { center, radius } => Some(Rect::centered(*center, 2.0 * radius, 2.0 * radius)),
            Primitive::Arrow { arrow, .. } => Rect::from_points(&arrow.outline),
            Primitive::Connector(c) => Rect::from_points([c.start, c.end].iter().chain(&c.head)),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Scene {
    pub timepoint: usize,
    pub primitives: Vec<Primitive>,
}

impl Scene {
    /// Layers, bottom to top: node shapes, arrows, labels, connectors.
    pub fn compose(
        network: &Network,
        timepoint: usize,
        frame: &Frame,
        range: &MagnitudeRange,
        style: &RenderStyle,
    ) -> Self {
        let mut primitives = Vec::with_capacity(3 * network.node_count() + network.edge_count());

        for node in network.nodes() {
            primitives.push(match node.shape {
                ShapeKind::Rectangle => Primitive::Box { bounds: node.bounds() },
                ShapeKind::Ellipse => Primitive::Circle { center: node.position, radius: node.width / 2.0 },
            });
        }

        for node in network.nodes() {
            if let Some(&value) = frame.get(&node.label) {
                primitives.push(Primitive::Arrow {
                    node: node.id,
                    arrow: place_arrow(node.position, value, range, &style.arrow),
                });
            }
        }

        let mut label_boxes = HashMap::with_capacity(network.node_count());
        for node in network.nodes() {
            let bounds = label_box(node, &style.label);
            label_boxes.insert(node.id, bounds);
            primitives.push(Primitive::Label { anchor: node.position, text: node.label.clone(), bounds });
        }

        for edge in network.edges() {
            let (Some(from), Some(to)) = (label_boxes.get(&edge.source), label_boxes.get(&edge.target)) else {
                continue;
            };
            match connect(from, to, &style.connector) {
                Some(c) => primitives.push(Primitive::Connector(c)),
                None => warn!("t={timepoint}: no room for connector {} -> {}", edge.source, edge.target),
            }
        }

        Self { timepoint, primitives }
    }

    pub fn bounds(&self) -> Option<Rect> {
        self.primitives.iter().filter_map(Primitive::bounds).reduce(Rect::union)
    }

    pub fn arrows(&self) -> impl Iterator<Item = (NodeId, &Arrow)> + '_ {
        self.primitives.iter().filter_map(|p| match p {
            Primitive::Arrow { node, arrow } => Some((*node, arrow)),
            _ => None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compose::arrow::Direction;
    use crate::store::Node;

    fn network() -> Network {
        let mut net = Network::new();
        let nodes = [(1, "pgi", ShapeKind::Rectangle, 0.0), (2, "pfk", ShapeKind::Ellipse, 200.0), (3, "fba", ShapeKind::Rectangle, 400.0)];
        for (id, label, shape, x) in nodes {
            net.add_node(Node {
                id: NodeId(id),
                label: label.into(),
                position: Point::new(x, 0.0),
                shape,
                width: 40.0,
                height: 20.0,
            })
            .unwrap();
        }
        net.add_edge(NodeId(1), NodeId(2)).unwrap();
        net.add_edge(NodeId(2), NodeId(3)).unwrap();
        net
    }

    fn frame(entries: &[(&str, f64)]) -> Frame {
        entries.iter().map(|&(k, v)| (k.to_string(), v)).collect()
    }

    fn layer(p: &Primitive) -> u8 {
        match p {
            Primitive::Box { .. } | Primitive::Circle { .. } => 0,
            Primitive::Arrow { .. } => 1,
            Primitive::Label { .. } => 2,
            Primitive::Connector(_) => 3,
        }
    }

    #[test]
    fn test_layers_are_in_draw_order() {
        let range = MagnitudeRange { min: 1.0, max: 2.0 };
        let scene = Scene::compose(&network(), 0, &frame(&[("pgi", 1.0), ("fba", -2.0)]), &range, &RenderStyle::default());

        let layers: Vec<u8> = scene.primitives.iter().map(layer).collect();
        assert!(layers.windows(2).all(|w| w[0] <= w[1]), "{layers:?}");
        assert_eq!(layers, vec![0, 0, 0, 1, 1, 2, 2, 2, 3, 3]);
        assert!(matches!(scene.primitives[1], Primitive::Circle { radius, .. } if radius == 20.0));
    }

    #[test]
    fn test_nodes_without_activity_get_no_arrow() {
        let range = MagnitudeRange { min: 1.0, max: 2.0 };
        let scene = Scene::compose(
            &network(),
            3,
            &frame(&[("pfk", -1.5), ("not_in_graph", 9.0)]),
            &range,
            &RenderStyle::default(),
        );
        let arrows: Vec<_> = scene.arrows().collect();
        assert_eq!(arrows.len(), 1);
        assert_eq!(arrows[0].0, NodeId(2));
        assert_eq!(arrows[0].1.direction, Direction::Down);
        assert_eq!(scene.timepoint, 3);
    }

    #[test]
    fn test_bounds_cover_everything() {
        let range = MagnitudeRange { min: 1.0, max: 2.0 };
        let scene = Scene::compose(&network(), 0, &frame(&[("fba", 2.0)]), &range, &RenderStyle::default());
        let b = scene.bounds().unwrap();
        for p in &scene.primitives {
            let pb = p.bounds().unwrap();
            assert!(b.contains(pb.min) && b.contains(pb.max));
        }
        // largest arrow on fba reaches well above the node row
        assert!(b.max.y > 60.0);
    }

    #[test]
    fn test_crowded_labels_skip_connector() {
        let mut net = Network::new();
        for (id, label, x) in [(1, "ab", 0.0), (2, "cd", 40.0)] {
            net.add_node(Node {
                id: NodeId(id),
                label: label.into(),
                position: Point::new(x, 0.0),
                shape: ShapeKind::Rectangle,
                width: 10.0,
                height: 10.0,
            })
            .unwrap();
        }
        net.add_edge(NodeId(1), NodeId(2)).unwrap();

        let range = MagnitudeRange { min: 1.0, max: 2.0 };
        let scene = Scene::compose(&net, 0, &Frame::new(), &range, &RenderStyle::default());
        assert!(scene.primitives.iter().all(|p| !matches!(p, Primitive::Connector(_))));
        assert_eq!(scene.primitives.len(), 4);
    }

    #[test]
    fn test_empty_network_has_no_bounds() {
        let range = MagnitudeRange { min: 1.0, max: 2.0 };
        let scene = Scene::compose(&Network::new(), 0, &Frame::new(), &range, &RenderStyle::default());
        assert!(scene.primitives.is_empty());
        assert!(scene.bounds().is_none());
    }
}
