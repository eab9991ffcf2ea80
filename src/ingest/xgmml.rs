//! Reader for XGMML 1.1 graph exports (as written by Cytoscape).

use crate::error::{PathwayError, Result};
use crate::geometry::Point;
use crate::store::{Network, Node, NodeId, ShapeKind};
use log::debug;
use roxmltree::{Document, Node as XmlNode};
use std::path::Path;
use std::str::FromStr;

pub const XGMML_NS: &str = "http://www.cs.rpi.edu/XGMML";

/// `att` child carrying the display name used as the activity join key.
const LABEL_ATT: &str = "canonicalName";

pub fn parse_network(text: &str) -> Result<Network> {
    let doc = Document::parse(text)?;
    let root = doc.root_element();
    if !is_xgmml(&root, "graph") {
        return Err(PathwayError::UnexpectedRoot(root.tag_name().name().to_string()));
    }

    let mut network = Network::new();
    for (name, value) in attributes(&root) {
        network.set_attribute(name, value);
    }

    for element in children(&root, "node") {
        network.add_node(read_node(&element)?)?;
    }

    for element in children(&root, "edge") {
        let source = NodeId(number(&element, "edge", "source")?);
        let target = NodeId(number(&element, "edge", "target")?);
        network.add_edge(source, target)?;
    }

    debug!(
        "graph '{}': {} nodes, {} edges",
        root.attribute("label").unwrap_or(""),
        network.node_count(),
        network.edge_count()
    );
    Ok(network)
}

pub fn load_network(path: impl AsRef<Path>) -> Result<Network> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|e| PathwayError::io(path, e))?;
    parse_network(&text)
}

fn read_node(element: &XmlNode) -> Result<Node> {
    let id = number(element, "node", "id")?;
    let label = attributes(element)
        .find(|(name, _)| *name == LABEL_ATT)
        .map(|(_, value)| value)
        .or_else(|| element.attribute("label"))
        .ok_or_else(|| PathwayError::MissingAttribute {
            element: "node",
            attribute: LABEL_ATT,
            context: format!("id={id}"),
        })?;

    let graphics = children(element, "graphics").next().ok_or_else(|| PathwayError::MissingAttribute {
        element: "node",
        attribute: "graphics",
        context: format!("id={id}"),
    })?;

    let shape_name = required(&graphics, "graphics", "type")?;
    let shape = ShapeKind::from_str(shape_name)?;

    Ok(Node {
        id: NodeId(id),
        label: label.to_string(),
        // Exports are y-down; diagram space is y-up.
        position: Point::new(coordinate(&graphics, "x")?, -coordinate(&graphics, "y")?),
        shape,
        width: coordinate(&graphics, "w")?,
        height: coordinate(&graphics, "h")?,
    })
}

fn is_xgmml(node: &XmlNode, name: &str) -> bool {
    node.is_element()
        && node.tag_name().name() == name
        && matches!(node.tag_name().namespace(), None | Some(XGMML_NS))
}

fn children<'a, 'input: 'a>(
    parent: &XmlNode<'a, 'input>,
    name: &'static str,
) -> impl Iterator<Item = XmlNode<'a, 'input>> + 'a {
    parent.children().filter(move |c| is_xgmml(c, name))
}

/// `(name, value)` of every direct `<att>` child.
fn attributes<'a, 'input: 'a>(
    parent: &XmlNode<'a, 'input>,
) -> impl Iterator<Item = (&'a str, &'a str)> + 'a {
    children(parent, "att").filter_map(|att| Some((att.attribute("name")?, att.attribute("value")?)))
}

fn required<'a>(element: &XmlNode<'a, '_>, tag: &'static str, attribute: &'static str) -> Result<&'a str> {
    element.attribute(attribute).ok_or_else(|| PathwayError::MissingAttribute {
        element: tag,
        attribute,
        context: format!("at byte {}", element.range().start),
    })
}

fn number<T: FromStr>(element: &XmlNode, tag: &'static str, attribute: &'static str) -> Result<T> {
    let raw = required(element, tag, attribute)?;
    raw.trim().parse::<T>().map_err(|_| PathwayError::InvalidNumber {
        element: tag,
        attribute,
        value: raw.to_string(),
    })
}

/// A finite `<graphics>` number; `NaN` and infinities parse but cannot be drawn.
fn coordinate(graphics: &XmlNode, attribute: &'static str) -> Result<f64> {
    let value: f64 = number(graphics, "graphics", attribute)?;
    if !value.is_finite() {
        return Err(PathwayError::InvalidNumber {
            element: "graphics",
            attribute,
            value: required(graphics, "graphics", attribute)?.to_string(),
        });
    }
    Ok(value)
}
