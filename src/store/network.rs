//! network.rs
//! Pathway topology: nodes keyed by their export id, edges on a petgraph DiGraph.

use super::types::{Edge, Node, NodeId};
use crate::error::{PathwayError, Result};
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;
use std::collections::{BTreeMap, HashMap};

#[derive(Debug, Clone, Default)]
pub struct Network {
    graph: DiGraph<Node, ()>,
    index: HashMap<NodeId, NodeIndex>,
    attributes: BTreeMap<String, String>,
}

impl Network {
    pub fn new() -> Self { Self::default() }

    pub fn node_count(&self) -> usize { self.graph.node_count() }
    pub fn edge_count(&self) -> usize { self.graph.edge_count() }

    pub fn add_node(&mut self, node: Node) -> Result<NodeId> {
        let id = node.id;
        if self.index.contains_key(&id) {
            return Err(PathwayError::DuplicateNode(id.0));
        }
        let idx = self.graph.add_node(node);
        self.index.insert(id, idx);
        Ok(id)
    }

    /// Both endpoints must already be registered.
    pub fn add_edge(&mut self, source: NodeId, target: NodeId) -> Result<Edge> {
        let lookup = |id: NodeId| {
            self.index.get(&id).copied().ok_or(PathwayError::DanglingEdge {
                from: source.0,
                to: target.0,
                missing: id.0,
            })
        };
        let (s, t) = (lookup(source)?, lookup(target)?);
        self.graph.add_edge(s, t, ());
        Ok(Edge { source, target })
    }

    pub fn set_attribute(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.attributes.insert(name.into(), value.into());
    }

    pub fn attributes(&self) -> &BTreeMap<String, String> { &self.attributes }

    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.index.get(&id).map(|&idx| &self.graph[idx])
    }

    /// Nodes in document order.
    pub fn nodes(&self) -> impl Iterator<Item = &Node> + '_ {
        self.graph.node_weights()
    }

    /// Edges in document order.
    pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        self.graph.edge_references().map(move |e| Edge {
            source: self.graph[e.source()].id,
            target: self.graph[e.target()].id,
        })
    }

    pub fn endpoints(&self, edge: Edge) -> Option<(&Node, &Node)> {
        Some((self.node(edge.source)?, self.node(edge.target)?))
    }
}
