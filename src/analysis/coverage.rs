//! How well the activity table joins onto the network's node labels.

use crate::store::{ActivityTable, MagnitudeRange, Network};
use serde::Serialize;
use std::collections::HashSet;
use std::fmt::Write;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimepointCoverage {
    pub timepoint: usize,
    /// Nodes that receive an arrow.
    pub arrows: usize,
    pub up: usize,
    pub down: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Coverage {
    pub graph_name: Option<String>,
    pub nodes: usize,
    pub edges: usize,
    pub range: Option<MagnitudeRange>,
    pub timepoints: Vec<TimepointCoverage>,
    /// Entities in the table that no node label matches.
    pub unmatched_entities: Vec<String>,
    /// Node labels with no value at any timepoint.
    pub idle_nodes: Vec<String>,
}

impl Coverage {
    pub fn measure(network: &Network, activities: &ActivityTable) -> Self {
        let labels: HashSet<&str> = network.nodes().map(|n| n.label.as_str()).collect();
        let entities = activities.entities();
        let entity_set: HashSet<&str> = entities.iter().copied().collect();

        let timepoints = activities
            .timepoints()
            .map(|t| {
                let (mut up, mut down) = (0, 0);
                if let Some(frame) = activities.frame(t) {
                    for node in network.nodes() {
                        match frame.get(&node.label) {
                            Some(&v) if v > 0.0 => up += 1,
                            Some(_) => down += 1,
                            None => {}
                        }
                    }
                }
                TimepointCoverage { timepoint: t, arrows: up + down, up, down }
            })
            .collect();

        let unmatched_entities = entities
            .iter()
            .filter(|e| !labels.contains(*e))
            .map(|e| e.to_string())
            .collect();

        let mut idle_nodes: Vec<String> = network
            .nodes()
            .filter(|n| !entity_set.contains(n.label.as_str()))
            .map(|n| n.label.clone())
            .collect();
        idle_nodes.sort();
        idle_nodes.dedup();

        Self {
            graph_name: network.attributes().get("name").cloned(),
            nodes: network.node_count(),
            edges: network.edge_count(),
            range: activities.range(),
            timepoints,
            unmatched_entities,
            idle_nodes,
        }
    }
}

pub fn format_report(coverage: &Coverage) -> String {
    let mut out = String::new();
    let name = coverage.graph_name.as_deref().unwrap_or("(unnamed)");
    let _ = writeln!(out, "COVERAGE for graph '{}':", name);
    let _ = writeln!(out, "--------------------------------------------------");
    let _ = writeln!(out, "nodes: {}  edges: {}  timepoints: {}", coverage.nodes, coverage.edges, coverage.timepoints.len());
    match coverage.range {
        Some(r) => { let _ = writeln!(out, "|activity| range: [{:.4}, {:.4}]", r.min, r.max); }
        None => { let _ = writeln!(out, "|activity| range: (no data)"); }
    }

    let _ = writeln!(out, "|");
    let _ = writeln!(out, "|--  t   arrows     up   down");
    for tp in &coverage.timepoints {
        let _ = writeln!(out, "|  {: >3} {: >8} {: >6} {: >6}", tp.timepoint, tp.arrows, tp.up, tp.down);
    }

    write_list(&mut out, "Unmatched entities", &coverage.unmatched_entities);
    write_list(&mut out, "Nodes without activity", &coverage.idle_nodes);
    out
}

fn write_list(out: &mut String, title: &str, items: &[String]) {
    let _ = writeln!(out, "|");
    let _ = writeln!(out, "`-- {} ({}):", title, items.len());
    for (i, item) in items.iter().enumerate() {
        let connector = if i == items.len() - 1 { "`--" } else { "|--" };
        let _ = writeln!(out, "    {} {}", connector, item);
    }
}
