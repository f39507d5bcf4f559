// src/graph/link_graph.rs
//! The directed link graph around one focal entity.

use std::collections::HashMap;

use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::Direction;
use serde::{Deserialize, Serialize};

/// A node's relation to the focal entity, derived from edge membership.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeRole {
    Focal,
    IncomingOnly,
    OutgoingOnly,
    Both,
    Unrelated,
}

impl NodeRole {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Focal => "focal",
            Self::IncomingOnly => "incoming",
            Self::OutgoingOnly => "outgoing",
            Self::Both => "both",
            Self::Unrelated => "unrelated",
        }
    }
}

/// Nodes are page titles; an edge `(a, b)` means `a`'s page links to `b`.
/// The focal node is always present.
#[derive(Debug, Clone)]
pub struct LinkGraph {
    graph: DiGraph<String, ()>,
    index: HashMap<String, NodeIndex>,
    focal: NodeIndex,
}

impl LinkGraph {
    /// Creates a graph holding only the focal node.
    #[must_use]
    pub fn new(focal: &str) -> Self {
        let mut graph = DiGraph::new();
        let idx = graph.add_node(focal.to_string());
        let index = [(focal.to_string(), idx)].into_iter().collect();
        Self {
            graph,
            index,
            focal: idx,
        }
    }

    #[must_use]
    pub fn focal(&self) -> &str {
        &self.graph[self.focal]
    }

    /// Adds `title` if absent and returns its index.
    pub fn add_node(&mut self, title: &str) -> NodeIndex {
        if let Some(&idx) = self.index.get(title) {
            return idx;
        }
        let idx = self.graph.add_node(title.to_string());
        self.index.insert(title.to_string(), idx);
        idx
    }

    /// Adds the edge `source -> target`, creating either node as needed.
    /// Repeated edges collapse into one.
    pub fn add_edge(&mut self, source: &str, target: &str) {
        let a = self.add_node(source);
        let b = self.add_node(target);
        self.graph.update_edge(a, b, ());
    }

    #[must_use]
    pub fn contains(&self, title: &str) -> bool {
        self.index.contains_key(title)
    }

    #[must_use]
    pub fn has_edge(&self, source: &str, target: &str) -> bool {
        match (self.index.get(source), self.index.get(target)) {
            (Some(&a), Some(&b)) => self.graph.contains_edge(a, b),
            _ => false,
        }
    }

    #[must_use]
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Node titles in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = &str> {
        self.graph.node_weights().map(String::as_str)
    }

    /// Edges as `(source, target)` title pairs.
    pub fn edges(&self) -> impl Iterator<Item = (&str, &str)> {
        self.graph.edge_indices().filter_map(move |e| {
            let (a, b) = self.graph.edge_endpoints(e)?;
            Some((self.graph[a].as_str(), self.graph[b].as_str()))
        })
    }

    #[must_use]
    pub fn in_degree(&self, title: &str) -> usize {
        self.degree(title, Direction::Incoming)
    }

    #[must_use]
    pub fn out_degree(&self, title: &str) -> usize {
        self.degree(title, Direction::Outgoing)
    }

    fn degree(&self, title: &str, dir: Direction) -> usize {
        self.index
            .get(title)
            .map_or(0, |&idx| self.graph.neighbors_directed(idx, dir).count())
    }

    /// Classifies `title` against the focal node. Returns `None` for
    /// titles not in the graph.
    #[must_use]
    pub fn role(&self, title: &str) -> Option<NodeRole> {
        let &idx = self.index.get(title)?;
        if idx == self.focal {
            return Some(NodeRole::Focal);
        }
        let incoming = self.graph.contains_edge(idx, self.focal);
        let outgoing = self.graph.contains_edge(self.focal, idx);
        Some(match (incoming, outgoing) {
            (true, true) => NodeRole::Both,
            (true, false) => NodeRole::IncomingOnly,
            (false, true) => NodeRole::OutgoingOnly,
            (false, false) => NodeRole::Unrelated,
        })
    }

    /// Induces the subgraph on nodes passing `keep`. The focal node
    /// survives regardless; edges touching a removed node are dropped.
    #[must_use]
    pub fn retain<F>(&self, mut keep: F) -> Self
    where
        F: FnMut(&str) -> bool,
    {
        let focal = self.focal;
        let graph = self.graph.filter_map(
            |idx, title| (idx == focal || keep(title.as_str())).then(|| title.clone()),
            |_, &edge| Some(edge),
        );
        Self::from_petgraph(graph, &self.graph[focal])
    }

    fn from_petgraph(graph: DiGraph<String, ()>, focal: &str) -> Self {
        let index: HashMap<String, NodeIndex> = graph
            .node_indices()
            .map(|idx| (graph[idx].clone(), idx))
            .collect();
        let focal = index[focal];
        Self {
            graph,
            index,
            focal,
        }
    }

    /// The underlying petgraph graph, for algorithms.
    #[must_use]
    pub fn as_petgraph(&self) -> &DiGraph<String, ()> {
        &self.graph
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> LinkGraph {
        let mut g = LinkGraph::new("F");
        g.add_edge("F", "A");
        g.add_edge("A", "F");
        g.add_edge("F", "B");
        g.add_edge("C", "F");
        g.add_node("D");
        g
    }

    #[test]
    fn test_focal_only() {
        let g = LinkGraph::new("F");
        assert_eq!(g.node_count(), 1);
        assert_eq!(g.edge_count(), 0);
        assert_eq!(g.role("F"), Some(NodeRole::Focal));
    }

    #[test]
    fn test_roles() {
        let g = sample();
        assert_eq!(g.role("A"), Some(NodeRole::Both));
        assert_eq!(g.role("B"), Some(NodeRole::OutgoingOnly));
        assert_eq!(g.role("C"), Some(NodeRole::IncomingOnly));
        assert_eq!(g.role("D"), Some(NodeRole::Unrelated));
        assert_eq!(g.role("Z"), None);
    }

    #[test]
    fn test_duplicate_edges_collapse() {
        let mut g = LinkGraph::new("F");
        g.add_edge("F", "A");
        g.add_edge("F", "A");
        assert_eq!(g.edge_count(), 1);
        assert_eq!(g.out_degree("F"), 1);
    }

    #[test]
    fn test_retain_induces_subgraph_and_keeps_focal() {
        let g = sample().retain(|t| t == "A" || t == "D");
        let nodes: Vec<_> = g.nodes().collect();
        assert_eq!(nodes, vec!["F", "A", "D"]);
        assert!(g.has_edge("F", "A"));
        assert!(g.has_edge("A", "F"));
        assert_eq!(g.edge_count(), 2);
        assert_eq!(g.focal(), "F");

        let none = sample().retain(|_| false);
        assert_eq!(none.node_count(), 1);
        assert_eq!(none.focal(), "F");
    }

    #[test]
    fn test_degrees() {
        let g = sample();
        assert_eq!(g.out_degree("F"), 2);
        assert_eq!(g.in_degree("F"), 2);
        assert_eq!(g.in_degree("Z"), 0);
    }
}
