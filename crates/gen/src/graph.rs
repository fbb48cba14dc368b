use std::fmt;

use crate::index::Idx;

/// Number of nodes and edges of the graph to generate.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct GraphShape {
    pub node_count: usize,
    pub edge_count: usize,
}

impl GraphShape {
    pub fn new(node_count: usize, edge_count: usize) -> Self {
        Self {
            node_count,
            edge_count,
        }
    }

    /// The number of distinct ordered node pairs without self-loops.
    pub fn pair_count(&self) -> u128 {
        let n = self.node_count as u128;
        n * n.saturating_sub(1)
    }

    /// Weights are drawn from `[1, max_weight]`.
    pub fn max_weight(&self) -> u64 {
        self.edge_count as u64
    }
}

/// A directed, weighted edge between two distinct nodes.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Edge<NI: Idx> {
    pub source: NI,
    pub target: NI,
    pub weight: u64,
}

impl<NI: Idx> Edge<NI> {
    pub fn new(source: NI, target: NI, weight: u64) -> Self {
        Self {
            source,
            target,
            weight,
        }
    }
}

impl<NI: Idx> From<Edge<NI>> for (NI, NI, u64) {
    fn from(edge: Edge<NI>) -> Self {
        (edge.source, edge.target, edge.weight)
    }
}

impl<NI: Idx> fmt::Display for Edge<NI> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.source, self.target, self.weight)
    }
}
