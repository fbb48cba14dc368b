//! A generator for random weighted directed graphs.
//!
//! The generated graphs are meant as input for graph algorithm benchmarks.
//! Edges are drawn by rejection sampling: self-loops and edges that have
//! been produced before are discarded and drawn again.
//!
//! # Example
//!
//! ```
//! use graph_gen::prelude::*;
//!
//! let shape = GraphShape::new(3, 2);
//! let sampler = EdgeSampler::<u32>::with_seed(shape, Uniqueness::Pair, 42).unwrap();
//!
//! let mut out = Vec::new();
//! let written = write_graph(&mut out, shape, sampler).unwrap();
//!
//! assert_eq!(written, 2);
//! assert!(String::from_utf8(out).unwrap().starts_with("3\n2\n"));
//! ```

pub mod graph;
pub mod index;
pub mod output;
pub mod prelude;
pub mod sampler;

pub use crate::graph::Edge;
pub use crate::graph::GraphShape;
pub use crate::sampler::EdgeSampler;
pub use crate::sampler::Uniqueness;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("error while writing graph")]
    IoError {
        #[from]
        source: std::io::Error,
    },
    #[error("incompatible index type: {node_count} nodes exceed max node id {max_index}")]
    IdxError { node_count: usize, max_index: usize },
    #[error("graph needs at least one node and one edge, got {node_count} nodes and {edge_count} edges")]
    EmptyGraph {
        node_count: usize,
        edge_count: usize,
    },
    #[error("cannot sample {requested} distinct edges, only {capacity} are possible")]
    Infeasible { requested: usize, capacity: u128 },
}
