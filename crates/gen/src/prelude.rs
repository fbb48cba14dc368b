pub use crate::graph::Edge;
pub use crate::graph::GraphShape;

pub use crate::index::Idx;

pub use crate::output::write_graph;

pub use crate::sampler::generate;
pub use crate::sampler::generate_with;
pub use crate::sampler::generate_with_seed;
pub use crate::sampler::validate;
pub use crate::sampler::EdgeSampler;
pub use crate::sampler::Uniqueness;

pub use crate::Error;
