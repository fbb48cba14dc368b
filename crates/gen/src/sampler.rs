use std::iter::FusedIterator;

use fxhash::FxHashSet;
use log::debug;
use rand::prelude::*;

use crate::prelude::*;

const MAX_INITIAL_CAPACITY: usize = 1 << 20;

/// Decides which edges count as duplicates while sampling.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum Uniqueness {
    /// Every ordered `(source, target)` pair occurs at most once.
    #[default]
    Pair,
    /// Every `(source, target, weight)` triple occurs at most once,
    /// parallel edges with different weights are allowed.
    Triple,
}

impl Uniqueness {
    /// The number of distinct keys that can be sampled for the given shape.
    ///
    /// Saturates at `u128::MAX`, which is far beyond any edge count.
    pub fn capacity(self, shape: GraphShape) -> u128 {
        match self {
            Uniqueness::Pair => shape.pair_count(),
            Uniqueness::Triple => shape
                .pair_count()
                .saturating_mul(shape.max_weight() as u128),
        }
    }

    // Weights start at 1, so a zero weight never collides with a real triple.
    fn key<NI: Idx>(self, edge: &Edge<NI>) -> (NI, NI, u64) {
        match self {
            Uniqueness::Pair => (edge.source, edge.target, 0),
            Uniqueness::Triple => (edge.source, edge.target, edge.weight),
        }
    }
}

/// Draws random edges by rejection sampling.
///
/// Source and target are drawn uniformly from `[0, node_count)` and the
/// weight uniformly from `[1, edge_count]`. Self-loops and keys that have
/// been produced before are rejected and redrawn. The sampler is an iterator
/// that yields exactly `edge_count` edges.
///
/// The expected number of draws per edge grows sharply once `edge_count`
/// gets close to [`Uniqueness::capacity`].
///
/// The seen-set grows with the number of emitted edges. Only a bounded
/// amount is reserved up front, so huge requests start streaming right away.
pub struct EdgeSampler<NI: Idx> {
    shape: GraphShape,
    uniqueness: Uniqueness,
    rng: StdRng,
    seen: FxHashSet<(NI, NI, u64)>,
    emitted: usize,
    rejections: u64,
}

impl<NI: Idx> EdgeSampler<NI> {
    /// Creates a sampler seeded from OS entropy.
    pub fn new(shape: GraphShape, uniqueness: Uniqueness) -> Result<Self, Error> {
        Self::with_rng(shape, uniqueness, StdRng::from_entropy())
    }

    /// Creates a sampler that produces the same edges for the same seed.
    pub fn with_seed(shape: GraphShape, uniqueness: Uniqueness, seed: u64) -> Result<Self, Error> {
        Self::with_rng(shape, uniqueness, StdRng::seed_from_u64(seed))
    }

    fn with_rng(shape: GraphShape, uniqueness: Uniqueness, rng: StdRng) -> Result<Self, Error> {
        validate::<NI>(shape, uniqueness)?;

        debug!(
            "Sampling {} edges over {} nodes ({:?} uniqueness, {} distinct keys)",
            shape.edge_count,
            shape.node_count,
            uniqueness,
            uniqueness.capacity(shape)
        );

        let mut seen = FxHashSet::default();
        seen.reserve(shape.edge_count.min(MAX_INITIAL_CAPACITY));

        Ok(Self {
            shape,
            uniqueness,
            rng,
            seen,
            emitted: 0,
            rejections: 0,
        })
    }

    /// Number of draws that were discarded as self-loops or duplicates.
    pub fn rejections(&self) -> u64 {
        self.rejections
    }

    fn draw(&mut self) -> Edge<NI> {
        let source = self.rng.gen_range(0..self.shape.node_count);
        let target = self.rng.gen_range(0..self.shape.node_count);
        let weight = self.rng.gen_range(1..=self.shape.max_weight());

        Edge::new(NI::new(source), NI::new(target), weight)
    }
}

impl<NI: Idx> Iterator for EdgeSampler<NI> {
    type Item = Edge<NI>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.emitted == self.shape.edge_count {
            return None;
        }

        loop {
            let edge = self.draw();
            if edge.source != edge.target && self.seen.insert(self.uniqueness.key(&edge)) {
                self.emitted += 1;
                return Some(edge);
            }
            self.rejections += 1;
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.shape.edge_count - self.emitted;
        (remaining, Some(remaining))
    }
}

impl<NI: Idx> ExactSizeIterator for EdgeSampler<NI> {}

impl<NI: Idx> FusedIterator for EdgeSampler<NI> {}

/// Checks that `shape` can be sampled with node ids of type `NI`.
pub fn validate<NI: Idx>(shape: GraphShape, uniqueness: Uniqueness) -> Result<(), Error> {
    let GraphShape {
        node_count,
        edge_count,
    } = shape;

    if node_count == 0 || edge_count == 0 {
        return Err(Error::EmptyGraph {
            node_count,
            edge_count,
        });
    }

    if !NI::fits(node_count) {
        return Err(Error::IdxError {
            node_count,
            max_index: NI::MAX_INDEX,
        });
    }

    let capacity = uniqueness.capacity(shape);
    if edge_count as u128 > capacity {
        return Err(Error::Infeasible {
            requested: edge_count,
            capacity,
        });
    }

    Ok(())
}

/// Samples `edge_count` distinct edges over `node_count` nodes.
pub fn generate<NI: Idx>(node_count: usize, edge_count: usize) -> Result<Vec<Edge<NI>>, Error> {
    generate_with(GraphShape::new(node_count, edge_count), Uniqueness::Pair, None)
}

/// Like [`generate`], but reproducible for a given `seed`.
pub fn generate_with_seed<NI: Idx>(
    node_count: usize,
    edge_count: usize,
    seed: u64,
) -> Result<Vec<Edge<NI>>, Error> {
    generate_with(
        GraphShape::new(node_count, edge_count),
        Uniqueness::Pair,
        Some(seed),
    )
}

/// Samples all edges of `shape` with the given duplicate rule.
///
/// Without a seed the sampler is seeded from OS entropy.
pub fn generate_with<NI: Idx>(
    shape: GraphShape,
    uniqueness: Uniqueness,
    seed: Option<u64>,
) -> Result<Vec<Edge<NI>>, Error> {
    let sampler = match seed {
        Some(seed) => EdgeSampler::<NI>::with_seed(shape, uniqueness, seed)?,
        None => EdgeSampler::<NI>::new(shape, uniqueness)?,
    };
    Ok(sampler.collect())
}
