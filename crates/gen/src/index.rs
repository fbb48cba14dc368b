use std::fmt::{Debug, Display};
use std::hash::Hash;

/// A node identifier.
///
/// Implemented for the unsigned integer types that are used to address nodes
/// in the generated graph. Smaller types produce the same output, but keep the
/// seen-set of the sampler compact.
pub trait Idx: Copy + Ord + Hash + Debug + Display + Sized + 'static {
    /// The largest node id that can be represented by this type.
    const MAX_INDEX: usize;

    fn new(idx: usize) -> Self;

    fn fits(node_count: usize) -> bool {
        node_count == 0 || node_count - 1 <= Self::MAX_INDEX
    }
}

macro_rules! impl_idx {
    ($TYPE:ty) => {
        impl Idx for $TYPE {
            const MAX_INDEX: usize = if (<$TYPE>::MAX as u128) < (usize::MAX as u128) {
                <$TYPE>::MAX as usize
            } else {
                usize::MAX
            };

            #[inline]
            fn new(idx: usize) -> Self {
                assert!(idx <= Self::MAX_INDEX);
                idx as $TYPE
            }
        }
    };
}

impl_idx!(u32);
impl_idx!(u64);
impl_idx!(usize);
