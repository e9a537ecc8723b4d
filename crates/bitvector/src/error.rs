use std::collections::TryReserveError;

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The allocator could not provide limb storage. The vector that requested it is unchanged.
    #[error("failed to allocate {limbs} limbs")]
    Allocation {
        limbs: usize,
        #[source]
        source: TryReserveError,
    },
    /// A checked accessor was given an index outside the logical length or the allocated limbs.
    #[error("index out of bounds: {index} >= {len}")]
    OutOfBounds { index: usize, len: usize },
}
