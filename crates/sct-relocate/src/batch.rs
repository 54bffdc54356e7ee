//! Contiguous batch partitioning.

use std::collections::VecDeque;

use sct_core::Destination;

use crate::Movable;

/// One scheduling step's worth of work: ≤ batch-size (destination, movable)
/// pairs, in input order.
pub type Batch = Vec<(Destination, Movable)>;

/// Partition paired inputs into contiguous batches of at most `batch_size`
/// pairs (the last batch may be shorter), preserving pairing by index and
/// overall order.
///
/// Callers guarantee `destinations.len() == movables.len()` and
/// `batch_size > 0`; [`Relocator::start`][crate::Relocator::start] validates
/// both before partitioning.
pub fn partition(
    destinations: Vec<Destination>,
    movables:     Vec<Movable>,
    batch_size:   usize,
) -> VecDeque<Batch> {
    debug_assert_eq!(destinations.len(), movables.len());
    debug_assert!(batch_size > 0);

    let total = destinations.len();
    let mut batches = VecDeque::with_capacity(total.div_ceil(batch_size));

    let mut pairs = destinations.into_iter().zip(movables);
    loop {
        let batch: Batch = pairs.by_ref().take(batch_size).collect();
        if batch.is_empty() {
            break;
        }
        batches.push_back(batch);
    }
    batches
}
