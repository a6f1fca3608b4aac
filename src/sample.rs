//! Random subset sampling.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::error::SeedError;

/// Return a uniformly shuffled, size-bounded, duplicate-free subset of `items`.
///
/// The subset size is drawn uniformly from `[min_items, max_items]`. A
/// working copy of `items` is shuffled in place (Fisher-Yates) and the
/// prefix of that permutation is returned, so every subset of a given size
/// is equally likely and the caller's slice is never mutated.
pub fn random_subset<T: Clone, R: Rng>(
    rng: &mut R,
    items: &[T],
    min_items: usize,
    max_items: usize,
) -> Result<Vec<T>, SeedError> {
    if min_items > max_items {
        return Err(SeedError::InvalidRange {
            reason: "min_items cannot be greater than max_items",
            min: min_items,
            max: max_items,
            available: items.len(),
        });
    }
    if max_items > items.len() {
        return Err(SeedError::InvalidRange {
            reason: "max_items exceeds the number of available items",
            min: min_items,
            max: max_items,
            available: items.len(),
        });
    }

    let subset_size = rng.gen_range(min_items..=max_items);

    let mut working = items.to_vec();
    working.shuffle(rng);
    working.truncate(subset_size);

    Ok(working)
}
