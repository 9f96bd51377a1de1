use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::error::{IapsError, Result};

/// Draw `n` items without replacement.
///
/// `n = None` returns every item in input order. A provided seed makes the
/// draw reproducible; otherwise the generator is seeded from OS entropy.
pub fn sample_without_replacement<T: Clone>(
    items: &[T],
    n: Option<usize>,
    seed: Option<u64>,
) -> Result<Vec<T>> {
    let n = match n {
        Some(n) => n,
        None => return Ok(items.to_vec()),
    };
    if n > items.len() {
        return Err(IapsError::SampleSize {
            requested: n,
            available: items.len(),
        });
    }

    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    // Partial Fisher-Yates: only the first `n` positions are shuffled.
    let mut scratch = items.to_vec();
    let (drawn, _) = scratch.partial_shuffle(&mut rng, n);
    Ok(drawn.to_vec())
}
