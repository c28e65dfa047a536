//! Seeded test-vector generation
//!
//! The seed is an explicit parameter: callers that need distinct vectors pass
//! distinct seeds, rather than relying on hidden process-wide state.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Generate `len` elements in `0..100` from an explicitly seeded ChaCha8 RNG.
///
/// The same `(len, seed)` pair always produces the same vector.
pub fn seeded_vector(len: usize, seed: u64) -> Vec<i32> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..len).map(|_| rng.gen_range(0..100)).collect()
}
