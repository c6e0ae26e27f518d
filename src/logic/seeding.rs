//! Pool & seed selection: draw the entrants for a bracket from an option pool.

use crate::models::BracketError;
use rand::seq::SliceRandom;
use rand::Rng;

/// Source of uniform random permutations. Injected so seeding can be made deterministic.
pub trait RandomSource {
    fn shuffle<T>(&mut self, items: Vec<T>) -> Vec<T>;
}

/// Every `rand` generator shuffles (e.g. `rand::thread_rng()` in production, a seeded `StdRng` in tests).
impl<R: Rng + ?Sized> RandomSource for R {
    fn shuffle<T>(&mut self, mut items: Vec<T>) -> Vec<T> {
        SliceRandom::shuffle(items.as_mut_slice(), self);
        items
    }
}

/// Draw `count` entrants from `pool`.
///
/// 1. `must_start` entrants come first, in the given order, never shuffled. Repeats are
///    dropped so nobody is seeded twice.
/// 2. The rest of the pool (minus `must_start`) is shuffled and appended.
/// 3. The result is truncated to `count`.
///
/// Fails with `EmptyPool` for an empty pool and `InsufficientOptions` when fewer than `count`
/// entrants can be drawn, instead of handing back a short list.
pub fn select_entrants<S: RandomSource + ?Sized>(
    pool: &[String],
    count: usize,
    must_start: &[String],
    rng: &mut S,
) -> Result<Vec<String>, BracketError> {
    if pool.is_empty() {
        return Err(BracketError::EmptyPool);
    }

    let picks: Vec<String> = if must_start.is_empty() {
        rng.shuffle(pool.to_vec())
    } else {
        let mut seeds: Vec<String> = Vec::with_capacity(must_start.len());
        for seed in must_start {
            if !seeds.contains(seed) {
                seeds.push(seed.clone());
            }
        }
        let rest: Vec<String> = pool
            .iter()
            .filter(|option| !must_start.contains(option))
            .cloned()
            .collect();
        seeds.into_iter().chain(rng.shuffle(rest))
            .collect()
    };

    if picks.len() < count {
        return Err(BracketError::InsufficientOptions {
            required: count,
            available: picks.len(),
        });
    }
    Ok(picks.into_iter().take(count).collect())
}
