//! Starter rows for generation 0.

use rand::Rng;
use rand::seq::SliceRandom;

use crate::error::{AutomatonError, Result};

/// Uniform random states in `0..radix`.
pub fn random<R: Rng>(radix: u32, width: usize, rng: &mut R) -> Result<Vec<u32>> {
    if radix < 2 {
        return Err(AutomatonError::InvalidRadix { radix });
    }
    Ok((0..width).map(|_| rng.random_range(0..radix)).collect())
}

/// A single 1 in the center of a field of zeros (common starting condition).
pub fn impulse(width: usize) -> Vec<u32> {
    let mut row = vec![0; width];
    if let Some(center) = row.get_mut(width / 2) {
        *center = 1;
    }
    row
}

/// Repeats each element of `pattern` `n` times: `[1, 2]` becomes `[1, 1, 2, 2]`.
pub fn repeat(pattern: &[u32], n: usize) -> Vec<u32> {
    pattern
        .iter()
        .flat_map(|&value| std::iter::repeat_n(value, n))
        .collect()
}

/// Repeats the whole pattern `n` times: `[1, 2]` becomes `[1, 2, 1, 2]`.
pub fn cycle(pattern: &[u32], n: usize) -> Vec<u32> {
    pattern.repeat(n)
}

/// Appends the reversed row, doubling its length.
pub fn mirror(row: &[u32]) -> Vec<u32> {
    row.iter().chain(row.iter().rev()).copied().collect()
}

/// Returns a shuffled copy of the row.
pub fn shuffle<R: Rng>(row: &[u32], rng: &mut R) -> Vec<u32> {
    let mut out = row.to_vec();
    out.shuffle(rng);
    out
}

/// Checks that a starter is non-empty and every cell is below `radix`.
pub fn validate(row: &[u32], radix: u32) -> Result<()> {
    if row.is_empty() {
        return Err(AutomatonError::EmptyRow);
    }
    match row.iter().find(|&&value| value >= radix) {
        Some(&value) => Err(AutomatonError::InvalidCell { value, radix }),
        None => Ok(()),
    }
}
