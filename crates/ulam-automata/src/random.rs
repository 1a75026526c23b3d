//! Uniform sampling of rule codes.
//!
//! The random source is always passed in, so a seeded generator reproduces
//! the same code on every run.

use num_bigint::BigUint;
use num_traits::One;
use rand::Rng;

use crate::error::Result;
use crate::rule::rule_count;

/// Draws a code uniformly from `[0, k^(k^(2r+1))]`, both ends inclusive.
///
/// Uses rejection sampling over the smallest power of two above the upper
/// bound, so the expected number of draws is below two.
///
/// The upper bound itself is one past the last valid rule; use
/// [`random_valid_code`] when the result is fed straight into a table.
pub fn random_code<R: Rng>(radix: u32, radius: u32, rng: &mut R) -> Result<BigUint> {
    let maximum = rule_count(radix, radius)?;
    Ok(sample_at_most(&maximum, rng))
}

/// Draws a code uniformly from the valid range `[0, k^(k^(2r+1)))`.
pub fn random_valid_code<R: Rng>(radix: u32, radius: u32, rng: &mut R) -> Result<BigUint> {
    let count = rule_count(radix, radius)?;
    Ok(sample_at_most(&(count - BigUint::one()), rng))
}

/// Uniform sample from `[0, maximum]`.
fn sample_at_most<R: Rng>(maximum: &BigUint, rng: &mut R) -> BigUint {
    let bits = maximum.bits();
    loop {
        let candidate = random_bits(bits, rng);
        if &candidate <= maximum {
            return candidate;
        }
    }
}

/// Uniform integer with `bits` random low bits.
fn random_bits<R: Rng>(bits: u64, rng: &mut R) -> BigUint {
    let len = bits.div_ceil(8) as usize;
    let mut bytes = vec![0u8; len];
    rng.fill(bytes.as_mut_slice());

    let excess = len as u64 * 8 - bits;
    if let Some(last) = bytes.last_mut() {
        *last &= 0xFF >> excess;
    }
    BigUint::from_bytes_le(&bytes)
}
