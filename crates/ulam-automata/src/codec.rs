//! Conversion between integers and fixed-radix digit sequences.
//!
//! Digits are little endian: index `i` holds the coefficient of `radix^i`.
//! Rule codes and neighborhood indices both use this layout, so a
//! neighborhood packed with [`pack_index`] addresses the same digit that
//! [`unpack`] extracts from a code.

use num_bigint::BigUint;
use num_traits::Zero;

use crate::error::{AutomatonError, Result};

/// Packs digits into `Σ digits[i] * radix^i`.
///
/// Digits are not required to be below `radix`; larger digits simply carry
/// into higher places.
pub fn pack(digits: &[u32], radix: u32) -> BigUint {
    digits
        .iter()
        .rev()
        .fold(BigUint::zero(), |acc, &digit| acc * radix + digit)
}

/// Packs digits into a machine word, or `None` if the value overflows.
pub fn pack_index(digits: &[u32], radix: u32) -> Option<usize> {
    let radix = usize::try_from(radix).ok()?;
    digits.iter().rev().try_fold(0usize, |acc, &digit| {
        acc.checked_mul(radix)?
            .checked_add(usize::try_from(digit).ok()?)
    })
}

/// Splits `n` into its base-`radix` digits, least significant first.
///
/// Zero has no nonzero digits and unpacks to an empty vector. Use
/// [`unpack_padded`] when a fixed number of digits is required.
pub fn unpack(n: &BigUint, radix: u32) -> Result<Vec<u32>> {
    if radix < 2 {
        return Err(AutomatonError::InvalidRadix { radix });
    }

    if n.is_zero() {
        return Ok(Vec::new());
    }
    if radix <= 256 {
        return Ok(n.to_radix_le(radix).into_iter().map(u32::from).collect());
    }

    let mut n = n.clone();
    let mut digits = Vec::with_capacity(digit_capacity(&n, radix));
    while !n.is_zero() {
        let remainder = &n % radix;
        digits.push(remainder.iter_u32_digits().next().unwrap_or(0));
        n /= radix;
    }
    Ok(digits)
}

/// Like [`unpack`], but zero-extends the result to exactly `len` digits.
pub fn unpack_padded(n: &BigUint, radix: u32, len: usize) -> Result<Vec<u32>> {
    let mut digits = unpack(n, radix)?;
    if digits.len() > len {
        return Err(AutomatonError::DigitOverflow {
            needed: digits.len(),
            len,
        });
    }
    digits.resize(len, 0);
    Ok(digits)
}

/// Upper bound on the digit count, used only to size the output buffer.
fn digit_capacity(n: &BigUint, radix: u32) -> usize {
    let bits_per_digit = (u32::BITS - 1 - radix.leading_zeros()) as u64;
    (n.bits() / bits_per_digit + 1) as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    fn big(n: u64) -> BigUint {
        BigUint::from(n)
    }

    #[test]
    fn test_unpack_literals() {
        assert_eq!(unpack(&big(10), 8).unwrap(), vec![2, 1]);
        assert_eq!(unpack(&big(10), 7).unwrap(), vec![3, 1]);
        assert_eq!(unpack(&big(10), 6).unwrap(), vec![4, 1]);
        assert_eq!(unpack(&big(10), 5).unwrap(), vec![0, 2]);
        assert_eq!(unpack(&big(10), 4).unwrap(), vec![2, 2]);
        assert_eq!(unpack(&big(10), 3).unwrap(), vec![1, 0, 1]);
        assert_eq!(unpack(&big(10), 2).unwrap(), vec![0, 1, 0, 1]);
        assert_eq!(unpack(&big(11), 2).unwrap(), vec![1, 1, 0, 1]);
        assert_eq!(unpack(&big(12), 2).unwrap(), vec![0, 0, 1, 1]);
        assert_eq!(unpack(&big(13), 2).unwrap(), vec![1, 0, 1, 1]);
        assert_eq!(unpack(&big(14), 2).unwrap(), vec![0, 1, 1, 1]);
    }

    #[test]
    fn test_pack_literals() {
        assert_eq!(pack(&[2, 1], 8), big(10));
        assert_eq!(pack(&[0, 1, 0, 1], 2), big(10));
        assert_eq!(pack(&[1, 0, 1], 3), big(10));
        assert_eq!(pack(&[], 5), big(0));
    }

    #[test]
    fn test_pack_accepts_oversized_digits() {
        // 9 + 3 * 4 = 21
        assert_eq!(pack(&[9, 3], 4), big(21));
    }

    #[test]
    fn test_unpack_zero_is_empty() {
        assert!(unpack(&big(0), 2).unwrap().is_empty());
        assert!(unpack(&big(0), 255).unwrap().is_empty());
    }

    #[test]
    fn test_unpack_rejects_small_radix() {
        assert_eq!(
            unpack(&big(10), 1),
            Err(AutomatonError::InvalidRadix { radix: 1 })
        );
        assert_eq!(
            unpack(&big(10), 0),
            Err(AutomatonError::InvalidRadix { radix: 0 })
        );
    }

    #[test]
    fn test_unpack_large_radix() {
        let radix = u32::MAX;
        let n = BigUint::from(radix) * 7u32 + 5u32;
        assert_eq!(unpack(&n, radix).unwrap(), vec![5, 7]);
    }

    #[test]
    fn test_unpack_padded() {
        assert_eq!(unpack_padded(&big(0), 2, 3).unwrap(), vec![0, 0, 0]);
        assert_eq!(unpack_padded(&big(10), 8, 4).unwrap(), vec![2, 1, 0, 0]);
        assert_eq!(
            unpack_padded(&big(10), 2, 3),
            Err(AutomatonError::DigitOverflow { needed: 4, len: 3 })
        );
    }

    #[test]
    fn test_pack_index_matches_pack() {
        assert_eq!(pack_index(&[1, 0, 1], 2), Some(5));
        assert_eq!(pack_index(&[2, 1], 8), Some(10));
        assert_eq!(pack_index(&[], 3), Some(0));
    }

    #[test]
    fn test_pack_index_overflow() {
        let digits = vec![1u32; 80];
        assert_eq!(pack_index(&digits, 2), None);
    }

    #[test]
    fn test_round_trip_sampled() {
        for code in (0u64..4096).step_by(37) {
            for radix in [2, 3, 7, 10, 16, 255] {
                let n = big(code);
                assert_eq!(pack(&unpack(&n, radix).unwrap(), radix), n);
            }
        }
    }

    mod property_based_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Packing the digits of any value reproduces the value.
            #[test]
            fn prop_round_trip(words in proptest::collection::vec(any::<u32>(), 0..12), radix in 2u32..1024) {
                let n = BigUint::new(words);
                let digits = unpack(&n, radix).unwrap();
                prop_assert_eq!(pack(&digits, radix), n);
            }

            /// Every unpacked digit is a valid coefficient.
            #[test]
            fn prop_digits_below_radix(words in proptest::collection::vec(any::<u32>(), 0..8), radix in 2u32..300) {
                let digits = unpack(&BigUint::new(words), radix).unwrap();
                prop_assert!(digits.iter().all(|&d| d < radix));
                prop_assert!(digits.last().is_none_or(|&d| d != 0));
            }
        }
    }
}
