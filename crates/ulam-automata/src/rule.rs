//! Rule tables decoded from integer codes.
//!
//! A rule for `k` states and radius `r` assigns an output state to each of
//! the `k^(2r+1)` possible neighborhoods. Reading those outputs as base-`k`
//! digits (neighborhood index `i` holds the coefficient of `k^i`) gives the
//! rule's code.
//!
//! The leftmost cell of a neighborhood is its least significant digit. For
//! `k = 2, r = 1` codes therefore follow Wolfram's numbering with the
//! neighborhood read right to left; left-right symmetric rules such as 90
//! keep their usual number.

use num_bigint::BigUint;

use crate::codec::{pack, unpack};
use crate::error::{AutomatonError, Result};

/// Largest number of distinct neighborhoods a table may address.
pub const MAX_LIMIT: usize = 1 << 16;

/// Largest code size, in bits, a table may be built for.
pub const MAX_CODE_BITS: u64 = 1 << 18;

/// Computes `k^(2r+1)`, failing before any large allocation happens.
///
/// Returns [`AutomatonError::ResourceExhausted`] when the neighborhood count
/// exceeds [`MAX_LIMIT`] or the code space exceeds [`MAX_CODE_BITS`].
pub fn rule_limit(radix: u32, radius: u32) -> Result<usize> {
    if radix < 2 {
        return Err(AutomatonError::InvalidRadix { radix });
    }
    let exhausted = AutomatonError::ResourceExhausted { radix, radius };

    let window = radius
        .checked_mul(2)
        .and_then(|w| w.checked_add(1))
        .ok_or(exhausted.clone())?;
    let limit = (radix as usize)
        .checked_pow(window)
        .filter(|&limit| limit <= MAX_LIMIT)
        .ok_or(exhausted.clone())?;

    if limit as u64 * bits_per_state(radix) > MAX_CODE_BITS {
        return Err(exhausted);
    }
    Ok(limit)
}

/// Number of distinct rules, `k^(k^(2r+1))`.
pub fn rule_count(radix: u32, radius: u32) -> Result<BigUint> {
    let limit = rule_limit(radix, radius)?;
    // limit <= MAX_LIMIT, which fits in u32
    Ok(BigUint::from(radix).pow(limit as u32))
}

/// Bits needed to store one state, `ceil(log2 k)`.
fn bits_per_state(radix: u32) -> u64 {
    u64::from(u32::BITS - (radix - 1).leading_zeros())
}

/// Lookup table mapping a packed neighborhood index to an output state.
///
/// Only the digits actually present in the code are stored; neighborhoods
/// past the code's highest digit map to 0.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleTable {
    radix: u32,
    radius: u32,
    limit: usize,
    code: BigUint,
    outcomes: Vec<u32>,
}

impl RuleTable {
    /// Decodes `code` into a table for `radix` states and the given radius.
    pub fn new(code: BigUint, radix: u32, radius: u32) -> Result<Self> {
        let limit = rule_limit(radix, radius)?;
        let invalid = AutomatonError::InvalidCode { radix, radius };

        // code >= 2^(limit * ceil(log2 k)) >= k^limit, reject before decoding
        if code.bits() > limit as u64 * bits_per_state(radix) {
            return Err(invalid);
        }
        let outcomes = unpack(&code, radix)?;
        if outcomes.len() > limit {
            return Err(invalid);
        }

        Ok(Self {
            radix,
            radius,
            limit,
            code,
            outcomes,
        })
    }

    /// Builds a table from explicit outcomes, index `i` answering neighborhood `i`.
    ///
    /// Missing trailing outcomes are zero.
    pub fn from_outcomes(outcomes: &[u32], radix: u32, radius: u32) -> Result<Self> {
        let limit = rule_limit(radix, radius)?;
        if outcomes.len() > limit {
            return Err(AutomatonError::InvalidCode { radix, radius });
        }
        if let Some(&value) = outcomes.iter().find(|&&v| v >= radix) {
            return Err(AutomatonError::InvalidCell { value, radix });
        }
        Self::new(pack(outcomes, radix), radix, radius)
    }

    /// Returns the output state for a neighborhood index.
    ///
    /// Indices up to and including `limit` are answered; anything larger is
    /// a malformed neighborhood and reported as
    /// [`AutomatonError::IndexOutOfRange`] rather than mapped to 0.
    pub fn lookup(&self, index: usize) -> Result<u32> {
        if index > self.limit {
            return Err(AutomatonError::IndexOutOfRange {
                index,
                limit: self.limit,
            });
        }
        Ok(self.outcomes.get(index).copied().unwrap_or(0))
    }

    /// Number of cell states.
    pub fn radix(&self) -> u32 {
        self.radix
    }

    /// Neighborhood radius.
    pub fn radius(&self) -> u32 {
        self.radius
    }

    /// Number of distinct neighborhoods, `k^(2r+1)`.
    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Neighborhood width, `2r+1`.
    pub fn window(&self) -> usize {
        2 * self.radius as usize + 1
    }

    /// The code this table was decoded from.
    pub fn code(&self) -> &BigUint {
        &self.code
    }

    /// Decoded outputs, without the implicit trailing zeros.
    pub fn outcomes(&self) -> &[u32] {
        &self.outcomes
    }
}

/// Common two-state, radius-one rules.
pub mod elementary_rules {
    /// Rule 30 - chaotic, used for random number generation.
    pub const RULE_30: u32 = 30;

    /// Rule 90 - Sierpinski triangle.
    pub const RULE_90: u32 = 90;

    /// Rule 110 - Turing complete.
    pub const RULE_110: u32 = 110;

    /// Rule 184 - traffic flow model.
    pub const RULE_184: u32 = 184;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::pack_index;

    fn rule_90() -> RuleTable {
        RuleTable::new(BigUint::from(elementary_rules::RULE_90), 2, 1).unwrap()
    }

    #[test]
    fn test_rule_limit() {
        assert_eq!(rule_limit(2, 1).unwrap(), 8);
        assert_eq!(rule_limit(3, 1).unwrap(), 27);
        assert_eq!(rule_limit(4, 2).unwrap(), 1024);
        assert_eq!(rule_limit(7, 0).unwrap(), 7);
    }

    #[test]
    fn test_rule_limit_rejects_blowup() {
        assert_eq!(
            rule_limit(2, 8),
            Err(AutomatonError::ResourceExhausted {
                radix: 2,
                radius: 8
            })
        );
        assert!(matches!(
            rule_limit(16, 3),
            Err(AutomatonError::ResourceExhausted { .. })
        ));
        assert!(matches!(
            rule_limit(2, u32::MAX),
            Err(AutomatonError::ResourceExhausted { .. })
        ));
    }

    #[test]
    fn test_rule_limit_rejects_small_radix() {
        assert_eq!(
            rule_limit(1, 1),
            Err(AutomatonError::InvalidRadix { radix: 1 })
        );
    }

    #[test]
    fn test_rule_count() {
        assert_eq!(rule_count(2, 1).unwrap(), BigUint::from(256u32));
        assert_eq!(rule_count(3, 0).unwrap(), BigUint::from(27u32));
        assert_eq!(rule_count(4, 2).unwrap().bits(), 2049);
    }

    #[test]
    fn test_lookup_rule_90() {
        let table = rule_90();
        let cases = [
            ([1, 1, 1], 0),
            ([1, 1, 0], 1),
            ([1, 0, 1], 0),
            ([1, 0, 0], 1),
            ([0, 1, 1], 1),
            ([0, 1, 0], 0),
            ([0, 0, 1], 1),
            ([0, 0, 0], 0),
        ];
        for (nbhd, expected) in cases {
            let index = pack_index(&nbhd, 2).unwrap();
            assert_eq!(table.lookup(index).unwrap(), expected, "{nbhd:?}");
        }
    }

    #[test]
    fn test_lookup_boundary() {
        let table = rule_90();
        assert_eq!(table.limit(), 8);
        assert_eq!(table.lookup(8).unwrap(), 0);
        assert_eq!(
            table.lookup(9),
            Err(AutomatonError::IndexOutOfRange { index: 9, limit: 8 })
        );
    }

    #[test]
    fn test_small_code_pads_with_zero() {
        let table = RuleTable::new(BigUint::from(1u32), 3, 1).unwrap();
        assert_eq!(table.outcomes(), &[1]);
        assert_eq!(table.lookup(0).unwrap(), 1);
        assert_eq!(table.lookup(26).unwrap(), 0);
    }

    #[test]
    fn test_zero_code() {
        let table = RuleTable::new(BigUint::from(0u32), 2, 1).unwrap();
        assert!(table.outcomes().is_empty());
        assert!((0..8).all(|i| table.lookup(i).unwrap() == 0));
    }

    #[test]
    fn test_invalid_code() {
        assert!(RuleTable::new(BigUint::from(255u32), 2, 1).is_ok());
        assert_eq!(
            RuleTable::new(BigUint::from(256u32), 2, 1),
            Err(AutomatonError::InvalidCode {
                radix: 2,
                radius: 1
            })
        );
        // 3^27 is the first invalid code for k = 3, r = 1
        let count = rule_count(3, 1).unwrap();
        assert!(RuleTable::new(&count - 1u32, 3, 1).is_ok());
        assert!(RuleTable::new(count, 3, 1).is_err());
    }

    #[test]
    fn test_from_outcomes() {
        // Rule 90 outputs, neighborhood 0 first.
        let table = RuleTable::from_outcomes(&[0, 1, 0, 1, 1, 0, 1, 0], 2, 1).unwrap();
        assert_eq!(table.code(), &BigUint::from(90u32));
        assert_eq!(table, rule_90());
    }

    #[test]
    fn test_from_outcomes_rejects_bad_state() {
        assert_eq!(
            RuleTable::from_outcomes(&[0, 2], 2, 1),
            Err(AutomatonError::InvalidCell { value: 2, radix: 2 })
        );
        assert!(RuleTable::from_outcomes(&[0; 9], 2, 1).is_err());
    }

    #[test]
    fn test_accessors() {
        let table = RuleTable::new(BigUint::from(12345u32), 4, 2).unwrap();
        assert_eq!(table.radix(), 4);
        assert_eq!(table.radius(), 2);
        assert_eq!(table.window(), 5);
        assert_eq!(table.limit(), 1024);
        assert_eq!(table.code(), &BigUint::from(12345u32));
    }
}
