//! Advancing a row by one generation.

use num_bigint::BigUint;

use crate::codec::pack_index;
use crate::error::{AutomatonError, Result};
use crate::neighborhood::Neighborhood1D;
use crate::rule::RuleTable;

/// A k-state, radius-r cellular automaton on a circular row.
///
/// # Example
///
/// ```
/// use num_bigint::BigUint;
/// use ulam_automata::Automaton;
///
/// let ca = Automaton::new(BigUint::from(90u32), 2, 1)?;
/// assert_eq!(ca.step(&[0, 1, 0])?, vec![1, 0, 1]);
/// # Ok::<(), ulam_automata::AutomatonError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Automaton {
    table: RuleTable,
    neighborhood: Neighborhood1D,
}

impl Automaton {
    /// Creates an automaton from a rule code.
    pub fn new(code: BigUint, radix: u32, radius: u32) -> Result<Self> {
        RuleTable::new(code, radix, radius).map(Self::from_table)
    }

    /// Creates an automaton from an already decoded table.
    pub fn from_table(table: RuleTable) -> Self {
        let neighborhood = Neighborhood1D::new(table.radius());
        Self {
            table,
            neighborhood,
        }
    }

    /// Returns the rule table.
    pub fn table(&self) -> &RuleTable {
        &self.table
    }

    /// Number of cell states.
    pub fn radix(&self) -> u32 {
        self.table.radix()
    }

    /// Neighborhood radius.
    pub fn radius(&self) -> u32 {
        self.table.radius()
    }

    /// Checks that every cell is a valid state for this automaton.
    pub fn validate_row(&self, row: &[u32]) -> Result<()> {
        let radix = self.radix();
        match row.iter().find(|&&value| value >= radix) {
            Some(&value) => Err(AutomatonError::InvalidCell { value, radix }),
            None => Ok(()),
        }
    }

    /// Computes the next generation of `row`.
    pub fn step(&self, row: &[u32]) -> Result<Vec<u32>> {
        let mut next = vec![0; row.len()];
        self.step_into(row, &mut next)?;
        Ok(next)
    }

    /// Computes the next generation of `row` into `out`.
    ///
    /// `out` must have the same length as `row`. Every output cell is derived
    /// from `row` alone, so `out` is never read.
    pub fn step_into(&self, row: &[u32], out: &mut [u32]) -> Result<()> {
        if out.len() != row.len() {
            return Err(AutomatonError::LengthMismatch {
                expected: row.len(),
                got: out.len(),
            });
        }
        self.validate_row(row)?;
        self.fill_next(row, out)
    }

    /// Advances `row` by `n` generations.
    pub fn steps(&self, row: &[u32], n: usize) -> Result<Vec<u32>> {
        self.validate_row(row)?;
        let mut current = row.to_vec();
        let mut next = vec![0; row.len()];
        for _ in 0..n {
            self.fill_next(&current, &mut next)?;
            std::mem::swap(&mut current, &mut next);
        }
        Ok(current)
    }

    /// Returns an endless iterator over `starter` and its successors.
    pub fn generations(&self, starter: &[u32]) -> Result<Generations<'_>> {
        self.validate_row(starter)?;
        Ok(Generations {
            automaton: self,
            current: Some(starter.to_vec()),
        })
    }

    /// Packs a neighborhood into a table index and looks it up.
    fn apply(&self, nbhd: &[u32]) -> Result<u32> {
        let index =
            pack_index(nbhd, self.radix()).ok_or_else(|| AutomatonError::IndexOutOfRange {
                index: usize::MAX,
                limit: self.table.limit(),
            })?;
        self.table.lookup(index)
    }

    #[cfg(not(feature = "parallel"))]
    fn fill_next(&self, row: &[u32], out: &mut [u32]) -> Result<()> {
        let mut nbhd = Vec::with_capacity(self.neighborhood.window());
        for (position, cell) in out.iter_mut().enumerate() {
            self.neighborhood.gather(row, position, &mut nbhd);
            *cell = self.apply(&nbhd)?;
        }
        Ok(())
    }

    #[cfg(feature = "parallel")]
    fn fill_next(&self, row: &[u32], out: &mut [u32]) -> Result<()> {
        use rayon::prelude::*;

        let window = self.neighborhood.window();
        out.par_iter_mut().enumerate().try_for_each_init(
            || Vec::with_capacity(window),
            |nbhd, (position, cell)| {
                self.neighborhood.gather(row, position, nbhd);
                *cell = self.apply(nbhd)?;
                Ok(())
            },
        )
    }
}

/// Iterator over successive generations, see [`Automaton::generations`].
#[derive(Debug)]
pub struct Generations<'a> {
    automaton: &'a Automaton,
    current: Option<Vec<u32>>,
}

impl Iterator for Generations<'_> {
    type Item = Vec<u32>;

    fn next(&mut self) -> Option<Self::Item> {
        let row = self.current.take()?;
        let next = self.automaton.step(&row);
        // The starter was validated and every later row comes from the table.
        debug_assert!(next.is_ok(), "step failed on a validated row: {next:?}");
        self.current = next.ok();
        Some(row)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rule::elementary_rules;

    fn rule_90() -> Automaton {
        Automaton::new(BigUint::from(elementary_rules::RULE_90), 2, 1).unwrap()
    }

    #[test]
    fn test_rule_90_all_rows() {
        let ca = rule_90();
        let cases = [
            ([0, 0, 0], [0, 0, 0]),
            ([0, 0, 1], [1, 1, 0]),
            ([0, 1, 0], [1, 0, 1]),
            ([0, 1, 1], [0, 1, 1]),
            ([1, 0, 0], [0, 1, 1]),
            ([1, 0, 1], [1, 0, 1]),
            ([1, 1, 0], [1, 1, 0]),
            ([1, 1, 1], [0, 0, 0]),
        ];
        for (row, expected) in cases {
            assert_eq!(ca.step(&row).unwrap(), expected, "{row:?}");
        }
    }

    #[test]
    fn test_rule_90_center_cell() {
        // Rule 90 produces Sierpinski triangle
        let ca = rule_90();
        let mut row = vec![0; 11];
        row[5] = 1;

        let next = ca.step(&row).unwrap();
        assert_eq!(next.iter().filter(|&&c| c == 1).count(), 2);
        assert_eq!(next[4], 1);
        assert_eq!(next[6], 1);
    }

    #[test]
    fn test_step_does_not_mutate_input() {
        let ca = rule_90();
        let row = vec![0, 1, 1, 0, 1];
        let copy = row.clone();
        let _ = ca.step(&row).unwrap();
        assert_eq!(row, copy);
    }

    #[test]
    fn test_step_rejects_invalid_cell() {
        let ca = rule_90();
        assert_eq!(
            ca.step(&[0, 2, 0]),
            Err(AutomatonError::InvalidCell { value: 2, radix: 2 })
        );
    }

    #[test]
    fn test_step_into_length_mismatch() {
        let ca = rule_90();
        let mut out = [0; 2];
        assert_eq!(
            ca.step_into(&[0, 1, 0], &mut out),
            Err(AutomatonError::LengthMismatch {
                expected: 3,
                got: 2
            })
        );
    }

    #[test]
    fn test_step_empty_row() {
        assert!(rule_90().step(&[]).unwrap().is_empty());
    }

    #[test]
    fn test_identity_rule() {
        // k = 3, r = 1: output the center cell, i.e. digit i is (i / 3) % 3.
        let outcomes: Vec<u32> = (0..27u32).map(|i| (i / 3) % 3).collect();
        let table = RuleTable::from_outcomes(&outcomes, 3, 1).unwrap();
        let ca = Automaton::from_table(table);

        let row = vec![2, 0, 1, 1, 2, 0, 0];
        assert_eq!(ca.step(&row).unwrap(), row);
    }

    #[test]
    fn test_shift_rule_radius_two() {
        // Output the leftmost neighbor: digit 0 of the packed index.
        let outcomes: Vec<u32> = (0..32u32).map(|i| i % 2).collect();
        let table = RuleTable::from_outcomes(&outcomes, 2, 2).unwrap();
        let ca = Automaton::from_table(table);

        // Leftmost of the window around n is n - 2.
        let row = vec![1, 0, 0, 0, 0, 0];
        assert_eq!(ca.step(&row).unwrap(), vec![0, 0, 1, 0, 0, 0]);
    }

    #[test]
    fn test_radius_zero() {
        // k = 3, r = 0: a pure state map 0 -> 1 -> 2 -> 0.
        let table = RuleTable::from_outcomes(&[1, 2, 0], 3, 0).unwrap();
        let ca = Automaton::from_table(table);
        assert_eq!(ca.step(&[0, 1, 2]).unwrap(), vec![1, 2, 0]);
    }

    #[test]
    fn test_steps_matches_repeated_step() {
        let ca = Automaton::new(BigUint::from(elementary_rules::RULE_30), 2, 1).unwrap();
        let mut row = vec![0; 21];
        row[10] = 1;

        let mut expected = row.clone();
        for _ in 0..7 {
            expected = ca.step(&expected).unwrap();
        }
        assert_eq!(ca.steps(&row, 7).unwrap(), expected);
        assert_eq!(ca.steps(&row, 0).unwrap(), row);
    }

    #[test]
    fn test_generations() {
        let ca = rule_90();
        let rows: Vec<_> = ca.generations(&[0, 0, 1, 0, 0]).unwrap().take(3).collect();
        assert_eq!(
            rows,
            vec![
                vec![0, 0, 1, 0, 0],
                vec![0, 1, 0, 1, 0],
                vec![1, 0, 0, 0, 1],
            ]
        );
    }

    #[test]
    fn test_generations_rejects_invalid_starter() {
        assert!(rule_90().generations(&[3]).is_err());
    }

    #[test]
    fn test_generations_never_end_early() {
        let outcomes: Vec<u32> = (0..243).map(|i| (i * 7 + 1) % 3).collect();
        let table = RuleTable::from_outcomes(&outcomes, 3, 2).unwrap();
        let ca = Automaton::from_table(table);
        let starter = [2, 0, 1];

        let rows: Vec<_> = ca.generations(&starter).unwrap().take(64).collect();
        assert_eq!(rows.len(), 64);
        assert_eq!(rows[63], ca.steps(&starter, 63).unwrap());
    }
}
