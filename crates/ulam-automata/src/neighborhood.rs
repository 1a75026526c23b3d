//! Circular neighborhoods on a 1D row.
//!
//! A window always holds `2r+1` cells, even when it wraps around a short
//! row more than once. Radii are expected to come from a validated
//! [`RuleTable`](crate::RuleTable), which keeps them small (at most 7 for
//! two states).

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Returns the `2r+1` cells centered on `position`, wrapping at both ends.
///
/// The row is circular: the cell before index 0 is the last cell. An empty
/// row has no neighborhoods and yields an empty vector.
pub fn neighborhood<T: Copy>(row: &[T], position: usize, radius: u32) -> Vec<T> {
    let mut out = Vec::new();
    neighborhood_into(row, position, radius, &mut out);
    out
}

/// Like [`neighborhood`], but clears and refills `out` instead of allocating.
pub fn neighborhood_into<T: Copy>(row: &[T], position: usize, radius: u32, out: &mut Vec<T>) {
    out.clear();
    if row.is_empty() {
        return;
    }
    let len = row.len() as i64;
    let r = i64::from(radius);
    let center = position as i64;
    out.extend((center - r..=center + r).map(|i| row[i.rem_euclid(len) as usize]));
}

/// Symmetric window of offsets `-r..=r` around a center cell.
///
/// ```text
///  r = 1:  ┌───┬───┬───┐
///          │-1 │ 0 │+1 │
///          └───┴───┴───┘
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Neighborhood1D {
    radius: u32,
    offsets: Vec<i64>,
}

impl Neighborhood1D {
    /// Creates the window for the given radius.
    pub fn new(radius: u32) -> Self {
        let r = i64::from(radius);
        Self {
            radius,
            offsets: (-r..=r).collect(),
        }
    }

    /// Returns the radius of this neighborhood.
    pub fn radius(&self) -> u32 {
        self.radius
    }

    /// Number of cells in the window, `2r+1`.
    pub fn window(&self) -> usize {
        self.offsets.len()
    }

    /// Relative offsets, leftmost first.
    pub fn offsets(&self) -> &[i64] {
        &self.offsets
    }

    /// Clears `out` and fills it with the window around `position`.
    pub fn gather<T: Copy>(&self, row: &[T], position: usize, out: &mut Vec<T>) {
        out.clear();
        if row.is_empty() {
            return;
        }
        let len = row.len() as i64;
        let center = position as i64;
        out.extend(
            self.offsets
                .iter()
                .map(|&dx| row[(center + dx).rem_euclid(len) as usize]),
        );
    }
}
