//! Mirror and rotation tilings that impose symmetry on a grid.
//!
//! ```text
//! twofold_h      twofold_v    fourfold       pinwheel
//! ┌────┬────┐    ┌────┐       ┌────┬────┐    ┌────┬────┐
//! │ G  │ H  │    │ G  │       │ G  │ H  │    │ R0 │ R1 │
//! └────┴────┘    ├────┤       ├────┼────┤    ├────┼────┤
//!                │ V  │       │ V  │ HV │    │ R3 │ R2 │
//!                └────┘       └────┴────┘    └────┴────┘
//! ```
//!
//! `H` and `V` are horizontal and vertical mirror images of the grid `G`;
//! `Rn` is `G` rotated `n` quarter turns counter-clockwise.

use crate::error::{AutomatonError, Result};
use crate::grid::Grid;

/// Mirrors the grid left to right.
pub fn flip_h(grid: &Grid) -> Grid {
    let (w, h) = (grid.width(), grid.height());
    let mut out = Grid::zeroed(w, h);
    for (y, row) in grid.rows().enumerate() {
        for (x, &value) in row.iter().enumerate() {
            out.set(w - 1 - x, y, value);
        }
    }
    out
}

/// Mirrors the grid top to bottom.
pub fn flip_v(grid: &Grid) -> Grid {
    let (w, h) = (grid.width(), grid.height());
    let mut out = Grid::zeroed(w, h);
    for (y, row) in grid.rows().enumerate() {
        for (x, &value) in row.iter().enumerate() {
            out.set(x, h - 1 - y, value);
        }
    }
    out
}

/// Rotates the grid 90° counter-clockwise `turns` times.
pub fn rotate(grid: &Grid, turns: u32) -> Grid {
    (0..turns % 4).fold(grid.clone(), |g, _| rotate_once(&g))
}

fn rotate_once(grid: &Grid) -> Grid {
    let (w, h) = (grid.width(), grid.height());
    let mut out = Grid::zeroed(h, w);
    for (y, row) in grid.rows().enumerate() {
        for (x, &value) in row.iter().enumerate() {
            out.set(y, w - 1 - x, value);
        }
    }
    out
}

/// The grid followed by its left-right mirror, doubling the width.
pub fn twofold_h(grid: &Grid) -> Result<Grid> {
    let (w, h) = (grid.width(), grid.height());
    let mut out = Grid::new(2 * w, h)?;
    for (y, row) in grid.rows().enumerate() {
        for (x, &value) in row.iter().enumerate() {
            out.set(x, y, value);
            out.set(2 * w - 1 - x, y, value);
        }
    }
    Ok(out)
}

/// The grid followed by its top-bottom mirror, doubling the height.
pub fn twofold_v(grid: &Grid) -> Result<Grid> {
    let (w, h) = (grid.width(), grid.height());
    let mut out = Grid::new(w, 2 * h)?;
    for (y, row) in grid.rows().enumerate() {
        for (x, &value) in row.iter().enumerate() {
            out.set(x, y, value);
            out.set(x, 2 * h - 1 - y, value);
        }
    }
    Ok(out)
}

/// Four mirrored copies: `twofold_v(twofold_h(grid))`.
pub fn fourfold(grid: &Grid) -> Result<Grid> {
    twofold_v(&twofold_h(grid)?)
}

/// 2x2 tiling of a square grid rotated a quarter turn further in each
/// quadrant, counter-clockwise from the top-left.
pub fn pinwheel(grid: &Grid) -> Result<Grid> {
    let (w, h) = (grid.width(), grid.height());
    if w != h {
        return Err(AutomatonError::NotSquare {
            width: w,
            height: h,
        });
    }

    let n = w;
    let mut out = Grid::new(2 * n, 2 * n)?;
    // (turns, x offset, y offset)
    let quadrants = [(0, 0, 0), (1, n, 0), (2, n, n), (3, 0, n)];
    for (turns, ox, oy) in quadrants {
        let tile = rotate(grid, turns);
        for (y, row) in tile.rows().enumerate() {
            for (x, &value) in row.iter().enumerate() {
                out.set(ox + x, oy + y, value);
            }
        }
    }
    Ok(out)
}

/// Named symmetry transform, for selecting one from configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum Symmetry {
    /// Leave the grid as is.
    #[default]
    None,
    /// See [`twofold_h`].
    TwofoldH,
    /// See [`twofold_v`].
    TwofoldV,
    /// See [`fourfold`].
    Fourfold,
    /// See [`pinwheel`].
    Pinwheel,
}

impl Symmetry {
    /// Applies the transform.
    pub fn apply(self, grid: &Grid) -> Result<Grid> {
        match self {
            Symmetry::None => Ok(grid.clone()),
            Symmetry::TwofoldH => twofold_h(grid),
            Symmetry::TwofoldV => twofold_v(grid),
            Symmetry::Fourfold => fourfold(grid),
            Symmetry::Pinwheel => pinwheel(grid),
        }
    }
}
