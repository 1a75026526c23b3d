//! Cell-state to color lookup.
//!
//! A palette is a plain lookup table: state `i` is drawn with color `i`.
//! The number of colors is the number of states the automaton runs with.

use crate::error::{AutomatonError, Result};
use crate::grid::Grid;

/// 8-bit sRGB triple.
pub type Rgb8 = [u8; 3];

/// Ordered list of colors indexed by cell state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    colors: Vec<Rgb8>,
}

impl Palette {
    /// White (0xFFFFFF).
    pub const WHITE: Rgb8 = [0xFF, 0xFF, 0xFF];
    /// Black (0x000000).
    pub const BLACK: Rgb8 = [0x00, 0x00, 0x00];

    /// Creates a palette from colors, state 0 first.
    pub fn new(colors: Vec<Rgb8>) -> Self {
        Self { colors }
    }

    /// Parses `#RRGGBB` (or bare `RRGGBB`) strings.
    pub fn from_hex<S: AsRef<str>>(colors: &[S]) -> Result<Self> {
        colors
            .iter()
            .map(|c| parse_hex(c.as_ref()))
            .collect::<Result<Vec<_>>>()
            .map(Self::new)
    }

    /// Number of colors, i.e. the radix this palette can draw.
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Returns true if the palette has no colors.
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Radix implied by the palette size, saturating at `u32::MAX`.
    pub fn radix(&self) -> u32 {
        u32::try_from(self.colors.len()).unwrap_or(u32::MAX)
    }

    /// Returns the color for a state.
    pub fn get(&self, state: u32) -> Option<Rgb8> {
        self.colors.get(state as usize).copied()
    }

    /// Returns all colors.
    pub fn colors(&self) -> &[Rgb8] {
        &self.colors
    }

    /// Colors as `#rrggbb` strings.
    pub fn to_hex(&self) -> Vec<String> {
        self.colors
            .iter()
            .map(|[r, g, b]| format!("#{r:02x}{g:02x}{b:02x}"))
            .collect()
    }

    /// Every ordered choice of `count` distinct colors, as palettes.
    ///
    /// Choices come in lexicographic order of color index. Nothing is yielded
    /// when `count` exceeds the palette size; `count == 0` yields one empty
    /// palette.
    pub fn permutations(&self, count: usize) -> Permutations<'_> {
        Permutations {
            colors: &self.colors,
            indices: (count <= self.colors.len()).then(|| (0..count).collect()),
        }
    }

    /// Maps every cell of the grid to its color, in row-major order.
    pub fn colorize(&self, grid: &Grid) -> Result<Vec<Rgb8>> {
        grid.cells()
            .iter()
            .map(|&state| {
                self.get(state).ok_or(AutomatonError::InvalidCell {
                    value: state,
                    radix: self.radix(),
                })
            })
            .collect()
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::new(vec![Self::WHITE, Self::BLACK])
    }
}

/// Iterator over color permutations, see [`Palette::permutations`].
#[derive(Debug, Clone)]
pub struct Permutations<'a> {
    colors: &'a [Rgb8],
    indices: Option<Vec<usize>>,
}

impl Iterator for Permutations<'_> {
    type Item = Palette;

    fn next(&mut self) -> Option<Palette> {
        let indices = self.indices.as_mut()?;
        let palette = Palette::new(indices.iter().map(|&i| self.colors[i]).collect());
        if !advance(indices, self.colors.len()) {
            self.indices = None;
        }
        Some(palette)
    }
}

/// Steps `indices` to the next arrangement of distinct values below `n`.
fn advance(indices: &mut [usize], n: usize) -> bool {
    for i in (0..indices.len()).rev() {
        let used = &indices[..i];
        let Some(next) = (indices[i] + 1..n).find(|v| !used.contains(v)) else {
            continue;
        };
        indices[i] = next;
        let free: Vec<usize> = (0..n).filter(|v| !indices[..=i].contains(v)).collect();
        let tail = indices.len() - i - 1;
        indices[i + 1..].copy_from_slice(&free[..tail]);
        return true;
    }
    false
}

/// Parses a hex color code (e.g. `#FF5500`).
pub fn parse_hex(s: &str) -> Result<Rgb8> {
    let invalid = || AutomatonError::InvalidColor(s.to_string());
    let digits = s.strip_prefix('#').unwrap_or(s);
    if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(invalid());
    }
    let hex = u32::from_str_radix(digits, 16).map_err(|_| invalid())?;
    Ok([(hex >> 16) as u8, (hex >> 8) as u8, hex as u8])
}
