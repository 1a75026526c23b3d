//! Ops-as-values description of a complete run.
//!
//! [`UlamConfig`] collects the parameters the command line exposes and
//! turns them into a starter row, an automaton and a finished grid.

use num_bigint::BigUint;
use rand::SeedableRng;
use rand::rngs::StdRng;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::engine::Automaton;
use crate::error::Result;
use crate::grid::{Grid, cell_count, generate};
use crate::palette::Palette;
use crate::random::random_valid_code;
use crate::starter;
use crate::symmetry::Symmetry;

/// How generation 0 is produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum StarterKind {
    /// Uniform random states.
    #[default]
    Random,
    /// A single 1 in the center.
    Impulse,
}

/// Configuration for generating one grid.
///
/// When `seed` is set the whole run, including a random code and a random
/// starter, is reproducible.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct UlamConfig {
    /// Neighborhood radius.
    pub radius: u32,
    /// Cells per row.
    pub width: usize,
    /// Number of generations, including the starter.
    pub height: usize,
    /// Rule code (None = draw a random valid code).
    #[cfg_attr(feature = "serde", serde(with = "decimal_code"))]
    pub code: Option<BigUint>,
    /// Seed for the random source (None = seed from the OS).
    pub seed: Option<u64>,
    /// Starter row kind.
    pub starter: StarterKind,
    /// Symmetry applied to the finished grid.
    pub symmetry: Symmetry,
}

impl UlamConfig {
    /// Creates a configuration with the given size and defaults elsewhere.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            radius: 1,
            width,
            height,
            code: None,
            seed: None,
            starter: StarterKind::Random,
            symmetry: Symmetry::None,
        }
    }

    /// Sets the neighborhood radius.
    pub fn with_radius(mut self, radius: u32) -> Self {
        self.radius = radius;
        self
    }

    /// Uses a fixed rule code.
    pub fn with_code(mut self, code: BigUint) -> Self {
        self.code = Some(code);
        self
    }

    /// Seeds the random source.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Sets the starter row kind.
    pub fn with_starter(mut self, starter: StarterKind) -> Self {
        self.starter = starter;
        self
    }

    /// Sets the symmetry transform.
    pub fn with_symmetry(mut self, symmetry: Symmetry) -> Self {
        self.symmetry = symmetry;
        self
    }

    /// Runs the configuration with `radix` cell states.
    ///
    /// A random code is drawn before the random starter, both from the same
    /// source.
    pub fn apply(&self, radix: u32) -> Result<UlamRun> {
        cell_count(self.width, self.height)?;
        let mut rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        let code = match &self.code {
            Some(code) => code.clone(),
            None => random_valid_code(radix, self.radius, &mut rng)?,
        };
        let automaton = Automaton::new(code.clone(), radix, self.radius)?;

        let row = match self.starter {
            StarterKind::Random => starter::random(radix, self.width, &mut rng)?,
            StarterKind::Impulse => starter::impulse(self.width),
        };
        let grid = generate(&row, &automaton, self.height)?;

        Ok(UlamRun {
            code,
            radix,
            radius: self.radius,
            width: self.width,
            height: self.height,
            grid: self.symmetry.apply(&grid)?,
        })
    }
}

impl Default for UlamConfig {
    fn default() -> Self {
        Self::new(512, 512)
    }
}

/// Result of [`UlamConfig::apply`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UlamRun {
    code: BigUint,
    radix: u32,
    radius: u32,
    width: usize,
    height: usize,
    grid: Grid,
}

impl UlamRun {
    /// The rule code that was run.
    pub fn code(&self) -> &BigUint {
        &self.code
    }

    /// Number of cell states.
    pub fn radix(&self) -> u32 {
        self.radix
    }

    /// Neighborhood radius.
    pub fn radius(&self) -> u32 {
        self.radius
    }

    /// The generated grid, after symmetry.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Consumes the run, returning the grid.
    pub fn into_grid(self) -> Grid {
        self.grid
    }

    /// Provenance record for this run.
    pub fn summary(&self, palette: &Palette) -> RunSummary {
        RunSummary {
            colors: palette.to_hex(),
            radius: self.radius,
            size: [self.width, self.height],
            code: self.code.to_string(),
        }
    }
}

/// Parameters needed to reproduce a grid.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RunSummary {
    /// Palette as `#rrggbb` strings; its length is the radix.
    pub colors: Vec<String>,
    /// Neighborhood radius.
    pub radius: u32,
    /// Width and height before symmetry.
    pub size: [usize; 2],
    /// Rule code in decimal.
    pub code: String,
}

/// Serializes rule codes as decimal strings, which survive any format's
/// integer width.
#[cfg(feature = "serde")]
mod decimal_code {
    use num_bigint::BigUint;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(code: &Option<BigUint>, s: S) -> Result<S::Ok, S::Error> {
        match code {
            Some(code) => s.serialize_some(&code.to_string()),
            None => s.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Option<BigUint>, D::Error> {
        Option::<String>::deserialize(d)?
            .map(|s| s.parse().map_err(serde::de::Error::custom))
            .transpose()
    }
}
