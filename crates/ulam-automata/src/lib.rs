//! Cellular automata with `k` states and radius `r`, addressed by rule code.
//!
//! A rule assigns an output state to each of the `k^(2r+1)` neighborhoods a
//! cell can see. Read as base-`k` digits, those outputs form a single
//! (often very large) integer: the rule's code. This crate decodes codes into
//! lookup tables, advances circular rows one generation at a time, and stacks
//! the generations into a grid for rendering.
//!
//! # Example
//!
//! ```
//! use num_bigint::BigUint;
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//! use ulam_automata::{Automaton, generate, random_valid_code, starter};
//!
//! // Rule 90 from a single live cell.
//! let ca = Automaton::new(BigUint::from(90u32), 2, 1)?;
//! let grid = generate(&starter::impulse(9), &ca, 4)?;
//! assert_eq!(grid.row(1).unwrap(), &[0, 0, 0, 1, 0, 1, 0, 0, 0]);
//!
//! // A random three-state, radius-two rule.
//! let mut rng = StdRng::seed_from_u64(42);
//! let code = random_valid_code(3, 2, &mut rng)?;
//! let ca = Automaton::new(code, 3, 2)?;
//! let grid = generate(&starter::random(3, 64, &mut rng)?, &ca, 64)?;
//! assert_eq!(grid.height(), 64);
//! # Ok::<(), ulam_automata::AutomatonError>(())
//! ```

pub mod codec;
mod config;
mod engine;
mod error;
mod grid;
mod neighborhood;
pub mod palette;
mod random;
mod rule;
pub mod starter;
pub mod symmetry;

pub use codec::{pack, unpack};
pub use config::{RunSummary, StarterKind, UlamConfig, UlamRun};
pub use engine::{Automaton, Generations};
pub use error::{AutomatonError, Result};
pub use grid::{Grid, MAX_CELLS, generate};
pub use neighborhood::{Neighborhood1D, neighborhood, neighborhood_into};
pub use palette::Palette;
pub use random::{random_code, random_valid_code};
pub use rule::{MAX_CODE_BITS, MAX_LIMIT, RuleTable, elementary_rules, rule_count, rule_limit};
pub use symmetry::Symmetry;
