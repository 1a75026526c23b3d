//! `ulam`: run a cellular automaton and draw it in the terminal.
//!
//! The number of colors sets the number of cell states. Without `--code`
//! a random valid rule is drawn; pass `--summary` to print the parameters
//! needed to reproduce the run.
//!
//!   `ulam -c '#000000' '#ff5500' '#ffffff' -r 1 -s 80 40 --seed 7 --summary`

use std::io::{self, BufWriter, Write};
use std::time::Instant;

use anyhow::{Context, Result, bail};
use clap::{Parser, ValueEnum};
use num_bigint::BigUint;
use tracing::{debug, info};
use ulam_automata::{Grid, Palette, StarterKind, Symmetry, UlamConfig};

#[derive(Parser, Debug)]
#[command(
    name = "ulam",
    version,
    about = "Toy generative design tool for running cellular automata and drawing the result"
)]
struct Cli {
    /// Size of the automaton's neighborhood.
    #[arg(short, long, value_name = "SIZE", default_value_t = 1)]
    radius: u32,

    /// Colors as six digit hex strings; their count is the number of states.
    #[arg(
        short,
        long,
        value_name = "COLOR",
        num_args = 2..,
        default_values_t = ["#FFFFFF".to_string(), "#000000".to_string()]
    )]
    colors: Vec<String>,

    /// Width and height of the output, in cells.
    #[arg(short, long, value_names = ["WIDTH", "HEIGHT"], num_args = 2, default_values_t = [64, 64])]
    size: Vec<usize>,

    /// Rule code in decimal notation; a random code is drawn otherwise.
    #[arg(short = 'C', long)]
    code: Option<BigUint>,

    /// Seed for the random code and starter row.
    #[arg(long)]
    seed: Option<u64>,

    /// Start from a single live cell instead of random noise.
    #[arg(long)]
    impulse: bool,

    /// Symmetry imposed on the finished grid.
    #[arg(long, value_enum, default_value_t = SymmetryArg::None)]
    symmetry: SymmetryArg,

    /// Print cell states as characters instead of colored blocks.
    #[arg(long)]
    plain: bool,

    /// Print a JSON record of the run parameters to stderr.
    #[arg(long)]
    summary: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum SymmetryArg {
    None,
    TwofoldH,
    TwofoldV,
    Fourfold,
    Pinwheel,
}

impl From<SymmetryArg> for Symmetry {
    fn from(arg: SymmetryArg) -> Self {
        match arg {
            SymmetryArg::None => Symmetry::None,
            SymmetryArg::TwofoldH => Symmetry::TwofoldH,
            SymmetryArg::TwofoldV => Symmetry::TwofoldV,
            SymmetryArg::Fourfold => Symmetry::Fourfold,
            SymmetryArg::Pinwheel => Symmetry::Pinwheel,
        }
    }
}

impl Cli {
    fn config(&self) -> Result<UlamConfig> {
        let [width, height] = self.size[..] else {
            bail!("--size takes exactly two values, got {}", self.size.len());
        };
        let mut config = UlamConfig::new(width, height)
            .with_radius(self.radius)
            .with_symmetry(self.symmetry.into())
            .with_starter(if self.impulse {
                StarterKind::Impulse
            } else {
                StarterKind::Random
            });
        if let Some(code) = &self.code {
            config = config.with_code(code.clone());
        }
        if let Some(seed) = self.seed {
            config = config.with_seed(seed);
        }
        Ok(config)
    }
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let palette = Palette::from_hex(&cli.colors).context("failed to parse --colors")?;
    let config = cli.config()?;
    info!(
        radix = palette.radix(),
        radius = config.radius,
        width = config.width,
        height = config.height,
        "running automaton"
    );

    let started = Instant::now();
    let run = config
        .apply(palette.radix())
        .context("failed to generate grid")?;
    debug!(elapsed = ?started.elapsed(), code_bits = run.code().bits(), "grid generated");

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    if cli.plain {
        render_plain(run.grid(), &mut out)?;
    } else {
        render_ansi(run.grid(), &palette, &mut out)?;
    }
    out.flush()?;

    if cli.summary {
        let summary = serde_json::to_string_pretty(&run.summary(&palette))?;
        eprintln!("{summary}");
    }
    Ok(())
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .try_init();
}

/// Two terminal columns per cell, colored with 24-bit ANSI backgrounds.
fn render_ansi<W: Write>(grid: &Grid, palette: &Palette, out: &mut W) -> Result<()> {
    let colors = palette.colorize(grid)?;
    let width = grid.width().max(1);
    for row in colors.chunks(width) {
        for [r, g, b] in row {
            write!(out, "\x1b[48;2;{r};{g};{b}m  ")?;
        }
        writeln!(out, "\x1b[0m")?;
    }
    Ok(())
}

/// One base-36 digit per cell; states of 36 and up print as `?`.
fn render_plain<W: Write>(grid: &Grid, out: &mut W) -> Result<()> {
    for row in grid.rows() {
        let line: String = row
            .iter()
            .map(|&state| char::from_digit(state, 36).unwrap_or('?'))
            .collect();
        writeln!(out, "{line}")?;
    }
    Ok(())
}
