//! Color-assignment sources and grid population.
//!
//! Population is a collaborator of the core: it drives the grid's
//! `set_color` surface and the assigned tallies, and the scan only ever
//! sees the result. The deterministic [`SeededColors`] source produces
//! identical grids for identical seeds; the fixture sources exist for
//! tests and examples that need a known layout.

use chroma_core::{Color, ColorCounts, Coord};
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::grid::{Grid, GridError};

/// Supplies one color per coordinate during population.
///
/// Invoked exactly once per cell, in the grid's canonical coordinate
/// order. Implementations may depend on that order (the seeded source
/// does), so population must not skip or reorder cells.
pub trait ColorSource {
    /// The color to paint the cell at `coord`.
    fn color_at(&mut self, coord: Coord) -> Color;
}

/// Deterministic random source: a ChaCha8 RNG seeded from a `u64`.
///
/// Identical seeds produce identical color sequences, making whole-run
/// determinism testable end to end. Each draw reduces the next RNG word
/// modulo the color count.
pub struct SeededColors {
    rng: ChaCha8Rng,
}

impl SeededColors {
    /// A source seeded with `seed`.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }
}

impl ColorSource for SeededColors {
    fn color_at(&mut self, _coord: Coord) -> Color {
        let idx = (self.rng.next_u32() as usize) % Color::ALL.len();
        Color::ALL[idx]
    }
}

/// Fixture source: the same color everywhere.
#[derive(Clone, Copy, Debug)]
pub struct UniformColors(
    /// The color painted onto every cell.
    pub Color,
);

impl ColorSource for UniformColors {
    fn color_at(&mut self, _coord: Coord) -> Color {
        self.0
    }
}

/// Fixture source: cycles through [`Color::ALL`] in visit order.
///
/// Adjacent cells in canonical order get different colors, which makes
/// it a convenient worst case for the scanner (many tiny regions).
#[derive(Clone, Copy, Debug, Default)]
pub struct CyclingColors {
    next: usize,
}

impl ColorSource for CyclingColors {
    fn color_at(&mut self, _coord: Coord) -> Color {
        let color = Color::ALL[self.next % Color::ALL.len()];
        self.next += 1;
        color
    }
}

/// Paint every cell of `grid` from `source`, tallying each assignment.
///
/// Visits coordinates in canonical scan order. Afterwards the grid is
/// fully populated and `counts.total_assigned()` equals the grid volume.
///
/// # Errors
///
/// Propagates [`GridError`] from cell assignment. With a grid and
/// coordinates that came from the same [`Dims`](crate::Dims) this cannot
/// fire; the propagation guards collaborator misuse.
pub fn populate<S: ColorSource>(
    grid: &mut Grid,
    source: &mut S,
    counts: &mut ColorCounts,
) -> Result<(), GridError> {
    for coord in grid.dims().coords() {
        let color = source.color_at(coord);
        grid.set_color(coord, color)?;
        counts.record_assigned(color);
    }
    log::debug!(
        "populated {} cells across {} colors",
        counts.total_assigned(),
        Color::COUNT
    );
    Ok(())
}
