//! Chroma quickstart — populate a grid, scan it, report the results.
//!
//! Demonstrates:
//!   1. Configuring dimensions and a deterministic color seed
//!   2. Populating the grid while tallying per-color counts
//!   3. Scanning for the two largest contiguous same-color regions
//!   4. Writing the rendered report to stdout
//!   5. The degenerate single-cell grid
//!
//! Run with:
//!   cargo run --example quickstart

use chroma::prelude::*;
use std::io;

// ─── Grid parameters ────────────────────────────────────────────

const DIM_X: u32 = 5;
const DIM_Y: u32 = 5;
const DIM_Z: u32 = 5;
const SEED: u64 = 1234567;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Chroma Quickstart ===\n");

    // 1. Validated dimensions; any zero axis is rejected here, before
    //    a grid or scan ever exists.
    let dims = Dims::new(DIM_X, DIM_Y, DIM_Z)?;
    println!(
        "Grid: {}x{}x{}, {} cells, seed {}",
        DIM_X,
        DIM_Y,
        DIM_Z,
        dims.volume(),
        SEED
    );

    // 2. Populate with deterministic random colors.
    let mut grid = Grid::new(dims);
    let mut counts = ColorCounts::new();
    populate(&mut grid, &mut SeededColors::new(SEED), &mut counts)?;

    // 3. Scan.
    let (mut largest, mut second) = find_regions(&mut grid, &mut counts)?;
    println!(
        "Scan found a largest block of {} cells and a runner-up of {} cells.\n",
        largest.len(),
        second.len()
    );

    // 4. Full report to stdout.
    let stdout = io::stdout();
    write_report(&grid, &mut largest, &mut second, &counts, &mut stdout.lock())?;

    // 5. A 1x1x1 grid still scans; its runner-up simply never grows.
    let tiny_dims = Dims::new(1, 1, 1)?;
    let mut tiny = Grid::new(tiny_dims);
    let mut tiny_counts = ColorCounts::new();
    populate(&mut tiny, &mut SeededColors::new(SEED), &mut tiny_counts)?;
    let (tiny_largest, tiny_second) = find_regions(&mut tiny, &mut tiny_counts)?;
    println!(
        "\nDegenerate 1x1x1 grid: largest {} cell(s), runner-up color {:?}.",
        tiny_largest.len(),
        tiny_second.color()
    );

    Ok(())
}
