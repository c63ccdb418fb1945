//! Rendering and statistics for scan results.
//!
//! Everything here is a consumer of the core's read surface: the grid's
//! dimensions, the regions' membership tests, and the finished color
//! tallies. Output goes to any [`io::Write`] sink; tests write into a
//! `Vec<u8>` and the quickstart example writes to stdout.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

use chroma_core::{Color, ColorCounts, Coord};
use chroma_grid::Grid;
use chroma_scan::Region;
use std::io;

/// Render the grid layer by layer, highlighting one region.
///
/// For each x layer, z faces are printed from far to near, each face one
/// line of y columns. Cells belonging to `region` show the region's
/// color label; every other cell shows `***`. Columns are tab-separated.
///
/// The membership test is the region's cursor-repositioning `find`,
/// which is why the region is taken mutably.
///
/// # Errors
///
/// Propagates write failures from `out`.
pub fn render_region<W: io::Write>(
    grid: &Grid,
    region: &mut Region,
    out: &mut W,
) -> io::Result<()> {
    let label = region.color().map(Color::abbrev).unwrap_or("***");
    let (dim_x, dim_y, dim_z) = grid.dims().sizes();

    for x in 0..dim_x as i32 {
        for z in (0..dim_z as i32).rev() {
            writeln!(out)?;
            for y in 0..dim_y as i32 {
                let coord = Coord::new(x, y, z);
                if region.find(coord) {
                    write!(out, "{label}\t")?;
                } else {
                    write!(out, "***\t")?;
                }
            }
        }
        writeln!(out)?;
    }
    Ok(())
}

/// Write the full scan report: both champion blocks, then statistics.
///
/// The largest block is rendered with its cell count. The second block
/// is rendered only when it ties the largest in length; otherwise just
/// its count line appears, and an empty runner-up gets a "no second
/// largest" line. When even the largest region is empty (a grid too
/// small to have grown one), a short notice replaces the block output:
/// the "nothing to report" mapping of the empty-champion condition.
///
/// # Errors
///
/// Propagates write failures from `out`.
pub fn write_report<W: io::Write>(
    grid: &Grid,
    largest: &mut Region,
    second: &mut Region,
    counts: &ColorCounts,
    out: &mut W,
) -> io::Result<()> {
    match largest.color() {
        Some(color) => {
            writeln!(out, "Largest Contiguous Block:")?;
            render_region(grid, largest, out)?;
            writeln!(
                out,
                "\n[There are {} {} cells within this block]",
                largest.len(),
                color
            )?;

            match second.color() {
                Some(second_color) if second.len() == largest.len() => {
                    writeln!(out, "\nSecond Largest Contiguous Block:")?;
                    render_region(grid, second, out)?;
                    writeln!(
                        out,
                        "\n[There are {} {} cells within this block]",
                        second.len(),
                        second_color
                    )?;
                }
                Some(second_color) => {
                    writeln!(
                        out,
                        "\n[There are {} {} cells within the second largest contiguous block]",
                        second.len(),
                        second_color
                    )?;
                }
                None => {
                    writeln!(out, "\n[There is no second largest contiguous block]")?;
                }
            }
        }
        None => {
            writeln!(out, "Cube too small to print!")?;
        }
    }

    color_statistics(counts, grid.dims().volume(), out)
}

/// Write the color statistics: per-color cell counts, then the two most
/// populous colors with the share of the grid each covers.
///
/// # Errors
///
/// Propagates write failures from `out`.
pub fn color_statistics<W: io::Write>(
    counts: &ColorCounts,
    volume: usize,
    out: &mut W,
) -> io::Result<()> {
    let (top, second) = counts.most_populous();

    writeln!(out, "\nColor Statistics:")?;
    for color in Color::ALL {
        writeln!(out, "{} Cells: {}", color, counts.assigned(color))?;
    }
    writeln!(
        out,
        "The principal color was {}, it took up {:.2}% of the cube.",
        top,
        coverage_percentage(counts.assigned(top), volume)
    )?;
    writeln!(
        out,
        "The second most populous color was {}, it took up {:.2}% of the cube.",
        second,
        coverage_percentage(counts.assigned(second), volume)
    )?;
    Ok(())
}

/// The percentage of `volume` that `amount` cells cover.
pub fn coverage_percentage(amount: usize, volume: usize) -> f64 {
    if volume == 0 {
        return 0.0;
    }
    amount as f64 / volume as f64 * 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use chroma_core::ColorCounts;
    use chroma_grid::{populate, Dims, UniformColors};
    use chroma_scan::find_regions;

    fn dims(x: u32, y: u32, z: u32) -> Dims {
        Dims::new(x, y, z).unwrap()
    }

    fn scanned(d: Dims, colors: &[Color]) -> (Grid, Region, Region, ColorCounts) {
        let mut grid = Grid::new(d);
        let mut counts = ColorCounts::new();
        for (coord, &color) in d.coords().zip(colors) {
            grid.set_color(coord, color).unwrap();
            counts.record_assigned(color);
        }
        let (largest, second) = find_regions(&mut grid, &mut counts).unwrap();
        (grid, largest, second, counts)
    }

    fn to_string(buf: Vec<u8>) -> String {
        String::from_utf8(buf).unwrap()
    }

    // ── render_region ───────────────────────────────────────────

    #[test]
    fn render_highlights_members_only() {
        // 2x2x1, three greens in an L and one red at (1, 1, 0).
        let (grid, mut largest, _, _) = scanned(
            dims(2, 2, 1),
            &[Color::Green, Color::Green, Color::Green, Color::Red],
        );

        let mut buf = Vec::new();
        render_region(&grid, &mut largest, &mut buf).unwrap();
        assert_eq!(to_string(buf), "\nGRN\tGRN\t\n\nGRN\t***\t\n");
    }

    #[test]
    fn render_walks_z_faces_far_to_near() {
        // 1x1x2 column, both blue: one x layer, two z lines, far first.
        let (grid, mut largest, _, _) = scanned(dims(1, 1, 2), &[Color::Blue, Color::Blue]);

        let mut buf = Vec::new();
        render_region(&grid, &mut largest, &mut buf).unwrap();
        assert_eq!(to_string(buf), "\nBLU\t\nBLU\t\n");
    }

    #[test]
    fn render_of_empty_region_shows_no_cells() {
        let grid = Grid::filled(dims(1, 2, 1), Color::Red, false);
        let mut region = Region::empty();

        let mut buf = Vec::new();
        render_region(&grid, &mut region, &mut buf).unwrap();
        assert_eq!(to_string(buf), "\n***\t***\t\n");
    }

    // ── write_report ────────────────────────────────────────────

    #[test]
    fn report_renders_second_block_only_on_a_tie() {
        // 3x1x1 R B R: two singletons, tied at length 1.
        let (grid, mut largest, mut second, counts) =
            scanned(dims(3, 1, 1), &[Color::Red, Color::Blue, Color::Red]);

        let mut buf = Vec::new();
        write_report(&grid, &mut largest, &mut second, &counts, &mut buf).unwrap();
        let text = to_string(buf);

        assert!(text.contains("Largest Contiguous Block:"));
        assert!(text.contains("Second Largest Contiguous Block:"));
        assert!(text.contains("[There are 1 RED cells within this block]"));
        assert!(text.contains("[There are 1 BLU cells within this block]"));
    }

    #[test]
    fn report_summarizes_a_smaller_second_block() {
        let (grid, mut largest, mut second, counts) = scanned(
            dims(2, 2, 1),
            &[Color::Green, Color::Green, Color::Green, Color::Red],
        );

        let mut buf = Vec::new();
        write_report(&grid, &mut largest, &mut second, &counts, &mut buf).unwrap();
        let text = to_string(buf);

        assert!(text.contains("[There are 3 GRN cells within this block]"));
        assert!(!text.contains("Second Largest Contiguous Block:"));
        assert!(text
            .contains("[There are 1 RED cells within the second largest contiguous block]"));
    }

    #[test]
    fn report_degrades_gracefully_without_a_runner_up() {
        let d = dims(1, 1, 1);
        let mut grid = Grid::new(d);
        let mut counts = ColorCounts::new();
        populate(&mut grid, &mut UniformColors(Color::Red), &mut counts).unwrap();
        let (mut largest, mut second) = find_regions(&mut grid, &mut counts).unwrap();

        let mut buf = Vec::new();
        write_report(&grid, &mut largest, &mut second, &counts, &mut buf).unwrap();
        let text = to_string(buf);

        assert!(text.contains("[There are 1 RED cells within this block]"));
        assert!(text.contains("[There is no second largest contiguous block]"));
        assert!(text.contains("Color Statistics:"));
    }

    #[test]
    fn report_handles_an_empty_largest_region() {
        // Never produced by the scan, but the report must not fail on
        // an un-grown champion handed in by a collaborator.
        let grid = Grid::filled(dims(2, 2, 2), Color::Red, false);
        let mut counts = ColorCounts::new();
        let mut largest = Region::empty();
        let mut second = Region::empty();

        let mut buf = Vec::new();
        write_report(&grid, &mut largest, &mut second, &counts, &mut buf).unwrap();
        let text = to_string(buf);
        assert!(text.starts_with("Cube too small to print!"));
        assert!(text.contains("Color Statistics:"));
    }

    // ── color_statistics ────────────────────────────────────────

    #[test]
    fn statistics_list_every_color_and_the_leaders() {
        let d = dims(3, 3, 3);
        let mut counts = ColorCounts::new();
        for coord in d.coords() {
            // 14 green, 13 yellow.
            let color = if (coord.x + coord.y + coord.z) % 2 == 0 {
                Color::Green
            } else {
                Color::Yellow
            };
            counts.record_assigned(color);
        }

        let mut buf = Vec::new();
        color_statistics(&counts, d.volume(), &mut buf).unwrap();
        let text = to_string(buf);

        assert!(text.contains("RED Cells: 0"));
        assert!(text.contains("GRN Cells: 14"));
        assert!(text.contains("YEL Cells: 13"));
        assert!(text.contains("The principal color was GRN, it took up 51.85% of the cube."));
        assert!(text
            .contains("The second most populous color was YEL, it took up 48.15% of the cube."));
    }

    #[test]
    fn coverage_is_a_simple_ratio() {
        assert_eq!(coverage_percentage(8, 27), 8.0 / 27.0 * 100.0);
        assert_eq!(coverage_percentage(0, 27), 0.0);
        assert_eq!(coverage_percentage(27, 27), 100.0);
        assert_eq!(coverage_percentage(1, 0), 0.0);
    }
}
