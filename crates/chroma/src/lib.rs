//! Chroma: largest contiguous same-color region search over fixed 3D grids.
//!
//! This is the top-level facade crate that re-exports the public API from
//! the Chroma sub-crates. For most users, adding `chroma` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use chroma::prelude::*;
//!
//! // A 4x4x4 grid painted from a deterministic seed.
//! let dims = Dims::new(4, 4, 4).unwrap();
//! let mut grid = Grid::new(dims);
//! let mut counts = ColorCounts::new();
//! populate(&mut grid, &mut SeededColors::new(1234567), &mut counts).unwrap();
//!
//! // Find the two largest six-connected same-color regions.
//! let (mut largest, mut second) = find_regions(&mut grid, &mut counts).unwrap();
//! assert!(largest.len() >= second.len());
//! assert!(largest.len() >= 1);
//!
//! // Every cell is accounted for once the scan completes.
//! assert!(grid.is_fully_visited());
//! for color in Color::ALL {
//!     assert_eq!(counts.visited(color), counts.assigned(color));
//! }
//!
//! // Report to any io::Write sink.
//! let mut out = Vec::new();
//! write_report(&grid, &mut largest, &mut second, &counts, &mut out).unwrap();
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in the
//! prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `chroma-core` | Coordinates, directions, colors, tallies |
//! | [`grid`] | `chroma-grid` | The cell grid and color-assignment sources |
//! | [`scan`] | `chroma-scan` | Worklist, regions, and the region finder |
//! | [`report`] | `chroma-report` | Textual rendering and statistics |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Coordinates, directions, colors, and tallies (`chroma-core`).
pub use chroma_core as types;

/// The cell grid and color-assignment sources (`chroma-grid`).
pub use chroma_grid as grid;

/// Worklist, regions, and the region finder (`chroma-scan`).
pub use chroma_scan as scan;

/// Textual rendering and statistics (`chroma-report`).
pub use chroma_report as report;

/// The common imports, in one place.
pub mod prelude {
    pub use chroma_core::{Color, ColorCounts, Coord, CountError, Direction};
    pub use chroma_grid::{
        populate, ColorSource, CyclingColors, Dims, Grid, GridError, SeededColors, UniformColors,
    };
    pub use chroma_report::{color_statistics, coverage_percentage, render_region, write_report};
    pub use chroma_scan::{find_regions, ListError, Region, RegionFinder, ScanError, Worklist};
}
