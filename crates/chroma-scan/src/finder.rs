//! The exhaustive scan: pruning, flood fill, and champion tracking.

use chroma_core::{Color, ColorCounts, Coord, CountError};
use chroma_grid::{Grid, GridError};
use std::error::Error;
use std::fmt;

use crate::region::Region;
use crate::worklist::{ListError, Worklist};

/// Finds the two largest same-color regions in a grid.
///
/// The scan walks every coordinate in the grid's canonical order. Each
/// unvisited cell either seeds a flood fill or is pruned: a cell whose
/// color has at most `second.len()` unvisited cells left anywhere in the
/// grid cannot grow a region that displaces the current runner-up, so it
/// is marked visited without filling. Pruning never changes the reported
/// lengths, only which work is skipped; [`RegionFinder::with_pruning`]
/// exists so that equivalence stays testable.
///
/// Champion updates use strictly-greater comparisons, so on equal
/// lengths whichever region was discovered first under the scan order
/// keeps its rank.
#[derive(Clone, Copy, Debug)]
pub struct RegionFinder {
    prune: bool,
}

impl RegionFinder {
    /// A finder with pruning enabled.
    pub fn new() -> Self {
        Self { prune: true }
    }

    /// A finder with pruning switched on or off.
    ///
    /// Disabling pruning flood-fills every region regardless of the
    /// current champions. Reported lengths are identical either way.
    pub fn with_pruning(prune: bool) -> Self {
        Self { prune }
    }

    /// Scan `grid` and return its (largest, second-largest) regions.
    ///
    /// Requires a fully populated grid whose assignments are tallied in
    /// `counts`. Mutates both as a documented side effect: every cell's
    /// visited flag is set by the time the scan returns, and `counts`'
    /// visited tallies match its assigned tallies.
    ///
    /// Either region may be empty (`color() == None`) when the grid is
    /// too small or too uniform to grow two regions; consumers treat
    /// that as "nothing to report".
    ///
    /// # Errors
    ///
    /// [`ScanError::Grid`] on direct-access failures, including reading
    /// a cell that was never populated. Out-of-bounds results from
    /// probing a neighbour direction are *not* errors; stepping past an
    /// edge is ordinary boundary clipping and the probe moves on.
    /// [`ScanError::Worklist`] on a capacity overflow, which cannot
    /// happen while the worklist capacity tracks the grid volume.
    pub fn find_regions(
        &self,
        grid: &mut Grid,
        counts: &mut ColorCounts,
    ) -> Result<(Region, Region), ScanError> {
        let mut worklist = Worklist::with_capacity(grid.dims().volume());
        let mut largest = Region::empty();
        let mut second = Region::empty();

        for seed in grid.dims().coords() {
            if grid.visited(seed)? {
                continue;
            }
            let color = grid.color(seed)?;

            if self.prune && counts.remaining(color) <= second.len() {
                // Everything still reachable through this cell is capped
                // by the color's unvisited supply; it can never beat the
                // runner-up. Mark and move on.
                grid.set_visited(seed, true)?;
                counts.record_visited(color)?;
                log::trace!("pruned {seed} ({color})");
                continue;
            }

            self.flood_fill(grid, counts, &mut worklist, seed, color)?;
            log::trace!("region of {} {color} cells from {seed}", worklist.len());

            if worklist.len() > largest.len() {
                second = largest;
                largest = Region::captured(&worklist, color);
            } else if worklist.len() > second.len() {
                second = Region::captured(&worklist, color);
            }
        }

        log::debug!(
            "scan complete: largest {} cells, second {} cells",
            largest.len(),
            second.len()
        );
        Ok((largest, second))
    }

    /// Grow one region from `seed`, marking and tallying every cell it
    /// absorbs. On return the worklist holds the region in discovery
    /// order.
    fn flood_fill(
        &self,
        grid: &mut Grid,
        counts: &mut ColorCounts,
        worklist: &mut Worklist,
        seed: Coord,
        color: Color,
    ) -> Result<(), ScanError> {
        worklist.clear();
        worklist.insert(seed)?;
        grid.set_visited(seed, true)?;
        counts.record_visited(color)?;

        while !worklist.at_end() {
            let current = worklist.retrieve()?;
            for neighbour in current.neighbours() {
                match grid.color(neighbour) {
                    Ok(c) if c == color => {
                        if !grid.visited(neighbour)? {
                            worklist.insert(neighbour)?;
                            grid.set_visited(neighbour, true)?;
                            counts.record_visited(color)?;
                        }
                    }
                    Ok(_) => {}
                    // Probing past a grid edge: no match, keep going.
                    Err(GridError::OutOfBounds { .. }) => {}
                    Err(err) => return Err(err.into()),
                }
            }
            worklist.advance()?;
        }
        Ok(())
    }
}

impl Default for RegionFinder {
    fn default() -> Self {
        Self::new()
    }
}

/// Scan `grid` with pruning enabled.
///
/// The plain entry point; see [`RegionFinder::find_regions`] for the
/// full contract.
///
/// # Errors
///
/// As [`RegionFinder::find_regions`].
pub fn find_regions(
    grid: &mut Grid,
    counts: &mut ColorCounts,
) -> Result<(Region, Region), ScanError> {
    RegionFinder::new().find_regions(grid, counts)
}

/// Errors surfaced by the scan.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ScanError {
    /// A direct grid access failed.
    Grid(GridError),
    /// A worklist operation failed; `Full` here means the worklist
    /// capacity and the grid volume diverged.
    Worklist(ListError),
    /// Tally bookkeeping failed; a cell was visited twice or visited
    /// before assignment.
    Count(CountError),
}

impl fmt::Display for ScanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Grid(e) => write!(f, "grid: {e}"),
            Self::Worklist(e) => write!(f, "worklist: {e}"),
            Self::Count(e) => write!(f, "counts: {e}"),
        }
    }
}

impl Error for ScanError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Grid(e) => Some(e),
            Self::Worklist(e) => Some(e),
            Self::Count(e) => Some(e),
        }
    }
}

impl From<GridError> for ScanError {
    fn from(e: GridError) -> Self {
        Self::Grid(e)
    }
}

impl From<ListError> for ScanError {
    fn from(e: ListError) -> Self {
        Self::Worklist(e)
    }
}

impl From<CountError> for ScanError {
    fn from(e: CountError) -> Self {
        Self::Count(e)
    }
}
