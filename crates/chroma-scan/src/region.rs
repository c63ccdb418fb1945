//! A completed flood fill, captured as a region.

use chroma_core::{Color, Coord};

use crate::worklist::Worklist;

/// A maximal same-color region discovered by one flood fill.
///
/// Captured by copying the worklist the moment the fill completes, so
/// the coordinate order is the fill's discovery order (seed first).
/// Champions start out as the empty region and stay empty on grids too
/// small to grow anything; consumers read [`color`](Region::color) as
/// `None` in that case and report "no result" rather than failing.
#[derive(Clone, Debug)]
pub struct Region {
    list: Worklist,
    color: Option<Color>,
}

impl Region {
    /// The empty region: no coordinates, no color.
    pub fn empty() -> Self {
        Self {
            list: Worklist::with_capacity(0),
            color: None,
        }
    }

    /// Capture a completed fill: a deep copy of `list` plus the fill's
    /// color.
    pub(crate) fn captured(list: &Worklist, color: Color) -> Self {
        Self {
            list: list.clone(),
            color: Some(color),
        }
    }

    /// Number of cells in the region.
    pub fn len(&self) -> usize {
        self.list.len()
    }

    /// Whether the region holds no cells.
    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    /// The color every member shares, or `None` for the empty region.
    pub fn color(&self) -> Option<Color> {
        self.color
    }

    /// Member coordinates in discovery order (seed first).
    pub fn coords(&self) -> &[Coord] {
        self.list.as_slice()
    }

    /// Membership test: whether `coord` belongs to the region.
    ///
    /// Delegates to the worklist's cursor-repositioning
    /// [`find`](Worklist::find), which is why it takes `&mut self`; the
    /// renderer calls this for every grid cell.
    pub fn find(&mut self, coord: Coord) -> bool {
        self.list.find(coord)
    }
}

impl Default for Region {
    fn default() -> Self {
        Self::empty()
    }
}
