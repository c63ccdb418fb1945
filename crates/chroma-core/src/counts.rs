//! Per-color population tallies.

use crate::color::Color;
use std::error::Error;
use std::fmt;

/// Per-color `(assigned, visited)` tallies for one grid.
///
/// `assigned` counts cells painted with the color during population;
/// `visited` counts how many of those the scanner has marked visited
/// (absorbed into a region or pruned). The difference is the color's
/// remaining unvisited supply, which is what the scanner's pruning rule
/// compares against the current runner-up region.
///
/// Invariant: `visited(c) <= assigned(c)` for every color, at all times.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ColorCounts {
    slots: [Tally; Color::COUNT],
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
struct Tally {
    assigned: usize,
    visited: usize,
}

impl ColorCounts {
    /// A table with every tally at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one cell painted with `color`.
    pub fn record_assigned(&mut self, color: Color) {
        self.slots[color.index()].assigned += 1;
    }

    /// Record one cell of `color` marked visited by the scanner.
    ///
    /// # Errors
    ///
    /// [`CountError::VisitedOverflow`] if the color has no unvisited
    /// supply left. That can only happen through caller bookkeeping gone
    /// wrong (visiting a cell twice, or visiting before assignment), so
    /// callers treat it as fatal.
    pub fn record_visited(&mut self, color: Color) -> Result<(), CountError> {
        let slot = &mut self.slots[color.index()];
        if slot.visited >= slot.assigned {
            return Err(CountError::VisitedOverflow { color });
        }
        slot.visited += 1;
        Ok(())
    }

    /// Cells painted with `color`.
    pub fn assigned(&self, color: Color) -> usize {
        self.slots[color.index()].assigned
    }

    /// Cells of `color` already marked visited.
    pub fn visited(&self, color: Color) -> usize {
        self.slots[color.index()].visited
    }

    /// Unvisited supply of `color`: `assigned - visited`.
    pub fn remaining(&self, color: Color) -> usize {
        let slot = self.slots[color.index()];
        slot.assigned - slot.visited
    }

    /// Total cells assigned across every color.
    ///
    /// Equals the grid volume once population is complete.
    pub fn total_assigned(&self) -> usize {
        self.slots.iter().map(|s| s.assigned).sum()
    }

    /// The two most populous colors, by assigned count.
    ///
    /// Comparisons are strictly-greater, so on equal counts the color
    /// appearing earlier in [`Color::ALL`] keeps its rank.
    pub fn most_populous(&self) -> (Color, Color) {
        let mut top = Color::ALL[0];
        let mut second = Color::ALL[1];
        if self.assigned(top) < self.assigned(second) {
            (top, second) = (second, top);
        }
        for &color in &Color::ALL[2..] {
            if self.assigned(color) > self.assigned(second) {
                if self.assigned(color) > self.assigned(top) {
                    second = top;
                    top = color;
                } else {
                    second = color;
                }
            }
        }
        (top, second)
    }
}

/// Errors from tally bookkeeping.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CountError {
    /// A visit was recorded for a color with no unvisited supply.
    VisitedOverflow {
        /// The over-visited color.
        color: Color,
    },
}

impl fmt::Display for CountError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::VisitedOverflow { color } => {
                write!(f, "visited tally for {color} would exceed its assigned count")
            }
        }
    }
}

impl Error for CountError {}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn new_table_is_zeroed() {
        let counts = ColorCounts::new();
        for color in Color::ALL {
            assert_eq!(counts.assigned(color), 0);
            assert_eq!(counts.visited(color), 0);
            assert_eq!(counts.remaining(color), 0);
        }
        assert_eq!(counts.total_assigned(), 0);
    }

    #[test]
    fn remaining_tracks_assignment_and_visits() {
        let mut counts = ColorCounts::new();
        counts.record_assigned(Color::Green);
        counts.record_assigned(Color::Green);
        counts.record_assigned(Color::Blue);
        assert_eq!(counts.remaining(Color::Green), 2);

        counts.record_visited(Color::Green).unwrap();
        assert_eq!(counts.remaining(Color::Green), 1);
        assert_eq!(counts.remaining(Color::Blue), 1);
        assert_eq!(counts.total_assigned(), 3);
    }

    #[test]
    fn visit_without_supply_is_rejected() {
        let mut counts = ColorCounts::new();
        assert_eq!(
            counts.record_visited(Color::Red),
            Err(CountError::VisitedOverflow { color: Color::Red })
        );

        counts.record_assigned(Color::Red);
        counts.record_visited(Color::Red).unwrap();
        assert!(counts.record_visited(Color::Red).is_err());
    }

    // ── most_populous tie policy ────────────────────────────────

    #[test]
    fn most_populous_orders_by_count() {
        let mut counts = ColorCounts::new();
        for _ in 0..3 {
            counts.record_assigned(Color::Yellow);
        }
        for _ in 0..5 {
            counts.record_assigned(Color::Blue);
        }
        counts.record_assigned(Color::Red);
        assert_eq!(counts.most_populous(), (Color::Blue, Color::Yellow));
    }

    #[test]
    fn ties_keep_the_earlier_color() {
        let mut counts = ColorCounts::new();
        for color in [Color::Orange, Color::Green] {
            counts.record_assigned(color);
            counts.record_assigned(color);
        }
        // Orange and Green tie; Orange comes first in Color::ALL.
        assert_eq!(counts.most_populous(), (Color::Orange, Color::Green));
    }

    #[test]
    fn all_zero_falls_back_to_declaration_order() {
        let counts = ColorCounts::new();
        assert_eq!(counts.most_populous(), (Color::Red, Color::Orange));
    }

    proptest! {
        #[test]
        fn most_populous_matches_a_stable_sort(amounts in prop::array::uniform5(0usize..50)) {
            let mut counts = ColorCounts::new();
            for (color, &n) in Color::ALL.iter().zip(&amounts) {
                for _ in 0..n {
                    counts.record_assigned(*color);
                }
            }

            let mut ranked: Vec<Color> = Color::ALL.to_vec();
            // Stable sort keeps declaration order on ties, matching the
            // strict-greater sweep.
            ranked.sort_by(|a, b| counts.assigned(*b).cmp(&counts.assigned(*a)));

            prop_assert_eq!(counts.most_populous(), (ranked[0], ranked[1]));
        }

        #[test]
        fn visited_never_exceeds_assigned(ops in prop::collection::vec((0usize..5, prop::bool::ANY), 0..100)) {
            let mut counts = ColorCounts::new();
            for (idx, visit) in ops {
                let color = Color::ALL[idx];
                if visit {
                    // May fail when supply is exhausted; either way the
                    // invariant holds below.
                    let _ = counts.record_visited(color);
                } else {
                    counts.record_assigned(color);
                }
                prop_assert!(counts.visited(color) <= counts.assigned(color));
            }
        }
    }
}
