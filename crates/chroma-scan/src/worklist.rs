//! The bounded traversal list backing the flood fill.

use chroma_core::Coord;
use std::error::Error;
use std::fmt;

/// A fixed-capacity ordered sequence of coordinates with a cursor.
///
/// The flood fill uses it as a growing queue: discoveries are appended at
/// the tail while the cursor walks front to back, so the list doubles as
/// the record of the region being built. Entries keep insertion order
/// except across [`remove`](Worklist::remove), which swaps the tail in.
///
/// Capacity is fixed at construction; the finder sizes it to the grid
/// volume, which no region can exceed, so [`ListError::Full`] signals a
/// capacity/volume mismatch rather than a recoverable condition.
///
/// # Cursor contract
///
/// The cursor ranges over `[0, len]` during a traversal: `at_end()`
/// reports `cursor >= len`, and that is the check traversal loops are
/// expected to make before retrieving. [`advance`](Worklist::advance)
/// carries a deliberately lenient guard: it only fails once the cursor
/// is already *past* the length, so the cursor can legally come to rest
/// at `len + 1`. Tightening this to strictly-less-than is a contract
/// change; see `advance`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Worklist {
    entries: Vec<Coord>,
    capacity: usize,
    cursor: usize,
}

impl Worklist {
    /// An empty list that can hold up to `capacity` coordinates.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
            capacity,
            cursor: 0,
        }
    }

    /// Remove every entry and reset the cursor.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.cursor = 0;
    }

    /// Number of live entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Maximum number of entries.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Whether the list holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether the list is at capacity.
    pub fn is_full(&self) -> bool {
        self.entries.len() == self.capacity
    }

    /// Whether the cursor has reached (or passed) the end of the list.
    pub fn at_end(&self) -> bool {
        self.cursor >= self.entries.len()
    }

    /// Current cursor position.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// The live entries, front to back.
    pub fn as_slice(&self) -> &[Coord] {
        &self.entries
    }

    /// Append `coord` at the tail.
    ///
    /// # Errors
    ///
    /// [`ListError::Full`] when the list is at capacity. Callers that
    /// sized the capacity to the grid volume treat this as an
    /// unrecoverable invariant violation.
    pub fn insert(&mut self, coord: Coord) -> Result<(), ListError> {
        if self.is_full() {
            return Err(ListError::Full {
                capacity: self.capacity,
            });
        }
        self.entries.push(coord);
        Ok(())
    }

    /// The entry under the cursor.
    ///
    /// # Errors
    ///
    /// [`ListError::Empty`] when the list has no entries;
    /// [`ListError::CursorOutOfBounds`] when the cursor has moved past
    /// the live entries (the caller is responsible for checking
    /// [`at_end`](Worklist::at_end) during traversal).
    pub fn retrieve(&self) -> Result<Coord, ListError> {
        if self.is_empty() {
            return Err(ListError::Empty);
        }
        self.entries
            .get(self.cursor)
            .copied()
            .ok_or(ListError::CursorOutOfBounds {
                cursor: self.cursor,
                len: self.entries.len(),
            })
    }

    /// Move the cursor one entry towards the tail.
    ///
    /// The guard is deliberately lenient: advancing is refused only once
    /// the cursor is already past the length, one position later than
    /// the strictly-less-than bound used elsewhere. The cursor can
    /// therefore legally reach `len + 1`. Callers that advance past the
    /// final entry before checking `at_end()` depend on that slack, so
    /// tightening the guard is a contract change; `at_end()` remains
    /// the loop-exit check.
    ///
    /// # Errors
    ///
    /// [`ListError::CursorOutOfBounds`] once the cursor exceeds the
    /// length before the advance.
    pub fn advance(&mut self) -> Result<(), ListError> {
        if self.cursor > self.entries.len() {
            return Err(ListError::CursorOutOfBounds {
                cursor: self.cursor,
                len: self.entries.len(),
            });
        }
        self.cursor += 1;
        Ok(())
    }

    /// Reset the cursor to the first entry.
    pub fn rewind(&mut self) {
        self.cursor = 0;
    }

    /// Park the cursor on the last entry (first entry when empty).
    pub fn seek_last(&mut self) {
        self.cursor = self.entries.len().saturating_sub(1);
    }

    /// Search for `target` by full coordinate equality, repositioning
    /// the cursor.
    ///
    /// The scan starts from the first entry. On a hit the cursor is left
    /// on the match; on a miss it rests on the last entry (the scan ran
    /// one past the end and steps back). Returns whether a match was
    /// found; on a miss the cursor's resting entry is *not* the target.
    ///
    /// The dual purpose is load-bearing: the renderer asks a region "do
    /// you contain this cell" for every grid cell, and relies on the
    /// boolean; [`remove`](Worklist::remove) relies on the positioning.
    pub fn find(&mut self, target: Coord) -> bool {
        self.rewind();
        if self.is_empty() {
            return false;
        }
        while self.cursor < self.entries.len() {
            if self.entries[self.cursor] == target {
                return true;
            }
            self.cursor += 1;
        }
        self.cursor -= 1;
        false
    }

    /// Remove the entry under the cursor by swapping the tail in.
    ///
    /// Not order-preserving. Position the cursor first (normally via
    /// [`find`](Worklist::find)); if the removed entry was the tail, the
    /// cursor is pulled back so it never exceeds the new length.
    ///
    /// # Errors
    ///
    /// [`ListError::Empty`] when the list has no entries;
    /// [`ListError::CursorOutOfBounds`] when the cursor is not on a live
    /// entry.
    pub fn remove(&mut self) -> Result<(), ListError> {
        if self.is_empty() {
            return Err(ListError::Empty);
        }
        if self.cursor >= self.entries.len() {
            return Err(ListError::CursorOutOfBounds {
                cursor: self.cursor,
                len: self.entries.len(),
            });
        }
        self.entries.swap_remove(self.cursor);
        if self.cursor > self.entries.len() {
            self.cursor -= 1;
        }
        Ok(())
    }
}

/// Errors from worklist operations.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ListError {
    /// Retrieval or removal attempted on an empty list.
    ///
    /// Recoverable: callers use it as a "nothing to report" signal.
    Empty,
    /// Insertion attempted on a full list.
    ///
    /// Unreachable when the capacity tracks the grid volume; treated as
    /// an unrecoverable configuration mismatch when it fires.
    Full {
        /// The list's fixed capacity.
        capacity: usize,
    },
    /// The cursor moved (or was used) outside the live entries.
    ///
    /// Recoverable: traversal loops check `at_end()` and stop.
    CursorOutOfBounds {
        /// Cursor position at the failure.
        cursor: usize,
        /// Live entry count at the failure.
        len: usize,
    },
}

impl fmt::Display for ListError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "worklist is empty"),
            Self::Full { capacity } => {
                write!(f, "worklist is full at capacity {capacity}")
            }
            Self::CursorOutOfBounds { cursor, len } => {
                write!(f, "cursor {cursor} outside worklist of length {len}")
            }
        }
    }
}

impl Error for ListError {}
