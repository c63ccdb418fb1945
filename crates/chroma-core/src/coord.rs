//! Grid coordinates and the six face-adjacent directions.

use smallvec::SmallVec;
use std::fmt;

/// A cell position in a 3D grid.
///
/// `Coord` is the identity type for cells: the grid addresses cells by it
/// and the scanner's worklist stores it as its key. Components are signed
/// so that stepping off a grid edge produces a representable (and
/// rejectable) coordinate rather than wrapping.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord {
    /// Row position.
    pub x: i32,
    /// Column position.
    pub y: i32,
    /// Depth position.
    pub z: i32,
}

impl Coord {
    /// Create a coordinate from its three components.
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// The coordinate one unit away in the given direction.
    ///
    /// No bounds are applied here; whether the result addresses a real
    /// cell is the grid's decision.
    ///
    /// # Examples
    ///
    /// ```
    /// use chroma_core::{Coord, Direction};
    ///
    /// let c = Coord::new(1, 1, 1);
    /// assert_eq!(c.step(Direction::North), Coord::new(1, 1, 2));
    /// assert_eq!(c.step(Direction::Down), Coord::new(1, 0, 1));
    /// ```
    pub fn step(self, dir: Direction) -> Self {
        let (dx, dy, dz) = dir.offset();
        Self::new(self.x + dx, self.y + dy, self.z + dz)
    }

    /// All six face-adjacent coordinates, in [`Direction::ALL`] order.
    ///
    /// Unclipped: entries may lie outside any particular grid.
    pub fn neighbours(self) -> SmallVec<[Coord; 6]> {
        Direction::ALL.iter().map(|&d| self.step(d)).collect()
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

/// One of the six face-adjacent travel directions.
///
/// The offset table is the single source of truth for adjacency: two
/// coordinates are neighbours exactly when one is the other stepped by
/// some `Direction`. Each axis has a positive and a negative entry, and
/// [`opposite`](Direction::opposite) pairs them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Towards +z.
    North,
    /// Towards -z.
    South,
    /// Towards +x.
    East,
    /// Towards -x.
    West,
    /// Towards +y.
    Up,
    /// Towards -y.
    Down,
}

impl Direction {
    /// Every direction, in the order the scanner probes them.
    pub const ALL: [Direction; 6] = [
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
        Direction::Up,
        Direction::Down,
    ];

    /// Unit offset along each axis: `(dx, dy, dz)`.
    pub const fn offset(self) -> (i32, i32, i32) {
        match self {
            Direction::North => (0, 0, 1),
            Direction::South => (0, 0, -1),
            Direction::East => (1, 0, 0),
            Direction::West => (-1, 0, 0),
            Direction::Up => (0, 1, 0),
            Direction::Down => (0, -1, 0),
        }
    }

    /// The direction that undoes this one.
    pub const fn opposite(self) -> Direction {
        match self {
            Direction::North => Direction::South,
            Direction::South => Direction::North,
            Direction::East => Direction::West,
            Direction::West => Direction::East,
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
        }
    }
}
