//! The grid itself: dimensions, cells, and validated accessors.

use chroma_core::{Color, Coord};
use std::error::Error;
use std::fmt;

/// Validated grid dimensions.
///
/// Construct via [`Dims::new`], which rejects zero-sized axes and axes
/// that do not fit a coordinate component.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Dims {
    x: u32,
    y: u32,
    z: u32,
}

impl Dims {
    /// Maximum axis size: coordinates use `i32`, so each axis must fit.
    pub const MAX_DIM: u32 = i32::MAX as u32;

    /// Create dimensions of `x * y * z` cells.
    ///
    /// Returns `Err(GridError::EmptyGrid)` if any axis is 0, or
    /// `Err(GridError::DimensionTooLarge)` if any axis exceeds
    /// [`Dims::MAX_DIM`].
    pub fn new(x: u32, y: u32, z: u32) -> Result<Self, GridError> {
        if x == 0 || y == 0 || z == 0 {
            return Err(GridError::EmptyGrid);
        }
        for (axis, value) in [("x", x), ("y", y), ("z", z)] {
            if value > Self::MAX_DIM {
                return Err(GridError::DimensionTooLarge {
                    axis,
                    value,
                    max: Self::MAX_DIM,
                });
            }
        }
        Ok(Self { x, y, z })
    }

    /// Axis sizes as `(x, y, z)`.
    pub fn sizes(self) -> (u32, u32, u32) {
        (self.x, self.y, self.z)
    }

    /// Total number of cells.
    pub fn volume(self) -> usize {
        (self.x as usize) * (self.y as usize) * (self.z as usize)
    }

    /// Whether `coord` addresses a cell inside these dimensions.
    ///
    /// The single shared bounds predicate: pure, side-effect-free, and it
    /// evaluates all three axes unconditionally.
    pub fn contains(self, coord: Coord) -> bool {
        let x_ok = coord.x >= 0 && coord.x < self.x as i32;
        let y_ok = coord.y >= 0 && coord.y < self.y as i32;
        let z_ok = coord.z >= 0 && coord.z < self.z as i32;
        x_ok && y_ok && z_ok
    }

    /// Every coordinate in canonical scan order: x outermost, then y,
    /// z innermost.
    ///
    /// Two calls return the same sequence; population and the scan both
    /// iterate in this order, which is what makes first-discovered
    /// tie-breaks well-defined.
    pub fn coords(self) -> impl Iterator<Item = Coord> {
        (0..self.x as i32).flat_map(move |x| {
            (0..self.y as i32)
                .flat_map(move |y| (0..self.z as i32).map(move |z| Coord::new(x, y, z)))
        })
    }
}

impl fmt::Display for Dims {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[0, {}) x [0, {}) x [0, {})", self.x, self.y, self.z)
    }
}

/// One cell's state. Never leaves the grid.
#[derive(Clone, Copy, Debug)]
struct Cell {
    color: Color,
    visited: bool,
    populated: bool,
}

/// A fixed-dimension dense 3D array of colored cells.
///
/// Each cell carries a color, a visited flag (has the scanner absorbed or
/// pruned it), and a populated flag (has a color ever been assigned).
/// A cell's color is only meaningful once populated; reading it earlier
/// is an error.
///
/// # Examples
///
/// ```
/// use chroma_core::{Color, Coord};
/// use chroma_grid::{Dims, Grid};
///
/// let mut grid = Grid::new(Dims::new(2, 2, 2).unwrap());
/// let c = Coord::new(0, 1, 1);
/// assert!(grid.color(c).is_err()); // unpopulated
///
/// grid.set_color(c, Color::Green).unwrap();
/// assert_eq!(grid.color(c).unwrap(), Color::Green);
/// assert!(!grid.visited(c).unwrap());
/// ```
#[derive(Clone, Debug)]
pub struct Grid {
    dims: Dims,
    cells: Vec<Cell>,
}

impl Grid {
    /// A grid with every cell unpopulated and unvisited.
    pub fn new(dims: Dims) -> Self {
        let blank = Cell {
            // Placeholder until assignment; unreadable while unpopulated.
            color: Color::Red,
            visited: false,
            populated: false,
        };
        Self {
            dims,
            cells: vec![blank; dims.volume()],
        }
    }

    /// A grid with every cell populated with `color` and its visited flag
    /// set to `visited`.
    pub fn filled(dims: Dims, color: Color, visited: bool) -> Self {
        let cell = Cell {
            color,
            visited,
            populated: true,
        };
        Self {
            dims,
            cells: vec![cell; dims.volume()],
        }
    }

    /// The grid's dimensions.
    pub fn dims(&self) -> Dims {
        self.dims
    }

    /// Whether `coord` addresses a cell in this grid.
    pub fn contains(&self, coord: Coord) -> bool {
        self.dims.contains(coord)
    }

    fn index(&self, coord: Coord) -> Result<usize, GridError> {
        if !self.dims.contains(coord) {
            return Err(GridError::OutOfBounds {
                coord,
                dims: self.dims,
            });
        }
        let (_, y, z) = self.dims.sizes();
        Ok(((coord.x as usize) * (y as usize) + (coord.y as usize)) * (z as usize)
            + (coord.z as usize))
    }

    /// The cell's color.
    ///
    /// # Errors
    ///
    /// `OutOfBounds` for an invalid coordinate; `Unpopulated` if the cell
    /// has never been assigned a color.
    pub fn color(&self, coord: Coord) -> Result<Color, GridError> {
        let cell = &self.cells[self.index(coord)?];
        if !cell.populated {
            return Err(GridError::Unpopulated { coord });
        }
        Ok(cell.color)
    }

    /// Assign the cell's color and mark it populated.
    ///
    /// Idempotent in the populated flag: reassigning overwrites the color.
    ///
    /// # Errors
    ///
    /// `OutOfBounds` for an invalid coordinate.
    pub fn set_color(&mut self, coord: Coord, color: Color) -> Result<(), GridError> {
        let idx = self.index(coord)?;
        let cell = &mut self.cells[idx];
        cell.color = color;
        cell.populated = true;
        Ok(())
    }

    /// The cell's visited flag.
    ///
    /// # Errors
    ///
    /// `OutOfBounds` for an invalid coordinate.
    pub fn visited(&self, coord: Coord) -> Result<bool, GridError> {
        Ok(self.cells[self.index(coord)?].visited)
    }

    /// Set the cell's visited flag.
    ///
    /// # Errors
    ///
    /// `OutOfBounds` for an invalid coordinate.
    pub fn set_visited(&mut self, coord: Coord, visited: bool) -> Result<(), GridError> {
        let idx = self.index(coord)?;
        self.cells[idx].visited = visited;
        Ok(())
    }

    /// Whether every cell has been marked visited. O(volume).
    pub fn is_fully_visited(&self) -> bool {
        self.cells.iter().all(|c| c.visited)
    }

    /// Whether every cell has been assigned a color. O(volume).
    pub fn is_fully_populated(&self) -> bool {
        self.cells.iter().all(|c| c.populated)
    }
}

/// Errors from grid construction or cell access.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GridError {
    /// A coordinate falls outside the grid's dimensions.
    ///
    /// Fatal on direct access; a benign "no match" while probing
    /// neighbour directions during a flood fill, where stepping past an
    /// edge is the expected boundary-clipping outcome.
    OutOfBounds {
        /// The offending coordinate.
        coord: Coord,
        /// The dimensions it missed.
        dims: Dims,
    },
    /// A color was requested from a cell that was never assigned one.
    Unpopulated {
        /// The unpopulated cell.
        coord: Coord,
    },
    /// Attempted to construct dimensions with a zero-sized axis.
    EmptyGrid,
    /// An axis does not fit a coordinate component.
    DimensionTooLarge {
        /// Which axis.
        axis: &'static str,
        /// The configured size.
        value: u32,
        /// The largest supported size.
        max: u32,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds { coord, dims } => {
                write!(f, "coordinate {coord} out of bounds: {dims}")
            }
            Self::Unpopulated { coord } => {
                write!(f, "cell {coord} has never been assigned a color")
            }
            Self::EmptyGrid => write!(f, "grid must have at least one cell on every axis"),
            Self::DimensionTooLarge { axis, value, max } => {
                write!(f, "dimension {axis} = {value} exceeds maximum {max}")
            }
        }
    }
}

impl Error for GridError {}
