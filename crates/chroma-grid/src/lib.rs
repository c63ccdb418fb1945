//! Fixed-dimension 3D cell grid for the Chroma region analyzer.
//!
//! [`Grid`] owns a dense 3D array of cells, each carrying a color, a
//! visited flag, and a populated flag. Every access validates the
//! coordinate against the configured [`Dims`]; color reads additionally
//! require the cell to have been populated.
//!
//! The [`source`] module holds the color-assignment collaborators: the
//! [`ColorSource`] trait, the deterministic seeded generator, and the
//! fixture sources used in tests and examples.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod grid;
pub mod source;

pub use grid::{Dims, Grid, GridError};
pub use source::{populate, ColorSource, CyclingColors, SeededColors, UniformColors};
