//! Core types for the Chroma region analyzer.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! coordinate and direction vocabulary shared by the grid and the scanner,
//! the fixed color set, and the per-color population tallies.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod color;
pub mod coord;
pub mod counts;

pub use color::Color;
pub use coord::{Coord, Direction};
pub use counts::{ColorCounts, CountError};
