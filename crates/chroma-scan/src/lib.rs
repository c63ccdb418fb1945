//! Region discovery for the Chroma analyzer.
//!
//! This crate holds the search machinery: [`Worklist`], the bounded
//! traversal list the flood fill grows through; [`Region`], a completed
//! fill captured with its color; and [`RegionFinder`] /
//! [`find_regions`], the exhaustive grid scan that applies the pruning
//! rule and keeps the two largest regions found.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod finder;
pub mod region;
pub mod worklist;

pub use finder::{find_regions, RegionFinder, ScanError};
pub use region::Region;
pub use worklist::{ListError, Worklist};
