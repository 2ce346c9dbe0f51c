//! This module defines data structures for representing genomic intervals.
//!
//! It provides two main structures:
//!
//! - [`GenomicInterval`]: A labelled feature on a chromosome with inclusive
//!   start and end positions (e.g. a gene).
//! - [`IntervalIndex`]: A frozen collection of intervals answering point
//!   queries, returning the labels of every interval covering a position.

mod interval;
mod interval_map;

pub use interval::GenomicInterval;
pub use interval_map::IntervalIndex;
