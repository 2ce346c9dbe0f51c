//! Gene annotation of variant records.
//!
//! [`Annotator`] drives a single order-preserving pass over a variant
//! collection, querying an [`IntervalIndex`] for every record. Covered
//! records get the comma-joined labels of all covering intervals, uncovered
//! ones the `.` sentinel.
//!
//! [`IntervalIndex`]: crate::data_structs::coords::IntervalIndex

mod annotator;
mod config;
mod summary;

pub use annotator::Annotator;
pub use config::AnnotConfig;
pub use summary::AnnotationSummary;
