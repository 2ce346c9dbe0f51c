//! This module contains the core data structures of the `geneannot` crate.
//!
//! - [`coords`]: genomic intervals ([`GenomicInterval`]) and the point-query
//!   index built over them ([`IntervalIndex`]).
//! - [`variant`]: variant records ([`VariantRecord`]), their annotation state
//!   ([`Annotation`]) and the variant file layout ([`VcfHeader`]).
//! - [`typedef`]: type aliases and format constants.
//!
//! [`GenomicInterval`]: coords::GenomicInterval
//! [`IntervalIndex`]: coords::IntervalIndex
//! [`VariantRecord`]: variant::VariantRecord
//! [`Annotation`]: variant::Annotation
//! [`VcfHeader`]: variant::VcfHeader

pub mod coords;
pub mod typedef;
pub mod variant;
