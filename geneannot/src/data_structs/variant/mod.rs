//! Variant-side data structures.
//!
//! - [`VariantRecord`]: one data line of the variant file with its
//!   chromosome, position and every other field kept verbatim.
//! - [`Annotation`]: the label lookup result attached to a record.
//! - [`VcfHeader`]: meta lines and column layout of the variant file.

mod annotation;
mod header;
mod record;

pub use annotation::Annotation;
pub use header::VcfHeader;
pub use record::VariantRecord;

#[cfg(test)]
mod tests;
