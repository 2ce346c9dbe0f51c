//! Variant file input and annotated output.
//!
//! The variant source is a tab-separated file whose column header line
//! starts with `#CHROM`. Lines before the header are meta lines and are
//! carried over to the output. Data lines are kept field by field, so
//! everything but the annotation column round-trips byte for byte.

mod read;
mod write;

pub use read::VcfReader;
pub use write::VcfWriter;
