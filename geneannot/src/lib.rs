//! # geneannot
//!
//! `geneannot` annotates variant records with the names of the genomic
//! features they fall into. Features come from a BED-like interval file
//! (chromosome, start, end, label), variants from a VCF-like file with a
//! `#CHROM` header line. Every variant gets the comma-joined labels of all
//! intervals covering its position, or the `.` sentinel when none does, in
//! an extra output column.
//!
//! If you do not want to use geneannot as crate, check out the `geneannot`
//! command-line tool from the `geneannot-cli` package.
//!
//! ## Key Features
//!
//! * **Interval index**: [`IntervalIndex`] groups intervals per chromosome
//!   into interval lists from `rust-lapper` and reports every covering
//!   interval in its original insertion order, duplicates included.
//! * **Pure annotation**: [`Annotator`] maps records to annotated records
//!   against a frozen index, sequentially or on a Rayon thread pool with
//!   the input order kept.
//! * **Faithful I/O**: [`VcfReader`] and [`VcfWriter`] keep meta lines and
//!   every non-annotation field byte for byte.
//! * **Fail fast**: malformed intervals, malformed positions and missing
//!   header columns are reported as [`AnnotError`]s naming the offending
//!   record.
//!
//! Number of threads to be used can be configured with setting
//! `GENEANNOT_NUM_THREADS` environment variable.
//!
//! ## Structure
//!
//! * [`data_structs`]: intervals, the interval index, variant records and
//!   the variant file header.
//! * [`annotate`]: the annotator, shared naming configuration and run
//!   summaries.
//! * [`io`]: interval file reading, variant file reading and writing.
//! * [`error`]: error taxonomy.
//! * [`utils`]: thread pool and helper macros.
//!
//! ## Usage
//!
//! ### Annotating in memory
//!
//! ```
//! use geneannot::prelude::*;
//!
//! let index = IntervalIndex::try_from_raw(vec![("1", 100, 200, "GENE_A")])?;
//! let annotator = Annotator::new(&index);
//!
//! let records = vec![
//!     VariantRecord::new("1", 150),
//!     VariantRecord::new("1", 250),
//!     VariantRecord::new("2", 150),
//! ];
//! let annotated = annotator.annotate(records)?;
//! let values = annotated
//!     .iter()
//!     .map(|r| r.annotation().to_string())
//!     .collect::<Vec<_>>();
//! assert_eq!(values, vec!["GENE_A", ".", "."]);
//! # Ok::<(), AnnotError>(())
//! ```
//!
//! ### Annotating files
//!
//! ```no_run
//! use std::fs::File;
//! use geneannot::prelude::*;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let index = IntervalIndex::from_bed(File::open("genes.bed")?)?;
//!     let config = AnnotConfig::default();
//!
//!     let mut reader = VcfReader::try_new(File::open("sample.vcf")?, &config)?;
//!     let records = Annotator::new(&index).annotate(reader.read_all()?)?;
//!
//!     let mut writer = VcfWriter::try_new(
//!         File::create("annotated.vcf")?,
//!         reader.header(),
//!         config,
//!     )?;
//!     writer.write_all(&records)?;
//!     writer.finish()?;
//!     Ok(())
//! }
//! ```

pub mod annotate;
pub mod data_structs;
pub mod error;
pub mod io;
pub mod prelude;
pub mod utils;

#[allow(unused_imports)]
use prelude::*;
pub use crate::annotate::{
    AnnotConfig,
    AnnotationSummary,
    Annotator,
};
pub use crate::data_structs::coords::{
    GenomicInterval,
    IntervalIndex,
};
pub use crate::data_structs::variant::{
    Annotation,
    VariantRecord,
    VcfHeader,
};
pub use crate::error::{
    AnnotError,
    Result,
};
pub use crate::io::bed::read_intervals;
pub use crate::io::vcf::{
    VcfReader,
    VcfWriter,
};
