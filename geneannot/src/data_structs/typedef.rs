use arcstr::ArcStr;

/// Genomic coordinate. Positions are taken literally from the input files,
/// no base conversion is applied.
pub type PosType = u64;

/// Shared, cheaply clonable string used for chromosome names and labels.
pub type SeqNameStr = ArcStr;
pub type LabelStr = ArcStr;

/// Marker of the VCF column header line, also the chromosome column name.
pub const VCF_HEADER_MARKER: &str = "#CHROM";
pub const VCF_POS_COLUMN: &str = "POS";
pub const DEFAULT_ANNOT_COLUMN: &str = "GENE";

/// VCF "missing value" marker.
pub const MISSING_SENTINEL: &str = ".";
pub const LABEL_SEPARATOR: &str = ",";
