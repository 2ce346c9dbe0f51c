//! Error types of the annotation engine and its file collaborators.
//!
//! Every variant is fatal for a run. A position that is not covered by any
//! interval is not an error and never surfaces here.

use thiserror::Error;

use crate::data_structs::typedef::PosType;

#[derive(Debug, Error)]
pub enum AnnotError {
    /// Interval with start greater than end.
    #[error("malformed interval {chrom}:{start}-{end} ({label}): start is greater than end")]
    MalformedInterval {
        chrom: String,
        start: PosType,
        end:   PosType,
        label: String,
    },

    /// Variant position that is not a non-negative integer.
    #[error(
        "malformed position '{value}' of variant on '{chrom}' (line {line}): \
         expected a non-negative integer"
    )]
    MalformedPosition {
        line:  usize,
        chrom: String,
        value: String,
    },

    /// The variant source has no header line.
    #[error("no header line starting with '{marker}' found in variant file")]
    MissingHeader { marker: String },

    /// A required column is absent from the header line.
    #[error("required column '{column}' is missing from the variant header")]
    MissingColumn { column: String },

    /// The annotation column would overwrite the chromosome or position
    /// column.
    #[error("annotation column '{column}' clashes with a required column of the variant header")]
    ColumnConflict { column: String },

    /// Data line too short to hold the chromosome and position columns.
    #[error("line {line} has {found} fields, at least {expected} expected")]
    MalformedRecord {
        line:     usize,
        found:    usize,
        expected: usize,
    },

    /// Unreadable interval record.
    #[error("failed to parse interval record {record}: {message}")]
    Parse { record: usize, message: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

pub type Result<T> = std::result::Result<T, AnnotError>;
