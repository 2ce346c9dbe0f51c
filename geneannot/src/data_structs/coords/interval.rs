use std::fmt::Display;

use serde::Serialize;

use crate::data_structs::typedef::{
    LabelStr,
    PosType,
    SeqNameStr,
};
use crate::error::{
    AnnotError,
    Result,
};

/// Labelled genomic feature with inclusive `start` and `end` positions.
///
/// Can only be constructed valid (`start <= end`) and is immutable
/// afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct GenomicInterval {
    chrom: SeqNameStr,
    start: PosType,
    end:   PosType,
    label: LabelStr,
}

impl GenomicInterval {
    /// Creates a new `GenomicInterval`.
    ///
    /// Fails with [`AnnotError::MalformedInterval`] if `start > end`.
    pub fn try_new<S, L>(
        chrom: S,
        start: PosType,
        end: PosType,
        label: L,
    ) -> Result<Self>
    where
        S: Into<SeqNameStr>,
        L: Into<LabelStr>, {
        let chrom = chrom.into();
        let label = label.into();
        if start > end {
            return Err(AnnotError::MalformedInterval {
                chrom: chrom.to_string(),
                start,
                end,
                label: label.to_string(),
            });
        }
        Ok(Self {
            chrom,
            start,
            end,
            label,
        })
    }

    /// Returns the chromosome name.
    pub fn chrom(&self) -> &SeqNameStr {
        &self.chrom
    }

    /// Returns the inclusive start position.
    pub fn start(&self) -> PosType {
        self.start
    }

    /// Returns the inclusive end position.
    pub fn end(&self) -> PosType {
        self.end
    }

    pub fn label(&self) -> &LabelStr {
        &self.label
    }

    /// Number of positions covered, both bounds included.
    pub fn length(&self) -> PosType {
        self.end - self.start + 1
    }

    /// Checks if the interval covers `position` on `chrom`.
    ///
    /// Chromosome names are compared literally, "chr1" and "1" are
    /// different chromosomes.
    pub fn contains(
        &self,
        chrom: &str,
        position: PosType,
    ) -> bool {
        self.chrom.as_str() == chrom
            && self.start <= position
            && position <= self.end
    }
}

impl TryFrom<bio::io::bed::Record> for GenomicInterval {
    type Error = AnnotError;

    /// Converts from a `bio::io::bed::Record`, taking the name column as
    /// label. Coordinates are used as is.
    fn try_from(value: bio::io::bed::Record) -> Result<Self> {
        let label = value.name().ok_or_else(|| {
            AnnotError::Parse {
                record:  0,
                message: format!(
                    "missing label column for {}:{}-{}",
                    value.chrom(),
                    value.start(),
                    value.end()
                ),
            }
        })?;
        Self::try_new(value.chrom(), value.start(), value.end(), label)
    }
}

impl Display for GenomicInterval {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        write!(
            f,
            "{}:{}-{} ({})",
            self.chrom, self.start, self.end, self.label
        )
    }
}
