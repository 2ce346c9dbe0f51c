use super::{
    Annotation,
    VcfHeader,
};
use crate::data_structs::typedef::PosType;
use crate::error::{
    AnnotError,
    Result,
};

/// Single variant call.
///
/// All fields of the source line are kept verbatim. The chromosome and
/// position are read through column indices; the position text is parsed
/// only when the record gets annotated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariantRecord {
    line:       usize,
    fields:     Vec<String>,
    chrom_idx:  usize,
    pos_idx:    usize,
    annotation: Annotation,
}

impl VariantRecord {
    /// Creates a bare record holding only a chromosome and a position.
    pub fn new<S: Into<String>, P: ToString>(
        chrom: S,
        position: P,
    ) -> Self {
        Self {
            line:       0,
            fields:     vec![chrom.into(), position.to_string()],
            chrom_idx:  0,
            pos_idx:    1,
            annotation: Annotation::Pending,
        }
    }

    /// Creates a record from the tab-split fields of data line `line`.
    ///
    /// Fails with [`AnnotError::MalformedRecord`] if the line does not
    /// reach the chromosome or position column of `header`.
    pub fn try_from_fields(
        line: usize,
        fields: Vec<String>,
        header: &VcfHeader,
    ) -> Result<Self> {
        if fields.len() < header.min_fields() {
            return Err(AnnotError::MalformedRecord {
                line,
                found: fields.len(),
                expected: header.min_fields(),
            });
        }
        Ok(Self {
            line,
            fields,
            chrom_idx: header.chrom_idx(),
            pos_idx: header.pos_idx(),
            annotation: Annotation::Pending,
        })
    }

    /// Sets the source line number used in diagnostics.
    pub fn with_line(
        mut self,
        line: usize,
    ) -> Self {
        self.line = line;
        self
    }

    /// Source line number, `0` for records not read from a file.
    pub fn line(&self) -> usize {
        self.line
    }

    pub fn chrom(&self) -> &str {
        &self.fields[self.chrom_idx]
    }

    /// Raw position text.
    pub fn position_str(&self) -> &str {
        &self.fields[self.pos_idx]
    }

    /// Parses the position field.
    ///
    /// Anything but a non-negative integer is an
    /// [`AnnotError::MalformedPosition`], no coercion is attempted.
    pub fn position(&self) -> Result<PosType> {
        self.position_str().parse::<PosType>().map_err(|_| {
            AnnotError::MalformedPosition {
                line:  self.line,
                chrom: self.chrom().to_string(),
                value: self.position_str().to_string(),
            }
        })
    }

    /// Fields as read from the source, annotation not included.
    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    pub fn annotation(&self) -> &Annotation {
        &self.annotation
    }

    pub fn set_annotation(
        &mut self,
        annotation: Annotation,
    ) {
        self.annotation = annotation;
    }
}
