use crate::data_structs::typedef::{
    DEFAULT_ANNOT_COLUMN,
    LABEL_SEPARATOR,
    MISSING_SENTINEL,
    VCF_HEADER_MARKER,
    VCF_POS_COLUMN,
};
use crate::data_structs::variant::Annotation;
use crate::{
    getter_fn,
    with_field_fn,
};

/// Naming and rendering settings shared by the variant reader and writer.
///
/// Column names are matched exactly, case included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnotConfig {
    header_marker: String,
    chrom_column:  String,
    pos_column:    String,
    annot_column:  String,
    separator:     String,
    sentinel:      String,
    keep_meta:     bool,
}

impl Default for AnnotConfig {
    fn default() -> Self {
        Self {
            header_marker: VCF_HEADER_MARKER.to_string(),
            chrom_column:  VCF_HEADER_MARKER.to_string(),
            pos_column:    VCF_POS_COLUMN.to_string(),
            annot_column:  DEFAULT_ANNOT_COLUMN.to_string(),
            separator:     LABEL_SEPARATOR.to_string(),
            sentinel:      MISSING_SENTINEL.to_string(),
            keep_meta:     true,
        }
    }
}

impl AnnotConfig {
    pub fn new() -> Self {
        Self::default()
    }

    with_field_fn!(header_marker, String);

    with_field_fn!(chrom_column, String);

    with_field_fn!(pos_column, String);

    with_field_fn!(annot_column, String);

    with_field_fn!(separator, String);

    with_field_fn!(sentinel, String);

    with_field_fn!(keep_meta, bool);

    getter_fn!(header_marker, str);

    getter_fn!(chrom_column, str);

    getter_fn!(pos_column, str);

    getter_fn!(annot_column, str);

    getter_fn!(separator, str);

    getter_fn!(sentinel, str);

    pub fn keep_meta(&self) -> bool {
        self.keep_meta
    }

    /// Output field value of `annotation`.
    pub fn render(
        &self,
        annotation: &Annotation,
    ) -> String {
        annotation.render(&self.separator, &self.sentinel)
    }
}
