use crate::annotate::AnnotConfig;
use crate::error::{
    AnnotError,
    Result,
};
use crate::getter_fn;

/// Layout of a header-driven variant file.
///
/// Records access the chromosome and position fields by column index. The
/// header keeps the serialized column names untouched, so the chromosome
/// column is written back under the name it was read with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VcfHeader {
    meta:        Vec<String>,
    columns:     Vec<String>,
    chrom_idx:   usize,
    pos_idx:     usize,
    annot_idx:   Option<usize>,
}

impl VcfHeader {
    /// Creates the header from the lines preceding the header line and the
    /// header line itself (without line terminator).
    ///
    /// Fails with [`AnnotError::MissingColumn`] if the chromosome or
    /// position column named in `config` is absent, and with
    /// [`AnnotError::ColumnConflict`] if the annotation column is one of
    /// them.
    pub fn try_new(
        meta: Vec<String>,
        header_line: &str,
        config: &AnnotConfig,
    ) -> Result<Self> {
        let columns: Vec<String> =
            header_line.split('\t').map(String::from).collect();
        let find_column = |name: &str| {
            columns
                .iter()
                .position(|column| column == name)
                .ok_or_else(|| {
                    AnnotError::MissingColumn {
                        column: name.to_string(),
                    }
                })
        };
        let chrom_idx = find_column(config.chrom_column())?;
        let pos_idx = find_column(config.pos_column())?;
        let annot_idx = find_column(config.annot_column()).ok();
        if annot_idx.is_some_and(|idx| idx == chrom_idx || idx == pos_idx) {
            return Err(AnnotError::ColumnConflict {
                column: config.annot_column().to_string(),
            });
        }

        Ok(Self {
            meta,
            columns,
            chrom_idx,
            pos_idx,
            annot_idx,
        })
    }

    getter_fn!(meta, Vec<String>);

    getter_fn!(columns, Vec<String>);

    pub fn chrom_idx(&self) -> usize {
        self.chrom_idx
    }

    pub fn pos_idx(&self) -> usize {
        self.pos_idx
    }

    /// Index of an annotation column already present in the input.
    pub fn annot_idx(&self) -> Option<usize> {
        self.annot_idx
    }

    /// Serialized name of the chromosome column.
    pub fn chrom_column(&self) -> &str {
        &self.columns[self.chrom_idx]
    }

    /// Minimal number of fields a data line needs.
    pub fn min_fields(&self) -> usize {
        self.chrom_idx.max(self.pos_idx) + 1
    }

    /// Header columns of the annotated output. The annotation column is
    /// appended unless the input already had one.
    pub fn output_columns<'a>(
        &'a self,
        annot_column: &'a str,
    ) -> Vec<&'a str> {
        let mut columns = self
            .columns
            .iter()
            .map(String::as_str)
            .collect::<Vec<_>>();
        if self.annot_idx.is_none() {
            columns.push(annot_column);
        }
        columns
    }
}
