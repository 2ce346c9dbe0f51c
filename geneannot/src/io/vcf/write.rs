use std::io::Write;

use log::debug;

use crate::annotate::AnnotConfig;
use crate::data_structs::variant::{
    VariantRecord,
    VcfHeader,
};
use crate::error::Result;

/// Writes annotated variant records in the layout of their source file.
///
/// Meta lines and fields are written back verbatim, the annotation goes into
/// an extra last column (or replaces an annotation column the input already
/// had).
pub struct VcfWriter<W: Write> {
    writer:    csv::Writer<W>,
    annot_idx: Option<usize>,
    config:    AnnotConfig,
    written:   usize,
}

impl<W: Write> VcfWriter<W> {
    /// Creates a new writer and writes the meta lines and the header line.
    pub fn try_new(
        mut sink: W,
        header: &VcfHeader,
        config: AnnotConfig,
    ) -> Result<Self> {
        if config.keep_meta() {
            for line in header.meta() {
                writeln!(sink, "{}", line)?;
            }
        }

        let mut writer = csv::WriterBuilder::default()
            .delimiter(b'\t')
            .has_headers(false)
            .flexible(true)
            .quote_style(csv::QuoteStyle::Never)
            .from_writer(sink);
        writer.write_record(header.output_columns(config.annot_column()))?;
        debug!(
            "Wrote header with chromosome column '{}'",
            header.chrom_column()
        );

        Ok(Self {
            writer,
            annot_idx: header.annot_idx(),
            config,
            written: 0,
        })
    }

    /// Writes a single record followed by its rendered annotation.
    pub fn write_record(
        &mut self,
        record: &VariantRecord,
    ) -> Result<()> {
        let rendered = self.config.render(record.annotation());
        let annotation = rendered.as_str();
        let mut fields = record
            .fields()
            .iter()
            .map(String::as_str)
            .collect::<Vec<_>>();

        match self.annot_idx {
            Some(idx) if idx < fields.len() => fields[idx] = annotation,
            Some(idx) => {
                fields.resize(idx, "");
                fields.push(annotation);
            },
            None => fields.push(annotation),
        }

        self.writer.write_record(fields)?;
        self.written += 1;
        Ok(())
    }

    pub fn write_all<'a, I>(
        &mut self,
        records: I,
    ) -> Result<()>
    where
        I: IntoIterator<Item = &'a VariantRecord>, {
        for record in records {
            self.write_record(record)?;
        }
        Ok(())
    }

    /// Number of records written so far.
    pub fn written(&self) -> usize {
        self.written
    }

    /// Flushes buffered output and returns the sink.
    pub fn finish(mut self) -> Result<W> {
        self.writer.flush()?;
        debug!("Finished writing {} records", self.written);
        self.writer
            .into_inner()
            .map_err(|e| e.into_error().into())
    }
}
