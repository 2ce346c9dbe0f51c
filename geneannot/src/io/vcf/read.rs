use std::io::{
    BufRead,
    BufReader,
    Read,
};

use log::{
    debug,
    warn,
};

use crate::annotate::AnnotConfig;
use crate::data_structs::variant::{
    VariantRecord,
    VcfHeader,
};
use crate::error::{
    AnnotError,
    Result,
};

/// Strips the line terminator only, field whitespace is data.
fn trim_line_end(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}

/// Reader of header-driven, tab-separated variant files.
///
/// The header is located and validated on construction, so a file without
/// the header line or without the chromosome and position columns is
/// rejected before a single record is read. Records are then produced by
/// iterating over the reader.
pub struct VcfReader<R: Read> {
    reader:  BufReader<R>,
    header:  VcfHeader,
    line_no: usize,
    buf:     String,
}

impl<R: Read> VcfReader<R> {
    /// Creates a new reader, consuming input up to and including the header
    /// line.
    ///
    /// Lines before the header line are kept as meta lines.
    pub fn try_new(
        reader: R,
        config: &AnnotConfig,
    ) -> Result<Self> {
        let mut reader = BufReader::new(reader);
        let mut meta = Vec::new();
        let mut line_no = 0;
        let mut buf = String::new();

        loop {
            buf.clear();
            if reader.read_line(&mut buf)? == 0 {
                return Err(AnnotError::MissingHeader {
                    marker: config.header_marker().to_string(),
                });
            }
            line_no += 1;

            let line = trim_line_end(&buf);
            if line.starts_with(config.header_marker()) {
                let header = VcfHeader::try_new(meta, line, config)?;
                debug!(
                    "Found header at line {} with {} columns ({} meta lines)",
                    line_no,
                    header.columns().len(),
                    header.meta().len()
                );
                return Ok(Self {
                    reader,
                    header,
                    line_no,
                    buf,
                });
            }
            meta.push(line.to_string());
        }
    }

    pub fn header(&self) -> &VcfHeader {
        &self.header
    }

    /// Iterates over the remaining records.
    pub fn records(&mut self) -> impl Iterator<Item = Result<VariantRecord>> + '_ {
        self.by_ref()
    }

    /// Reads all remaining records.
    pub fn read_all(&mut self) -> Result<Vec<VariantRecord>> {
        self.records().collect()
    }
}

impl<R: Read> Iterator for VcfReader<R> {
    type Item = Result<VariantRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            self.buf.clear();
            match self.reader.read_line(&mut self.buf) {
                Ok(0) => return None,
                Ok(_) => {},
                Err(e) => return Some(Err(e.into())),
            }
            self.line_no += 1;

            let line = trim_line_end(&self.buf);
            if line.is_empty() {
                continue;
            }
            if line.starts_with('#') {
                warn!(
                    "Skipping comment line {} after the header",
                    self.line_no
                );
                continue;
            }

            let fields = line.split('\t').map(String::from).collect();
            return Some(VariantRecord::try_from_fields(
                self.line_no,
                fields,
                &self.header,
            ));
        }
    }
}
