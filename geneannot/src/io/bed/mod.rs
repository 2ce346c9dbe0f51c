//! Reading of the interval source: a header-less, tab-separated file with
//! chromosome, start, end and label columns. Additional columns are
//! ignored and coordinates are taken literally.

use std::io::Read;

use log::debug;

use crate::data_structs::coords::GenomicInterval;
use crate::error::{
    AnnotError,
    Result,
};

/// Reads all intervals of `reader`, in file order.
///
/// Fails on the first record that cannot be parsed, lacks a label, or has
/// its start past its end. Record numbers in errors are 1-based.
pub fn read_intervals<R: Read>(reader: R) -> Result<Vec<GenomicInterval>> {
    let mut bed_reader = bio::io::bed::Reader::new(reader);
    let mut intervals = Vec::new();

    for (idx, raw) in bed_reader.records().enumerate() {
        let record = idx + 1;
        let raw = raw.map_err(|e| {
            AnnotError::Parse {
                record,
                message: e.to_string(),
            }
        })?;
        let interval = GenomicInterval::try_from(raw).map_err(|e| {
            match e {
                AnnotError::Parse { message, .. } => {
                    AnnotError::Parse { record, message }
                },
                other => other,
            }
        })?;
        intervals.push(interval);
    }

    debug!("Read {} intervals", intervals.len());
    Ok(intervals)
}
