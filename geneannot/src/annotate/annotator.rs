use log::{
    debug,
    info,
};
use rayon::prelude::*;

use crate::data_structs::coords::IntervalIndex;
use crate::data_structs::typedef::PosType;
use crate::data_structs::variant::{
    Annotation,
    VariantRecord,
};
use crate::error::Result;
use crate::utils::THREAD_POOL;

/// Assigns gene labels to variant records from a frozen [`IntervalIndex`].
///
/// Annotation is a pure function of chromosome, position and the interval
/// set: annotating a record twice gives the same result, and the index is
/// only ever read.
#[derive(Debug, Clone, Copy)]
pub struct Annotator<'a> {
    index: &'a IntervalIndex,
}

impl<'a> Annotator<'a> {
    pub fn new(index: &'a IntervalIndex) -> Self {
        Self { index }
    }

    pub fn index(&self) -> &'a IntervalIndex {
        self.index
    }

    /// Looks up the annotation of a single position.
    pub fn lookup(
        &self,
        chrom: &str,
        position: PosType,
    ) -> Annotation {
        Annotation::from_labels(
            self.index
                .covering(chrom, position)
                .into_iter()
                .map(|interval| interval.label().clone()),
        )
    }

    /// Annotates `record` in place, overwriting any previous annotation.
    ///
    /// Fails if the position field is not a non-negative integer.
    pub fn annotate_record(
        &self,
        record: &mut VariantRecord,
    ) -> Result<()> {
        let position = record.position()?;
        let annotation = self.lookup(record.chrom(), position);
        record.set_annotation(annotation);
        Ok(())
    }

    /// Annotates every record, keeping the input order. Stops at the first
    /// malformed position.
    pub fn annotate(
        &self,
        records: Vec<VariantRecord>,
    ) -> Result<Vec<VariantRecord>> {
        let annotated = records
            .into_iter()
            .map(|mut record| -> Result<VariantRecord> {
                self.annotate_record(&mut record)?;
                Ok(record)
            })
            .collect::<Result<Vec<_>>>()?;
        info!("Annotated {} variant records", annotated.len());
        Ok(annotated)
    }

    /// Same as [`Annotator::annotate`], with the per-record lookups spread
    /// over the crate thread pool. Output order equals input order.
    pub fn annotate_par(
        &self,
        records: Vec<VariantRecord>,
    ) -> Result<Vec<VariantRecord>> {
        debug!(
            "Annotating {} records on {} threads",
            records.len(),
            THREAD_POOL.current_num_threads()
        );
        let annotated = THREAD_POOL.install(|| {
            records
                .into_par_iter()
                .map(|mut record| -> Result<VariantRecord> {
                    self.annotate_record(&mut record)?;
                    Ok(record)
                })
                .collect::<Result<Vec<_>>>()
        })?;
        info!("Annotated {} variant records", annotated.len());
        Ok(annotated)
    }
}
