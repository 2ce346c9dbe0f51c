use std::collections::BTreeMap;

use itertools::Itertools;
use serde::Serialize;

use crate::data_structs::variant::{
    Annotation,
    VariantRecord,
};

/// Counts of an annotation run, for reporting.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AnnotationSummary {
    pub total:     usize,
    pub annotated: usize,
    pub missing:   usize,
    pub pending:   usize,
    /// Number of records carrying each label. A label repeated within one
    /// record counts once.
    pub labels:    BTreeMap<String, usize>,
}

impl AnnotationSummary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(
        &mut self,
        record: &VariantRecord,
    ) {
        self.total += 1;
        match record.annotation() {
            Annotation::Pending => self.pending += 1,
            Annotation::Missing => self.missing += 1,
            Annotation::Genes(labels) => {
                self.annotated += 1;
                for label in labels.iter().unique() {
                    *self.labels.entry(label.to_string()).or_default() += 1;
                }
            },
        }
    }

    pub fn from_records<'a, I>(records: I) -> Self
    where
        I: IntoIterator<Item = &'a VariantRecord>, {
        let mut summary = Self::new();
        records
            .into_iter()
            .for_each(|record| summary.add(record));
        summary
    }
}
