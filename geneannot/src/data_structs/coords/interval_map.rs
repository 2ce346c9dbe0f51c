use std::io::Read;

use hashbrown::HashMap;
use itertools::Itertools;
use log::debug;
use rust_lapper::{
    Interval,
    Lapper,
};

use super::GenomicInterval;
use crate::data_structs::typedef::{
    LabelStr,
    PosType,
    SeqNameStr,
};
use crate::error::Result;
use crate::io::bed::read_intervals;

/// Read-only index of labelled intervals answering "which labels cover
/// chromosome C at position P?".
///
/// Intervals are grouped per chromosome into a [`Lapper`]. Each stored
/// interval carries the ordinal of the source interval, so query results
/// can be reported in insertion order regardless of how the lapper sorts
/// them internally. Lapper intervals are half-open, the stored stop is
/// `end + 1`.
#[derive(Debug, Clone, Default)]
pub struct IntervalIndex {
    intervals: Vec<GenomicInterval>,
    inner:     HashMap<SeqNameStr, Lapper<PosType, usize>>,
}

impl FromIterator<GenomicInterval> for IntervalIndex {
    fn from_iter<T: IntoIterator<Item = GenomicInterval>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect_vec())
    }
}

impl IntervalIndex {
    /// Builds the index from the full ordered interval collection.
    ///
    /// Overlapping intervals and repeated labels are kept as they are.
    pub fn new(intervals: Vec<GenomicInterval>) -> Self {
        let multimap = intervals
            .iter()
            .enumerate()
            .map(|(ordinal, interval)| {
                (interval.chrom().clone(), Interval {
                    start: interval.start(),
                    stop:  interval.end().saturating_add(1),
                    val:   ordinal,
                })
            })
            .into_group_map();

        let mut inner = HashMap::with_capacity(multimap.len());
        for (chr, chr_intervals) in multimap.into_iter() {
            inner.insert(chr, Lapper::new(chr_intervals));
        }
        debug!(
            "Built interval index with {} intervals on {} chromosomes",
            intervals.len(),
            inner.len()
        );

        Self { intervals, inner }
    }

    /// Builds the index from raw `(chrom, start, end, label)` tuples.
    ///
    /// Fails on the first tuple with `start > end`, before anything can be
    /// queried.
    pub fn try_from_raw<I, S, L>(iter: I) -> Result<Self>
    where
        I: IntoIterator<Item = (S, PosType, PosType, L)>,
        S: Into<SeqNameStr>,
        L: Into<LabelStr>, {
        let intervals = iter
            .into_iter()
            .map(|(chrom, start, end, label)| {
                GenomicInterval::try_new(chrom, start, end, label)
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self::new(intervals))
    }

    /// Reads a 4-column BED-like source (chrom, start, end, label) and
    /// builds the index from it.
    pub fn from_bed<R: Read>(reader: R) -> Result<Self> {
        Ok(Self::new(read_intervals(reader)?))
    }

    /// All intervals covering `position` on `chrom`, in insertion order.
    pub fn covering(
        &self,
        chrom: &str,
        position: PosType,
    ) -> Vec<&GenomicInterval> {
        let Some(lapper) = self.inner.get(chrom)
        else {
            return Vec::new();
        };

        let ordinals = if position == PosType::MAX {
            // Saturated stops cannot be found with a half-open query here.
            lapper
                .iter()
                .map(|interval| interval.val)
                .filter(|ordinal| {
                    self.intervals[*ordinal].contains(chrom, position)
                })
                .collect_vec()
        }
        else {
            lapper
                .find(position, position + 1)
                .map(|interval| interval.val)
                .collect_vec()
        };

        ordinals
            .into_iter()
            .sorted_unstable()
            .map(|ordinal| &self.intervals[ordinal])
            .collect()
    }

    /// Labels of all intervals covering `position` on `chrom`.
    ///
    /// Insertion order is preserved and labels are not deduplicated. An
    /// unknown chromosome or an uncovered position gives an empty vector.
    pub fn labels_at(
        &self,
        chrom: &str,
        position: PosType,
    ) -> Vec<&str> {
        self.covering(chrom, position)
            .into_iter()
            .map(|interval| interval.label().as_str())
            .collect()
    }

    /// Iterates over intervals in insertion order.
    pub fn intervals(&self) -> impl Iterator<Item = &GenomicInterval> {
        self.intervals.iter()
    }

    pub fn len(&self) -> usize {
        self.intervals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }

    pub fn n_chr(&self) -> usize {
        self.inner.len()
    }

    /// Sorted chromosome names present in the index.
    pub fn chr_names(&self) -> Vec<SeqNameStr> {
        self.inner.keys().cloned().sorted().collect()
    }
}
