use std::fmt::Display;

use itertools::Itertools;

use crate::data_structs::typedef::{
    LabelStr,
    LABEL_SEPARATOR,
    MISSING_SENTINEL,
};

/// Annotation state of a variant record.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Annotation {
    /// Not looked up yet.
    #[default]
    Pending,
    /// Looked up, no covering interval.
    Missing,
    /// Labels of all covering intervals, in interval insertion order.
    Genes(Vec<LabelStr>),
}

impl Annotation {
    /// Creates an annotation from a lookup result. An empty result is
    /// [`Annotation::Missing`].
    pub fn from_labels<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<LabelStr>, {
        let labels = labels.into_iter().map_into().collect_vec();
        if labels.is_empty() {
            Annotation::Missing
        }
        else {
            Annotation::Genes(labels)
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, Annotation::Pending)
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, Annotation::Missing)
    }

    /// Labels carried by the annotation, empty unless
    /// [`Annotation::Genes`].
    pub fn labels(&self) -> &[LabelStr] {
        match self {
            Annotation::Genes(labels) => labels,
            _ => &[],
        }
    }

    /// Serialized field value. Pending records render as missing.
    pub fn render(
        &self,
        separator: &str,
        sentinel: &str,
    ) -> String {
        match self {
            Annotation::Genes(labels) => labels.iter().join(separator),
            Annotation::Missing | Annotation::Pending => sentinel.to_string(),
        }
    }
}

impl Display for Annotation {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        write!(f, "{}", self.render(LABEL_SEPARATOR, MISSING_SENTINEL))
    }
}
