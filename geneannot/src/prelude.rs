pub use crate::annotate::{
    AnnotConfig,
    AnnotationSummary,
    Annotator,
};
pub use crate::data_structs::coords::{
    GenomicInterval,
    IntervalIndex,
};
pub use crate::data_structs::typedef::{
    LabelStr,
    PosType,
    SeqNameStr,
};
pub use crate::data_structs::variant::{
    Annotation,
    VariantRecord,
    VcfHeader,
};
pub use crate::error::AnnotError;
pub use crate::io::bed::read_intervals;
pub use crate::io::vcf::{
    VcfReader,
    VcfWriter,
};
