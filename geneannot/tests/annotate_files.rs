use std::fs::File;
use std::io::{
    BufRead,
    BufReader,
};
use std::path::PathBuf;

use geneannot::prelude::*;
use rstest::{
    fixture,
    rstest,
};
use tempfile::NamedTempFile;

fn data_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/data")
        .join(name)
}

#[fixture]
fn index() -> IntervalIndex {
    IntervalIndex::from_bed(File::open(data_path("genes.bed")).unwrap()).unwrap()
}

fn annotate_file(
    index: &IntervalIndex,
    config: AnnotConfig,
    parallel: bool,
) -> Vec<String> {
    let mut reader = VcfReader::try_new(
        File::open(data_path("sample.vcf")).unwrap(),
        &config,
    )
    .unwrap();
    let records = reader.read_all().unwrap();
    let annotator = Annotator::new(index);
    let records = if parallel {
        annotator.annotate_par(records).unwrap()
    }
    else {
        annotator.annotate(records).unwrap()
    };

    let output = NamedTempFile::new().unwrap();
    let mut writer =
        VcfWriter::try_new(output.reopen().unwrap(), reader.header(), config)
            .unwrap();
    writer.write_all(&records).unwrap();
    writer.finish().unwrap();

    BufReader::new(output.reopen().unwrap())
        .lines()
        .collect::<std::io::Result<Vec<_>>>()
        .unwrap()
}

#[rstest]
fn test_index_from_file(index: IntervalIndex) {
    assert_eq!(index.len(), 4);
    assert_eq!(index.n_chr(), 2);
    assert_eq!(index.labels_at("chr1", 175), vec!["BRCA1", "BRCA2"]);
}

#[rstest]
#[case::sequential(false)]
#[case::parallel(true)]
fn test_annotate_sample(
    index: IntervalIndex,
    #[case] parallel: bool,
) {
    let lines = annotate_file(&index, AnnotConfig::default(), parallel);

    assert_eq!(lines.len(), 11);
    assert_eq!(lines[0], "##fileformat=VCFv4.2");
    assert_eq!(
        lines[3],
        "#CHROM\tPOS\tID\tREF\tALT\tQUAL\tFILTER\tINFO\tGENE"
    );

    let annotations = lines[4..]
        .iter()
        .map(|line| line.rsplit('\t').next().unwrap())
        .collect::<Vec<_>>();
    assert_eq!(annotations, vec![
        ".",
        "BRCA1",
        "BRCA1,BRCA2",
        "BRCA2",
        "TP53",
        "EGFR",
        "."
    ]);
}

#[rstest]
fn test_annotate_sample_keeps_fields(index: IntervalIndex) {
    let lines = annotate_file(&index, AnnotConfig::default(), true);
    let input = BufReader::new(File::open(data_path("sample.vcf")).unwrap())
        .lines()
        .collect::<std::io::Result<Vec<_>>>()
        .unwrap();

    for (original, annotated) in input.iter().zip(lines.iter()).skip(4) {
        let (fields, _) = annotated.rsplit_once('\t').unwrap();
        assert_eq!(fields, original);
    }
}

#[rstest]
fn test_annotate_sample_drop_meta(index: IntervalIndex) {
    let lines = annotate_file(
        &index,
        AnnotConfig::default().with_keep_meta(false),
        false,
    );
    assert_eq!(lines.len(), 8);
    assert!(lines[0].starts_with("#CHROM"));
}

#[rstest]
fn test_summary_of_sample(index: IntervalIndex) {
    let config = AnnotConfig::default();
    let mut reader = VcfReader::try_new(
        File::open(data_path("sample.vcf")).unwrap(),
        &config,
    )
    .unwrap();
    let records = Annotator::new(&index)
        .annotate(reader.read_all().unwrap())
        .unwrap();
    let summary = AnnotationSummary::from_records(&records);

    assert_eq!(summary.total, 7);
    assert_eq!(summary.annotated, 5);
    assert_eq!(summary.missing, 2);
    assert_eq!(summary.pending, 0);
    assert_eq!(summary.labels.get("BRCA1"), Some(&2));
}
