use super::*;
use crate::annotate::AnnotConfig;
use crate::error::AnnotError;

const HEADER: &str = "#CHROM\tPOS\tID\tREF\tALT\tQUAL\tFILTER\tINFO";

fn header() -> VcfHeader {
    VcfHeader::try_new(vec![], HEADER, &AnnotConfig::default()).unwrap()
}

fn fields(line: &str) -> Vec<String> {
    line.split('\t').map(String::from).collect()
}

// --- Annotation Tests ---

#[test]
fn test_annotation_from_labels() {
    assert_eq!(
        Annotation::from_labels(Vec::<&str>::new()),
        Annotation::Missing
    );
    assert_eq!(
        Annotation::from_labels(vec!["BRCA1", "BRCA2"]),
        Annotation::Genes(vec!["BRCA1".into(), "BRCA2".into()])
    );
}

#[test]
fn test_annotation_render() {
    let genes = Annotation::from_labels(vec!["BRCA1", "BRCA2", "BRCA1"]);
    assert_eq!(genes.to_string(), "BRCA1,BRCA2,BRCA1");
    assert_eq!(genes.render(";", "NA"), "BRCA1;BRCA2;BRCA1");

    assert_eq!(Annotation::Missing.to_string(), ".");
    assert_eq!(Annotation::Missing.render(",", "NA"), "NA");
    assert_eq!(Annotation::Pending.to_string(), ".");
}

#[test]
fn test_annotation_state() {
    assert!(Annotation::default().is_pending());
    assert!(Annotation::Missing.is_missing());
    assert!(!Annotation::Missing.is_pending());
    assert!(Annotation::Missing.labels().is_empty());
    assert_eq!(Annotation::from_labels(vec!["TP53"]).labels().len(), 1);
}

// --- VcfHeader Tests ---

#[test]
fn test_header_columns() {
    let header = header();
    assert_eq!(header.columns().len(), 8);
    assert_eq!(header.chrom_idx(), 0);
    assert_eq!(header.pos_idx(), 1);
    assert_eq!(header.annot_idx(), None);
    assert_eq!(header.chrom_column(), "#CHROM");
    assert_eq!(header.min_fields(), 2);
    assert_eq!(header.output_columns("GENE").last(), Some(&"GENE"));
    assert_eq!(header.output_columns("GENE").len(), 9);
}

#[test]
fn test_header_missing_chrom_column() {
    let err = VcfHeader::try_new(
        vec![],
        "CHROM\tPOS\tID",
        &AnnotConfig::default(),
    )
    .unwrap_err();
    assert!(matches!(
        err,
        AnnotError::MissingColumn { ref column } if column == "#CHROM"
    ));
}

#[test]
fn test_header_missing_pos_column() {
    let err = VcfHeader::try_new(
        vec![],
        "#CHROM\tpos\tID",
        &AnnotConfig::default(),
    )
    .unwrap_err();
    assert!(matches!(
        err,
        AnnotError::MissingColumn { ref column } if column == "POS"
    ));
}

#[test]
fn test_header_existing_annotation_column() {
    let header = VcfHeader::try_new(
        vec![],
        "#CHROM\tPOS\tGENE\tINFO",
        &AnnotConfig::default(),
    )
    .unwrap();
    assert_eq!(header.annot_idx(), Some(2));
    assert_eq!(header.output_columns("GENE"), vec![
        "#CHROM", "POS", "GENE", "INFO"
    ]);
}

#[test]
fn test_header_custom_columns() {
    let config = AnnotConfig::default()
        .with_chrom_column("chrom".to_string())
        .with_pos_column("position".to_string());
    let header =
        VcfHeader::try_new(vec![], "id\tchrom\tposition", &config).unwrap();
    assert_eq!(header.chrom_idx(), 1);
    assert_eq!(header.pos_idx(), 2);
    assert_eq!(header.min_fields(), 3);
}

// --- VariantRecord Tests ---

#[test]
fn test_record_from_fields() {
    let record = VariantRecord::try_from_fields(
        12,
        fields("chr1\t150\trs1\tA\tG\t50\tPASS\tDP=10"),
        &header(),
    )
    .unwrap();

    assert_eq!(record.line(), 12);
    assert_eq!(record.chrom(), "chr1");
    assert_eq!(record.position_str(), "150");
    assert_eq!(record.position().unwrap(), 150);
    assert_eq!(record.fields().len(), 8);
    assert!(record.annotation().is_pending());
}

#[test]
fn test_record_too_few_fields() {
    let err = VariantRecord::try_from_fields(3, fields("chr1"), &header())
        .unwrap_err();
    assert!(matches!(err, AnnotError::MalformedRecord {
        line:     3,
        found:    1,
        expected: 2,
    }));
}

#[test]
fn test_record_new() {
    let record = VariantRecord::new("2", 150).with_line(7);
    assert_eq!(record.chrom(), "2");
    assert_eq!(record.position().unwrap(), 150);
    assert_eq!(record.line(), 7);
}

#[test]
fn test_record_malformed_positions() {
    for value in ["-5", "1.5", "abc", "", " 15", "1e3"] {
        let record = VariantRecord::new("chr1", value).with_line(4);
        match record.position().unwrap_err() {
            AnnotError::MalformedPosition { line, chrom, value: raw } => {
                assert_eq!(line, 4);
                assert_eq!(chrom, "chr1");
                assert_eq!(raw, value);
            },
            other => panic!("Unexpected error: {other}"),
        }
    }
}

#[test]
fn test_record_set_annotation() {
    let mut record = VariantRecord::new("chr1", 10);
    record.set_annotation(Annotation::Missing);
    assert!(record.annotation().is_missing());
    record.set_annotation(Annotation::from_labels(vec!["GENE_A"]));
    assert_eq!(record.annotation().to_string(), "GENE_A");
}

#[test]
fn test_header_annotation_column_conflict() {
    for column in ["POS", "#CHROM"] {
        let config = AnnotConfig::default().with_annot_column(column.to_string());
        let err = VcfHeader::try_new(vec![], "#CHROM\tPOS\tID", &config)
            .unwrap_err();
        assert!(matches!(
            err,
            AnnotError::ColumnConflict { column: ref found } if found == column
        ));
    }
}
