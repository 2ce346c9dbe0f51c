use std::fs::File;
use std::io::BufWriter;
use std::path::{
    Path,
    PathBuf,
};
use std::process::exit;

use anyhow::Context;
use clap::Args;
use console::style;
use geneannot::prelude::*;
use geneannot::utils::n_threads;
use indicatif::ProgressBar;
use log::info;

use crate::utils::{
    init_pbar,
    UtilsArgs,
};

#[derive(Args, Debug, Clone)]
pub(crate) struct AnnotateArgs {
    #[arg(
        short = 'b',
        long,
        required = true,
        help = "Path to the interval file (chrom, start, end, label; tab separated)."
    )]
    pub bed:       PathBuf,
    #[arg(
        short = 'i',
        long,
        required = true,
        help = "Path to the variant file with a #CHROM header line."
    )]
    pub vcf:       PathBuf,
    #[arg(
        short = 'o',
        long,
        required = true,
        help = "Path of the annotated output file."
    )]
    pub output:    PathBuf,
    #[arg(
        long,
        default_value = "GENE",
        help_heading = "FORMAT ARGS",
        help = "Name of the annotation column."
    )]
    pub column:    String,
    #[arg(
        long,
        default_value_t = false,
        help_heading = "FORMAT ARGS",
        help = "Do not copy ## meta lines to the output."
    )]
    pub drop_meta: bool,
    #[arg(
        long,
        help_heading = "FORMAT ARGS",
        help = "Write a JSON summary of the run to this path."
    )]
    pub summary:   Option<PathBuf>,
}

fn check_input(path: &Path) {
    if !path.exists() {
        eprintln!("Path {} does not exist.", style(path.display()).red());
        exit(-1);
    }
    if !path.is_file() {
        eprintln!("Path {} is not a file.", style(path.display()).red());
        exit(-1);
    }
}

impl AnnotateArgs {
    fn config(&self) -> AnnotConfig {
        AnnotConfig::default()
            .with_annot_column(self.column.clone())
            .with_keep_meta(!self.drop_meta)
    }

    pub fn run(
        &self,
        utils: &UtilsArgs,
    ) -> anyhow::Result<()> {
        check_input(&self.bed);
        check_input(&self.vcf);

        let index = IntervalIndex::from_bed(
            File::open(&self.bed)
                .with_context(|| format!("Failed to open {}", self.bed.display()))?,
        )
        .with_context(|| {
            format!("Failed to read intervals from {}", self.bed.display())
        })?;
        info!(
            "Loaded {} intervals on {} chromosomes",
            index.len(),
            index.n_chr()
        );

        let config = self.config();
        let mut reader = VcfReader::try_new(
            File::open(&self.vcf)
                .with_context(|| format!("Failed to open {}", self.vcf.display()))?,
            &config,
        )
        .with_context(|| format!("Failed to read header of {}", self.vcf.display()))?;
        let records = reader
            .read_all()
            .with_context(|| format!("Failed to read records of {}", self.vcf.display()))?;

        info!("Annotating on {} threads", n_threads());
        let records = Annotator::new(&index)
            .annotate_par(records)
            .with_context(|| format!("Failed to annotate {}", self.vcf.display()))?;

        let sink = BufWriter::new(
            File::create(&self.output)
                .with_context(|| format!("Failed to create {}", self.output.display()))?,
        );
        let mut writer = VcfWriter::try_new(sink, reader.header(), config)?;

        let progress_bar = if utils.progress {
            init_pbar(records.len())?
        }
        else {
            ProgressBar::hidden()
        };
        for record in records.iter() {
            writer.write_record(record)?;
            progress_bar.inc(1);
        }
        writer
            .finish()
            .with_context(|| format!("Failed to write {}", self.output.display()))?;
        progress_bar.finish_and_clear();

        let summary = AnnotationSummary::from_records(&records);
        if let Some(path) = &self.summary {
            let file = File::create(path)
                .with_context(|| format!("Failed to create {}", path.display()))?;
            serde_json::to_writer_pretty(file, &summary)?;
        }

        println!(
            "{}",
            style(format!(
                "Annotated {} records ({} with features, {} without).",
                summary.total, summary.annotated, summary.missing
            ))
            .green()
            .bold()
        );
        Ok(())
    }
}
