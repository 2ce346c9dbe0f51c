pub mod bed;
pub mod vcf;
