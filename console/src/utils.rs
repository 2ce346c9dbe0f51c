use clap::Args;
use geneannot::utils::NUM_THREADS_ENV;
use indicatif::{
    ProgressBar,
    ProgressStyle,
};
use log::LevelFilter;

#[derive(Args, Debug, Clone)]
pub(crate) struct UtilsArgs {
    #[arg(
        long,
        help_heading = "UTILS",
        help = "Number of worker threads. Defaults to the number of CPUs."
    )]
    pub threads:  Option<usize>,
    #[arg(
        long,
        default_value_t = false,
        help_heading = "UTILS",
        help = "Display progress bar."
    )]
    pub progress: bool,
    #[arg(
        short,
        long,
        action = clap::ArgAction::Count,
        help_heading = "UTILS",
        help = "Increase logging verbosity (-v info, -vv debug, -vvv trace). \
                RUST_LOG is used when not set."
    )]
    pub verbose:  u8,
}

impl UtilsArgs {
    /// Configures the worker pool size and the logger.
    ///
    /// Must run before the library touches its thread pool.
    pub fn setup(&self) -> anyhow::Result<()> {
        if let Some(threads) = self.threads {
            std::env::set_var(NUM_THREADS_ENV, threads.to_string());
        }

        if self.verbose == 0 {
            pretty_env_logger::try_init()?;
        }
        else {
            pretty_env_logger::formatted_builder()
                .filter_level(self.level())
                .try_init()?;
        }
        Ok(())
    }

    fn level(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }
}

pub fn init_pbar(total: usize) -> anyhow::Result<ProgressBar> {
    let progress_bar = ProgressBar::new(total as u64);
    progress_bar.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}, ETA: {eta}] [{bar:40.cyan/blue}] {pos:>5.green}/{len:5} {msg}")?
            .progress_chars("#>-"),
    );
    progress_bar.set_message("Writing...");
    Ok(progress_bar)
}
