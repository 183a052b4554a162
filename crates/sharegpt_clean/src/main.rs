//! `sharegpt_clean`: turn a directory of ShareGPT HTML dumps into a cleaned dataset.
mod cli;
mod progress;

use anyhow::{Context, Result};
use clap::Parser;
use engine_logging::engine_info;
use sharegpt_engine::{
    clean_directory, DirectorySource, Html2MdConverter, NoopProgress, Pipeline, ProgressSink,
};

use crate::cli::Cli;
use crate::progress::BarProgress;

fn main() -> Result<()> {
    let cli = Cli::parse();
    engine_logging::initialize(&cli.log_settings());

    if cli.debug {
        return print_first_normalized(&cli);
    }

    engine_info!("cleaning {:?} into {:?}", cli.in_dir, cli.out_file);
    let progress: Box<dyn ProgressSink> = if cli.no_progress {
        Box::new(NoopProgress)
    } else {
        Box::new(BarProgress::new())
    };
    let report = clean_directory(
        &cli.in_dir,
        &cli.out_file,
        cli.clean_options(),
        progress.as_ref(),
    )
    .with_context(|| format!("failed to clean {:?}", cli.in_dir))?;

    println!("{}", report.counters);
    Ok(())
}

/// Diagnostic path: show what normalization makes of the first message, then stop.
fn print_first_normalized(cli: &Cli) -> Result<()> {
    let source = DirectorySource::open(&cli.in_dir)?;
    let pipeline = Pipeline::new(Html2MdConverter, cli.clean_options())?;
    match pipeline.inspect_first(source) {
        Some(text) => println!("{text}"),
        None => eprintln!("no message could be normalized"),
    }
    Ok(())
}
