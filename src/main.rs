use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use framematch_rs::image_pipeline::{SequenceConfig, SequenceDriver};
use framematch_rs::logger;

use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "framematch")]
#[command(version, about = "Match the color distribution of every frame in a sequence to its first frame", long_about = None)]
struct Cli {
    /// Width of the zero-padded frame index
    #[arg(long, value_name = "N", default_value_t = 5)]
    digits: usize,

    /// Index of the reference frame
    #[arg(long, value_name = "INDEX", default_value_t = 1)]
    start: usize,

    /// Number of frames, reference included
    #[arg(long, value_name = "N", default_value_t = 20505)]
    count: usize,

    /// Filename prefix
    #[arg(long, default_value = "Frame")]
    prefix: String,

    /// Filename extension, including the dot
    #[arg(long, default_value = ".png")]
    ext: String,

    /// Directory holding the input frames
    #[arg(short, long, value_name = "DIR", default_value = ".")]
    input_dir: PathBuf,

    /// Existing directory for the matched frames
    #[arg(short, long, value_name = "DIR", default_value = "processed")]
    output_dir: PathBuf,

    /// Number of parallel threads
    #[arg(short = 'j', long, value_name = "N")]
    threads: Option<usize>,

    /// Enable debug output with per-stage spans
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logger::init(if cli.verbose { "debug" } else { "info" });

    info!("Starting framematch...");

    let config = SequenceConfig::builder()
        .digit_count(cli.digits)
        .start_frame(cli.start)
        .frame_count(cli.count)
        .prefix(cli.prefix)
        .extension(cli.ext)
        .input_dir(&cli.input_dir)
        .output_dir(&cli.output_dir)
        .threads(cli.threads)
        .build();
    let driver = SequenceDriver::new(config).context("invalid configuration")?;

    info!(
        "Frames {}..={} from {} into {}",
        driver.config().start_frame,
        driver.config().start_frame + driver.config().frame_count - 1,
        driver.config().input_dir.display(),
        driver.config().output_dir.display()
    );

    let summary = driver.run().context("histogram matching aborted")?;

    if !summary.is_complete() {
        warn!(
            "{} frame(s) produced no output: {:?}",
            summary.failed.len(),
            summary.failed_indices()
        );
    }
    info!("Wrote {} frame(s)", summary.written.len());

    Ok(())
}
