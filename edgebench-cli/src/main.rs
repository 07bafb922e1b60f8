use clap::Parser;
use edgebench::image::io::{load_image, save_image};
use edgebench::{run, Mode, PixelBuffer, RunConfig};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing_subscriber::EnvFilter;

const DEFAULT_TIMING_LOG: &str = "time.txt";

#[derive(Parser, Debug)]
#[command(author, version, about = "Sobel filter benchmark across execution strategies")]
struct Cli {
    /// Execution mode: 0 scalar, 1 buffer, 2 parallel, 3 CUDA, 4 OpenCL.
    mode: String,
    /// Input image path.
    input: PathBuf,
    /// Output image path (format chosen from the extension).
    output: PathBuf,
    /// Worker count for the parallel strategy (default: cores minus one).
    #[arg(long)]
    workers: Option<usize>,
    /// Timing log; total elapsed milliseconds are appended after every run.
    #[arg(long, value_name = "FILE", default_value = DEFAULT_TIMING_LOG)]
    timing_log: PathBuf,
    /// Enable tracing output for performance profiling.
    #[arg(long)]
    trace: bool,
}

/// Appends one elapsed-milliseconds line to the append-only timing log.
fn append_timing(path: &Path, elapsed_ms: u128) -> std::io::Result<()> {
    let mut file = OpenOptions::new().append(true).create(true).open(path)?;
    writeln!(file, "{elapsed_ms}")
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let started = Instant::now();

    // A usage error skips filtering but still leaves a timing record; the
    // log captures every run attempt, successful or not. Help and version
    // requests are not run attempts.
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            err.print()?;
            if matches!(
                err.kind(),
                clap::error::ErrorKind::DisplayHelp | clap::error::ErrorKind::DisplayVersion
            ) {
                std::process::exit(0);
            }
            append_timing(Path::new(DEFAULT_TIMING_LOG), started.elapsed().as_millis())?;
            std::process::exit(2);
        }
    };

    if cli.trace {
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env().add_directive("edgebench=info".parse()?))
            .with_target(false)
            .init();
    }

    let input = load_image(&cli.input)?;
    let mut output = PixelBuffer::zeroed(input.width(), input.height())?;

    let mut config = RunConfig::default();
    if let Some(workers) = cli.workers {
        config.workers = workers;
    }

    match cli.mode.parse::<Mode>() {
        Ok(mode) => {
            println!("running {} sobel", mode.label());
            let elapsed = run(mode, &input, &mut output, &config)?;
            tracing::info!(
                mode = mode.label(),
                elapsed_ms = elapsed.as_millis() as u64,
                "filter complete"
            );
        }
        // An unrecognized mode is reported but does not halt the run: the
        // zero-initialized output buffer is still saved below.
        Err(err) => eprintln!("{err}"),
    }

    save_image(&output, &cli.output)?;
    append_timing(&cli.timing_log, started.elapsed().as_millis())?;

    Ok(())
}
