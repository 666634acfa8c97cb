//! Command line front end: compresses or decompresses one file at a time.
mod progress;

use std::ffi::OsString;
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::{Path, PathBuf};

use clap::{ArgAction, Parser, Subcommand};
use color_eyre::eyre::{bail, WrapErr};
use progress::{fmt_size, ProgressMonitor};
use tracing::{info, level_filters::LevelFilter};
use tracing_indicatif::IndicatifLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Suffix appended to compressed files.
const EXTENSION: &str = "huff";

#[derive(Parser)]
#[command(version, about = "Static Huffman compression")]
struct Cli {
    /// Log more details, repeat for even more
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compress a file
    Compress {
        input: PathBuf,
        /// Defaults to the input path with `.huff` appended, `-` writes to stdout
        output: Option<PathBuf>,
    },
    /// Decompress a file produced by `compress`
    Decompress {
        input: PathBuf,
        /// Defaults to the input path without `.huff` (or with `.out` appended),
        /// `-` writes to stdout
        output: Option<PathBuf>,
    },
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Compress { input, output } => {
            let output = output.unwrap_or_else(|| compressed_path(&input));
            compress(&input, &output)
        }
        Commands::Decompress { input, output } => {
            let output = output.unwrap_or_else(|| decompressed_path(&input));
            decompress(&input, &output)
        }
    }
}

fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => LevelFilter::INFO,
        1 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };
    let indicatif_layer = IndicatifLayer::new();
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(indicatif_layer.get_stderr_writer())
                .with_target(false),
        )
        .with(indicatif_layer)
        .with(level)
        .init();
}

fn compress(input: &Path, output: &Path) -> color_eyre::Result<()> {
    if is_stdout(output) && console::Term::stdout().is_term() {
        bail!("refusing to write compressed data to a terminal, pass an output path");
    }
    let data = read_input(input)?;
    let compressed = huffpack::encode(&data);
    write_output(output, &compressed)?;
    info!(
        "compressed {} to {} ({:.1}% of the original size)",
        fmt_size(data.len() as f64),
        fmt_size(compressed.len() as f64),
        ratio(compressed.len(), data.len())
    );
    Ok(())
}

fn decompress(input: &Path, output: &Path) -> color_eyre::Result<()> {
    let data = read_input(input)?;
    // the output is only touched once the whole input decoded
    let decompressed = huffpack::decode(&data)
        .wrap_err_with(|| format!("failed to decompress {}", input.display()))?;
    write_output(output, &decompressed)?;
    info!(
        "decompressed {} to {} (compressed data was {:.1}% of the output size)",
        fmt_size(data.len() as f64),
        fmt_size(decompressed.len() as f64),
        ratio(data.len(), decompressed.len())
    );
    Ok(())
}

fn read_input(path: &Path) -> color_eyre::Result<Vec<u8>> {
    let file = File::open(path)
        .wrap_err_with(|| format!("failed to open {}", path.display()))?;
    let size = file
        .metadata()
        .wrap_err_with(|| format!("failed to stat {}", path.display()))?
        .len() as usize;

    let mut data = Vec::with_capacity(size);
    ProgressMonitor::new(BufReader::new(file), size)
        .read_to_end(&mut data)
        .wrap_err_with(|| format!("failed to read {}", path.display()))?;
    Ok(data)
}

fn write_output(path: &Path, bytes: &[u8]) -> color_eyre::Result<()> {
    let mut sink: Box<dyn Write> = if is_stdout(path) {
        Box::new(BufWriter::new(std::io::stdout().lock()))
    } else {
        let file = File::create(path)
            .wrap_err_with(|| format!("failed to create {}", path.display()))?;
        Box::new(BufWriter::new(file))
    };
    sink.write_all(bytes)
        .and_then(|()| sink.flush())
        .wrap_err_with(|| format!("failed to write {}", path.display()))
}

fn is_stdout(path: &Path) -> bool {
    path.as_os_str() == "-"
}

/// `data.bin` -> `data.bin.huff`
fn compressed_path(input: &Path) -> PathBuf {
    let mut name = OsString::from(input.as_os_str());
    name.push(".");
    name.push(EXTENSION);
    PathBuf::from(name)
}

/// `data.bin.huff` -> `data.bin`, anything else gets `.out` appended.
fn decompressed_path(input: &Path) -> PathBuf {
    if input.extension().is_some_and(|ext| ext == EXTENSION) {
        return input.with_extension("");
    }
    let mut name = OsString::from(input.as_os_str());
    name.push(".out");
    PathBuf::from(name)
}

/// Compressed size as a percentage of the original size.
fn ratio(compressed: usize, original: usize) -> f64 {
    if original == 0 {
        return 100.0;
    }
    compressed as f64 * 100.0 / original as f64
}
