use anyhow::Result;
use chunker::areas::chunker::{Chunker, ChunkerConfig};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "chunker",
    version = "0.1.0",
    about = "Separate files into chunk directories",
    long_about = "Scans a source directory tree for files with the given extension, \
    sorts them by the numeric value of their file names and copies them into \
    fixed-size chunks, each chunk placed in its own numbered output subdirectory.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
",
)]
struct Cli {
    #[arg(short, long, help = "Source directory to scan")]
    source: PathBuf,

    #[arg(short, long, help = "Output directory receiving the chunk folders")]
    output: PathBuf,

    #[arg(
        short,
        long,
        default_value_t = 100,
        value_parser = clap::value_parser!(u64).range(1..),
        help = "Files per chunk"
    )]
    chunk: u64,

    #[arg(short, long, help = "File extension to match, without the leading dot")]
    extension: String,

    #[arg(short, long, help = "Print progress messages while scanning")]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = ChunkerConfig::new(
        cli.source,
        cli.output,
        cli.chunk as usize,
        cli.extension,
        cli.verbose,
    );
    let chunker = Chunker::new(config, Box::new(std::io::stdout()));

    chunker.chunk()?;

    Ok(())
}
