use assert_cmd::Command;
use assert_fs::TempDir;
use rstest::fixture;
use std::path::Path;

#[fixture]
pub fn source_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp source dir")
}

#[fixture]
pub fn output_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp output dir")
}

pub fn chunker_binary() -> Command {
    Command::cargo_bin("chunker").expect("Failed to find chunker binary")
}

pub fn run_chunker_command(
    source: &Path,
    output: &Path,
    chunk_size: usize,
    extension: &str,
) -> Command {
    let mut command = chunker_binary();
    command
        .arg("--source")
        .arg(source)
        .arg("--output")
        .arg(output)
        .arg("--chunk")
        .arg(chunk_size.to_string())
        .arg("--extension")
        .arg(extension);
    command
}
