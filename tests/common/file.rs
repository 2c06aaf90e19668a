use derive_new::new;
use std::ops::RangeInclusive;
use std::path::{Path, PathBuf};

#[derive(new)]
pub struct FileSpec {
    pub path: PathBuf,
    pub content: String,
}

pub fn write_file(spec: FileSpec) {
    if let Some(parent) = spec.path.parent() {
        std::fs::create_dir_all(parent).expect("Failed to create parent directories");
    }

    std::fs::write(&spec.path, &spec.content).expect("Failed to write file");
}

pub fn write_numbered_files(dir: &Path, range: RangeInclusive<u32>, extension: &str) {
    for n in range {
        write_file(FileSpec::new(
            dir.join(format!("{n}.{extension}")),
            format!("content {n}"),
        ));
    }
}

pub fn count_entries(dir: &Path) -> usize {
    match std::fs::read_dir(dir) {
        Ok(entries) => entries.filter_map(|entry| entry.ok()).count(),
        Err(_) => 0,
    }
}
