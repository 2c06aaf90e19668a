use crate::areas::workspace::Workspace;
use derive_new::new;
use std::cell::{RefCell, RefMut};
use std::path::PathBuf;

/// Immutable run configuration, built once from the parsed CLI arguments and
/// passed around by reference.
#[derive(Debug, Clone, new)]
pub struct ChunkerConfig {
    pub source: PathBuf,
    pub output: PathBuf,
    pub chunk_size: usize,
    pub extension: String,
    pub verbose: bool,
}

pub struct Chunker {
    config: ChunkerConfig,
    workspace: Workspace,
    writer: RefCell<Box<dyn std::io::Write>>,
}

impl Chunker {
    pub fn new(config: ChunkerConfig, writer: Box<dyn std::io::Write>) -> Self {
        let workspace = Workspace::new(config.source.clone().into_boxed_path());

        Chunker {
            config,
            workspace,
            writer: RefCell::new(writer),
        }
    }

    pub fn config(&self) -> &ChunkerConfig {
        &self.config
    }

    pub fn workspace(&self) -> &Workspace {
        &self.workspace
    }

    pub fn writer(&'_ self) -> RefMut<'_, Box<dyn std::io::Write>> {
        self.writer.borrow_mut()
    }
}
