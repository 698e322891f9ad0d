pub mod list;

use std::io;
use std::path::PathBuf;

use thiserror::Error;

pub use list::resolve_list;

#[derive(Error, Debug)]
pub enum InputError {
    #[error("{kind} input is neither a comma-separated list nor an existing .txt file: {value:?}")]
    InvalidFormat { kind: InputKind, value: String },
    #[error("{kind} list file contains no entries: {}", .path.display())]
    EmptyFile { kind: InputKind, path: PathBuf },
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    Gene,
    Panel,
}

impl std::fmt::Display for InputKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InputKind::Gene => write!(f, "gene symbol"),
            InputKind::Panel => write!(f, "panel id"),
        }
    }
}
