//! Errors that abort a scan run before any skill is scanned

use std::path::PathBuf;
use thiserror::Error;

/// Setup failures. Per-skill failures are never surfaced here; they become
/// synthetic [`SkillScan`](crate::SkillScan) records instead.
#[derive(Error, Debug)]
pub enum ScanError {
    #[error("security scanner not found (searched: {})", join_paths(.searched))]
    ScannerNotFound { searched: Vec<PathBuf> },

    #[error("Skills directory not found: {}", .0.display())]
    SkillsDirNotFound(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ScanError>;

fn join_paths(paths: &[PathBuf]) -> String {
    if paths.is_empty() {
        return "no candidates".to_string();
    }

    paths
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
