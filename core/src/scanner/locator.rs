//! Scanner Locator - picks the first scanner candidate that exists

use crate::config::ScanConfig;
use crate::error::{Result, ScanError};
use std::path::PathBuf;
use tracing::debug;

/// Ordered list of places the scanner may live. First match wins.
#[derive(Debug, Clone)]
pub struct ScannerLocator {
    candidates: Vec<PathBuf>,
}

impl ScannerLocator {
    pub fn new(candidates: Vec<PathBuf>) -> Self {
        Self { candidates }
    }

    pub fn from_config(config: &ScanConfig) -> Self {
        Self::new(config.scanner_candidates())
    }

    /// Return the first candidate present on the filesystem
    pub fn locate(&self) -> Result<PathBuf> {
        for candidate in &self.candidates {
            if candidate.exists() {
                debug!(scanner = %candidate.display(), "located scanner");
                return Ok(candidate.clone());
            }
            debug!(candidate = %candidate.display(), "scanner candidate missing");
        }

        Err(ScanError::ScannerNotFound {
            searched: self.candidates.clone(),
        })
    }
}
