//! Skill Enumerator - discovers skill directories under the skills root

use crate::config::{ScanConfig, DEFAULT_EXCLUDED};
use crate::error::{Result, ScanError};
use std::collections::HashSet;
use std::path::PathBuf;
use tracing::debug;
use walkdir::WalkDir;

/// Prefix marking hidden entries
const HIDDEN_PREFIX: char = '.';

#[derive(Debug, Clone)]
pub struct SkillEnumerator {
    root: PathBuf,
    excluded: HashSet<String>,
}

impl SkillEnumerator {
    /// Enumerator over `root` with the default exclusion set
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            excluded: DEFAULT_EXCLUDED.iter().map(|s| s.to_string()).collect(),
        }
    }

    pub fn from_config(config: &ScanConfig) -> Self {
        Self::new(&config.skills_dir).with_excluded(config.excluded.iter().cloned())
    }

    /// Add folder names to skip
    pub fn with_excluded<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.excluded.extend(names.into_iter().map(Into::into));
        self
    }

    /// Whether a directory with this name counts as a skill
    pub fn is_eligible(&self, name: &str) -> bool {
        !name.starts_with(HIDDEN_PREFIX) && !self.excluded.contains(name)
    }

    /// Immediate subdirectories of the root, sorted by name
    pub fn enumerate(&self) -> Result<Vec<PathBuf>> {
        if !self.root.is_dir() {
            return Err(ScanError::SkillsDirNotFound(self.root.clone()));
        }

        let skills: Vec<PathBuf> = WalkDir::new(&self.root)
            .min_depth(1)
            .max_depth(1)
            .follow_links(true)
            .sort_by_file_name()
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_dir())
            .filter(|e| self.is_eligible(&e.file_name().to_string_lossy()))
            .map(|e| e.into_path())
            .collect();

        debug!(root = %self.root.display(), count = skills.len(), "enumerated skills");

        Ok(skills)
    }
}
