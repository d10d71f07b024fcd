//! Run configuration
//!
//! There is no configuration file. The CLI fills a [`ScanConfig`] from its
//! flags and environment; everything else uses the defaults below.

use std::path::{Path, PathBuf};
use std::time::Duration;

/// How long a single skill scan may run before it is killed
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(120);

/// Skills root, relative to the working directory
pub const DEFAULT_SKILLS_DIR: &str = "skills";

/// Command used to launch the scanner script
pub const DEFAULT_LAUNCHER: &str = "uv run";

/// Folders under the skills root that are not skills
pub const DEFAULT_EXCLUDED: &[&str] = &["deprecated"];

/// File name of the scanner script
pub const SCANNER_SCRIPT: &str = "security_scan.py";

/// Location of the scanner inside the skill-creator plugin cache, relative to
/// the user's home directory
const PLUGIN_CACHE_SCANNER: &[&str] = &[
    ".claude",
    "plugins",
    "cache",
    "daymade-skills",
    "skill-creator",
    "1.4.0",
    "skill-creator",
    "scripts",
    SCANNER_SCRIPT,
];

#[derive(Debug, Clone)]
pub struct ScanConfig {
    /// Directory whose immediate subdirectories are the skills
    pub skills_dir: PathBuf,

    /// Scanner path checked before the built-in candidates
    pub scanner_override: Option<PathBuf>,

    /// Program and leading arguments placed before the scanner path.
    /// Empty runs the scanner directly.
    pub launcher: Vec<String>,

    /// Per-skill timeout
    pub timeout: Duration,

    /// Folder names skipped during enumeration
    pub excluded: Vec<String>,

    /// Pass `--verbose` to the scanner and echo its finding lines
    pub verbose: bool,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            skills_dir: PathBuf::from(DEFAULT_SKILLS_DIR),
            scanner_override: None,
            launcher: Self::parse_launcher(DEFAULT_LAUNCHER),
            timeout: DEFAULT_TIMEOUT,
            excluded: DEFAULT_EXCLUDED.iter().map(|s| s.to_string()).collect(),
            verbose: false,
        }
    }
}

impl ScanConfig {
    /// Split a launcher command line on whitespace
    pub fn parse_launcher(launcher: &str) -> Vec<String> {
        launcher.split_whitespace().map(str::to_string).collect()
    }

    /// Scanner locations in priority order: the override, the scripts
    /// folder beside the skills root, then the plugin cache under `$HOME`.
    pub fn scanner_candidates(&self) -> Vec<PathBuf> {
        let mut candidates = Vec::new();

        if let Some(path) = &self.scanner_override {
            candidates.push(path.clone());
        }

        let repo_root = self.skills_dir.parent().unwrap_or(Path::new("."));
        candidates.push(repo_root.join("scripts").join(SCANNER_SCRIPT));

        if let Some(home) = dirs::home_dir() {
            candidates.push(PLUGIN_CACHE_SCANNER.iter().fold(home, |p, c| p.join(c)));
        }

        candidates
    }
}
