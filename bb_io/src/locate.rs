//! Locating the brew executable.
//!
//! Homebrew lives in different prefixes depending on the platform, and GUI
//! launched processes often start with a minimal `PATH`. Candidates are
//! probed in order on first use and the answer is kept for the lifetime of
//! the locator.

use std::path::{Path, PathBuf};
use std::sync::OnceLock;

/// Install locations probed by default, most specific first.
pub const DEFAULT_BREW_PATHS: &[&str] = &[
    "/opt/homebrew/bin/brew",
    "/usr/local/bin/brew",
    "/home/linuxbrew/.linuxbrew/bin/brew",
];

/// Fallback resolved through the child's `PATH`.
pub const BARE_BREW: &str = "brew";

/// One probing step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Candidate {
    /// Used if a file exists at this path
    Absolute(PathBuf),
    /// Always accepted; left to `PATH` lookup at spawn time
    Bare(String),
}

#[derive(Debug, Clone)]
pub struct BrewLocator {
    candidates: Vec<Candidate>,
    resolved: OnceLock<PathBuf>,
}

impl BrewLocator {
    pub fn new(candidates: Vec<Candidate>) -> Self {
        Self {
            candidates,
            resolved: OnceLock::new(),
        }
    }

    /// Skip probing and always use `path`.
    pub fn explicit(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let resolved = OnceLock::new();
        let _ = resolved.set(path.clone());
        Self {
            candidates: vec![Candidate::Absolute(path)],
            resolved,
        }
    }

    /// Path to run, probing on the first call only.
    pub fn resolve(&self) -> &Path {
        self.resolved.get_or_init(|| self.probe())
    }

    /// Human-readable list of what was (or would be) tried.
    pub fn tried(&self) -> Vec<String> {
        self.candidates
            .iter()
            .map(|c| match c {
                Candidate::Absolute(p) => p.display().to_string(),
                Candidate::Bare(name) => name.clone(),
            })
            .collect()
    }

    fn probe(&self) -> PathBuf {
        for candidate in &self.candidates {
            match candidate {
                Candidate::Absolute(path) if path.is_file() => {
                    log::debug!("using brew at {}", path.display());
                    return path.clone();
                }
                Candidate::Absolute(_) => {}
                Candidate::Bare(name) => {
                    log::debug!("no brew in known prefixes, falling back to '{}'", name);
                    return PathBuf::from(name);
                }
            }
        }
        PathBuf::from(BARE_BREW)
    }
}

impl Default for BrewLocator {
    fn default() -> Self {
        let mut candidates: Vec<Candidate> = DEFAULT_BREW_PATHS
            .iter()
            .map(|p| Candidate::Absolute(PathBuf::from(p)))
            .collect();
        candidates.push(Candidate::Bare(BARE_BREW.to_string()));
        Self::new(candidates)
    }
}
