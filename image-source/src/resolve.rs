use std::path::{Path, PathBuf};
use path_clean::PathClean;
use serde::Deserialize;
use tracing::{debug, trace};
use crate::error::{ResolveError, Result};

/// Maps a file name hint to a path worth probing, or skips it.
pub type Candidate = Box<dyn Fn(&Path) -> Option<PathBuf> + Send + Sync>;

/// Decides whether a candidate path points at an existing file.
pub type Probe = Box<dyn Fn(&Path) -> bool + Send + Sync>;

/// Directories searched after the working directory, in this order.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct SearchDirs {
    /// Read-only assets shipped with the application.
    pub assets: Option<PathBuf>,
    /// Writable per-user data directory.
    pub data: Option<PathBuf>,
    /// Source-tree assets. Only searched in debug builds.
    pub dev_assets: Option<PathBuf>,
}

/// Resolves an image file name against an ordered list of candidates.
pub struct PathResolver {
    candidates: Vec<Candidate>,
    probe: Probe,
}

impl PathResolver {
    pub fn new(probe: Probe) -> Self {
        Self {
            candidates: Vec::new(),
            probe,
        }
    }

    pub fn with_candidate(mut self, candidate: Candidate) -> Self {
        self.candidates.push(candidate);
        self
    }

    /// Rooted path, working directory, then each configured search directory.
    pub fn standard(dirs: &SearchDirs) -> Self {
        let mut resolver = Self::new(Box::new(Path::is_file))
            .with_candidate(rooted())
            .with_candidate(working_dir());

        if let Some(assets) = &dirs.assets {
            resolver = resolver.with_candidate(under(assets.clone()));
        }
        if let Some(data) = &dirs.data {
            resolver = resolver.with_candidate(under(data.clone()));
        }
        if cfg!(debug_assertions) {
            if let Some(dev_assets) = &dirs.dev_assets {
                resolver = resolver.with_candidate(under(dev_assets.clone()));
            }
        }
        resolver
    }

    pub fn resolve(&self, hint: &str) -> Result<PathBuf> {
        if hint.is_empty() {
            return Err(ResolveError::EmptyHint);
        }

        let hint_path = Path::new(hint);
        for candidate in &self.candidates {
            let Some(path) = candidate(hint_path) else {
                continue;
            };
            trace!("Probing {}", path.display());
            if (self.probe)(path.as_path()) {
                debug!("Resolved {} to {}", hint, path.display());
                return Ok(path);
            }
        }

        Err(ResolveError::NotFound(hint.to_owned()))
    }
}

/// The hint itself, when it's already an absolute path.
pub fn rooted() -> Candidate {
    Box::new(|hint: &Path| hint.is_absolute().then(|| hint.to_path_buf()))
}

/// The hint relative to the process working directory, made absolute.
pub fn working_dir() -> Candidate {
    Box::new(|hint: &Path| {
        let cwd = std::env::current_dir().ok()?;
        Some(cwd.join(hint).clean())
    })
}

/// The hint joined onto a fixed directory.
pub fn under(dir: PathBuf) -> Candidate {
    Box::new(move |hint: &Path| Some(dir.join(hint)))
}
