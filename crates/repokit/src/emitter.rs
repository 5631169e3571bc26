//! Content emitter
//!
//! Writes artifacts under an output root. Each write creates missing parent
//! directories, truncates any existing file, and closes the handle before
//! returning. There is no retry and no rollback: a failure stops the run and
//! leaves earlier files in place.

use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

use crate::artifact::{validate_path, Artifact, ArtifactSet};

/// Errors raised while declaring or writing artifacts
#[derive(Error, Debug)]
pub enum EmitError {
    #[error("Invalid artifact path: {0:?} (must be relative and stay under the output root)")]
    InvalidPath(PathBuf),

    #[error("Artifact path declared twice: {}", .0.display())]
    DuplicatePath(PathBuf),

    #[error("Failed to write {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// A planned write, as reported by a dry run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedWrite {
    pub dest: PathBuf,
    pub bytes: usize,
    pub overwrites: bool,
}

/// Writes artifacts to disk under a fixed root
#[derive(Debug, Clone)]
pub struct Emitter {
    root: PathBuf,
    quiet: bool,
}

impl Emitter {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            quiet: false,
        }
    }

    /// Suppress the confirmation line printed after each write
    pub fn quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    /// Destination on disk for an artifact
    pub fn resolve(&self, artifact: &Artifact) -> Result<PathBuf, EmitError> {
        validate_path(&artifact.path)?;
        Ok(self.root.join(&artifact.path))
    }

    /// Write one artifact, replacing whatever was there
    pub fn emit(&self, artifact: &Artifact) -> Result<PathBuf, EmitError> {
        let dest = self.resolve(artifact)?;

        if let Some(parent) = dest.parent() {
            fs::create_dir_all(parent).map_err(|source| EmitError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        write_file(&dest, artifact.content.as_bytes()).map_err(|source| EmitError::Io {
            path: dest.clone(),
            source,
        })?;

        debug!(path = %dest.display(), bytes = artifact.len(), "artifact written");

        if !self.quiet {
            println!("✅ {} created!", artifact.path.display());
        }

        Ok(dest)
    }

    /// Write every artifact in declaration order, stopping at the first failure
    pub fn emit_all(&self, set: &ArtifactSet) -> Result<Vec<PathBuf>, EmitError> {
        let mut written = Vec::with_capacity(set.len());
        for artifact in set {
            written.push(self.emit(artifact)?);
        }
        Ok(written)
    }

    /// Describe what `emit_all` would do without touching the filesystem
    pub fn plan(&self, set: &ArtifactSet) -> Result<Vec<PlannedWrite>, EmitError> {
        set.iter()
            .map(|artifact| {
                let dest = self.resolve(artifact)?;
                let overwrites = dest.exists();
                Ok(PlannedWrite {
                    dest,
                    bytes: artifact.len(),
                    overwrites,
                })
            })
            .collect()
    }
}

/// Create-or-truncate, write, flush; the handle drops on every path out
fn write_file(path: &Path, bytes: &[u8]) -> io::Result<()> {
    let mut file = File::create(path)?;
    file.write_all(bytes)?;
    file.flush()
}
