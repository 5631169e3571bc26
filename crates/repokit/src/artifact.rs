//! Artifacts and artifact sets
//!
//! An artifact is a relative output path plus the exact text to put there.
//! The text is opaque: nothing here parses or validates it.

use std::borrow::Cow;
use std::collections::HashSet;
use std::path::{Component, Path, PathBuf};

use crate::emitter::EmitError;

/// A single file to be written
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    /// Path relative to the output root
    pub path: PathBuf,
    /// Full file content, written verbatim
    pub content: Cow<'static, str>,
}

impl Artifact {
    pub fn new(path: impl Into<PathBuf>, content: impl Into<Cow<'static, str>>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }

    /// Content length in bytes
    pub fn len(&self) -> usize {
        self.content.len()
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}

/// Check that a path is non-empty, relative, and stays under its root
pub fn validate_path(path: &Path) -> Result<(), EmitError> {
    if path.as_os_str().is_empty() {
        return Err(EmitError::InvalidPath(path.to_path_buf()));
    }

    for component in path.components() {
        match component {
            Component::Normal(_) | Component::CurDir => {}
            Component::ParentDir | Component::RootDir | Component::Prefix(_) => {
                return Err(EmitError::InvalidPath(path.to_path_buf()));
            }
        }
    }

    // Components drop a trailing separator, so "docs/" would pass as "docs"
    let raw = path.to_string_lossy();
    if raw.ends_with('/') || raw.ends_with(std::path::MAIN_SEPARATOR) {
        return Err(EmitError::InvalidPath(path.to_path_buf()));
    }

    // "." or "./." names the root itself, not a file
    if path.components().all(|c| c == Component::CurDir) {
        return Err(EmitError::InvalidPath(path.to_path_buf()));
    }

    Ok(())
}

/// Normalized form used for duplicate detection ("./a" and "a" are the same file)
fn normalized(path: &Path) -> PathBuf {
    path.components()
        .filter(|c| *c != Component::CurDir)
        .collect()
}

/// An ordered set of artifacts, each path appearing at most once
#[derive(Debug, Clone, Default)]
pub struct ArtifactSet {
    artifacts: Vec<Artifact>,
    seen: HashSet<PathBuf>,
}

impl ArtifactSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an artifact, rejecting invalid or repeated paths
    pub fn push(&mut self, artifact: Artifact) -> Result<(), EmitError> {
        validate_path(&artifact.path)?;

        let key = normalized(&artifact.path);
        if !self.seen.insert(key) {
            return Err(EmitError::DuplicatePath(artifact.path));
        }

        self.artifacts.push(artifact);
        Ok(())
    }

    /// Add every artifact from an iterator, stopping at the first rejection
    pub fn extend<I>(&mut self, artifacts: I) -> Result<(), EmitError>
    where
        I: IntoIterator<Item = Artifact>,
    {
        for artifact in artifacts {
            self.push(artifact)?;
        }
        Ok(())
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Artifact> {
        self.artifacts.iter()
    }

    pub fn len(&self) -> usize {
        self.artifacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.artifacts.is_empty()
    }

    /// Look up an artifact by its declared path
    pub fn get(&self, path: &Path) -> Option<&Artifact> {
        let key = normalized(path);
        self.artifacts.iter().find(|a| normalized(&a.path) == key)
    }
}

impl<'a> IntoIterator for &'a ArtifactSet {
    type Item = &'a Artifact;
    type IntoIter = std::slice::Iter<'a, Artifact>;

    fn into_iter(self) -> Self::IntoIter {
        self.artifacts.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_path() {
        assert!(validate_path(Path::new("LICENSE")).is_ok());
        assert!(validate_path(Path::new(".github/workflows/deploy.yml")).is_ok());
        assert!(validate_path(Path::new("./SECURITY.md")).is_ok());

        assert!(validate_path(Path::new("")).is_err());
        assert!(validate_path(Path::new(".")).is_err());
        assert!(validate_path(Path::new("/etc/passwd")).is_err());
        assert!(validate_path(Path::new("../outside.txt")).is_err());
        assert!(validate_path(Path::new("docs/../../outside.txt")).is_err());
    }

    #[test]
    fn test_validate_path_rejects_trailing_slash() {
        assert!(matches!(
            validate_path(Path::new("f/")),
            Err(EmitError::InvalidPath(_))
        ));
        assert!(validate_path(Path::new(".github/ISSUE_TEMPLATE/")).is_err());
        assert!(validate_path(Path::new("./")).is_err());

        let mut set = ArtifactSet::new();
        let err = set.push(Artifact::new("docs/", "x")).unwrap_err();
        assert!(matches!(err, EmitError::InvalidPath(_)));
        assert!(set.is_empty());
    }

    #[test]
    fn test_set_keeps_declaration_order() {
        let mut set = ArtifactSet::new();
        set.push(Artifact::new("b.txt", "b")).unwrap();
        set.push(Artifact::new("a.txt", "a")).unwrap();
        set.push(Artifact::new("c/d.txt", "")).unwrap();

        let paths: Vec<_> = set.iter().map(|a| a.path.clone()).collect();
        assert_eq!(
            paths,
            vec![
                PathBuf::from("b.txt"),
                PathBuf::from("a.txt"),
                PathBuf::from("c/d.txt")
            ]
        );
    }

    #[test]
    fn test_set_rejects_duplicates() {
        let mut set = ArtifactSet::new();
        set.push(Artifact::new("LICENSE", "first")).unwrap();

        let err = set.push(Artifact::new("./LICENSE", "second")).unwrap_err();
        assert!(matches!(err, EmitError::DuplicatePath(_)));
        assert_eq!(set.len(), 1);
        assert_eq!(set.get(Path::new("LICENSE")).unwrap().content, "first");
    }

    #[test]
    fn test_set_rejects_invalid_path() {
        let mut set = ArtifactSet::new();
        let err = set.push(Artifact::new("", "x")).unwrap_err();
        assert!(matches!(err, EmitError::InvalidPath(_)));
        assert!(set.is_empty());
    }

    #[test]
    fn test_empty_content_allowed() {
        let artifact = Artifact::new(".nojekyll", "");
        assert!(artifact.is_empty());

        let mut set = ArtifactSet::new();
        set.push(artifact).unwrap();
        assert_eq!(set.len(), 1);
    }
}
